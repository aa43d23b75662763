//! patlint CLI - formal-defect checker for Chinese patent text.

mod cli;
mod commands;
mod store;

use clap::Parser;
use cli::{Cli, Commands, RulesCommand};

fn main() {
    let cli = Cli::parse();

    if cli.verbose {
        tracing_subscriber::fmt()
            .with_env_filter(
                tracing_subscriber::EnvFilter::try_from_default_env()
                    .unwrap_or_else(|_| "patlint=debug".into()),
            )
            .init();
    }

    let result = match cli.command {
        Commands::Analyze {
            file,
            marks,
            rules,
            doc_type,
            json,
        } => commands::analyze::run(file, marks, rules, doc_type, json, cli.verbose),

        Commands::Rules { command } => match command {
            RulesCommand::List { rules, json } => commands::rules::list(rules, json),
            RulesCommand::Check { rules } => commands::rules::check(rules),
        },
    };

    match result {
        Ok(code) => std::process::exit(code),
        Err(e) => {
            eprintln!("Error: {}", e);
            std::process::exit(1);
        }
    }
}
