//! CLI argument definitions using clap.

use clap::{Parser, Subcommand};
use std::path::PathBuf;

use patlint::DocumentType;

/// patlint: formal-defect checker for Chinese patent text
#[derive(Parser)]
#[command(name = "patlint")]
#[command(version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Analyze a patent text file and report formal defects
    Analyze {
        /// Path to the patent text file
        #[arg(value_name = "FILE")]
        file: PathBuf,

        /// Figure-mark legend file (one "numeral - feature" entry per line)
        #[arg(short, long)]
        marks: Option<PathBuf>,

        /// Custom rule file (JSON array of rules)
        #[arg(short, long)]
        rules: Option<PathBuf>,

        /// Skip auto-detection and treat the text as this document type
        #[arg(long)]
        doc_type: Option<DocTypeChoice>,

        /// Output the full report as JSON
        #[arg(long)]
        json: bool,
    },

    /// Manage the custom rule list
    Rules {
        #[command(subcommand)]
        command: RulesCommand,
    },
}

#[derive(Subcommand)]
pub enum RulesCommand {
    /// List stored rules with their enabled state
    List {
        /// Custom rule file (JSON array of rules)
        #[arg(short, long)]
        rules: PathBuf,

        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// Check that every stored regex rule compiles
    Check {
        /// Custom rule file (JSON array of rules)
        #[arg(short, long)]
        rules: PathBuf,
    },
}

/// Document type override for analysis
#[derive(Clone, Copy, Debug)]
pub enum DocTypeChoice {
    Claims,
    Specification,
}

impl From<DocTypeChoice> for DocumentType {
    fn from(choice: DocTypeChoice) -> Self {
        match choice {
            DocTypeChoice::Claims => DocumentType::Claims,
            DocTypeChoice::Specification => DocumentType::Specification,
        }
    }
}

impl std::str::FromStr for DocTypeChoice {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "claims" | "claim" => Ok(DocTypeChoice::Claims),
            "specification" | "spec" => Ok(DocTypeChoice::Specification),
            _ => Err(format!("Unknown document type: {}. Use claims or specification.", s)),
        }
    }
}

impl std::fmt::Display for DocTypeChoice {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            DocTypeChoice::Claims => write!(f, "claims"),
            DocTypeChoice::Specification => write!(f, "specification"),
        }
    }
}
