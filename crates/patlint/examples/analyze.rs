//! Example: Analyze a patent text file with patlint.
//!
//! Usage:
//!   cargo run --example analyze -- <body_file> [legend_file]

use std::env;
use std::fs;

use patlint::{CheckKind, Patlint, Severity};

fn main() {
    let args: Vec<String> = env::args().collect();

    if args.len() < 2 {
        eprintln!("Usage: cargo run --example analyze -- <body_file> [legend_file]");
        std::process::exit(1);
    }

    let body = match fs::read_to_string(&args[1]) {
        Ok(text) => text,
        Err(e) => {
            eprintln!("Error: cannot read {}: {}", args[1], e);
            std::process::exit(1);
        }
    };
    let legend = args.get(2).map(|path| {
        fs::read_to_string(path).unwrap_or_else(|e| {
            eprintln!("Error: cannot read {}: {}", path, e);
            std::process::exit(1);
        })
    });

    let engine = Patlint::new();
    let report = engine.analyze(&body, legend.as_deref(), &[], None);

    println!("Document type: {}", report.document_type.label());
    println!();

    let sections = [
        (CheckKind::References, &report.references),
        (CheckKind::Numbering, &report.numbers),
        (CheckKind::FigureMarks, &report.figure_marks),
        (CheckKind::Other, &report.other),
    ];

    for (kind, diagnostics) in sections {
        println!("## {} ({})", kind.label(), diagnostics.len());
        for diag in diagnostics {
            let marker = match diag.severity {
                Severity::Error => "E",
                Severity::Warning => "W",
                Severity::Info => "I",
            };
            println!("  [{}] 第{}行: {}", marker, diag.line, diag.description);
            if let Some(suggestion) = &diag.suggestion {
                println!("      建议: {}", suggestion);
            }
        }
        println!();
    }

    let summary = report.summary();
    println!(
        "共 {} 个问题（{} 错误，{} 警告，{} 提示）",
        summary.total, summary.by_severity.error, summary.by_severity.warning, summary.by_severity.info
    );
}
