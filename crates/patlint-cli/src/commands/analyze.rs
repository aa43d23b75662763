//! Analyze command - check a patent text file and report defects.

use std::fs;
use std::path::PathBuf;

use colored::Colorize;
use patlint::{CheckKind, Diagnostic, Patlint, RuleStore, Severity};

use crate::cli::DocTypeChoice;
use crate::store::JsonRuleStore;

pub fn run(
    file: PathBuf,
    marks: Option<PathBuf>,
    rules: Option<PathBuf>,
    doc_type: Option<DocTypeChoice>,
    json: bool,
    verbose: bool,
) -> Result<i32, Box<dyn std::error::Error>> {
    if !file.exists() {
        return Err(format!("File not found: {}", file.display()).into());
    }

    let body = fs::read_to_string(&file)?;
    let legend = match marks {
        Some(path) => Some(fs::read_to_string(&path)?),
        None => None,
    };
    let rule_list = match rules {
        Some(path) => JsonRuleStore::new(path).load()?,
        None => Vec::new(),
    };

    let engine = Patlint::new();
    let report = engine.analyze(
        &body,
        legend.as_deref(),
        &rule_list,
        doc_type.map(Into::into),
    );

    if json {
        println!("{}", serde_json::to_string_pretty(&report)?);
        return Ok(if report.has_errors() { 1 } else { 0 });
    }

    println!(
        "{} {} ({})",
        "Analyzing".cyan().bold(),
        file.display().to_string().white(),
        report.document_type.label()
    );

    if verbose {
        println!(
            "  {} enabled rules loaded",
            rule_list.iter().filter(|r| r.enabled).count()
        );
    }
    println!();

    let sections: [(CheckKind, &[Diagnostic]); 5] = [
        (CheckKind::References, &report.references),
        (CheckKind::Numbering, &report.numbers),
        (CheckKind::FigureMarks, &report.figure_marks),
        (CheckKind::Other, &report.other),
        (CheckKind::Custom, &report.custom),
    ];

    for (kind, diagnostics) in sections {
        if diagnostics.is_empty() {
            continue;
        }

        println!("{} ({})", kind.label().bold(), diagnostics.len());
        for diag in diagnostics {
            print_diagnostic(diag);
        }
        println!();
    }

    let summary = report.summary();
    if report.is_clean() {
        println!("{}", "未发现问题，文本格式良好。".green());
    } else {
        println!(
            "Found {} diagnostics ({} errors, {} warnings, {} info)",
            summary.total.to_string().white().bold(),
            summary.by_severity.error.to_string().red(),
            summary.by_severity.warning.to_string().yellow(),
            summary.by_severity.info.to_string().blue()
        );
    }

    Ok(if report.has_errors() { 1 } else { 0 })
}

fn print_diagnostic(diag: &Diagnostic) {
    let marker = match diag.severity {
        Severity::Error => "error".red().bold(),
        Severity::Warning => "warning".yellow().bold(),
        Severity::Info => "info".blue().bold(),
    };

    let category = diag
        .category
        .as_deref()
        .map(|c| format!(" [{}]", c))
        .unwrap_or_default();

    println!("  {} 第{}行{}: {}", marker, diag.line, category.dimmed(), diag.description);
    println!("    {}", diag.text.dimmed());
    if let Some(suggestion) = &diag.suggestion {
        println!("    {} {}", "建议:".dimmed(), suggestion.dimmed());
    }
}
