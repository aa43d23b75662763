//! Rules command - inspect the stored custom rule list.

use std::path::PathBuf;

use colored::Colorize;
use patlint::RuleStore;

use crate::store::JsonRuleStore;

pub fn list(rules: PathBuf, json: bool) -> Result<i32, Box<dyn std::error::Error>> {
    let rule_list = JsonRuleStore::new(rules).load()?;

    if json {
        println!("{}", serde_json::to_string_pretty(&rule_list)?);
        return Ok(0);
    }

    if rule_list.is_empty() {
        println!("No rules stored.");
        return Ok(0);
    }

    for rule in &rule_list {
        let state = if rule.enabled {
            "enabled ".green()
        } else {
            "disabled".dimmed()
        };
        let kind = if rule.is_regex { "regex" } else { "text" };
        let category = if rule.category.is_empty() {
            String::new()
        } else {
            format!(" [{}]", rule.category)
        };

        println!(
            "{} {:5} {}{}  {}",
            state,
            kind,
            rule.name.bold(),
            category.dimmed(),
            rule.pattern
        );
    }

    Ok(0)
}

pub fn check(rules: PathBuf) -> Result<i32, Box<dyn std::error::Error>> {
    let rule_list = JsonRuleStore::new(rules).load()?;

    let mut bad = 0usize;
    for rule in rule_list.iter().filter(|r| r.is_regex) {
        if let Err(e) = rule.compiled_pattern() {
            println!("{} {}", "invalid".red().bold(), e);
            bad += 1;
        }
    }

    if bad == 0 {
        println!("{}", "All rule patterns compile.".green());
        Ok(0)
    } else {
        Ok(1)
    }
}
