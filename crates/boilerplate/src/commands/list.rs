//! List command - show the archetypes a repository serves

use crate::output::print_json;
use anyhow::Result;
use boilerplate_core::Archetype;
use boilerplate_core::repository::{DirRepository, TemplateRepository};
use colored::Colorize;
use std::path::PathBuf;

/// List archetypes, builtin or from a template directory
pub fn run(templates: Option<PathBuf>, json: bool) -> Result<()> {
    let entries: Vec<(String, String)> = match templates {
        Some(dir) => {
            tracing::debug!(dir = %dir.display(), "listing template directory");
            DirRepository::new(dir)
                .archetypes()
                .into_iter()
                .map(|id| (id, String::new()))
                .collect()
        }
        None => Archetype::ALL
            .iter()
            .map(|a| (a.id().to_string(), a.description().to_string()))
            .collect(),
    };

    if json {
        output_json(&entries)
    } else {
        output_human(&entries);
        Ok(())
    }
}

fn output_json(entries: &[(String, String)]) -> Result<()> {
    use serde_json::json;

    let archetypes: Vec<_> = entries
        .iter()
        .map(|(id, description)| json!({ "id": id, "description": description }))
        .collect();

    let output = json!({
        "archetypes": archetypes,
        "count": entries.len(),
    });

    print_json(&serde_json::to_string_pretty(&output)?)?;
    Ok(())
}

fn output_human(entries: &[(String, String)]) {
    if entries.is_empty() {
        println!("{} No archetypes found", "!".yellow());
        return;
    }

    println!("{} Available archetypes:", "→".cyan());
    println!();
    let width = entries.iter().map(|(id, _)| id.len()).max().unwrap_or(0);
    for (id, description) in entries {
        let id = format!("{:width$}", id, width = width);
        println!("  {}  {}", id.bold(), description);
    }
    println!("\n{} Generate one:", "→".cyan());
    println!("  boilerplate gen <archetype> -p ProjectName=<name>");
}
