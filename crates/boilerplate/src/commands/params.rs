//! Params command - describe the parameters of an archetype

use crate::output::print_json;
use anyhow::Result;
use boilerplate_core::{Archetype, ParamSpec};
use colored::Colorize;

pub fn run(archetype: &str, json: bool) -> Result<()> {
    let archetype: Archetype = archetype.parse()?;
    let specs = archetype.parameters();

    if json {
        let output = serde_json::json!({
            "archetype": archetype,
            "parameters": specs,
        });
        print_json(&serde_json::to_string_pretty(&output)?)?;
    } else {
        output_human(archetype, &specs);
    }

    Ok(())
}

fn output_human(archetype: Archetype, specs: &[ParamSpec]) {
    println!("{} Parameters for '{}':", "→".cyan(), archetype);
    println!();

    for spec in specs {
        let note = match (spec.default, spec.required) {
            (Some(default), _) => format!("[default: {}]", default),
            (None, true) => "required".red().to_string(),
            (None, false) => "optional".dimmed().to_string(),
        };
        println!("  {}  {}", spec.name.bold(), note);
        println!("      {}", spec.description);
    }

    println!("\n{} Derived automatically:", "→".cyan());
    println!("  ProjectPackageName, EnvPrefix");
}
