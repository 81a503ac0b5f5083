//! Gen command - materialize an archetype into a destination directory

use crate::cli::GenArgs;
use crate::output::{print_json, print_paths};
use anyhow::{Result, bail};
use boilerplate_core::materialize::{
    CollisionPolicy, LocalFs, MaterializeConfig, MaterializeReport, Materializer, MemoryFs,
    OutputFs,
};
use boilerplate_core::params::{PROJECT_NAME, validate_port, validate_project_name};
use boilerplate_core::repository::{DirRepository, EmbeddedRepository, TemplateRepository};
use boilerplate_core::{Archetype, BoilerplateError, ParamSpec, ParameterDictionary};
use colored::Colorize;
use std::env;
use std::path::Path;

const SERVER_PORT: &str = "DefaultServerPort";

/// Generate a project
///
/// # Arguments
///
/// * `args` - Parsed `gen` arguments
/// * `verbose` - List every generated path if true
pub fn run(args: GenArgs, verbose: bool) -> Result<()> {
    let Some(archetype) = args.archetype.as_deref().or(args.project_type.as_deref()) else {
        bail!(
            "no project type given; pass one of: {}",
            boilerplate_core::list_archetypes().join(", ")
        );
    };

    let repo: Box<dyn TemplateRepository> = match &args.templates {
        Some(dir) => Box::new(DirRepository::new(dir)),
        None => Box::new(EmbeddedRepository::new()),
    };

    if !repo.is_valid_archetype(archetype) {
        return Err(BoilerplateError::UnknownArchetype {
            id: archetype.to_string(),
            valid: repo.archetypes().join(", "),
        }
        .into());
    }

    let specs = archetype
        .parse::<Archetype>()
        .map(Archetype::parameters)
        .unwrap_or_default();
    let params = collect_params(&specs, args.params_file.as_deref(), &args.params)?;
    validate_params(&params)?;

    let destination = match args.dest {
        Some(dest) => dest,
        None => env::current_dir()?,
    };

    let policy = if args.force_overwrite_collisions {
        CollisionPolicy::LastWriteWins
    } else {
        CollisionPolicy::Error
    };
    let config = MaterializeConfig::default().with_collision_policy(policy);

    tracing::debug!(
        archetype,
        destination = %destination.display(),
        params = params.len(),
        dry_run = args.dry_run,
        "materializing"
    );

    let memory = MemoryFs::new();
    let out: &dyn OutputFs = if args.dry_run { &memory } else { &LocalFs };
    let report = Materializer::new(&*repo, out)
        .with_config(config)
        .materialize(archetype, &destination, &params)?;

    tracing::debug!(
        directories = report.directories.len(),
        files = report.files.len(),
        "materialized"
    );

    if args.json {
        print_report_json(&report, args.dry_run)?;
    } else {
        print_report_human(&report, &params, args.dry_run, verbose);
    }

    Ok(())
}

/// Build the parameter dictionary for a run
///
/// Precedence, lowest first: schema defaults, the params file, `-p`
/// overrides. Every missing required key is reported at once. Derived values
/// fill absent keys next; optional keys still absent become empty strings.
pub fn collect_params(
    specs: &[ParamSpec],
    params_file: Option<&Path>,
    overrides: &[String],
) -> Result<ParameterDictionary> {
    let mut params = ParameterDictionary::new();

    for spec in specs {
        if let Some(default) = spec.default {
            params.insert(spec.name, default);
        }
    }

    if let Some(path) = params_file {
        tracing::debug!(path = %path.display(), "reading params file");
        params.merge(ParameterDictionary::from_file(path)?);
    }

    for assignment in overrides {
        let (key, value) = ParameterDictionary::parse_assignment(assignment)?;
        params.insert(key, value);
    }

    let missing: Vec<String> = specs
        .iter()
        .filter(|spec| spec.required && !params.contains_key(spec.name))
        .map(|spec| spec.name.to_string())
        .collect();
    if !missing.is_empty() {
        return Err(BoilerplateError::MissingParameters(missing).into());
    }

    let mut params = params.with_derived_values();
    for spec in specs.iter().filter(|spec| !spec.required) {
        if !params.contains_key(spec.name) {
            params.insert(spec.name, "");
        }
    }

    Ok(params)
}

/// Check values the templates turn into paths or numbers
fn validate_params(params: &ParameterDictionary) -> Result<()> {
    if let Some(name) = params.get_str(PROJECT_NAME) {
        validate_project_name(name)?;
    }

    if let Some(port) = params.get(SERVER_PORT) {
        let port = match port.as_str() {
            Some(s) => s.to_string(),
            None => port.to_string(),
        };
        validate_port(&port)?;
    }

    Ok(())
}

fn print_report_json(report: &MaterializeReport, dry_run: bool) -> Result<()> {
    use serde_json::json;

    let output = json!({
        "dry_run": dry_run,
        "archetype": report.archetype,
        "destination": report.destination.display().to_string(),
        "directories": report.directories,
        "files": report.files,
    });

    print_json(&serde_json::to_string_pretty(&output)?)?;
    Ok(())
}

fn print_report_human(
    report: &MaterializeReport,
    params: &ParameterDictionary,
    dry_run: bool,
    verbose: bool,
) {
    let project = params.get_str(PROJECT_NAME).unwrap_or("project");

    if dry_run {
        println!(
            "{} Dry run: '{}' would create {} directories and {} files in {}",
            "→".cyan(),
            report.archetype,
            report.directories.len(),
            report.files.len(),
            report.destination.display()
        );
    } else {
        println!(
            "{} Generated {} project '{}' in {}",
            "✓".green().bold(),
            report.archetype,
            project,
            report.destination.display()
        );
    }

    if dry_run || verbose {
        println!();
        print_paths(
            &report.destination,
            report.directories.iter().map(|d| d.as_path()),
            true,
        );
        print_paths(&report.destination, report.files.iter().map(|f| f.as_path()), false);
    }

    if !dry_run {
        println!("\n{} Next steps:", "→".cyan());
        println!("  1. cd {}", report.destination.join(project).display());
        println!("  2. go mod tidy");
        println!("  3. go test ./...");
    }
}
