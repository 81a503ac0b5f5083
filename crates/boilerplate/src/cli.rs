//! CLI command structure using clap

use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "boilerplate")]
#[command(version, about = "Generate project skeletons from template trees", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    #[arg(short, long, global = true)]
    pub verbose: bool,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Generate a project from an archetype
    Gen(GenArgs),

    /// List available archetypes
    List {
        /// Read archetypes from a template directory instead of the builtin set
        #[arg(long, env = "BOILERPLATE_TEMPLATES")]
        templates: Option<PathBuf>,

        #[arg(long)]
        json: bool,
    },

    /// Show the parameters an archetype expects
    Params {
        /// Archetype id (e.g. "headless-service")
        archetype: String,

        #[arg(long)]
        json: bool,
    },
}

#[derive(Args, Debug)]
pub struct GenArgs {
    /// Archetype id (e.g. "headless-service")
    #[arg(conflicts_with = "project_type")]
    pub archetype: Option<String>,

    /// Archetype id, as a flag
    #[arg(short = 't', long = "type")]
    pub project_type: Option<String>,

    /// Directory the project is generated into [default: current directory]
    #[arg(short, long)]
    pub dest: Option<PathBuf>,

    /// Parameter override, repeatable
    #[arg(short = 'p', long = "param", value_name = "KEY=VALUE")]
    pub params: Vec<String>,

    /// TOML file of parameter values
    #[arg(long)]
    pub params_file: Option<PathBuf>,

    /// Read templates from this directory instead of the builtin set
    #[arg(long, env = "BOILERPLATE_TEMPLATES")]
    pub templates: Option<PathBuf>,

    /// Let later template files replace earlier ones that resolve to the same path
    #[arg(long)]
    pub force_overwrite_collisions: bool,

    /// Resolve everything and print the plan without writing
    #[arg(long)]
    pub dry_run: bool,

    #[arg(long)]
    pub json: bool,
}
