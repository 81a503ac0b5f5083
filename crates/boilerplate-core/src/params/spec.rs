//! Parameter schema per archetype

use serde::Serialize;

/// One parameter an archetype's templates expect
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ParamSpec {
    pub name: &'static str,
    pub description: &'static str,
    /// Value used when the caller supplies none
    pub default: Option<&'static str>,
    /// Required parameters without a default must be supplied by the caller
    pub required: bool,
}

impl ParamSpec {
    pub const fn required(name: &'static str, description: &'static str) -> Self {
        Self {
            name,
            description,
            default: None,
            required: true,
        }
    }

    pub const fn with_default(
        name: &'static str,
        description: &'static str,
        default: &'static str,
    ) -> Self {
        Self {
            name,
            description,
            default: Some(default),
            required: true,
        }
    }

    pub const fn optional(name: &'static str, description: &'static str) -> Self {
        Self {
            name,
            description,
            default: None,
            required: false,
        }
    }
}

/// Parameters shared by every archetype
pub(crate) const COMMON: &[ParamSpec] = &[
    ParamSpec::required("ProjectName", "Project name (also the output directory name)"),
    ParamSpec::required("ProjectPackage", "Module path, e.g. github.com/you/project"),
    ParamSpec::with_default("ProjectShortDesc", "One line project description", "A new project"),
    ParamSpec::optional("ProjectLongDesc", "Longer project description"),
    ParamSpec::required("MaintainerName", "Maintainer name"),
    ParamSpec::required("MaintainerEmail", "Maintainer email address"),
    ParamSpec::with_default("ProjectVersion", "Initial project version", "0.1.0"),
    ParamSpec::with_default("GolangVersion", "Go toolchain version", "1.22"),
];

/// Parameters for long-running service archetypes
pub(crate) const SERVICE: &[ParamSpec] = &[
    ParamSpec::with_default("DefaultServerPort", "Default server port", "8080"),
    ParamSpec::optional("ServerShortDesc", "Server command description (defaults to ProjectShortDesc)"),
    ParamSpec::optional("ServerLongDesc", "Server command long description (defaults to ProjectLongDesc)"),
    ParamSpec::with_default("OwnerName", "Owner or organization name", "you"),
    ParamSpec::with_default("OwnerEmail", "Owner or organization email address", "code@example.com"),
];
