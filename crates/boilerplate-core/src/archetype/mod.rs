//! Builtin archetype registry

use crate::error::{BoilerplateError, Result};
use crate::params::spec::{COMMON, SERVICE};
use crate::params::ParamSpec;
use serde::Serialize;
use std::fmt;
use std::str::FromStr;

/// A kind of project the builtin templates can generate
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum Archetype {
    Cobra,
    HeadlessService,
    Spa,
    IndirectSelection,
}

impl Archetype {
    pub const ALL: [Archetype; 4] = [
        Archetype::Cobra,
        Archetype::HeadlessService,
        Archetype::Spa,
        Archetype::IndirectSelection,
    ];

    /// Identifier used on the command line
    pub fn id(self) -> &'static str {
        match self {
            Archetype::Cobra => "cobra",
            Archetype::HeadlessService => "headless-service",
            Archetype::Spa => "spa",
            Archetype::IndirectSelection => "indirect-selection",
        }
    }

    /// Directory holding this archetype's template tree
    pub fn template_root(self) -> &'static str {
        match self {
            Archetype::Cobra => "_cobraProject",
            Archetype::HeadlessService => "_headlessServiceProject",
            Archetype::Spa => "_spaProject",
            Archetype::IndirectSelection => "_indirectSelectionProject",
        }
    }

    pub fn description(self) -> &'static str {
        match self {
            Archetype::Cobra => "Command line tool built on the Cobra framework",
            Archetype::HeadlessService => "Headless HTTP service with layered config and graceful shutdown",
            Archetype::Spa => "Single page application served by an embedded Go server",
            Archetype::IndirectSelection => "Service that routes requests to a backend chosen by configuration",
        }
    }

    /// Parameters the templates of this archetype reference
    pub fn parameters(self) -> Vec<ParamSpec> {
        let mut specs = COMMON.to_vec();
        match self {
            Archetype::Cobra | Archetype::Spa => {}
            Archetype::HeadlessService | Archetype::IndirectSelection => {
                specs.extend_from_slice(SERVICE)
            }
        }
        specs
    }

    fn from_id(id: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|a| a.id() == id)
    }
}

impl fmt::Display for Archetype {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.id())
    }
}

impl FromStr for Archetype {
    type Err = BoilerplateError;

    fn from_str(s: &str) -> Result<Self> {
        Self::from_id(s).ok_or_else(|| BoilerplateError::UnknownArchetype {
            id: s.to_string(),
            valid: list_archetypes().join(", "),
        })
    }
}

/// Identifiers of every builtin archetype
pub fn list_archetypes() -> Vec<&'static str> {
    Archetype::ALL.iter().map(|a| a.id()).collect()
}

pub fn is_valid_archetype(id: &str) -> bool {
    Archetype::from_id(id).is_some()
}
