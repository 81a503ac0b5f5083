use std::path::PathBuf;
use thiserror::Error;

use crate::template::TemplateError;

#[derive(Error, Debug)]
pub enum BoilerplateError {
    // Archetype errors
    #[error("UNKNOWN_ARCHETYPE: '{id}' is not a known project type (valid: {valid})")]
    UnknownArchetype { id: String, valid: String },

    // Template errors
    #[error("TEMPLATE_SYNTAX: {path}: line {line}: {message}")]
    TemplateSyntax {
        path: PathBuf,
        line: usize,
        message: String,
    },

    #[error("UNDEFINED_PARAMETER: {path}: line {line}: parameter '{key}' is not defined")]
    UndefinedParameter {
        path: PathBuf,
        key: String,
        line: usize,
    },

    #[error("TEMPLATE_ASSET_MISSING: template file '{0}' could not be found")]
    TemplateAssetMissing(PathBuf),

    // Output errors
    #[error("UNSAFE_PATH: template '{template}' resolves to '{resolved}', which leaves the destination directory")]
    UnsafePath { template: PathBuf, resolved: String },

    #[error("PATH_COLLISION: '{path}' is produced by both '{first}' and '{second}'")]
    PathCollision {
        path: PathBuf,
        first: PathBuf,
        second: PathBuf,
    },

    #[error("FILESYSTEM_ERROR: {path}: {source}")]
    Filesystem {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    // Parameter errors
    #[error("PARAMS_INVALID: {0}")]
    ParamsInvalid(String),

    #[error("MISSING_PARAMETERS: required parameters not provided: {}", .0.join(", "))]
    MissingParameters(Vec<String>),
}

impl BoilerplateError {
    /// Attach the template path that produced a template error
    pub fn from_template(path: impl Into<PathBuf>, err: TemplateError) -> Self {
        let path = path.into();
        match err {
            TemplateError::UndefinedKey { key, line } => {
                BoilerplateError::UndefinedParameter { path, key, line }
            }
            TemplateError::MalformedSyntax { message, line } => {
                BoilerplateError::TemplateSyntax {
                    path,
                    line,
                    message,
                }
            }
            err @ TemplateError::NonScalarValue { .. } => BoilerplateError::TemplateSyntax {
                path,
                line: err.line(),
                message: err.to_string(),
            },
        }
    }

    /// Wrap an I/O failure with the path it happened on
    pub fn filesystem(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        BoilerplateError::Filesystem {
            path: path.into(),
            source,
        }
    }
}

pub type Result<T> = std::result::Result<T, BoilerplateError>;
