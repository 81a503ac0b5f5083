//! Template error types

use std::fmt;

/// Template rendering errors
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TemplateError {
    /// Key not found in the parameter dictionary
    UndefinedKey {
        /// The key that was not found
        key: String,
        /// Line number where the error occurred
        line: usize,
    },

    /// Malformed template syntax
    MalformedSyntax {
        /// Error message
        message: String,
        /// Line number where the error occurred
        line: usize,
    },

    /// Parameter holds an array or table
    NonScalarValue {
        /// The key that resolved to a non-scalar
        key: String,
        /// Line number where the error occurred
        line: usize,
    },
}

impl TemplateError {
    /// Line the error points at
    pub fn line(&self) -> usize {
        match self {
            TemplateError::UndefinedKey { line, .. }
            | TemplateError::MalformedSyntax { line, .. }
            | TemplateError::NonScalarValue { line, .. } => *line,
        }
    }
}

impl fmt::Display for TemplateError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TemplateError::UndefinedKey { key, line } => {
                write!(f, "Undefined key '{}' at line {}", key, line)
            }
            TemplateError::MalformedSyntax { message, line } => {
                write!(f, "Malformed syntax at line {}: {}", line, message)
            }
            TemplateError::NonScalarValue { key, line } => {
                write!(
                    f,
                    "Parameter '{}' at line {} is not a scalar value (string, number or boolean)",
                    key, line
                )
            }
        }
    }
}

impl std::error::Error for TemplateError {}
