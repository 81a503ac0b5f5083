//! Template module - placeholder substitution for paths and file content
//!
//! Template trees store project files whose names and bodies contain
//! placeholders. This module turns a template string into its final form
//! against a [`ParameterDictionary`](crate::params::ParameterDictionary).
//!
//! ## Syntax
//!
//! - Placeholders: `{{ProjectName}}` or `{{ ProjectName }}` (spaces optional)
//! - Names are ASCII alphanumerics and `_`
//! - Escape sequences: `\{{literal}}` emits `{{literal}}`
//!
//! Text without `{{` is returned unchanged.

mod engine;
pub mod error;
mod tokenize;

pub use engine::{render, TemplateEngine};
pub use error::TemplateError;

#[cfg(test)]
mod tests;
