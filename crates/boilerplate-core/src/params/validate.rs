//! Validation for caller-supplied parameters

use crate::error::{BoilerplateError, Result};
use std::path::{Component, Path};

/// Validate a project name
///
/// The project name becomes a directory under the destination, so it must be
/// a single normal path component.
///
/// Blocks:
/// - Empty names
/// - Absolute paths (e.g., `/tmp/foo`, `C:\Windows`)
/// - Parent directory traversal (`..`) and current directory (`.`)
/// - Path separators (multiple components like `foo/bar`)
///
/// # Examples
///
/// ```
/// # use boilerplate_core::params::validate_project_name;
/// assert!(validate_project_name("my-project").is_ok());
/// assert!(validate_project_name("../../../etc/passwd").is_err());
/// assert!(validate_project_name("/tmp/malicious").is_err());
/// assert!(validate_project_name("foo/bar").is_err());
/// ```
pub fn validate_project_name(name: &str) -> Result<()> {
    if name.is_empty() {
        return Err(invalid("project name cannot be empty".to_string()));
    }

    let mut normal_count = 0;
    for component in Path::new(name).components() {
        match component {
            Component::Normal(_) => normal_count += 1,
            Component::Prefix(_) | Component::RootDir => {
                return Err(invalid(format!(
                    "project name cannot be an absolute path: '{}'",
                    name
                )));
            }
            Component::CurDir => {
                return Err(invalid(format!(
                    "project name cannot contain current directory (.): '{}'",
                    name
                )));
            }
            Component::ParentDir => {
                return Err(invalid(format!(
                    "project name cannot contain parent directory (..): '{}'",
                    name
                )));
            }
        }
    }

    if normal_count != 1 || name.contains(['/', '\\']) {
        return Err(invalid(format!(
            "project name must be a single directory name without path separators: '{}'",
            name
        )));
    }

    Ok(())
}

/// Validate a TCP port number
pub fn validate_port(value: &str) -> Result<u16> {
    match value.trim().parse::<u16>() {
        Ok(port) if port > 0 => Ok(port),
        _ => Err(invalid(format!(
            "'{}' is not a valid port (expected 1-65535)",
            value
        ))),
    }
}

fn invalid(reason: String) -> BoilerplateError {
    BoilerplateError::ParamsInvalid(reason)
}
