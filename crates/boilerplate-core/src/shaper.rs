//! Output shaping applied after resolution
//!
//! - Reserved-filename un-masking: template files that would collide with
//!   the generator's own build metadata (`go.mod`, `Cargo.toml`, ...) are
//!   stored with a trailing mask character, dropped on output.
//! - Build-exclusion marker stripping: a marker line keeps template sources
//!   out of the generator's own build and is removed from generated files.

use crate::error::{BoilerplateError, Result};
use crate::params::ParameterDictionary;
use crate::resolve::ResolvedNode;
use crate::template::TemplateEngine;
use std::borrow::Cow;

/// Trailing character masking reserved filenames in template trees
pub const DEFAULT_MASK_CHAR: char = '_';

/// Marker line removed from every generated file
pub const DEFAULT_EXCLUSION_MARKER: &str = "// +build exclude {{ProjectName}}\n";

/// Strip one trailing mask character from a file's name and path
///
/// Returns whether the node was changed. Directories and names consisting
/// only of the mask character are left alone.
pub fn unmask(resolved: &mut ResolvedNode, mask: char) -> bool {
    if resolved.is_dir() {
        return false;
    }

    let Some(name) = resolved.resolved_name.strip_suffix(mask) else {
        return false;
    };
    if name.is_empty() {
        return false;
    }

    let name = name.to_string();
    resolved.resolved_path.set_file_name(&name);
    resolved.resolved_name = name;
    true
}

/// The build-exclusion marker, resolved once per run
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExclusionMarker {
    resolved: String,
}

impl ExclusionMarker {
    /// Resolve the marker template against the run's parameters
    pub fn resolve(template: &str, params: &ParameterDictionary) -> Result<Self> {
        let resolved = TemplateEngine::new()
            .render(template, params)
            .map_err(|e| BoilerplateError::from_template("<build-exclusion marker>", e))?;
        Ok(Self { resolved })
    }

    pub fn as_str(&self) -> &str {
        &self.resolved
    }

    /// Remove every occurrence of the marker
    ///
    /// Content without the marker is returned as is.
    pub fn strip<'a>(&self, content: Cow<'a, [u8]>) -> Cow<'a, [u8]> {
        let marker = self.resolved.as_bytes();
        if marker.is_empty() || !contains(&content, marker) {
            return content;
        }

        let mut output = Vec::with_capacity(content.len());
        let mut rest: &[u8] = &content;
        while let Some(pos) = find(rest, marker) {
            output.extend_from_slice(&rest[..pos]);
            rest = &rest[pos + marker.len()..];
        }
        output.extend_from_slice(rest);
        Cow::Owned(output)
    }
}

fn find(haystack: &[u8], needle: &[u8]) -> Option<usize> {
    haystack
        .windows(needle.len())
        .position(|window| window == needle)
}

fn contains(haystack: &[u8], needle: &[u8]) -> bool {
    find(haystack, needle).is_some()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::repository::TemplateNode;
    use std::path::PathBuf;

    fn resolved(path: &str, is_dir: bool) -> ResolvedNode {
        let name = path.rsplit('/').next().unwrap().to_string();
        ResolvedNode {
            node: TemplateNode {
                original_path: format!("_x/{}", path),
                leaf_name: name.clone(),
                is_dir,
            },
            resolved_path: PathBuf::from(path),
            resolved_name: name,
        }
    }

    fn demo_marker() -> ExclusionMarker {
        let params = ParameterDictionary::new().with("ProjectName", "demo");
        ExclusionMarker::resolve(DEFAULT_EXCLUSION_MARKER, &params).unwrap()
    }

    #[test]
    fn test_unmask_strips_once() {
        let mut node = resolved("demo/go.mod_", false);
        assert!(unmask(&mut node, '_'));
        assert_eq!(node.resolved_name, "go.mod");
        assert_eq!(node.resolved_path, PathBuf::from("demo/go.mod"));
    }

    #[test]
    fn test_unmask_double_mask_strips_one() {
        let mut node = resolved("demo/Cargo.toml__", false);
        assert!(unmask(&mut node, '_'));
        assert_eq!(node.resolved_name, "Cargo.toml_");
        assert_eq!(node.resolved_path, PathBuf::from("demo/Cargo.toml_"));
    }

    #[test]
    fn test_unmask_leaves_other_files() {
        let mut node = resolved("demo/main.go", false);
        assert!(!unmask(&mut node, '_'));
        assert_eq!(node.resolved_path, PathBuf::from("demo/main.go"));
    }

    #[test]
    fn test_unmask_skips_directories_and_bare_mask() {
        let mut dir = resolved("demo/internal_", true);
        assert!(!unmask(&mut dir, '_'));
        assert_eq!(dir.resolved_name, "internal_");

        let mut bare = resolved("demo/_", false);
        assert!(!unmask(&mut bare, '_'));
    }

    #[test]
    fn test_marker_resolves_project_name() {
        assert_eq!(demo_marker().as_str(), "// +build exclude demo\n");
    }

    #[test]
    fn test_marker_requires_its_parameters() {
        let err = ExclusionMarker::resolve(DEFAULT_EXCLUSION_MARKER, &ParameterDictionary::new())
            .unwrap_err();
        assert!(matches!(err, BoilerplateError::UndefinedParameter { .. }));
    }

    #[test]
    fn test_strip_removes_marker_line() {
        let content = b"// +build exclude demo\n\npackage main\n".to_vec();
        let out = demo_marker().strip(Cow::Owned(content));
        assert_eq!(out.as_ref(), b"\npackage main\n");
    }

    #[test]
    fn test_strip_removes_every_occurrence() {
        let content: &[u8] = b"a// +build exclude demo\nb// +build exclude demo\nc";
        let out = demo_marker().strip(Cow::Borrowed(content));
        assert_eq!(out.as_ref(), b"abc");
    }

    #[test]
    fn test_strip_without_marker_is_identical() {
        let content: &[u8] = b"package main\n// +build exclude other\n";
        let out = demo_marker().strip(Cow::Borrowed(content));
        assert!(matches!(out, Cow::Borrowed(_)));
        assert_eq!(out.as_ref(), content);
    }

    #[test]
    fn test_strip_empty_content() {
        let out = demo_marker().strip(Cow::Borrowed(&b""[..]));
        assert!(out.is_empty());
    }
}
