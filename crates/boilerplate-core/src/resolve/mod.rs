//! Placeholder resolution for template paths and file content

use crate::error::{BoilerplateError, Result};
use crate::params::ParameterDictionary;
use crate::repository::TemplateNode;
use crate::template::TemplateEngine;
use std::borrow::Cow;
use std::path::{Component, Path, PathBuf};

/// A template node with its output location
///
/// `resolved_path` is relative to the destination directory and only a
/// write address; content is always read from `node.original_path`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedNode {
    pub node: TemplateNode,
    pub resolved_path: PathBuf,
    pub resolved_name: String,
}

impl ResolvedNode {
    pub fn is_dir(&self) -> bool {
        self.node.is_dir
    }
}

/// Resolve the output path of a node
///
/// Substitutes placeholders in the full template path, then drops the tree
/// root as the leading component and any leading separator. The result must
/// be a non-empty relative path made only of normal components.
pub fn resolve_path(
    node: &TemplateNode,
    root: &str,
    params: &ParameterDictionary,
) -> Result<ResolvedNode> {
    let substituted = TemplateEngine::new()
        .render(&node.original_path, params)
        .map_err(|e| BoilerplateError::from_template(&node.original_path, e))?;

    let relative = strip_root(&substituted, root);

    let unsafe_path = || BoilerplateError::UnsafePath {
        template: PathBuf::from(&node.original_path),
        resolved: relative.to_string(),
    };

    let mut resolved_path = PathBuf::new();
    for segment in relative.split('/') {
        let mut components = Path::new(segment).components();
        match (components.next(), components.next()) {
            (Some(Component::Normal(part)), None) if part.to_str() == Some(segment) => {
                resolved_path.push(part);
            }
            _ => return Err(unsafe_path()),
        }
    }

    let resolved_name = resolved_path
        .file_name()
        .and_then(|n| n.to_str())
        .map(str::to_string)
        .ok_or_else(unsafe_path)?;

    Ok(ResolvedNode {
        node: node.clone(),
        resolved_path,
        resolved_name,
    })
}

/// Drop the tree root (as a whole leading component) and a leading `/`
fn strip_root<'a>(path: &'a str, root: &str) -> &'a str {
    let rest = match path.strip_prefix(root) {
        Some(rest) if rest.is_empty() || rest.starts_with('/') => rest,
        _ => path,
    };
    rest.strip_prefix('/').unwrap_or(rest)
}

/// Resolve placeholders in file content
///
/// Content that is not UTF-8 (images, archives) is returned untouched.
pub fn resolve_content<'a>(
    template_path: &str,
    content: &'a [u8],
    params: &ParameterDictionary,
) -> Result<Cow<'a, [u8]>> {
    let Ok(text) = std::str::from_utf8(content) else {
        return Ok(Cow::Borrowed(content));
    };

    TemplateEngine::new()
        .render(text, params)
        .map(|rendered| Cow::Owned(rendered.into_bytes()))
        .map_err(|e| BoilerplateError::from_template(template_path, e))
}
