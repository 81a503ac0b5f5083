//! Template trees stored on disk
//!
//! Layout: `<base>/<archetype-id>/...`. Each subdirectory of `base` is an
//! archetype whose tree root is the subdirectory itself.

use super::{unknown_archetype, TemplateNode, TemplateRepository, TemplateTree};
use crate::error::{BoilerplateError, Result};
use std::borrow::Cow;
use std::fs;
use std::io;
use std::path::{Component, Path, PathBuf};
use walkdir::WalkDir;

/// Repository reading template trees from a directory
#[derive(Debug, Clone)]
pub struct DirRepository {
    base: PathBuf,
}

impl DirRepository {
    pub fn new(base: impl Into<PathBuf>) -> Self {
        Self { base: base.into() }
    }

    pub fn base(&self) -> &Path {
        &self.base
    }

    /// Relative `/`-joined form of a path below `base`
    fn relative_path(&self, path: &Path) -> Result<String> {
        let rel = path
            .strip_prefix(&self.base)
            .map_err(|_| BoilerplateError::TemplateAssetMissing(path.to_path_buf()))?;

        let mut parts = Vec::new();
        for component in rel.components() {
            let part = component.as_os_str().to_str().ok_or_else(|| {
                BoilerplateError::filesystem(
                    path,
                    io::Error::new(io::ErrorKind::InvalidData, "template path is not valid UTF-8"),
                )
            })?;
            parts.push(part);
        }
        Ok(parts.join("/"))
    }
}

impl TemplateRepository for DirRepository {
    fn archetypes(&self) -> Vec<String> {
        let Ok(entries) = fs::read_dir(&self.base) else {
            return Vec::new();
        };

        let mut ids: Vec<String> = entries
            .flatten()
            .filter(|e| e.file_type().map(|t| t.is_dir()).unwrap_or(false))
            .filter_map(|e| e.file_name().to_str().map(str::to_string))
            .collect();
        ids.sort();
        ids
    }

    fn template_tree(&self, id: &str) -> Result<TemplateTree> {
        let mut components = Path::new(id).components();
        let is_single_name = matches!(
            (components.next(), components.next()),
            (Some(Component::Normal(_)), None)
        );
        let root_dir = self.base.join(id);
        if !is_single_name || !root_dir.is_dir() {
            return Err(unknown_archetype(self, id));
        }

        let mut nodes = Vec::new();
        for entry in WalkDir::new(&root_dir).min_depth(1).sort_by_file_name() {
            let entry = entry.map_err(|e| {
                let path = e.path().unwrap_or(root_dir.as_path()).to_path_buf();
                BoilerplateError::filesystem(path, io::Error::from(e))
            })?;

            nodes.push(TemplateNode {
                original_path: self.relative_path(entry.path())?,
                leaf_name: entry.file_name().to_string_lossy().into_owned(),
                is_dir: entry.file_type().is_dir(),
            });
        }

        Ok(TemplateTree {
            archetype: id.to_string(),
            root: id.to_string(),
            nodes,
        })
    }

    fn read(&self, node: &TemplateNode) -> Result<Cow<'static, [u8]>> {
        let path = self.base.join(&node.original_path);
        fs::read(&path)
            .map(Cow::Owned)
            .map_err(|e| BoilerplateError::filesystem(path, e))
    }
}
