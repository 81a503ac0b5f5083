//! Template repositories - named collections of template trees
//!
//! A repository hands out one tree per archetype id. Node paths use `/`
//! separators and are relative to the repository root, so every path starts
//! with the tree's root directory (e.g. `_spaProject/{{ProjectName}}/go.mod_`).

mod dir;
mod embedded;

pub use dir::DirRepository;
pub use embedded::EmbeddedRepository;

use crate::error::{BoilerplateError, Result};
use std::borrow::Cow;
use std::collections::BTreeMap;

/// One entry of a template tree
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TemplateNode {
    /// Location within the repository, `/`-separated, starting with the tree root
    pub original_path: String,
    /// Final path component, still unresolved
    pub leaf_name: String,
    pub is_dir: bool,
}

/// Every node of one archetype, directories ahead of their children
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TemplateTree {
    pub archetype: String,
    /// Storage directory of the tree; never part of generated output
    pub root: String,
    pub nodes: Vec<TemplateNode>,
}

impl TemplateTree {
    pub fn files(&self) -> impl Iterator<Item = &TemplateNode> {
        self.nodes.iter().filter(|n| !n.is_dir)
    }

    pub fn directories(&self) -> impl Iterator<Item = &TemplateNode> {
        self.nodes.iter().filter(|n| n.is_dir)
    }
}

/// Read-only source of template trees
pub trait TemplateRepository {
    /// Archetype ids this repository can serve
    fn archetypes(&self) -> Vec<String>;

    fn is_valid_archetype(&self, id: &str) -> bool {
        self.archetypes().iter().any(|a| a == id)
    }

    /// Enumerate the full tree of an archetype
    ///
    /// Fails with `UnknownArchetype` for ids the repository does not serve.
    fn template_tree(&self, id: &str) -> Result<TemplateTree>;

    /// Raw bytes of a file node, always from its original location
    fn read(&self, node: &TemplateNode) -> Result<Cow<'static, [u8]>>;
}

/// Error for an id the repository does not serve
pub(crate) fn unknown_archetype(repo: &dyn TemplateRepository, id: &str) -> BoilerplateError {
    BoilerplateError::UnknownArchetype {
        id: id.to_string(),
        valid: repo.archetypes().join(", "),
    }
}

/// Build a tree from the file paths below `root`
///
/// Directory nodes are synthesized for every ancestor between the root and
/// a file. Sorting by component list puts each directory ahead of its
/// children.
pub(crate) fn tree_from_file_paths<I, S>(archetype: &str, root: &str, files: I) -> TemplateTree
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut entries: BTreeMap<Vec<String>, bool> = BTreeMap::new();

    for file in files {
        let Some(rest) = file
            .as_ref()
            .strip_prefix(root)
            .and_then(|r| r.strip_prefix('/'))
        else {
            continue;
        };

        let components: Vec<String> = rest
            .split('/')
            .filter(|c| !c.is_empty())
            .map(str::to_string)
            .collect();

        for depth in 1..components.len() {
            entries.entry(components[..depth].to_vec()).or_insert(true);
        }
        if !components.is_empty() {
            entries.insert(components, false);
        }
    }

    let nodes = entries
        .into_iter()
        .map(|(components, is_dir)| {
            let leaf_name = components.last().cloned().unwrap_or_default();
            TemplateNode {
                original_path: format!("{}/{}", root, components.join("/")),
                leaf_name,
                is_dir,
            }
        })
        .collect();

    TemplateTree {
        archetype: archetype.to_string(),
        root: root.to_string(),
        nodes,
    }
}
