//! Project materialization - template tree in, project directory out
//!
//! A run has three phases that are never re-entered:
//!
//! 1. ENUMERATE: list every node of the archetype's template tree
//! 2. RESOLVE: resolve every path, un-mask reserved filenames, detect
//!    collisions, resolve every file's content and strip build-exclusion
//!    markers. Nothing is written yet, so any template error leaves the
//!    destination untouched.
//! 3. WRITE: create all directories, then write every file. The first
//!    failure aborts the run; files already written stay in place.

mod fs;

pub use fs::{LocalFs, MemoryFs, OutputFs};

use crate::error::{BoilerplateError, Result};
use crate::params::ParameterDictionary;
use crate::repository::{EmbeddedRepository, TemplateRepository, TemplateTree};
use crate::resolve::{resolve_content, resolve_path, ResolvedNode};
use crate::shaper::{self, ExclusionMarker, DEFAULT_EXCLUSION_MARKER, DEFAULT_MASK_CHAR};
use serde::Serialize;
use std::collections::HashMap;
use std::path::{Path, PathBuf};

/// What to do when two template files resolve to the same output path
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CollisionPolicy {
    /// Abort during RESOLVE with `PathCollision`
    #[default]
    Error,
    /// Keep the file enumerated last
    LastWriteWins,
}

/// Knobs for a materialization run
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MaterializeConfig {
    /// Trailing character stripped from reserved filenames
    pub mask_char: char,
    /// Template of the marker removed from generated files
    pub exclusion_marker: String,
    pub collision_policy: CollisionPolicy,
}

impl Default for MaterializeConfig {
    fn default() -> Self {
        Self {
            mask_char: DEFAULT_MASK_CHAR,
            exclusion_marker: DEFAULT_EXCLUSION_MARKER.to_string(),
            collision_policy: CollisionPolicy::default(),
        }
    }
}

impl MaterializeConfig {
    pub fn with_mask_char(mut self, mask_char: char) -> Self {
        self.mask_char = mask_char;
        self
    }

    pub fn with_exclusion_marker(mut self, marker: impl Into<String>) -> Self {
        self.exclusion_marker = marker.into();
        self
    }

    pub fn with_collision_policy(mut self, policy: CollisionPolicy) -> Self {
        self.collision_policy = policy;
        self
    }
}

/// A file ready to be written
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlannedFile {
    pub resolved: ResolvedNode,
    pub content: Vec<u8>,
}

/// Outcome of the RESOLVE phase
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MaterializePlan {
    pub archetype: String,
    pub directories: Vec<ResolvedNode>,
    pub files: Vec<PlannedFile>,
}

/// Paths created by a run, joined onto the destination directory
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MaterializeReport {
    pub archetype: String,
    pub destination: PathBuf,
    pub directories: Vec<PathBuf>,
    pub files: Vec<PathBuf>,
}

/// Orchestrates ENUMERATE → RESOLVE → WRITE
pub struct Materializer<'a> {
    repo: &'a dyn TemplateRepository,
    out: &'a dyn OutputFs,
    config: MaterializeConfig,
}

impl<'a> Materializer<'a> {
    pub fn new(repo: &'a dyn TemplateRepository, out: &'a dyn OutputFs) -> Self {
        Self {
            repo,
            out,
            config: MaterializeConfig::default(),
        }
    }

    pub fn with_config(mut self, config: MaterializeConfig) -> Self {
        self.config = config;
        self
    }

    pub fn config(&self) -> &MaterializeConfig {
        &self.config
    }

    /// Generate `archetype` under `destination`
    ///
    /// # Errors
    ///
    /// - `UnknownArchetype` if the repository does not serve `archetype`
    /// - `TemplateSyntax` / `UndefinedParameter` / `UnsafePath` /
    ///   `PathCollision` from RESOLVE; nothing has been written
    /// - `Filesystem` from WRITE, carrying the destination path that failed
    pub fn materialize(
        &self,
        archetype: &str,
        destination: &Path,
        params: &ParameterDictionary,
    ) -> Result<MaterializeReport> {
        let tree = self.repo.template_tree(archetype)?;
        let plan = self.plan(&tree, params)?;
        self.write(&plan, destination)
    }

    /// Run the RESOLVE phase over a whole tree
    pub fn plan(&self, tree: &TemplateTree, params: &ParameterDictionary) -> Result<MaterializePlan> {
        let mut resolved = Vec::with_capacity(tree.nodes.len());
        for node in &tree.nodes {
            resolved.push(resolve_path(node, &tree.root, params)?);
        }

        for node in &mut resolved {
            shaper::unmask(node, self.config.mask_char);
        }

        let resolved = self.check_collisions(resolved)?;

        let marker = ExclusionMarker::resolve(&self.config.exclusion_marker, params)?;

        let mut directories = Vec::new();
        let mut files = Vec::new();
        for node in resolved {
            if node.is_dir() {
                directories.push(node);
                continue;
            }

            let raw = self.repo.read(&node.node)?;
            let content = resolve_content(&node.node.original_path, &raw, params)?;
            let content = marker.strip(content).into_owned();
            files.push(PlannedFile {
                resolved: node,
                content,
            });
        }

        Ok(MaterializePlan {
            archetype: tree.archetype.clone(),
            directories,
            files,
        })
    }

    /// Detect nodes sharing an output path
    ///
    /// Directories may merge with directories. A file may replace an
    /// earlier file only under `LastWriteWins`. A file may never sit where
    /// another node needs a directory, including the ancestors a
    /// multi-segment placeholder value implies.
    fn check_collisions(&self, nodes: Vec<ResolvedNode>) -> Result<Vec<ResolvedNode>> {
        let mut kept: Vec<Option<ResolvedNode>> = Vec::with_capacity(nodes.len());
        let mut seen: HashMap<PathBuf, usize> = HashMap::new();
        let mut implied_dirs: HashMap<PathBuf, String> = HashMap::new();

        for node in nodes {
            for ancestor in node.resolved_path.ancestors().skip(1) {
                if ancestor.as_os_str().is_empty() {
                    continue;
                }
                let file = seen
                    .get(ancestor)
                    .and_then(|&i| kept[i].as_ref())
                    .filter(|previous| !previous.is_dir());
                if let Some(file) = file {
                    return Err(collision(ancestor, file, &node));
                }
                implied_dirs
                    .entry(ancestor.to_path_buf())
                    .or_insert_with(|| node.node.original_path.clone());
            }

            if !node.is_dir() {
                if let Some(first) = implied_dirs.get(&node.resolved_path) {
                    return Err(BoilerplateError::PathCollision {
                        path: node.resolved_path.clone(),
                        first: PathBuf::from(first),
                        second: PathBuf::from(&node.node.original_path),
                    });
                }
            }

            let Some(&index) = seen.get(&node.resolved_path) else {
                seen.insert(node.resolved_path.clone(), kept.len());
                kept.push(Some(node));
                continue;
            };

            let Some(previous) = kept[index].as_ref() else {
                continue;
            };

            match (previous.is_dir(), node.is_dir(), self.config.collision_policy) {
                (true, true, _) => {}
                (false, false, CollisionPolicy::LastWriteWins) => {
                    kept[index] = None;
                    seen.insert(node.resolved_path.clone(), kept.len());
                    kept.push(Some(node));
                }
                _ => return Err(collision(&node.resolved_path, previous, &node)),
            }
        }

        Ok(kept.into_iter().flatten().collect())
    }

    /// Run the WRITE phase
    pub fn write(&self, plan: &MaterializePlan, destination: &Path) -> Result<MaterializeReport> {
        self.create_dir(destination)?;

        let mut directories = Vec::with_capacity(plan.directories.len());
        for dir in &plan.directories {
            let path = destination.join(&dir.resolved_path);
            self.create_dir(&path)?;
            directories.push(path);
        }

        for file in &plan.files {
            let parent = file.resolved.resolved_path.parent();
            if let Some(parent) = parent.filter(|p| !p.as_os_str().is_empty()) {
                self.create_dir(&destination.join(parent))?;
            }
        }

        let mut files = Vec::with_capacity(plan.files.len());
        for file in &plan.files {
            let path = destination.join(&file.resolved.resolved_path);
            self.out
                .write_file(&path, &file.content)
                .map_err(|e| BoilerplateError::filesystem(&path, e))?;
            files.push(path);
        }

        Ok(MaterializeReport {
            archetype: plan.archetype.clone(),
            destination: destination.to_path_buf(),
            directories,
            files,
        })
    }

    fn create_dir(&self, path: &Path) -> Result<()> {
        self.out
            .create_dir_all(path)
            .map_err(|e| BoilerplateError::filesystem(path, e))
    }
}

fn collision(path: &Path, first: &ResolvedNode, second: &ResolvedNode) -> BoilerplateError {
    BoilerplateError::PathCollision {
        path: path.to_path_buf(),
        first: PathBuf::from(&first.node.original_path),
        second: PathBuf::from(&second.node.original_path),
    }
}

/// Generate a builtin archetype on the local disk with default settings
pub fn materialize(
    archetype: &str,
    destination: &Path,
    params: &ParameterDictionary,
) -> Result<MaterializeReport> {
    Materializer::new(&EmbeddedRepository, &LocalFs).materialize(archetype, destination, params)
}
