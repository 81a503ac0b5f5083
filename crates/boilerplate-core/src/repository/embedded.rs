//! Builtin template trees compiled into the binary

use super::{tree_from_file_paths, unknown_archetype, TemplateNode, TemplateRepository, TemplateTree};
use crate::archetype::{list_archetypes, Archetype};
use crate::error::{BoilerplateError, Result};
use rust_embed::RustEmbed;
use std::borrow::Cow;

#[derive(RustEmbed)]
#[folder = "templates/"]
struct BuiltinTemplates;

/// Repository over the builtin archetypes
#[derive(Debug, Clone, Copy, Default)]
pub struct EmbeddedRepository;

impl EmbeddedRepository {
    pub fn new() -> Self {
        Self
    }
}

impl TemplateRepository for EmbeddedRepository {
    fn archetypes(&self) -> Vec<String> {
        list_archetypes().into_iter().map(str::to_string).collect()
    }

    fn template_tree(&self, id: &str) -> Result<TemplateTree> {
        let archetype: Archetype = id.parse().map_err(|_| unknown_archetype(self, id))?;
        Ok(tree_from_file_paths(
            archetype.id(),
            archetype.template_root(),
            BuiltinTemplates::iter(),
        ))
    }

    fn read(&self, node: &TemplateNode) -> Result<Cow<'static, [u8]>> {
        BuiltinTemplates::get(&node.original_path)
            .map(|file| file.data)
            .ok_or_else(|| BoilerplateError::TemplateAssetMissing(node.original_path.clone().into()))
    }
}
