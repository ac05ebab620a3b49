//! Status template loader.

use std::path::Path;

use combat_core::StatusTemplates;

use crate::loaders::{LoadResult, read_ron};

/// Loader for status effect templates.
///
/// The file holds overrides keyed by kind; they are layered over
/// [`StatusTemplates::standard`], so a file may tune a single effect.
pub struct StatusLoader;

impl StatusLoader {
    pub fn load(path: &Path) -> LoadResult<StatusTemplates> {
        let overrides: StatusTemplates = read_ron(path, "status templates")?;
        let count = overrides.len();
        let templates = StatusTemplates::standard().merged(overrides);
        tracing::debug!(path = %path.display(), overrides = count, "Loaded status templates");
        Ok(templates)
    }
}
