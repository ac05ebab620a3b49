//! Environmental hazard catalog loader.

use std::collections::BTreeSet;
use std::path::Path;

use anyhow::ensure;
use combat_core::{HazardCatalog, HazardProfile};
use serde::Deserialize;

use crate::loaders::{LoadResult, read_ron};

#[derive(Debug, Deserialize)]
struct HazardFile {
    hazards: Vec<HazardProfile>,
}

/// Loader for [`HazardCatalog`] from RON files.
pub struct HazardLoader;

impl HazardLoader {
    pub fn load(path: &Path) -> LoadResult<HazardCatalog> {
        let file: HazardFile = read_ron(path, "hazard catalog")?;

        let mut seen = BTreeSet::new();
        for hazard in &file.hazards {
            ensure!(seen.insert(hazard.kind), "hazard {} is defined twice", hazard.kind);
            ensure!(
                hazard.min <= hazard.max,
                "hazard {} has min {} above max {}",
                hazard.kind,
                hazard.min,
                hazard.max
            );
        }

        let catalog = HazardCatalog::new(file.hazards);
        tracing::debug!(path = %path.display(), hazards = catalog.len(), "Loaded hazard catalog");
        Ok(catalog)
    }
}
