//! Elemental chart loader.

use std::path::Path;

use anyhow::ensure;
use combat_core::ElementChart;

use crate::loaders::{LoadResult, read_ron};

/// Loader for [`ElementChart`] from RON files.
pub struct ElementLoader;

impl ElementLoader {
    pub fn load(path: &Path) -> LoadResult<ElementChart> {
        let chart: ElementChart = read_ron(path, "element chart")?;
        for matchup in &chart.matchups {
            ensure!(
                matchup.multiplier >= 0.0,
                "matchup {} -> {} has a negative multiplier",
                matchup.attack,
                matchup.defend
            );
        }
        tracing::debug!(
            path = %path.display(),
            matchups = chart.matchups.len(),
            "Loaded element chart"
        );
        Ok(chart)
    }
}
