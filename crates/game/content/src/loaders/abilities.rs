//! Player ability catalog loader.

use std::path::Path;

use anyhow::ensure;
use combat_core::AbilityTable;

use crate::loaders::{LoadResult, read_ron};

/// Loader for [`AbilityTable`] from RON files.
///
/// RON format: a map of ability → profile.
///
/// ```ron
/// {
///     Fireball: (mana_cost: 10, damage_multiplier: 1.5,
///                on_hit: Some((kind: Burning, duration: 3, potency: 1))),
///     Heal: (mana_cost: 8, damage_multiplier: 0.0),
/// }
/// ```
pub struct AbilityLoader;

impl AbilityLoader {
    pub fn load(path: &Path) -> LoadResult<AbilityTable> {
        let table: AbilityTable = read_ron(path, "ability catalog")?;
        ensure!(!table.is_empty(), "ability catalog {} is empty", path.display());
        tracing::debug!(path = %path.display(), abilities = table.len(), "Loaded ability catalog");
        Ok(table)
    }
}
