//! Curated major-version family upgrades.

use crate::catalog::Catalog;
use crate::ident::is_free;

use super::tables::Tables;

/// First curated successor of `id` that the catalog currently offers.
///
/// The table key is the identifier verbatim, `:variant` included; candidates
/// are tried in order and `:free` entries never satisfy one. Absent key or no
/// catalog hit both yield `None`, meaning "no actionable change".
pub fn upgrade(id: &str, catalog: &Catalog, tables: &Tables) -> Option<String> {
    let candidates = tables.family.get(id)?;
    candidates
        .iter()
        .find(|candidate| {
            catalog
                .entries()
                .any(|entry| !is_free(entry) && entry == candidate.as_str())
        })
        .cloned()
}
