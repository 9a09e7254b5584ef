//! Latest-version lookup by base name.

use crate::catalog::Catalog;
use crate::ident::{base_of, is_free};

use super::family;
use super::tables::Tables;

/// Latest sibling of `id` under plain lexicographic ordering.
///
/// Siblings share a base name after the `:variant` strip; `:free` entries are
/// never candidates. Ordering is plain string comparison, not semantic
/// versioning, so `v10` sorts before `v9`; config outputs depend on this
/// exact behavior. The result can equal `id` itself; the caller treats that
/// as "no change needed". When no sibling exists at all, the lookup falls
/// through to the curated family table.
pub fn latest(id: &str, catalog: &Catalog, tables: &Tables) -> Option<String> {
    let base = base_of(id);
    let mut newest: Option<&str> = None;

    for entry in catalog.entries() {
        if is_free(entry) || base_of(entry) != base {
            continue;
        }
        if newest.is_none_or(|current| entry > current) {
            newest = Some(entry);
        }
    }

    match newest {
        Some(entry) => Some(entry.to_string()),
        None => family::upgrade(id, catalog, tables),
    }
}
