//! Replacement lookup for identifiers the catalog no longer offers.

use crate::catalog::Catalog;
use crate::ident::is_free;

use super::tables::Tables;

/// Substitute for an identifier that is absent from the catalog.
///
/// Tried in order:
/// 1. the curated replacement table; the mapped value must itself still
///    exist in the catalog, otherwise the lookup falls through;
/// 2. a same-provider similarity scan: the first non-`:free` entry under
///    `provider/` whose full text contains one of the first two hyphen
///    tokens of the invalid model's name;
/// 3. the first non-`:free` same-provider entry, regardless of similarity.
///
/// An identifier without a `/` has no provider to scan under and resolves to
/// `None`; a name containing a further `/` skips the similarity step.
pub fn replacement(id: &str, catalog: &Catalog, tables: &Tables) -> Option<String> {
    if let Some(mapped) = tables.replacement.get(id)
        && catalog.contains(mapped)
    {
        return Some(mapped.clone());
    }

    let (provider, name) = id.split_once('/')?;
    let prefix = format!("{provider}/");

    if !name.contains('/') {
        let tokens: Vec<&str> = name.split('-').take(2).collect();
        for entry in catalog.entries() {
            if is_free(entry) || !entry.starts_with(&prefix) {
                continue;
            }
            if tokens.iter().any(|token| entry.contains(token)) {
                return Some(entry.to_string());
            }
        }
    }

    catalog
        .entries()
        .find(|entry| !is_free(entry) && entry.starts_with(&prefix))
        .map(str::to_string)
}
