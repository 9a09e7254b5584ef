//! Model reference resolution.
//!
//! One pipeline answers, for a single configured identifier: does it still
//! exist, is a newer sibling or family successor available, and if it is gone
//! entirely, what replaces it. Both the report-only and the persisting entry
//! modes share [`resolve`]; they differ only in whether the outcome is
//! written back.

pub mod family;
pub mod replace;
pub mod tables;
pub mod version;

pub use tables::Tables;

use crate::catalog::Catalog;

/// Outcome of resolving one configured model reference.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Resolution {
    /// Present in the catalog and already the newest of its siblings.
    UpToDate,
    /// Present, but a newer sibling or family successor is available.
    Update(String),
    /// Absent from the catalog; a replacement was found.
    Replace(String),
    /// Absent, and no replacement could be determined. The caller leaves the
    /// original value untouched and reports the condition.
    Unresolved,
}

/// Resolve `id` against the catalog and the curated tables.
pub fn resolve(id: &str, catalog: &Catalog, tables: &Tables) -> Resolution {
    if !catalog.contains(id) {
        return match replace::replacement(id, catalog, tables) {
            Some(substitute) => Resolution::Replace(substitute),
            None => Resolution::Unresolved,
        };
    }
    match version::latest(id, catalog, tables) {
        Some(newer) if newer != id => Resolution::Update(newer),
        _ => Resolution::UpToDate,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::parse_catalog;

    fn catalog(items: &[&str]) -> Catalog {
        let mut lines = vec!["---Text---".to_string()];
        lines.extend(items.iter().map(|s| s.to_string()));
        parse_catalog(&lines)
    }

    #[test]
    fn present_and_newest_is_up_to_date() {
        let cat = catalog(&["openai/gpt-4o", "openai/gpt-4o-latest"]);
        assert_eq!(
            resolve("openai/gpt-4o", &cat, tables::builtin()),
            Resolution::UpToDate
        );
    }

    #[test]
    fn present_with_newer_variant_is_an_update() {
        let cat = catalog(&[
            "anthropic/claude-3.7-sonnet",
            "anthropic/claude-3.7-sonnet:thinking",
        ]);
        assert_eq!(
            resolve("anthropic/claude-3.7-sonnet", &cat, tables::builtin()),
            Resolution::Update("anthropic/claude-3.7-sonnet:thinking".to_string())
        );
    }

    #[test]
    fn absent_with_table_replacement_is_replaced() {
        let cat = catalog(&["openai/gpt-4o", "openai/gpt-4o-latest"]);
        assert_eq!(
            resolve("openai/gpt-4-turbo", &cat, tables::builtin()),
            Resolution::Replace("openai/gpt-4o-latest".to_string())
        );
    }

    #[test]
    fn absent_without_any_candidate_is_unresolved() {
        let cat = catalog(&["openai/gpt-4o"]);
        assert_eq!(
            resolve("vendor/unknown-model", &cat, tables::builtin()),
            Resolution::Unresolved
        );
    }

    #[test]
    fn free_only_base_match_resolves_to_nothing() {
        // The sole entry sharing the base name is free-tier; it must never be
        // selected as sibling, family candidate, or replacement.
        let cat = catalog(&["x/model-a:free"]);
        assert_eq!(
            resolve("x/model-a", &cat, tables::builtin()),
            Resolution::Unresolved
        );
    }

    #[test]
    fn free_identifier_that_exists_is_up_to_date() {
        // A configured `:free` reference that is still offered has no
        // non-free sibling here, so nothing actionable comes back.
        let cat = catalog(&["x/model-a:free"]);
        assert_eq!(
            resolve("x/model-a:free", &cat, tables::builtin()),
            Resolution::UpToDate
        );
    }
}
