//! Identifier decomposition helpers.
//!
//! Catalog identifiers take the form `provider/model[:variant]`. Comparisons
//! are exact and case-sensitive throughout; these helpers only split, never
//! normalize.

/// Suffix marking free-tier catalog entries. Resolvers never select these.
pub const FREE_SUFFIX: &str = ":free";

/// Base name of an identifier: the text before the `:variant` suffix, if any.
pub fn base_of(id: &str) -> &str {
    id.split_once(':').map_or(id, |(base, _)| base)
}

/// Whether an identifier is a free-tier variant.
pub fn is_free(id: &str) -> bool {
    id.ends_with(FREE_SUFFIX)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn base_strips_variant() {
        assert_eq!(base_of("anthropic/claude-3.7-sonnet:thinking"), "anthropic/claude-3.7-sonnet");
        assert_eq!(base_of("openai/gpt-4o"), "openai/gpt-4o");
        assert_eq!(base_of("x/model-a:free"), "x/model-a");
    }

    #[test]
    fn base_splits_on_first_colon_only() {
        assert_eq!(base_of("a/b:one:two"), "a/b");
    }

    #[test]
    fn free_detection_is_suffix_only() {
        assert!(is_free("x/model-a:free"));
        assert!(!is_free("x/model-a"));
        assert!(!is_free("x/model-a:freeform"));
        assert!(!is_free("x/free-model"));
    }
}
