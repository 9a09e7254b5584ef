//! Section-delimited catalog parsing.
//!
//! The upstream export is a flat list of strings where category boundaries
//! are sentinel entries wrapped in `---`. Strings seen before the first
//! sentinel are dropped, as is any stray string that opens with `---` without
//! closing it. Malformed input never errors; an empty catalog is a valid
//! result.

use super::{Catalog, Category};

const DELIM: &str = "---";

/// Parse the flat export into a catalog of named categories.
pub fn parse_catalog(lines: &[String]) -> Catalog {
    let mut categories: Vec<Category> = Vec::new();
    let mut current: Option<usize> = None;

    for item in lines {
        if item.starts_with(DELIM) && item.ends_with(DELIM) {
            let name = item.trim_matches('-');
            // Re-opening a known label appends to the existing category so
            // the first-seen scan order stays stable.
            let idx = match categories.iter().position(|c| c.name == name) {
                Some(idx) => idx,
                None => {
                    categories.push(Category {
                        name: name.to_string(),
                        entries: Vec::new(),
                    });
                    categories.len() - 1
                }
            };
            current = Some(idx);
        } else if !item.starts_with(DELIM)
            && let Some(idx) = current
        {
            categories[idx].entries.push(item.clone());
        }
    }

    Catalog { categories }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn lines(items: &[&str]) -> Vec<String> {
        items.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn splits_entries_into_categories() {
        let catalog = parse_catalog(&lines(&[
            "---Text---",
            "openai/gpt-4o",
            "openai/gpt-4o-latest",
            "---Vision---",
            "google/gemini-2.5-pro-exp-03-25",
        ]));
        assert_eq!(catalog.categories.len(), 2);
        assert_eq!(catalog.categories[0].name, "Text");
        assert_eq!(
            catalog.categories[0].entries,
            vec!["openai/gpt-4o", "openai/gpt-4o-latest"]
        );
        assert_eq!(catalog.categories[1].name, "Vision");
        assert_eq!(
            catalog.categories[1].entries,
            vec!["google/gemini-2.5-pro-exp-03-25"]
        );
    }

    #[test]
    fn entries_before_first_category_are_dropped() {
        let catalog = parse_catalog(&lines(&["stray/model", "---Text---", "openai/gpt-4o"]));
        assert_eq!(catalog.categories.len(), 1);
        assert_eq!(catalog.categories[0].entries, vec!["openai/gpt-4o"]);
    }

    #[test]
    fn unterminated_delimiter_is_dropped_not_appended() {
        let catalog = parse_catalog(&lines(&["---Text---", "---stray", "openai/gpt-4o"]));
        assert_eq!(catalog.categories[0].entries, vec!["openai/gpt-4o"]);
    }

    #[test]
    fn reopened_category_merges_and_keeps_first_seen_order() {
        let catalog = parse_catalog(&lines(&[
            "---A---",
            "a/one",
            "---B---",
            "b/one",
            "---A---",
            "a/two",
        ]));
        assert_eq!(catalog.categories.len(), 2);
        assert_eq!(catalog.categories[0].entries, vec!["a/one", "a/two"]);
        let all: Vec<&str> = catalog.entries().collect();
        assert_eq!(all, vec!["a/one", "a/two", "b/one"]);
    }

    #[test]
    fn label_strips_hyphens_but_keeps_interior_spacing() {
        let catalog = parse_catalog(&lines(&["--- Top Picks ---", "x/y"]));
        assert_eq!(catalog.categories[0].name, " Top Picks ");
    }

    #[test]
    fn empty_input_yields_empty_catalog() {
        let catalog = parse_catalog(&[]);
        assert!(catalog.categories.is_empty());
    }

    #[test]
    fn bare_delimiter_opens_unnamed_category() {
        let catalog = parse_catalog(&lines(&["---", "x/y"]));
        assert_eq!(catalog.categories[0].name, "");
        assert_eq!(catalog.categories[0].entries, vec!["x/y"]);
    }
}
