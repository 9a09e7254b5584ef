//! Curated upgrade tables: family successors and invalid-model replacements.
//!
//! Built-ins cover the model lines the chat configurations actually shipped
//! with; the optional `--tables` TOML file extends or overrides them.

use std::collections::HashMap;
use std::path::Path;

use once_cell::sync::Lazy;
use serde::Deserialize;

/// Lookup tables consulted by the resolvers. Immutable for a run.
#[derive(Debug, Clone, Default)]
pub struct Tables {
    /// Legacy identifier, `:variant` included, to its ordered candidate
    /// successors. First candidate present in the catalog wins.
    pub family: HashMap<String, Vec<String>>,
    /// Withdrawn identifier to its single preferred replacement.
    pub replacement: HashMap<String, String>,
}

static BUILTIN: Lazy<Tables> = Lazy::new(|| Tables {
    family: builtin_family(),
    replacement: builtin_replacement(),
});

/// The built-in tables.
pub fn builtin() -> &'static Tables {
    &BUILTIN
}

fn builtin_family() -> HashMap<String, Vec<String>> {
    let mut m = HashMap::new();
    for (from, to) in [
        ("anthropic/claude-3.7-sonnet", ["anthropic/claude-4-sonnet", "anthropic/claude-4"]),
        ("anthropic/claude-3.7-sonnet:thinking", ["anthropic/claude-4-sonnet:thinking", "anthropic/claude-4:thinking"]),
        ("anthropic/claude-3.5-sonnet", ["anthropic/claude-4-sonnet", "anthropic/claude-4"]),
        ("anthropic/claude-3.5-sonnet:thinking", ["anthropic/claude-4-sonnet:thinking", "anthropic/claude-4:thinking"]),
        ("anthropic/claude-3-opus", ["anthropic/claude-4-opus", "anthropic/claude-4"]),
        ("anthropic/claude-3-opus:thinking", ["anthropic/claude-4-opus:thinking", "anthropic/claude-4:thinking"]),
        ("anthropic/claude-3-haiku", ["anthropic/claude-4-haiku", "anthropic/claude-4"]),
        ("anthropic/claude-3-haiku:thinking", ["anthropic/claude-4-haiku:thinking", "anthropic/claude-4:thinking"]),
        ("openai/gpt-4", ["openai/gpt-4o", "openai/gpt-4o-latest"]),
        ("openai/gpt-4-turbo", ["openai/gpt-4o", "openai/gpt-4o-latest"]),
        ("openai/gpt-4-turbo-preview", ["openai/gpt-4o", "openai/gpt-4o-latest"]),
        ("openai/gpt-4-1106-preview", ["openai/gpt-4o", "openai/gpt-4o-latest"]),
        ("openai/gpt-4-0125-preview", ["openai/gpt-4o", "openai/gpt-4o-latest"]),
        ("openai/gpt-4-0613", ["openai/gpt-4o", "openai/gpt-4o-latest"]),
        ("openai/gpt-4-0314", ["openai/gpt-4o", "openai/gpt-4o-latest"]),
        ("openai/gpt-3.5-turbo", ["openai/gpt-4o-mini", "openai/o4-mini"]),
        ("openai/gpt-3.5-turbo-16k", ["openai/gpt-4o-mini", "openai/o4-mini"]),
        ("google/gemini-2.0", ["google/gemini-2.5-pro", "google/gemini-2.5-pro-exp-03-25"]),
        ("google/gemini-1.5", ["google/gemini-2.5-pro", "google/gemini-2.5-pro-exp-03-25"]),
        ("google/gemini-1.0", ["google/gemini-2.5-pro", "google/gemini-2.5-pro-exp-03-25"]),
        ("deepseek/deepseek-chat-v2", ["deepseek/deepseek-chat-v3", "deepseek/deepseek-chat-v3-0324"]),
        ("deepseek/deepseek-chat-v1", ["deepseek/deepseek-chat-v3", "deepseek/deepseek-chat-v3-0324"]),
        ("x-ai/grok-2", ["x-ai/grok-3", "x-ai/grok-3-beta"]),
        ("x-ai/grok-1", ["x-ai/grok-3", "x-ai/grok-3-beta"]),
        ("mistralai/mistral-7b", ["mistralai/mistral-8x7b", "mistralai/mistral-large"]),
        ("mistralai/mistral-medium", ["mistralai/mistral-large", "mistralai/mistral-large-latest"]),
        ("meta-llama/llama-2", ["meta-llama/llama-3", "meta-llama/llama-3.1"]),
        ("meta-llama/llama-2-70b", ["meta-llama/llama-3.1-70b", "meta-llama/llama-3.1-405b"]),
        ("meta-llama/llama-2-13b", ["meta-llama/llama-3.1-8b", "meta-llama/llama-3.1-70b"]),
        ("meta-llama/llama-2-7b", ["meta-llama/llama-3.1-8b", "meta-llama/llama-3.1-70b"]),
    ] {
        m.insert(from.to_string(), to.into_iter().map(str::to_string).collect());
    }
    m
}

fn builtin_replacement() -> HashMap<String, String> {
    let mut m = HashMap::new();
    for (from, to) in [
        ("google/gemini-2.5-flash-preview", "google/gemini-2.5-pro-exp-03-25"),
        ("google/gemini-2.5-flash-preview:thinking", "google/gemini-2.5-pro-exp-03-25"),
        ("google/gemini-2.5-pro-preview-03-25", "google/gemini-2.5-pro-exp-03-25"),
        ("google/gemini-2.5-pro-preview", "google/gemini-2.5-pro-exp-03-25"),
        ("google/gemini-2.0-flash", "google/gemini-2.5-pro-exp-03-25"),
        ("google/gemini-2.0-pro", "google/gemini-2.5-pro-exp-03-25"),
        ("google/gemini-1.5-pro", "google/gemini-2.5-pro-exp-03-25"),
        ("google/gemini-1.5-flash", "google/gemini-2.5-pro-exp-03-25"),
        ("openai/gpt-4-turbo", "openai/gpt-4o-latest"),
        ("openai/gpt-4-turbo-preview", "openai/gpt-4o-latest"),
        ("openai/gpt-4-1106-preview", "openai/gpt-4o-latest"),
        ("openai/gpt-4-0125-preview", "openai/gpt-4o-latest"),
        ("openai/gpt-4-0613", "openai/gpt-4o-latest"),
        ("openai/gpt-4-0314", "openai/gpt-4o-latest"),
        ("openai/gpt-3.5-turbo", "openai/o4-mini"),
        ("openai/gpt-3.5-turbo-16k", "openai/o4-mini"),
        ("anthropic/claude-3.5-sonnet", "anthropic/claude-3.7-sonnet"),
        ("anthropic/claude-3.5-sonnet:thinking", "anthropic/claude-3.7-sonnet:thinking"),
        ("anthropic/claude-3-opus", "anthropic/claude-3.7-sonnet"),
        ("anthropic/claude-3-opus:thinking", "anthropic/claude-3.7-sonnet:thinking"),
        ("anthropic/claude-3-haiku", "anthropic/claude-3.7-sonnet"),
        ("anthropic/claude-3-haiku:thinking", "anthropic/claude-3.7-sonnet:thinking"),
        ("deepseek/deepseek-chat-v2", "deepseek/deepseek-chat-v3-0324"),
        ("deepseek/deepseek-chat-v1", "deepseek/deepseek-chat-v3-0324"),
        ("x-ai/grok-2", "x-ai/grok-3-beta"),
        ("x-ai/grok-1", "x-ai/grok-3-beta"),
        ("mistralai/mistral-7b", "mistralai/mistral-large"),
        ("mistralai/mistral-medium", "mistralai/mistral-large"),
        ("meta-llama/llama-2", "meta-llama/llama-3.1-8b"),
        ("meta-llama/llama-2-70b", "meta-llama/llama-3.1-70b"),
        ("meta-llama/llama-2-13b", "meta-llama/llama-3.1-8b"),
        ("meta-llama/llama-2-7b", "meta-llama/llama-3.1-8b"),
    ] {
        m.insert(from.to_string(), to.to_string());
    }
    m
}

#[derive(Debug, Deserialize)]
pub struct RawTablesFile {
    #[serde(default)]
    pub family: Vec<RawFamilyEntry>,
    #[serde(default)]
    pub replacement: Vec<RawReplacementEntry>,
}

#[derive(Debug, Deserialize)]
pub struct RawFamilyEntry {
    pub from: String,
    pub to: Vec<String>,
}

#[derive(Debug, Deserialize)]
pub struct RawReplacementEntry {
    pub from: String,
    pub to: String,
}

/// Parse a TOML override file and merge it over the built-ins.
pub fn from_toml_str(s: &str) -> anyhow::Result<Tables> {
    let raw: RawTablesFile = toml::from_str(s)?;
    let mut tables = builtin().clone();
    for e in raw.family {
        tables.family.insert(e.from, e.to);
    }
    for e in raw.replacement {
        tables.replacement.insert(e.from, e.to);
    }
    Ok(tables)
}

pub fn load_from_file(path: &Path) -> anyhow::Result<Tables> {
    let content = std::fs::read_to_string(path)?;
    from_toml_str(&content)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builtin_tables_are_populated() {
        let tables = builtin();
        assert_eq!(
            tables.family.get("anthropic/claude-3.5-sonnet").map(Vec::as_slice),
            Some(&["anthropic/claude-4-sonnet".to_string(), "anthropic/claude-4".to_string()][..])
        );
        assert_eq!(
            tables.replacement.get("openai/gpt-4-turbo").map(String::as_str),
            Some("openai/gpt-4o-latest")
        );
    }

    #[test]
    fn toml_overrides_merge_over_builtins() {
        let toml = r#"
[[family]]
from = "acme/widget-1"
to = ["acme/widget-2", "acme/widget-2-pro"]

[[replacement]]
from = "openai/gpt-4-turbo"
to = "openai/gpt-4.1"
"#;
        let tables = from_toml_str(toml).expect("parse ok");
        assert_eq!(
            tables.family.get("acme/widget-1").map(Vec::as_slice),
            Some(&["acme/widget-2".to_string(), "acme/widget-2-pro".to_string()][..])
        );
        // Override wins over the builtin value.
        assert_eq!(
            tables.replacement.get("openai/gpt-4-turbo").map(String::as_str),
            Some("openai/gpt-4.1")
        );
        // Untouched builtins survive the merge.
        assert!(tables.replacement.contains_key("x-ai/grok-2"));
    }

    #[test]
    fn empty_override_file_keeps_builtins() {
        let tables = from_toml_str("").expect("parse ok");
        assert_eq!(tables.family.len(), builtin().family.len());
        assert_eq!(tables.replacement.len(), builtin().replacement.len());
    }
}
