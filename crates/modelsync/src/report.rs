//! User-facing progress and summary lines.
//!
//! Reports go to stdout; tracing stays on stderr so the two streams never
//! mix. The apply flag only changes phrasing; the resolution pipeline
//! underneath is identical in both modes.

use crate::catalog::Catalog;
use crate::document::RefreshStats;

pub struct Reporter {
    apply: bool,
}

impl Reporter {
    pub fn new(apply: bool) -> Self {
        Self { apply }
    }

    pub fn catalog_summary(&self, catalog: &Catalog) {
        println!("found {} model categories:", catalog.categories.len());
        for category in &catalog.categories {
            println!("  - {}: {} models", category.name, category.entries.len());
        }
    }

    pub fn up_to_date(&self, id: &str) {
        println!("ok: {id} (already latest)");
    }

    pub fn update(&self, from: &str, to: &str) {
        if self.apply {
            println!("updating {from} -> {to}");
        } else {
            println!("would update {from} -> {to}");
        }
    }

    pub fn replace(&self, from: &str, to: &str) {
        println!("invalid model: {from}");
        if self.apply {
            println!("replacing {from} -> {to}");
        } else {
            println!("would replace {from} -> {to}");
        }
    }

    pub fn unresolved(&self, id: &str) {
        println!("invalid model: {id}");
        println!("no replacement found for {id}, keeping as is");
    }

    pub fn endpoint_summary(&self, name: &str, stats: &RefreshStats) {
        println!(
            "endpoint '{name}': {} updated, {} replaced",
            stats.updated, stats.replaced
        );
    }

    pub fn summary(&self, stats: &RefreshStats) {
        println!(
            "summary: {} updated, {} replaced, {} unresolved",
            stats.updated, stats.replaced, stats.unresolved
        );
    }
}
