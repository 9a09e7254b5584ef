//! Apply resolutions across a configuration document.

use crate::catalog::Catalog;
use crate::report::Reporter;
use crate::resolver::{self, Resolution, Tables};

use super::types::ChatConfig;

/// Whole-run bookkeeping for the report summary.
#[derive(Debug, Clone, Copy, Default)]
pub struct RefreshStats {
    pub updated: usize,
    pub replaced: usize,
    pub unresolved: usize,
}

impl RefreshStats {
    fn absorb(&mut self, other: RefreshStats) {
        self.updated += other.updated;
        self.replaced += other.replaced;
        self.unresolved += other.unresolved;
    }
}

/// Resolve every model reference in `config` and rewrite the stale ones in
/// place. Unresolved references are left untouched and only counted. The
/// document's other structure is not modified.
pub fn refresh_document(
    config: &mut ChatConfig,
    catalog: &Catalog,
    tables: &Tables,
    report: &Reporter,
) -> RefreshStats {
    let mut stats = RefreshStats::default();
    stats.absorb(refresh_model_specs(config, catalog, tables, report));
    stats.absorb(refresh_endpoints(config, catalog, tables, report));
    stats
}

fn refresh_model_specs(
    config: &mut ChatConfig,
    catalog: &Catalog,
    tables: &Tables,
    report: &Reporter,
) -> RefreshStats {
    let mut stats = RefreshStats::default();
    let Some(list) = config.model_specs.as_mut().and_then(|s| s.list.as_mut()) else {
        tracing::debug!("no modelSpecs list in configuration");
        return stats;
    };

    for entry in list.iter_mut() {
        let Some(preset) = entry.preset.as_mut() else {
            continue;
        };
        let Some(current) = preset.model.clone() else {
            continue;
        };
        match resolver::resolve(&current, catalog, tables) {
            Resolution::UpToDate => report.up_to_date(&current),
            Resolution::Update(newer) => {
                report.update(&current, &newer);
                preset.model = Some(newer.clone());
                if entry.model_label.is_some() {
                    entry.model_label = Some(newer);
                }
                stats.updated += 1;
            }
            Resolution::Replace(substitute) => {
                report.replace(&current, &substitute);
                preset.model = Some(substitute.clone());
                if entry.model_label.is_some() {
                    entry.model_label = Some(substitute);
                }
                stats.replaced += 1;
            }
            Resolution::Unresolved => {
                report.unresolved(&current);
                stats.unresolved += 1;
            }
        }
    }
    stats
}

fn refresh_endpoints(
    config: &mut ChatConfig,
    catalog: &Catalog,
    tables: &Tables,
    report: &Reporter,
) -> RefreshStats {
    let mut stats = RefreshStats::default();
    let Some(custom) = config.endpoints.as_mut().and_then(|e| e.custom.as_mut()) else {
        tracing::debug!("no custom endpoints in configuration");
        return stats;
    };

    for endpoint in custom.iter_mut() {
        let Some(models) = endpoint.models.as_mut().and_then(|m| m.default.as_mut()) else {
            continue;
        };
        let mut local = RefreshStats::default();
        for current in models.iter_mut() {
            match resolver::resolve(current, catalog, tables) {
                Resolution::UpToDate => report.up_to_date(current),
                Resolution::Update(newer) => {
                    report.update(current, &newer);
                    *current = newer;
                    local.updated += 1;
                }
                Resolution::Replace(substitute) => {
                    report.replace(current, &substitute);
                    *current = substitute;
                    local.replaced += 1;
                }
                Resolution::Unresolved => {
                    report.unresolved(current);
                    local.unresolved += 1;
                }
            }
        }
        if local.updated > 0 || local.replaced > 0 {
            report.endpoint_summary(endpoint.name.as_deref().unwrap_or("Unknown"), &local);
        }
        stats.absorb(local);
    }
    stats
}
