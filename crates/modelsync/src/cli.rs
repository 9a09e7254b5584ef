//! Command-line surface.

use std::path::PathBuf;

use clap::Parser;

/// Reconcile a chat configuration against the current model catalog.
#[derive(Debug, Parser)]
#[command(
    name = "modelsync",
    about = "Refresh stale or withdrawn model references in a chat configuration",
    version
)]
pub struct Cli {
    /// Path to the chat configuration YAML.
    #[arg(long, default_value = "librechat.yaml")]
    pub config: PathBuf,

    /// Path to the exported model catalog (a JSON array of strings).
    #[arg(long, default_value = "openrouter.txt")]
    pub catalog: PathBuf,

    /// TOML file extending the built-in family/replacement tables.
    #[arg(long)]
    pub tables: Option<PathBuf>,

    /// Write the updated configuration back to disk (default: report only).
    #[arg(long)]
    pub apply: bool,
}
