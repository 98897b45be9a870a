use clap::Parser;
use std::path::PathBuf;

/// Resolve message keys against the bundled English, Russian and Japanese dictionaries.
#[derive(Parser, Debug)]
#[command(name = "lingo", version, about)]
pub struct Cli {
    /// Message keys to resolve (nested keys use dots, e.g. nav.home)
    #[arg(required_unless_present_any = ["list", "missing"])]
    pub keys: Vec<String>,

    /// Active locale, or "auto" for the system locale (defaults to LINGO_LOCALE, then the fallback)
    #[arg(short, long)]
    pub locale: Option<String>,

    /// Locale consulted when the active locale lacks a key
    #[arg(long, default_value = "en")]
    pub fallback: String,

    /// Load <code>.json dictionaries from this directory instead of the bundled ones
    #[arg(short, long)]
    pub dir: Option<PathBuf>,

    /// Skip user dictionaries from LINGO_OVERLAY_DIR or the config directory
    #[arg(long)]
    pub no_overlay: bool,

    /// List registered locales
    #[arg(long, conflicts_with_all = ["keys", "missing"])]
    pub list: bool,

    /// Report keys the active locale lacks relative to the fallback
    #[arg(long, conflicts_with = "keys")]
    pub missing: bool,
}
