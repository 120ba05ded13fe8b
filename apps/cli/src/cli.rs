use clap::Parser;
use modlist_export::{ExportConfig, ExportConfigBuilder};
use std::path::PathBuf;
use tracing::Level;

/// Export the enabled mods of a Paradox launcher playset to a text file
#[derive(Parser, Debug, Clone, Default)]
#[command(name = "modlist-export", version)]
pub struct Cli {
    /// Launcher manifest (dlc_load.json); asked for when omitted
    #[arg(value_name = "MANIFEST")]
    pub manifest: Option<PathBuf>,

    /// Folder holding the .mod descriptors (default: <manifest folder>/mod)
    #[arg(long, value_name = "DIR")]
    pub mod_dir: Option<PathBuf>,

    /// Where to save the list; asked for when omitted
    #[arg(short, long, value_name = "FILE")]
    pub output: Option<PathBuf>,

    /// Show debug logging
    #[arg(short, long, conflicts_with = "quiet")]
    pub verbose: bool,

    /// Only print unresolved mods and the summary
    #[arg(short, long)]
    pub quiet: bool,
}

impl Cli {
    pub fn log_level(&self) -> Level {
        if self.verbose {
            Level::DEBUG
        } else if self.quiet {
            Level::ERROR
        } else {
            Level::WARN
        }
    }

    pub fn export_config(&self) -> ExportConfig {
        ExportConfigBuilder::new()
            .maybe_mod_directory(self.mod_dir.clone())
            .build()
    }
}
