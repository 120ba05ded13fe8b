//! Paradox mod list exporter
//!
//! This library turns the launcher's enabled-mods manifest (`dlc_load.json`)
//! into a plain list of mod names. Every manifest entry points at a `.mod`
//! descriptor; the descriptor's `name="..."` line supplies the display name,
//! and entries that cannot be resolved get an `Unknown Mod (<file>)` label.
//!
//! # Quick Start
//!
//! ```rust,no_run
//! use modlist_export::{ConsoleProgressReporter, ExportConfig, ModListExporter};
//!
//! # fn example() -> modlist_export::Result<()> {
//! let exporter = ModListExporter::new(ExportConfig::default())
//!     .with_reporter(ConsoleProgressReporter::new(false));
//!
//! // Loads the manifest, finds `<manifest dir>/mod` and resolves every entry
//! let session = exporter.run("Paradox Interactive/Stellaris/dlc_load.json")?;
//! println!("{} mods, {} unresolved", session.summary().total, session.summary().missing);
//!
//! // A failed export leaves the session intact for another attempt
//! let written = session.export("enabled_mods")?;
//! println!("Saved to {}", written.display());
//! # Ok(())
//! # }
//! ```
//!
//! When the `mod` folder is not next to the manifest, use
//! [`ModListExporter::load`] and pass the folder to
//! [`ModListExporter::resolve`] yourself.

pub mod config;
pub mod error;
pub mod manifest;
pub mod progress;
pub mod report;
pub mod resolver;
pub mod session;

// Re-export commonly used types for convenience
pub use config::{ExportConfig, ExportConfigBuilder};
pub use error::{ExportError, Result};
pub use manifest::{ModManifest, ModReference, load_manifest, parse_manifest};
pub use progress::{
    ConsoleProgressReporter, IntoProgressCallback, ProgressCallback, ProgressEvent,
    ProgressReporter,
};
pub use report::{render_report, write_report};
pub use resolver::{
    MissingReason, ModDirectory, NameResolver, ResolutionSummary, ResolveStatus, ResolvedMod,
    extract_display_name,
};
pub use session::{ExportSession, LoadedManifest, ModListExporter};
