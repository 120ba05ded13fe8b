//! Progress tracking and reporting for export runs

use crate::resolver::{MissingReason, ResolutionSummary};
use std::path::{Path, PathBuf};
use std::sync::Arc;

/// Progress callback for export runs
pub type ProgressCallback = Arc<dyn Fn(ProgressEvent) + Send + Sync>;

/// Events emitted while loading a manifest and resolving its mods
#[derive(Debug, Clone, PartialEq)]
pub enum ProgressEvent {
    /// About to read the manifest; sent before any parsing
    ManifestLoading {
        path: PathBuf,
    },
    ManifestLoaded {
        path: PathBuf,
        mod_count: usize,
    },
    ModDirectoryDetected {
        path: PathBuf,
    },
    /// The derived descriptor directory is absent; the caller must pick one
    ModDirectoryNotDetected {
        candidate: PathBuf,
    },
    ResolutionStarted {
        mod_directory: PathBuf,
        total: usize,
    },
    ModResolved {
        index: usize,
        total: usize,
        file_name: String,
        name: String,
    },
    ModMissing {
        index: usize,
        total: usize,
        file_name: String,
        reason: MissingReason,
    },
    ResolutionComplete {
        summary: ResolutionSummary,
    },
}

/// Trait for progress reporting with more granular control
pub trait ProgressReporter: Send + Sync {
    fn on_manifest_loading(&self, _path: &Path) {}
    fn on_manifest_loaded(&self, _path: &Path, _mod_count: usize) {}
    fn on_mod_directory_detected(&self, _path: &Path) {}
    fn on_mod_directory_not_detected(&self, _candidate: &Path) {}
    fn on_resolution_started(&self, _mod_directory: &Path, _total: usize) {}
    fn on_mod_resolved(&self, _index: usize, _total: usize, _file_name: &str, _name: &str) {}
    fn on_mod_missing(&self, _index: usize, _total: usize, _file_name: &str, _reason: MissingReason) {}
    fn on_resolution_complete(&self, _summary: &ResolutionSummary) {}
}

/// Extension trait to convert ProgressReporter to ProgressCallback
pub trait IntoProgressCallback {
    fn into_callback(self) -> ProgressCallback;
}

impl<T: ProgressReporter + 'static> IntoProgressCallback for T {
    fn into_callback(self) -> ProgressCallback {
        Arc::new(move |event| match event {
            ProgressEvent::ManifestLoading { path } => {
                self.on_manifest_loading(&path);
            }
            ProgressEvent::ManifestLoaded { path, mod_count } => {
                self.on_manifest_loaded(&path, mod_count);
            }
            ProgressEvent::ModDirectoryDetected { path } => {
                self.on_mod_directory_detected(&path);
            }
            ProgressEvent::ModDirectoryNotDetected { candidate } => {
                self.on_mod_directory_not_detected(&candidate);
            }
            ProgressEvent::ResolutionStarted { mod_directory, total } => {
                self.on_resolution_started(&mod_directory, total);
            }
            ProgressEvent::ModResolved { index, total, file_name, name } => {
                self.on_mod_resolved(index, total, &file_name, &name);
            }
            ProgressEvent::ModMissing { index, total, file_name, reason } => {
                self.on_mod_missing(index, total, &file_name, reason);
            }
            ProgressEvent::ResolutionComplete { summary } => {
                self.on_resolution_complete(&summary);
            }
        })
    }
}

/// Console reporter that prints the run log to stdout
///
/// In quiet mode only missing entries and the final summary are shown.
#[derive(Debug, Default)]
pub struct ConsoleProgressReporter {
    pub quiet: bool,
}

impl ConsoleProgressReporter {
    pub fn new(quiet: bool) -> Self {
        Self { quiet }
    }
}

impl ProgressReporter for ConsoleProgressReporter {
    fn on_manifest_loading(&self, path: &Path) {
        if !self.quiet {
            println!("Processing: {}", path.display());
        }
    }

    fn on_manifest_loaded(&self, _path: &Path, mod_count: usize) {
        if !self.quiet {
            println!("Found {} enabled mods in JSON.", mod_count);
        }
    }

    fn on_mod_directory_detected(&self, path: &Path) {
        if !self.quiet {
            println!("Auto-detected mod directory: {}", path.display());
        }
    }

    fn on_mod_directory_not_detected(&self, _candidate: &Path) {
        println!("Could not auto-detect 'mod' folder.");
    }

    fn on_resolution_started(&self, _mod_directory: &Path, _total: usize) {
        if !self.quiet {
            println!("\n--- Extracting Names ---\n");
        }
    }

    fn on_mod_resolved(&self, _index: usize, _total: usize, _file_name: &str, name: &str) {
        if !self.quiet {
            println!("[OK] {}", name);
        }
    }

    fn on_mod_missing(&self, _index: usize, _total: usize, file_name: &str, reason: MissingReason) {
        match reason {
            MissingReason::NotFound => println!("[MISSING] File not found: {}", file_name),
            MissingReason::Unreadable | MissingReason::NoNameDeclared => {
                println!("[MISSING] Could not read name for {}", file_name)
            }
        }
    }

    fn on_resolution_complete(&self, summary: &ResolutionSummary) {
        println!("\nDone! Extracted {} names.", summary.total);
        if summary.missing > 0 {
            println!("{} of them could not be resolved.", summary.missing);
        }
    }
}

/// Emit an event if a callback is installed
pub(crate) fn emit(callback: Option<&ProgressCallback>, event: ProgressEvent) {
    if let Some(callback) = callback {
        callback(event);
    }
}
