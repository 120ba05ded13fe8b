//! High-level export pipeline
//!
//! `manifest path → references → resolved mods → report`, with the run state
//! held in an explicit [`ExportSession`] instead of shell globals. The
//! interactive part (choosing a mod folder when detection fails, picking a
//! save destination) stays with the caller.

use crate::config::ExportConfig;
use crate::error::{ExportError, Result};
use crate::manifest::{ModManifest, load_manifest};
use crate::progress::{IntoProgressCallback, ProgressCallback, ProgressEvent, ProgressReporter, emit};
use crate::report::{render_report, with_default_extension, write_report};
use crate::resolver::{
    ModDirectory, NameResolver, ResolutionSummary, ResolvedMod, detect_mod_directory,
};
use std::path::{Path, PathBuf};
use tracing::{info, warn};

/// Manifest loaded and descriptor directory looked up, nothing resolved yet
#[derive(Debug, Clone)]
pub struct LoadedManifest {
    pub manifest_path: PathBuf,
    pub manifest: ModManifest,
    pub mod_directory: ModDirectory,
}

/// Result of one load + resolve run
///
/// Exports only read the session, so a failed write can be retried with
/// another destination without resolving again.
#[derive(Debug, Clone)]
pub struct ExportSession {
    manifest_path: PathBuf,
    mod_directory: PathBuf,
    mods: Vec<ResolvedMod>,
    default_report_extension: String,
}

impl ExportSession {
    pub fn manifest_path(&self) -> &Path {
        &self.manifest_path
    }

    pub fn mod_directory(&self) -> &Path {
        &self.mod_directory
    }

    /// Resolved entries in manifest order
    pub fn mods(&self) -> &[ResolvedMod] {
        &self.mods
    }

    /// Display names (or fallback labels) in manifest order
    pub fn names(&self) -> Vec<String> {
        self.mods.iter().map(|m| m.display_name().into_owned()).collect()
    }

    pub fn summary(&self) -> ResolutionSummary {
        ResolutionSummary::from_mods(&self.mods)
    }

    pub fn report(&self) -> String {
        render_report(&self.mods)
    }

    /// Write the report, adding the default extension if `destination` has none
    ///
    /// Returns the path actually written.
    pub fn export<P: AsRef<Path>>(&self, destination: P) -> Result<PathBuf> {
        let path = with_default_extension(destination.as_ref(), &self.default_report_extension);
        write_report(&path, &self.mods)?;
        Ok(path)
    }
}

/// Runs the export pipeline with a fixed configuration
pub struct ModListExporter {
    config: ExportConfig,
    progress_callback: Option<ProgressCallback>,
}

impl ModListExporter {
    pub fn new(config: ExportConfig) -> Self {
        Self {
            config,
            progress_callback: None,
        }
    }

    pub fn config(&self) -> &ExportConfig {
        &self.config
    }

    /// Use a custom progress callback
    pub fn with_progress<F>(mut self, callback: F) -> Self
    where
        F: Fn(ProgressEvent) + Send + Sync + 'static,
    {
        self.progress_callback = Some(std::sync::Arc::new(callback));
        self
    }

    /// Use a progress reporter
    pub fn with_reporter<R: ProgressReporter + 'static>(mut self, reporter: R) -> Self {
        self.progress_callback = Some(reporter.into_callback());
        self
    }

    /// Load the manifest and work out where its descriptors live
    ///
    /// A configured directory must exist. Otherwise the manifest's sibling
    /// subdirectory is probed; when it is absent the result carries
    /// [`ModDirectory::NotDetected`] and the caller picks a folder.
    pub fn load<P: AsRef<Path>>(&self, manifest_path: P) -> Result<LoadedManifest> {
        let manifest_path = manifest_path.as_ref();
        self.emit(ProgressEvent::ManifestLoading {
            path: manifest_path.to_path_buf(),
        });
        let manifest = load_manifest(manifest_path)?;
        self.emit(ProgressEvent::ManifestLoaded {
            path: manifest_path.to_path_buf(),
            mod_count: manifest.len(),
        });

        let mod_directory = match &self.config.mod_directory {
            Some(dir) => {
                ensure_directory(dir)?;
                ModDirectory::Configured(dir.clone())
            }
            None => {
                let found = detect_mod_directory(manifest_path, &self.config.mod_subdirectory);
                match &found {
                    ModDirectory::Detected(path) => {
                        self.emit(ProgressEvent::ModDirectoryDetected { path: path.clone() });
                    }
                    ModDirectory::NotDetected { candidate } => {
                        warn!("Could not auto-detect mod folder at {}", candidate.display());
                        self.emit(ProgressEvent::ModDirectoryNotDetected {
                            candidate: candidate.clone(),
                        });
                    }
                    ModDirectory::Configured(_) => {}
                }
                found
            }
        };

        Ok(LoadedManifest {
            manifest_path: manifest_path.to_path_buf(),
            manifest,
            mod_directory,
        })
    }

    /// Resolve every reference of a loaded manifest against `mod_directory`
    pub fn resolve<P: AsRef<Path>>(
        &self,
        loaded: &LoadedManifest,
        mod_directory: P,
    ) -> Result<ExportSession> {
        let mod_directory = mod_directory.as_ref();
        ensure_directory(mod_directory)?;

        let resolver = NameResolver::new(mod_directory);
        let mods = resolver.resolve_all(&loaded.manifest.references, self.progress_callback.as_ref());
        let summary = ResolutionSummary::from_mods(&mods);
        info!(
            "Resolved {} of {} mods from {}",
            summary.resolved,
            summary.total,
            mod_directory.display()
        );

        Ok(ExportSession {
            manifest_path: loaded.manifest_path.clone(),
            mod_directory: mod_directory.to_path_buf(),
            mods,
            default_report_extension: self.config.default_report_extension.clone(),
        })
    }

    /// Load and resolve without asking anyone for a folder
    ///
    /// Fails with [`ExportError::ModDirectoryNotFound`] when no directory is
    /// configured and none is found next to the manifest.
    pub fn run<P: AsRef<Path>>(&self, manifest_path: P) -> Result<ExportSession> {
        let loaded = self.load(manifest_path)?;
        match &loaded.mod_directory {
            ModDirectory::Configured(dir) | ModDirectory::Detected(dir) => {
                self.resolve(&loaded, dir)
            }
            ModDirectory::NotDetected { candidate } => Err(ExportError::ModDirectoryNotFound {
                path: candidate.clone(),
            }),
        }
    }

    fn emit(&self, event: ProgressEvent) {
        emit(self.progress_callback.as_ref(), event);
    }
}

impl Default for ModListExporter {
    fn default() -> Self {
        Self::new(ExportConfig::default())
    }
}

fn ensure_directory(path: &Path) -> Result<()> {
    if path.is_dir() {
        Ok(())
    } else {
        Err(ExportError::ModDirectoryNotFound {
            path: path.to_path_buf(),
        })
    }
}
