//! Configuration types for the exporter

use std::path::PathBuf;

/// Name of the descriptor directory next to the launcher manifest
pub const DEFAULT_MOD_SUBDIRECTORY: &str = "mod";

/// Extension appended to report destinations that have none
pub const DEFAULT_REPORT_EXTENSION: &str = "txt";

/// Configuration for export runs
#[derive(Debug, Clone)]
pub struct ExportConfig {
    /// Explicit descriptor directory; skips auto-detection when set
    pub mod_directory: Option<PathBuf>,
    /// Subdirectory of the manifest's folder probed during auto-detection
    pub mod_subdirectory: String,
    pub default_report_extension: String,
}

impl Default for ExportConfig {
    fn default() -> Self {
        Self {
            mod_directory: None,
            mod_subdirectory: DEFAULT_MOD_SUBDIRECTORY.to_string(),
            default_report_extension: DEFAULT_REPORT_EXTENSION.to_string(),
        }
    }
}

/// Builder for [`ExportConfig`]
#[derive(Debug, Clone, Default)]
pub struct ExportConfigBuilder {
    config: ExportConfig,
}

impl ExportConfigBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn mod_directory<P: Into<PathBuf>>(mut self, dir: P) -> Self {
        self.config.mod_directory = Some(dir.into());
        self
    }

    /// Set the directory only when one was supplied
    pub fn maybe_mod_directory(mut self, dir: Option<PathBuf>) -> Self {
        self.config.mod_directory = dir;
        self
    }

    pub fn mod_subdirectory<S: Into<String>>(mut self, name: S) -> Self {
        self.config.mod_subdirectory = name.into();
        self
    }

    pub fn default_report_extension<S: Into<String>>(mut self, ext: S) -> Self {
        self.config.default_report_extension = ext.into().trim_start_matches('.').to_string();
        self
    }

    pub fn build(self) -> ExportConfig {
        self.config
    }
}
