//! Descriptor directory lookup
//!
//! The launcher keeps `dlc_load.json` in the game's user directory
//! (`.../Paradox Interactive/<Game>/`) and the descriptors in its `mod`
//! subdirectory, so the default candidate is derived from the manifest path.

use std::path::{Path, PathBuf};
use tracing::debug;

/// Where the descriptor directory for a run came from
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ModDirectory {
    /// Supplied explicitly by the caller
    Configured(PathBuf),
    /// Found next to the manifest
    Detected(PathBuf),
    /// Nothing at the derived location; the caller has to choose
    NotDetected { candidate: PathBuf },
}

impl ModDirectory {
    /// Usable directory, if one is known
    pub fn path(&self) -> Option<&Path> {
        match self {
            ModDirectory::Configured(path) | ModDirectory::Detected(path) => Some(path.as_path()),
            ModDirectory::NotDetected { .. } => None,
        }
    }
}

/// `<manifest parent>/<subdirectory>`, whether or not it exists
pub fn candidate_mod_directory(manifest_path: &Path, subdirectory: &str) -> PathBuf {
    manifest_path
        .parent()
        .unwrap_or_else(|| Path::new(""))
        .join(subdirectory)
}

/// Derive the descriptor directory from the manifest location
pub fn detect_mod_directory(manifest_path: &Path, subdirectory: &str) -> ModDirectory {
    let candidate = candidate_mod_directory(manifest_path, subdirectory);
    if candidate.is_dir() {
        debug!("Auto-detected mod directory: {}", candidate.display());
        ModDirectory::Detected(candidate)
    } else {
        debug!("No mod directory at {}", candidate.display());
        ModDirectory::NotDetected { candidate }
    }
}
