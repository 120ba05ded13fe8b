//! Launcher manifest parsing
//!
//! The Paradox launcher records the active playset in `dlc_load.json`. Each
//! entry of its `enabled_mods` array is a relative path to a `.mod`
//! descriptor, e.g. `mod/ugc_1234567.mod`.

pub mod parser;

pub use parser::{load_manifest, parse_manifest};

use std::fmt;

/// Relative path to a mod descriptor, as written in the manifest
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ModReference(String);

impl ModReference {
    pub fn new<S: Into<String>>(path: S) -> Self {
        Self(path.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Last path segment of the reference
    ///
    /// Both `/` and `\` count as separators so manifests written on Windows
    /// resolve the same way everywhere. A reference ending in a separator has
    /// an empty file name.
    pub fn file_name(&self) -> &str {
        self.0
            .rsplit(|c: char| c == '/' || c == '\\')
            .next()
            .unwrap_or_default()
    }
}

impl fmt::Display for ModReference {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for ModReference {
    fn from(path: &str) -> Self {
        Self::new(path)
    }
}

impl From<String> for ModReference {
    fn from(path: String) -> Self {
        Self(path)
    }
}

/// Parsed launcher manifest
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ModManifest {
    /// Enabled mods in launcher order, duplicates kept
    pub references: Vec<ModReference>,
    /// DLC the launcher has switched off; informational only
    pub disabled_dlcs: Vec<String>,
}

impl ModManifest {
    pub fn len(&self) -> usize {
        self.references.len()
    }

    pub fn is_empty(&self) -> bool {
        self.references.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, ModReference> {
        self.references.iter()
    }
}
