//! Descriptor name resolution
//!
//! Each manifest reference is mapped to `<mod directory>/<file name>` and the
//! first `name = "..."` assignment in that descriptor becomes the display
//! name. Failures never drop an entry: they become a fallback label.

pub mod locate;

pub use locate::{ModDirectory, candidate_mod_directory, detect_mod_directory};

use crate::manifest::ModReference;
use crate::progress::{ProgressCallback, ProgressEvent, emit};
use once_cell::sync::Lazy;
use regex::Regex;
use std::borrow::Cow;
use std::fmt;
use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use tracing::debug;

/// First `name = "<value>"` assignment; the value ends at the next quote
static NAME_ASSIGNMENT: Lazy<Regex> =
    Lazy::new(|| Regex::new(r#"name\s*=\s*"(.*?)""#).expect("valid name regex"));

/// Why a descriptor produced no display name
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MissingReason {
    /// No file at the descriptor path
    NotFound,
    /// The file exists but could not be read
    Unreadable,
    /// The file was read but declares no name
    NoNameDeclared,
}

impl fmt::Display for MissingReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MissingReason::NotFound => write!(f, "file not found"),
            MissingReason::Unreadable => write!(f, "file could not be read"),
            MissingReason::NoNameDeclared => write!(f, "could not read name"),
        }
    }
}

/// Outcome of resolving one reference
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ResolveStatus {
    Resolved(String),
    Missing(MissingReason),
}

/// One entry of the resolved mod list
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedMod {
    pub reference: ModReference,
    /// Descriptor file name the reference was mapped to
    pub file_name: String,
    pub status: ResolveStatus,
}

impl ResolvedMod {
    pub fn is_resolved(&self) -> bool {
        matches!(self.status, ResolveStatus::Resolved(_))
    }

    /// Declared name, or `Unknown Mod (<file name>)` when resolution failed
    pub fn display_name(&self) -> Cow<'_, str> {
        match &self.status {
            ResolveStatus::Resolved(name) => Cow::Borrowed(name.as_str()),
            ResolveStatus::Missing(_) => Cow::Owned(fallback_label(&self.file_name)),
        }
    }
}

/// Placeholder name for a descriptor that could not be resolved
pub fn fallback_label(file_name: &str) -> String {
    format!("Unknown Mod ({})", file_name)
}

/// Counts over a resolved mod list
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ResolutionSummary {
    pub total: usize,
    pub resolved: usize,
    pub missing: usize,
}

impl ResolutionSummary {
    pub fn from_mods(mods: &[ResolvedMod]) -> Self {
        let resolved = mods.iter().filter(|m| m.is_resolved()).count();
        Self {
            total: mods.len(),
            resolved,
            missing: mods.len() - resolved,
        }
    }
}

/// Extract the declared display name from descriptor text
///
/// Whitespace around `=` is optional. Escaped quotes are not understood: the
/// first quote after the opening one ends the value.
pub fn extract_display_name(text: &str) -> Option<&str> {
    NAME_ASSIGNMENT
        .captures(text)
        .and_then(|caps| caps.get(1))
        .map(|m| m.as_str())
}

/// Resolves manifest references against a descriptor directory
#[derive(Debug, Clone)]
pub struct NameResolver {
    mod_directory: PathBuf,
}

impl NameResolver {
    pub fn new<P: Into<PathBuf>>(mod_directory: P) -> Self {
        Self {
            mod_directory: mod_directory.into(),
        }
    }

    pub fn mod_directory(&self) -> &Path {
        &self.mod_directory
    }

    /// Path of the descriptor a reference points at
    pub fn descriptor_path(&self, reference: &ModReference) -> PathBuf {
        self.mod_directory.join(reference.file_name())
    }

    /// Resolve a single reference
    pub fn resolve(&self, reference: &ModReference) -> ResolvedMod {
        let file_name = reference.file_name().to_string();
        let status = if file_name.is_empty() {
            ResolveStatus::Missing(MissingReason::NotFound)
        } else {
            read_descriptor_name(&self.descriptor_path(reference))
        };

        ResolvedMod {
            reference: reference.clone(),
            file_name,
            status,
        }
    }

    /// Resolve every reference in order, one entry per reference
    pub fn resolve_all(
        &self,
        references: &[ModReference],
        progress_callback: Option<&ProgressCallback>,
    ) -> Vec<ResolvedMod> {
        let total = references.len();
        emit(
            progress_callback,
            ProgressEvent::ResolutionStarted {
                mod_directory: self.mod_directory.clone(),
                total,
            },
        );

        let mods: Vec<ResolvedMod> = references
            .iter()
            .enumerate()
            .map(|(index, reference)| {
                let resolved = self.resolve(reference);
                let event = match &resolved.status {
                    ResolveStatus::Resolved(name) => ProgressEvent::ModResolved {
                        index,
                        total,
                        file_name: resolved.file_name.clone(),
                        name: name.clone(),
                    },
                    ResolveStatus::Missing(reason) => ProgressEvent::ModMissing {
                        index,
                        total,
                        file_name: resolved.file_name.clone(),
                        reason: *reason,
                    },
                };
                emit(progress_callback, event);
                resolved
            })
            .collect();

        emit(
            progress_callback,
            ProgressEvent::ResolutionComplete {
                summary: ResolutionSummary::from_mods(&mods),
            },
        );
        mods
    }
}

/// Read a descriptor and pull out its name
///
/// Invalid UTF-8 is replaced rather than rejected. An empty `name=""` counts
/// as no name.
fn read_descriptor_name(path: &Path) -> ResolveStatus {
    let bytes = match fs::read(path) {
        Ok(bytes) => bytes,
        Err(e) if e.kind() == ErrorKind::NotFound => {
            debug!("Descriptor not found: {}", path.display());
            return ResolveStatus::Missing(MissingReason::NotFound);
        }
        Err(e) => {
            debug!("Failed to read descriptor {}: {}", path.display(), e);
            return ResolveStatus::Missing(MissingReason::Unreadable);
        }
    };

    let text = String::from_utf8_lossy(&bytes);
    match extract_display_name(&text) {
        Some(name) if !name.is_empty() => ResolveStatus::Resolved(name.to_string()),
        Some(_) => {
            debug!("Empty name assignment in {}", path.display());
            ResolveStatus::Missing(MissingReason::NoNameDeclared)
        }
        None => {
            debug!("No name assignment in {}", path.display());
            ResolveStatus::Missing(MissingReason::NoNameDeclared)
        }
    }
}
