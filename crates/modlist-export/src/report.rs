//! Report rendering and writing
//!
//! ```text
//! Enabled Mods List:
//! ==================
//! <name-or-fallback-1>
//! <name-or-fallback-2>
//! ```

use crate::error::{ExportError, Result};
use crate::resolver::ResolvedMod;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use tracing::{debug, info};

pub const REPORT_TITLE: &str = "Enabled Mods List:";
pub const REPORT_RULE: &str = "==================";

/// Render the report text, one line per entry in manifest order
pub fn render_report(mods: &[ResolvedMod]) -> String {
    let mut report = String::with_capacity(64 + mods.len() * 32);
    report.push_str(REPORT_TITLE);
    report.push('\n');
    report.push_str(REPORT_RULE);
    report.push('\n');
    for entry in mods {
        report.push_str(&entry.display_name());
        report.push('\n');
    }
    report
}

/// Append `extension` when the destination has none
pub fn with_default_extension(path: &Path, extension: &str) -> PathBuf {
    if path.extension().is_some() || extension.is_empty() {
        path.to_path_buf()
    } else {
        path.with_extension(extension)
    }
}

/// Write the report to `path`, replacing any existing file
///
/// A destination marked read-only is refused even when the process could
/// override the permission bits. No other file is created or touched.
pub fn write_report(path: &Path, mods: &[ResolvedMod]) -> Result<()> {
    ensure_writable(path)
        .and_then(|()| fs::write(path, render_report(mods)))
        .map_err(|source| ExportError::ReportWrite {
            path: path.to_path_buf(),
            source,
        })?;
    info!("Wrote {} entries to {}", mods.len(), path.display());
    Ok(())
}

fn ensure_writable(path: &Path) -> io::Result<()> {
    match fs::metadata(path) {
        Ok(metadata) if metadata.permissions().readonly() => {
            debug!("Refusing to overwrite read-only {}", path.display());
            Err(io::Error::new(
                io::ErrorKind::PermissionDenied,
                "destination is read-only",
            ))
        }
        _ => Ok(()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::manifest::ModReference;
    use crate::resolver::{MissingReason, ResolveStatus};
    use tempfile::tempdir;

    fn resolved(reference: &str, name: &str) -> ResolvedMod {
        let reference = ModReference::from(reference);
        ResolvedMod {
            file_name: reference.file_name().to_string(),
            reference,
            status: ResolveStatus::Resolved(name.to_string()),
        }
    }

    fn missing(reference: &str) -> ResolvedMod {
        let reference = ModReference::from(reference);
        ResolvedMod {
            file_name: reference.file_name().to_string(),
            reference,
            status: ResolveStatus::Missing(MissingReason::NotFound),
        }
    }

    #[test]
    fn test_render_report_layout() {
        let mods = vec![resolved("mod/111.mod", "Alpha"), missing("mod/222.mod")];
        assert_eq!(
            render_report(&mods),
            "Enabled Mods List:\n==================\nAlpha\nUnknown Mod (222.mod)\n"
        );
    }

    #[test]
    fn test_render_empty_report_has_header_only() {
        assert_eq!(render_report(&[]), "Enabled Mods List:\n==================\n");
    }

    #[test]
    fn test_default_extension_only_when_missing() {
        assert_eq!(
            with_default_extension(Path::new("out/mods"), "txt"),
            PathBuf::from("out/mods.txt")
        );
        assert_eq!(
            with_default_extension(Path::new("out/mods.log"), "txt"),
            PathBuf::from("out/mods.log")
        );
        assert_eq!(
            with_default_extension(Path::new("out/mods"), ""),
            PathBuf::from("out/mods")
        );
    }

    #[test]
    fn test_write_report_replaces_existing_file() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("mods.txt");
        fs::write(&path, "old contents").unwrap();

        write_report(&path, &[resolved("mod/1.mod", "Fresh")]).unwrap();

        assert_eq!(
            fs::read_to_string(&path).unwrap(),
            "Enabled Mods List:\n==================\nFresh\n"
        );
    }

    #[test]
    fn test_write_report_leaves_neighbouring_files_alone() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("mods.txt");
        let neighbour = dir.path().join("mods.txt.part");
        fs::write(&neighbour, "user data").unwrap();

        write_report(&path, &[resolved("mod/1.mod", "Fresh")]).unwrap();

        assert_eq!(fs::read_to_string(&neighbour).unwrap(), "user data");
        assert_eq!(fs::read_dir(dir.path()).unwrap().count(), 2);
    }

    #[test]
    fn test_write_report_refuses_read_only_destination() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("ro.txt");
        fs::write(&path, "keep me").unwrap();
        let mut permissions = fs::metadata(&path).unwrap().permissions();
        permissions.set_readonly(true);
        fs::set_permissions(&path, permissions).unwrap();

        let err = write_report(&path, &[resolved("mod/1.mod", "Fresh")]).unwrap_err();

        match &err {
            ExportError::ReportWrite { path: p, source } => {
                assert_eq!(p, &path);
                assert_eq!(source.kind(), io::ErrorKind::PermissionDenied);
            }
            other => panic!("unexpected error: {other:?}"),
        }
        assert_eq!(fs::read_to_string(&path).unwrap(), "keep me");
    }

    #[test]
    fn test_write_report_into_missing_directory_fails() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("no_such_dir").join("mods.txt");

        let err = write_report(&path, &[]).unwrap_err();
        match err {
            ExportError::ReportWrite { path: p, .. } => assert_eq!(p, path),
            other => panic!("unexpected error: {other:?}"),
        }
    }
}
