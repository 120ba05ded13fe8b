//! `dlc_load.json` parser

use crate::error::{ExportError, Result};
use crate::manifest::{ModManifest, ModReference};
use serde::Deserialize;
use std::fs;
use std::path::Path;
use tracing::{debug, info};

/// Raw manifest structure as it appears in the file
///
/// Keys other than these two are ignored.
#[derive(Debug, Default, Deserialize)]
struct DlcLoad {
    #[serde(default)]
    enabled_mods: Option<Vec<String>>,
    #[serde(default)]
    disabled_dlcs: Option<Vec<String>>,
}

/// Parse manifest JSON text
///
/// The root must be a JSON object. A missing or `null` `enabled_mods` key
/// yields an empty manifest rather than an error.
pub fn parse_manifest(json: &str) -> serde_json::Result<ModManifest> {
    let json = json.strip_prefix('\u{feff}').unwrap_or(json);
    let value: serde_json::Value = serde_json::from_str(json)?;
    if !value.is_object() {
        return Err(serde::de::Error::custom(
            "manifest root must be a JSON object",
        ));
    }

    let raw: DlcLoad = serde_json::from_value(value)?;
    Ok(ModManifest {
        references: raw
            .enabled_mods
            .unwrap_or_default()
            .into_iter()
            .map(ModReference::from)
            .collect(),
        disabled_dlcs: raw.disabled_dlcs.unwrap_or_default(),
    })
}

/// Read and parse the manifest at `path`
pub fn load_manifest<P: AsRef<Path>>(path: P) -> Result<ModManifest> {
    let path = path.as_ref();
    let json = fs::read_to_string(path).map_err(|source| ExportError::ManifestRead {
        path: path.to_path_buf(),
        source,
    })?;

    let manifest = parse_manifest(&json).map_err(|source| ExportError::ManifestParse {
        path: path.to_path_buf(),
        source,
    })?;

    info!(
        "Loaded manifest {} ({} enabled mods)",
        path.display(),
        manifest.len()
    );
    if !manifest.disabled_dlcs.is_empty() {
        debug!("Manifest lists {} disabled DLC", manifest.disabled_dlcs.len());
    }

    Ok(manifest)
}
