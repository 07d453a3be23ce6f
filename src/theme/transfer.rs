//! Theme import/export as portable JSON documents.

use crate::theme::{Palette, PaletteOverlay, ThemeMode, ThemeStore};
use anyhow::Context;
use serde::{Deserialize, Serialize};
use time::OffsetDateTime;
use time::format_description::well_known::Rfc3339;

/// Suggested file name when saving an exported theme.
pub const EXPORT_FILE_NAME: &str = "home-hub-theme.json";

const DEFAULT_THEME_NAME: &str = "Custom Theme";

/// The interchange shape: `{ name, colors, mode, createdAt }`.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ThemeDocument {
    pub name: String,
    pub colors: Palette,
    pub mode: ThemeMode,
    pub created_at: String,
}

/// Why a user-supplied theme document was rejected. Import never panics;
/// every failure path surfaces here and leaves the store untouched.
#[derive(Debug, thiserror::Error)]
pub enum ImportError {
    #[error("document is not valid JSON: {0}")]
    Json(serde_json::Error),
    #[error("document has no `colors` field")]
    MissingColors,
    #[error("`colors` is not a valid role-to-hex mapping: {0}")]
    Colors(serde_json::Error),
    #[error("unrecognized `mode` value {0}")]
    Mode(serde_json::Value),
}

/// Snapshot the current effective palette and mode as a document.
pub fn export(store: &ThemeStore, name: Option<&str>) -> anyhow::Result<ThemeDocument> {
    let created_at = OffsetDateTime::now_utc()
        .format(&Rfc3339)
        .context("format export timestamp")?;
    Ok(ThemeDocument {
        name: name.unwrap_or(DEFAULT_THEME_NAME).to_string(),
        colors: store.effective_palette(),
        mode: store.mode(),
        created_at,
    })
}

/// Validate a raw document and, on success, install its colors as the
/// custom override (partial color sets are filled from the current
/// effective palette) and apply its mode if one is present.
pub fn import(store: &mut ThemeStore, raw: &str) -> Result<Palette, ImportError> {
    let doc: serde_json::Value = serde_json::from_str(raw).map_err(ImportError::Json)?;

    let colors = doc.get("colors").ok_or(ImportError::MissingColors)?;
    let overlay: PaletteOverlay =
        serde_json::from_value(colors.clone()).map_err(ImportError::Colors)?;

    // Validate the optional mode before mutating anything, so a rejected
    // document leaves the store exactly as it was.
    let mode = match doc.get("mode") {
        None => None,
        Some(value) => {
            let parsed = value.as_str().and_then(ThemeMode::parse);
            Some(parsed.ok_or_else(|| ImportError::Mode(value.clone()))?)
        }
    };

    let palette = overlay.apply_over(&store.effective_palette());
    store.set_custom_palette(palette);
    if let Some(mode) = mode {
        store.set_mode(mode);
    }
    Ok(palette)
}
