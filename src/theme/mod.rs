//! Theme engine: palette state, projection, and interchange.

pub mod apply;
pub mod palette;
pub mod presets;
pub mod store;
pub mod transfer;

pub use apply::{CssWriter, SurfaceWriter, ThemeApplier, detect_system_scheme};
pub use palette::{Palette, PaletteOverlay, Role};
pub use store::ThemeStore;
pub use transfer::{EXPORT_FILE_NAME, ImportError, ThemeDocument};

use serde::{Deserialize, Serialize};

/// User-selected theme mode. `System` defers to the OS color-scheme
/// preference.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum ThemeMode {
    Light,
    Dark,
    System,
}

impl ThemeMode {
    pub fn as_str(self) -> &'static str {
        match self {
            ThemeMode::Light => "light",
            ThemeMode::Dark => "dark",
            ThemeMode::System => "system",
        }
    }

    /// Parse the persisted literal. Anything else is `None` so corrupted
    /// stored values fall back instead of erroring.
    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "light" => Some(ThemeMode::Light),
            "dark" => Some(ThemeMode::Dark),
            "system" => Some(ThemeMode::System),
            _ => None,
        }
    }
}

/// The OS-reported color-scheme preference.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SystemScheme {
    #[default]
    Light,
    Dark,
}

impl SystemScheme {
    pub fn is_dark(self) -> bool {
        matches!(self, SystemScheme::Dark)
    }
}

/// Observer registered on [`ThemeStore`]; called after every mutation with
/// the new effective palette and the resolved dark flag.
pub trait ThemeListener {
    fn theme_changed(&mut self, palette: &Palette, resolved_dark: bool);
}
