//! Named-role palettes and the built-in light/dark color sets.

use crate::color::HexColor;
use serde::{Deserialize, Serialize};

/// The closed set of color roles every palette must fill.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Role {
    Primary,
    Secondary,
    Accent,
    Background,
    Surface,
    Text,
    TextSecondary,
    Border,
    Success,
    Warning,
    Error,
    Info,
}

impl Role {
    pub const ALL: [Role; 12] = [
        Role::Primary,
        Role::Secondary,
        Role::Accent,
        Role::Background,
        Role::Surface,
        Role::Text,
        Role::TextSecondary,
        Role::Border,
        Role::Success,
        Role::Warning,
        Role::Error,
        Role::Info,
    ];

    /// Kebab-case suffix used for CSS custom properties (`--color-<name>`).
    pub fn css_name(self) -> &'static str {
        match self {
            Role::Primary => "primary",
            Role::Secondary => "secondary",
            Role::Accent => "accent",
            Role::Background => "background",
            Role::Surface => "surface",
            Role::Text => "text",
            Role::TextSecondary => "text-secondary",
            Role::Border => "border",
            Role::Success => "success",
            Role::Warning => "warning",
            Role::Error => "error",
            Role::Info => "info",
        }
    }

    /// Parse a role from either its JSON (camelCase) or CSS (kebab-case)
    /// spelling.
    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "primary" => Some(Role::Primary),
            "secondary" => Some(Role::Secondary),
            "accent" => Some(Role::Accent),
            "background" => Some(Role::Background),
            "surface" => Some(Role::Surface),
            "text" => Some(Role::Text),
            "textSecondary" | "text-secondary" => Some(Role::TextSecondary),
            "border" => Some(Role::Border),
            "success" => Some(Role::Success),
            "warning" => Some(Role::Warning),
            "error" => Some(Role::Error),
            "info" => Some(Role::Info),
            _ => None,
        }
    }
}

/// A complete role-to-color mapping. Immutable value object: edits go
/// through [`Palette::with`], which returns a new palette.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Palette {
    pub primary: HexColor,
    pub secondary: HexColor,
    pub accent: HexColor,
    pub background: HexColor,
    pub surface: HexColor,
    pub text: HexColor,
    pub text_secondary: HexColor,
    pub border: HexColor,
    pub success: HexColor,
    pub warning: HexColor,
    pub error: HexColor,
    pub info: HexColor,
}

impl Palette {
    /// Built-in light palette.
    pub const LIGHT: Self = Self {
        primary: HexColor::rgb(0x3b, 0x82, 0xf6),        // #3b82f6
        secondary: HexColor::rgb(0x8b, 0x5c, 0xf6),      // #8b5cf6
        accent: HexColor::rgb(0xf5, 0x9e, 0x0b),         // #f59e0b
        background: HexColor::rgb(0xf9, 0xfa, 0xfb),     // #f9fafb
        surface: HexColor::rgb(0xff, 0xff, 0xff),        // #ffffff
        text: HexColor::rgb(0x11, 0x18, 0x27),           // #111827
        text_secondary: HexColor::rgb(0x6b, 0x72, 0x80), // #6b7280
        border: HexColor::rgb(0xe5, 0xe7, 0xeb),         // #e5e7eb
        success: HexColor::rgb(0x10, 0xb9, 0x81),        // #10b981
        warning: HexColor::rgb(0xf5, 0x9e, 0x0b),        // #f59e0b
        error: HexColor::rgb(0xef, 0x44, 0x44),          // #ef4444
        info: HexColor::rgb(0x3b, 0x82, 0xf6),           // #3b82f6
    };

    /// Built-in dark palette.
    pub const DARK: Self = Self {
        primary: HexColor::rgb(0x60, 0xa5, 0xfa),        // #60a5fa
        secondary: HexColor::rgb(0xa7, 0x8b, 0xfa),      // #a78bfa
        accent: HexColor::rgb(0xfb, 0xbf, 0x24),         // #fbbf24
        background: HexColor::rgb(0x11, 0x18, 0x27),     // #111827
        surface: HexColor::rgb(0x1f, 0x29, 0x37),        // #1f2937
        text: HexColor::rgb(0xf9, 0xfa, 0xfb),           // #f9fafb
        text_secondary: HexColor::rgb(0x9c, 0xa3, 0xaf), // #9ca3af
        border: HexColor::rgb(0x37, 0x41, 0x51),         // #374151
        success: HexColor::rgb(0x34, 0xd3, 0x99),        // #34d399
        warning: HexColor::rgb(0xfb, 0xbf, 0x24),        // #fbbf24
        error: HexColor::rgb(0xf8, 0x71, 0x71),          // #f87171
        info: HexColor::rgb(0x60, 0xa5, 0xfa),           // #60a5fa
    };

    pub fn get(&self, role: Role) -> HexColor {
        match role {
            Role::Primary => self.primary,
            Role::Secondary => self.secondary,
            Role::Accent => self.accent,
            Role::Background => self.background,
            Role::Surface => self.surface,
            Role::Text => self.text,
            Role::TextSecondary => self.text_secondary,
            Role::Border => self.border,
            Role::Success => self.success,
            Role::Warning => self.warning,
            Role::Error => self.error,
            Role::Info => self.info,
        }
    }

    /// New palette with one role replaced.
    pub fn with(&self, role: Role, color: HexColor) -> Self {
        let mut next = *self;
        match role {
            Role::Primary => next.primary = color,
            Role::Secondary => next.secondary = color,
            Role::Accent => next.accent = color,
            Role::Background => next.background = color,
            Role::Surface => next.surface = color,
            Role::Text => next.text = color,
            Role::TextSecondary => next.text_secondary = color,
            Role::Border => next.border = color,
            Role::Success => next.success = color,
            Role::Warning => next.warning = color,
            Role::Error => next.error = color,
            Role::Info => next.info = color,
        }
        next
    }

    pub fn iter(&self) -> impl Iterator<Item = (Role, HexColor)> + '_ {
        Role::ALL.iter().map(move |&role| (role, self.get(role)))
    }
}

/// Partial palette used when importing user documents: unspecified roles
/// fall through to whatever base palette the overlay is applied to.
#[derive(Debug, Clone, Copy, Default, Deserialize)]
#[serde(deny_unknown_fields, rename_all = "camelCase")]
pub struct PaletteOverlay {
    pub primary: Option<HexColor>,
    pub secondary: Option<HexColor>,
    pub accent: Option<HexColor>,
    pub background: Option<HexColor>,
    pub surface: Option<HexColor>,
    pub text: Option<HexColor>,
    pub text_secondary: Option<HexColor>,
    pub border: Option<HexColor>,
    pub success: Option<HexColor>,
    pub warning: Option<HexColor>,
    pub error: Option<HexColor>,
    pub info: Option<HexColor>,
}

impl PaletteOverlay {
    pub fn apply_over(&self, base: &Palette) -> Palette {
        Palette {
            primary: self.primary.unwrap_or(base.primary),
            secondary: self.secondary.unwrap_or(base.secondary),
            accent: self.accent.unwrap_or(base.accent),
            background: self.background.unwrap_or(base.background),
            surface: self.surface.unwrap_or(base.surface),
            text: self.text.unwrap_or(base.text),
            text_secondary: self.text_secondary.unwrap_or(base.text_secondary),
            border: self.border.unwrap_or(base.border),
            success: self.success.unwrap_or(base.success),
            warning: self.warning.unwrap_or(base.warning),
            error: self.error.unwrap_or(base.error),
            info: self.info.unwrap_or(base.info),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_iter_covers_every_role_once() {
        let roles: Vec<Role> = Palette::LIGHT.iter().map(|(r, _)| r).collect();
        assert_eq!(roles.len(), 12);
        assert_eq!(roles, Role::ALL.to_vec());
    }

    #[test]
    fn test_with_is_non_destructive() {
        let black = HexColor::rgb(0, 0, 0);
        let edited = Palette::LIGHT.with(Role::Primary, black);
        assert_eq!(edited.primary, black);
        assert_eq!(edited.secondary, Palette::LIGHT.secondary);
        assert_ne!(Palette::LIGHT.primary, black);
    }

    #[test]
    fn test_serde_camel_case_keys() {
        let json = serde_json::to_value(Palette::LIGHT).unwrap();
        let obj = json.as_object().unwrap();
        assert_eq!(obj.len(), 12);
        assert_eq!(obj["primary"], "#3b82f6");
        assert_eq!(obj["textSecondary"], "#6b7280");
        assert!(!obj.contains_key("text_secondary"));
    }

    #[test]
    fn test_role_parse_both_spellings() {
        assert_eq!(Role::parse("textSecondary"), Some(Role::TextSecondary));
        assert_eq!(Role::parse("text-secondary"), Some(Role::TextSecondary));
        assert_eq!(Role::parse("primary"), Some(Role::Primary));
        assert_eq!(Role::parse("tertiary"), None);
    }

    #[test]
    fn test_overlay_fills_from_base() {
        let overlay: PaletteOverlay =
            serde_json::from_str(r##"{"primary":"#000000"}"##).unwrap();
        let merged = overlay.apply_over(&Palette::DARK);
        assert_eq!(merged.primary.to_string(), "#000000");
        assert_eq!(merged.background, Palette::DARK.background);
    }

    #[test]
    fn test_overlay_rejects_unknown_and_non_string() {
        assert!(serde_json::from_str::<PaletteOverlay>(r##"{"bogus":"#000000"}"##).is_err());
        assert!(serde_json::from_str::<PaletteOverlay>(r#"{"primary":7}"#).is_err());
        assert!(serde_json::from_str::<PaletteOverlay>(r#"[]"#).is_err());
    }
}
