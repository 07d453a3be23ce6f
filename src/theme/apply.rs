//! Projection of the effective palette onto a rendering surface.

use crate::theme::{Palette, SystemScheme, ThemeListener};

/// The one capability the applier needs from its host: setting a CSS custom
/// property on the document root (or whatever stands in for it).
pub trait SurfaceWriter {
    fn set_property(&mut self, name: &str, value: &str);
}

/// Writes one `--color-<role>` property per palette role. Re-applying the
/// same palette is safe; it only repeats the property writes.
pub struct ThemeApplier<W: SurfaceWriter> {
    surface: W,
}

impl<W: SurfaceWriter> ThemeApplier<W> {
    pub fn new(surface: W) -> Self {
        Self { surface }
    }

    pub fn apply(&mut self, palette: &Palette) {
        for (role, color) in palette.iter() {
            let name = format!("--color-{}", role.css_name());
            self.surface.set_property(&name, &color.to_string());
        }
        tracing::debug!("applied {} color properties", crate::theme::Role::ALL.len());
    }

    pub fn surface(&self) -> &W {
        &self.surface
    }

    pub fn into_surface(self) -> W {
        self.surface
    }
}

impl<W: SurfaceWriter> ThemeListener for ThemeApplier<W> {
    fn theme_changed(&mut self, palette: &Palette, _resolved_dark: bool) {
        self.apply(palette);
    }
}

/// Surface that accumulates properties and renders them as a `:root` block.
/// Properties keep first-write order; rewrites update in place.
#[derive(Debug, Default)]
pub struct CssWriter {
    properties: Vec<(String, String)>,
}

impl CssWriter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn properties(&self) -> &[(String, String)] {
        &self.properties
    }

    pub fn render(&self) -> String {
        let mut out = String::from(":root {\n");
        for (name, value) in &self.properties {
            out.push_str("  ");
            out.push_str(name);
            out.push_str(": ");
            out.push_str(value);
            out.push_str(";\n");
        }
        out.push_str("}\n");
        out
    }
}

impl SurfaceWriter for CssWriter {
    fn set_property(&mut self, name: &str, value: &str) {
        match self.properties.iter_mut().find(|(n, _)| n == name) {
            Some(entry) => entry.1 = value.to_string(),
            None => self.properties.push((name.to_string(), value.to_string())),
        }
    }
}

/// Probe the host's color-scheme preference. There is no portable
/// synchronous OS query, so this consults the `HEARTH_COLOR_SCHEME`
/// environment variable; `None` means the capability is absent and callers
/// treat it as a no-op.
pub fn detect_system_scheme() -> Option<SystemScheme> {
    match std::env::var("HEARTH_COLOR_SCHEME").ok()?.as_str() {
        "dark" => Some(SystemScheme::Dark),
        "light" => Some(SystemScheme::Light),
        other => {
            tracing::warn!("ignoring unrecognized HEARTH_COLOR_SCHEME value {other:?}");
            None
        }
    }
}
