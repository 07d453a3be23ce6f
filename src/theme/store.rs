//! Single source of truth for theme state.

use crate::settings::Settings;
use crate::theme::{Palette, SystemScheme, ThemeListener, ThemeMode};
use std::cell::RefCell;
use std::rc::Rc;

pub const MODE_KEY: &str = "theme.mode";
pub const CUSTOM_PALETTE_KEY: &str = "theme.custom";

/// Owns the theme mode, the optional custom override palette, and the last
/// known OS color-scheme preference. Every mutation persists (best-effort)
/// and notifies registered listeners.
pub struct ThemeStore {
    mode: ThemeMode,
    custom: Option<Palette>,
    system_scheme: SystemScheme,
    settings: Box<dyn Settings>,
    listeners: Vec<Rc<RefCell<dyn ThemeListener>>>,
}

impl ThemeStore {
    /// Restore state from persisted settings. A missing or unparseable mode
    /// falls back to `System`; a missing or unparseable custom palette falls
    /// back to no override.
    pub fn open(settings: Box<dyn Settings>, system_scheme: SystemScheme) -> Self {
        let mode = settings
            .get(MODE_KEY)
            .and_then(|raw| ThemeMode::parse(&raw))
            .unwrap_or(ThemeMode::System);

        let custom = settings.get(CUSTOM_PALETTE_KEY).and_then(|raw| {
            match serde_json::from_str::<Palette>(&raw) {
                Ok(palette) => Some(palette),
                Err(err) => {
                    tracing::warn!("discarding unparseable custom palette: {err}");
                    None
                }
            }
        });

        Self {
            mode,
            custom,
            system_scheme,
            settings,
            listeners: Vec::new(),
        }
    }

    pub fn mode(&self) -> ThemeMode {
        self.mode
    }

    pub fn custom_palette(&self) -> Option<&Palette> {
        self.custom.as_ref()
    }

    pub fn resolved_is_dark(&self) -> bool {
        match self.mode {
            ThemeMode::Dark => true,
            ThemeMode::Light => false,
            ThemeMode::System => self.system_scheme.is_dark(),
        }
    }

    /// The palette currently in effect: the custom override if set, else the
    /// built-in palette for the resolved scheme. Always carries all roles.
    pub fn effective_palette(&self) -> Palette {
        match self.custom {
            Some(palette) => palette,
            None if self.resolved_is_dark() => Palette::DARK,
            None => Palette::LIGHT,
        }
    }

    pub fn subscribe(&mut self, listener: Rc<RefCell<dyn ThemeListener>>) {
        self.listeners.push(listener);
    }

    pub fn set_mode(&mut self, mode: ThemeMode) {
        self.mode = mode;
        self.persist_mode();
        self.notify();
    }

    /// Untyped mode entry point: unknown strings are ignored. This is the
    /// defensive path for values that arrive from outside the type system
    /// (persisted state, user documents).
    pub fn set_mode_str(&mut self, raw: &str) {
        if let Some(mode) = ThemeMode::parse(raw) {
            self.set_mode(mode);
        }
    }

    /// Flip between light and dark. From `System` this resolves to the
    /// opposite of the current scheme, so a toggle always lands on an
    /// explicit mode.
    pub fn toggle_mode(&mut self) {
        let next = match self.mode {
            ThemeMode::System => {
                if self.resolved_is_dark() {
                    ThemeMode::Light
                } else {
                    ThemeMode::Dark
                }
            }
            ThemeMode::Light => ThemeMode::Dark,
            ThemeMode::Dark => ThemeMode::Light,
        };
        self.set_mode(next);
    }

    /// Install a custom override palette, verbatim.
    pub fn set_custom_palette(&mut self, palette: Palette) {
        self.custom = Some(palette);
        self.persist_custom();
        self.notify();
    }

    /// Drop the override, reverting to the mode-derived built-in palette.
    pub fn clear_custom_palette(&mut self) {
        self.custom = None;
        self.persist_custom();
        self.notify();
    }

    /// Feed an OS color-scheme change. Only relevant while in `System` mode;
    /// the preference is still recorded otherwise so a later switch to
    /// `System` resolves correctly.
    pub fn system_scheme_changed(&mut self, scheme: SystemScheme) {
        self.system_scheme = scheme;
        if self.mode == ThemeMode::System {
            self.notify();
        }
    }

    fn persist_mode(&mut self) {
        if let Err(err) = self.settings.set(MODE_KEY, self.mode.as_str()) {
            tracing::warn!("persist theme mode: {err:#}");
        }
    }

    fn persist_custom(&mut self) {
        let result = match &self.custom {
            Some(palette) => match serde_json::to_string(palette) {
                Ok(raw) => self.settings.set(CUSTOM_PALETTE_KEY, &raw),
                Err(err) => Err(err.into()),
            },
            None => self.settings.remove(CUSTOM_PALETTE_KEY),
        };
        if let Err(err) = result {
            tracing::warn!("persist custom palette: {err:#}");
        }
    }

    fn notify(&self) {
        let palette = self.effective_palette();
        let dark = self.resolved_is_dark();
        for listener in &self.listeners {
            listener.borrow_mut().theme_changed(&palette, dark);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::settings::MemorySettings;

    /// Settings handle the test keeps a reference to after the store takes
    /// ownership of its clone.
    #[derive(Clone, Default)]
    struct SharedSettings(Rc<RefCell<MemorySettings>>);

    impl Settings for SharedSettings {
        fn get(&self, key: &str) -> Option<String> {
            self.0.borrow().get(key)
        }
        fn set(&mut self, key: &str, value: &str) -> anyhow::Result<()> {
            self.0.borrow_mut().set(key, value)
        }
        fn remove(&mut self, key: &str) -> anyhow::Result<()> {
            self.0.borrow_mut().remove(key)
        }
    }

    #[derive(Default)]
    struct Recorder {
        events: Vec<(String, bool)>,
    }

    impl ThemeListener for Recorder {
        fn theme_changed(&mut self, palette: &Palette, resolved_dark: bool) {
            self.events.push((palette.primary.to_string(), resolved_dark));
        }
    }

    fn fresh_store(scheme: SystemScheme) -> ThemeStore {
        ThemeStore::open(Box::new(MemorySettings::new()), scheme)
    }

    #[test]
    fn test_fresh_store_defaults_to_system() {
        let store = fresh_store(SystemScheme::Light);
        assert_eq!(store.mode(), ThemeMode::System);
        assert!(store.custom_palette().is_none());
        assert!(!store.resolved_is_dark());
    }

    #[test]
    fn test_fresh_store_with_dark_scheme_uses_dark_builtins() {
        let store = fresh_store(SystemScheme::Dark);
        let palette = store.effective_palette();
        assert_eq!(palette.primary.to_string(), "#60a5fa");
        assert_eq!(palette.background.to_string(), "#111827");
    }

    #[test]
    fn test_invalid_persisted_mode_falls_back_to_system() {
        let settings = MemorySettings::with_entries(&[(MODE_KEY, "midnight")]);
        let store = ThemeStore::open(Box::new(settings), SystemScheme::Light);
        assert_eq!(store.mode(), ThemeMode::System);
    }

    #[test]
    fn test_unparseable_custom_palette_is_discarded() {
        let settings = MemorySettings::with_entries(&[(CUSTOM_PALETTE_KEY, "{oops")]);
        let store = ThemeStore::open(Box::new(settings), SystemScheme::Light);
        assert!(store.custom_palette().is_none());
    }

    #[test]
    fn test_set_mode_str_bogus_is_a_noop() {
        let mut store = fresh_store(SystemScheme::Dark);
        store.set_mode_str("bogus");
        assert_eq!(store.mode(), ThemeMode::System);
        assert!(store.resolved_is_dark());
    }

    #[test]
    fn test_toggle_transitions() {
        let mut store = fresh_store(SystemScheme::Dark);
        store.toggle_mode(); // system resolving dark -> explicit light
        assert_eq!(store.mode(), ThemeMode::Light);
        store.toggle_mode();
        assert_eq!(store.mode(), ThemeMode::Dark);
        store.toggle_mode();
        assert_eq!(store.mode(), ThemeMode::Light);
    }

    #[test]
    fn test_toggle_from_system_resolving_light() {
        let mut store = fresh_store(SystemScheme::Light);
        store.toggle_mode();
        assert_eq!(store.mode(), ThemeMode::Dark);
    }

    #[test]
    fn test_clear_restores_builtin_not_override() {
        let mut store = fresh_store(SystemScheme::Light);
        let custom = Palette::LIGHT.with(crate::theme::Role::Primary, crate::color::HexColor::rgb(0, 0, 0));
        store.set_custom_palette(custom);
        assert_eq!(store.effective_palette().primary.to_string(), "#000000");

        store.clear_custom_palette();
        assert_eq!(store.effective_palette(), Palette::LIGHT);
    }

    #[test]
    fn test_state_survives_reopen() {
        let shared = SharedSettings::default();
        {
            let mut store = ThemeStore::open(Box::new(shared.clone()), SystemScheme::Light);
            store.set_mode(ThemeMode::Dark);
            store.set_custom_palette(Palette::DARK);
        }
        let store = ThemeStore::open(Box::new(shared), SystemScheme::Light);
        assert_eq!(store.mode(), ThemeMode::Dark);
        assert_eq!(store.custom_palette(), Some(&Palette::DARK));
    }

    #[test]
    fn test_write_failures_are_swallowed() {
        let mut settings = MemorySettings::new();
        settings.fail_writes = true;
        let mut store = ThemeStore::open(Box::new(settings), SystemScheme::Light);

        // Mutations still take effect in memory even when persistence fails.
        store.set_mode(ThemeMode::Dark);
        store.set_custom_palette(Palette::DARK);
        store.clear_custom_palette();
        assert_eq!(store.mode(), ThemeMode::Dark);
        assert!(store.custom_palette().is_none());
    }

    #[test]
    fn test_listeners_fire_on_every_mutation() {
        let mut store = fresh_store(SystemScheme::Light);
        let recorder = Rc::new(RefCell::new(Recorder::default()));
        store.subscribe(recorder.clone());

        store.set_mode(ThemeMode::Dark);
        store.set_custom_palette(Palette::LIGHT);
        store.clear_custom_palette();
        store.toggle_mode();

        let events = &recorder.borrow().events;
        assert_eq!(events.len(), 4);
        assert_eq!(events[0], ("#60a5fa".to_string(), true));
        // Custom override wins regardless of resolved scheme.
        assert_eq!(events[1], ("#3b82f6".to_string(), true));
        assert_eq!(events[2], ("#60a5fa".to_string(), true));
        assert_eq!(events[3], ("#3b82f6".to_string(), false));
    }

    #[test]
    fn test_scheme_change_notifies_only_in_system_mode() {
        let mut store = fresh_store(SystemScheme::Light);
        let recorder = Rc::new(RefCell::new(Recorder::default()));
        store.subscribe(recorder.clone());

        store.system_scheme_changed(SystemScheme::Dark);
        assert_eq!(recorder.borrow().events.len(), 1);
        assert!(store.resolved_is_dark());

        store.set_mode(ThemeMode::Light);
        let before = recorder.borrow().events.len();
        store.system_scheme_changed(SystemScheme::Light);
        assert_eq!(recorder.borrow().events.len(), before);

        // The recorded preference still applies once back in system mode.
        store.set_mode(ThemeMode::System);
        assert!(!store.resolved_is_dark());
    }
}
