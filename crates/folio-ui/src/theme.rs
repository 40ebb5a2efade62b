//! Theme system for Folio.
//!
//! Two palettes, Light and Dark. The active one is owned by a [`ThemeStore`]
//! that reads and writes a single durable slot.

use std::cell::OnceCell;
use std::sync::Arc;

use dioxus::prelude::*;
use folio_storage::SlotStore;

/// Name of the durable slot holding the theme token.
pub const THEME_SLOT: &str = "theme";

/// Available palettes.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum ThemePreference {
    #[default]
    Light,
    Dark,
}

impl ThemePreference {
    /// Returns the token persisted in the theme slot.
    pub fn token(&self) -> &'static str {
        match self {
            ThemePreference::Light => "light",
            ThemePreference::Dark => "dark",
        }
    }

    /// Parses a stored token. Only the exact Dark token selects Dark.
    pub fn from_token(token: &str) -> Self {
        if token == ThemePreference::Dark.token() {
            ThemePreference::Dark
        } else {
            ThemePreference::Light
        }
    }

    /// Returns the other palette.
    pub fn inverted(&self) -> Self {
        match self {
            ThemePreference::Light => ThemePreference::Dark,
            ThemePreference::Dark => ThemePreference::Light,
        }
    }

    /// Returns the CSS data-theme attribute value.
    pub fn css_value(&self) -> &'static str {
        self.token()
    }

    /// Returns the palette class applied to the root container.
    pub fn palette_class(&self) -> &'static str {
        match self {
            ThemePreference::Light => "theme-light",
            ThemePreference::Dark => "theme-dark",
        }
    }

    /// Glyph shown on the toggle: the palette you would switch to.
    pub fn toggle_label(&self) -> &'static str {
        match self {
            ThemePreference::Light => "🌙",
            ThemePreference::Dark => "☀️",
        }
    }
}

/// Owner of the active theme preference.
///
/// The durable slot is read lazily on the first [`read`](Self::read) and
/// written on every [`set`](Self::set). Storage failures never reach the
/// caller: a failed read means Light, a failed write only loses persistence.
#[derive(Clone)]
pub struct ThemeStore {
    slot: Arc<dyn SlotStore>,
    current: OnceCell<ThemePreference>,
}

impl ThemeStore {
    /// Create a store over the given slot. Nothing is read yet.
    pub fn new(slot: Arc<dyn SlotStore>) -> Self {
        Self {
            slot,
            current: OnceCell::new(),
        }
    }

    /// Returns the active preference, loading it from storage the first time.
    pub fn read(&self) -> ThemePreference {
        *self.current.get_or_init(|| self.load())
    }

    /// Makes `pref` active and writes its token to the slot.
    pub fn set(&mut self, pref: ThemePreference) {
        self.current = OnceCell::from(pref);

        if let Err(e) = self.slot.set(THEME_SLOT, pref.token()) {
            tracing::warn!(error = %e, theme = pref.token(), "Failed to persist theme preference");
        } else {
            tracing::debug!(theme = pref.token(), "Theme preference saved");
        }
    }

    /// Switches to the other palette and returns it.
    pub fn toggle(&mut self) -> ThemePreference {
        let next = self.read().inverted();
        self.set(next);
        next
    }

    fn load(&self) -> ThemePreference {
        match self.slot.get(THEME_SLOT) {
            Ok(Some(token)) => {
                let pref = ThemePreference::from_token(&token);
                tracing::debug!(stored = %token, theme = pref.token(), "Loaded theme preference");
                pref
            }
            Ok(None) => ThemePreference::default(),
            Err(e) => {
                tracing::warn!(error = %e, "Theme storage unavailable, using default");
                ThemePreference::default()
            }
        }
    }
}

impl PartialEq for ThemeStore {
    fn eq(&self, other: &Self) -> bool {
        Arc::ptr_eq(&self.slot, &other.slot) && self.current.get() == other.current.get()
    }
}

impl std::fmt::Debug for ThemeStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ThemeStore")
            .field("current", &self.current.get())
            .finish_non_exhaustive()
    }
}

/// Themed root wrapper component.
#[component]
pub fn ThemedRoot(theme: ThemePreference, children: Element) -> Element {
    rsx! {
        div {
            class: "themed-root {theme.palette_class()}",
            "data-theme": "{theme.css_value()}",
            {children}
        }
    }
}
