//! Page-wide state shared with components via Dioxus context.

use dioxus::prelude::*;
use folio_ui::{ThemePreference, ThemeStore};

use super::{NavTarget, NavigationMenu};

/// Signals provided by [`PortfolioPage`](crate::components::PortfolioPage).
///
/// Reading either signal subscribes the reading component, so a theme
/// change or a menu toggle re-renders exactly the views that depend on it.
#[derive(Clone, Copy)]
pub struct PageContext {
    pub theme: Signal<ThemeStore>,
    pub menu: Signal<NavigationMenu>,
}

impl PageContext {
    /// Active palette. Subscribes the calling component.
    pub fn theme(&self) -> ThemePreference {
        self.theme.read().read()
    }

    /// Whether the drawer is open. Subscribes the calling component.
    pub fn is_menu_open(&self) -> bool {
        self.menu.read().is_open()
    }

    /// Switches to the other palette and persists it.
    pub fn toggle_theme(&mut self) -> ThemePreference {
        let current = self.theme.peek().read();
        let next = current.inverted();
        tracing::debug!(from = current.token(), to = next.token(), "Theme toggled");
        self.theme.write().set(next);
        next
    }

    /// Hamburger button: opens or closes the drawer.
    pub fn toggle_menu(&mut self) {
        self.menu.write().toggle();
    }

    /// Drawer link: closes the drawer and returns the target href.
    pub fn select(&mut self, target: NavTarget) -> &'static str {
        let href = self.menu.write().select(target);
        tracing::debug!(href, "Drawer link selected");
        href
    }
}

/// Returns the page context visible from the current component, creating and
/// providing it from `store` when no ancestor already did.
pub fn use_page_context(store: ThemeStore) -> PageContext {
    use_hook(move || {
        try_consume_context::<PageContext>().unwrap_or_else(|| {
            provide_context(PageContext {
                theme: Signal::new(store),
                menu: Signal::new(NavigationMenu::new()),
            })
        })
    })
}
