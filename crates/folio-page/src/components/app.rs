//! Root page component.

use dioxus::prelude::*;
use folio_ui::{ThemeStore, ThemedRoot};

use crate::state::use_page_context;

use super::{About, Contact, Footer, Hero, Navbar, Projects};

/// The whole portfolio page.
///
/// Takes ownership of the theme store and shares it, with the drawer state,
/// through [`PageContext`](crate::state::PageContext).
#[component]
pub fn PortfolioPage(store: ThemeStore) -> Element {
    let ctx = use_page_context(store);
    let palette = ctx.theme();

    use_hook(move || tracing::info!(theme = palette.token(), "Portfolio page mounted"));
    use_drop(|| tracing::info!("Portfolio page unmounted"));

    rsx! {
        ThemedRoot {
            theme: palette,
            div {
                class: "portfolio",

                Navbar {}

                main {
                    Hero {}
                    About {}
                    Projects {}
                    Contact {}
                }

                Footer {}
            }
        }
    }
}
