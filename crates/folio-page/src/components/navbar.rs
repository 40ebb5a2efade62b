//! Fixed top navigation bar with theme toggle and mobile drawer.

use dioxus::prelude::*;

use crate::state::{NavTarget, PageContext};

/// Site title shown at the left of the bar.
pub const SITE_TITLE: &str = "My Portopolio";

/// Top bar. Wide viewports show the inline links; narrow ones show the
/// hamburger, which opens a stacked drawer under the bar.
#[component]
pub fn Navbar() -> Element {
    let mut ctx = use_context::<PageContext>();

    let current = ctx.theme();
    let is_open = ctx.is_menu_open();

    rsx! {
        nav {
            class: "navbar",

            div {
                class: "navbar-inner",

                h1 { class: "navbar-title", "{SITE_TITLE}" }

                div {
                    class: "nav-links",

                    button {
                        class: "theme-toggle",
                        title: "Switch to {current.inverted().token()} theme",
                        onclick: move |_| {
                            ctx.toggle_theme();
                        },
                        "{current.toggle_label()}"
                    }

                    for target in NavTarget::ALL {
                        a {
                            key: "{target.anchor()}",
                            class: "nav-link",
                            href: "{target.href()}",
                            "{target.label()}"
                        }
                    }
                }

                button {
                    class: "nav-burger",
                    "aria-expanded": "{is_open}",
                    onclick: move |_| ctx.toggle_menu(),
                    "☰"
                }
            }

            if is_open {
                div {
                    class: "nav-drawer",
                    for target in NavTarget::ALL {
                        a {
                            key: "{target.anchor()}",
                            class: "nav-drawer-link",
                            href: "{target.href()}",
                            onclick: move |_| {
                                ctx.select(target);
                            },
                            "{target.label()}"
                        }
                    }
                }
            }
        }
    }
}
