//! Hero banner.

use dioxus::prelude::*;
use folio_ui::motion;

use crate::catalog::PROFILE;
use crate::state::NavTarget;

#[component]
pub fn Hero() -> Element {
    rsx! {
        section {
            id: "{NavTarget::Home.anchor()}",
            class: "hero",
            style: "{motion::HERO.style(0)}",

            div {
                class: "hero-grid",

                div {
                    class: "hero-copy",
                    h2 { class: "hero-name", "{PROFILE.name}" }
                    p { class: "hero-role", "{PROFILE.role}" }
                    for line in PROFILE.intro.iter() {
                        p { class: "hero-intro", "{line}" }
                    }

                    div {
                        class: "hero-actions",
                        a {
                            class: "btn btn-primary",
                            href: "{NavTarget::Contact.href()}",
                            "Get In Touch"
                        }
                        a {
                            class: "btn btn-outline",
                            href: "{NavTarget::Projects.href()}",
                            "View Projects"
                        }
                    }
                }

                div {
                    class: "hero-photo-wrap",
                    img {
                        class: "hero-photo",
                        src: "{PROFILE.photo}",
                        alt: "{PROFILE.name}",
                        width: "500",
                        height: "500",
                    }
                }
            }
        }
    }
}
