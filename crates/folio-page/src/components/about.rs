//! About section with the skills list.

use dioxus::prelude::*;
use folio_ui::motion::{FADE_UP, STAGGER};
use folio_ui::{Icon, SectionTitle};

use crate::catalog::{PROFILE, SKILLS};
use crate::state::NavTarget;

#[component]
pub fn About() -> Element {
    rsx! {
        section {
            id: "{NavTarget::About.anchor()}",
            class: "about",

            div {
                class: "about-grid",

                div {
                    class: "about-photo-wrap",
                    style: "{STAGGER.style(0)}",
                    img {
                        class: "about-photo",
                        src: "{PROFILE.photo}",
                        alt: "About Me",
                        width: "500",
                        height: "350",
                    }
                }

                div {
                    class: "about-copy",
                    style: "{STAGGER.style(1)}",

                    SectionTitle { icon: Icon::User, title: "About Me" }

                    for (i, paragraph) in PROFILE.about.iter().enumerate() {
                        p {
                            class: "about-paragraph",
                            style: "{FADE_UP.style(i)}",
                            "{paragraph}"
                        }
                    }

                    h4 { class: "skills-heading", "Skills" }

                    div {
                        class: "skills",
                        for (i, skill) in SKILLS.iter().enumerate() {
                            span {
                                key: "{skill}",
                                class: "skill-chip",
                                style: "{STAGGER.style(i)}",
                                "{skill}"
                            }
                        }
                    }
                }
            }
        }
    }
}
