//! Projects grid.

use dioxus::prelude::*;
use folio_ui::motion::STAGGER;
use folio_ui::{Glyph, Icon, SectionTitle};

use crate::catalog::{PROJECTS, Project};
use crate::state::NavTarget;

/// Pixel size of the glyphs on a card.
const CARD_GLYPH_SIZE: u32 = 24;

#[component]
pub fn Projects() -> Element {
    rsx! {
        section {
            id: "{NavTarget::Projects.anchor()}",
            class: "projects",

            div {
                class: "container",

                SectionTitle { icon: Icon::Briefcase, title: "Projects" }

                div {
                    class: "project-grid",
                    for (index, project) in PROJECTS.iter().enumerate() {
                        ProjectCard { key: "{project.title}", project: *project, index }
                    }
                }
            }
        }
    }
}

/// One card: screenshot, glyph row, title, description, tech tags.
#[component]
pub fn ProjectCard(project: Project, index: usize) -> Element {
    rsx! {
        article {
            class: "project-card",
            style: "{STAGGER.style(index)}",

            div {
                class: "project-shot",
                img { src: "{project.image}", alt: "{project.title}" }
            }

            div {
                class: "project-body",

                div {
                    class: "project-glyphs",
                    {Icon::Code.render(CARD_GLYPH_SIZE)}
                    a {
                        class: "project-link",
                        href: "{project.link}",
                        title: "Open {project.title}",
                        {Icon::ExternalLink.render(CARD_GLYPH_SIZE)}
                    }
                }

                h4 { class: "project-title", "{project.title}" }
                p { class: "project-description", "{project.description}" }

                div {
                    class: "project-tags",
                    for tech in project.tech.iter() {
                        span { key: "{tech}", class: "tech-tag", "{tech}" }
                    }
                }
            }
        }
    }
}
