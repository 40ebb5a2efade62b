//! Section heading with a leading glyph.

use dioxus::prelude::*;

use crate::icons::{Glyph, Icon};

/// Pixel size of the glyph beside a section heading.
pub const SECTION_GLYPH_SIZE: u32 = 32;

/// Horizontal glyph-plus-heading block; `centered` centers it in its row.
#[component]
pub fn SectionTitle(
    icon: Icon,
    title: String,
    #[props(default)] centered: bool,
) -> Element {
    let class = if centered {
        "section-title section-title-centered"
    } else {
        "section-title"
    };

    rsx! {
        div {
            class: "{class}",
            {icon.render(SECTION_GLYPH_SIZE)}
            h3 { class: "section-title-text", "{title}" }
        }
    }
}
