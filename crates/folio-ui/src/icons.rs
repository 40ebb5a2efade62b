//! Inline SVG glyphs.
//!
//! Outline icons on a 24x24 grid, stroked with `currentColor` so they pick up
//! the surrounding text color in either palette.

use dioxus::prelude::*;

/// Anything that can draw itself as a square glyph of a given pixel size.
pub trait Glyph {
    fn render(&self, size: u32) -> Element;
}

/// Glyphs used by the portfolio.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Icon {
    User,
    Briefcase,
    Mail,
    Code,
    ExternalLink,
    Github,
    Linkedin,
    Whatsapp,
}

/// One primitive of a glyph outline.
#[derive(Clone, Copy, Debug, PartialEq)]
enum Shape {
    Path(&'static str),
    Polyline(&'static str),
    Circle { cx: f32, cy: f32, r: f32 },
    Rect { x: f32, y: f32, width: f32, height: f32, rx: f32 },
}

impl Shape {
    fn render(&self) -> Element {
        match *self {
            Shape::Path(d) => rsx! { path { "d": "{d}" } },
            Shape::Polyline(points) => rsx! { polyline { "points": "{points}" } },
            Shape::Circle { cx, cy, r } => rsx! {
                circle { "cx": "{cx}", "cy": "{cy}", "r": "{r}" }
            },
            Shape::Rect { x, y, width, height, rx } => rsx! {
                rect {
                    "x": "{x}",
                    "y": "{y}",
                    "width": "{width}",
                    "height": "{height}",
                    "rx": "{rx}",
                }
            },
        }
    }
}

impl Icon {
    /// Short lowercase name, used in the `glyph-*` class.
    pub fn name(&self) -> &'static str {
        match self {
            Icon::User => "user",
            Icon::Briefcase => "briefcase",
            Icon::Mail => "mail",
            Icon::Code => "code",
            Icon::ExternalLink => "external-link",
            Icon::Github => "github",
            Icon::Linkedin => "linkedin",
            Icon::Whatsapp => "whatsapp",
        }
    }

    fn shapes(&self) -> &'static [Shape] {
        match self {
            Icon::User => &[
                Shape::Path("M19 21v-2a4 4 0 0 0-4-4H9a4 4 0 0 0-4 4v2"),
                Shape::Circle { cx: 12.0, cy: 7.0, r: 4.0 },
            ],
            Icon::Briefcase => &[
                Shape::Path("M16 20V4a2 2 0 0 0-2-2h-4a2 2 0 0 0-2 2v16"),
                Shape::Rect { x: 2.0, y: 6.0, width: 20.0, height: 14.0, rx: 2.0 },
            ],
            Icon::Mail => &[
                Shape::Rect { x: 2.0, y: 4.0, width: 20.0, height: 16.0, rx: 2.0 },
                Shape::Path("m22 7-8.97 5.7a1.94 1.94 0 0 1-2.06 0L2 7"),
            ],
            Icon::Code => &[
                Shape::Polyline("16 18 22 12 16 6"),
                Shape::Polyline("8 6 2 12 8 18"),
            ],
            Icon::ExternalLink => &[
                Shape::Path("M15 3h6v6"),
                Shape::Path("M10 14 21 3"),
                Shape::Path("M18 13v6a2 2 0 0 1-2 2H5a2 2 0 0 1-2-2V8a2 2 0 0 1 2-2h6"),
            ],
            Icon::Github => &[
                Shape::Path(
                    "M15 22v-4a4.8 4.8 0 0 0-1-3.5c3 0 6-2 6-5.5.08-1.25-.27-2.48-1-3.5.28-1.15.28-2.35 0-3.5 0 0-1 0-3 1.5-2.64-.5-5.36-.5-8 0C6 2 5 2 5 2c-.3 1.15-.3 2.35 0 3.5A5.403 5.403 0 0 0 4 9c0 3.5 3 5.5 6 5.5-.39.49-.68 1.05-.85 1.65-.17.6-.22 1.23-.15 1.85v4",
                ),
                Shape::Path("M9 18c-4.51 2-5-2-7-2"),
            ],
            Icon::Linkedin => &[
                Shape::Path("M16 8a6 6 0 0 1 6 6v7h-4v-7a2 2 0 0 0-2-2 2 2 0 0 0-2 2v7h-4v-7a6 6 0 0 1 6-6z"),
                Shape::Rect { x: 2.0, y: 9.0, width: 4.0, height: 12.0, rx: 0.0 },
                Shape::Circle { cx: 4.0, cy: 4.0, r: 2.0 },
            ],
            Icon::Whatsapp => &[
                Shape::Path("M7.9 20A9 9 0 1 0 4 16.1L2 22Z"),
                Shape::Path("M9.5 8.5c.5 2 2 3.5 4 4l1-1 2 1v1.5a1 1 0 0 1-1 1A7 7 0 0 1 8 8a1 1 0 0 1 1-1h1.5l1 2z"),
            ],
        }
    }
}

impl Glyph for Icon {
    fn render(&self, size: u32) -> Element {
        let shapes = self.shapes();
        rsx! {
            svg {
                class: "glyph glyph-{self.name()}",
                "width": "{size}",
                "height": "{size}",
                "viewBox": "0 0 24 24",
                "fill": "none",
                "stroke": "currentColor",
                "stroke-width": "2",
                "stroke-linecap": "round",
                "stroke-linejoin": "round",
                "aria-hidden": "true",
                for shape in shapes.iter() {
                    {shape.render()}
                }
            }
        }
    }
}
