//! Shared UI components for Folio.
//!
//! Provides the theme store and palettes, inline SVG glyphs, the section
//! heading, and entrance animation presets.

pub mod icons;
pub mod motion;
pub mod section_title;
pub mod theme;

pub use icons::{Glyph, Icon};
pub use motion::Motion;
pub use section_title::SectionTitle;
pub use theme::{THEME_SLOT, ThemePreference, ThemeStore, ThemedRoot};

/// Shared CSS containing design tokens, palette definitions, and base styles.
pub const SHARED_CSS: &str = include_str!("../assets/shared.css");
