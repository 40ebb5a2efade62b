//! Entrance animation presets.
//!
//! These are plain data. A preset turns into an inline `style` string that
//! drives the `folio-enter` keyframes in the shared stylesheet; nothing else
//! reads them.

/// An entrance animation: fade in while sliding up from `offset_y`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Motion {
    /// Starting opacity (ends at 1.0).
    pub opacity_from: f32,
    /// Starting vertical offset in px (ends at 0).
    pub offset_y: f32,
    pub duration_ms: u32,
    pub easing: &'static str,
    /// Extra delay added per item index inside a staggered group.
    pub stagger_ms: u32,
}

/// Hero banner: runs once on mount.
pub const HERO: Motion = Motion {
    opacity_from: 0.0,
    offset_y: 30.0,
    duration_ms: 600,
    easing: "ease",
    stagger_ms: 0,
};

/// Single item fading up into place.
pub const FADE_UP: Motion = Motion {
    opacity_from: 0.0,
    offset_y: 30.0,
    duration_ms: 600,
    easing: "ease-out",
    stagger_ms: 0,
};

/// Staggered group: items enter 150 ms apart.
pub const STAGGER: Motion = Motion {
    stagger_ms: 150,
    ..FADE_UP
};

impl Motion {
    /// Delay before item `index` of a group starts.
    pub fn delay_ms(&self, index: usize) -> u32 {
        self.stagger_ms.saturating_mul(index as u32)
    }

    /// Inline style for item `index` of a group (use 0 for lone elements).
    pub fn style(&self, index: usize) -> String {
        format!(
            "--enter-opacity: {}; --enter-offset: {}px; animation: folio-enter {}ms {} {}ms both;",
            self.opacity_from,
            self.offset_y,
            self.duration_ms,
            self.easing,
            self.delay_ms(index),
        )
    }
}
