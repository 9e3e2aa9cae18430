//! Immutable visual configuration of a switch.

use crate::color::Rgba;
use crate::geometry::{Density, Padding, Size};
use crate::gesture::default_touch_slop;

/// Default fill of the selected zone (`#03A9F4`).
pub const DEFAULT_CHECKED: Rgba = Rgba::from_rgb(0x03, 0xA9, 0xF4);
/// Default background fill (`#E0E0E0`).
pub const DEFAULT_UNCHECKED: Rgba = Rgba::from_rgb(0xE0, 0xE0, 0xE0);
/// Alpha applied to the inactive glyph.
pub const INACTIVE_ALPHA: u8 = 75;

/// Colors, padding, and input tolerance, fixed at construction.
#[derive(Debug, Clone, PartialEq)]
pub struct SwitchStyle {
    /// Fill of the selected zone.
    pub checked: Rgba,
    /// Background fill, visible in the unselected zone.
    pub unchecked: Rgba,
    /// Inner padding in pixels.
    pub padding: Padding,
    /// Alpha (out of 255) applied to the inactive glyph.
    pub inactive_alpha: u8,
    /// Tap-versus-drag tolerance in pixels.
    pub touch_slop: f32,
    /// Size reported when the host leaves an axis unconstrained.
    pub min_size: Size,
}

impl Default for SwitchStyle {
    fn default() -> Self {
        Self {
            checked: DEFAULT_CHECKED,
            unchecked: DEFAULT_UNCHECKED,
            padding: Padding::default(),
            inactive_alpha: INACTIVE_ALPHA,
            touch_slop: default_touch_slop(Density::default()),
            min_size: Size::default(),
        }
    }
}

impl SwitchStyle {
    /// Set the selected-zone color.
    pub fn checked(mut self, color: Rgba) -> Self {
        self.checked = color;
        self
    }

    /// Set the background color.
    pub fn unchecked(mut self, color: Rgba) -> Self {
        self.unchecked = color;
        self
    }

    /// Set the inner padding.
    pub fn padding(mut self, padding: Padding) -> Self {
        self.padding = padding;
        self
    }

    /// Set the touch slop in pixels.
    pub fn touch_slop(mut self, slop: f32) -> Self {
        self.touch_slop = slop;
        self
    }

    /// Set the unconstrained fallback size.
    pub fn min_size(mut self, size: Size) -> Self {
        self.min_size = size;
        self
    }

    /// Opacity of the inactive glyph in `0.0..=1.0`.
    pub fn inactive_opacity(&self) -> f32 {
        f32::from(self.inactive_alpha) / 255.0
    }
}
