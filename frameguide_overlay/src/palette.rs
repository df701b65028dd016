// Copyright 2026 the Frameguide Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Colors and stroke weights for the overlay primitives.

use peniko::Color;

/// Colors and stroke weights used when an overlay builds its primitives.
///
/// This is plain data, not a theming system; hosts that style the overlay
/// build their own palette and hand it to
/// [`Overlay::set_palette`](crate::Overlay::set_palette).
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct GuidePalette {
    /// Composition guide lines.
    pub composition: Color,
    /// Action-safe outline.
    pub action_safe: Color,
    /// Title-safe outline.
    pub title_safe: Color,
    /// Custom-safe outline.
    pub custom_safe: Color,
    /// Letterbox bars.
    pub letterbox: Color,
    /// Stroke thickness for lines and outlines, in device pixels.
    pub line_thickness: f64,
}

impl Default for GuidePalette {
    /// The conventional palette: translucent white guide lines, red/yellow/
    /// green safe areas, and three-quarter-opaque black letterbox bars.
    fn default() -> Self {
        Self {
            composition: Color::from_rgba8(255, 255, 255, 153),
            action_safe: Color::from_rgba8(255, 0, 0, 255),
            title_safe: Color::from_rgba8(255, 255, 0, 255),
            custom_safe: Color::from_rgba8(0, 255, 0, 255),
            letterbox: Color::from_rgba8(0, 0, 0, 191),
            line_thickness: 1.0,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::GuidePalette;

    #[test]
    fn letterbox_bars_are_translucent_by_default() {
        let palette = GuidePalette::default();
        let alpha = palette.letterbox.components[3];
        assert!(alpha > 0.7 && alpha < 0.8, "letterbox alpha {alpha}");
        assert_eq!(palette.line_thickness, 1.0);
    }
}
