// Copyright 2026 the Frameguide Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Safe-area rectangle builder.

use alloc::vec::Vec;

use peniko::Color;

use crate::policy::ViewportFrame;
use crate::primitives::GuidePrimitive;

/// Appends one centered safe-area outline covering `percentage` of the frame.
///
/// `percentage` is interpreted in `[0, 100]` and clamped into that range;
/// non-finite values clamp to zero. At 100% the outline reproduces the full
/// visible frame, at 0% it degenerates to a zero-size rectangle at the
/// origin. Each enabled safe-area spec is built independently with its own
/// color, so overlapping outlines differ only in draw order.
pub fn build_safe_rect(
    frame: &ViewportFrame,
    percentage: f64,
    color: Color,
    thickness: f64,
    out: &mut Vec<GuidePrimitive>,
) {
    let fraction = if percentage.is_finite() {
        percentage.clamp(0.0, 100.0) / 100.0
    } else {
        0.0
    };
    let (hx, hy) = frame.half_extents();
    out.push(GuidePrimitive::RectOutline {
        width: 2.0 * hx * fraction,
        height: 2.0 * hy * fraction,
        thickness,
        color,
    });
}

#[cfg(test)]
mod tests {
    use alloc::vec::Vec;

    use peniko::Color;

    use super::build_safe_rect;
    use crate::policy::{AspectPolicy, ViewportFrame};
    use crate::primitives::GuidePrimitive;

    fn outline_extents(frame: &ViewportFrame, percentage: f64) -> (f64, f64) {
        let mut out = Vec::new();
        build_safe_rect(frame, percentage, Color::WHITE, 1.0, &mut out);
        assert_eq!(out.len(), 1, "safe rect is a single outline");
        match out[0] {
            GuidePrimitive::RectOutline { width, height, .. } => (width, height),
            ref other => panic!("expected an outline, got {other:?}"),
        }
    }

    #[test]
    fn full_percentage_reproduces_the_visible_frame() {
        let frame = ViewportFrame::new(16.0 / 9.0, AspectPolicy::FitVertical).unwrap();
        let (w, h) = outline_extents(&frame, 100.0);
        assert!((w - 2.0 * 16.0 / 9.0).abs() < 1e-12);
        assert!((h - 2.0).abs() < 1e-12);

        let frame = ViewportFrame::new(16.0 / 9.0, AspectPolicy::FitHorizontal).unwrap();
        let (w, h) = outline_extents(&frame, 100.0);
        assert!((w - 2.0).abs() < 1e-12);
        assert!((h - 2.0 * 9.0 / 16.0).abs() < 1e-12);
    }

    #[test]
    fn zero_percentage_degenerates_to_a_point() {
        let frame = ViewportFrame::new(1.5, AspectPolicy::FitVertical).unwrap();
        assert_eq!(outline_extents(&frame, 0.0), (0.0, 0.0));
    }

    #[test]
    fn extents_scale_linearly_with_percentage() {
        let frame = ViewportFrame::new(2.0, AspectPolicy::FitVertical).unwrap();
        for pct in [10.0, 50.0, 85.0, 90.0, 93.0] {
            let (w, h) = outline_extents(&frame, pct);
            assert!((w - 2.0 * 2.0 * pct / 100.0).abs() < 1e-12, "width at {pct}%");
            assert!((h - 2.0 * pct / 100.0).abs() < 1e-12, "height at {pct}%");
        }
    }

    #[test]
    fn out_of_range_percentages_clamp() {
        let frame = ViewportFrame::new(1.0, AspectPolicy::FitVertical).unwrap();
        assert_eq!(outline_extents(&frame, 250.0), outline_extents(&frame, 100.0));
        assert_eq!(outline_extents(&frame, -40.0), outline_extents(&frame, 0.0));
        assert_eq!(outline_extents(&frame, f64::NAN), outline_extents(&frame, 0.0));
    }
}
