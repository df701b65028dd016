// Copyright 2026 the Frameguide Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Letterbox mask builder.

use alloc::vec::Vec;

use kurbo::Vec2;
use peniko::Color;

use crate::policy::{AspectPolicy, ViewportFrame};
use crate::primitives::GuidePrimitive;

/// Smallest accepted letterbox ratio; requested ratios clamp up to this.
pub const MIN_LETTERBOX_RATIO: f64 = 0.001;

/// Appends the two filled bars masking the frame down to `letterbox_ratio`.
///
/// The bars are emitted as a mirrored pair reflected through the origin
/// along the constrained axis, so the uncovered central region is always a
/// centered rectangle whose aspect ratio equals the requested ratio, clipped
/// to the frame. Ratios at or below zero clamp to [`MIN_LETTERBOX_RATIO`];
/// non-finite ratios emit nothing.
///
/// The bar extents fall into four cases on the policy and on which of the
/// frame and target ratios is wider; the offset formulas are tuned to keep
/// the outer bar edge flush with the frame edge in every case.
pub fn build_letterbox(
    frame: &ViewportFrame,
    letterbox_ratio: f64,
    color: Color,
    out: &mut Vec<GuidePrimitive>,
) {
    if !letterbox_ratio.is_finite() {
        return;
    }
    let ratio = letterbox_ratio.max(MIN_LETTERBOX_RATIO);
    let aspect = frame.aspect_ratio();

    let bar = match frame.policy() {
        AspectPolicy::FitVertical => {
            if ratio >= aspect {
                // Target is wider than the frame: horizontal bars spanning
                // the full frame width.
                let visible = aspect / ratio;
                let half_height = (1.0 - visible) / 2.0;
                GuidePrimitive::RectFilled {
                    width: 2.0 * aspect,
                    height: 2.0 * half_height,
                    offset: Vec2::new(0.0, 1.0 - half_height),
                    color,
                }
            } else {
                // Target is narrower: vertical bars spanning the full height.
                let half_width = (aspect - ratio) / 2.0;
                GuidePrimitive::RectFilled {
                    width: 2.0 * half_width,
                    height: 2.0,
                    offset: Vec2::new(aspect - half_width, 0.0),
                    color,
                }
            }
        }
        AspectPolicy::FitHorizontal => {
            let inverse = 1.0 / aspect;
            if ratio >= aspect {
                let visible = aspect / ratio;
                let half_height = inverse * (1.0 - visible) / 2.0;
                GuidePrimitive::RectFilled {
                    width: 2.0,
                    height: 2.0 * half_height,
                    offset: Vec2::new(0.0, inverse - half_height),
                    color,
                }
            } else {
                let half_width = inverse * (aspect - ratio) / 2.0;
                GuidePrimitive::RectFilled {
                    width: 2.0 * half_width,
                    height: 2.0 * inverse,
                    offset: Vec2::new(1.0 - half_width, 0.0),
                    color,
                }
            }
        }
    };

    out.push(bar);
    out.push(bar.mirrored());
}

#[cfg(test)]
mod tests {
    use alloc::vec::Vec;

    use kurbo::Vec2;
    use peniko::Color;

    use super::{MIN_LETTERBOX_RATIO, build_letterbox};
    use crate::policy::{AspectPolicy, ViewportFrame};
    use crate::primitives::GuidePrimitive;

    fn bars(frame: &ViewportFrame, ratio: f64) -> Vec<(f64, f64, Vec2)> {
        let mut out = Vec::new();
        build_letterbox(frame, ratio, Color::BLACK, &mut out);
        out.iter()
            .map(|p| match *p {
                GuidePrimitive::RectFilled {
                    width,
                    height,
                    offset,
                    ..
                } => (width, height, offset),
                ref other => panic!("letterbox must emit filled rects, got {other:?}"),
            })
            .collect()
    }

    /// Aspect ratio of the region the two bars leave uncovered.
    fn visible_aspect(frame: &ViewportFrame, bars: &[(f64, f64, Vec2)]) -> f64 {
        let (hx, hy) = frame.half_extents();
        let (w, h, offset) = bars[0];
        if offset.y != 0.0 {
            // Horizontal bars: full width stays visible.
            let visible_half_height = offset.y.abs() - h / 2.0;
            2.0 * hx / (2.0 * visible_half_height)
        } else {
            let visible_half_width = offset.x.abs() - w / 2.0;
            2.0 * visible_half_width / (2.0 * hy)
        }
    }

    #[test]
    fn bars_are_mirror_images_for_all_cases() {
        for policy in [AspectPolicy::FitVertical, AspectPolicy::FitHorizontal] {
            for aspect in [0.6, 1.0, 16.0 / 9.0, 2.39] {
                for ratio in [0.5, 1.0, 1.85, 2.35, 4.0] {
                    let frame = ViewportFrame::new(aspect, policy).unwrap();
                    let bars = bars(&frame, ratio);
                    assert_eq!(bars.len(), 2, "letterbox is always a bar pair");

                    let (w0, h0, off0) = bars[0];
                    let (w1, h1, off1) = bars[1];
                    assert_eq!((w0, h0), (w1, h1), "bar extents must match exactly");
                    assert_eq!(off0, -off1, "bar offsets must be exact mirrors");
                }
            }
        }
    }

    #[test]
    fn uncovered_region_has_the_requested_ratio() {
        for policy in [AspectPolicy::FitVertical, AspectPolicy::FitHorizontal] {
            for aspect in [0.6, 1.0, 16.0 / 9.0, 2.39] {
                for ratio in [0.5, 1.0, 1.85, 2.35, 4.0] {
                    let frame = ViewportFrame::new(aspect, policy).unwrap();
                    let bars = bars(&frame, ratio);
                    let visible = visible_aspect(&frame, &bars);
                    assert!(
                        (visible - ratio).abs() < 1e-9,
                        "visible aspect {visible} != {ratio} (frame {aspect}, {policy:?})"
                    );
                }
            }
        }
    }

    #[test]
    fn widescreen_mask_on_a_sixteen_nine_frame() {
        let aspect = 16.0 / 9.0;
        let frame = ViewportFrame::new(aspect, AspectPolicy::FitVertical).unwrap();
        let bars = bars(&frame, 2.35);

        // Visible height fraction aspect/2.35 ≈ 0.756 leaves two bars of
        // half-height ≈ 0.122 pushed out to ≈ ±0.878.
        let (w, h, offset) = bars[0];
        assert!((w - 2.0 * aspect).abs() < 1e-12, "bars span the full width");
        assert!((h / 2.0 - 0.122).abs() < 1e-3, "half-height ≈ 0.122, got {h}");
        assert!(
            (offset.y.abs() - 0.878).abs() < 1e-3,
            "offset ≈ ±0.878, got {offset:?}"
        );
        assert_eq!(offset.x, 0.0);
    }

    #[test]
    fn narrow_target_produces_pillarbox_bars() {
        let frame = ViewportFrame::new(16.0 / 9.0, AspectPolicy::FitVertical).unwrap();
        let bars = bars(&frame, 1.0);
        let (_, h, offset) = bars[0];
        assert!((h - 2.0).abs() < 1e-12, "bars span the full height");
        assert_eq!(offset.y, 0.0, "bars sit left/right of center");
        assert!(offset.x.abs() > 0.0);
    }

    #[test]
    fn non_positive_ratios_clamp_to_the_minimum() {
        let frame = ViewportFrame::new(1.5, AspectPolicy::FitVertical).unwrap();
        assert_eq!(bars(&frame, 0.0), bars(&frame, MIN_LETTERBOX_RATIO));
        assert_eq!(bars(&frame, -2.35), bars(&frame, MIN_LETTERBOX_RATIO));
        assert!(bars(&frame, f64::NAN).is_empty());
    }
}
