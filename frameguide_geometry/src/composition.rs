// Copyright 2026 the Frameguide Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Composition guide builders: thirds, quad, and crosshair.

use alloc::vec::Vec;

use kurbo::Point;
use peniko::Color;

use crate::policy::ViewportFrame;
use crate::primitives::GuidePrimitive;

/// Inner edge of a crosshair tick, as a fraction of the half extent.
pub const CROSSHAIR_TICK_INNER: f64 = 0.05;

/// Outer edge of a crosshair tick, as a fraction of the half extent.
pub const CROSSHAIR_TICK_OUTER: f64 = 0.1;

/// Size of the crosshair center marker in device pixels.
pub const CROSSHAIR_MARKER_SIZE: f64 = 2.0;

/// Which composition guide, if any, is drawn over the frame.
///
/// Modes are mutually exclusive; exactly one is active at a time.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum CompositionMode {
    /// No composition guide.
    #[default]
    Off,
    /// Rule-of-thirds grid: four lines at the 1/3 and 2/3 marks.
    Thirds,
    /// Two center lines splitting the frame into quadrants.
    Quad,
    /// Short center ticks plus a center marker.
    Crosshair,
}

/// Appends the guide lines for `mode` to `out`.
///
/// [`CompositionMode::Off`] appends nothing.
pub fn build_composition(
    frame: &ViewportFrame,
    mode: CompositionMode,
    color: Color,
    thickness: f64,
    out: &mut Vec<GuidePrimitive>,
) {
    match mode {
        CompositionMode::Off => {}
        CompositionMode::Thirds => build_thirds(frame, color, thickness, out),
        CompositionMode::Quad => build_quad(frame, color, thickness, out),
        CompositionMode::Crosshair => build_crosshair(frame, color, thickness, out),
    }
}

/// Appends the four rule-of-thirds lines, partitioning the frame into a
/// 3×3 grid at the 1/3 and 2/3 marks along each axis.
pub fn build_thirds(
    frame: &ViewportFrame,
    color: Color,
    thickness: f64,
    out: &mut Vec<GuidePrimitive>,
) {
    let (hx, hy) = frame.half_extents();
    for sign in [-1.0, 1.0] {
        out.push(GuidePrimitive::Line {
            p0: Point::new(sign * hx / 3.0, -hy),
            p1: Point::new(sign * hx / 3.0, hy),
            thickness,
            color,
        });
        out.push(GuidePrimitive::Line {
            p0: Point::new(-hx, sign * hy / 3.0),
            p1: Point::new(hx, sign * hy / 3.0),
            thickness,
            color,
        });
    }
}

/// Appends the two full-span center lines of the quad guide.
pub fn build_quad(
    frame: &ViewportFrame,
    color: Color,
    thickness: f64,
    out: &mut Vec<GuidePrimitive>,
) {
    let (hx, hy) = frame.half_extents();
    out.push(GuidePrimitive::Line {
        p0: Point::new(0.0, -hy),
        p1: Point::new(0.0, hy),
        thickness,
        color,
    });
    out.push(GuidePrimitive::Line {
        p0: Point::new(-hx, 0.0),
        p1: Point::new(hx, 0.0),
        thickness,
        color,
    });
}

/// Appends the crosshair guide: four cardinal ticks running from
/// [`CROSSHAIR_TICK_INNER`] to [`CROSSHAIR_TICK_OUTER`] of the half extent,
/// plus one center marker.
pub fn build_crosshair(
    frame: &ViewportFrame,
    color: Color,
    thickness: f64,
    out: &mut Vec<GuidePrimitive>,
) {
    let (hx, hy) = frame.half_extents();
    for sign in [-1.0, 1.0] {
        out.push(GuidePrimitive::Line {
            p0: Point::new(0.0, sign * CROSSHAIR_TICK_INNER * hy),
            p1: Point::new(0.0, sign * CROSSHAIR_TICK_OUTER * hy),
            thickness,
            color,
        });
        out.push(GuidePrimitive::Line {
            p0: Point::new(sign * CROSSHAIR_TICK_INNER * hx, 0.0),
            p1: Point::new(sign * CROSSHAIR_TICK_OUTER * hx, 0.0),
            thickness,
            color,
        });
    }
    out.push(GuidePrimitive::Point {
        center: Point::ORIGIN,
        size: CROSSHAIR_MARKER_SIZE,
        color,
    });
}
