// Copyright 2026 the Frameguide Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Output primitives emitted by the guide builders.

use kurbo::{Point, Vec2};
use peniko::Color;

/// A single drawable guide primitive in guide space.
///
/// All coordinates are in the normalized coordinate space implied by the
/// frame's [`AspectPolicy`](crate::AspectPolicy): the constrained axis runs
/// `-1..1` and the free axis scales with the aspect ratio. Thicknesses and
/// marker sizes are in device pixels; how a host renderer interprets them is
/// its own business.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum GuidePrimitive {
    /// A straight line segment.
    Line {
        /// First endpoint.
        p0: Point,
        /// Second endpoint.
        p1: Point,
        /// Stroke thickness in device pixels.
        thickness: f64,
        /// Stroke color.
        color: Color,
    },
    /// An unfilled rectangle centered on the origin.
    RectOutline {
        /// Full width of the rectangle.
        width: f64,
        /// Full height of the rectangle.
        height: f64,
        /// Stroke thickness in device pixels.
        thickness: f64,
        /// Stroke color.
        color: Color,
    },
    /// A filled rectangle centered on `offset`.
    RectFilled {
        /// Full width of the rectangle.
        width: f64,
        /// Full height of the rectangle.
        height: f64,
        /// Displacement of the rectangle center from the origin.
        offset: Vec2,
        /// Fill color.
        color: Color,
    },
    /// A point marker.
    Point {
        /// Marker position.
        center: Point,
        /// Marker size in device pixels.
        size: f64,
        /// Marker color.
        color: Color,
    },
}

impl GuidePrimitive {
    /// Returns `true` for [`GuidePrimitive::Line`].
    #[must_use]
    pub fn is_line(&self) -> bool {
        matches!(self, Self::Line { .. })
    }

    /// Returns `true` for [`GuidePrimitive::RectFilled`].
    #[must_use]
    pub fn is_filled(&self) -> bool {
        matches!(self, Self::RectFilled { .. })
    }

    /// Returns the primitive reflected through the origin.
    ///
    /// For filled rectangles only the offset is negated, so a mirrored pair
    /// shares its extents exactly.
    #[must_use]
    pub fn mirrored(&self) -> Self {
        match *self {
            Self::Line {
                p0,
                p1,
                thickness,
                color,
            } => Self::Line {
                p0: Point::new(-p0.x, -p0.y),
                p1: Point::new(-p1.x, -p1.y),
                thickness,
                color,
            },
            Self::RectOutline { .. } => *self,
            Self::RectFilled {
                width,
                height,
                offset,
                color,
            } => Self::RectFilled {
                width,
                height,
                offset: -offset,
                color,
            },
            Self::Point {
                center,
                size,
                color,
            } => Self::Point {
                center: Point::new(-center.x, -center.y),
                size,
                color,
            },
        }
    }
}
