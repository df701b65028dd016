// Copyright 2026 the Frameguide Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

// After you edit the crate's doc comment, run this command, then check README.md for any missing links
// cargo rdme --workspace-project=frameguide_geometry --heading-base-level=0

//! Frameguide Geometry: headless camera-composition guide geometry.
//!
//! This crate computes the 2D primitives for camera-composition overlays
//! drawn over a rendered viewport: rule-of-thirds / quad / crosshair guide
//! lines, safe-area rectangles, and letterbox masking bars. It owns no
//! widgets and no renderer. Callers are expected to:
//! - Track their viewport extents and fill policy and derive a
//!   [`ViewportFrame`] from them (see [`AspectPolicy::select`]).
//! - Invoke the builders for whichever guides are enabled.
//! - Hand the resulting [`GuidePrimitive`] list to their own renderer.
//!
//! ## Coordinate space
//!
//! All output coordinates live in a normalized guide space chosen by the
//! frame's [`AspectPolicy`]: the constrained axis runs `-1..1` and the free
//! axis spans `±aspect_ratio` (`FitVertical`) or `±1/aspect_ratio`
//! (`FitHorizontal`). Which axis is constrained is selected from the
//! viewport extents with a small inward bias ([`POLICY_FLIP_BIAS`]) so the
//! policy does not flicker when a resize crosses the boundary.
//!
//! ## Minimal example
//!
//! ```rust
//! use frameguide_geometry::{
//!     CompositionMode, ViewportFrame, build_composition, build_letterbox,
//! };
//! use peniko::Color;
//!
//! // A 16:9 render target viewed at its own aspect ratio.
//! let frame = ViewportFrame::from_size(1920.0, 1080.0).unwrap();
//!
//! let mut primitives = Vec::new();
//! build_composition(
//!     &frame,
//!     CompositionMode::Thirds,
//!     Color::from_rgba8(255, 255, 255, 153),
//!     1.0,
//!     &mut primitives,
//! );
//! build_letterbox(&frame, 2.35, Color::from_rgba8(0, 0, 0, 191), &mut primitives);
//!
//! // Four thirds lines plus the letterbox bar pair.
//! assert_eq!(primitives.len(), 6);
//! ```
//!
//! ## Design notes
//!
//! - Building is pure: the same frame and parameters always produce the
//!   same list, and builders only append to the caller's `Vec`.
//! - Out-of-range parameters clamp (percentages into `[0, 100]`, letterbox
//!   ratios up to [`MIN_LETTERBOX_RATIO`]) rather than fail; only a
//!   non-positive aspect ratio is an error, and that is caught when the
//!   [`ViewportFrame`] is constructed.
//!
//! This crate is `no_std` and uses `alloc`.

#![no_std]

extern crate alloc;

mod composition;
mod letterbox;
mod policy;
mod primitives;
mod safe_area;

pub use composition::{
    CROSSHAIR_MARKER_SIZE, CROSSHAIR_TICK_INNER, CROSSHAIR_TICK_OUTER, CompositionMode,
    build_composition, build_crosshair, build_quad, build_thirds,
};
pub use letterbox::{MIN_LETTERBOX_RATIO, build_letterbox};
pub use policy::{AspectPolicy, InvalidAspectRatio, POLICY_FLIP_BIAS, ViewportFrame};
pub use primitives::GuidePrimitive;
pub use safe_area::build_safe_rect;
