// Copyright 2026 the Frameguide Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

// After you edit the crate's doc comment, run this command, then check README.md for any missing links
// cargo rdme --workspace-project=frameguide_overlay --heading-base-level=0

//! Frameguide Overlay: the per-viewport camera-guide overlay instance.
//!
//! This crate wires the [`frameguide_geometry`] builders into a long-lived
//! overlay object the host owns, one per viewport window. It holds the
//! user-facing [`OverlayConfig`] and a [`GuidePalette`], tracks the
//! last-known viewport frame, and recomputes its [`GuidePrimitive`] list
//! from scratch on every change. It does **not** own widgets, settings
//! persistence, or a renderer; hosts are expected to:
//! - Forward resize / fill-policy notifications into
//!   [`Overlay::viewport_changed`], or implement [`ViewportWindow`] and call
//!   [`Overlay::sync`].
//! - Edit the config through [`Overlay::update_config`] from their own UI.
//! - Draw [`Overlay::primitives`] however they like after each change.
//!
//! ## Minimal example
//!
//! ```rust
//! use frameguide_overlay::{CompositionMode, Overlay};
//!
//! // One overlay per viewport, owned by the host.
//! let mut overlay = Overlay::new(1920.0, 1080.0)?;
//!
//! // The user toggles guides in some host UI; the host relays the edits.
//! overlay.update_config(|config| {
//!     config.composition = CompositionMode::Thirds;
//!     config.action_safe.enabled = true;
//! });
//!
//! // The viewport got resized with "fill" enabled.
//! overlay.viewport_changed(2560.0, 1440.0, true);
//!
//! // Hand the current list to the renderer.
//! for primitive in overlay.primitives() {
//!     // draw it
//! }
//! # Ok::<(), frameguide_overlay::InvalidAspectRatio>(())
//! ```
//!
//! ## Design notes
//!
//! - The event model is single-threaded and synchronous: every notification
//!   runs a full rebuild to completion. There is no incremental update and
//!   no retained geometry beyond the last-known frame.
//! - Overlay instances never register themselves anywhere; the host owns
//!   and releases each one directly. [`Overlay::release`] is idempotent and
//!   rebuild requests after release are no-ops.
//! - Malformed viewport extents degrade to an empty primitive list instead
//!   of surfacing an error into the host event loop.
//!
//! This crate is `no_std` and uses `alloc`.

#![no_std]

extern crate alloc;

mod config;
mod overlay;
mod palette;

pub use frameguide_geometry::{CompositionMode, GuidePrimitive, InvalidAspectRatio};

pub use config::{
    DEFAULT_ACTION_SAFE_PERCENTAGE, DEFAULT_CUSTOM_SAFE_PERCENTAGE, DEFAULT_LETTERBOX_RATIO,
    DEFAULT_TITLE_SAFE_PERCENTAGE, LetterboxSpec, OverlayConfig, SafeAreaSpec,
};
pub use overlay::{Overlay, OverlayDebugInfo, ViewportWindow};
pub use palette::GuidePalette;
