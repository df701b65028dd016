// Copyright 2026 the Frameguide Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The per-viewport overlay instance.

use alloc::vec::Vec;

use kurbo::Size;

use frameguide_geometry::{
    AspectPolicy, GuidePrimitive, InvalidAspectRatio, ViewportFrame, build_composition,
    build_letterbox, build_safe_rect,
};

use crate::config::OverlayConfig;
use crate::palette::GuidePalette;

/// Capability a host viewport window must expose to drive an overlay.
///
/// This is the single abstraction over host window APIs; hosts whose window
/// types have diverged across API revisions implement this once per type
/// instead of forking the overlay. Push-style hosts can skip the trait and
/// call [`Overlay::viewport_changed`] directly from their resize and
/// settings callbacks.
pub trait ViewportWindow {
    /// Current window extents in device pixels.
    fn size(&self) -> Size;
    /// Intrinsic resolution of the render target shown in the window.
    fn render_resolution(&self) -> Size;
    /// Whether the window stretches the render target to fill itself.
    fn fill_enabled(&self) -> bool;
}

/// One camera-guide overlay over one viewport window.
///
/// An `Overlay` holds the user-facing [`OverlayConfig`], a [`GuidePalette`],
/// and the last-known [`ViewportFrame`], and recomputes its primitive list
/// from scratch whenever either changes. Each instance is independent and
/// explicitly owned by the host; dropping or [releasing](Overlay::release)
/// it is the whole teardown story.
///
/// ```
/// use frameguide_overlay::{CompositionMode, Overlay};
///
/// let mut overlay = Overlay::new(1920.0, 1080.0).unwrap();
/// overlay.update_config(|config| {
///     config.composition = CompositionMode::Thirds;
///     config.letterbox.enabled = true;
/// });
///
/// // Four thirds lines followed by the two letterbox bars.
/// assert_eq!(overlay.primitives().len(), 6);
///
/// overlay.release();
/// assert!(overlay.primitives().is_empty());
/// ```
#[derive(Clone, Debug)]
pub struct Overlay {
    config: OverlayConfig,
    palette: GuidePalette,
    target_aspect: f64,
    frame: Option<ViewportFrame>,
    primitives: Vec<GuidePrimitive>,
    released: bool,
}

impl Overlay {
    /// Creates an overlay for a render target of the given intrinsic
    /// resolution, with default config and palette.
    ///
    /// The initial frame assumes the viewport shows the target at its own
    /// aspect ratio; the first [`Overlay::viewport_changed`] or
    /// [`Overlay::sync`] replaces it with real extents.
    pub fn new(target_width: f64, target_height: f64) -> Result<Self, InvalidAspectRatio> {
        let frame = ViewportFrame::from_size(target_width, target_height)?;
        let mut overlay = Self {
            config: OverlayConfig::default(),
            palette: GuidePalette::default(),
            target_aspect: frame.aspect_ratio(),
            frame: Some(frame),
            primitives: Vec::new(),
            released: false,
        };
        overlay.rebuild();
        Ok(overlay)
    }

    /// Creates an overlay for a host window, pulling the render resolution
    /// and the current extents through the capability trait.
    pub fn for_window(window: &impl ViewportWindow) -> Result<Self, InvalidAspectRatio> {
        let resolution = window.render_resolution();
        let mut overlay = Self::new(resolution.width, resolution.height)?;
        overlay.sync(window);
        Ok(overlay)
    }

    /// Returns the current configuration.
    #[must_use]
    pub fn config(&self) -> &OverlayConfig {
        &self.config
    }

    /// Returns the current palette.
    #[must_use]
    pub fn palette(&self) -> &GuidePalette {
        &self.palette
    }

    /// Returns the aspect ratio of the render target the overlay was
    /// created for.
    #[must_use]
    pub fn target_aspect(&self) -> f64 {
        self.target_aspect
    }

    /// Returns the current primitive list in draw order: composition guide,
    /// then action/title/custom safe areas, then letterbox bars.
    #[must_use]
    pub fn primitives(&self) -> &[GuidePrimitive] {
        &self.primitives
    }

    /// Mutates the configuration and rebuilds.
    ///
    /// Any field change triggers a full rebuild; there is no incremental
    /// update path.
    pub fn update_config(&mut self, f: impl FnOnce(&mut OverlayConfig)) {
        f(&mut self.config);
        self.rebuild();
    }

    /// Replaces the palette and rebuilds.
    pub fn set_palette(&mut self, palette: GuidePalette) {
        self.palette = palette;
        self.rebuild();
    }

    /// Notifies the overlay that the viewport extents or fill policy
    /// changed.
    ///
    /// When the window fills itself with the render target the effective
    /// aspect ratio is the window's own; otherwise it is the render
    /// target's. The guide-space policy is reselected from the window
    /// extents either way. Degenerate extents degrade to an empty primitive
    /// list rather than an error.
    pub fn viewport_changed(&mut self, width: f64, height: f64, fill_enabled: bool) {
        if self.released {
            return;
        }
        let aspect = if fill_enabled {
            if height > 0.0 { width / height } else { f64::NAN }
        } else {
            self.target_aspect
        };
        let policy = AspectPolicy::select(width, height, aspect);
        self.frame = ViewportFrame::new(aspect, policy).ok();
        self.rebuild();
    }

    /// Pull-style variant of [`Overlay::viewport_changed`] for hosts that
    /// expose the [`ViewportWindow`] capability.
    ///
    /// Also refreshes the target aspect from the window's current render
    /// resolution, so resolution changes do not require a new overlay.
    pub fn sync(&mut self, window: &impl ViewportWindow) {
        if self.released {
            return;
        }
        let resolution = window.render_resolution();
        if let Ok(frame) = ViewportFrame::from_size(resolution.width, resolution.height) {
            self.target_aspect = frame.aspect_ratio();
        }
        let size = window.size();
        self.viewport_changed(size.width, size.height, window.fill_enabled());
    }

    /// Releases the overlay: clears the primitive list and turns every
    /// further rebuild request into a no-op.
    ///
    /// Releasing an already-released overlay is a no-op, not an error.
    pub fn release(&mut self) {
        self.released = true;
        self.frame = None;
        self.primitives.clear();
    }

    /// Returns `true` once [`Overlay::release`] has been called.
    #[must_use]
    pub fn is_released(&self) -> bool {
        self.released
    }

    /// Snapshot of the overlay state for debugging and inspection.
    #[must_use]
    pub fn debug_info(&self) -> OverlayDebugInfo {
        OverlayDebugInfo {
            target_aspect: self.target_aspect,
            aspect_ratio: self.frame.map(|f| f.aspect_ratio()),
            policy: self.frame.map(|f| f.policy()),
            primitive_count: self.primitives.len(),
            released: self.released,
        }
    }

    fn rebuild(&mut self) {
        self.primitives.clear();
        if self.released {
            return;
        }
        let Some(frame) = self.frame else {
            return;
        };

        let thickness = self.palette.line_thickness;
        build_composition(
            &frame,
            self.config.composition,
            self.palette.composition,
            thickness,
            &mut self.primitives,
        );
        for (spec, color) in [
            (&self.config.action_safe, self.palette.action_safe),
            (&self.config.title_safe, self.palette.title_safe),
            (&self.config.custom_safe, self.palette.custom_safe),
        ] {
            if spec.enabled {
                build_safe_rect(
                    &frame,
                    spec.percentage(),
                    color,
                    thickness,
                    &mut self.primitives,
                );
            }
        }
        if self.config.letterbox.enabled {
            build_letterbox(
                &frame,
                self.config.letterbox.ratio(),
                self.palette.letterbox,
                &mut self.primitives,
            );
        }
    }
}

/// Debug snapshot of an [`Overlay`] state.
#[derive(Clone, Copy, Debug)]
pub struct OverlayDebugInfo {
    /// Aspect ratio of the render target.
    pub target_aspect: f64,
    /// Effective aspect ratio of the current frame, if it is valid.
    pub aspect_ratio: Option<f64>,
    /// Policy of the current frame, if it is valid.
    pub policy: Option<AspectPolicy>,
    /// Number of primitives in the current list.
    pub primitive_count: usize,
    /// Whether the overlay has been released.
    pub released: bool,
}
