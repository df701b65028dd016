// Copyright 2026 the Frameguide Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Aspect-ratio policy selection and the per-frame viewport descriptor.

use core::fmt;

/// Inward bias applied to the policy flip threshold, as a fraction of the
/// target aspect ratio.
///
/// Flipping exactly at equality makes the policy oscillate while width and
/// height jitter across the boundary during a continuous resize. The bias is
/// a tuned constant, not a derived optical quantity.
pub const POLICY_FLIP_BIAS: f64 = 0.05;

/// Which axis of the guide coordinate space is clamped to `[-1, 1]`.
///
/// The free axis spans `±aspect_ratio` under [`AspectPolicy::FitVertical`]
/// and `±1/aspect_ratio` under [`AspectPolicy::FitHorizontal`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum AspectPolicy {
    /// The vertical axis is the constrained axis; guides span `±1` in y.
    #[default]
    FitVertical,
    /// The horizontal axis is the constrained axis; guides span `±1` in x.
    FitHorizontal,
}

impl AspectPolicy {
    /// Selects the policy for a viewport of `view_width` × `view_height`
    /// over a render target with aspect ratio `target_aspect`.
    ///
    /// Chooses [`AspectPolicy::FitVertical`] when the viewport is relatively
    /// wider than the target, with the threshold pulled inward by
    /// [`POLICY_FLIP_BIAS`]. Degenerate viewport heights fall back to
    /// `FitVertical`.
    ///
    /// ```
    /// use frameguide_geometry::AspectPolicy;
    ///
    /// let target = 16.0 / 9.0;
    /// assert_eq!(
    ///     AspectPolicy::select(1920.0, 1080.0, target),
    ///     AspectPolicy::FitVertical,
    /// );
    /// assert_eq!(
    ///     AspectPolicy::select(1080.0, 1080.0, target),
    ///     AspectPolicy::FitHorizontal,
    /// );
    /// ```
    #[must_use]
    pub fn select(view_width: f64, view_height: f64, target_aspect: f64) -> Self {
        if view_height <= 0.0 || !view_height.is_finite() || !view_width.is_finite() {
            return Self::FitVertical;
        }
        let threshold = target_aspect - target_aspect * POLICY_FLIP_BIAS;
        if view_width / view_height > threshold {
            Self::FitVertical
        } else {
            Self::FitHorizontal
        }
    }
}

/// Error returned when a viewport frame would have a non-positive or
/// non-finite aspect ratio.
#[derive(Clone, Copy, PartialEq)]
pub struct InvalidAspectRatio {
    /// The offending width/height ratio.
    pub aspect_ratio: f64,
}

impl fmt::Debug for InvalidAspectRatio {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "InvalidAspectRatio {{ aspect_ratio: {:?} }}",
            self.aspect_ratio
        )
    }
}

impl fmt::Display for InvalidAspectRatio {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "viewport aspect ratio {:?} is not a positive finite number",
            self.aspect_ratio
        )
    }
}

impl core::error::Error for InvalidAspectRatio {}

/// Ephemeral descriptor of the frame guides are built for.
///
/// A `ViewportFrame` pairs the effective aspect ratio of the render target
/// with the [`AspectPolicy`] chosen for the enclosing viewport. It is cheap
/// to recompute and is expected to be rebuilt on every resize or fill-policy
/// change rather than mutated in place.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ViewportFrame {
    aspect_ratio: f64,
    policy: AspectPolicy,
}

impl ViewportFrame {
    /// Creates a frame from an aspect ratio and a pre-selected policy.
    ///
    /// Returns [`InvalidAspectRatio`] unless `aspect_ratio` is positive and
    /// finite.
    pub fn new(aspect_ratio: f64, policy: AspectPolicy) -> Result<Self, InvalidAspectRatio> {
        if aspect_ratio > 0.0 && aspect_ratio.is_finite() {
            Ok(Self {
                aspect_ratio,
                policy,
            })
        } else {
            Err(InvalidAspectRatio { aspect_ratio })
        }
    }

    /// Creates a frame from render-target extents, selecting the policy for
    /// the same extents.
    ///
    /// This is the common case where the viewport shows the render target
    /// one-to-one. Hosts that fill the window instead should select the
    /// policy from the window extents via [`AspectPolicy::select`] and use
    /// [`ViewportFrame::new`].
    pub fn from_size(width: f64, height: f64) -> Result<Self, InvalidAspectRatio> {
        if height <= 0.0 || !height.is_finite() {
            return Err(InvalidAspectRatio {
                aspect_ratio: f64::NAN,
            });
        }
        let aspect_ratio = width / height;
        let policy = AspectPolicy::select(width, height, aspect_ratio);
        Self::new(aspect_ratio, policy)
    }

    /// Returns the width/height ratio of the effective render target.
    #[must_use]
    pub fn aspect_ratio(&self) -> f64 {
        self.aspect_ratio
    }

    /// Returns the policy the guide coordinate space is normalized under.
    #[must_use]
    pub fn policy(&self) -> AspectPolicy {
        self.policy
    }

    /// Returns the half extents `(hx, hy)` of the visible frame in guide
    /// space.
    ///
    /// This is `(aspect_ratio, 1)` under [`AspectPolicy::FitVertical`] and
    /// `(1, 1/aspect_ratio)` under [`AspectPolicy::FitHorizontal`].
    #[must_use]
    pub fn half_extents(&self) -> (f64, f64) {
        match self.policy {
            AspectPolicy::FitVertical => (self.aspect_ratio, 1.0),
            AspectPolicy::FitHorizontal => (1.0, 1.0 / self.aspect_ratio),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::{AspectPolicy, InvalidAspectRatio, ViewportFrame};

    #[test]
    fn policy_flip_threshold_is_biased_inward() {
        let target = 16.0 / 9.0;

        // Exactly at the target ratio the viewport still counts as "wide".
        assert_eq!(
            AspectPolicy::select(target * 1000.0, 1000.0, target),
            AspectPolicy::FitVertical,
        );
        // Just above the biased threshold (95% of the target).
        assert_eq!(
            AspectPolicy::select(target * 951.0, 1000.0, target),
            AspectPolicy::FitVertical,
        );
        // Below the biased threshold the policy flips.
        assert_eq!(
            AspectPolicy::select(target * 900.0, 1000.0, target),
            AspectPolicy::FitHorizontal,
        );
    }

    #[test]
    fn degenerate_viewport_height_falls_back_to_fit_vertical() {
        let target = 16.0 / 9.0;
        assert_eq!(
            AspectPolicy::select(100.0, 0.0, target),
            AspectPolicy::FitVertical,
        );
        assert_eq!(
            AspectPolicy::select(100.0, -5.0, target),
            AspectPolicy::FitVertical,
        );
        assert_eq!(
            AspectPolicy::select(f64::NAN, 100.0, target),
            AspectPolicy::FitVertical,
        );
    }

    #[test]
    fn frame_rejects_non_positive_aspect_ratio() {
        assert!(ViewportFrame::new(0.0, AspectPolicy::FitVertical).is_err());
        assert!(ViewportFrame::new(-1.5, AspectPolicy::FitVertical).is_err());
        assert!(ViewportFrame::new(f64::INFINITY, AspectPolicy::FitVertical).is_err());
        assert!(ViewportFrame::new(f64::NAN, AspectPolicy::FitVertical).is_err());
        assert!(ViewportFrame::from_size(1920.0, 0.0).is_err());
    }

    #[test]
    fn half_extents_follow_the_policy() {
        let wide = ViewportFrame::new(2.0, AspectPolicy::FitVertical).unwrap();
        assert_eq!(wide.half_extents(), (2.0, 1.0));

        let tall = ViewportFrame::new(2.0, AspectPolicy::FitHorizontal).unwrap();
        assert_eq!(tall.half_extents(), (1.0, 0.5));
    }

    #[test]
    fn from_size_selects_policy_for_its_own_extents() {
        let frame = ViewportFrame::from_size(1920.0, 1080.0).unwrap();
        // A frame viewed at its own aspect ratio sits above the biased
        // threshold, so the vertical axis is constrained.
        assert_eq!(frame.policy(), AspectPolicy::FitVertical);
        assert!((frame.aspect_ratio() - 16.0 / 9.0).abs() < 1e-12);
    }

    #[test]
    fn invalid_aspect_ratio_formats_the_offending_value() {
        let err = InvalidAspectRatio { aspect_ratio: -2.0 };
        let msg = alloc::format!("{err}");
        assert!(msg.contains("-2.0"), "unexpected message: {msg}");
    }
}
