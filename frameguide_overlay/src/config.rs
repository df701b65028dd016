// Copyright 2026 the Frameguide Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Long-lived overlay configuration.

use frameguide_geometry::{CompositionMode, MIN_LETTERBOX_RATIO};

/// Default action-safe percentage.
pub const DEFAULT_ACTION_SAFE_PERCENTAGE: f64 = 93.0;

/// Default title-safe percentage.
pub const DEFAULT_TITLE_SAFE_PERCENTAGE: f64 = 90.0;

/// Default custom-safe percentage.
pub const DEFAULT_CUSTOM_SAFE_PERCENTAGE: f64 = 85.0;

/// Default letterbox target ratio (anamorphic widescreen).
pub const DEFAULT_LETTERBOX_RATIO: f64 = 2.35;

/// One safe-area band: an on/off switch plus a frame percentage.
///
/// The percentage is kept inside `[0, 100]` by [`SafeAreaSpec::set_percentage`].
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SafeAreaSpec {
    /// Whether this safe area is drawn.
    pub enabled: bool,
    percentage: f64,
}

impl SafeAreaSpec {
    /// Creates a disabled spec with the given percentage, clamped to `[0, 100]`.
    #[must_use]
    pub fn new(percentage: f64) -> Self {
        let mut spec = Self {
            enabled: false,
            percentage: 0.0,
        };
        spec.set_percentage(percentage);
        spec
    }

    /// Returns the percentage of the frame this safe area covers.
    #[must_use]
    pub fn percentage(&self) -> f64 {
        self.percentage
    }

    /// Sets the covered percentage, clamping into `[0, 100]`.
    ///
    /// Non-finite values clamp to zero.
    pub fn set_percentage(&mut self, percentage: f64) {
        self.percentage = if percentage.is_finite() {
            percentage.clamp(0.0, 100.0)
        } else {
            0.0
        };
    }
}

/// The letterbox mask: an on/off switch plus a target aspect ratio.
///
/// The ratio is kept at or above
/// [`MIN_LETTERBOX_RATIO`](frameguide_geometry::MIN_LETTERBOX_RATIO) by
/// [`LetterboxSpec::set_ratio`].
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct LetterboxSpec {
    /// Whether the letterbox bars are drawn.
    pub enabled: bool,
    ratio: f64,
}

impl LetterboxSpec {
    /// Creates a disabled spec with the given target ratio.
    #[must_use]
    pub fn new(ratio: f64) -> Self {
        let mut spec = Self {
            enabled: false,
            ratio: DEFAULT_LETTERBOX_RATIO,
        };
        spec.set_ratio(ratio);
        spec
    }

    /// Returns the target aspect ratio the bars mask down to.
    #[must_use]
    pub fn ratio(&self) -> f64 {
        self.ratio
    }

    /// Sets the target ratio, clamping up to the minimum.
    ///
    /// Non-finite values reset to [`DEFAULT_LETTERBOX_RATIO`].
    pub fn set_ratio(&mut self, ratio: f64) {
        self.ratio = if ratio.is_finite() {
            ratio.max(MIN_LETTERBOX_RATIO)
        } else {
            DEFAULT_LETTERBOX_RATIO
        };
    }
}

/// Everything the user can toggle or tune on an overlay.
///
/// Exactly one composition mode is active at a time; the three safe areas
/// and the letterbox toggle independently and may coexist with any
/// composition mode and each other.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct OverlayConfig {
    /// The active composition guide.
    pub composition: CompositionMode,
    /// Action-safe band (defaults to 93%).
    pub action_safe: SafeAreaSpec,
    /// Title-safe band (defaults to 90%).
    pub title_safe: SafeAreaSpec,
    /// Custom safe band (defaults to 85%).
    pub custom_safe: SafeAreaSpec,
    /// Letterbox mask (defaults to 2.35:1).
    pub letterbox: LetterboxSpec,
}

impl Default for OverlayConfig {
    fn default() -> Self {
        Self {
            composition: CompositionMode::Off,
            action_safe: SafeAreaSpec::new(DEFAULT_ACTION_SAFE_PERCENTAGE),
            title_safe: SafeAreaSpec::new(DEFAULT_TITLE_SAFE_PERCENTAGE),
            custom_safe: SafeAreaSpec::new(DEFAULT_CUSTOM_SAFE_PERCENTAGE),
            letterbox: LetterboxSpec::new(DEFAULT_LETTERBOX_RATIO),
        }
    }
}
