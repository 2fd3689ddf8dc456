// SPDX-License-Identifier: MPL-2.0
//! UI newtypes.
//!
//! This module provides type-safe wrappers for viewer values,
//! ensuring they are always within valid ranges.

use crate::config::{
    DEFAULT_DOUBLE_TAP_SCALE, DEFAULT_DOUBLE_TAP_WINDOW_MS, DEFAULT_SNAP_BACK_TOLERANCE,
    MAX_DOUBLE_TAP_WINDOW_MS, MAX_SCALE, MAX_SNAP_BACK_TOLERANCE, MIN_DOUBLE_TAP_WINDOW_MS,
    MIN_SCALE,
};
use std::time::Duration;

// =============================================================================
// ZoomScale
// =============================================================================

/// Zoom scale factor, guaranteed to be within valid range (1×–5×).
///
/// This type ensures that scale values are always valid, eliminating
/// the need for manual clamping at usage sites.
///
/// # Example
///
/// ```
/// use carousel_lens::domain::ui::ZoomScale;
///
/// let scale = ZoomScale::new(2.0).multiply(4.0);
/// assert_eq!(scale.value(), 5.0); // Clamped to max
/// ```
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd)]
pub struct ZoomScale(f32);

impl ZoomScale {
    /// The unzoomed scale (1×).
    pub const IDENTITY: Self = Self(MIN_SCALE);

    /// Creates a new scale, clamping the value to the valid range.
    ///
    /// Non-finite input collapses to identity.
    #[must_use]
    pub fn new(scale: f32) -> Self {
        if scale.is_finite() {
            Self(scale.clamp(MIN_SCALE, MAX_SCALE))
        } else {
            Self::IDENTITY
        }
    }

    /// Returns the raw scale factor.
    #[must_use]
    pub fn value(self) -> f32 {
        self.0
    }

    /// Returns true when the scale is exactly 1×.
    #[must_use]
    pub fn is_identity(self) -> bool {
        self.0 <= MIN_SCALE
    }

    /// Returns true when the image is magnified above 1×.
    #[must_use]
    pub fn is_zoomed(self) -> bool {
        self.0 > MIN_SCALE
    }

    /// Multiplies the scale by `ratio`, clamping the product.
    ///
    /// A non-finite or non-positive ratio leaves the scale unchanged.
    #[must_use]
    pub fn multiply(self, ratio: f32) -> Self {
        if !ratio.is_finite() || ratio <= 0.0 {
            return self;
        }
        Self::new(self.0 * ratio)
    }
}

impl Default for ZoomScale {
    fn default() -> Self {
        Self::IDENTITY
    }
}

// =============================================================================
// DoubleTapScale
// =============================================================================

/// Scale a double-tap zooms to from an unzoomed image.
///
/// Always strictly above 1× so that the toggle is observable.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DoubleTapScale(ZoomScale);

impl DoubleTapScale {
    /// Creates a new double-tap target, clamping to the zoomed range.
    #[must_use]
    pub fn new(scale: f32) -> Self {
        let scale = ZoomScale::new(scale);
        if scale.is_zoomed() {
            Self(scale)
        } else {
            Self::default()
        }
    }

    /// Returns the target as a [`ZoomScale`].
    #[must_use]
    pub fn scale(self) -> ZoomScale {
        self.0
    }
}

impl Default for DoubleTapScale {
    fn default() -> Self {
        Self(ZoomScale(DEFAULT_DOUBLE_TAP_SCALE))
    }
}

// =============================================================================
// DoubleTapWindow
// =============================================================================

/// Maximum delay between two taps for them to pair as a double-tap.
///
/// This newtype enforces validity at the type level, ensuring the value
/// is always within the valid range (100–1000 ms).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DoubleTapWindow(u64);

impl DoubleTapWindow {
    /// Creates a new window, clamping to valid range.
    #[must_use]
    pub fn from_millis(millis: u64) -> Self {
        Self(millis.clamp(MIN_DOUBLE_TAP_WINDOW_MS, MAX_DOUBLE_TAP_WINDOW_MS))
    }

    /// Returns the value in milliseconds.
    #[must_use]
    pub fn millis(self) -> u64 {
        self.0
    }

    /// Returns the window as a Duration.
    #[must_use]
    pub fn as_duration(self) -> Duration {
        Duration::from_millis(self.0)
    }
}

impl Default for DoubleTapWindow {
    fn default() -> Self {
        Self(DEFAULT_DOUBLE_TAP_WINDOW_MS)
    }
}

// =============================================================================
// SnapTolerance
// =============================================================================

/// Scale at or below which a released gesture snaps back to identity.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SnapTolerance(f32);

impl SnapTolerance {
    /// Creates a new tolerance, clamping to `[1.0, 1.5]`.
    #[must_use]
    pub fn new(value: f32) -> Self {
        if value.is_finite() {
            Self(value.clamp(MIN_SCALE, MAX_SNAP_BACK_TOLERANCE))
        } else {
            Self::default()
        }
    }

    /// Returns the raw tolerance.
    #[must_use]
    pub fn value(self) -> f32 {
        self.0
    }

    /// Returns true if `scale` falls inside the snap-back band.
    #[must_use]
    pub fn contains(self, scale: ZoomScale) -> bool {
        scale.value() <= self.0
    }
}

impl Default for SnapTolerance {
    fn default() -> Self {
        Self(DEFAULT_SNAP_BACK_TOLERANCE)
    }
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::assert_abs_diff_eq;

    // -------------------------------------------------------------------------
    // ZoomScale tests
    // -------------------------------------------------------------------------

    #[test]
    fn zoom_scale_clamps() {
        assert_abs_diff_eq!(ZoomScale::new(0.2).value(), MIN_SCALE);
        assert_abs_diff_eq!(ZoomScale::new(12.0).value(), MAX_SCALE);
        assert_abs_diff_eq!(ZoomScale::new(3.3).value(), 3.3);
    }

    #[test]
    fn zoom_scale_rejects_non_finite() {
        assert_eq!(ZoomScale::new(f32::NAN), ZoomScale::IDENTITY);
        assert_eq!(ZoomScale::new(f32::INFINITY), ZoomScale::IDENTITY);
    }

    #[test]
    fn zoom_scale_multiply_compounds_and_clamps() {
        let scale = ZoomScale::IDENTITY.multiply(2.0);
        assert_abs_diff_eq!(scale.value(), 2.0);
        assert_abs_diff_eq!(scale.multiply(2.0).value(), 4.0);
        assert_abs_diff_eq!(scale.multiply(2.0).multiply(2.0).value(), MAX_SCALE);
        assert_abs_diff_eq!(scale.multiply(10.0).value(), MAX_SCALE);
    }

    #[test]
    fn zoom_scale_multiply_ignores_degenerate_ratio() {
        let scale = ZoomScale::new(2.0);
        assert_eq!(scale.multiply(f32::NAN), scale);
        assert_eq!(scale.multiply(0.0), scale);
        assert_eq!(scale.multiply(-1.0), scale);
    }

    #[test]
    fn zoom_scale_identity_predicates() {
        assert!(ZoomScale::IDENTITY.is_identity());
        assert!(!ZoomScale::IDENTITY.is_zoomed());
        assert!(ZoomScale::new(1.01).is_zoomed());
        assert_eq!(ZoomScale::default(), ZoomScale::IDENTITY);
    }

    // -------------------------------------------------------------------------
    // DoubleTapScale tests
    // -------------------------------------------------------------------------

    #[test]
    fn double_tap_scale_defaults_to_two_and_a_half() {
        assert_abs_diff_eq!(DoubleTapScale::default().scale().value(), 2.5);
    }

    #[test]
    fn double_tap_scale_never_identity() {
        assert_eq!(DoubleTapScale::new(1.0), DoubleTapScale::default());
        assert_abs_diff_eq!(DoubleTapScale::new(9.0).scale().value(), MAX_SCALE);
    }

    // -------------------------------------------------------------------------
    // DoubleTapWindow tests
    // -------------------------------------------------------------------------

    #[test]
    fn double_tap_window_clamps() {
        assert_eq!(DoubleTapWindow::from_millis(0).millis(), MIN_DOUBLE_TAP_WINDOW_MS);
        assert_eq!(
            DoubleTapWindow::from_millis(60_000).millis(),
            MAX_DOUBLE_TAP_WINDOW_MS
        );
    }

    #[test]
    fn double_tap_window_as_duration() {
        assert_eq!(
            DoubleTapWindow::default().as_duration(),
            Duration::from_millis(300)
        );
    }

    // -------------------------------------------------------------------------
    // SnapTolerance tests
    // -------------------------------------------------------------------------

    #[test]
    fn snap_tolerance_band() {
        let tolerance = SnapTolerance::default();
        assert!(tolerance.contains(ZoomScale::new(1.04)));
        assert!(tolerance.contains(ZoomScale::new(1.05)));
        assert!(!tolerance.contains(ZoomScale::new(1.2)));
    }

    #[test]
    fn snap_tolerance_clamps() {
        assert_abs_diff_eq!(SnapTolerance::new(0.5).value(), MIN_SCALE);
        assert_abs_diff_eq!(SnapTolerance::new(3.0).value(), MAX_SNAP_BACK_TOLERANCE);
        assert_eq!(SnapTolerance::new(f32::NAN), SnapTolerance::default());
    }
}
