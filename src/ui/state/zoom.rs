// SPDX-License-Identifier: MPL-2.0
//! Zoom/pan state management
//!
//! This module owns the viewport transform of the active image:
//! - Scale, always within 1×–5×
//! - Translation, only non-zero while zoomed
//! - Double-tap toggle and reset to identity

use crate::domain::ui::{DoubleTapScale, SnapTolerance, ZoomScale};
use iced_core::Vector;

/// Viewport transform for the active image.
///
/// Translation is kept at `(0, 0)` whenever the scale is 1×; every mutator
/// re-establishes that before returning.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ZoomPanState {
    scale: ZoomScale,
    translation: Vector,
}

impl Default for ZoomPanState {
    fn default() -> Self {
        Self {
            scale: ZoomScale::IDENTITY,
            translation: Vector::ZERO,
        }
    }
}

impl ZoomPanState {
    /// Current scale factor.
    #[must_use]
    pub fn scale(&self) -> ZoomScale {
        self.scale
    }

    /// Current translation in screen units.
    #[must_use]
    pub fn translation(&self) -> Vector {
        self.translation
    }

    /// Returns true when the transform is exactly identity.
    #[must_use]
    pub fn is_identity(&self) -> bool {
        self.scale.is_identity() && self.translation == Vector::ZERO
    }

    /// Multiplies the scale by `ratio`, clamping to the valid range.
    pub fn apply_scale_multiply(&mut self, ratio: f32) {
        self.scale = self.scale.multiply(ratio);
        if self.scale.is_identity() {
            self.translation = Vector::ZERO;
        }
    }

    /// Translates by `delta`. Ignored unless zoomed.
    ///
    /// Returns whether the translation was applied.
    pub fn apply_translate(&mut self, delta: Vector) -> bool {
        if !self.scale.is_zoomed() || !delta.x.is_finite() || !delta.y.is_finite() {
            return false;
        }
        self.translation = self.translation + delta;
        true
    }

    /// Double-tap behavior: zoomed images return to identity, unzoomed
    /// images jump to `target` centered.
    pub fn toggle_double_tap_zoom(&mut self, target: DoubleTapScale) {
        if self.scale.is_zoomed() {
            self.reset_to_identity();
        } else {
            self.scale = target.scale();
            self.translation = Vector::ZERO;
        }
    }

    /// Snaps back to identity if the scale ended inside the tolerance band.
    ///
    /// Returns whether a snap happened.
    pub fn snap_back(&mut self, tolerance: SnapTolerance) -> bool {
        if tolerance.contains(self.scale) {
            self.reset_to_identity();
            true
        } else {
            false
        }
    }

    /// Unconditionally resets to scale 1× and no translation.
    pub fn reset_to_identity(&mut self) {
        self.scale = ZoomScale::IDENTITY;
        self.translation = Vector::ZERO;
    }
}
