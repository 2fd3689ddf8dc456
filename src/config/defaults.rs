// SPDX-License-Identifier: MPL-2.0
//! Centralized default values for all configuration constants.
//!
//! This module serves as the single source of truth for default values
//! used across the crate. Constants are organized by category.
//!
//! # Categories
//!
//! - **Scale**: Zoom scale bounds and the double-tap target
//! - **Gestures**: Double-tap pairing window and snap-back tolerance
//! - **Diagnostics**: Event log capacity

// ==========================================================================
// Scale Defaults
// ==========================================================================

/// Identity scale; also the lowest scale the viewer allows.
pub const MIN_SCALE: f32 = 1.0;

/// Maximum allowed scale.
pub const MAX_SCALE: f32 = 5.0;

/// Scale applied when a double-tap zooms into an unzoomed image.
pub const DEFAULT_DOUBLE_TAP_SCALE: f32 = 2.5;

// ==========================================================================
// Gesture Defaults
// ==========================================================================

/// Default pairing window for double-tap detection (in milliseconds).
pub const DEFAULT_DOUBLE_TAP_WINDOW_MS: u64 = 300;

/// Minimum double-tap window (in milliseconds).
pub const MIN_DOUBLE_TAP_WINDOW_MS: u64 = 100;

/// Maximum double-tap window (in milliseconds).
pub const MAX_DOUBLE_TAP_WINDOW_MS: u64 = 1000;

/// Scale at or below which releasing all fingers snaps back to identity.
pub const DEFAULT_SNAP_BACK_TOLERANCE: f32 = 1.05;

/// Upper bound for a configured snap-back tolerance.
pub const MAX_SNAP_BACK_TOLERANCE: f32 = 1.5;

// ==========================================================================
// Diagnostics Defaults
// ==========================================================================

/// Default number of diagnostic events retained in memory.
pub const DEFAULT_DIAGNOSTICS_BUFFER_CAPACITY: usize = 256;

/// Minimum diagnostic buffer capacity.
pub const MIN_DIAGNOSTICS_BUFFER_CAPACITY: usize = 16;

/// Maximum diagnostic buffer capacity.
pub const MAX_DIAGNOSTICS_BUFFER_CAPACITY: usize = 4096;

// ==========================================================================
// Compile-time Validation
// ==========================================================================

const _: () = {
    // Scale validation
    assert!(MIN_SCALE == 1.0);
    assert!(MAX_SCALE > MIN_SCALE);
    assert!(DEFAULT_DOUBLE_TAP_SCALE > MIN_SCALE);
    assert!(DEFAULT_DOUBLE_TAP_SCALE <= MAX_SCALE);

    // Gesture validation
    assert!(MIN_DOUBLE_TAP_WINDOW_MS > 0);
    assert!(MAX_DOUBLE_TAP_WINDOW_MS >= MIN_DOUBLE_TAP_WINDOW_MS);
    assert!(DEFAULT_DOUBLE_TAP_WINDOW_MS >= MIN_DOUBLE_TAP_WINDOW_MS);
    assert!(DEFAULT_DOUBLE_TAP_WINDOW_MS <= MAX_DOUBLE_TAP_WINDOW_MS);
    assert!(DEFAULT_SNAP_BACK_TOLERANCE >= MIN_SCALE);
    assert!(DEFAULT_SNAP_BACK_TOLERANCE <= MAX_SNAP_BACK_TOLERANCE);
    assert!(MAX_SNAP_BACK_TOLERANCE < DEFAULT_DOUBLE_TAP_SCALE);

    // Diagnostics validation
    assert!(MIN_DIAGNOSTICS_BUFFER_CAPACITY > 0);
    assert!(MAX_DIAGNOSTICS_BUFFER_CAPACITY >= MIN_DIAGNOSTICS_BUFFER_CAPACITY);
    assert!(DEFAULT_DIAGNOSTICS_BUFFER_CAPACITY >= MIN_DIAGNOSTICS_BUFFER_CAPACITY);
    assert!(DEFAULT_DIAGNOSTICS_BUFFER_CAPACITY <= MAX_DIAGNOSTICS_BUFFER_CAPACITY);
};
