// SPDX-License-Identifier: MPL-2.0
//! Viewer state modules
//!
//! Plain state machines driven by the viewer controller, each independent
//! of how input is delivered.

pub mod double_tap;
pub mod touch;
pub mod zoom;

// Re-export commonly used types for convenience
pub use double_tap::DoubleTapDetector;
pub use touch::{GestureMode, TouchOutput, TouchSession};
pub use zoom::ZoomPanState;
