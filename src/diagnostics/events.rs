// SPDX-License-Identifier: MPL-2.0
//! Diagnostic event types for viewer activity tracking.

use serde::{Deserialize, Serialize};

/// What moved the carousel.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum NavigationTrigger {
    Next,
    Previous,
    Select,
}

/// Why the viewer was dismissed.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum CloseReason {
    /// Escape key.
    Escape,
    /// Click on the backdrop outside a zoomed image.
    Backdrop,
    /// Host-requested close (close button, programmatic).
    Requested,
}

/// A single recorded event with its offset from the start of the session.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct DiagnosticEvent {
    /// Milliseconds since the log was created.
    pub elapsed_ms: u64,
    pub kind: DiagnosticEventKind,
}

/// The type and associated data for a diagnostic event.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum DiagnosticEventKind {
    /// Viewer opened.
    Opened { image_count: usize, index: usize },

    /// Current image changed; the transform was reset.
    Navigated {
        from: usize,
        to: usize,
        trigger: NavigationTrigger,
    },

    /// Double-tap toggled the zoom.
    DoubleTap {
        /// Scale after the toggle.
        scale: f32,
    },

    /// All fingers lifted near 1× and the transform snapped to identity.
    SnapBack {
        /// Scale just before the snap.
        scale: f32,
    },

    /// Viewer closed.
    Closed { reason: CloseReason },
}
