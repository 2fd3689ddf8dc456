// SPDX-License-Identifier: MPL-2.0
//! Render-facing snapshots of the viewer, used by hosts to draw the frame.

use iced_core::Vector;

/// What the host needs to draw the active image.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ViewerState {
    /// Index of the active image in the sequence.
    pub current_index: usize,
    /// Scale factor in `[1.0, 5.0]`.
    pub scale: f32,
    pub translate_x: f32,
    pub translate_y: f32,
}

impl ViewerState {
    /// Translation as a vector.
    #[must_use]
    pub fn translation(&self) -> Vector {
        Vector::new(self.translate_x, self.translate_y)
    }

    /// Returns true when the image is shown unzoomed and centered.
    #[must_use]
    pub fn is_identity(&self) -> bool {
        self.scale <= 1.0 && self.translate_x == 0.0 && self.translate_y == 0.0
    }
}

/// One entry of the thumbnail strip.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Thumbnail<'a> {
    pub index: usize,
    pub image: &'a str,
    pub selected: bool,
}
