// SPDX-License-Identifier: MPL-2.0
//! Image navigation module for the fullscreen carousel.
//!
//! [`ImageSequence`] is the non-empty, immutable list of image references the
//! host hands to the viewer; [`CarouselNavigator`] tracks the current position
//! in it and wraps around at both ends.

use crate::error::{Error, Result};

/// Ordered, non-empty list of opaque image references.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImageSequence {
    images: Vec<String>,
}

impl ImageSequence {
    /// Builds a sequence, rejecting an empty list.
    pub fn new<I, S>(images: I) -> Result<Self>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let images: Vec<String> = images.into_iter().map(Into::into).collect();
        if images.is_empty() {
            return Err(Error::EmptySequence);
        }
        Ok(Self { images })
    }

    /// Number of images; always at least one.
    #[must_use]
    pub fn len(&self) -> usize {
        self.images.len()
    }

    /// Always false; kept for API symmetry with collections.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.images.is_empty()
    }

    #[must_use]
    pub fn get(&self, index: usize) -> Option<&str> {
        self.images.get(index).map(String::as_str)
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.images.iter().map(String::as_str)
    }
}

/// Current position in an [`ImageSequence`], wrapping at the boundaries.
///
/// The navigator only moves the index. Callers are responsible for resetting
/// the zoom/pan transform after every move.
#[derive(Debug, Clone, PartialEq)]
pub struct CarouselNavigator {
    images: ImageSequence,
    current: usize,
}

impl CarouselNavigator {
    /// Creates a navigator positioned at `initial_index`.
    ///
    /// An out-of-range start falls back to the first image.
    #[must_use]
    pub fn new(images: ImageSequence, initial_index: usize) -> Self {
        let current = if initial_index < images.len() {
            initial_index
        } else {
            log::warn!(
                "Initial index {} out of range for {} images, starting at 0",
                initial_index,
                images.len()
            );
            0
        };
        Self { images, current }
    }

    /// Moves to the next image, wrapping to the first after the last.
    pub fn next(&mut self) -> usize {
        self.current = (self.current + 1) % self.len();
        self.current
    }

    /// Moves to the previous image, wrapping to the last before the first.
    pub fn previous(&mut self) -> usize {
        let len = self.len();
        self.current = (self.current + len - 1) % len;
        self.current
    }

    /// Jumps to `index`. Out-of-range targets are clamped to the last image.
    pub fn select(&mut self, index: usize) -> usize {
        let last = self.len() - 1;
        if index > last {
            log::warn!("Selected index {} out of range, clamping to {}", index, last);
        }
        self.current = index.min(last);
        self.current
    }

    /// Index of the current image.
    #[must_use]
    pub fn current_index(&self) -> usize {
        self.current
    }

    /// Reference of the current image.
    #[must_use]
    pub fn current_image(&self) -> &str {
        // `current` is kept in bounds by every mutator.
        self.images.get(self.current).unwrap_or_default()
    }

    /// Total number of images.
    #[must_use]
    pub fn len(&self) -> usize {
        self.images.len()
    }

    /// Always false; a navigator is built from a non-empty sequence.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.images.is_empty()
    }

    /// Whether there is anything to navigate to (more than one image).
    #[must_use]
    pub fn has_multiple(&self) -> bool {
        self.len() > 1
    }

    /// One-based position label such as `"2 / 3"`.
    #[must_use]
    pub fn position_label(&self) -> String {
        format!("{} / {}", self.current + 1, self.len())
    }

    /// The underlying sequence.
    #[must_use]
    pub fn images(&self) -> &ImageSequence {
        &self.images
    }
}
