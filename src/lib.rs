// SPDX-License-Identifier: MPL-2.0
//! `carousel_lens` is the gesture core of a fullscreen image carousel.
//!
//! It turns raw multi-touch, keyboard and button input into a bounded
//! zoom/pan transform and a wrap-around image index. Rendering and image
//! loading belong to the host; this crate is purely in-memory state.
//!
//! ```
//! use carousel_lens::image_navigation::ImageSequence;
//! use carousel_lens::ui::viewer::{Message, Viewer, ViewerKey};
//!
//! let images = ImageSequence::new(["a.jpg", "b.jpg", "c.jpg"]).unwrap();
//! let mut viewer = Viewer::new(images, 0);
//!
//! viewer.handle(Message::KeyPressed(ViewerKey::ArrowLeft));
//! assert_eq!(viewer.current_index(), 2);
//! assert_eq!(viewer.state().scale, 1.0);
//! ```

pub mod config;
pub mod diagnostics;
pub mod domain;
pub mod error;
pub mod image_navigation;
pub mod script;
pub mod ui;

#[cfg(test)]
pub(crate) mod test_utils;
