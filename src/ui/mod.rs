// SPDX-License-Identifier: MPL-2.0
//! Viewer components and state management.
//!
//! Follows the Elm-style "state down, messages up" pattern: hosts feed
//! messages in and read render snapshots back out.
//!
//! - [`viewer`] - Fullscreen carousel with pinch zoom, pan and navigation
//! - [`state`] - Reusable state machines (zoom/pan, touch session, double-tap)

pub mod state;
pub mod viewer;
