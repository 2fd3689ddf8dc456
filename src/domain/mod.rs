// SPDX-License-Identifier: MPL-2.0
//! Domain layer - value objects shared by the viewer state machines.
//!
//! This module contains pure domain types and their clamping rules.
//! Apart from the crate's own configuration constants it depends only on `std`.
//!
//! # Modules
//!
//! - [`diagnostics`]: Diagnostics types ([`BufferCapacity`](diagnostics::BufferCapacity))
//! - [`ui`]: Viewer value objects ([`ZoomScale`](ui::newtypes::ZoomScale),
//!   [`DoubleTapWindow`](ui::newtypes::DoubleTapWindow),
//!   [`SnapTolerance`](ui::newtypes::SnapTolerance))

pub mod diagnostics;
pub mod ui;
