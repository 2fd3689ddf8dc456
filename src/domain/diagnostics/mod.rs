// SPDX-License-Identifier: MPL-2.0
//! Diagnostics domain types.
//!
//! - [`BufferCapacity`]: Capacity of the in-memory viewer event log

mod newtypes;

pub use newtypes::BufferCapacity;
