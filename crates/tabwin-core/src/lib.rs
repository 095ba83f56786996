#![forbid(unsafe_code)]

//! Core abstractions for tabwin: the widget surface a table renders into,
//! and the deterministic scheduling primitives that drive recomputes.
//!
//! This crate knows nothing about rows or windows. It defines the seam
//! between the virtualization logic (in `tabwin-widgets`) and whatever
//! display system hosts it: a [`surface::Surface`] the host implements,
//! and tick-driven timers the host advances from its own event loop.

pub mod logging;
pub mod schedule;
pub mod surface;

#[cfg(any(test, feature = "test-helpers"))]
pub mod mock;
