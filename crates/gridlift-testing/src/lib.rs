//! Testing utilities and harness for Gridlift.
//!
//! Provides an in-memory grid host ([`TestGrid`]) that stands in for a real
//! platform view - uniform cell layout, scrollable viewport, recording
//! delegate - and a gesture robot ([`ReorderRobot`]) that drives a
//! [`ReorderController`](gridlift_core::ReorderController) the way a host's
//! gesture recognizers and timer would.

mod grid;
mod robot;

pub use grid::{GridSpec, HostEvent, TestGrid};
pub use robot::ReorderRobot;
