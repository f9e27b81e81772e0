//! Pure math and data types for Gridlift.
//!
//! This crate has no dependencies by design: everything in here is plain
//! geometry (points, vectors, rects, edge insets) plus [`GridPosition`],
//! the section/item addressing scheme used by the reorder logic. All
//! coordinates are `f32` points in the host's content coordinate space.

mod insets;
mod position;
mod primitives;

pub use insets::EdgeInsets;
pub use position::GridPosition;
pub use primitives::{Point, Rect, Size, Vector};
