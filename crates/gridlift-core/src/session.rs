//! Reorder session state.
//!
//! One [`ReorderSession`] value models everything that is true only while
//! an item is lifted. The controller owns it as an `Option`: `None` is the
//! Idle state, so session invariants (single active session, valid lifted
//! position) are checkable in one place instead of being scattered across
//! ad hoc fields.

use gridlift_geometry::{GridPosition, Point, Vector};

/// Phase of an active reorder session.
///
/// Idle is not represented here: with no session there is no phase.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DragPhase {
    /// Lift accepted, no pointer movement reported yet.
    Lifted,
    /// Pointer is moving; candidate resolution and auto-scroll are live.
    Dragging,
    /// Pointer released; the host is animating the snapshot into its slot.
    Settling,
}

/// State for one in-flight reorder drag.
#[derive(Clone, Debug)]
pub struct ReorderSession {
    /// Position currently occupied by the lifted item. Reassigned on every
    /// committed swap.
    pub lifted: GridPosition,

    /// Offset from the pointer to the lifted item's visual center, captured
    /// at lift time. Fixed for the life of the session.
    pub pointer_offset: Vector,

    /// Cumulative pointer displacement since the lift, in the gesture's
    /// coordinate space.
    pub translation: Vector,

    /// Content-offset change applied by auto-scroll during this session.
    /// The pointer is stationary on screen while the list scrolls under it,
    /// so this is added when mapping the gesture into content coordinates.
    pub scroll_adjustment: Vector,

    /// The lifted item's center at lift time, in content coordinates.
    pub origin_center: Point,

    pub phase: DragPhase,
}

impl ReorderSession {
    /// Creates a freshly lifted session.
    pub fn lifted(position: GridPosition, pointer_offset: Vector, origin_center: Point) -> Self {
        Self {
            lifted: position,
            pointer_offset,
            translation: Vector::ZERO,
            scroll_adjustment: Vector::ZERO,
            origin_center,
            phase: DragPhase::Lifted,
        }
    }

    /// Where the lifted item's visual center currently is, in content
    /// coordinates.
    pub fn dragged_center(&self) -> Point {
        self.origin_center + self.translation + self.scroll_adjustment
    }

    /// Where the pointer currently is, in content coordinates.
    pub fn pointer_position(&self) -> Point {
        self.dragged_center() - self.pointer_offset
    }
}
