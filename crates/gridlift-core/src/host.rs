//! Host interface traits.
//!
//! The reorder logic never touches the view hierarchy directly. Everything
//! it needs from the host platform comes in through three traits: grid
//! geometry queries, the scrollable container, and the reorder delegate.
//! [`ReorderHost`] bundles them for the controller entry points.

use gridlift_geometry::{GridPosition, Point, Rect, Size};

/// Read-only geometry queries for the current grid layout.
///
/// Implementations answer from the host's live layout and are queried on
/// demand, never cached by the reorder logic. `frame_of` may legitimately
/// return `None` for a position that was just vacated by a data change;
/// callers treat that as "no geometry" rather than an error.
pub trait GridGeometry {
    /// Number of sections in the list.
    fn section_count(&self) -> usize;

    /// Number of items in the given section.
    fn item_count(&self, section: usize) -> usize;

    /// The frame of the item at `position`, in content coordinates.
    fn frame_of(&self, position: GridPosition) -> Option<Rect>;

    /// Hit-test: the item whose frame contains `point`, if any.
    ///
    /// The default implementation scans all item frames. Hosts with a
    /// structured layout should override this with a direct lookup.
    fn position_at(&self, point: Point) -> Option<GridPosition> {
        for section in 0..self.section_count() {
            for item in 0..self.item_count(section) {
                let position = GridPosition::new(section, item);
                if let Some(frame) = self.frame_of(position) {
                    if frame.contains(point) {
                        return Some(position);
                    }
                }
            }
        }
        None
    }
}

/// The scrollable container hosting the grid.
///
/// Offsets and sizes are in content coordinates. The valid offset range per
/// axis is `[0, content_size - bounds_size]`; the auto-scroll controller
/// clamps before calling [`ScrollContainer::set_content_offset`].
pub trait ScrollContainer {
    /// Current scroll position of the viewport within the content.
    fn content_offset(&self) -> Point;

    /// Total size of the scrollable content.
    fn content_size(&self) -> Size;

    /// Size of the visible viewport.
    fn bounds_size(&self) -> Size;

    /// Moves the viewport. Called only with offsets inside the valid range.
    fn set_content_offset(&mut self, offset: Point);
}

/// Capability checks and lifecycle notifications for a reorder session.
///
/// The two `should_*` methods are capability checks with default-true
/// bodies; hosts override them to veto specific lifts or moves. The
/// remaining methods are notifications. [`ReorderDelegate::will_move`] is
/// where the host must perform the authoritative data-model reorder: it is
/// always fired immediately before the session adopts the new position, and
/// [`ReorderDelegate::did_move`] immediately after, with nothing in between.
pub trait ReorderDelegate {
    /// Whether the item at `position` may be lifted. Defaults to true.
    fn should_begin_reordering(&mut self, position: GridPosition) -> bool {
        let _ = position;
        true
    }

    fn will_begin_reordering(&mut self, position: GridPosition);

    fn did_begin_reordering(&mut self, position: GridPosition);

    /// Whether the lifted item may move from `from` to `to`. Defaults to true.
    fn should_move(&mut self, from: GridPosition, to: GridPosition) -> bool {
        let _ = (from, to);
        true
    }

    /// Fired before the move commits. The host reorders its data model here.
    fn will_move(&mut self, from: GridPosition, to: GridPosition);

    fn did_move(&mut self, from: GridPosition, to: GridPosition);

    fn will_end_reordering(&mut self, position: GridPosition);

    fn did_end_reordering(&mut self, position: GridPosition);
}

/// Everything the controller needs from the host, in one bound.
///
/// Blanket-implemented for any type carrying all three facets, so a host
/// view (or a test harness) implements the three traits and gets this for
/// free.
pub trait ReorderHost: GridGeometry + ScrollContainer + ReorderDelegate {}

impl<T: GridGeometry + ScrollContainer + ReorderDelegate> ReorderHost for T {}
