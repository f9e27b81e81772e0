//! Candidate slot resolution.
//!
//! Answers the question "which slot does the lifted item overlap right
//! now?". This is an overlap test against the live item frames, not a
//! nearest-neighbor search: an item whose frame does not intersect the
//! dragged frame is never a candidate no matter how close its center is.

use gridlift_geometry::{GridPosition, Rect};
use smallvec::SmallVec;

use crate::host::GridGeometry;

/// Resolves the slot the dragged item should swap into, if any.
///
/// Scans every item other than `lifted`, keeps those whose frame intersects
/// `dragged_frame`, and returns the one whose center is nearest the dragged
/// center. Equidistant overlaps break toward the lowest position ordering.
/// Returns `None` when nothing overlaps.
///
/// The geometry is re-queried on every call, so the result stays correct
/// when frames were just recomputed after a swap; calling twice against
/// unchanged geometry yields the same answer.
pub fn resolve_candidate<G: GridGeometry + ?Sized>(
    lifted: GridPosition,
    dragged_frame: Rect,
    geometry: &G,
) -> Option<GridPosition> {
    let dragged_center = dragged_frame.center();

    // A dragged cell rarely overlaps more than its immediate neighbors.
    let mut overlapping: SmallVec<[(GridPosition, f32); 8]> = SmallVec::new();
    for section in 0..geometry.section_count() {
        for item in 0..geometry.item_count(section) {
            let position = GridPosition::new(section, item);
            if position == lifted {
                continue;
            }
            let Some(frame) = geometry.frame_of(position) else {
                continue;
            };
            if frame.intersects(&dragged_frame) {
                overlapping.push((position, frame.center().distance_squared(dragged_center)));
            }
        }
    }

    overlapping
        .into_iter()
        .min_by(|(a_pos, a_dist), (b_pos, b_dist)| {
            a_dist
                .partial_cmp(b_dist)
                .unwrap_or(std::cmp::Ordering::Equal)
                .then(a_pos.cmp(b_pos))
        })
        .map(|(position, _)| position)
}
