//! First-cell over-pull effects.
//!
//! When the list is pulled past its top (negative vertical content offset,
//! as in a rubber-banding container), the first cell can stretch to fill
//! the revealed gap, optionally parallaxing its content at half rate. Pure
//! geometry: the host applies the returned frame and content shift to the
//! first cell's view.

use gridlift_geometry::{Rect, Vector};

use crate::config::ReorderConfig;

/// Adjusted presentation for the first cell under over-pull.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct FirstCellEffect {
    /// Frame the first cell should occupy, in content coordinates.
    pub frame: Rect,
    /// Shift to apply to the cell's content inside that frame.
    pub content_shift: Vector,
}

/// Computes the first cell's stretched frame for the current over-pull.
///
/// `resting_frame` is the cell's laid-out frame; `content_offset_y` is the
/// container's vertical content offset. With no over-pull (offset >= 0) or
/// with stretching disabled, the resting frame passes through untouched.
pub fn first_cell_effect(
    config: &ReorderConfig,
    resting_frame: Rect,
    content_offset_y: f32,
) -> FirstCellEffect {
    let pull = -content_offset_y;
    if !config.stretch_first_cell || pull <= 0.0 {
        return FirstCellEffect {
            frame: resting_frame,
            content_shift: Vector::ZERO,
        };
    }

    let frame = Rect::new(
        resting_frame.x,
        resting_frame.y - pull,
        resting_frame.width,
        resting_frame.height + pull,
    );
    let content_shift = if config.parallax_first_cell {
        // Content trails the stretch at half rate.
        Vector::new(0.0, -pull / 2.0)
    } else {
        Vector::ZERO
    };

    FirstCellEffect {
        frame,
        content_shift,
    }
}
