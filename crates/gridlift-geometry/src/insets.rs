//! Edge insets for trigger margins.

/// Per-edge distances measured inward from a rect's edges.
///
/// Used to describe the trigger bands along the scrollable container's
/// edges inside which auto-scroll engages. An inset of zero disables the
/// band on that edge.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct EdgeInsets {
    pub top: f32,
    pub left: f32,
    pub bottom: f32,
    pub right: f32,
}

impl EdgeInsets {
    pub const ZERO: EdgeInsets = EdgeInsets {
        top: 0.0,
        left: 0.0,
        bottom: 0.0,
        right: 0.0,
    };

    pub fn new(top: f32, left: f32, bottom: f32, right: f32) -> Self {
        Self {
            top,
            left,
            bottom,
            right,
        }
    }

    /// Uniform insets on all four edges.
    pub fn all(value: f32) -> Self {
        Self::new(value, value, value, value)
    }
}
