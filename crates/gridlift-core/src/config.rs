//! Reorder behavior and presentation configuration.

use std::time::Duration;

use gridlift_geometry::EdgeInsets;

/// Configuration for a [`ReorderController`](crate::ReorderController).
///
/// Every field has a sensible default; construct with `ReorderConfig::default()`
/// and adjust with the builder methods.
#[derive(Clone, Debug)]
pub struct ReorderConfig {
    /// Edge bands of the viewport inside which auto-scroll engages.
    pub trigger_edge_insets: EdgeInsets,

    /// Maximum auto-scroll velocity in points per second. Reached when the
    /// pointer is pressed all the way into a trigger band.
    pub scrolling_speed: f32,

    /// Nominal auto-scroll tick cadence. Also used as the assumed elapsed
    /// time for the first tick after the loop engages.
    pub tick_interval: Duration,

    /// Crossfade the lifted cell from its highlighted state on lift.
    pub crossfade_on_lift: bool,

    /// Draw a drop shadow under the lifted cell while dragging.
    pub drop_shadow_while_dragging: bool,

    /// Stretch the first cell when the list is over-pulled past its top.
    pub stretch_first_cell: bool,

    /// Parallax the first cell's content while it is stretched.
    /// Ignored unless `stretch_first_cell` is on.
    pub parallax_first_cell: bool,

    /// Scale the lifted cell settles back to while the list is in editing
    /// mode. Keeps the settle transition smooth.
    pub editing_cell_scale: f32,

    /// Scale applied to the lifted cell while it is dragged.
    pub dragging_cell_scale: f32,

    /// Drag the lifted cell above the container rather than inside it, so
    /// it can cross container-clipped regions such as headers.
    pub drag_above_container: bool,
}

impl Default for ReorderConfig {
    fn default() -> Self {
        Self {
            trigger_edge_insets: EdgeInsets::all(50.0),
            scrolling_speed: 300.0,
            tick_interval: Duration::from_millis(16),
            crossfade_on_lift: true,
            drop_shadow_while_dragging: false,
            stretch_first_cell: false,
            parallax_first_cell: false,
            editing_cell_scale: 0.95,
            dragging_cell_scale: 1.1,
            drag_above_container: false,
        }
    }
}

impl ReorderConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn trigger_edge_insets(mut self, insets: EdgeInsets) -> Self {
        self.trigger_edge_insets = insets;
        self
    }

    pub fn scrolling_speed(mut self, speed: f32) -> Self {
        self.scrolling_speed = speed;
        self
    }

    pub fn tick_interval(mut self, interval: Duration) -> Self {
        self.tick_interval = interval;
        self
    }

    pub fn crossfade_on_lift(mut self, crossfade: bool) -> Self {
        self.crossfade_on_lift = crossfade;
        self
    }

    pub fn drop_shadow_while_dragging(mut self, shadow: bool) -> Self {
        self.drop_shadow_while_dragging = shadow;
        self
    }

    pub fn stretch_first_cell(mut self, stretch: bool) -> Self {
        self.stretch_first_cell = stretch;
        self
    }

    pub fn parallax_first_cell(mut self, parallax: bool) -> Self {
        self.parallax_first_cell = parallax;
        self
    }

    pub fn dragging_cell_scale(mut self, scale: f32) -> Self {
        self.dragging_cell_scale = scale;
        self
    }

    pub fn editing_cell_scale(mut self, scale: f32) -> Self {
        self.editing_cell_scale = scale;
        self
    }

    pub fn drag_above_container(mut self, above: bool) -> Self {
        self.drag_above_container = above;
        self
    }

    /// The presentation hints the host applies to the lifted snapshot.
    pub fn lift_style(&self) -> LiftStyle {
        LiftStyle {
            scale: self.dragging_cell_scale,
            crossfade: self.crossfade_on_lift,
            drop_shadow: self.drop_shadow_while_dragging,
            above_container: self.drag_above_container,
        }
    }

    /// The scale the snapshot animates back to during settling.
    pub fn settle_scale(&self) -> f32 {
        self.editing_cell_scale
    }
}

/// How the host should present the lifted snapshot while dragging.
///
/// Derived from [`ReorderConfig`]; the reorder logic computes *where* the
/// snapshot goes, the host applies these hints to *how* it looks.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct LiftStyle {
    pub scale: f32,
    pub crossfade: bool,
    pub drop_shadow: bool,
    pub above_container: bool,
}
