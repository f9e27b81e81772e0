//! Gesture robot for driving a reorder controller.

use std::time::Duration;

use gridlift_core::{ReorderConfig, ReorderController, ScrollContainer};
use gridlift_geometry::{Point, Rect, Vector};
use web_time::Instant;

use crate::grid::TestGrid;

/// Scripted finger plus timer standing in for the host's gesture layer.
///
/// Points are viewport coordinates, like a real gesture recognizer would
/// report. The robot mirrors host responsibilities the controller does not
/// own: it converts the press location into content coordinates, withholds
/// move events when the lift was refused, ticks the timer only while the
/// controller wants ticks, and completes the settle animation instantly on
/// release.
pub struct ReorderRobot {
    pub controller: ReorderController,
    pub grid: TestGrid,
    press_point: Point,
    pointer: Point,
    accepted: bool,
    now: Instant,
}

impl ReorderRobot {
    pub fn new(config: ReorderConfig, grid: TestGrid) -> Self {
        Self {
            controller: ReorderController::new(config),
            grid,
            press_point: Point::ZERO,
            pointer: Point::ZERO,
            accepted: false,
            now: Instant::now(),
        }
    }

    /// Long-presses at a viewport point. Returns whether the lift began.
    pub fn press(&mut self, at: Point) -> bool {
        self.press_point = at;
        self.pointer = at;
        let offset = self.grid.content_offset();
        let content_point = Point::new(at.x + offset.x, at.y + offset.y);
        self.accepted = self.controller.begin_drag(content_point, &mut self.grid);
        self.accepted
    }

    /// Moves the finger to a viewport point.
    ///
    /// Dropped silently when the lift was refused - the host's pan
    /// recognizer would not be tracking a reorder in that case.
    pub fn drag_to(&mut self, point: Point) {
        self.pointer = point;
        if !self.accepted {
            return;
        }
        let translation = point - self.press_point;
        self.controller.drag_to(translation, &mut self.grid);
    }

    /// Moves the finger by a viewport delta.
    pub fn drag_by(&mut self, delta: Vector) {
        self.drag_to(self.pointer + delta);
    }

    /// Holds the finger still for `duration`, firing timer ticks at the
    /// controller's configured cadence while the auto-scroll loop is armed.
    pub fn hold(&mut self, duration: Duration) {
        let interval = self.controller.config().tick_interval;
        let mut elapsed = Duration::ZERO;
        while elapsed < duration {
            elapsed += interval;
            self.now += interval;
            if self.controller.wants_ticks() {
                self.controller.auto_scroll_tick(self.now, &mut self.grid);
            }
        }
    }

    /// Lifts the finger and completes the settle animation immediately.
    /// Returns the settle target frame, or `None` when no lift was active.
    pub fn release(&mut self) -> Option<Rect> {
        if !self.accepted {
            return None;
        }
        self.accepted = false;
        let target = self.controller.end_drag(&mut self.grid);
        self.controller.finish_settling(&mut self.grid);
        target
    }

    /// Cancels the gesture mid-drag, as the host would on recognizer
    /// cancellation or view teardown.
    pub fn cancel(&mut self) {
        self.accepted = false;
        self.controller.cancel_drag(&mut self.grid);
    }
}
