//! Edge-triggered auto-scroll.
//!
//! While a drag is in flight and the pointer sits inside one of the
//! viewport's trigger bands, a host-driven tick loop advances the scroll
//! offset toward that edge. Scroll velocity scales linearly with how far
//! the pointer has pushed into the band, from zero at the band's inner
//! boundary up to the configured speed at the edge itself.
//!
//! The loop is a scoped resource: the controller starts it on entering
//! Dragging and stops it on every exit path, so no tick can outlive the
//! drag that started it.

use std::time::Duration;

use gridlift_geometry::{EdgeInsets, Point, Size, Vector};
use web_time::Instant;

/// The viewport edge an auto-scroll is moving toward.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ScrollEdge {
    Top,
    Bottom,
    Left,
    Right,
}

/// Per-drag auto-scroll state and tick math.
///
/// Owns no timer; the host's dispatch mechanism calls
/// [`ReorderController::auto_scroll_tick`](crate::ReorderController::auto_scroll_tick)
/// at its cadence and this type turns elapsed time into scroll deltas.
#[derive(Debug)]
pub struct AutoScroll {
    insets: EdgeInsets,
    speed: f32,
    tick_interval: Duration,
    running: bool,
    active_edge: Option<ScrollEdge>,
    pointer: Point,
    bounds: Size,
    last_tick: Option<Instant>,
}

impl AutoScroll {
    pub fn new(insets: EdgeInsets, speed: f32, tick_interval: Duration) -> Self {
        Self {
            insets,
            speed,
            tick_interval,
            running: false,
            active_edge: None,
            pointer: Point::ZERO,
            bounds: Size::ZERO,
            last_tick: None,
        }
    }

    /// Arms the loop. Called on the Lifted -> Dragging transition.
    pub fn start(&mut self) {
        self.running = true;
        self.active_edge = None;
        self.last_tick = None;
    }

    /// Disarms the loop and forgets all transient state. Safe to call twice.
    pub fn stop(&mut self) {
        self.running = false;
        self.active_edge = None;
        self.last_tick = None;
    }

    pub fn is_running(&self) -> bool {
        self.running
    }

    /// The edge currently being scrolled toward, if any.
    pub fn active_edge(&self) -> Option<ScrollEdge> {
        self.active_edge
    }

    /// Reports the pointer's viewport position and reselects the active
    /// edge. Leaving all bands stops scrolling until a band is re-entered.
    pub fn update_pointer(&mut self, pointer: Point, bounds: Size) {
        self.pointer = pointer;
        self.bounds = bounds;

        let edge = self.edge_under_pointer();
        if edge != self.active_edge {
            log::trace!("auto-scroll edge changed: {:?} -> {:?}", self.active_edge, edge);
            // Timing restarts when an edge engages so the idle span outside
            // the band is not billed as scroll time.
            self.last_tick = None;
            self.active_edge = edge;
        }
    }

    /// Advances the loop. Returns the unclamped scroll delta this tick
    /// wants applied, or `None` when idle (not running, or pointer outside
    /// all bands).
    ///
    /// The first tick after engagement assumes one nominal interval has
    /// elapsed; later ticks measure real elapsed time so a stalled host
    /// timer still produces the configured points-per-second rate.
    pub fn tick(&mut self, now: Instant) -> Option<Vector> {
        if !self.running {
            return None;
        }
        let edge = self.active_edge?;

        let dt = match self.last_tick {
            Some(previous) => now.saturating_duration_since(previous),
            None => self.tick_interval,
        };
        self.last_tick = Some(now);

        let magnitude = self.speed * self.penetration_factor() * dt.as_secs_f32();
        if magnitude <= 0.0 {
            return None;
        }

        Some(match edge {
            ScrollEdge::Top => Vector::new(0.0, -magnitude),
            ScrollEdge::Bottom => Vector::new(0.0, magnitude),
            ScrollEdge::Left => Vector::new(-magnitude, 0.0),
            ScrollEdge::Right => Vector::new(magnitude, 0.0),
        })
    }

    /// How far the pointer has pushed into the active band, normalized to
    /// `[0, 1]`. Zero at or outside the band's inner boundary, one at the
    /// viewport edge.
    pub fn penetration_factor(&self) -> f32 {
        let Some(edge) = self.active_edge else {
            return 0.0;
        };
        let (depth, inset) = match edge {
            ScrollEdge::Top => (self.insets.top - self.pointer.y, self.insets.top),
            ScrollEdge::Bottom => (
                self.pointer.y - (self.bounds.height - self.insets.bottom),
                self.insets.bottom,
            ),
            ScrollEdge::Left => (self.insets.left - self.pointer.x, self.insets.left),
            ScrollEdge::Right => (
                self.pointer.x - (self.bounds.width - self.insets.right),
                self.insets.right,
            ),
        };
        if inset <= 0.0 {
            return 0.0;
        }
        (depth / inset).clamp(0.0, 1.0)
    }

    /// First band containing the pointer, checked top, bottom, left, right.
    /// Zero-inset edges never match.
    fn edge_under_pointer(&self) -> Option<ScrollEdge> {
        let p = self.pointer;
        if self.insets.top > 0.0 && p.y < self.insets.top {
            Some(ScrollEdge::Top)
        } else if self.insets.bottom > 0.0 && p.y > self.bounds.height - self.insets.bottom {
            Some(ScrollEdge::Bottom)
        } else if self.insets.left > 0.0 && p.x < self.insets.left {
            Some(ScrollEdge::Left)
        } else if self.insets.right > 0.0 && p.x > self.bounds.width - self.insets.right {
            Some(ScrollEdge::Right)
        } else {
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const BOUNDS: Size = Size {
        width: 400.0,
        height: 600.0,
    };

    fn scroller() -> AutoScroll {
        let mut scroll = AutoScroll::new(EdgeInsets::all(50.0), 100.0, Duration::from_millis(20));
        scroll.start();
        scroll
    }

    #[test]
    fn idle_outside_all_bands() {
        let mut scroll = scroller();
        scroll.update_pointer(Point::new(200.0, 300.0), BOUNDS);
        assert_eq!(scroll.active_edge(), None);
        assert_eq!(scroll.tick(Instant::now()), None);
    }

    #[test]
    fn selects_edges_by_band() {
        let mut scroll = scroller();
        let cases = [
            (Point::new(200.0, 10.0), ScrollEdge::Top),
            (Point::new(200.0, 590.0), ScrollEdge::Bottom),
            (Point::new(10.0, 300.0), ScrollEdge::Left),
            (Point::new(390.0, 300.0), ScrollEdge::Right),
        ];
        for (pointer, expected) in cases {
            scroll.update_pointer(pointer, BOUNDS);
            assert_eq!(scroll.active_edge(), Some(expected), "pointer {pointer:?}");
        }
    }

    #[test]
    fn penetration_is_zero_at_band_boundary_and_full_at_edge() {
        let mut scroll = scroller();

        scroll.update_pointer(Point::new(200.0, 599.9), BOUNDS);
        assert!(scroll.penetration_factor() > 0.99);

        scroll.update_pointer(Point::new(200.0, 551.0), BOUNDS);
        let shallow = scroll.penetration_factor();
        assert!(shallow > 0.0 && shallow < 0.05);

        // Exactly on the inner boundary: outside the band.
        scroll.update_pointer(Point::new(200.0, 550.0), BOUNDS);
        assert_eq!(scroll.active_edge(), None);
        assert_eq!(scroll.penetration_factor(), 0.0);
    }

    #[test]
    fn penetration_is_monotone_in_depth() {
        let mut scroll = scroller();
        let mut previous = 0.0;
        for step in 0..=50 {
            let y = 550.0 + step as f32;
            scroll.update_pointer(Point::new(200.0, y), BOUNDS);
            let factor = scroll.penetration_factor();
            assert!(factor >= previous, "factor regressed at y={y}");
            previous = factor;
        }
        assert_eq!(previous, 1.0);
    }

    #[test]
    fn first_tick_bills_one_nominal_interval() {
        let mut scroll = scroller();
        scroll.update_pointer(Point::new(200.0, 600.0), BOUNDS);

        let delta = scroll.tick(Instant::now()).expect("engaged tick");
        // 100 pt/s at full penetration over the 20 ms nominal interval.
        assert!((delta.y - 2.0).abs() < 1e-4);
        assert_eq!(delta.x, 0.0);
    }

    #[test]
    fn later_ticks_measure_elapsed_time() {
        let mut scroll = scroller();
        scroll.update_pointer(Point::new(200.0, 600.0), BOUNDS);

        let start = Instant::now();
        scroll.tick(start);
        let delta = scroll
            .tick(start + Duration::from_millis(40))
            .expect("engaged tick");
        assert!((delta.y - 4.0).abs() < 1e-4);
    }

    #[test]
    fn top_edge_scrolls_negative() {
        let mut scroll = scroller();
        scroll.update_pointer(Point::new(200.0, 0.0), BOUNDS);
        let delta = scroll.tick(Instant::now()).expect("engaged tick");
        assert!(delta.y < 0.0);
    }

    #[test]
    fn stop_disarms_even_inside_a_band() {
        let mut scroll = scroller();
        scroll.update_pointer(Point::new(200.0, 600.0), BOUNDS);
        scroll.stop();
        assert!(!scroll.is_running());
        assert_eq!(scroll.tick(Instant::now()), None);
    }

    #[test]
    fn zero_insets_never_engage() {
        let mut scroll = AutoScroll::new(EdgeInsets::ZERO, 100.0, Duration::from_millis(20));
        scroll.start();
        scroll.update_pointer(Point::new(0.0, 0.0), BOUNDS);
        assert_eq!(scroll.active_edge(), None);
    }
}
