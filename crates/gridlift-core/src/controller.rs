//! The reorder controller.
//!
//! Owns the drag state machine (Idle -> Lifted -> Dragging -> Settling ->
//! Idle), commits candidate swaps, and drives auto-scroll. The host feeds
//! it gesture events (a long-press begins, pan translations continue, a
//! release or cancellation ends) and timer ticks; the controller answers
//! with where to draw the lifted snapshot and which slot the data now
//! occupies.
//!
//! Single-threaded by construction: every entry point runs on the host's
//! event dispatch, and there is never more than one in-flight mutation.
//! Calling a drag-continuation entry point with no active session is a
//! lifecycle bug in the caller and panics immediately.

use gridlift_geometry::{GridPosition, Point, Rect, Vector};
use web_time::Instant;

use crate::autoscroll::{AutoScroll, ScrollEdge};
use crate::config::{LiftStyle, ReorderConfig};
use crate::host::{GridGeometry, ReorderHost};
use crate::resolver::resolve_candidate;
use crate::session::{DragPhase, ReorderSession};

/// Drag-to-reorder state machine for one grid list.
///
/// At most one session is active at a time; lift requests arriving while a
/// session exists are ignored. All geometry is queried from the host on
/// demand, never cached across events.
pub struct ReorderController {
    config: ReorderConfig,
    session: Option<ReorderSession>,
    scroller: AutoScroll,
}

impl ReorderController {
    pub fn new(config: ReorderConfig) -> Self {
        let scroller = AutoScroll::new(
            config.trigger_edge_insets,
            config.scrolling_speed,
            config.tick_interval,
        );
        Self {
            config,
            session: None,
            scroller,
        }
    }

    pub fn config(&self) -> &ReorderConfig {
        &self.config
    }

    /// Presentation hints for the lifted snapshot.
    pub fn lift_style(&self) -> LiftStyle {
        self.config.lift_style()
    }

    /// Whether a reorder session is in flight.
    pub fn is_active(&self) -> bool {
        self.session.is_some()
    }

    /// Phase of the active session, or `None` when Idle.
    pub fn phase(&self) -> Option<DragPhase> {
        self.session.as_ref().map(|session| session.phase)
    }

    /// Position currently held by the lifted item, or `None` when Idle.
    pub fn lifted_position(&self) -> Option<GridPosition> {
        self.session.as_ref().map(|session| session.lifted)
    }

    /// The edge auto-scroll is currently moving toward, if any.
    pub fn active_scroll_edge(&self) -> Option<ScrollEdge> {
        self.scroller.active_edge()
    }

    /// Whether the auto-scroll loop should be receiving ticks.
    pub fn wants_ticks(&self) -> bool {
        self.scroller.is_running()
    }

    /// Frame the host should draw the lifted snapshot in right now, in
    /// content coordinates. `None` when Idle or when the lifted item's
    /// geometry is unavailable.
    pub fn drag_frame<G: GridGeometry + ?Sized>(&self, geometry: &G) -> Option<Rect> {
        let session = self.session.as_ref()?;
        let frame = geometry.frame_of(session.lifted)?;
        Some(Rect::from_center(session.dragged_center(), frame.size()))
    }

    /// Attempts to lift the item under `at` (content coordinates).
    ///
    /// Returns whether a session began. A lift is refused silently when no
    /// item is under the pointer, when the delegate vetoes it, or when a
    /// session is already active; in all three cases the host should not
    /// forward further gesture events until a new press begins.
    pub fn begin_drag<H: ReorderHost + ?Sized>(&mut self, at: Point, host: &mut H) -> bool {
        if self.session.is_some() {
            log::trace!("lift ignored: a reorder session is already active");
            return false;
        }
        let Some(position) = host.position_at(at) else {
            return false;
        };
        if !host.should_begin_reordering(position) {
            log::debug!("lift denied by delegate at {position}");
            return false;
        }
        let Some(frame) = host.frame_of(position) else {
            log::warn!("no frame for hit-tested item at {position}; lift refused");
            return false;
        };

        let center = frame.center();
        self.session = Some(ReorderSession::lifted(position, center - at, center));
        log::debug!("lifted item at {position}");

        host.will_begin_reordering(position);
        host.did_begin_reordering(position);
        true
    }

    /// Continues the drag with the gesture's cumulative `translation`.
    ///
    /// The first movement transitions Lifted -> Dragging and arms the
    /// auto-scroll loop. Each call repositions the snapshot, feeds the
    /// pointer to auto-scroll, and commits a swap if the snapshot now
    /// overlaps another item's slot.
    ///
    /// # Panics
    ///
    /// Panics when no session is active.
    pub fn drag_to<H: ReorderHost + ?Sized>(&mut self, translation: Vector, host: &mut H) {
        let phase = {
            let Some(session) = self.session.as_mut() else {
                panic!("drag_to called with no active reorder session");
            };
            // Late move events after release are dropped.
            if session.phase == DragPhase::Settling {
                return;
            }
            session.translation = translation;
            session.phase
        };
        if phase == DragPhase::Lifted {
            if let Some(session) = self.session.as_mut() {
                session.phase = DragPhase::Dragging;
            }
            self.scroller.start();
            log::debug!("drag began; auto-scroll armed");
        }

        self.update_scroll_pointer(host);
        self.resolve_and_commit(host);
    }

    /// Advances the auto-scroll loop. Host timers call this at the
    /// configured cadence while [`ReorderController::wants_ticks`] is true.
    ///
    /// Applies this tick's scroll delta (clamped to the valid offset
    /// range; a tick at a scroll extremity is a no-op) and then re-resolves
    /// the candidate, since scrolling moves geometry under a stationary
    /// pointer.
    ///
    /// # Panics
    ///
    /// Panics when no session is active.
    pub fn auto_scroll_tick<H: ReorderHost + ?Sized>(&mut self, now: Instant, host: &mut H) {
        let Some(session) = self.session.as_ref() else {
            panic!("auto_scroll_tick called with no active reorder session");
        };
        if session.phase != DragPhase::Dragging {
            return;
        }
        let Some(delta) = self.scroller.tick(now) else {
            return;
        };

        let offset = host.content_offset();
        let content = host.content_size();
        let bounds = host.bounds_size();
        let max_x = (content.width - bounds.width).max(0.0);
        let max_y = (content.height - bounds.height).max(0.0);
        let target = Point::new(
            (offset.x + delta.x).clamp(0.0, max_x),
            (offset.y + delta.y).clamp(0.0, max_y),
        );
        let applied = target - offset;
        if applied == Vector::ZERO {
            // Already at the extremity in the scroll direction.
            return;
        }

        host.set_content_offset(target);
        if let Some(session) = self.session.as_mut() {
            session.scroll_adjustment += applied;
        }
        self.resolve_and_commit(host);
    }

    /// Ends the drag: transitions to Settling, stops the auto-scroll loop,
    /// and returns the resting frame the host should animate the snapshot
    /// into. The host calls [`ReorderController::finish_settling`] when
    /// that animation completes.
    ///
    /// # Panics
    ///
    /// Panics when no session is active.
    pub fn end_drag<H: ReorderHost + ?Sized>(&mut self, host: &mut H) -> Option<Rect> {
        {
            let Some(session) = self.session.as_mut() else {
                panic!("end_drag called with no active reorder session");
            };
            session.phase = DragPhase::Settling;
        }
        self.scroller.stop();
        let lifted = self.session.as_ref().map(|session| session.lifted);
        log::debug!("drag ended; settling toward {:?}", lifted);
        lifted.and_then(|position| host.frame_of(position))
    }

    /// Completes the settle: fires the end notifications and returns to
    /// Idle. Called by the host when the settle animation finishes.
    ///
    /// # Panics
    ///
    /// Panics when no session is active or the session is not Settling.
    pub fn finish_settling<H: ReorderHost + ?Sized>(&mut self, host: &mut H) {
        let lifted = match self.session.as_ref() {
            None => panic!("finish_settling called with no active reorder session"),
            Some(session) if session.phase != DragPhase::Settling => {
                panic!("finish_settling called while {:?}", session.phase)
            }
            Some(session) => session.lifted,
        };
        host.will_end_reordering(lifted);
        host.did_end_reordering(lifted);
        self.session = None;
        log::debug!("reorder finished at {lifted}");
    }

    /// Force-terminates the session from any phase: stops the auto-scroll
    /// loop, fires the end notifications at the last committed position,
    /// and discards the session without the settling animation. A no-op
    /// when Idle, so view teardown can call it unconditionally.
    pub fn cancel_drag<H: ReorderHost + ?Sized>(&mut self, host: &mut H) {
        self.scroller.stop();
        let Some(session) = self.session.take() else {
            return;
        };
        log::debug!("reorder cancelled at {}", session.lifted);
        host.will_end_reordering(session.lifted);
        host.did_end_reordering(session.lifted);
    }

    /// Maps the session's pointer into viewport coordinates and hands it to
    /// the auto-scroll edge selection.
    fn update_scroll_pointer<H: ReorderHost + ?Sized>(&mut self, host: &mut H) {
        let Some(session) = self.session.as_ref() else {
            return;
        };
        let pointer = session.pointer_position();
        let offset = host.content_offset();
        let viewport = Point::new(pointer.x - offset.x, pointer.y - offset.y);
        self.scroller.update_pointer(viewport, host.bounds_size());
    }

    /// Resolves the current candidate and commits the swap if the delegate
    /// allows it. The delegate's `will_move` performs the authoritative
    /// data reorder; the session adopts the new position between `will_move`
    /// and `did_move`, so observers see exactly one mutation per accepted
    /// candidate. When nothing overlaps, the last committed position is
    /// simply retained.
    fn resolve_and_commit<H: ReorderHost + ?Sized>(&mut self, host: &mut H) {
        let (lifted, dragged_frame) = {
            let Some(session) = self.session.as_ref() else {
                return;
            };
            let Some(lifted_frame) = host.frame_of(session.lifted) else {
                log::warn!("no frame for lifted item at {}; skipping resolution", session.lifted);
                return;
            };
            (
                session.lifted,
                Rect::from_center(session.dragged_center(), lifted_frame.size()),
            )
        };

        let Some(candidate) = resolve_candidate(lifted, dragged_frame, host) else {
            return;
        };
        if !host.should_move(lifted, candidate) {
            log::trace!("move {lifted} -> {candidate} denied by delegate");
            return;
        }

        host.will_move(lifted, candidate);
        if let Some(session) = self.session.as_mut() {
            // The dragged center is anchored to the lift-time origin, so
            // adopting the new position causes no visual jump.
            session.lifted = candidate;
        }
        host.did_move(lifted, candidate);
        log::debug!("moved {lifted} -> {candidate}");
    }
}
