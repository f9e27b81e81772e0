//! Drag-to-reorder logic for grid lists.
//!
//! Gridlift is the portable half of a long-press drag-to-reorder
//! interaction: the state machine, candidate resolution, and edge
//! auto-scroll, with rendering, gesture recognition, and timers left to
//! the host platform behind the [`host`] traits.
//!
//! # Architecture
//!
//! - [`ReorderController`] - owns the session state machine and commits
//!   swaps.
//! - [`resolve_candidate`] - overlap-based slot resolution.
//! - [`AutoScroll`] - edge-triggered scroll loop math.
//! - [`host`] - the traits a host view implements: [`GridGeometry`],
//!   [`ScrollContainer`], [`ReorderDelegate`].
//!
//! # Example
//!
//! ```rust,ignore
//! let mut controller = ReorderController::new(ReorderConfig::default());
//!
//! // From the host's gesture callbacks:
//! if controller.begin_drag(press_location, &mut host) {
//!     // long-press accepted; forward pan translations
//!     controller.drag_to(pan_translation, &mut host);
//!     let snapshot_frame = controller.drag_frame(&host);
//! }
//! ```

mod autoscroll;
mod config;
mod controller;
mod effects;
pub mod host;
mod resolver;
mod session;

pub use autoscroll::{AutoScroll, ScrollEdge};
pub use config::{LiftStyle, ReorderConfig};
pub use controller::ReorderController;
pub use effects::{first_cell_effect, FirstCellEffect};
pub use host::{GridGeometry, ReorderDelegate, ReorderHost, ScrollContainer};
pub use resolver::resolve_candidate;
pub use session::{DragPhase, ReorderSession};

pub use gridlift_geometry::{EdgeInsets, GridPosition, Point, Rect, Size, Vector};
