//! In-memory grid host.

use gridlift_core::host::{GridGeometry, ReorderDelegate, ScrollContainer};
use gridlift_geometry::{GridPosition, Point, Rect, Size};
use rustc_hash::FxHashMap;

/// Layout parameters for a [`TestGrid`].
#[derive(Clone, Debug)]
pub struct GridSpec {
    /// Items per row.
    pub columns: usize,
    /// Uniform cell size.
    pub cell: Size,
    /// Gap between adjacent cells, both axes.
    pub spacing: f32,
    /// Vertical gap between sections.
    pub section_gap: f32,
    /// Viewport size.
    pub bounds: Size,
}

impl Default for GridSpec {
    fn default() -> Self {
        Self {
            columns: 3,
            cell: Size::new(100.0, 100.0),
            spacing: 10.0,
            section_gap: 20.0,
            bounds: Size::new(320.0, 480.0),
        }
    }
}

/// Delegate calls observed by a [`TestGrid`], in firing order.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum HostEvent {
    WillBegin(GridPosition),
    DidBegin(GridPosition),
    WillMove {
        from: GridPosition,
        to: GridPosition,
    },
    DidMove {
        from: GridPosition,
        to: GridPosition,
    },
    WillEnd(GridPosition),
    DidEnd(GridPosition),
}

/// A scrollable grid of labeled items with a recording delegate.
///
/// Implements all three host traits, so it satisfies
/// [`ReorderHost`](gridlift_core::ReorderHost) via the blanket impl. The
/// delegate's `will_move` performs the data reorder on the label vectors,
/// exactly as a real host's data source would, and every delegate call is
/// appended to the event log for assertions.
pub struct TestGrid {
    spec: GridSpec,
    sections: Vec<Vec<String>>,
    offset: Point,
    frame_overrides: FxHashMap<GridPosition, Rect>,
    events: Vec<HostEvent>,
    orders_at_will_move: Vec<Vec<String>>,
    /// Answer for `should_begin_reordering`.
    pub allow_begin: bool,
    /// Answer for `should_move`.
    pub allow_move: bool,
}

impl TestGrid {
    pub fn new(spec: GridSpec) -> Self {
        Self {
            spec,
            sections: Vec::new(),
            offset: Point::ZERO,
            frame_overrides: FxHashMap::default(),
            events: Vec::new(),
            orders_at_will_move: Vec::new(),
            allow_begin: true,
            allow_move: true,
        }
    }

    /// Appends a section with the given item labels.
    pub fn push_section<I, S>(&mut self, labels: I)
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.sections
            .push(labels.into_iter().map(Into::into).collect());
    }

    /// A single-section grid in one call.
    pub fn single_section<I, S>(spec: GridSpec, labels: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut grid = Self::new(spec);
        grid.push_section(labels);
        grid
    }

    /// Current label ordering of a section.
    pub fn labels(&self, section: usize) -> &[String] {
        &self.sections[section]
    }

    /// All delegate calls observed so far, in order.
    pub fn events(&self) -> &[HostEvent] {
        &self.events
    }

    pub fn clear_events(&mut self) {
        self.events.clear();
    }

    /// Label orderings captured at the instant each `will_move` fired,
    /// before the data reorder. Lets tests assert the notification strictly
    /// preceded the mutation.
    pub fn orders_at_will_move(&self) -> &[Vec<String>] {
        &self.orders_at_will_move
    }

    /// Pins an item's frame, overriding the computed layout.
    pub fn override_frame(&mut self, position: GridPosition, frame: Rect) {
        self.frame_overrides.insert(position, frame);
    }

    /// Jumps the viewport without going through the controller.
    pub fn scroll_to(&mut self, offset: Point) {
        self.offset = offset;
    }

    fn rows_in(&self, section: usize) -> usize {
        let count = self.sections[section].len();
        count.div_ceil(self.spec.columns.max(1))
    }

    fn section_height(&self, section: usize) -> f32 {
        let rows = self.rows_in(section);
        if rows == 0 {
            return 0.0;
        }
        rows as f32 * self.spec.cell.height + (rows - 1) as f32 * self.spec.spacing
    }

    fn section_origin_y(&self, section: usize) -> f32 {
        let mut y = 0.0;
        for s in 0..section {
            y += self.section_height(s) + self.spec.section_gap;
        }
        y
    }

    fn computed_frame(&self, position: GridPosition) -> Option<Rect> {
        let labels = self.sections.get(position.section)?;
        if position.item >= labels.len() {
            return None;
        }
        let columns = self.spec.columns.max(1);
        let col = (position.item % columns) as f32;
        let row = (position.item / columns) as f32;
        Some(Rect::new(
            col * (self.spec.cell.width + self.spec.spacing),
            self.section_origin_y(position.section) + row * (self.spec.cell.height + self.spec.spacing),
            self.spec.cell.width,
            self.spec.cell.height,
        ))
    }

    fn move_label(&mut self, from: GridPosition, to: GridPosition) {
        log::trace!("test grid moving {from} -> {to}");
        let label = self.sections[from.section].remove(from.item);
        self.sections[to.section].insert(to.item, label);
    }
}

impl GridGeometry for TestGrid {
    fn section_count(&self) -> usize {
        self.sections.len()
    }

    fn item_count(&self, section: usize) -> usize {
        self.sections.get(section).map_or(0, Vec::len)
    }

    fn frame_of(&self, position: GridPosition) -> Option<Rect> {
        if let Some(frame) = self.frame_overrides.get(&position) {
            return Some(*frame);
        }
        self.computed_frame(position)
    }
}

impl ScrollContainer for TestGrid {
    fn content_offset(&self) -> Point {
        self.offset
    }

    fn content_size(&self) -> Size {
        let columns = self.spec.columns.max(1) as f32;
        let width = columns * self.spec.cell.width + (columns - 1.0) * self.spec.spacing;
        let mut height = 0.0;
        for section in 0..self.sections.len() {
            height += self.section_height(section);
        }
        if self.sections.len() > 1 {
            height += (self.sections.len() - 1) as f32 * self.spec.section_gap;
        }
        Size::new(width, height)
    }

    fn bounds_size(&self) -> Size {
        self.spec.bounds
    }

    fn set_content_offset(&mut self, offset: Point) {
        self.offset = offset;
    }
}

impl ReorderDelegate for TestGrid {
    fn should_begin_reordering(&mut self, _position: GridPosition) -> bool {
        self.allow_begin
    }

    fn will_begin_reordering(&mut self, position: GridPosition) {
        self.events.push(HostEvent::WillBegin(position));
    }

    fn did_begin_reordering(&mut self, position: GridPosition) {
        self.events.push(HostEvent::DidBegin(position));
    }

    fn should_move(&mut self, _from: GridPosition, _to: GridPosition) -> bool {
        self.allow_move
    }

    fn will_move(&mut self, from: GridPosition, to: GridPosition) {
        self.events.push(HostEvent::WillMove { from, to });
        self.orders_at_will_move
            .push(self.sections[from.section].clone());
        self.move_label(from, to);
    }

    fn did_move(&mut self, from: GridPosition, to: GridPosition) {
        self.events.push(HostEvent::DidMove { from, to });
    }

    fn will_end_reordering(&mut self, position: GridPosition) {
        self.events.push(HostEvent::WillEnd(position));
    }

    fn did_end_reordering(&mut self, position: GridPosition) {
        self.events.push(HostEvent::DidEnd(position));
    }
}
