use gridlift_core::{
    resolve_candidate, DragPhase, GridPosition, Point, Rect, ReorderConfig, Size, Vector,
};
use gridlift_testing::{GridSpec, HostEvent, ReorderRobot, TestGrid};

/// Five 100x100 cells in one row with a 10 pt gap: A B C D E.
fn five_items() -> ReorderRobot {
    let grid = TestGrid::single_section(
        GridSpec {
            columns: 5,
            cell: Size::new(100.0, 100.0),
            spacing: 10.0,
            section_gap: 0.0,
            bounds: Size::new(600.0, 200.0),
        },
        ["A", "B", "C", "D", "E"],
    );
    ReorderRobot::new(ReorderConfig::default(), grid)
}

#[test]
fn lift_a_and_drop_on_c() {
    let mut robot = five_items();

    assert!(robot.press(Point::new(50.0, 50.0)));
    assert_eq!(robot.controller.lifted_position(), Some(GridPosition::new(0, 0)));

    // A's center lands exactly on C's slot; B and D are clear of the frame.
    robot.drag_to(Point::new(270.0, 50.0));

    assert_eq!(robot.grid.labels(0), ["B", "C", "A", "D", "E"]);
    assert_eq!(robot.controller.lifted_position(), Some(GridPosition::new(0, 2)));
    assert_eq!(
        robot.grid.events(),
        [
            HostEvent::WillBegin(GridPosition::new(0, 0)),
            HostEvent::DidBegin(GridPosition::new(0, 0)),
            HostEvent::WillMove {
                from: GridPosition::new(0, 0),
                to: GridPosition::new(0, 2),
            },
            HostEvent::DidMove {
                from: GridPosition::new(0, 0),
                to: GridPosition::new(0, 2),
            },
        ]
    );

    let target = robot.release().expect("settle target");
    assert_eq!(target, Rect::new(220.0, 0.0, 100.0, 100.0));
    assert!(!robot.controller.is_active());
    assert_eq!(
        &robot.grid.events()[4..],
        [
            HostEvent::WillEnd(GridPosition::new(0, 2)),
            HostEvent::DidEnd(GridPosition::new(0, 2)),
        ]
    );
}

#[test]
fn will_move_fires_before_the_data_reorder() {
    let mut robot = five_items();
    robot.press(Point::new(50.0, 50.0));
    robot.drag_to(Point::new(270.0, 50.0));

    // The order captured inside will_move is the pre-mutation order.
    assert_eq!(robot.grid.orders_at_will_move().len(), 1);
    assert_eq!(robot.grid.orders_at_will_move()[0], ["A", "B", "C", "D", "E"]);
}

#[test]
fn repeating_the_same_translation_commits_nothing_new() {
    let mut robot = five_items();
    robot.press(Point::new(50.0, 50.0));
    robot.drag_to(Point::new(270.0, 50.0));
    let events_after_swap = robot.grid.events().len();

    // Same geometry, same translation: the snapshot now sits in its own
    // slot and nothing else overlaps.
    robot.drag_to(Point::new(270.0, 50.0));
    robot.drag_to(Point::new(270.0, 50.0));

    assert_eq!(robot.grid.events().len(), events_after_swap);
    assert_eq!(robot.grid.labels(0), ["B", "C", "A", "D", "E"]);
}

#[test]
fn denied_lift_creates_no_session_and_moves_are_noops() {
    let mut robot = five_items();
    robot.grid.allow_begin = false;

    assert!(!robot.press(Point::new(50.0, 50.0)));
    assert!(!robot.controller.is_active());

    robot.drag_to(Point::new(270.0, 50.0));
    assert_eq!(robot.release(), None);

    assert!(robot.grid.events().is_empty());
    assert_eq!(robot.grid.labels(0), ["A", "B", "C", "D", "E"]);
}

#[test]
fn denied_move_keeps_the_session_and_the_lift_position() {
    let mut robot = five_items();
    robot.grid.allow_move = false;

    robot.press(Point::new(50.0, 50.0));
    robot.drag_to(Point::new(270.0, 50.0));

    assert_eq!(robot.controller.lifted_position(), Some(GridPosition::new(0, 0)));
    assert_eq!(robot.grid.labels(0), ["A", "B", "C", "D", "E"]);
    assert_eq!(robot.controller.phase(), Some(DragPhase::Dragging));
    assert!(robot
        .grid
        .events()
        .iter()
        .all(|event| !matches!(event, HostEvent::WillMove { .. })));
}

#[test]
fn second_lift_while_active_is_ignored() {
    let mut robot = five_items();
    robot.press(Point::new(50.0, 50.0));

    // A concurrent press lands on E while A is lifted.
    let began = robot
        .controller
        .begin_drag(Point::new(490.0, 50.0), &mut robot.grid);
    assert!(!began);

    let begins = robot
        .grid
        .events()
        .iter()
        .filter(|event| matches!(event, HostEvent::WillBegin(_)))
        .count();
    assert_eq!(begins, 1);
}

#[test]
fn leaving_all_drop_zones_retains_the_last_candidate() {
    let mut robot = five_items();
    robot.press(Point::new(50.0, 50.0));
    robot.drag_to(Point::new(270.0, 50.0));
    assert_eq!(robot.controller.lifted_position(), Some(GridPosition::new(0, 2)));

    // Drag far below the row: no frame overlaps anything.
    robot.drag_to(Point::new(270.0, 550.0));

    assert_eq!(robot.controller.lifted_position(), Some(GridPosition::new(0, 2)));
    assert_eq!(robot.grid.labels(0), ["B", "C", "A", "D", "E"]);
}

#[test]
fn drag_frame_follows_the_finger_without_jumps() {
    let mut robot = five_items();
    robot.press(Point::new(50.0, 50.0));
    robot.drag_to(Point::new(270.0, 50.0));

    // A swap was committed, but the snapshot still sits under the finger.
    let frame = robot.controller.drag_frame(&robot.grid).expect("drag frame");
    assert_eq!(frame, Rect::new(220.0, 0.0, 100.0, 100.0));
}

#[test]
fn phases_progress_through_the_machine() {
    let mut robot = five_items();
    assert_eq!(robot.controller.phase(), None);

    robot.press(Point::new(50.0, 50.0));
    assert_eq!(robot.controller.phase(), Some(DragPhase::Lifted));

    robot.drag_to(Point::new(60.0, 50.0));
    assert_eq!(robot.controller.phase(), Some(DragPhase::Dragging));
    assert!(robot.controller.wants_ticks());

    let target = robot.controller.end_drag(&mut robot.grid);
    assert!(target.is_some());
    assert_eq!(robot.controller.phase(), Some(DragPhase::Settling));
    assert!(!robot.controller.wants_ticks());

    // Late pan events during the settle animation are dropped.
    robot.controller.drag_to(Vector::new(300.0, 0.0), &mut robot.grid);
    assert_eq!(robot.controller.phase(), Some(DragPhase::Settling));

    robot.controller.finish_settling(&mut robot.grid);
    assert_eq!(robot.controller.phase(), None);
}

#[test]
fn cancel_mid_drag_destroys_the_session() {
    let mut robot = five_items();
    robot.press(Point::new(50.0, 50.0));
    robot.drag_to(Point::new(270.0, 50.0));
    let moves_before = robot.grid.events().len();

    robot.cancel();

    assert!(!robot.controller.is_active());
    assert!(!robot.controller.wants_ticks());
    assert_eq!(
        &robot.grid.events()[moves_before..],
        [
            HostEvent::WillEnd(GridPosition::new(0, 2)),
            HostEvent::DidEnd(GridPosition::new(0, 2)),
        ]
    );

    // Teardown may cancel again; still a no-op.
    robot.cancel();
    assert_eq!(robot.grid.events().len(), moves_before + 2);
}

#[test]
fn items_can_move_between_sections() {
    let mut grid = TestGrid::new(GridSpec {
        columns: 2,
        cell: Size::new(100.0, 100.0),
        spacing: 10.0,
        section_gap: 20.0,
        bounds: Size::new(210.0, 400.0),
    });
    grid.push_section(["A", "B"]);
    grid.push_section(["C", "D"]);
    let mut robot = ReorderRobot::new(ReorderConfig::default(), grid);

    robot.press(Point::new(50.0, 50.0));
    // Down onto C's slot in the second section.
    robot.drag_to(Point::new(50.0, 170.0));

    assert_eq!(robot.controller.lifted_position(), Some(GridPosition::new(1, 0)));
    assert_eq!(robot.grid.labels(0), ["B"]);
    assert_eq!(robot.grid.labels(1), ["A", "C", "D"]);
}

#[test]
fn resolution_is_stable_against_requeried_geometry() {
    let grid = TestGrid::single_section(
        GridSpec {
            columns: 5,
            cell: Size::new(100.0, 100.0),
            spacing: 10.0,
            section_gap: 0.0,
            bounds: Size::new(600.0, 200.0),
        },
        ["A", "B", "C", "D", "E"],
    );
    let dragged = Rect::new(220.0, 0.0, 100.0, 100.0);

    let first = resolve_candidate(GridPosition::new(0, 0), dragged, &grid);
    let second = resolve_candidate(GridPosition::new(0, 0), dragged, &grid);
    assert_eq!(first, Some(GridPosition::new(0, 2)));
    assert_eq!(first, second);
}

#[test]
#[should_panic(expected = "no active reorder session")]
fn drag_without_a_session_panics() {
    let mut robot = five_items();
    robot.controller.drag_to(Vector::new(10.0, 0.0), &mut robot.grid);
}

#[test]
#[should_panic(expected = "no active reorder session")]
fn tick_without_a_session_panics() {
    let mut robot = five_items();
    robot
        .controller
        .auto_scroll_tick(web_time::Instant::now(), &mut robot.grid);
}

#[test]
#[should_panic(expected = "finish_settling called while")]
fn settle_completion_before_release_panics() {
    let mut robot = five_items();
    robot.press(Point::new(50.0, 50.0));
    robot.controller.finish_settling(&mut robot.grid);
}
