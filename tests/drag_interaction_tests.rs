use std::cell::RefCell;
use std::rc::Rc;

use timeslider_rs::SliderError;
use timeslider_rs::api::{SliderConfig, SliderEvent, UnitSlider};
use timeslider_rs::core::{SelectorGeometry, UnitRange, Viewport};
use timeslider_rs::extensions::{SliderContext, SliderPlugin};
use timeslider_rs::interaction::{CursorShape, DragMode, NullPointerHost, PointerHost};
use timeslider_rs::render::NullRenderer;

#[derive(Default)]
struct HostLog {
    cursors: Vec<CursorShape>,
    subscriptions: usize,
}

struct RecordingHost {
    log: Rc<RefCell<HostLog>>,
}

impl PointerHost for RecordingHost {
    fn set_global_cursor(&mut self, cursor: CursorShape) {
        self.log.borrow_mut().cursors.push(cursor);
    }

    fn subscribe_global_pointer_up(&mut self) {
        self.log.borrow_mut().subscriptions += 1;
    }
}

struct RecordingPlugin {
    events: Rc<RefCell<Vec<SliderEvent>>>,
}

impl SliderPlugin for RecordingPlugin {
    fn id(&self) -> &str {
        "recorder"
    }

    fn on_event(&mut self, event: SliderEvent, _context: SliderContext) {
        self.events.borrow_mut().push(event);
    }
}

fn build_slider(range: UnitRange) -> UnitSlider<NullRenderer> {
    let config = SliderConfig::new(Viewport::new(100, 20))
        .with_unit_count(10)
        .with_selection_range(range);
    UnitSlider::new(NullRenderer::default(), Box::new(NullPointerHost), config)
        .expect("slider init")
}

fn selection_changes(events: &[SliderEvent]) -> usize {
    events
        .iter()
        .filter(|event| matches!(event, SliderEvent::SelectionRangeChanged { .. }))
        .count()
}

#[test]
fn move_past_upper_bound_keeps_width() {
    let mut slider = build_slider(UnitRange::new(2, 5));

    slider.pointer_down(35.0).expect("pointer down");
    assert_eq!(slider.drag_mode(), DragMode::Moving);

    slider.pointer_move(105.0).expect("pointer move");
    assert_eq!(
        slider.feedback_geometry(),
        Some(SelectorGeometry::new(70.0, 30.0))
    );
    assert_eq!(slider.selection_range(), Some(UnitRange::new(2, 5)));

    assert!(slider.pointer_up(105.0).expect("pointer up"));
    assert_eq!(slider.selection_range(), Some(UnitRange::new(7, 10)));
    assert_eq!(slider.feedback_geometry(), None);
    assert_eq!(slider.drag_mode(), DragMode::Idle);
}

#[test]
fn move_below_lower_bound_keeps_width() {
    let mut slider = build_slider(UnitRange::new(4, 7));

    slider.pointer_down(55.0).expect("pointer down");
    assert!(slider.pointer_up(-40.0).expect("pointer up"));

    assert_eq!(slider.selection_range(), Some(UnitRange::new(0, 3)));
}

#[test]
fn resize_end_never_shrinks_below_one_unit() {
    let mut slider = build_slider(UnitRange::new(3, 6));

    slider.pointer_down(60.0).expect("pointer down");
    assert_eq!(slider.drag_mode(), DragMode::ResizingEnd);
    slider.pointer_up(25.0).expect("pointer up");

    assert_eq!(slider.selection_range(), Some(UnitRange::new(3, 4)));
}

#[test]
fn resize_start_is_clamped_to_lower_bound() {
    let mut slider = build_slider(UnitRange::new(3, 6));

    slider.pointer_down(30.0).expect("pointer down");
    assert_eq!(slider.drag_mode(), DragMode::ResizingStart);
    slider.pointer_up(-15.0).expect("pointer up");

    assert_eq!(slider.selection_range(), Some(UnitRange::new(0, 6)));
}

#[test]
fn resize_start_past_end_keeps_last_unit() {
    let mut slider = build_slider(UnitRange::new(3, 6));

    slider.pointer_down(25.0).expect("pointer down");
    slider.pointer_up(90.0).expect("pointer up");

    assert_eq!(slider.selection_range(), Some(UnitRange::new(5, 6)));
}

#[test]
fn feedback_moves_do_not_commit() {
    let mut slider = build_slider(UnitRange::new(2, 5));
    let events = Rc::new(RefCell::new(Vec::new()));
    slider
        .register_plugin(Box::new(RecordingPlugin {
            events: events.clone(),
        }))
        .expect("register plugin");

    slider.pointer_down(35.0).expect("pointer down");
    for x in [40.0, 50.0, 60.0, 70.0] {
        slider.pointer_move(x).expect("pointer move");
        assert_eq!(slider.selection_range(), Some(UnitRange::new(2, 5)));
    }
    assert_eq!(selection_changes(&events.borrow()), 0);

    slider.pointer_up(70.0).expect("pointer up");
    assert_eq!(selection_changes(&events.borrow()), 1);
    assert_eq!(slider.selection_range(), Some(UnitRange::new(5, 8)));

    let events = events.borrow();
    assert_eq!(
        events.first(),
        Some(&SliderEvent::DragStarted {
            mode: DragMode::Moving
        })
    );
    assert_eq!(
        events.last(),
        Some(&SliderEvent::DragEnded {
            mode: DragMode::Moving
        })
    );
}

#[test]
fn drag_survives_pointer_out_and_commits_outside_strip() {
    let mut slider = build_slider(UnitRange::new(2, 5));

    slider.pointer_down(35.0).expect("pointer down");
    slider.pointer_out();
    assert_eq!(slider.drag_mode(), DragMode::Moving);

    assert!(slider.pointer_up(500.0).expect("pointer up"));
    assert_eq!(slider.selection_range(), Some(UnitRange::new(7, 10)));
}

#[test]
fn release_in_place_reports_no_change() {
    let mut slider = build_slider(UnitRange::new(2, 5));
    let renders_before = slider.renderer().render_count;

    slider.pointer_down(35.0).expect("pointer down");
    slider.pointer_move(38.0).expect("pointer move");
    assert!(!slider.pointer_up(38.0).expect("pointer up"));

    assert_eq!(slider.selection_range(), Some(UnitRange::new(2, 5)));
    assert_eq!(slider.feedback_geometry(), None);
    assert!(slider.renderer().render_count > renders_before);
}

#[test]
fn pointer_down_outside_selector_stays_idle() {
    let mut slider = build_slider(UnitRange::new(2, 5));

    slider.pointer_down(80.0).expect("pointer down");
    assert_eq!(slider.drag_mode(), DragMode::Idle);
    assert!(!slider.pointer_up(90.0).expect("pointer up"));

    slider
        .set_selection_range(None)
        .expect("clear selection");
    slider.pointer_down(30.0).expect("pointer down");
    assert_eq!(slider.drag_mode(), DragMode::Idle);
}

#[test]
fn narrow_selector_prefers_start_edge() {
    let mut slider = build_slider(UnitRange::new(4, 5));

    // Both grab zones cover x = 45.
    slider.pointer_down(45.0).expect("pointer down");
    assert_eq!(slider.drag_mode(), DragMode::ResizingStart);
}

#[test]
fn host_receives_cursor_requests() {
    let log = Rc::new(RefCell::new(HostLog::default()));
    let config = SliderConfig::new(Viewport::new(100, 20))
        .with_unit_count(10)
        .with_selection_range(UnitRange::new(2, 5));
    let mut slider = UnitSlider::new(
        NullRenderer::default(),
        Box::new(RecordingHost { log: log.clone() }),
        config,
    )
    .expect("slider init");
    assert_eq!(log.borrow().subscriptions, 1);

    slider.pointer_move(35.0).expect("hover body");
    slider.pointer_move(20.0).expect("hover edge");
    slider.pointer_move(90.0).expect("hover outside");
    slider.pointer_down(35.0).expect("pointer down");
    slider.pointer_move(45.0).expect("drag move");
    slider.pointer_out();

    assert_eq!(
        log.borrow().cursors,
        vec![
            CursorShape::Pointer,
            CursorShape::EwResize,
            CursorShape::Default,
            CursorShape::Move,
            CursorShape::Default,
        ]
    );
    assert_eq!(CursorShape::EwResize.as_css(), "ew-resize");
}

#[test]
fn raster_snaps_committed_edge() {
    let mut slider = build_slider(UnitRange::new(2, 5));
    slider.set_raster_units(2.0).expect("raster");

    slider.pointer_down(35.0).expect("pointer down");
    slider.pointer_up(85.0).expect("pointer up");

    assert_eq!(slider.selection_range(), Some(UnitRange::new(6, 9)));
}

#[test]
fn far_off_strip_pointer_clamps_to_bounds() {
    let mut slider = build_slider(UnitRange::new(2, 5));
    slider.pointer_down(35.0).expect("pointer down");
    slider.pointer_move(1e30).expect("pointer move");
    assert!(slider.pointer_up(1e30).expect("pointer up"));
    assert_eq!(slider.selection_range(), Some(UnitRange::new(7, 10)));

    slider.pointer_down(85.0).expect("pointer down");
    slider.pointer_move(-1e30).expect("pointer move");
    assert!(slider.pointer_up(-1e30).expect("pointer up"));
    assert_eq!(slider.selection_range(), Some(UnitRange::new(0, 3)));
}

#[test]
fn non_finite_pointer_is_rejected() {
    let mut slider = build_slider(UnitRange::new(2, 5));

    let err = slider
        .pointer_down(f64::NAN)
        .expect_err("nan pointer must fail");
    assert!(matches!(err, SliderError::InvalidData(_)));
    assert!(slider.set_raster_units(f64::INFINITY).is_err());
}
