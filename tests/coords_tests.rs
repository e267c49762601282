// Host-side tests for the coordinate helper's click handling.

mod common;

use common::{RecordingClipboard, RecordingCue};
use map_core::clipboard::{outcome_message, COPY_FAILED_MESSAGE, COPY_OK_MESSAGE};
use map_core::coords::{locate, Rect};
use map_core::{ClipboardError, CoordinateHelper, SoundKind, SoundNotifier};
use std::rc::Rc;

type TestHelper = CoordinateHelper<Rc<RecordingClipboard>, Rc<RecordingCue>, &'static str>;

fn helper(clipboard: RecordingClipboard) -> (TestHelper, Rc<RecordingClipboard>, Rc<RecordingCue>) {
    let clipboard = Rc::new(clipboard);
    let cue = Rc::new(RecordingCue::default());
    let helper = CoordinateHelper::new(clipboard.clone(), SoundNotifier::new(cue.clone()), 10_000);
    (helper, clipboard, cue)
}

#[test]
fn center_quarter_click_on_200_by_100_box() {
    let report = locate(Rect::new(0.0, 0.0, 200.0, 100.0), 100.0, 25.0).unwrap();
    assert_eq!(report.pct_x, 50.0);
    assert_eq!(report.pct_y, 25.0);
    assert_eq!(report.style_snippet(), r#"style="left: 50.0%; top: 25.0%;""#);
}

#[test]
fn offsets_are_relative_to_box_origin() {
    let rect = Rect::new(40.0, 300.0, 200.0, 100.0);
    let report = locate(rect, 140.0, 325.0).unwrap();
    assert_eq!(report.pixel_x, 100.0);
    assert_eq!(report.pixel_y, 25.0);
    assert_eq!(report.pct_x, 50.0);
    assert_eq!(report.pct_y, 25.0);
}

#[test]
fn percentages_round_to_one_decimal() {
    let report = locate(Rect::new(0.0, 0.0, 300.0, 700.0), 127.0, 124.6).unwrap();
    // 42.333..% and 17.8%
    assert_eq!(report.style_snippet(), r#"style="left: 42.3%; top: 17.8%;""#);
}

#[test]
fn report_lines_match_console_format() {
    let report = locate(Rect::new(10.0, 10.0, 200.0, 100.0), 110.4, 35.0).unwrap();
    let lines = report.log_lines();
    assert_eq!(lines[0], "📍 Map Coordinates:");
    assert_eq!(lines[1], "   Pixels: 100px, 25px");
    assert_eq!(lines[2], "   Percentage: 50.2%, 25.0%");
    assert_eq!(lines[3], r#"   CSS: style="left: 50.2%; top: 25.0%;""#);
}

#[test]
fn click_copies_snippet_and_plays_cue() {
    let (mut h, clipboard, cue) = helper(RecordingClipboard::default());
    let report = h
        .on_diagram_click(Rect::new(0.0, 0.0, 200.0, 100.0), 100.0, 25.0)
        .unwrap();
    assert_eq!(report.pct_x, 50.0);
    assert_eq!(
        clipboard.writes.borrow().as_slice(),
        &[r#"style="left: 50.0%; top: 25.0%;""#.to_string()]
    );
    assert_eq!(cue.kinds(), vec![SoundKind::Click]);
}

#[test]
fn denied_clipboard_does_not_stop_the_click() {
    let (mut h, clipboard, cue) = helper(RecordingClipboard {
        deny: true,
        ..RecordingClipboard::default()
    });
    let report = h.on_diagram_click(Rect::new(0.0, 0.0, 200.0, 100.0), 50.0, 50.0);
    assert!(report.is_some());
    assert!(clipboard.outcomes.borrow()[0].is_err());
    assert_eq!(cue.kinds().len(), 1);

    let id = h.place_pin(&report.unwrap(), "marker");
    assert!(h.pins().contains(id));
}

#[test]
fn each_click_measures_the_box_it_is_given() {
    let (mut h, clipboard, _) = helper(RecordingClipboard::default());
    h.on_diagram_click(Rect::new(0.0, 0.0, 200.0, 100.0), 100.0, 50.0);
    // same client point after the image was resized
    h.on_diagram_click(Rect::new(0.0, 0.0, 400.0, 200.0), 100.0, 50.0);
    let writes = clipboard.writes.borrow();
    assert_eq!(writes[0], r#"style="left: 50.0%; top: 50.0%;""#);
    assert_eq!(writes[1], r#"style="left: 25.0%; top: 25.0%;""#);
}

#[test]
fn degenerate_box_skips_every_step() {
    let (mut h, clipboard, cue) = helper(RecordingClipboard::default());
    assert!(h
        .on_diagram_click(Rect::new(0.0, 0.0, 0.0, 0.0), 10.0, 10.0)
        .is_none());
    assert!(clipboard.writes.borrow().is_empty());
    assert!(cue.kinds().is_empty());
}

#[test]
fn clipboard_messages_are_distinct() {
    assert_eq!(outcome_message(&Ok(())), COPY_OK_MESSAGE);
    assert_eq!(
        outcome_message(&Err(ClipboardError::Unavailable)),
        COPY_FAILED_MESSAGE
    );
    assert_ne!(COPY_OK_MESSAGE, COPY_FAILED_MESSAGE);
}
