// Host-side tests for the exclusive-open modal controller.

mod common;

use common::RecordingCue;
use map_core::{ModalBoard, ModalClick, ModalController, ModalId, PinId, SoundKind, SoundNotifier};
use std::rc::Rc;

const KEYS: [&str; 4] = ["tower", "harbor", "forest", "ruins"];

fn controller() -> (ModalController<Rc<RecordingCue>>, Rc<RecordingCue>) {
    let mut board = ModalBoard::new();
    for key in KEYS {
        board.add_modal(key);
    }
    for key in KEYS {
        board.add_pin(Some(key.to_string()));
    }
    board.add_pin(Some("nowhere".to_string()));
    board.add_pin(None);
    let cue = Rc::new(RecordingCue::default());
    let ctl = ModalController::new(
        board,
        SoundNotifier::new(cue.clone()),
        vec!["Escape".to_string(), "Esc".to_string()],
    );
    (ctl, cue)
}

#[test]
fn every_activation_leaves_exactly_one_matching_pair() {
    let (mut ctl, _) = controller();
    for pin in [0, 2, 2, 1, 3, 0, 1] {
        assert!(ctl.open(PinId(pin)));
        let modals: Vec<ModalId> = ctl.board().active_modals().collect();
        let pins: Vec<PinId> = ctl.board().active_pins().collect();
        assert_eq!(modals, vec![ModalId(pin)], "after opening pin {pin}");
        assert_eq!(pins, vec![PinId(pin)]);
        assert!(ctl.board().is_consistent());
    }
}

#[test]
fn open_plays_click_and_close_plays_close() {
    let (mut ctl, cue) = controller();
    ctl.open(PinId(1));
    ctl.close(ModalId(1));
    assert_eq!(cue.kinds(), vec![SoundKind::Click, SoundKind::Close]);
}

#[test]
fn close_control_clears_modal_and_pin() {
    let (mut ctl, _) = controller();
    ctl.open(PinId(2));
    ctl.close(ModalId(2));
    assert!(!ctl.board().is_modal_active(ModalId(2)));
    assert_eq!(ctl.board().active_pins().count(), 0);
}

#[test]
fn background_click_closes_only_that_modal() {
    let (mut ctl, _) = controller();
    ctl.open(PinId(3));
    assert!(ctl.click_modal(ModalId(3), ModalClick::Background));
    assert_eq!(ctl.board().active_modals().count(), 0);
    assert!(!ctl.board().is_pin_active(PinId(3)));
}

#[test]
fn content_click_changes_nothing() {
    let (mut ctl, cue) = controller();
    ctl.open(PinId(0));
    assert!(!ctl.click_modal(ModalId(0), ModalClick::Content));
    assert!(ctl.board().is_modal_active(ModalId(0)));
    assert!(ctl.board().is_pin_active(PinId(0)));
    assert_eq!(cue.kinds(), vec![SoundKind::Click]);
}

#[test]
fn cancel_key_closes_everything() {
    let (mut ctl, cue) = controller();
    ctl.open(PinId(1));
    assert!(ctl.handle_key("Escape"));
    assert_eq!(ctl.board().active_modals().count(), 0);
    assert_eq!(ctl.board().active_pins().count(), 0);
    assert_eq!(cue.kinds().last(), Some(&SoundKind::Close));
}

#[test]
fn legacy_esc_name_is_a_cancel_key() {
    let (mut ctl, _) = controller();
    ctl.open(PinId(0));
    assert!(ctl.handle_key("Esc"));
    assert_eq!(ctl.board().active_modals().count(), 0);
}

#[test]
fn other_keys_are_ignored() {
    let (mut ctl, cue) = controller();
    ctl.open(PinId(0));
    for key in ["Enter", "x", " ", "escape"] {
        assert!(!ctl.handle_key(key));
    }
    assert!(ctl.board().is_modal_active(ModalId(0)));
    assert_eq!(cue.kinds().len(), 1);
}

#[test]
fn cancel_key_with_nothing_open_still_plays_close() {
    let (mut ctl, cue) = controller();
    assert!(ctl.handle_key("Escape"));
    assert_eq!(cue.kinds(), vec![SoundKind::Close]);
}

#[test]
fn pin_to_missing_modal_is_a_no_op() {
    let (mut ctl, cue) = controller();
    ctl.open(PinId(2));
    assert!(!ctl.open(PinId(4)));
    assert!(!ctl.open(PinId(5)));
    assert!(!ctl.open(PinId(99)));
    // the previously open modal stays open
    assert!(ctl.board().is_modal_active(ModalId(2)));
    assert!(ctl.board().is_pin_active(PinId(2)));
    assert_eq!(cue.kinds(), vec![SoundKind::Click]);
}

#[test]
fn audio_failure_does_not_block_state_changes() {
    let mut board = ModalBoard::new();
    board.add_modal("tower");
    board.add_pin(Some("tower".to_string()));
    let cue = Rc::new(RecordingCue::failing());
    let mut ctl = ModalController::new(board, SoundNotifier::new(cue.clone()), vec!["Escape".into()]);

    assert!(ctl.open(PinId(0)));
    assert!(ctl.board().is_modal_active(ModalId(0)));
    ctl.close(ModalId(0));
    assert!(!ctl.board().is_modal_active(ModalId(0)));
    assert_eq!(cue.kinds().len(), 2);
}

#[test]
fn modal_key_lookup_matches_declaration() {
    let (ctl, _) = controller();
    assert_eq!(ctl.board().modal_by_key("forest"), Some(ModalId(2)));
    assert_eq!(ctl.board().modal_by_key("nowhere"), None);
}
