use crate::dom;
use map_core::ModalBoard;
use web_sys as web;

/// Pin and modal elements, index-aligned with the [`ModalBoard`] they render.
pub struct ModalView {
    pub pins: Vec<web::Element>,
    pub modals: Vec<web::Element>,
    pub active_class: String,
}

/// Projects the board's active flags onto the elements' CSS class.
pub fn render(view: &ModalView, board: &ModalBoard) {
    for (el, pin) in view.pins.iter().zip(board.pins()) {
        dom::set_class(el, &view.active_class, pin.active);
    }
    for (el, modal) in view.modals.iter().zip(board.modals()) {
        dom::set_class(el, &view.active_class, modal.active);
    }
}
