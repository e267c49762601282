use super::pointer::ModalWiring;
use crate::dom;
use web_sys as web;

pub fn handle_global_keydown(ev: &web::KeyboardEvent, w: &ModalWiring) {
    let handled = w.modals.borrow_mut().handle_key(&ev.key());
    if handled {
        w.render();
    }
}

pub fn wire_global_keydown(document: &web::Document, w: ModalWiring) {
    dom::add_listener(document, "keydown", move |ev: web::KeyboardEvent| {
        handle_global_keydown(&ev, &w);
    });
}
