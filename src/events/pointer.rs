use crate::audio::HtmlAudioCue;
use crate::dom;
use crate::overlay::{self, ModalView};
use map_core::hover::{section_background, Hover};
use map_core::{ModalClick, ModalController, ModalId, PinId};
use std::cell::RefCell;
use std::rc::Rc;
use web_sys as web;

#[derive(Clone)]
pub struct ModalWiring {
    pub view: Rc<ModalView>,
    pub modals: Rc<RefCell<ModalController<HtmlAudioCue>>>,
}

impl ModalWiring {
    pub fn render(&self) {
        overlay::render(&self.view, self.modals.borrow().board());
    }
}

pub fn wire_modal_handlers(w: &ModalWiring, close_selector: &str) {
    wire_pins(w);
    wire_close_controls(w, close_selector);
    wire_backgrounds(w);
}

fn wire_pins(w: &ModalWiring) {
    for (i, pin_el) in w.view.pins.iter().enumerate() {
        let w = w.clone();
        dom::add_listener(pin_el, "click", move |_: web::MouseEvent| {
            let opened = w.modals.borrow_mut().open(PinId(i));
            if opened {
                w.render();
            }
        });
    }
}

fn wire_close_controls(w: &ModalWiring, close_selector: &str) {
    for (i, modal_el) in w.view.modals.iter().enumerate() {
        let Some(close_el) = dom::query_within(modal_el, close_selector) else {
            log::warn!("[modal] #{} has no {}", modal_el.id(), close_selector);
            continue;
        };
        let w = w.clone();
        dom::add_listener(&close_el, "click", move |_: web::MouseEvent| {
            w.modals.borrow_mut().close(ModalId(i));
            w.render();
        });
    }
}

fn wire_backgrounds(w: &ModalWiring) {
    for (i, modal_el) in w.view.modals.iter().enumerate() {
        let w = w.clone();
        let el = modal_el.clone();
        dom::add_listener(modal_el, "click", move |ev: web::MouseEvent| {
            let at = if dom::is_event_target(&ev, &el) {
                ModalClick::Background
            } else {
                ModalClick::Content
            };
            let closed = w.modals.borrow_mut().click_modal(ModalId(i), at);
            if closed {
                w.render();
            }
        });
    }
}

pub fn wire_section_hover(document: &web::Document, selector: &str, tint: &str) {
    for section in dom::query_all(document, selector) {
        for (event, hover) in [("mouseenter", Hover::Enter), ("mouseleave", Hover::Leave)] {
            let el = section.clone();
            let tint = tint.to_string();
            dom::add_listener(&section, event, move |_: web::Event| {
                dom::set_style(&el, "background", section_background(hover, &tint));
            });
        }
    }
}
