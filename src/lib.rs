#![cfg(target_arch = "wasm32")]
use map_core::{initialize, HelperStatus, MapConfig, PageMarkup};
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::prelude::*;
use web_sys as web;

mod audio;
mod clipboard;
mod dom;
mod events;
mod helper;
mod markup;
mod overlay;

#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    console_log::init_with_level(log::Level::Info).ok();
    log::info!("map-web starting");

    let document = dom::window_document().ok_or_else(|| JsValue::from_str("no document"))?;
    if document.ready_state() == "loading" {
        let doc = document.clone();
        dom::add_listener(&document, "DOMContentLoaded", move |_: web::Event| {
            run_init(&doc);
        });
    } else {
        run_init(&document);
    }
    Ok(())
}

fn run_init(document: &web::Document) {
    if let Err(e) = init(document) {
        log::error!("init error: {:?}", e);
    }
}

fn load_config() -> MapConfig {
    let query = web::window()
        .and_then(|w| w.location().search().ok())
        .unwrap_or_default();
    MapConfig::default().with_query(&query)
}

fn init(document: &web::Document) -> anyhow::Result<()> {
    let config = load_config();
    let audio = audio::HtmlAudioCue::new(config.cue_volume);

    let pins = dom::query_all(document, &config.pin_selector);
    let modals = dom::query_all(document, &config.modal_selector);
    let markup = PageMarkup {
        pin_targets: pins
            .iter()
            .map(|p| p.get_attribute(&config.modal_ref_attr))
            .collect(),
        modal_keys: modals.iter().map(|m| m.id()).collect(),
        has_diagram: document.get_element_by_id(&config.diagram_id).is_some(),
    };
    let page = initialize(&markup, &config, audio);

    let wiring = events::ModalWiring {
        view: Rc::new(overlay::ModalView {
            pins,
            modals,
            active_class: config.active_class.clone(),
        }),
        modals: Rc::new(RefCell::new(page.modals)),
    };
    wiring.render();
    events::wire_modal_handlers(&wiring, &config.close_selector);
    events::wire_global_keydown(document, wiring);
    events::wire_section_hover(document, &config.section_selector, &config.hover_tint);

    if page.helper.is_enabled() {
        helper::wire_coordinate_helper(document, &config, audio)?;
    } else if let HelperStatus::Disabled(e) = &page.helper {
        log::debug!("[init] coordinate helper: {}", e);
    }
    Ok(())
}
