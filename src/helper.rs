//! Browser side of the coordinate helper: the diagram click listener and
//! the temporary pin elements with their expiry timers.

use crate::audio::HtmlAudioCue;
use crate::clipboard::NavigatorClipboard;
use crate::{dom, markup};
use map_core::helper::ENABLED_MESSAGE;
use map_core::{ClickReport, CoordinateHelper, MapConfig, MapError, SoundNotifier};
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

type SharedHelper = Rc<RefCell<CoordinateHelper<NavigatorClipboard, HtmlAudioCue, web::Element>>>;

pub fn wire_coordinate_helper(
    document: &web::Document,
    config: &MapConfig,
    audio: HtmlAudioCue,
) -> anyhow::Result<()> {
    let diagram = document
        .get_element_by_id(&config.diagram_id)
        .ok_or_else(|| MapError::MissingElement(config.diagram_id.clone()))?;
    let helper: SharedHelper = Rc::new(RefCell::new(CoordinateHelper::new(
        NavigatorClipboard,
        SoundNotifier::new(audio),
        config.temp_pin_ttl_ms,
    )));

    let doc = document.clone();
    let wrapper_selector = config.wrapper_selector.clone();
    let diagram_click = diagram.clone();
    dom::add_listener(&diagram, "click", move |ev: web::MouseEvent| {
        // measured per click, layout may have changed
        let rect = dom::client_rect(&diagram_click);
        let (x, y) = (ev.client_x() as f64, ev.client_y() as f64);
        let report = helper.borrow_mut().on_diagram_click(rect, x, y);
        let Some(report) = report else {
            return;
        };
        match marker_container(&doc, &wrapper_selector, &diagram_click) {
            Some(container) => place_marker(&doc, &container, &helper, &report),
            None => log::warn!("[coords] nowhere to place a temporary pin"),
        }
    });

    log::info!("{}", ENABLED_MESSAGE);
    Ok(())
}

fn marker_container(
    document: &web::Document,
    selector: &str,
    diagram: &web::Element,
) -> Option<web::Element> {
    document
        .query_selector(selector)
        .ok()
        .flatten()
        .or_else(|| diagram.parent_element())
}

fn place_marker(
    document: &web::Document,
    container: &web::Element,
    helper: &SharedHelper,
    report: &ClickReport,
) {
    let el = match document.create_element(markup::TEMP_PIN_TAG) {
        Ok(el) => el,
        Err(e) => {
            log::warn!("[coords] cannot create temporary pin: {:?}", e);
            return;
        }
    };
    el.set_class_name(markup::TEMP_PIN_CLASS);
    dom::set_style(&el, "left", &markup::percent(report.pct_x));
    dom::set_style(&el, "top", &markup::percent(report.pct_y));
    el.set_inner_html(markup::TEMP_PIN_HTML);
    if let Err(e) = container.append_child(&el) {
        log::warn!("[coords] cannot attach temporary pin: {:?}", e);
        return;
    }
    let id = helper.borrow_mut().place_pin(report, el.clone());

    let helper_click = helper.clone();
    dom::add_listener(&el, "click", move |ev: web::MouseEvent| {
        // must not count as another diagram click
        ev.stop_propagation();
        let removed = helper_click.borrow_mut().remove_pin(id);
        if let Some(pin) = removed {
            pin.element.remove();
            if let (Some(handle), Some(window)) = (pin.timer, web::window()) {
                window.clear_timeout_with_handle(handle);
            }
        }
    });

    let helper_timer = helper.clone();
    let expire = Closure::once_into_js(move || {
        let expired = helper_timer.borrow_mut().expire_pin(id);
        if let Some(pin) = expired {
            pin.element.remove();
        }
    });
    let ttl = helper.borrow().ttl_ms();
    let Some(window) = web::window() else {
        return;
    };
    match window.set_timeout_with_callback_and_timeout_and_arguments_0(
        expire.unchecked_ref(),
        ttl.min(i32::MAX as u32) as i32,
    ) {
        Ok(handle) => {
            helper.borrow_mut().attach_timer(id, handle);
        }
        Err(e) => log::warn!("[coords] temporary pin will not expire: {:?}", e),
    }
}
