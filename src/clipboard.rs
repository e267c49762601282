use js_sys::{Function, Promise, Reflect};
use map_core::{ClipboardDone, ClipboardError, ClipboardWriter};
use wasm_bindgen::{JsCast, JsValue};
use wasm_bindgen_futures::{spawn_local, JsFuture};
use web_sys as web;

/// `navigator.clipboard.writeText`, when the page is allowed to see it.
#[derive(Clone, Copy, Debug, Default)]
pub struct NavigatorClipboard;

fn start_write(text: &str) -> Result<Promise, ClipboardError> {
    let navigator = web::window()
        .ok_or(ClipboardError::Unavailable)?
        .navigator();
    // absent outside secure contexts
    let clipboard = Reflect::get(&navigator, &JsValue::from_str("clipboard"))
        .map_err(|_| ClipboardError::Unavailable)?;
    if clipboard.is_undefined() || clipboard.is_null() {
        return Err(ClipboardError::Unavailable);
    }
    let write_text = Reflect::get(&clipboard, &JsValue::from_str("writeText"))
        .ok()
        .and_then(|f| f.dyn_into::<Function>().ok())
        .ok_or(ClipboardError::Unavailable)?;
    write_text
        .call1(&clipboard, &JsValue::from_str(text))
        .map_err(|e| ClipboardError::Denied(format!("{:?}", e)))?
        .dyn_into::<Promise>()
        .map_err(|_| ClipboardError::Unavailable)
}

impl ClipboardWriter for NavigatorClipboard {
    fn write_text(&self, text: &str, done: ClipboardDone) {
        let promise = match start_write(text) {
            Ok(p) => p,
            Err(e) => {
                done(Err(e));
                return;
            }
        };
        spawn_local(async move {
            let result = JsFuture::from(promise)
                .await
                .map(|_| ())
                .map_err(|e| ClipboardError::Denied(format!("{:?}", e)));
            done(result);
        });
    }
}
