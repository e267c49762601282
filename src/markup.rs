// Markup for the temporary pins dropped by the coordinate helper.

pub const TEMP_PIN_TAG: &str = "button";
pub const TEMP_PIN_CLASS: &str = "pin temporary-pin";

pub const TEMP_PIN_HTML: &str = r##"<svg class="pin-icon" viewBox="0 0 24 24" fill="none" stroke="#a62323" stroke-width="2.5"><path d="M1 12s4-8 11-8 11 8 11 8-4 8-11 8-11-8-11-8z"></path><circle cx="12" cy="12" r="3"></circle></svg><span class="pin-label">Click to remove</span>"##;

/// CSS percentage with one decimal, e.g. `42.3%`.
#[inline]
pub fn percent(value: f64) -> String {
    format!("{:.1}%", value)
}
