//! Page configuration.
//!
//! Every field defaults to the values in [`crate::constants`]. The only
//! runtime override is the `coords` query-string switch.

use crate::constants::*;

#[derive(Clone, Debug, PartialEq)]
pub struct MapConfig {
    pub diagram_id: String,
    pub wrapper_selector: String,
    pub pin_selector: String,
    pub modal_selector: String,
    pub close_selector: String,
    pub section_selector: String,
    pub modal_ref_attr: String,
    pub active_class: String,
    pub cancel_keys: Vec<String>,
    pub temp_pin_ttl_ms: u32,
    pub cue_volume: f64,
    pub hover_tint: String,
    pub coordinate_helper: bool,
}

impl Default for MapConfig {
    fn default() -> Self {
        Self {
            diagram_id: DIAGRAM_ID.to_string(),
            wrapper_selector: DIAGRAM_WRAPPER_SELECTOR.to_string(),
            pin_selector: PIN_SELECTOR.to_string(),
            modal_selector: MODAL_SELECTOR.to_string(),
            close_selector: MODAL_CLOSE_SELECTOR.to_string(),
            section_selector: MODAL_SECTION_SELECTOR.to_string(),
            modal_ref_attr: MODAL_REF_ATTR.to_string(),
            active_class: ACTIVE_CLASS.to_string(),
            cancel_keys: CANCEL_KEYS.iter().map(|k| k.to_string()).collect(),
            temp_pin_ttl_ms: TEMP_PIN_TTL_MS,
            cue_volume: CUE_VOLUME,
            hover_tint: SECTION_HOVER_TINT.to_string(),
            coordinate_helper: true,
        }
    }
}

/// Parses an on/off switch value. Unknown values yield `None`.
pub fn parse_switch(value: &str) -> Option<bool> {
    match value.trim().to_ascii_lowercase().as_str() {
        "1" | "on" | "true" | "yes" => Some(true),
        "0" | "off" | "false" | "no" => Some(false),
        _ => None,
    }
}

impl MapConfig {
    /// Applies overrides from a location query string such as `?coords=off`.
    /// The leading `?` is optional; the last recognised `coords` value wins.
    pub fn with_query(mut self, query: &str) -> Self {
        let query = query.strip_prefix('?').unwrap_or(query);
        for pair in query.split('&').filter(|p| !p.is_empty()) {
            let (key, value) = pair.split_once('=').unwrap_or((pair, ""));
            if key != COORDS_QUERY_KEY {
                continue;
            }
            match parse_switch(value) {
                Some(on) => self.coordinate_helper = on,
                None => log::warn!("[config] ignoring {}={:?}", key, value),
            }
        }
        self
    }
}
