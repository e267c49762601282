// Default markup contract and tuning values for the map page.

// Markup selectors and ids
pub const DIAGRAM_ID: &str = "diagram"; // the clickable map image
pub const DIAGRAM_WRAPPER_SELECTOR: &str = ".diagram-wrapper"; // receives temporary pins
pub const PIN_SELECTOR: &str = ".pin:not(.temporary-pin)";
pub const MODAL_SELECTOR: &str = ".modal";
pub const MODAL_CLOSE_SELECTOR: &str = ".modal-close";
pub const MODAL_SECTION_SELECTOR: &str = ".modal-section";
pub const MODAL_REF_ATTR: &str = "data-modal"; // pin -> modal id
pub const ACTIVE_CLASS: &str = "active";

// Keyboard
pub const CANCEL_KEYS: &[&str] = &["Escape", "Esc"];

// Temporary pins
pub const TEMP_PIN_TTL_MS: u32 = 10_000;

// Audio cues: a silent WAV placeholder, swap per kind for real assets
pub const CUE_VOLUME: f64 = 0.1;
pub const SILENT_WAV_URI: &str =
    "data:audio/wav;base64,UklGRigAAABXQVZFZm10IBIAAAABAAEARKwAAIhYAQACABAAZGF0YQQAAAAAAA==";

// Parchment tint applied to hovered modal sections
pub const SECTION_HOVER_TINT: &str = "rgba(193, 154, 107, 0.05)";

// Query-string switch for the coordinate helper
pub const COORDS_QUERY_KEY: &str = "coords";
