//! Click-to-percentage math for the coordinate helper.

/// Rendered box of the diagram in client (CSS pixel) coordinates.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Rect {
    pub left: f64,
    pub top: f64,
    pub width: f64,
    pub height: f64,
}

impl Rect {
    pub fn new(left: f64, top: f64, width: f64, height: f64) -> Self {
        Self {
            left,
            top,
            width,
            height,
        }
    }

    #[inline]
    pub fn is_degenerate(&self) -> bool {
        !(self.width.is_finite() && self.height.is_finite())
            || self.width <= 0.0
            || self.height <= 0.0
    }
}

/// One diagram click, measured against the box it landed in.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ClickReport {
    /// Offset from the box origin in CSS pixels.
    pub pixel_x: f64,
    pub pixel_y: f64,
    /// Offset as a percentage of the box size, already rounded to 0.1.
    pub pct_x: f64,
    pub pct_y: f64,
}

/// Rounds to one decimal place, ties away from zero.
#[inline]
pub fn round_tenth(v: f64) -> f64 {
    (v * 10.0).round() / 10.0
}

/// Measures a client-space click against `rect`.
///
/// Returns `None` for a degenerate box, where a percentage is meaningless.
pub fn locate(rect: Rect, client_x: f64, client_y: f64) -> Option<ClickReport> {
    if rect.is_degenerate() {
        return None;
    }
    let pixel_x = client_x - rect.left;
    let pixel_y = client_y - rect.top;
    Some(ClickReport {
        pixel_x,
        pixel_y,
        pct_x: round_tenth(pixel_x / rect.width * 100.0),
        pct_y: round_tenth(pixel_y / rect.height * 100.0),
    })
}

impl ClickReport {
    /// Ready-to-paste positioning attribute, e.g.
    /// `style="left: 42.3%; top: 17.8%;"`.
    pub fn style_snippet(&self) -> String {
        format!(
            "style=\"left: {:.1}%; top: {:.1}%;\"",
            self.pct_x, self.pct_y
        )
    }

    /// Console report for this click, one entry per line.
    pub fn log_lines(&self) -> [String; 4] {
        [
            "📍 Map Coordinates:".to_string(),
            format!("   Pixels: {:.0}px, {:.0}px", self.pixel_x, self.pixel_y),
            format!("   Percentage: {:.1}%, {:.1}%", self.pct_x, self.pct_y),
            format!("   CSS: {}", self.style_snippet()),
        ]
    }
}
