//! Developer aid: turns diagram clicks into pin positions.
//!
//! A click is reported to the console, copied to the clipboard as a
//! `style="..."` snippet and marked with a temporary pin. The front end owns
//! the actual marker element (`E`) and its timer; this type only decides
//! what happens and when.

use crate::clipboard::{self, ClipboardWriter};
use crate::coords::{self, ClickReport, Rect};
use crate::sound::{AudioCue, SoundKind, SoundNotifier};
use crate::temp_pin::{Removal, TempPinId, TempPinTracker, TemporaryPin, TimerHandle};

pub const ENABLED_MESSAGE: &str = "✅ Coordinate helper enabled. Click the map to get coordinates.";
pub const DISABLED_MESSAGE: &str = "Diagram image not found. Coordinate helper disabled.";

pub struct CoordinateHelper<C, A, E> {
    clipboard: C,
    sound: SoundNotifier<A>,
    pins: TempPinTracker<E>,
    ttl_ms: u32,
}

impl<C: ClipboardWriter, A: AudioCue, E> CoordinateHelper<C, A, E> {
    pub fn new(clipboard: C, sound: SoundNotifier<A>, ttl_ms: u32) -> Self {
        Self {
            clipboard,
            sound,
            pins: TempPinTracker::new(),
            ttl_ms,
        }
    }

    pub fn ttl_ms(&self) -> u32 {
        self.ttl_ms
    }

    pub fn pins(&self) -> &TempPinTracker<E> {
        &self.pins
    }

    /// Handles a click at client position (`client_x`, `client_y`) over a
    /// diagram currently rendered at `rect`.
    ///
    /// Logs the report, starts the clipboard write and plays the click cue.
    /// The caller places the marker with [`Self::place_pin`].
    pub fn on_diagram_click(
        &mut self,
        rect: Rect,
        client_x: f64,
        client_y: f64,
    ) -> Option<ClickReport> {
        let Some(report) = coords::locate(rect, client_x, client_y) else {
            log::warn!("[coords] diagram has no rendered size {:?}", rect);
            return None;
        };
        for line in report.log_lines() {
            log::info!("{}", line);
        }
        self.clipboard
            .write_text(&report.style_snippet(), Box::new(clipboard::log_outcome));
        self.sound.notify(SoundKind::Click);
        Some(report)
    }

    pub fn place_pin(&mut self, report: &ClickReport, element: E) -> TempPinId {
        self.pins.spawn(report.pct_x, report.pct_y, element)
    }

    pub fn attach_timer(&mut self, id: TempPinId, handle: TimerHandle) -> bool {
        self.pins.attach_timer(id, handle)
    }

    /// Marker clicked. The caller removes the element and cancels the timer.
    pub fn remove_pin(&mut self, id: TempPinId) -> Option<TemporaryPin<E>> {
        self.pins.take(id, Removal::Manual)
    }

    /// Expiry timer fired. `None` when the marker was already clicked away.
    pub fn expire_pin(&mut self, id: TempPinId) -> Option<TemporaryPin<E>> {
        self.pins.take(id, Removal::Expired)
    }
}
