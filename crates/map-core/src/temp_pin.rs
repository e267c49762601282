//! Bookkeeping for the short-lived markers dropped by the coordinate helper.
//!
//! Each marker has two possible ends: a click or its expiry timer. The
//! tracker hands the marker out exactly once, to whichever comes first, so
//! the loser finds nothing and does nothing.

use fnv::FnvHashMap;
use instant::{Duration, Instant};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct TempPinId(pub u32);

/// Handle of the pending expiry timer (a `setTimeout` id in the browser).
pub type TimerHandle = i32;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Removal {
    Manual,
    Expired,
}

impl Removal {
    pub fn message(self) -> &'static str {
        match self {
            Removal::Manual => "🗑️ Temporary pin removed",
            Removal::Expired => "⏰ Temporary pin auto-removed",
        }
    }
}

#[derive(Debug)]
pub struct TemporaryPin<E> {
    pub id: TempPinId,
    pub pct_x: f64,
    pub pct_y: f64,
    /// Whatever the front end uses to represent the marker.
    pub element: E,
    pub timer: Option<TimerHandle>,
    pub created: Instant,
}

impl<E> TemporaryPin<E> {
    pub fn age(&self) -> Duration {
        self.created.elapsed()
    }
}

#[derive(Debug)]
pub struct TempPinTracker<E> {
    next_id: u32,
    live: FnvHashMap<TempPinId, TemporaryPin<E>>,
}

impl<E> Default for TempPinTracker<E> {
    fn default() -> Self {
        Self {
            next_id: 0,
            live: FnvHashMap::default(),
        }
    }
}

impl<E> TempPinTracker<E> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn spawn(&mut self, pct_x: f64, pct_y: f64, element: E) -> TempPinId {
        let id = TempPinId(self.next_id);
        self.next_id = self.next_id.wrapping_add(1);
        self.live.insert(
            id,
            TemporaryPin {
                id,
                pct_x,
                pct_y,
                element,
                timer: None,
                created: Instant::now(),
            },
        );
        id
    }

    /// Records the expiry timer so a manual removal can cancel it.
    /// Returns `false` if the pin is already gone.
    pub fn attach_timer(&mut self, id: TempPinId, handle: TimerHandle) -> bool {
        match self.live.get_mut(&id) {
            Some(pin) => {
                pin.timer = Some(handle);
                true
            }
            None => false,
        }
    }

    pub fn contains(&self, id: TempPinId) -> bool {
        self.live.contains_key(&id)
    }

    pub fn len(&self) -> usize {
        self.live.len()
    }

    pub fn is_empty(&self) -> bool {
        self.live.is_empty()
    }

    /// Takes the pin out of the tracker. Only the first caller gets it.
    pub fn take(&mut self, id: TempPinId, why: Removal) -> Option<TemporaryPin<E>> {
        let pin = self.live.remove(&id)?;
        log::info!("{}", why.message());
        log::debug!("[temp-pin] {:?} after {:?}", id, pin.age());
        Some(pin)
    }
}
