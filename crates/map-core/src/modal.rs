//! Exclusive-open modal state for the map pins.
//!
//! [`ModalBoard`] is the plain state: one boolean per pin and per modal,
//! addressed by index newtypes. [`ModalController`] drives it from UI events
//! and adds the sound cues. Neither knows about the DOM; the front end
//! projects the booleans onto CSS classes after every change.

use crate::error::MapError;
use crate::sound::{AudioCue, SoundKind, SoundNotifier};
use fnv::FnvHashMap;
use smallvec::SmallVec;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct PinId(pub usize);

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct ModalId(pub usize);

#[derive(Clone, Debug, Default)]
pub struct Pin {
    /// Key of the modal this pin opens, if the markup declares one.
    pub target: Option<String>,
    pub active: bool,
}

#[derive(Clone, Debug)]
pub struct Modal {
    pub key: String,
    pub active: bool,
}

/// Where a click on a modal element landed.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ModalClick {
    /// The modal element itself, outside its content box.
    Background,
    Content,
}

#[derive(Clone, Debug, Default)]
pub struct ModalBoard {
    pins: Vec<Pin>,
    modals: Vec<Modal>,
    by_key: FnvHashMap<String, ModalId>,
}

impl ModalBoard {
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers a modal. A repeated key keeps resolving to the first modal.
    pub fn add_modal(&mut self, key: impl Into<String>) -> ModalId {
        let key = key.into();
        let id = ModalId(self.modals.len());
        self.by_key.entry(key.clone()).or_insert(id);
        self.modals.push(Modal { key, active: false });
        id
    }

    pub fn add_pin(&mut self, target: Option<String>) -> PinId {
        let id = PinId(self.pins.len());
        self.pins.push(Pin {
            target,
            active: false,
        });
        id
    }

    pub fn pins(&self) -> &[Pin] {
        &self.pins
    }

    pub fn modals(&self) -> &[Modal] {
        &self.modals
    }

    pub fn modal_by_key(&self, key: &str) -> Option<ModalId> {
        self.by_key.get(key).copied()
    }

    /// Modal opened by `pin`.
    pub fn resolve(&self, pin: PinId) -> Result<ModalId, MapError> {
        let p = self.pins.get(pin.0).ok_or(MapError::UnknownPin(pin.0))?;
        let key = p.target.as_deref().ok_or(MapError::UnboundPin(pin.0))?;
        self.modal_by_key(key)
            .ok_or_else(|| MapError::UnknownModal(key.to_string()))
    }

    /// Activates the modal behind `pin` after deactivating everything else.
    ///
    /// Resolution happens first, so an unresolvable pin leaves the board
    /// untouched.
    pub fn open(&mut self, pin: PinId) -> Result<ModalId, MapError> {
        let modal = self.resolve(pin)?;
        self.close_all();
        self.modals[modal.0].active = true;
        self.pins[pin.0].active = true;
        Ok(modal)
    }

    /// Deactivates `modal` and clears every pin highlight.
    pub fn close(&mut self, modal: ModalId) {
        if let Some(m) = self.modals.get_mut(modal.0) {
            m.active = false;
        }
        self.clear_pins();
    }

    /// Deactivates every modal and pin, returning the modals that were open.
    pub fn close_all(&mut self) -> SmallVec<[ModalId; 1]> {
        let mut closed = SmallVec::new();
        for (i, m) in self.modals.iter_mut().enumerate() {
            if m.active {
                m.active = false;
                closed.push(ModalId(i));
            }
        }
        self.clear_pins();
        closed
    }

    fn clear_pins(&mut self) {
        for p in &mut self.pins {
            p.active = false;
        }
    }

    pub fn active_modals(&self) -> impl Iterator<Item = ModalId> + '_ {
        self.modals
            .iter()
            .enumerate()
            .filter(|(_, m)| m.active)
            .map(|(i, _)| ModalId(i))
    }

    pub fn active_pins(&self) -> impl Iterator<Item = PinId> + '_ {
        self.pins
            .iter()
            .enumerate()
            .filter(|(_, p)| p.active)
            .map(|(i, _)| PinId(i))
    }

    pub fn is_modal_active(&self, modal: ModalId) -> bool {
        self.modals.get(modal.0).is_some_and(|m| m.active)
    }

    pub fn is_pin_active(&self, pin: PinId) -> bool {
        self.pins.get(pin.0).is_some_and(|p| p.active)
    }

    /// Checks the pin/modal pairing: every active pin resolves to an active
    /// modal, and every active modal was opened through exactly one active pin.
    pub fn is_consistent(&self) -> bool {
        let pins: SmallVec<[PinId; 1]> = self.active_pins().collect();
        let modals: SmallVec<[ModalId; 1]> = self.active_modals().collect();
        if pins.len() != modals.len() || modals.len() > 1 {
            return false;
        }
        pins.iter()
            .all(|&p| matches!(self.resolve(p), Ok(m) if self.is_modal_active(m)))
    }
}

/// Drives a [`ModalBoard`] from UI events and plays the matching cues.
pub struct ModalController<A> {
    board: ModalBoard,
    sound: SoundNotifier<A>,
    cancel_keys: Vec<String>,
}

impl<A: AudioCue> ModalController<A> {
    pub fn new(board: ModalBoard, sound: SoundNotifier<A>, cancel_keys: Vec<String>) -> Self {
        Self {
            board,
            sound,
            cancel_keys,
        }
    }

    pub fn board(&self) -> &ModalBoard {
        &self.board
    }

    /// Pin click. Returns `false` when the pin does not resolve to a modal,
    /// in which case nothing changes and no cue plays.
    pub fn open(&mut self, pin: PinId) -> bool {
        match self.board.open(pin) {
            Ok(modal) => {
                log::debug!("[modal] open {}", self.board.modals()[modal.0].key);
                self.sound.notify(SoundKind::Click);
                true
            }
            Err(e) => {
                log::warn!("[modal] cannot open: {}", e);
                false
            }
        }
    }

    /// Close control inside `modal`.
    pub fn close(&mut self, modal: ModalId) {
        self.board.close(modal);
        self.sound.notify(SoundKind::Close);
    }

    /// Click anywhere on a modal element. Only background clicks close it.
    pub fn click_modal(&mut self, modal: ModalId, at: ModalClick) -> bool {
        match at {
            ModalClick::Background => {
                self.close(modal);
                true
            }
            ModalClick::Content => false,
        }
    }

    pub fn close_all(&mut self) -> usize {
        let closed = self.board.close_all();
        self.sound.notify(SoundKind::Close);
        closed.len()
    }

    pub fn is_cancel_key(&self, key: &str) -> bool {
        self.cancel_keys.iter().any(|k| k == key)
    }

    /// Global keydown. Returns `true` if the key was handled.
    pub fn handle_key(&mut self, key: &str) -> bool {
        if !self.is_cancel_key(key) {
            return false;
        }
        let closed = self.close_all();
        if closed > 0 {
            log::debug!("[keys] closed {} modal(s)", closed);
        }
        true
    }
}
