//! One-shot page initialization.
//!
//! The browser shell scans the document into a [`PageMarkup`] and calls
//! [`initialize`]. Everything after that is event handling on the returned
//! [`MapPage`].

use crate::config::MapConfig;
use crate::error::MapError;
use crate::modal::{ModalBoard, ModalController};
use crate::sound::{AudioCue, SoundNotifier};

/// What the page declares, in document order.
#[derive(Clone, Debug, Default)]
pub struct PageMarkup {
    /// `data-modal` of each pin, `None` when the attribute is missing.
    pub pin_targets: Vec<Option<String>>,
    /// Id of each modal element.
    pub modal_keys: Vec<String>,
    pub has_diagram: bool,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum HelperStatus {
    Enabled,
    /// Switched off by configuration.
    Off,
    /// Required markup is missing.
    Disabled(MapError),
}

impl HelperStatus {
    pub fn is_enabled(&self) -> bool {
        matches!(self, HelperStatus::Enabled)
    }
}

pub struct MapPage<A> {
    pub modals: ModalController<A>,
    pub helper: HelperStatus,
}

pub fn initialize<A: AudioCue>(markup: &PageMarkup, config: &MapConfig, audio: A) -> MapPage<A> {
    let mut board = ModalBoard::new();
    for key in &markup.modal_keys {
        board.add_modal(key.clone());
    }
    for target in &markup.pin_targets {
        let pin = board.add_pin(target.clone());
        if let Err(e) = board.resolve(pin) {
            log::warn!("[init] {}", e);
        }
    }
    log::info!(
        "[init] pins={} modals={}",
        board.pins().len(),
        board.modals().len()
    );

    let helper = if !config.coordinate_helper {
        log::info!("[init] coordinate helper off");
        HelperStatus::Off
    } else if !markup.has_diagram {
        log::error!("{}", crate::helper::DISABLED_MESSAGE);
        HelperStatus::Disabled(MapError::MissingElement(config.diagram_id.clone()))
    } else {
        HelperStatus::Enabled
    };

    MapPage {
        modals: ModalController::new(board, SoundNotifier::new(audio), config.cancel_keys.clone()),
        helper,
    }
}
