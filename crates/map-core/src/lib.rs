//! Platform-free logic for the interactive map.
//!
//! Nothing here touches the DOM. The web front end feeds UI events in and
//! renders the resulting state; tests do the same with fakes.

pub mod clipboard;
pub mod config;
pub mod constants;
pub mod coords;
pub mod error;
pub mod helper;
pub mod hover;
pub mod modal;
pub mod page;
pub mod sound;
pub mod temp_pin;

pub use clipboard::{ClipboardDone, ClipboardError, ClipboardWriter};
pub use config::MapConfig;
pub use coords::{ClickReport, Rect};
pub use error::MapError;
pub use helper::CoordinateHelper;
pub use hover::Hover;
pub use modal::{ModalBoard, ModalClick, ModalController, ModalId, PinId};
pub use page::{initialize, HelperStatus, MapPage, PageMarkup};
pub use sound::{AudioCue, AudioError, SoundKind, SoundNotifier};
pub use temp_pin::{Removal, TempPinId, TempPinTracker, TemporaryPin};
