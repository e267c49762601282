// Recording fakes for the audio and clipboard capabilities.

#![allow(dead_code)]

use map_core::{AudioCue, AudioError, ClipboardDone, ClipboardError, ClipboardWriter, SoundKind};
use std::cell::RefCell;

#[derive(Default)]
pub struct RecordingCue {
    pub plays: RefCell<Vec<SoundKind>>,
    pub fail: bool,
}

impl RecordingCue {
    pub fn failing() -> Self {
        Self {
            fail: true,
            ..Self::default()
        }
    }

    pub fn kinds(&self) -> Vec<SoundKind> {
        self.plays.borrow().clone()
    }
}

impl AudioCue for RecordingCue {
    fn play(&self, kind: SoundKind) -> Result<(), AudioError> {
        self.plays.borrow_mut().push(kind);
        if self.fail {
            return Err(AudioError::Rejected("autoplay blocked".into()));
        }
        Ok(())
    }
}

/// Completes every write immediately with the configured outcome.
#[derive(Default)]
pub struct RecordingClipboard {
    pub writes: RefCell<Vec<String>>,
    pub outcomes: RefCell<Vec<Result<(), ClipboardError>>>,
    pub deny: bool,
}

impl ClipboardWriter for RecordingClipboard {
    fn write_text(&self, text: &str, done: ClipboardDone) {
        self.writes.borrow_mut().push(text.to_string());
        let result = if self.deny {
            Err(ClipboardError::Denied("NotAllowedError".into()))
        } else {
            Ok(())
        };
        self.outcomes.borrow_mut().push(result.clone());
        done(result);
    }
}
