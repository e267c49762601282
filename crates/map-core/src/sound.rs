//! Best-effort audio feedback for pin and modal interactions.
//!
//! Playback goes through the [`AudioCue`] capability so the browser backend
//! can be swapped for a recording fake in tests. [`SoundNotifier`] is the
//! only caller and it swallows every failure.

use crate::constants::SILENT_WAV_URI;
use std::rc::Rc;
use thiserror::Error;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SoundKind {
    Click,
    Close,
}

impl SoundKind {
    pub fn name(self) -> &'static str {
        match self {
            SoundKind::Click => "click",
            SoundKind::Close => "close",
        }
    }

    /// Asset played for this cue. Both kinds share the silent placeholder.
    pub fn source(self) -> &'static str {
        match self {
            SoundKind::Click => SILENT_WAV_URI,
            SoundKind::Close => SILENT_WAV_URI,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AudioError {
    #[error("audio unavailable: {0}")]
    Unavailable(String),
    #[error("playback rejected: {0}")]
    Rejected(String),
}

/// Something that can request playback of a cue.
///
/// Implementations report failure through the return value and must not
/// panic. Asynchronous rejections are handled by the implementation itself.
pub trait AudioCue {
    fn play(&self, kind: SoundKind) -> Result<(), AudioError>;
}

impl<T: AudioCue + ?Sized> AudioCue for Rc<T> {
    fn play(&self, kind: SoundKind) -> Result<(), AudioError> {
        (**self).play(kind)
    }
}

impl<T: AudioCue + ?Sized> AudioCue for Box<T> {
    fn play(&self, kind: SoundKind) -> Result<(), AudioError> {
        (**self).play(kind)
    }
}

/// Cue backend that never makes a sound.
#[derive(Clone, Copy, Debug, Default)]
pub struct Silent;

impl AudioCue for Silent {
    fn play(&self, _kind: SoundKind) -> Result<(), AudioError> {
        Ok(())
    }
}

#[derive(Clone, Debug)]
pub struct SoundNotifier<A> {
    cue: A,
}

impl<A: AudioCue> SoundNotifier<A> {
    pub fn new(cue: A) -> Self {
        Self { cue }
    }

    pub fn notify(&self, kind: SoundKind) {
        if let Err(e) = self.cue.play(kind) {
            log::debug!("[sound] audio playback not essential ({}): {}", kind.name(), e);
        }
    }

    pub fn cue(&self) -> &A {
        &self.cue
    }
}
