use std::rc::Rc;
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ClipboardError {
    #[error("clipboard API unavailable")]
    Unavailable,
    #[error("clipboard write denied: {0}")]
    Denied(String),
}

/// Completion callback for a clipboard write. Called exactly once.
pub type ClipboardDone = Box<dyn FnOnce(Result<(), ClipboardError>)>;

/// Fire-and-forget clipboard access.
///
/// `write_text` returns immediately; the outcome arrives later through
/// `done`, possibly after other events have been handled.
pub trait ClipboardWriter {
    fn write_text(&self, text: &str, done: ClipboardDone);
}

impl<T: ClipboardWriter + ?Sized> ClipboardWriter for Rc<T> {
    fn write_text(&self, text: &str, done: ClipboardDone) {
        (**self).write_text(text, done)
    }
}

pub const COPY_OK_MESSAGE: &str = "✅ Coordinates copied to clipboard!";
pub const COPY_FAILED_MESSAGE: &str =
    "⚠️ Could not copy coordinates. You can copy manually from console.";

/// Console line reported for a finished clipboard write.
pub fn outcome_message(result: &Result<(), ClipboardError>) -> &'static str {
    match result {
        Ok(()) => COPY_OK_MESSAGE,
        Err(_) => COPY_FAILED_MESSAGE,
    }
}

/// Logs the outcome of a clipboard write at the matching level.
pub fn log_outcome(result: Result<(), ClipboardError>) {
    match &result {
        Ok(()) => log::info!("{}", outcome_message(&result)),
        Err(e) => {
            log::debug!("[clipboard] {}", e);
            log::warn!("{}", outcome_message(&result));
        }
    }
}
