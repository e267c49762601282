use thiserror::Error;

/// Failures that can occur while wiring or driving the map page.
///
/// None of these ever escape an event handler; they are logged where they
/// happen and the affected feature degrades to a no-op.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum MapError {
    #[error("pin #{0} does not exist")]
    UnknownPin(usize),
    #[error("pin #{0} has no modal reference")]
    UnboundPin(usize),
    #[error("pin references missing modal `{0}`")]
    UnknownModal(String),
    #[error("element `{0}` not found")]
    MissingElement(String),
}
