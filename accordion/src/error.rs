use pagedom::{DomError, NodeId};
use thiserror::Error;

/// Structural problems met while driving the widget.
///
/// None of these are fatal: the public entry points log them and carry on
/// with the remaining entries.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AccordionError {
    #[error("entry {entry} has no header")]
    MissingHeader { entry: NodeId },

    #[error("{element} is not inside an entry")]
    MissingEntry { element: NodeId },

    #[error("{element} is not inside a wrapper")]
    MissingWrapper { element: NodeId },

    #[error("height attribute '{name}' on {entry} is missing or not a number")]
    InvalidHeight { entry: NodeId, name: String },

    #[error("accordion already initialized")]
    AlreadyInitialized,

    #[error(transparent)]
    Dom(#[from] DomError),
}
