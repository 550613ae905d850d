use std::thread::ThreadId;

use thiserror::Error;

/// Reasons a [`crate::feller::TreeFeller`] can't be created. None of these are recoverable,
/// the feature stays unavailable until the configuration is fixed.
#[derive(Error, Debug, PartialEq, Eq)]
pub enum TreeFellerError {
    #[error("the tree feller must be created on the server thread {expected:?}, not on {actual:?}")]
    WrongThread { expected: ThreadId, actual: ThreadId },
    #[error("{0} has no item form and can't be used as a tree feller tool")]
    NotAnItem(String),
    #[error("unknown tree feller tool {0}")]
    UnknownMaterial(String),
}
