use thiserror::Error;

use crate::surface::Role;

/// Library error type for carousel operations.
#[derive(Debug, Error)]
pub enum Error {
    /// The injected surface does not provide a required structural role.
    #[error("surface is missing required element: {0}")]
    MissingElement(Role),

    /// An item's display index does not match its position in the sequence.
    #[error("item at position {position} carries display index {found}")]
    IndexMismatch { position: usize, found: usize },

    /// One or more configured library directories are invalid or unreadable.
    #[error("invalid library directory: {0}")]
    BadDir(String),

    /// The scan completed but found no images.
    #[error("no images found in configured directories")]
    EmptyScan,
}
