use thiserror::Error;

use crate::transport::TransportError;
use crumble_core::CompilationError;

pub type Result<T> = std::result::Result<T, Error>;

/// Errors from the top-level compile-and-upload operations.
#[derive(Debug, Error)]
pub enum Error {
    #[error(transparent)]
    Compile(#[from] CompilationError),

    #[error("upload failed: {0}")]
    Transport(#[from] TransportError),
}

impl Error {
    /// The compilation error, if compilation was what failed.
    pub fn as_compilation_error(&self) -> Option<&CompilationError> {
        match self {
            Error::Compile(err) => Some(err),
            Error::Transport(_) => None,
        }
    }

    pub fn is_transport_error(&self) -> bool {
        matches!(self, Error::Transport(_))
    }
}
