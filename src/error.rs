//! Error taxonomy for request serving.

use std::io;
use thiserror::Error;

/// Errors raised while resolving and reading a requested file.
///
/// Everything here is per-request: it is converted to an HTTP status at the
/// request boundary and never propagates past it.
#[derive(Debug, Error)]
pub enum ServeError {
    #[error("file not found")]
    NotFound,

    /// The request path would resolve outside the served root. Reported to
    /// the client as 404 so the response does not confirm the target exists.
    #[error("path escapes the served root")]
    Traversal,

    #[error("failed to read file: {0}")]
    Io(#[from] io::Error),
}

impl ServeError {
    /// HTTP status this error maps to at the request boundary.
    pub const fn status(&self) -> u16 {
        match self {
            Self::NotFound | Self::Traversal => 404,
            Self::Io(_) => 500,
        }
    }

    /// Classify a read failure: a missing file is an ordinary 404, anything
    /// else (permissions, I/O) is a server-side error.
    pub fn from_read_error(err: io::Error) -> Self {
        if err.kind() == io::ErrorKind::NotFound {
            Self::NotFound
        } else {
            Self::Io(err)
        }
    }
}
