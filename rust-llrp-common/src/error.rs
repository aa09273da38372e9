//! Error types for the LLRP decoder.

use thiserror::Error;

/// All possible errors that can occur within the LLRP implementation.
///
/// Malformed wire data is deliberately *not* represented here; the decoder
/// recovers from it locally and reports it as a [`crate::report::Diagnostic`].
/// These variants cover conditions where no recovery is possible, such as a
/// byte stream that cannot be framed.
#[derive(Error, Debug)]
pub enum Error {
    /// Error related to message framing on a byte stream.
    #[error("frame error: {0}")]
    Frame(String),

    /// Error related to the fixed message header.
    #[error("message error: {0}")]
    Message(String),

    /// Error related to a reader session.
    #[error("session error: {0}")]
    Session(String),

    /// I/O error
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Other errors
    #[error("other error: {0}")]
    Other(String),
}
