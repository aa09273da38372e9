//! Session configuration.

use crate::DEFAULT_MAX_FRAME_LEN;

/// Options for a reader session.
#[derive(Debug, Clone)]
pub struct SessionOptions {
    /// Largest message the framing layer will accept.
    pub max_frame_len: usize,

    /// Per-message read timeout (in milliseconds); `None` waits forever.
    pub read_timeout_ms: Option<u64>,
}

impl Default for SessionOptions {
    fn default() -> Self {
        Self {
            max_frame_len: DEFAULT_MAX_FRAME_LEN,
            read_timeout_ms: None,
        }
    }
}
