//! TCP framing and session layer for LLRP.
//!
//! LLRP messages carry their total length at a fixed offset in a 10-byte
//! header, so framing a TCP stream is a matter of buffering until that many
//! bytes are available and handing the decoder exactly one complete message
//! at a time. This crate provides both an incremental [`FrameBuffer`] for
//! callers that manage their own reads and an async [`LlrpSession`] that
//! owns a connection to a reader.

pub mod config;
pub mod framing;
pub mod session;

pub use config::SessionOptions;
pub use framing::{peek_frame_len, read_frame, FrameBuffer};
pub use rust_llrp_common::message::LLRP_PORT;
pub use session::LlrpSession;

/// Upper bound on a single message, guarding the frame buffer against a
/// hostile or corrupt length field.
pub const DEFAULT_MAX_FRAME_LEN: usize = 4 * 1024 * 1024;
