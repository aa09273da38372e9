//! Core wire-format decoder for LLRP (Low Level Reader Protocol).
//!
//! This crate decodes LLRP messages — the EPCglobal RFID reader-control
//! protocol carried over TCP — into trees of typed field records plus
//! structural diagnostics. Decoding is total: malformed input never aborts a
//! message, it produces diagnostics co-located with the field or parameter
//! where the anomaly was detected.

pub mod cursor;
pub mod error;
pub mod layout;
pub mod message;
pub mod metrics;
pub mod param;
pub mod report;
pub mod vendor;

/// Reexport of common types
pub use error::Error;
pub use message::{Decoder, MessageHeader, MessageType, HEADER_LEN, LLRP_PORT};
pub use report::{
    ByteSpan, DecodedField, DecodedMessage, Diagnostic, FieldValue, Parameter, Severity,
};

pub type Result<T> = std::result::Result<T, Error>;
