//! Decoded output records.
//!
//! The decoder's only output contract: an ordered tree of typed field
//! records plus structural diagnostics. Rendering (labels, indentation,
//! JSON) is entirely the consumer's job; nothing here knows how to display
//! itself beyond raw values.

use bytes::Bytes;
use serde::Serialize;
use std::fmt;

/* ---------------------------------------------------------------- *
 * Spans and scalar values
 * ---------------------------------------------------------------- */

/// A byte range within the message buffer being decoded.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ByteSpan {
    pub offset: usize,
    pub len: usize,
}

impl ByteSpan {
    pub fn new(offset: usize, len: usize) -> Self {
        Self { offset, len }
    }

    pub fn end(&self) -> usize {
        self.offset + self.len
    }
}

/// A decoded scalar, blob or string value.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub enum FieldValue {
    U8(u8),
    U16(u16),
    U32(u32),
    U64(u64),
    I16(i16),
    I32(i32),
    Bool(bool),
    Bytes(Bytes),
    Str(String),
}

impl fmt::Display for FieldValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FieldValue::U8(v) => write!(f, "{}", v),
            FieldValue::U16(v) => write!(f, "{}", v),
            FieldValue::U32(v) => write!(f, "{}", v),
            FieldValue::U64(v) => write!(f, "{}", v),
            FieldValue::I16(v) => write!(f, "{}", v),
            FieldValue::I32(v) => write!(f, "{}", v),
            FieldValue::Bool(v) => write!(f, "{}", if *v { "Yes" } else { "No" }),
            FieldValue::Bytes(b) => {
                for byte in b.iter() {
                    write!(f, "{:02x}", byte)?;
                }
                Ok(())
            }
            FieldValue::Str(s) => write!(f, "{}", s),
        }
    }
}

/// Presentation annotation attached to a field.
///
/// The raw value is always preserved in [`FieldValue`]; the note tells the
/// renderer that the protocol assigns the value a special reading.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum FieldNote {
    /// Capability field where raw zero means "no configured limit".
    NoLimit,
    /// Scope field where raw zero means "all of this kind" (all ROSpecs,
    /// all antennas, all GPI/GPO ports, ...).
    AllOfKind,
    /// Field decoded but not semantically relevant under the current
    /// requested-data selector.
    Ignored,
}

/// One decoded field: name, source bytes, interpreted value.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DecodedField {
    pub name: &'static str,
    pub span: ByteSpan,
    pub value: FieldValue,
    /// Human-readable reading of the value, when the protocol defines one
    /// (status code names, selector names, version strings, ...).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub label: Option<&'static str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub note: Option<FieldNote>,
}

impl DecodedField {
    pub fn new(name: &'static str, span: ByteSpan, value: FieldValue) -> Self {
        Self {
            name,
            span,
            value,
            label: None,
            note: None,
        }
    }

    pub fn with_note(name: &'static str, span: ByteSpan, value: FieldValue, note: FieldNote) -> Self {
        Self {
            name,
            span,
            value,
            label: None,
            note: Some(note),
        }
    }
}

/* ---------------------------------------------------------------- *
 * Diagnostics
 * ---------------------------------------------------------------- */

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Severity {
    Warning,
    Error,
}

/// A structural anomaly observed while decoding.
///
/// Diagnostics never stop a decode; they ride along with the parameter or
/// message where they were detected.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Diagnostic {
    pub severity: Severity,
    pub message: String,
    pub span: ByteSpan,
}

impl Diagnostic {
    pub fn warning(message: impl Into<String>, span: ByteSpan) -> Self {
        Self {
            severity: Severity::Warning,
            message: message.into(),
            span,
        }
    }

    pub fn error(message: impl Into<String>, span: ByteSpan) -> Self {
        Self {
            severity: Severity::Error,
            message: message.into(),
            span,
        }
    }
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let sev = match self.severity {
            Severity::Warning => "warning",
            Severity::Error => "error",
        };
        write!(
            f,
            "[{} @ {}+{}] {}",
            sev, self.span.offset, self.span.len, self.message
        )
    }
}

/* ---------------------------------------------------------------- *
 * Parameters and messages
 * ---------------------------------------------------------------- */

/// Which of the two wire encodings a parameter used.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum ParamEncoding {
    /// Type-length-value: explicit 16-bit declared length.
    Tlv { declared_len: u16 },
    /// Type-value: length implied by the static per-type table.
    Tv,
}

/// One decoded TLV or TV parameter, possibly containing nested parameters.
#[derive(Debug, Clone, Serialize)]
pub struct Parameter {
    pub encoding: ParamEncoding,
    pub type_code: u16,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub type_name: Option<&'static str>,
    /// Bytes actually consumed, header included (clamped when the declared
    /// length was unusable).
    pub span: ByteSpan,
    pub fields: Vec<DecodedField>,
    pub params: Vec<Parameter>,
    pub diagnostics: Vec<Diagnostic>,
}

impl Parameter {
    /// All diagnostics of this parameter and its descendants, document order.
    pub fn all_diagnostics(&self) -> Vec<&Diagnostic> {
        let mut out = Vec::new();
        self.collect_diagnostics(&mut out);
        out
    }

    fn collect_diagnostics<'a>(&'a self, out: &mut Vec<&'a Diagnostic>) {
        out.extend(self.diagnostics.iter());
        for p in &self.params {
            p.collect_diagnostics(out);
        }
    }
}

/// One fully decoded LLRP message.
#[derive(Debug, Clone, Serialize)]
pub struct DecodedMessage {
    pub version: u8,
    pub type_code: u16,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub type_name: Option<&'static str>,
    /// Total length claimed by the header, this header included.
    pub declared_len: u32,
    pub id: u32,
    /// Message-type-specific fixed fields.
    pub fields: Vec<DecodedField>,
    /// Trailing parameter sequence, for shapes that carry one.
    pub params: Vec<Parameter>,
    pub diagnostics: Vec<Diagnostic>,
}

impl DecodedMessage {
    /// All diagnostics of the message and every nested parameter.
    pub fn all_diagnostics(&self) -> Vec<&Diagnostic> {
        let mut out: Vec<&Diagnostic> = self.diagnostics.iter().collect();
        for p in &self.params {
            p.collect_diagnostics(&mut out);
        }
        out
    }

    /// True when decoding observed no anomaly anywhere in the tree.
    pub fn is_clean(&self) -> bool {
        self.all_diagnostics().is_empty()
    }
}
