//! Plain-text tree rendering of decoded messages.
//!
//! This is the consumer side of the decoder's output contract: field
//! records and diagnostics in, indented labels out. Nothing here inspects
//! wire bytes.

use std::fmt::Write;

use rust_llrp_common::report::{
    DecodedField, DecodedMessage, Diagnostic, FieldNote, FieldValue, ParamEncoding, Parameter,
    Severity,
};

const INDENT: &str = "  ";
const MAX_BLOB_BYTES: usize = 16;

/// Render one decoded message as an indented tree.
pub fn render_message(msg: &DecodedMessage) -> String {
    let mut out = String::new();
    let _ = writeln!(
        out,
        "Message: {} ({}), id {}, version {}, {} bytes",
        msg.type_name.unwrap_or("Unknown Type"),
        msg.type_code,
        msg.id,
        msg.version,
        msg.declared_len,
    );
    for diag in &msg.diagnostics {
        push_diagnostic(&mut out, 1, diag);
    }
    for field in &msg.fields {
        push_field(&mut out, 1, field);
    }
    for param in &msg.params {
        push_parameter(&mut out, 1, param);
    }
    out
}

fn push_parameter(out: &mut String, depth: usize, param: &Parameter) {
    let kind = match param.encoding {
        ParamEncoding::Tlv { .. } => "TLV",
        ParamEncoding::Tv => "TV",
    };
    let _ = match param.type_name {
        Some(name) => writeln!(out, "{}{} Parameter: {}", INDENT.repeat(depth), kind, name),
        None => writeln!(
            out,
            "{}{} Parameter: Unknown Type {}",
            INDENT.repeat(depth),
            kind,
            param.type_code
        ),
    };
    for diag in &param.diagnostics {
        push_diagnostic(out, depth + 1, diag);
    }
    for field in &param.fields {
        push_field(out, depth + 1, field);
    }
    for child in &param.params {
        push_parameter(out, depth + 1, child);
    }
}

fn push_field(out: &mut String, depth: usize, field: &DecodedField) {
    let mut line = format!("{}{}: {}", INDENT.repeat(depth), field.name, value_text(&field.value));
    if let Some(label) = field.label {
        let _ = write!(line, " ({})", label);
    }
    match field.note {
        Some(FieldNote::NoLimit) => line.push_str(" (No limit)"),
        Some(FieldNote::AllOfKind) => line.push_str(" (All)"),
        Some(FieldNote::Ignored) => line.push_str(" (Ignored)"),
        None => {}
    }
    out.push_str(&line);
    out.push('\n');
}

fn push_diagnostic(out: &mut String, depth: usize, diag: &Diagnostic) {
    let severity = match diag.severity {
        Severity::Warning => "warning",
        Severity::Error => "error",
    };
    let _ = writeln!(
        out,
        "{}!! {} at byte {}: {}",
        INDENT.repeat(depth),
        severity,
        diag.span.offset,
        diag.message
    );
}

fn value_text(value: &FieldValue) -> String {
    match value {
        FieldValue::Bytes(b) if b.len() > MAX_BLOB_BYTES => {
            let mut text = String::with_capacity(MAX_BLOB_BYTES * 2 + 16);
            for byte in b.iter().take(MAX_BLOB_BYTES) {
                let _ = write!(text, "{:02x}", byte);
            }
            let _ = write!(text, "... ({} bytes)", b.len());
            text
        }
        other => other.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_llrp_common::Decoder;

    fn frame(type_code: u16, body: &[u8]) -> Vec<u8> {
        let mut buf = Vec::new();
        buf.extend_from_slice(&((1u16 << 10) | type_code).to_be_bytes());
        buf.extend_from_slice(&((10 + body.len()) as u32).to_be_bytes());
        buf.extend_from_slice(&1u32.to_be_bytes());
        buf.extend_from_slice(body);
        buf
    }

    #[test]
    fn renders_fields_labels_and_notes() {
        let mut body = Vec::new();
        body.extend_from_slice(&0u16.to_be_bytes());
        body.push(3);
        body.extend_from_slice(&2u16.to_be_bytes());
        body.extend_from_slice(&4u16.to_be_bytes());
        let msg = Decoder::new().decode_frame(&frame(2, &body)).unwrap();

        let text = render_message(&msg);
        assert!(text.contains("Message: Get Reader Config (2)"));
        assert!(text.contains("Antenna ID: 0 (All)"));
        assert!(text.contains("Requested configuration: 3 (Antenna Configuration)"));
        assert!(text.contains("GPI port number: 2 (Ignored)"));
    }

    #[test]
    fn renders_diagnostics_inline() {
        // Keepalive with a trailing byte the message decoder cannot place.
        let msg = Decoder::new().decode_frame(&frame(62, &[0xAB])).unwrap();
        let text = render_message(&msg);
        assert!(text.contains("!! error"));
        assert!(text.contains("incorrect message length"));
    }
}
