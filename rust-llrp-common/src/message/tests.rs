//! Unit tests for message framing-header parsing and body dispatch.

use crate::message::{Decoder, MessageHeader, MessageType, HEADER_LEN};
use crate::report::{DecodedMessage, FieldNote, FieldValue};

/// Build one framed message: version 1 header plus body.
fn frame(type_code: u16, id: u32, body: &[u8]) -> Vec<u8> {
    let mut buf = Vec::with_capacity(HEADER_LEN + body.len());
    let word: u16 = (1 << 10) | (type_code & 0x03FF);
    buf.extend_from_slice(&word.to_be_bytes());
    buf.extend_from_slice(&((HEADER_LEN + body.len()) as u32).to_be_bytes());
    buf.extend_from_slice(&id.to_be_bytes());
    buf.extend_from_slice(body);
    buf
}

fn field<'a>(msg: &'a DecodedMessage, name: &str) -> &'a crate::report::DecodedField {
    msg.fields
        .iter()
        .find(|f| f.name == name)
        .unwrap_or_else(|| panic!("no field named '{}'", name))
}

#[test]
fn header_parses_version_type_length_id() {
    let buf = frame(62, 0xDEAD_BEEF, &[]);
    let header = MessageHeader::parse(&buf).unwrap();
    assert_eq!(header.version, 1);
    assert_eq!(header.type_code, 62);
    assert_eq!(header.length, 10);
    assert_eq!(header.id, 0xDEAD_BEEF);
}

#[test]
fn short_header_is_an_error() {
    assert!(MessageHeader::parse(&[0u8; 5]).is_err());
    assert!(Decoder::new().decode_frame(&[0u8; 9]).is_err());
}

#[test]
fn message_type_codes_round_trip() {
    for code in 0..=1023u16 {
        if let Some(t) = MessageType::from_code(code) {
            assert_eq!(t.code(), code);
            assert!(!t.name().is_empty());
        }
    }
    assert_eq!(MessageType::from_code(62), Some(MessageType::Keepalive));
    assert_eq!(MessageType::from_code(1023), Some(MessageType::CustomMessage));
    assert_eq!(MessageType::from_code(999), None);
}

#[test]
fn header_only_message_is_clean() {
    let msg = Decoder::new().decode_frame(&frame(62, 7, &[])).unwrap();
    assert_eq!(msg.type_name, Some("Keepalive"));
    assert_eq!(msg.id, 7);
    assert!(msg.fields.is_empty());
    assert!(msg.params.is_empty());
    assert!(msg.is_clean());
}

#[test]
fn header_length_mismatch_is_flagged() {
    let mut buf = frame(62, 1, &[]);
    // Claim five bytes more than the frame actually has.
    buf[2..6].copy_from_slice(&15u32.to_be_bytes());
    let msg = Decoder::new().decode_frame(&buf).unwrap();
    assert!(msg
        .diagnostics
        .iter()
        .any(|d| d.message.contains("claimed 15, but have 10")));
}

#[test]
fn unknown_message_type_keeps_body_undecoded() {
    let msg = Decoder::new()
        .decode_frame(&frame(999, 1, &[1, 2, 3, 4]))
        .unwrap();
    assert_eq!(msg.type_name, None);
    assert!(msg.params.is_empty());
    assert!(msg
        .diagnostics
        .iter()
        .any(|d| d.message.contains("unrecognized message type 999")));
}

#[test]
fn rospec_id_zero_means_all() {
    let msg = Decoder::new()
        .decode_frame(&frame(22, 1, &0u32.to_be_bytes()))
        .unwrap();
    let f = field(&msg, "ROSpec ID");
    assert_eq!(f.value, FieldValue::U32(0));
    assert_eq!(f.note, Some(FieldNote::AllOfKind));

    let msg = Decoder::new()
        .decode_frame(&frame(22, 1, &42u32.to_be_bytes()))
        .unwrap();
    let f = field(&msg, "ROSpec ID");
    assert_eq!(f.value, FieldValue::U32(42));
    assert_eq!(f.note, None);
}

#[test]
fn accessspec_id_messages_decode_the_id() {
    let msg = Decoder::new()
        .decode_frame(&frame(41, 1, &9u32.to_be_bytes()))
        .unwrap();
    assert_eq!(field(&msg, "AccessSpec ID").value, FieldValue::U32(9));
    assert!(msg.is_clean());
}

#[test]
fn get_reader_config_annotates_ignored_scopes() {
    // Selector 3 (Antenna Configuration): antenna relevant, ports ignored.
    let mut body = Vec::new();
    body.extend_from_slice(&0u16.to_be_bytes()); // antenna: all
    body.push(3);
    body.extend_from_slice(&2u16.to_be_bytes()); // GPI port
    body.extend_from_slice(&0u16.to_be_bytes()); // GPO port
    let msg = Decoder::new().decode_frame(&frame(2, 1, &body)).unwrap();

    assert!(msg.is_clean());
    assert_eq!(field(&msg, "Antenna ID").note, Some(FieldNote::AllOfKind));
    assert_eq!(
        field(&msg, "Requested configuration").label,
        Some("Antenna Configuration")
    );
    assert_eq!(field(&msg, "GPI port number").note, Some(FieldNote::Ignored));
    assert_eq!(field(&msg, "GPO port number").note, Some(FieldNote::Ignored));
}

#[test]
fn get_reader_config_selector_all_ignores_nothing() {
    let mut body = Vec::new();
    body.extend_from_slice(&1u16.to_be_bytes());
    body.push(0); // All
    body.extend_from_slice(&2u16.to_be_bytes());
    body.extend_from_slice(&3u16.to_be_bytes());
    let msg = Decoder::new().decode_frame(&frame(2, 1, &body)).unwrap();

    assert!(msg.is_clean());
    for name in ["Antenna ID", "GPI port number", "GPO port number"] {
        assert_eq!(field(&msg, name).note, None, "{}", name);
    }
}

#[test]
fn get_reader_config_unknown_selector_is_flagged() {
    let mut body = Vec::new();
    body.extend_from_slice(&1u16.to_be_bytes());
    body.push(42);
    body.extend_from_slice(&2u16.to_be_bytes());
    body.extend_from_slice(&3u16.to_be_bytes());
    let msg = Decoder::new().decode_frame(&frame(2, 1, &body)).unwrap();

    assert!(msg
        .diagnostics
        .iter()
        .any(|d| d.message.contains("unrecognized configuration request: 42")));
    // All three scopes decoded anyway, all ignored.
    for name in ["Antenna ID", "GPI port number", "GPO port number"] {
        assert_eq!(field(&msg, name).note, Some(FieldNote::Ignored), "{}", name);
    }
}

#[test]
fn get_reader_capabilities_labels_the_selector() {
    let msg = Decoder::new().decode_frame(&frame(1, 1, &[2])).unwrap();
    let f = field(&msg, "Requested capabilities");
    assert_eq!(f.value, FieldValue::U8(2));
    assert_eq!(f.label, Some("LLRP Capabilities"));
    assert!(msg.is_clean());
}

#[test]
fn report_message_decodes_trailing_parameters() {
    // RO_ACCESS_REPORT with one TV Antenna ID parameter.
    let msg = Decoder::new()
        .decode_frame(&frame(61, 1, &[0x81, 0x00, 0x07]))
        .unwrap();
    assert!(msg.is_clean());
    assert_eq!(msg.params.len(), 1);
    assert_eq!(msg.params[0].type_code, 1);
}

#[test]
fn supported_version_response_labels_versions() {
    let msg = Decoder::new().decode_frame(&frame(56, 1, &[1, 2])).unwrap();
    assert_eq!(field(&msg, "Current version").label, Some("1.0.1"));
    assert_eq!(field(&msg, "Supported version").label, Some("1.1"));
    assert!(msg.is_clean());
}

#[test]
fn error_message_status_code_is_labeled() {
    // LLRP Status (287) with status 0 and an empty error description.
    let body = [0x01, 0x1F, 0x00, 0x08, 0x00, 0x00, 0x00, 0x00];
    let msg = Decoder::new().decode_frame(&frame(100, 1, &body)).unwrap();
    assert!(msg.is_clean());
    let status = msg.params[0]
        .fields
        .iter()
        .find(|f| f.name == "Status code")
        .unwrap();
    assert_eq!(status.value, FieldValue::U16(0));
    assert_eq!(status.label, Some("M_Success"));
}

#[test]
fn custom_message_dispatches_to_impinj() {
    let mut body = Vec::new();
    body.extend_from_slice(&25882u32.to_be_bytes());
    body.push(23); // Save Settings
    body.push(0x80); // save configuration flag
    let msg = Decoder::new().decode_frame(&frame(1023, 1, &body)).unwrap();

    assert!(msg.is_clean());
    assert_eq!(field(&msg, "Vendor ID").label, Some("Impinj"));
    assert_eq!(
        field(&msg, "Impinj message subtype").label,
        Some("Impinj Save Settings")
    );
    assert_eq!(field(&msg, "Save configuration").value, FieldValue::Bool(true));
}

#[test]
fn custom_message_unknown_vendor_is_opaque() {
    let mut body = Vec::new();
    body.extend_from_slice(&42u32.to_be_bytes());
    body.extend_from_slice(&[9, 9, 9]);
    let msg = Decoder::new().decode_frame(&frame(1023, 1, &body)).unwrap();

    assert!(msg.is_clean());
    assert_eq!(field(&msg, "Vendor ID").value, FieldValue::U32(42));
    assert_eq!(field(&msg, "Data").value, FieldValue::Bytes(vec![9, 9, 9].into()));
}

#[test]
fn trailing_garbage_after_header_only_message_is_flagged() {
    let msg = Decoder::new().decode_frame(&frame(62, 1, &[0xFF])).unwrap();
    assert!(msg
        .diagnostics
        .iter()
        .any(|d| d.message.contains("incorrect message length")));
}

#[test]
fn decode_frame_is_total_over_arbitrary_input() {
    let dec = Decoder::new();
    let mut seed: u32 = 0xCAFE_F00D;
    for size in HEADER_LEN..HEADER_LEN + 96 {
        let mut buf = vec![0u8; size];
        for b in buf.iter_mut() {
            seed = seed.wrapping_mul(1_664_525).wrapping_add(1_013_904_223);
            *b = (seed >> 24) as u8;
        }
        // Keep the declared length honest so only body decoding is fuzzed.
        let len = (size as u32).to_be_bytes();
        buf[2..6].copy_from_slice(&len);
        let msg = dec.decode_frame(&buf).unwrap();
        assert_eq!(msg.declared_len as usize, size);
    }
}

#[test]
fn metrics_count_messages_and_diagnostics() {
    let dec = Decoder::new();
    let metrics = dec.metrics();
    dec.decode_frame(&frame(62, 1, &[])).unwrap();
    dec.decode_frame(&frame(62, 2, &[0xFF])).unwrap();
    assert_eq!(metrics.messages_decoded.value(), 2);
    assert!(metrics.diagnostics_emitted.value() >= 1);
}
