//! Unit tests for the TLV/TV parameter decoder.

use crate::message::Decoder;
use crate::param::MAX_PARAM_DEPTH;
use crate::report::{FieldNote, FieldValue, ParamEncoding, Parameter};

fn decode(buf: &[u8]) -> (Vec<Parameter>, usize) {
    Decoder::new().decode_parameters(buf, 0, buf.len())
}

fn field<'a>(param: &'a Parameter, name: &str) -> &'a crate::report::DecodedField {
    param
        .fields
        .iter()
        .find(|f| f.name == name)
        .unwrap_or_else(|| panic!("no field named '{}'", name))
}

/// A TLV with a declared length below the 4-byte minimum is clamped to 4
/// and flagged exactly once.
#[test]
fn undersized_declared_length_is_clamped() {
    // Unknown type 500, declared length 2.
    let buf = [0x01, 0xF4, 0x00, 0x02];
    let (params, next) = decode(&buf);

    assert_eq!(params.len(), 1);
    assert_eq!(next, 4);
    let p = &params[0];
    assert_eq!(p.type_code, 500);
    assert_eq!(p.encoding, ParamEncoding::Tlv { declared_len: 2 });
    assert_eq!(p.span.offset, 0);
    assert_eq!(p.span.len, 4);
    assert_eq!(p.diagnostics.len(), 1);
    assert!(p.diagnostics[0].message.contains("claimed 2"));
}

/// A TLV claiming more bytes than remain is clamped to the remainder and
/// flagged.
#[test]
fn oversized_declared_length_is_clamped_to_remainder() {
    let buf = [0x01, 0xF4, 0x00, 100, 0xAA, 0xBB, 0xCC, 0xDD];
    let (params, next) = decode(&buf);

    assert_eq!(params.len(), 1);
    assert_eq!(next, 8);
    let p = &params[0];
    assert_eq!(p.span.len, 8);
    assert_eq!(p.diagnostics.len(), 1);
    assert!(p.diagnostics[0].message.contains("claimed 100"));
    // The clamped payload is still surfaced as opaque bytes.
    let data = field(p, "Data");
    assert_eq!(data.value, FieldValue::Bytes(vec![0xAA, 0xBB, 0xCC, 0xDD].into()));
}

/// Sibling parameters resynchronize on the declared boundary even when the
/// first parameter's type is unknown.
#[test]
fn siblings_resynchronize_after_unknown_type() {
    let buf = [
        // Unknown type 500, declared length 8, 4 payload bytes.
        0x01, 0xF4, 0x00, 0x08, 0xAA, 0xBB, 0xCC, 0xDD,
        // Loop Spec (355), declared length 8, loop count 42.
        0x01, 0x63, 0x00, 0x08, 0x00, 0x00, 0x00, 0x2A,
    ];
    let (params, next) = decode(&buf);

    assert_eq!(params.len(), 2);
    assert_eq!(next, 16);
    assert_eq!((params[0].span.offset, params[0].span.len), (0, 8));
    assert_eq!((params[1].span.offset, params[1].span.len), (8, 8));
    assert!(params[0].all_diagnostics().is_empty());
    assert!(params[1].all_diagnostics().is_empty());
    assert_eq!(field(&params[1], "Loop count").value, FieldValue::U32(42));
}

/// Every known TV type consumes exactly 1 + fixed_length(type) bytes and
/// decodes its payload big-endian.
#[test]
fn tv_fixed_length_table() {
    let payload: Vec<u8> = (1..=12).collect();
    for type_code in 1..=20u8 {
        let len = crate::layout::tv_layout(type_code).unwrap().len;
        let mut buf = vec![0x80 | type_code];
        buf.extend_from_slice(&payload[..len]);
        // Trailing sibling byte region must be untouched.
        let (params, next) = decode(&buf);

        assert_eq!(params.len(), 1, "TV type {}", type_code);
        assert_eq!(next, 1 + len, "TV type {}", type_code);
        let p = &params[0];
        assert_eq!(p.encoding, ParamEncoding::Tv);
        assert_eq!(p.span.len, 1 + len);

        // fields[0] is the type tag; fields[1] the first payload field.
        let value = &p.fields[1].value;
        match (type_code, len) {
            (18, _) => {
                assert_eq!(*value, FieldValue::U16(0x0102));
                assert_eq!(p.fields[2].value, FieldValue::U16(0x0304));
            }
            (_, 1) => assert_eq!(*value, FieldValue::U8(0x01)),
            (_, 2) => assert_eq!(*value, FieldValue::U16(0x0102)),
            (_, 4) => assert_eq!(*value, FieldValue::U32(0x01020304)),
            (_, 8) => assert_eq!(*value, FieldValue::U64(0x0102030405060708)),
            (_, 12) => assert_eq!(*value, FieldValue::Bytes(payload.clone().into())),
            other => panic!("unexpected TV length {:?}", other),
        }
    }
}

/// An unknown TV type consumes only the tag byte.
#[test]
fn unknown_tv_type_consumes_tag_only() {
    let buf = [0x80 | 0x7F, 0x01, 0x63, 0x00, 0x08, 0x00, 0x00, 0x00, 0x2A];
    let (params, _) = decode(&buf);

    assert_eq!(params.len(), 2);
    assert_eq!(params[0].span.len, 1);
    // The Loop Spec TLV right after the tag byte still decodes.
    assert_eq!(params[1].type_code, 355);
    assert!(params[1].all_diagnostics().is_empty());
}

/// A well-formed two-parameter buffer with one nested child decodes with
/// zero diagnostics and spans that exactly partition the region.
#[test]
fn well_formed_nested_round_trip() {
    let buf = [
        // GPIO Capabilities (141): 2 GPIs, 3 GPOs.
        0x00, 0x8D, 0x00, 0x08, 0x00, 0x02, 0x00, 0x03,
        // Antenna Configuration (222), antenna 1, nesting RF Receiver (223).
        0x00, 0xDE, 0x00, 0x0C, 0x00, 0x01, 0x00, 0xDF, 0x00, 0x06, 0x00, 0x05,
    ];
    let (params, next) = decode(&buf);

    assert_eq!(params.len(), 2);
    assert_eq!(next, buf.len());
    assert!(params.iter().all(|p| p.all_diagnostics().is_empty()));

    assert_eq!((params[0].span.offset, params[0].span.len), (0, 8));
    assert_eq!(field(&params[0], "Number of GPI ports").value, FieldValue::U16(2));
    assert_eq!(field(&params[0], "Number of GPO ports").value, FieldValue::U16(3));

    assert_eq!((params[1].span.offset, params[1].span.len), (8, 12));
    assert_eq!(params[1].params.len(), 1);
    let child = &params[1].params[0];
    assert_eq!(child.type_code, 223);
    assert_eq!((child.span.offset, child.span.len), (14, 6));
    assert_eq!(field(child, "Receiver sensitivity").value, FieldValue::U16(5));
}

/// Capability fields with raw value zero are annotated as "no limit" while
/// keeping the raw value.
#[test]
fn no_limit_sentinel_is_annotated() {
    let mut buf = vec![0x00, 0x8E, 0x00, 28];
    buf.push(0x80); // flags: can do survey
    buf.push(3); // max priority
    buf.extend_from_slice(&100u16.to_be_bytes()); // opspec timeout
    buf.extend_from_slice(&0u32.to_be_bytes()); // max ROSpecs: no limit
    buf.extend_from_slice(&5u32.to_be_bytes()); // max spec per ROSpec
    buf.extend_from_slice(&0u32.to_be_bytes());
    buf.extend_from_slice(&0u32.to_be_bytes());
    buf.extend_from_slice(&0u32.to_be_bytes());

    let (params, _) = decode(&buf);
    assert_eq!(params.len(), 1);
    let p = &params[0];
    assert!(p.all_diagnostics().is_empty());

    let unlimited = field(p, "Maximum number of ROSpecs");
    assert_eq!(unlimited.value, FieldValue::U32(0));
    assert_eq!(unlimited.note, Some(FieldNote::NoLimit));

    let limited = field(p, "Maximum number of spec per ROSpec");
    assert_eq!(limited.value, FieldValue::U32(5));
    assert_eq!(limited.note, None);
}

/// Flag bits sharing one byte each become their own boolean field.
#[test]
fn shared_flag_byte_decodes_each_bit() {
    let mut buf = vec![0x00, 0x8E, 0x00, 28];
    buf.push(0xA0); // survey yes, buffer warning no, client opspec yes
    buf.push(0);
    buf.extend_from_slice(&[0u8; 22]);

    let (params, _) = decode(&buf);
    let p = &params[0];
    assert_eq!(field(p, "Can do RF survey").value, FieldValue::Bool(true));
    assert_eq!(
        field(p, "Can report buffer fill warning").value,
        FieldValue::Bool(false)
    );
    assert_eq!(
        field(p, "Support client request OpSpec").value,
        FieldValue::Bool(true)
    );
}

/// A container nested deeper than the cap terminates with a depth
/// diagnostic instead of exhausting the stack.
#[test]
fn deep_nesting_terminates_with_diagnostic() {
    let depth = MAX_PARAM_DEPTH * 4;
    let mut buf = Vec::with_capacity(depth * 4);
    for i in 0..depth {
        // RO Bound Spec (178): pure container; each level's declared
        // length covers everything below it.
        let len = (4 * (depth - i)) as u16;
        buf.extend_from_slice(&[0x00, 0xB2]);
        buf.extend_from_slice(&len.to_be_bytes());
    }

    let (params, next) = decode(&buf);
    assert_eq!(next, buf.len());
    assert_eq!(params.len(), 1);
    let diags = params[0].all_diagnostics();
    assert!(
        diags.iter().any(|d| d.message.contains("nesting exceeds")),
        "expected a depth diagnostic, got {:?}",
        diags
    );
}

/// A known vendor and subtype decode the vendor schema exactly.
#[test]
fn impinj_known_subtype_decodes_fields() {
    let mut buf = vec![0x03, 0xFF, 0x00, 18];
    buf.extend_from_slice(&25882u32.to_be_bytes()); // Impinj
    buf.extend_from_slice(&28u32.to_be_bytes()); // Low Duty Cycle
    buf.extend_from_slice(&1u16.to_be_bytes()); // mode
    buf.extend_from_slice(&2000u16.to_be_bytes()); // empty field timeout
    buf.extend_from_slice(&500u16.to_be_bytes()); // field ping interval

    let (params, next) = decode(&buf);
    assert_eq!(params.len(), 1);
    assert_eq!(next, 18);
    let p = &params[0];
    assert!(p.all_diagnostics().is_empty());
    assert_eq!(p.type_name, Some("Impinj Low Duty Cycle"));

    let vendor = field(p, "Vendor ID");
    assert_eq!(vendor.value, FieldValue::U32(25882));
    assert_eq!(vendor.label, Some("Impinj"));
    assert_eq!(field(p, "Low duty cycle mode").value, FieldValue::U16(1));
    assert_eq!(field(p, "Empty field timeout").value, FieldValue::U16(2000));
    assert_eq!(field(p, "Field ping interval").value, FieldValue::U16(500));
}

/// An unrecognized vendor subtype consumes only the subtype code; the
/// remainder is reported opaque, without erroring.
#[test]
fn impinj_unknown_subtype_is_opaque() {
    let mut buf = vec![0x03, 0xFF, 0x00, 16];
    buf.extend_from_slice(&25882u32.to_be_bytes());
    buf.extend_from_slice(&9999u32.to_be_bytes()); // unknown subtype
    buf.extend_from_slice(&[0xDE, 0xAD, 0xBE, 0xEF]);

    let (params, next) = decode(&buf);
    assert_eq!(next, 16);
    let p = &params[0];
    assert!(p.all_diagnostics().is_empty());
    assert_eq!(
        field(p, "Impinj parameter subtype").value,
        FieldValue::U32(9999)
    );
    assert_eq!(
        field(p, "Data").value,
        FieldValue::Bytes(vec![0xDE, 0xAD, 0xBE, 0xEF].into())
    );
}

/// A vendor ID with no registered decoder falls back to opaque bytes.
#[test]
fn unknown_vendor_is_opaque() {
    let mut buf = vec![0x03, 0xFF, 0x00, 12];
    buf.extend_from_slice(&0x11111111u32.to_be_bytes());
    buf.extend_from_slice(&[1, 2, 3, 4]);

    let (params, next) = decode(&buf);
    assert_eq!(next, 12);
    let p = &params[0];
    assert_eq!(field(p, "Vendor ID").value, FieldValue::U32(0x11111111));
    assert_eq!(field(p, "Data").value, FieldValue::Bytes(vec![1, 2, 3, 4].into()));
}

/// When fields consume fewer bytes than declared, the mismatch is flagged
/// and the cursor still advances by the declared size.
#[test]
fn consumed_vs_claimed_mismatch_is_flagged_and_resyncs() {
    let buf = [
        // RF Receiver (223) declares 8 but its schema consumes 4 + 2.
        0x00, 0xDF, 0x00, 0x08, 0x00, 0x05, 0xEE, 0xEE,
        // GPIO Capabilities right at the declared boundary.
        0x00, 0x8D, 0x00, 0x08, 0x00, 0x01, 0x00, 0x01,
    ];
    let (params, next) = decode(&buf);

    assert_eq!(params.len(), 2);
    assert_eq!(next, 16);
    assert!(params[0]
        .diagnostics
        .iter()
        .any(|d| d.message.contains("6 bytes decoded, but 8 bytes claimed")));
    assert_eq!(params[1].type_code, 141);
    assert!(params[1].all_diagnostics().is_empty());
}

/// Length-prefixed strings decode as UTF-8 and bad claimed lengths are
/// clamped without reading out of bounds.
#[test]
fn utf8_string_fields() {
    let mut buf = vec![0x00, 0xFC, 0x00, 10, 0x00, 0x04];
    buf.extend_from_slice(b"boom");
    let (params, _) = decode(&buf);
    let p = &params[0];
    assert!(p.all_diagnostics().is_empty());
    assert_eq!(field(p, "Message").value, FieldValue::Str("boom".into()));

    // Claimed string length larger than the parameter.
    let bad = [0x00, 0xFC, 0x00, 0x06, 0x00, 0x50];
    let (params, next) = decode(&bad);
    assert_eq!(next, 6);
    assert!(params[0]
        .all_diagnostics()
        .iter()
        .any(|d| d.message.contains("invalid length of string")));
}

/// Item arrays respect their declared count and clamp overruns.
#[test]
fn item_arrays() {
    // Fixed Frequency Table (148) with two 4-byte frequencies.
    let mut buf = vec![0x00, 0x94, 0x00, 14, 0x00, 0x02];
    buf.extend_from_slice(&915_000u32.to_be_bytes());
    buf.extend_from_slice(&920_000u32.to_be_bytes());
    let (params, _) = decode(&buf);
    let p = &params[0];
    assert!(p.all_diagnostics().is_empty());
    let freqs: Vec<_> = p.fields.iter().filter(|f| f.name == "Frequency").collect();
    assert_eq!(freqs.len(), 2);
    assert_eq!(freqs[0].value, FieldValue::U32(915_000));
    assert_eq!(freqs[1].value, FieldValue::U32(920_000));

    // Count claims more items than the parameter holds.
    let bad = [0x00, 0x94, 0x00, 0x0A, 0x00, 0x50, 0x01, 0x02, 0x03, 0x04];
    let (params, next) = decode(&bad);
    assert_eq!(next, 10);
    assert!(params[0]
        .all_diagnostics()
        .iter()
        .any(|d| d.message.contains("item array overruns")));
}

/// A region too short for even a TLV header is consumed with a diagnostic.
#[test]
fn truncated_tlv_header() {
    let buf = [0x00, 0x8D, 0x00];
    let (params, next) = decode(&buf);
    assert_eq!(next, 3);
    assert_eq!(params.len(), 1);
    assert!(params[0]
        .diagnostics
        .iter()
        .any(|d| d.message.contains("truncated TLV header")));
}

/// A TV whose fixed length does not fit the remaining region is clamped.
#[test]
fn truncated_tv_parameter() {
    let buf = [0x80 | 13, 0x01, 0x02]; // EPC-96 needs 12 payload bytes
    let (params, next) = decode(&buf);
    assert_eq!(next, 3);
    assert!(params[0]
        .diagnostics
        .iter()
        .any(|d| d.message.contains("truncated TV parameter")));
}

/// Decoding arbitrary bytes terminates within the region and never panics.
#[test]
fn arbitrary_input_is_safe() {
    let dec = Decoder::new();
    let mut seed: u32 = 0x1234_5678;
    for size in 0..128usize {
        let mut buf = vec![0u8; size];
        for b in buf.iter_mut() {
            seed = seed.wrapping_mul(1_664_525).wrapping_add(1_013_904_223);
            *b = (seed >> 24) as u8;
        }
        let (_, next) = dec.decode_parameters(&buf, 0, buf.len());
        assert!(next <= buf.len());
    }
}

/// Degenerate ranges are a no-op.
#[test]
fn empty_region_decodes_to_nothing() {
    let dec = Decoder::new();
    let (params, next) = dec.decode_parameters(&[], 0, 0);
    assert!(params.is_empty());
    assert_eq!(next, 0);

    // start beyond end is clamped, not panicked on.
    let (params, _) = dec.decode_parameters(&[1, 2, 3], 7, 2);
    assert!(params.is_empty());
}
