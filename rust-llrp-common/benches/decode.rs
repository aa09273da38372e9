use criterion::{black_box, criterion_group, criterion_main, Criterion};
use rust_llrp_common::{Decoder, HEADER_LEN};

/// A representative RO_ACCESS_REPORT: one Tag Report Data container
/// holding an EPC-96 and a few TV metrics, the hot path of a busy reader.
fn build_report_frame() -> Vec<u8> {
    let mut report = Vec::new();
    report.push(0x80 | 13); // EPC-96
    report.extend_from_slice(&[0x30, 0x08, 0x33, 0xB2, 0xDD, 0xD9, 0x01, 0x40, 0x35, 0x05, 0x00, 0x00]);
    report.extend_from_slice(&[0x81, 0x00, 0x01]); // Antenna ID
    report.extend_from_slice(&[0x86, 0xC8]); // Peak RSSI
    report.extend_from_slice(&[0x88, 0x00, 0x05]); // Tag Seen Count

    let mut body = vec![0x00, 0xF0]; // Tag Report Data (240)
    body.extend_from_slice(&((4 + report.len()) as u16).to_be_bytes());
    body.extend_from_slice(&report);

    let mut frame = Vec::new();
    let word: u16 = (1 << 10) | 61; // RO_ACCESS_REPORT
    frame.extend_from_slice(&word.to_be_bytes());
    frame.extend_from_slice(&((HEADER_LEN + body.len()) as u32).to_be_bytes());
    frame.extend_from_slice(&0x1234u32.to_be_bytes());
    frame.extend_from_slice(&body);
    frame
}

fn bench_decode(c: &mut Criterion) {
    let decoder = Decoder::new();
    let frame = build_report_frame();

    c.bench_function("decode_ro_access_report", |b| {
        b.iter(|| decoder.decode_frame(black_box(&frame)).unwrap())
    });
}

criterion_group!(benches, bench_decode);
criterion_main!(benches);
