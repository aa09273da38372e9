//! Decode throughput benchmark command implementation for the LLRP CLI

use anyhow::{bail, Context, Result};
use bytes::Bytes;
use std::path::Path;

use rust_llrp_common::Decoder;
use rust_llrp_net::FrameBuffer;

use crate::commands::decode::load_capture;
use crate::utils::{self, Timer};

/// Decode a capture repeatedly and report throughput.
pub fn run(file: &Path, hex: bool, iterations: usize) -> Result<()> {
    let data = load_capture(file, hex)?;

    // Pre-slice the capture so only decoding is measured.
    let mut frames: Vec<Bytes> = Vec::new();
    let mut buffer = FrameBuffer::default();
    buffer.extend(&data);
    while let Some(frame) = buffer.next_frame().context("capture cannot be framed")? {
        frames.push(frame);
    }
    if frames.is_empty() {
        bail!("no complete messages in {}", file.display());
    }

    let decoder = Decoder::new();
    let bytes_per_pass: usize = frames.iter().map(|f| f.len()).sum();

    let timer = Timer::new("decode benchmark");
    for _ in 0..iterations {
        for frame in &frames {
            decoder.decode_frame(frame)?;
        }
    }
    let elapsed = timer.elapsed();

    let total_messages = frames.len() * iterations;
    let total_bytes = bytes_per_pass * iterations;
    let secs = elapsed.as_secs_f64().max(f64::EPSILON);

    utils::print_header("Benchmark results");
    println!("Capture:    {} messages, {}", frames.len(), utils::format_bytes(bytes_per_pass));
    println!("Iterations: {}", iterations);
    println!("Elapsed:    {}", utils::format_duration(elapsed));
    println!("Rate:       {:.0} messages/s", total_messages as f64 / secs);
    println!(
        "Throughput: {}/s",
        utils::format_bytes((total_bytes as f64 / secs) as usize)
    );

    Ok(())
}
