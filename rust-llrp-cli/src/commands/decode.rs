//! Capture decoding command implementation for the LLRP CLI

use anyhow::{Context, Result};
use log::{info, warn};
use std::fs;
use std::path::Path;

use rust_llrp_common::Decoder;
use rust_llrp_net::FrameBuffer;

use crate::render;
use crate::utils;

/// Load a capture file as raw frame bytes.
pub fn load_capture(file: &Path, hex: bool) -> Result<Vec<u8>> {
    if hex {
        let text = fs::read_to_string(file)
            .with_context(|| format!("failed to read {}", file.display()))?;
        utils::parse_hex(&text).with_context(|| format!("bad hex in {}", file.display()))
    } else {
        fs::read(file).with_context(|| format!("failed to read {}", file.display()))
    }
}

/// Decode every framed message in a capture file and print it.
pub fn run(file: &Path, hex: bool, json: bool) -> Result<()> {
    let data = load_capture(file, hex)?;
    info!("decoding {} from {}", utils::format_bytes(data.len()), file.display());

    let decoder = Decoder::new();
    let mut frames = FrameBuffer::default();
    frames.extend(&data);

    let mut messages = 0usize;
    let mut anomalies = 0usize;
    while let Some(frame) = frames.next_frame().context("capture cannot be framed")? {
        let msg = decoder
            .decode_frame(&frame)
            .context("failed to decode framed message")?;
        anomalies += msg.all_diagnostics().len();
        if json {
            println!("{}", serde_json::to_string_pretty(&msg)?);
        } else {
            print!("{}", render::render_message(&msg));
        }
        messages += 1;
    }

    if frames.pending() > 0 {
        warn!(
            "{} trailing bytes do not form a complete message",
            frames.pending()
        );
    }

    info!("decoded {} messages, {} anomalies", messages, anomalies);
    Ok(())
}
