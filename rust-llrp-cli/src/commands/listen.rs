//! Live reader decoding command implementation for the LLRP CLI

use anyhow::{Context, Result};
use log::info;

use rust_llrp_net::{LlrpSession, SessionOptions, LLRP_PORT};

use crate::render;
use crate::utils;

/// Connect to a reader and decode messages as they arrive.
pub async fn run(
    addr: String,
    count: Option<usize>,
    timeout_ms: Option<u64>,
    json: bool,
) -> Result<()> {
    let addr = if addr.contains(':') {
        addr
    } else {
        format!("{}:{}", addr, LLRP_PORT)
    };

    let options = SessionOptions {
        read_timeout_ms: timeout_ms,
        ..Default::default()
    };

    println!("Connecting to {}...", addr);
    let mut session = LlrpSession::connect(addr.as_str(), options)
        .await
        .context("failed to connect to reader")?;
    println!("Connected to {}", session.peer_addr());

    let mut seen = 0usize;
    while let Some(msg) = session.next_message().await? {
        if json {
            println!("{}", serde_json::to_string_pretty(&msg)?);
        } else {
            print!("{}", render::render_message(&msg));
        }
        seen += 1;
        if count.is_some_and(|limit| seen >= limit) {
            break;
        }
    }

    let metrics = session.metrics();
    utils::print_header("Session summary");
    println!("Messages decoded: {}", seen);
    println!(
        "Bytes received:   {}",
        utils::format_bytes(metrics.bytes_received.value() as usize)
    );
    println!("Anomalies:        {}", metrics.diagnostics_emitted.value());

    info!("closing session to {}", addr);
    session.close().await?;
    Ok(())
}
