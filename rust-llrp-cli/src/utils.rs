//! Utility functions for the LLRP CLI

use anyhow::{bail, Result};
use log::info;
use std::time::{Duration, Instant};

/// Parse hex text into bytes, tolerating whitespace and ':'/',' separators.
pub fn parse_hex(text: &str) -> Result<Vec<u8>> {
    let mut out = Vec::with_capacity(text.len() / 2);
    let mut high: Option<u8> = None;

    for c in text.chars() {
        if c.is_whitespace() || c == ':' || c == ',' {
            continue;
        }
        let Some(digit) = c.to_digit(16) else {
            bail!("invalid hex character '{}'", c);
        };
        match high.take() {
            None => high = Some(digit as u8),
            Some(h) => out.push((h << 4) | digit as u8),
        }
    }

    if high.is_some() {
        bail!("odd number of hex digits");
    }
    Ok(out)
}

/// Format a duration as a human-readable string
pub fn format_duration(duration: Duration) -> String {
    let total_secs = duration.as_secs();

    if total_secs < 60 {
        format!("{}.{:03}s", total_secs, duration.subsec_millis())
    } else if total_secs < 3600 {
        let mins = total_secs / 60;
        let secs = total_secs % 60;
        format!("{}m {}s", mins, secs)
    } else {
        let hours = total_secs / 3600;
        let mins = (total_secs % 3600) / 60;
        let secs = total_secs % 60;
        format!("{}h {}m {}s", hours, mins, secs)
    }
}

/// Format a byte size as a human-readable string
pub fn format_bytes(bytes: usize) -> String {
    const KB: usize = 1024;
    const MB: usize = KB * 1024;
    const GB: usize = MB * 1024;

    if bytes < KB {
        format!("{} B", bytes)
    } else if bytes < MB {
        format!("{:.2} KB", bytes as f64 / KB as f64)
    } else if bytes < GB {
        format!("{:.2} MB", bytes as f64 / MB as f64)
    } else {
        format!("{:.2} GB", bytes as f64 / GB as f64)
    }
}

/// Simple timer for measuring operations
pub struct Timer {
    start: Instant,
    operation: String,
}

impl Timer {
    /// Create a new timer for the specified operation
    pub fn new(operation: &str) -> Self {
        info!("Starting operation: {}", operation);
        Self {
            start: Instant::now(),
            operation: operation.to_string(),
        }
    }

    /// Measure the elapsed time
    pub fn elapsed(&self) -> Duration {
        self.start.elapsed()
    }
}

impl Drop for Timer {
    fn drop(&mut self) {
        info!(
            "Operation '{}' completed in {}",
            self.operation,
            format_duration(self.elapsed())
        );
    }
}

/// Print a section header in the CLI output
pub fn print_header(title: &str) {
    let separator = "=".repeat(title.len());
    println!("\n{}", title);
    println!("{}", separator);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hex_parsing_accepts_separators() {
        assert_eq!(parse_hex("0102 03:04,05\n06").unwrap(), vec![1, 2, 3, 4, 5, 6]);
        assert!(parse_hex("0g").is_err());
        assert!(parse_hex("012").is_err());
    }
}
