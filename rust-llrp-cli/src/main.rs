use anyhow::Result;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

mod commands;
mod render;
mod utils;

/// LLRP decoder command line interface
#[derive(Parser)]
#[clap(author, version, about)]
struct Cli {
    /// Sets the level of verbosity
    #[clap(short, long, global = true)]
    verbose: bool,

    /// Subcommand to execute
    #[clap(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Decode a capture file of framed LLRP messages
    Decode {
        /// Input file (raw binary frames, or hex text with --hex)
        file: PathBuf,

        /// Treat the input as hex text (whitespace and ':' separators allowed)
        #[clap(long)]
        hex: bool,

        /// Emit decoded messages as JSON instead of a tree
        #[clap(long)]
        json: bool,
    },

    /// Connect to a reader and decode live traffic
    Listen {
        /// Reader address, host or host:port (default port 5084)
        addr: String,

        /// Stop after this many messages
        #[clap(short, long)]
        count: Option<usize>,

        /// Per-message read timeout in milliseconds
        #[clap(short, long)]
        timeout: Option<u64>,

        /// Emit decoded messages as JSON instead of a tree
        #[clap(long)]
        json: bool,
    },

    /// Measure decode throughput over a capture file
    Bench {
        /// Input file (raw binary frames, or hex text with --hex)
        file: PathBuf,

        /// Treat the input as hex text
        #[clap(long)]
        hex: bool,

        /// Number of passes over the capture
        #[clap(short, long, default_value = "1000")]
        iterations: usize,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    // Parse command line arguments
    let cli = Cli::parse();

    // Initialize logging
    env_logger::Builder::from_env(
        env_logger::Env::default().default_filter_or(if cli.verbose { "debug" } else { "info" }),
    )
    .init();

    // Execute the specified command
    match cli.command {
        Commands::Decode { file, hex, json } => {
            commands::decode::run(&file, hex, json)?;
        }
        Commands::Listen {
            addr,
            count,
            timeout,
            json,
        } => {
            commands::listen::run(addr, count, timeout, json).await?;
        }
        Commands::Bench {
            file,
            hex,
            iterations,
        } => {
            commands::bench::run(&file, hex, iterations)?;
        }
    }

    Ok(())
}
