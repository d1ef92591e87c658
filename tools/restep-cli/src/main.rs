//! Restep Command Line Tool
//!
//! Provides commands for working with REST test blocks:
//! - parse: Check a test-block file against the grammar and print the result
//! - run: Execute a test-block file against an endpoint

use anyhow::{bail, Context, Result};
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use std::sync::Arc;
use std::time::Duration;

use restep_core::{parse_test_block, ProcessorRegistry, TestRequest};
use restep_http::{ExecutorConfig, HttpTestProcessor, PROCESSOR_NAME};

#[derive(Parser)]
#[command(name = "restep")]
#[command(version)]
#[command(about = "Parse and execute REST test blocks")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Parse a test-block file without touching the network
    #[command(about = "Parse a test-block file and print the structured result")]
    Parse {
        /// Path to the test-block file
        #[arg(value_name = "FILE")]
        file: PathBuf,
    },

    /// Execute a test-block file against an endpoint
    #[command(about = "Execute a test-block file and print the normalized response")]
    Run {
        /// Path to the test-block file
        #[arg(value_name = "FILE")]
        file: PathBuf,

        /// Fully resolved target URL (no unexpanded ${...} placeholders)
        #[arg(long, short)]
        endpoint: String,

        /// Keep TLS certificate and hostname verification enabled
        #[arg(long)]
        verify_tls: bool,

        /// Give up on the round trip after this many seconds
        #[arg(long, value_name = "SECONDS")]
        timeout: Option<u64>,
    },
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "restep_core=info,restep_http=info".into()),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Parse { file } => handle_parse(&file),
        Commands::Run {
            file,
            endpoint,
            verify_tls,
            timeout,
        } => handle_run(&file, &endpoint, verify_tls, timeout),
    }
}

fn handle_parse(file: &PathBuf) -> Result<()> {
    let text = std::fs::read_to_string(file)
        .with_context(|| format!("Failed to read file: {}", file.display()))?;

    let block = parse_test_block(&text).context("Test block is malformed")?;
    println!("{}", serde_json::to_string_pretty(&block)?);

    Ok(())
}

fn handle_run(file: &PathBuf, endpoint: &str, verify_tls: bool, timeout: Option<u64>) -> Result<()> {
    let text = std::fs::read_to_string(file)
        .with_context(|| format!("Failed to read file: {}", file.display()))?;

    let config = ExecutorConfig {
        insecure_tls: !verify_tls,
        timeout: timeout.map(Duration::from_secs),
    };

    let mut registry = ProcessorRegistry::new();
    registry.register(Arc::new(HttpTestProcessor::new(config)));
    let processor = registry
        .lookup(PROCESSOR_NAME)
        .context("HTTP test processor is not registered")?;

    let response = processor.execute_test(&TestRequest::new(endpoint, text));
    registry.deregister(PROCESSOR_NAME);

    println!("{}", serde_json::to_string_pretty(&response)?);

    if response.is_empty() {
        bail!("Test step produced no usable result; see the log for the cause");
    }
    Ok(())
}
