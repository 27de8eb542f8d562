//! Command-line argument parsing for the assistant service
//!
//! Provides clap-based CLI with subcommands for serving the API and
//! building the FAQ vector index.

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// faqdesk - Retrieval-augmented FAQ assistant API
#[derive(Parser, Debug)]
#[command(name = "faqdesk")]
#[command(version = "0.1.0")]
#[command(about = "Retrieval-augmented FAQ assistant API over a user record store", long_about = None)]
pub struct Args {
    /// Configuration file path
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Listen host (overrides configuration)
    #[arg(long)]
    pub host: Option<String>,

    /// Listen port (overrides configuration)
    #[arg(long)]
    pub port: Option<u16>,

    /// Subcommand; defaults to `serve`
    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Available subcommands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Start the HTTP API server
    Serve,

    /// Embed all FAQ records and upsert them into the vector index
    Index,

    /// Display the effective configuration
    Config,
}
