//! CLI module for the classify gateway

pub mod serve;

use clap::{Parser, Subcommand};

/// Classify Gateway - text classification with pluggable providers
#[derive(Parser)]
#[command(name = "classify-gateway")]
#[command(version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand)]
pub enum Command {
    /// Run the API server
    Serve,
}
