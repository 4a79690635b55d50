// src/cli/mod.rs
use clap::Parser;

pub mod commands;
pub mod handlers;
pub mod menu;

pub use commands::{CliCommand, GenerateArgs};

#[derive(Parser, Debug)]
#[command(
    name = "passaudit",
    author,
    version,
    about = "Password strength analyzer & personal wordlist generator",
    long_about = None
)]
pub struct Args {
    /// Enable debug logging
    #[arg(long, short, global = true)]
    pub verbose: bool,

    /// Command to execute (interactive menu when omitted)
    #[command(subcommand)]
    pub command: Option<CliCommand>,
}
