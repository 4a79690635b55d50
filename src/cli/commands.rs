// src/cli/commands.rs
use std::path::PathBuf;
use clap::{Args as ClapArgs, Subcommand};

use crate::analysis::ScorerBackend;

#[derive(Subcommand, Debug)]
pub enum CliCommand {
    /// Analyze password strength
    Analyze {
        /// Password to analyze
        #[arg(required = true)]
        password: String,

        /// Print the result as JSON
        #[arg(long)]
        json: bool,

        /// Scoring backend (heuristic or zxcvbn)
        #[arg(long, short)]
        backend: Option<ScorerBackend>,
    },

    /// Generate a wordlist from personal information
    Generate(GenerateArgs),

    /// Run the interactive menu
    Interactive,
}

#[derive(ClapArgs, Debug, Default)]
pub struct GenerateArgs {
    /// First name for wordlist
    #[arg(long)]
    pub first_name: Option<String>,

    /// Last name for wordlist
    #[arg(long)]
    pub last_name: Option<String>,

    /// Nickname for wordlist
    #[arg(long)]
    pub nickname: Option<String>,

    /// Pet name for wordlist
    #[arg(long)]
    pub pet_name: Option<String>,

    /// Birthdate (YYYY-MM-DD, DD/MM/YYYY, MM/DD/YYYY or YYYYMMDD)
    #[arg(long)]
    pub birthdate: Option<String>,

    /// City for wordlist
    #[arg(long)]
    pub city: Option<String>,

    /// Company for wordlist
    #[arg(long)]
    pub company: Option<String>,

    /// JSON file with personal information; flags override its fields
    #[arg(long)]
    pub profile: Option<PathBuf>,

    /// Skip leetspeak variations
    #[arg(long)]
    pub no_leet: bool,

    /// Skip common suffixes
    #[arg(long)]
    pub no_suffixes: bool,

    /// Skip year appending
    #[arg(long)]
    pub no_years: bool,

    /// Skip common password patterns
    #[arg(long)]
    pub no_patterns: bool,

    /// First year to append
    #[arg(long)]
    pub start_year: Option<i32>,

    /// Last year to append
    #[arg(long)]
    pub end_year: Option<i32>,

    /// Output filename
    #[arg(long, short)]
    pub output: Option<PathBuf>,

    /// Number of words to preview after generation
    #[arg(long)]
    pub preview: Option<usize>,

    /// Write words as they are produced instead of sorting them first
    #[arg(long)]
    pub stream: bool,
}
