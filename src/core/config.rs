// src/core/config.rs
use std::env;
use std::path::PathBuf;
use log::LevelFilter;
use thiserror::Error;

use crate::analysis::ScorerBackend;
use crate::models::GenerationOptions;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("Unknown scoring backend '{0}' (expected 'heuristic' or 'zxcvbn')")]
    UnknownBackend(String),

    #[error("Scoring backend '{0}' is not available in this build")]
    BackendUnavailable(String),
}

// Configuration for the analyzer and wordlist generator
#[derive(Debug, Clone)]
pub struct Config {
    // Scoring
    pub scorer_backend: ScorerBackend,

    // Wordlist Generation
    pub default_start_year: i32,
    pub default_end_year: i32,
    pub max_year_span: u32,
    pub word_budget: usize,

    // Export
    pub default_output: PathBuf,
    pub preview_count: usize,

    // Logging
    pub log_level: LevelFilter,
    pub log_file: Option<PathBuf>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            // Scoring
            scorer_backend: ScorerBackend::Heuristic,

            // Wordlist Generation
            default_start_year: 1970,
            default_end_year: 2024,
            max_year_span: 200,
            word_budget: 5_000_000,

            // Export
            default_output: PathBuf::from("wordlist.txt"),
            preview_count: 50,

            // Logging
            log_level: LevelFilter::Info,
            log_file: None,
        }
    }
}

impl Config {
    // Load configuration from environment variables
    pub fn load() -> Self {
        let mut config = Config::default();

        // Scoring
        if let Ok(backend) = env::var("SCORER_BACKEND") {
            match backend.parse::<ScorerBackend>() {
                Ok(parsed) if parsed.is_available() => config.scorer_backend = parsed,
                Ok(parsed) => log::warn!("Scoring backend '{}' not compiled in, using heuristic", parsed),
                Err(e) => log::warn!("{}, using heuristic", e),
            }
        }

        // Wordlist Generation
        if let Ok(val) = env::var("DEFAULT_START_YEAR") {
            if let Ok(year) = val.parse() {
                config.default_start_year = year;
            }
        }

        if let Ok(val) = env::var("DEFAULT_END_YEAR") {
            if let Ok(year) = val.parse() {
                config.default_end_year = year;
            }
        }

        if let Ok(val) = env::var("MAX_YEAR_SPAN") {
            if let Ok(span) = val.parse() {
                config.max_year_span = span;
            }
        }

        if let Ok(val) = env::var("WORD_BUDGET") {
            match val.parse() {
                Ok(budget) => config.word_budget = budget,
                Err(_) => log::warn!("Ignoring invalid WORD_BUDGET '{}'", val),
            }
        }

        // Export
        if let Ok(path) = env::var("DEFAULT_OUTPUT") {
            if !path.trim().is_empty() {
                config.default_output = PathBuf::from(path);
            }
        }

        if let Ok(val) = env::var("PREVIEW_COUNT") {
            if let Ok(count) = val.parse() {
                config.preview_count = count;
            }
        }

        // Logging
        if let Ok(level) = env::var("LOG_LEVEL") {
            if let Some(parsed) = parse_level(&level) {
                config.log_level = parsed;
            }
        }

        if let Ok(file) = env::var("LOG_FILE") {
            if !file.trim().is_empty() {
                config.log_file = Some(PathBuf::from(file));
            }
        }

        config
    }

    /// Generation options seeded with the configured year range
    pub fn generation_options(&self) -> GenerationOptions {
        GenerationOptions {
            start_year: self.default_start_year,
            end_year: self.default_end_year,
            ..GenerationOptions::default()
        }
    }
}

fn parse_level(level: &str) -> Option<LevelFilter> {
    match level.to_lowercase().as_str() {
        "off" => Some(LevelFilter::Off),
        "error" => Some(LevelFilter::Error),
        "warn" => Some(LevelFilter::Warn),
        "info" => Some(LevelFilter::Info),
        "debug" => Some(LevelFilter::Debug),
        "trace" => Some(LevelFilter::Trace),
        _ => None,
    }
}
