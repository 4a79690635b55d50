// src/lib.rs
//
// Password strength analysis and personal wordlist generation.
//
// The two entry points are pure: `analysis::analyze_password` (or any
// `StrengthEstimator`) and `generators::generate_wordlist`. Validation,
// export and presentation live in `core`, `utils` and `cli`.

pub mod analysis;
pub mod cli;
pub mod core;
pub mod generators;
pub mod logging;
pub mod models;
pub mod utils;

pub use analysis::{analyze_password, estimator_for, ScorerBackend, StrengthEstimator};
pub use generators::{generate_wordlist, WordlistGenerator};
pub use models::{AnalysisResult, GenerationOptions, PersonalInfo};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
