// src/analysis/mod.rs
use std::fmt;
use std::str::FromStr;

use serde::{Serialize, Deserialize};

use crate::core::config::ConfigError;
use crate::models::AnalysisResult;

pub mod heuristic;
#[cfg(feature = "zxcvbn")]
pub mod zxcvbn_backend;

pub use heuristic::HeuristicEstimator;
#[cfg(feature = "zxcvbn")]
pub use zxcvbn_backend::ZxcvbnEstimator;

/// A password strength estimation backend.
///
/// Implementations must be pure: the same password always yields the same
/// result and the score stays within `0..=4`.
pub trait StrengthEstimator {
    /// Short backend identifier, as accepted by [`ScorerBackend::from_str`]
    fn name(&self) -> &'static str;

    fn estimate(&self, password: &str) -> AnalysisResult;
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ScorerBackend {
    #[default]
    Heuristic,
    Zxcvbn,
}

impl ScorerBackend {
    /// Whether this build can construct the backend
    pub fn is_available(&self) -> bool {
        match self {
            ScorerBackend::Heuristic => true,
            ScorerBackend::Zxcvbn => cfg!(feature = "zxcvbn"),
        }
    }
}

impl fmt::Display for ScorerBackend {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ScorerBackend::Heuristic => write!(f, "heuristic"),
            ScorerBackend::Zxcvbn => write!(f, "zxcvbn"),
        }
    }
}

impl FromStr for ScorerBackend {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "heuristic" | "custom" => Ok(ScorerBackend::Heuristic),
            "zxcvbn" => Ok(ScorerBackend::Zxcvbn),
            other => Err(ConfigError::UnknownBackend(other.to_string())),
        }
    }
}

/// Build the estimator for a configured backend.
///
/// `hints` are personal words the account holder might reuse; only
/// backends that understand them make use of them.
pub fn estimator_for(
    backend: ScorerBackend,
    #[cfg_attr(not(feature = "zxcvbn"), allow(unused_variables))]
    hints: &[&str],
) -> Result<Box<dyn StrengthEstimator>, ConfigError> {
    match backend {
        ScorerBackend::Heuristic => Ok(Box::new(HeuristicEstimator)),
        #[cfg(feature = "zxcvbn")]
        ScorerBackend::Zxcvbn => Ok(Box::new(ZxcvbnEstimator::with_user_inputs(
            hints.iter().copied(),
        ))),
        #[cfg(not(feature = "zxcvbn"))]
        ScorerBackend::Zxcvbn => Err(ConfigError::BackendUnavailable(backend.to_string())),
    }
}

/// Score a password with the default heuristic backend
pub fn analyze_password(password: &str) -> AnalysisResult {
    HeuristicEstimator.estimate(password)
}
