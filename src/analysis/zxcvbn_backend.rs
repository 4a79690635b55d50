// src/analysis/zxcvbn_backend.rs
use zxcvbn::matching::patterns::MatchPattern;

use crate::models::AnalysisResult;
use super::heuristic::{FALLBACK_CRACK_TIME, FALLBACK_GUESSES, FEEDBACK_GOOD};
use super::StrengthEstimator;

/// Estimator backed by the zxcvbn library.
///
/// `user_inputs` are words tied to the account holder; passwords built
/// from them are scored lower.
#[derive(Debug, Clone, Default)]
pub struct ZxcvbnEstimator {
    user_inputs: Vec<String>,
}

impl ZxcvbnEstimator {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_user_inputs<I, S>(inputs: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            user_inputs: inputs.into_iter().map(Into::into).collect(),
        }
    }
}

fn pattern_name(pattern: &MatchPattern) -> &'static str {
    match pattern {
        MatchPattern::Dictionary(_) => "dictionary",
        MatchPattern::Spatial(_) => "spatial",
        MatchPattern::Repeat(_) => "repeat",
        MatchPattern::Sequence(_) => "sequence",
        MatchPattern::Regex(_) => "regex",
        MatchPattern::Date(_) => "date",
        MatchPattern::BruteForce => "bruteforce",
    }
}

impl StrengthEstimator for ZxcvbnEstimator {
    fn name(&self) -> &'static str {
        "zxcvbn"
    }

    fn estimate(&self, password: &str) -> AnalysisResult {
        let inputs: Vec<&str> = self.user_inputs.iter().map(String::as_str).collect();

        let entropy = match zxcvbn::zxcvbn(password, &inputs) {
            Ok(entropy) => entropy,
            Err(e) => {
                // zxcvbn refuses blank passwords
                log::debug!("zxcvbn could not score password: {}", e);
                return AnalysisResult {
                    password: password.to_string(),
                    score: 0,
                    feedback: vec![e.to_string()],
                    crack_time: FALLBACK_CRACK_TIME.to_string(),
                    guesses: FALLBACK_GUESSES,
                    patterns: Vec::new(),
                };
            }
        };

        let mut feedback = Vec::new();
        if let Some(fb) = entropy.feedback() {
            if let Some(warning) = fb.warning() {
                feedback.push(warning.to_string());
            }
            feedback.extend(fb.suggestions().iter().map(ToString::to_string));
        }
        if feedback.is_empty() {
            feedback.push(FEEDBACK_GOOD.to_string());
        }

        AnalysisResult {
            password: password.to_string(),
            score: entropy.score(),
            feedback,
            crack_time: entropy
                .crack_times()
                .offline_fast_hashing_1e10_per_second()
                .to_string(),
            guesses: entropy.guesses() as f64,
            patterns: entropy
                .sequence()
                .iter()
                .map(|m| pattern_name(&m.pattern).to_string())
                .collect(),
        }
    }
}
