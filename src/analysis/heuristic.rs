// src/analysis/heuristic.rs
use crate::models::AnalysisResult;
use super::StrengthEstimator;

const COMMON_PATTERNS: &[&str] = &["123", "abc", "qwerty", "password", "admin"];

// Alphabet sizes for upper, lower, digit and special characters
const UPPER_SET: u32 = 26;
const LOWER_SET: u32 = 26;
const DIGIT_SET: u32 = 10;
const SPECIAL_SET: u32 = 32;

// Guess count reported when there is nothing to estimate from
pub const FALLBACK_GUESSES: f64 = 1000.0;

// Crack time label for the lowest entropy band
pub const FALLBACK_CRACK_TIME: &str = "minutes";

pub const FEEDBACK_TOO_SHORT: &str = "Password should be at least 8 characters long";
pub const FEEDBACK_CHARACTER_CLASSES: &str =
    "Use a mix of uppercase, lowercase, numbers, and special characters";
pub const FEEDBACK_COMMON_PATTERNS: &str = "Avoid common patterns and words";
pub const FEEDBACK_GOOD: &str = "Good password practices";

/// Rule-based estimator built from length and character-class checks.
///
/// Scoring:
/// - `+2` for 12 or more characters, `+1` for 8 to 11
/// - `+1` when at least three character classes are present
/// - `-1` (never below zero) when a well-known pattern is embedded
///
/// The crack time label and guess count come from a rough entropy figure:
/// length multiplied by the bit length of the alphabet size.
#[derive(Debug, Clone, Copy, Default)]
pub struct HeuristicEstimator;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
struct CharClasses {
    upper: bool,
    lower: bool,
    digit: bool,
    special: bool,
}

impl CharClasses {
    fn of(password: &str) -> Self {
        let mut classes = CharClasses::default();
        for c in password.chars() {
            if c.is_uppercase() {
                classes.upper = true;
            }
            if c.is_lowercase() {
                classes.lower = true;
            }
            if c.is_ascii_digit() {
                classes.digit = true;
            }
            if !c.is_alphanumeric() {
                classes.special = true;
            }
        }
        classes
    }

    fn count(&self) -> usize {
        [self.upper, self.lower, self.digit, self.special]
            .iter()
            .filter(|present| **present)
            .count()
    }

    fn alphabet_size(&self) -> u32 {
        let mut size = 0;
        if self.upper { size += UPPER_SET; }
        if self.lower { size += LOWER_SET; }
        if self.digit { size += DIGIT_SET; }
        if self.special { size += SPECIAL_SET; }
        size
    }
}

// Number of bits needed to represent `n`
fn bit_length(n: u32) -> u32 {
    u32::BITS - n.leading_zeros()
}

/// Entropy proxy: character count times the bit length of the alphabet size
pub fn entropy_estimate(password: &str) -> u64 {
    let alphabet = CharClasses::of(password).alphabet_size();
    if alphabet == 0 {
        return 0;
    }
    password.chars().count() as u64 * u64::from(bit_length(alphabet))
}

/// Map an entropy estimate to a coarse crack time label
pub fn crack_time_label(entropy: u64) -> &'static str {
    match entropy {
        e if e > 100 => "centuries",
        e if e > 80 => "years",
        e if e > 60 => "months",
        e if e > 40 => "days",
        e if e > 20 => "hours",
        _ => FALLBACK_CRACK_TIME,
    }
}

pub fn guesses_for(entropy: u64) -> f64 {
    if entropy > 0 {
        10f64.powf(entropy as f64 / 10.0)
    } else {
        FALLBACK_GUESSES
    }
}

impl StrengthEstimator for HeuristicEstimator {
    fn name(&self) -> &'static str {
        "heuristic"
    }

    fn estimate(&self, password: &str) -> AnalysisResult {
        let mut score: i32 = 0;
        let mut feedback = Vec::new();

        let length = password.chars().count();
        if length >= 12 {
            score += 2;
        } else if length >= 8 {
            score += 1;
        } else {
            feedback.push(FEEDBACK_TOO_SHORT.to_string());
        }

        let classes = CharClasses::of(password);
        if classes.count() >= 3 {
            score += 1;
        } else {
            feedback.push(FEEDBACK_CHARACTER_CLASSES.to_string());
        }

        let lowered = password.to_lowercase();
        if COMMON_PATTERNS.iter().any(|pattern| lowered.contains(pattern)) {
            score = (score - 1).max(0);
            feedback.push(FEEDBACK_COMMON_PATTERNS.to_string());
        }

        let entropy = entropy_estimate(password);
        if feedback.is_empty() {
            feedback.push(FEEDBACK_GOOD.to_string());
        }

        AnalysisResult {
            password: password.to_string(),
            score: score.clamp(0, 4) as u8,
            feedback,
            crack_time: crack_time_label(entropy).to_string(),
            guesses: guesses_for(entropy),
            patterns: vec!["custom_analysis".to_string()],
        }
    }
}
