// src/models.rs
use serde::{Serialize, Deserialize};

/// Personal facts a wordlist is built from. Blank fields are ignored.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PersonalInfo {
    pub first_name: String,
    pub last_name: String,
    pub nickname: String,
    pub pet_name: String,
    pub birthdate: String,
    pub city: String,
    pub company: String,
}

impl PersonalInfo {
    /// True when no field carries anything but whitespace
    pub fn is_empty(&self) -> bool {
        self.fields().iter().all(|value| value.trim().is_empty())
    }

    // Every field, birthdate included, in declaration order
    pub fn fields(&self) -> [&str; 7] {
        [
            &self.first_name,
            &self.last_name,
            &self.nickname,
            &self.pet_name,
            &self.birthdate,
            &self.city,
            &self.company,
        ]
    }

    /// Non-blank fields, used as user inputs by estimators that penalise them
    pub fn hints(&self) -> Vec<&str> {
        self.fields()
            .into_iter()
            .map(str::trim)
            .filter(|value| !value.is_empty())
            .collect()
    }
}

// Wordlist generation options
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GenerationOptions {
    pub leet_speak: bool,
    pub common_suffixes: bool,
    pub append_years: bool,
    pub common_patterns: bool,
    pub start_year: i32,
    pub end_year: i32,
}

impl Default for GenerationOptions {
    fn default() -> Self {
        Self {
            leet_speak: true,
            common_suffixes: true,
            append_years: true,
            common_patterns: true,
            start_year: 1970,
            end_year: 2024,
        }
    }
}

impl GenerationOptions {
    /// Options with every expansion switched off, leaving only case variants
    pub fn case_only() -> Self {
        Self {
            leet_speak: false,
            common_suffixes: false,
            append_years: false,
            common_patterns: false,
            ..Self::default()
        }
    }

    /// Number of years the year-append stage iterates over
    pub fn year_count(&self) -> usize {
        if !self.append_years || self.start_year > self.end_year {
            return 0;
        }
        (self.end_year - self.start_year) as usize + 1
    }
}

/// Outcome of a password strength estimate
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnalysisResult {
    pub password: String,
    pub score: u8,
    pub feedback: Vec<String>,
    pub crack_time: String,
    pub guesses: f64,
    pub patterns: Vec<String>,
}
