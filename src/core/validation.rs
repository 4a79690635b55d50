// src/core/validation.rs
//
// Checks a front-end runs before handing input to the generator, which
// itself accepts anything.
use thiserror::Error;

use crate::models::{GenerationOptions, PersonalInfo};
use super::config::Config;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ValidationError {
    #[error("Please provide at least one piece of personal information")]
    NoPersonalInfo,

    #[error("Start year {start} is after end year {end}")]
    InvalidYearRange { start: i32, end: i32 },

    #[error("Year range {start}-{end} spans {span} years, the limit is {max}")]
    YearSpanTooLarge { start: i32, end: i32, span: u64, max: u32 },
}

pub type Result<T> = std::result::Result<T, ValidationError>;

pub fn validate_personal_info(info: &PersonalInfo) -> Result<()> {
    if info.is_empty() {
        return Err(ValidationError::NoPersonalInfo);
    }
    Ok(())
}

/// Reject year ranges that are inverted or too wide for `max_span`.
///
/// The range is only checked when year appending is enabled.
pub fn validate_options(options: &GenerationOptions, max_span: u32) -> Result<()> {
    if !options.append_years {
        return Ok(());
    }

    let (start, end) = (options.start_year, options.end_year);
    if start > end {
        return Err(ValidationError::InvalidYearRange { start, end });
    }

    // start <= end here, so the i64 difference is non-negative
    let span = (i64::from(end) - i64::from(start) + 1) as u64;
    if span > u64::from(max_span) {
        return Err(ValidationError::YearSpanTooLarge { start, end, span, max: max_span });
    }
    Ok(())
}

/// Run every caller-level check against the configured limits
pub fn validate_request(
    info: &PersonalInfo,
    options: &GenerationOptions,
    config: &Config,
) -> Result<()> {
    validate_personal_info(info)?;
    validate_options(options, config.max_year_span)
}
