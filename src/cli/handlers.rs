// src/cli/handlers.rs
use std::fs::File;
use std::io::BufReader;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use console::style;

use crate::analysis::{estimator_for, ScorerBackend};
use crate::core::config::Config;
use crate::core::validation::validate_request;
use crate::generators::WordlistGenerator;
use crate::models::{AnalysisResult, GenerationOptions, PersonalInfo};
use crate::utils;
use super::commands::GenerateArgs;

/// What a generate run wrote and where
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExportSummary {
    pub path: PathBuf,
    pub word_count: usize,
    pub streamed: bool,
    pub preview: Vec<String>,
}

// Handlers for CLI commands
pub fn handle_analyze(
    password: &str,
    backend: Option<ScorerBackend>,
    config: &Config,
) -> Result<AnalysisResult> {
    let backend = backend.unwrap_or(config.scorer_backend);
    let estimator = estimator_for(backend, &[])?;
    log::debug!("Scoring password with {} backend", estimator.name());
    Ok(estimator.estimate(password))
}

pub fn print_analysis(result: &AnalysisResult) {
    let score = format!("{}/4", result.score);
    let score = match result.score {
        0 | 1 => style(score).red().bold(),
        2 => style(score).yellow().bold(),
        _ => style(score).green().bold(),
    };

    println!("Password Analysis Results:");
    println!("Strength Score: {} ({})", score, utils::strength_label(result.score));
    println!("Estimated Crack Time: {}", result.crack_time);
    println!("Guesses Required: {}", utils::format_guesses(result.guesses));
    println!("Patterns Detected: {}", result.patterns.join(", "));
    println!("\nFeedback:");
    for feedback in &result.feedback {
        println!("- {}", feedback);
    }
}

pub fn print_analysis_json(result: &AnalysisResult) -> Result<()> {
    println!("{}", serde_json::to_string_pretty(result)?);
    Ok(())
}

fn load_profile(path: &Path) -> Result<PersonalInfo> {
    let file = File::open(path)
        .with_context(|| format!("Failed to open profile {}", path.display()))?;
    serde_json::from_reader(BufReader::new(file))
        .with_context(|| format!("Invalid profile {}", path.display()))
}

/// Merge the optional profile file with the command line fields
pub fn personal_info_from_args(args: &GenerateArgs) -> Result<PersonalInfo> {
    let mut info = match &args.profile {
        Some(path) => load_profile(path)?,
        None => PersonalInfo::default(),
    };

    let overrides = [
        (&args.first_name, &mut info.first_name),
        (&args.last_name, &mut info.last_name),
        (&args.nickname, &mut info.nickname),
        (&args.pet_name, &mut info.pet_name),
        (&args.birthdate, &mut info.birthdate),
        (&args.city, &mut info.city),
        (&args.company, &mut info.company),
    ];
    for (flag, field) in overrides {
        if let Some(value) = flag {
            *field = value.clone();
        }
    }

    Ok(info)
}

pub fn options_from_args(args: &GenerateArgs, config: &Config) -> GenerationOptions {
    let mut options = config.generation_options();
    options.leet_speak = !args.no_leet;
    options.common_suffixes = !args.no_suffixes;
    options.append_years = !args.no_years;
    options.common_patterns = !args.no_patterns;
    if let Some(start) = args.start_year {
        options.start_year = start;
    }
    if let Some(end) = args.end_year {
        options.end_year = end;
    }
    options
}

/// Validate, generate and export a wordlist.
///
/// Falls back to streaming export when forced or when the size estimate
/// exceeds the configured word budget; streamed output is not sorted.
pub fn handle_generate(
    info: &PersonalInfo,
    options: &GenerationOptions,
    output: &Path,
    preview: usize,
    force_stream: bool,
    config: &Config,
) -> Result<ExportSummary> {
    validate_request(info, options, config)?;

    let generator = WordlistGenerator::new(info, options);
    let estimate = generator.estimate_size();
    log::debug!("Estimated wordlist size: {}", estimate);

    if force_stream || estimate > config.word_budget {
        if !force_stream {
            log::warn!(
                "Estimated {} words exceeds budget of {}, streaming unsorted output",
                estimate,
                config.word_budget
            );
        }
        let mut preview_words = Vec::with_capacity(preview);
        let words = generator.stream().inspect(|word| {
            if preview_words.len() < preview {
                preview_words.push(word.clone());
            }
        });
        let word_count = utils::write_wordlist_stream(output, words)
            .with_context(|| format!("Failed to export wordlist to {}", output.display()))?;
        return Ok(ExportSummary {
            path: output.to_path_buf(),
            word_count,
            streamed: true,
            preview: preview_words,
        });
    }

    let words = generator.sorted();
    let word_count = utils::write_wordlist(output, &words)
        .with_context(|| format!("Failed to export wordlist to {}", output.display()))?;

    Ok(ExportSummary {
        path: output.to_path_buf(),
        word_count,
        streamed: false,
        preview: words.into_iter().take(preview).collect(),
    })
}

pub fn print_export_summary(summary: &ExportSummary) {
    if !summary.preview.is_empty() {
        println!("Preview:");
        for word in &summary.preview {
            println!("  {}", word);
        }
        println!();
    }

    println!("Wordlist generated with {} words", utils::format_number(summary.word_count as u64));
    println!("Saved to: {}", summary.path.display());
    if summary.streamed {
        println!("{}", style("Large wordlist was streamed to disk without length ordering").yellow());
    }

    if let Ok(metadata) = std::fs::metadata(&summary.path) {
        println!("File size: {}", utils::format_bytes(metadata.len()));
    }
    println!("\nUsage with cracking tools:");
    println!("- Hashcat: hashcat -a 0 -m <hash_type> <hash_file> {}", summary.path.display());
    println!("- John: john --wordlist={} <hash_file>", summary.path.display());
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::generators::generate_wordlist;

    fn ann() -> PersonalInfo {
        PersonalInfo {
            first_name: "Ann".to_string(),
            ..PersonalInfo::default()
        }
    }

    #[test]
    fn test_handle_analyze_default_backend() {
        let result = handle_analyze("abc", None, &Config::default()).unwrap();
        assert_eq!(result.score, 0);
        assert_eq!(result.patterns, vec!["custom_analysis".to_string()]);
    }

    #[test]
    fn test_options_from_args() {
        let args = GenerateArgs {
            no_leet: true,
            start_year: Some(2000),
            ..GenerateArgs::default()
        };
        let options = options_from_args(&args, &Config::default());
        assert!(!options.leet_speak);
        assert!(options.common_suffixes);
        assert_eq!(options.start_year, 2000);
        assert_eq!(options.end_year, 2024);
    }

    #[test]
    fn test_profile_with_overrides() {
        let dir = tempfile::tempdir().unwrap();
        let profile = dir.path().join("profile.json");
        std::fs::write(&profile, r#"{"first_name": "Ann", "city": "Oslo"}"#).unwrap();

        let args = GenerateArgs {
            profile: Some(profile),
            city: Some("Bergen".to_string()),
            ..GenerateArgs::default()
        };
        let info = personal_info_from_args(&args).unwrap();
        assert_eq!(info.first_name, "Ann");
        assert_eq!(info.city, "Bergen");
    }

    #[test]
    fn test_generate_rejects_empty_info() {
        let dir = tempfile::tempdir().unwrap();
        let result = handle_generate(
            &PersonalInfo::default(),
            &GenerationOptions::default(),
            &dir.path().join("out.txt"),
            0,
            false,
            &Config::default(),
        );
        assert!(result.is_err());
        assert!(!dir.path().join("out.txt").exists());
    }

    #[test]
    fn test_generate_exports_sorted_list() {
        let dir = tempfile::tempdir().unwrap();
        let output = dir.path().join("out.txt");
        let options = GenerationOptions::case_only();
        let summary =
            handle_generate(&ann(), &options, &output, 2, false, &Config::default()).unwrap();

        assert!(!summary.streamed);
        assert_eq!(summary.word_count, 3);
        assert_eq!(summary.preview, vec!["Ann", "ann"]);
        assert_eq!(utils::read_wordlist(&output).unwrap(), vec!["Ann", "ann", "ANN"]);
    }

    #[test]
    fn test_generate_streams_over_budget() {
        let dir = tempfile::tempdir().unwrap();
        let output = dir.path().join("out.txt");
        let config = Config {
            word_budget: 10,
            ..Config::default()
        };
        let options = GenerationOptions {
            start_year: 2000,
            end_year: 2010,
            ..GenerationOptions::default()
        };

        let summary = handle_generate(&ann(), &options, &output, 5, false, &config).unwrap();
        assert!(summary.streamed);
        assert_eq!(summary.preview.len(), 5);

        let streamed: std::collections::HashSet<String> =
            utils::read_wordlist(&output).unwrap().into_iter().collect();
        let eager: std::collections::HashSet<String> =
            generate_wordlist(&ann(), &options).into_iter().collect();
        assert_eq!(streamed, eager);
    }
}
