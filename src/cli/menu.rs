// src/cli/menu.rs
use std::path::PathBuf;

use anyhow::Result;
use inquire::error::InquireError;
use inquire::{Confirm, CustomType, Password, Select, Text};

use crate::core::config::Config;
use crate::models::{GenerationOptions, PersonalInfo};
use super::handlers;

// Mutable form state owned by the menu; the core only sees snapshots of it
struct FormState {
    info: PersonalInfo,
    options: GenerationOptions,
    output: PathBuf,
}

impl FormState {
    fn new(config: &Config) -> Self {
        Self {
            info: PersonalInfo::default(),
            options: config.generation_options(),
            output: config.default_output.clone(),
        }
    }
}

// Ctrl+C and Esc end the menu instead of surfacing as errors
fn is_cancel(e: &InquireError) -> bool {
    matches!(
        e,
        InquireError::OperationCanceled | InquireError::OperationInterrupted
    )
}

pub fn run_cli_menu(config: &Config) -> Result<()> {
    println!("🦀🔐 Welcome to");
    println!("╔══════════════════════════════════════╗");
    println!("║   🦀 PASSWORD STRENGTH & WORDLISTS   ║");
    println!("╚══════════════════════════════════════╝");

    let mut state = FormState::new(config);

    loop {
        let options = vec![
            "🔍  Analyze a password",
            "📝  Generate a wordlist",
            "❌  Exit",
        ];

        let choice = match Select::new("What would you like to do?", options).prompt() {
            Ok(choice) => choice,
            Err(e) if is_cancel(&e) => break,
            Err(e) => return Err(e.into()),
        };

        let outcome = match choice {
            "🔍  Analyze a password" => analyze_menu(config),
            "📝  Generate a wordlist" => generate_menu(config, &mut state),
            _ => break,
        };

        match outcome {
            Ok(()) => {}
            Err(e) => match e.downcast_ref::<InquireError>() {
                Some(inquire_error) if is_cancel(inquire_error) => println!("↩️  Cancelled"),
                _ => println!("❌ {}", e),
            },
        }
        println!();
    }

    println!("👋 Goodbye!");
    Ok(())
}

fn analyze_menu(config: &Config) -> Result<()> {
    let password = Password::new("Enter password to analyze:")
        .with_display_mode(inquire::PasswordDisplayMode::Masked)
        .with_display_toggle_enabled()
        .without_confirmation()
        .prompt()?;

    let result = handlers::handle_analyze(&password, None, config)?;
    println!();
    handlers::print_analysis(&result);
    Ok(())
}

fn prompt_field(label: &str, current: &str) -> Result<String> {
    let mut prompt = Text::new(label);
    if !current.is_empty() {
        prompt = prompt.with_default(current);
    }
    Ok(prompt.prompt()?)
}

fn generate_menu(config: &Config, state: &mut FormState) -> Result<()> {
    println!("Personal Information (leave blank to skip)");
    state.info.first_name = prompt_field("First name:", &state.info.first_name)?;
    state.info.last_name = prompt_field("Last name:", &state.info.last_name)?;
    state.info.nickname = prompt_field("Nickname:", &state.info.nickname)?;
    state.info.pet_name = prompt_field("Pet name:", &state.info.pet_name)?;
    state.info.birthdate = Text::new("Birthdate:")
        .with_help_message("YYYY-MM-DD, DD/MM/YYYY, MM/DD/YYYY or YYYYMMDD")
        .with_default(&state.info.birthdate)
        .prompt()?;
    state.info.city = prompt_field("City:", &state.info.city)?;
    state.info.company = prompt_field("Company:", &state.info.company)?;

    println!("Generation Options");
    state.options.leet_speak = Confirm::new("Leetspeak variations?")
        .with_default(state.options.leet_speak)
        .prompt()?;
    state.options.common_suffixes = Confirm::new("Common suffixes?")
        .with_default(state.options.common_suffixes)
        .prompt()?;
    state.options.append_years = Confirm::new("Append years?")
        .with_default(state.options.append_years)
        .prompt()?;
    if state.options.append_years {
        state.options.start_year = CustomType::<i32>::new("Start year:")
            .with_default(state.options.start_year)
            .prompt()?;
        state.options.end_year = CustomType::<i32>::new("End year:")
            .with_default(state.options.end_year)
            .prompt()?;
    }
    state.options.common_patterns = Confirm::new("Common password patterns?")
        .with_default(state.options.common_patterns)
        .prompt()?;

    let output = Text::new("Export to:")
        .with_default(&state.output.to_string_lossy())
        .prompt()?;
    state.output = PathBuf::from(output);

    let summary = handlers::handle_generate(
        &state.info,
        &state.options,
        &state.output,
        config.preview_count,
        false,
        config,
    )?;
    println!();
    handlers::print_export_summary(&summary);
    Ok(())
}
