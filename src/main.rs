use std::path::Path;
use std::process::ExitCode;

use anyhow::Result;
use clap::Parser;

use passaudit::cli::{self, handlers, Args, CliCommand};
use passaudit::core::config::Config;
use passaudit::logging;

fn run(args: Args, config: &Config) -> Result<()> {
    match args.command {
        Some(CliCommand::Analyze { password, json, backend }) => {
            let result = handlers::handle_analyze(&password, backend, config)?;
            if json {
                handlers::print_analysis_json(&result)?;
            } else {
                handlers::print_analysis(&result);
            }
        }
        Some(CliCommand::Generate(generate)) => {
            let info = handlers::personal_info_from_args(&generate)?;
            let options = handlers::options_from_args(&generate, config);
            let output = generate
                .output
                .clone()
                .unwrap_or_else(|| config.default_output.clone());
            let preview = generate.preview.unwrap_or(0);

            let summary = handlers::handle_generate(
                &info,
                &options,
                &output,
                preview,
                generate.stream,
                config,
            )?;
            handlers::print_export_summary(&summary);
        }
        Some(CliCommand::Interactive) | None => {
            cli::menu::run_cli_menu(config)?;
        }
    }
    Ok(())
}

fn main() -> ExitCode {
    // Load environment variables
    if Path::new(".env").exists() {
        dotenvy::dotenv().ok();
    }

    let args = Args::parse();
    let config = Config::load();

    if let Err(e) = logging::init_logging(&config, args.verbose) {
        eprintln!("Failed to initialize logging: {}", e);
    }
    log::debug!("Command line args: {:?}", args);
    log::debug!("Loaded config: {:?}", config);

    match run(args, &config) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            log::error!("{:#}", e);
            eprintln!("❌ Error: {:#}", e);
            ExitCode::FAILURE
        }
    }
}
