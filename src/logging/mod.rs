// src/logging/mod.rs
use std::fs::{self, File};
use std::io;
use std::path::Path;
use log::LevelFilter;

use crate::core::config::Config;

/// Install the global logger.
///
/// Logs go to stderr unless a log file is configured, in which case the
/// file (and its parent directory) is created and used instead. `verbose`
/// forces debug output regardless of the configured level.
pub fn init_logging(config: &Config, verbose: bool) -> io::Result<()> {
    let level = effective_level(config.log_level, verbose);

    let mut builder = env_logger::Builder::new();
    builder
        .filter_level(level)
        .format_timestamp_secs()
        .format_module_path(true)
        .format_target(false);

    if let Some(path) = &config.log_file {
        builder.target(env_logger::Target::Pipe(Box::new(open_log_file(path)?)));
    } else {
        builder.target(env_logger::Target::Stderr);
    }

    // A logger may already be installed when running under a test harness
    if builder.try_init().is_err() {
        log::debug!("Logger already initialized");
    }
    Ok(())
}

pub fn effective_level(configured: LevelFilter, verbose: bool) -> LevelFilter {
    if verbose {
        configured.max(LevelFilter::Debug)
    } else {
        configured
    }
}

fn open_log_file(path: &Path) -> io::Result<File> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() && !parent.exists() {
            fs::create_dir_all(parent)?;
        }
    }
    File::create(path)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_verbose_raises_level() {
        assert_eq!(effective_level(LevelFilter::Info, true), LevelFilter::Debug);
        assert_eq!(effective_level(LevelFilter::Trace, true), LevelFilter::Trace);
        assert_eq!(effective_level(LevelFilter::Warn, false), LevelFilter::Warn);
    }

    #[test]
    fn test_log_file_directory_created() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("logs").join("passaudit.log");
        open_log_file(&path).unwrap();
        assert!(path.exists());
    }
}
