use crate::config::Config;
use log::{debug, error, info};
use std::path::Path;

/// Initialize the logger with appropriate level based on verbosity
pub fn init_logger(verbose: bool, quiet: bool) {
    let level = if quiet {
        log::LevelFilter::Off
    } else if verbose {
        log::LevelFilter::Debug
    } else {
        log::LevelFilter::Warn // Always surface skipped-root diagnostics
    };

    env_logger::Builder::from_default_env()
        .filter_level(level)
        .format_timestamp(None)
        .format_module_path(false)
        .format_target(false)
        .init();

    debug!("Logger initialized with level: {level:?}");
}

/// Log configuration information
pub fn log_config_info(config: &Config) {
    let recursive = config.recursive.unwrap_or(false);
    let file_types = config
        .file_types
        .as_ref()
        .map_or_else(|| "all".to_string(), |types| types.join(","));
    let include_count = config.include_patterns.as_ref().map_or(0, Vec::len);
    let exclude_count = config.exclude_patterns.as_ref().map_or(0, Vec::len);

    info!("Configuration: recursive={recursive}, file_types={file_types}");
    info!("Filters: include_patterns={include_count}, exclude_patterns={exclude_count}");
}

/// Log root directory information
pub fn log_root_info<P: AsRef<Path>>(root_count: usize, root_dirs: &[P]) {
    info!("Processing {root_count} root directory(ies)");
    for (i, root_dir) in root_dirs.iter().enumerate() {
        debug!("  {}. {}", i + 1, root_dir.as_ref().display());
    }
}

/// Log processing completion
pub fn log_processing_complete(file_count: usize, duration_ms: u128) {
    info!("Processed {file_count} file(s) ({duration_ms}ms)");
}

/// Log error information
pub fn log_error(message: &str, source: Option<&dyn std::error::Error>) {
    match source {
        Some(err) => error!("{message}: {err}"),
        None => error!("{message}"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_logger_initialization_verbose() {
        // Logger can only be initialized once per process, so catch the panic
        std::panic::catch_unwind(|| init_logger(true, false)).ok();
    }

    #[test]
    fn test_logger_initialization_quiet() {
        std::panic::catch_unwind(|| init_logger(false, true)).ok();
    }

    #[test]
    fn test_logger_initialization_conflicting() {
        // Quiet takes precedence over verbose
        std::panic::catch_unwind(|| init_logger(true, true)).ok();
    }

    #[test]
    fn test_log_config_info_does_not_panic() {
        let config = Config {
            recursive: Some(true),
            file_types: Some(vec!["html".to_string(), "css".to_string()]),
            ..Default::default()
        };
        log_config_info(&config);
        log_config_info(&Config::default());
    }

    #[test]
    fn test_log_root_info_does_not_panic() {
        log_root_info(2, &["/a", "/b"]);
        log_root_info(0, &[] as &[&str]);
    }

    #[test]
    fn test_log_error_with_and_without_source() {
        let io_error = std::io::Error::new(std::io::ErrorKind::NotFound, "gone");
        log_error("something failed", Some(&io_error));
        log_error("something failed", None);
    }
}
