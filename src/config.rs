//! Configuration management
//!
//! This module handles loading and managing configuration from
//! TOML files and CLI arguments.

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

use crate::core::constants::{config as config_constants, output_formats};
use crate::core::error::{FileSiftError, Result};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Recursively search sub-directories of each root
    pub recursive: Option<bool>,

    /// File extensions to process
    pub file_types: Option<Vec<String>>,

    /// Glob patterns a file must match to be processed
    pub include_patterns: Option<Vec<String>>,

    /// Glob patterns that remove files from processing
    pub exclude_patterns: Option<Vec<String>>,

    /// Output format (text, json, minimal)
    pub output_format: Option<String>,

    /// Enable verbose logging
    pub verbose: Option<bool>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            recursive: Some(false),
            file_types: None,
            include_patterns: None,
            exclude_patterns: None,
            output_format: Some(output_formats::DEFAULT.to_string()),
            verbose: Some(false),
        }
    }
}

/// CLI argument values that can override file-based configuration
#[derive(Debug, Clone, Default)]
pub struct CliConfig {
    pub recursive: bool,
    pub file_types: Option<Vec<String>>,
    pub include_patterns: Option<Vec<String>>,
    pub exclude_patterns: Option<Vec<String>>,
    pub output_format: Option<String>,
    pub verbose: bool,
}

impl Config {
    /// Load configuration from file, falling back to defaults
    pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let content = fs::read_to_string(path).map_err(|e| {
            FileSiftError::Config(format!(
                "Could not read config file '{}': {}",
                path.display(),
                e
            ))
        })?;

        let config: Config = toml::from_str(&content)?;

        config.validate()?;
        Ok(config)
    }

    /// Try to find and load a config file in standard locations
    pub fn load_from_standard_locations() -> Self {
        // Check for .filesift.toml in current directory
        if let Ok(config) = Self::load_from_file(config_constants::CONFIG_FILE_NAME) {
            return config;
        }

        // Check for .filesift.toml in parent directories
        for i in 1..=config_constants::CONFIG_PARENT_LEVELS {
            let path = format!(
                "{}{}",
                "../".repeat(i),
                config_constants::CONFIG_FILE_NAME
            );
            if let Ok(config) = Self::load_from_file(&path) {
                return config;
            }
        }

        // Fall back to defaults
        Self::default()
    }

    /// Merge this config with CLI arguments (CLI takes precedence)
    pub fn merge_with_cli(&mut self, cli_config: &CliConfig) {
        if cli_config.recursive {
            self.recursive = Some(true);
        }
        if let Some(ref file_types) = cli_config.file_types {
            self.file_types = Some(file_types.clone());
        }
        if let Some(ref include_patterns) = cli_config.include_patterns {
            self.include_patterns = Some(include_patterns.clone());
        }
        if let Some(ref exclude_patterns) = cli_config.exclude_patterns {
            self.exclude_patterns = Some(exclude_patterns.clone());
        }
        if let Some(ref output_format) = cli_config.output_format {
            self.output_format = Some(output_format.clone());
        }
        if cli_config.verbose {
            self.verbose = Some(true);
        }
    }

    /// Validate configuration values
    pub fn validate(&self) -> Result<()> {
        if let Some(ref output_format) = self.output_format {
            if !output_formats::ALL.contains(&output_format.as_str()) {
                return Err(FileSiftError::Config(format!(
                    "Invalid output format '{}'. Valid formats: {}",
                    output_format,
                    output_formats::ALL.join(", ")
                )));
            }
        }
        Ok(())
    }
}
