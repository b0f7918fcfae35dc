/// Application-wide constants to avoid magic values throughout the codebase.
///
/// This module centralizes all magic strings, numbers, and other literal values
/// used across the application, making them easier to maintain and modify.
/// Output format constants
pub mod output_formats {
    /// Text output format - path and value per entry, human readable
    pub const TEXT: &str = "text";
    /// JSON output format - structured output for automation
    pub const JSON: &str = "json";
    /// Minimal output format - values only, one per line
    pub const MINIMAL: &str = "minimal";

    /// Default output format
    pub const DEFAULT: &str = TEXT;

    /// All valid output formats
    pub const ALL: [&str; 3] = [TEXT, JSON, MINIMAL];
}

/// File processing constants
pub mod files {
    /// Block size in bytes used when streaming file contents through a digest
    pub const DEFAULT_CHECKSUM_BLOCK_SIZE: usize = 65536;
    /// Capacity hint for the per-directory file listing
    pub const DEFAULT_LISTING_CAPACITY: usize = 64;
}

/// Configuration constants
pub mod config {
    /// Name of the config file searched for in standard locations
    pub const CONFIG_FILE_NAME: &str = ".filesift.toml";
    /// How many parent directories to probe for a config file
    pub const CONFIG_PARENT_LEVELS: usize = 3;
}
