use std::fmt;

/// Comprehensive error types for filesift operations
#[derive(Debug)]
pub enum FileSiftError {
    /// IO error (file operations, etc.)
    Io(std::io::Error),

    /// Configuration error
    Config(String),

    /// Invalid argument error
    InvalidArgument(String),

    /// Root directory not found error
    DirectoryNotFound(String),

    /// Glob pattern compilation error
    Glob(globset::Error),

    /// TOML parsing error
    TomlParsing(toml::de::Error),

    /// File walking/ignore error
    FileWalking(ignore::Error),
}

impl fmt::Display for FileSiftError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FileSiftError::Io(err) => write!(f, "IO error: {err}"),
            FileSiftError::Config(msg) => write!(f, "Configuration error: {msg}"),
            FileSiftError::InvalidArgument(msg) => write!(f, "Invalid argument: {msg}"),
            FileSiftError::DirectoryNotFound(path) => {
                write!(f, "Directory not found: {path}")
            }
            FileSiftError::Glob(err) => write!(f, "Glob pattern error: {err}"),
            FileSiftError::TomlParsing(err) => write!(f, "TOML parsing error: {err}"),
            FileSiftError::FileWalking(err) => write!(f, "File walking error: {err}"),
        }
    }
}

impl std::error::Error for FileSiftError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            FileSiftError::Io(err) => Some(err),
            FileSiftError::Glob(err) => Some(err),
            FileSiftError::TomlParsing(err) => Some(err),
            FileSiftError::FileWalking(err) => Some(err),
            _ => None,
        }
    }
}

impl From<std::io::Error> for FileSiftError {
    fn from(err: std::io::Error) -> Self {
        FileSiftError::Io(err)
    }
}

impl From<globset::Error> for FileSiftError {
    fn from(err: globset::Error) -> Self {
        FileSiftError::Glob(err)
    }
}

impl From<toml::de::Error> for FileSiftError {
    fn from(err: toml::de::Error) -> Self {
        FileSiftError::TomlParsing(err)
    }
}

impl From<ignore::Error> for FileSiftError {
    fn from(err: ignore::Error) -> Self {
        FileSiftError::FileWalking(err)
    }
}

/// Type alias for Results using FileSiftError
pub type Result<T> = std::result::Result<T, FileSiftError>;
