//! File discovery
//!
//! This module handles enumerating candidate files under root
//! directories and file path operations.

pub mod path_utils;
pub mod searcher;

// Re-export commonly used items
pub use path_utils::absolutize;
pub use searcher::{CompositeSearcher, FileSearcher, Searcher};
