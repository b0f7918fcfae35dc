//! File listing filters
//!
//! This module contains the filterer contract and the built-in
//! glob and extension based filtering strategies.

pub mod extension;
pub mod filterer;
pub mod glob;

// Re-export commonly used items
pub use extension::ExtensionFilterer;
pub use filterer::{filter_fn, FilterFn, Filterer};
pub use glob::{ExcludeGlobFilterer, IncludeGlobFilterer};
