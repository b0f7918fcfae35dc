//! filesift is a composable pipeline for searching, filtering and
//! extracting data from files.
//!
//! Users supply a [`Searcher`] (finds candidate files), zero or more
//! [`Filterer`]s (narrow the listing) and an [`Extractor`] (produces a
//! result per file); a [`FileProcessor`] runs them in sequence over one or
//! more root directories and returns a mapping from absolute file path to
//! extracted value.
//!
//! ```no_run
//! use filesift::{ExtensionFilterer, FileProcessor, FileSearcher, Sha1Extractor};
//!
//! # fn main() -> filesift::Result<()> {
//! let processor = FileProcessor::new(
//!     FileSearcher::recursive(),
//!     vec![Box::new(ExtensionFilterer::new(["iso", "img"]))],
//!     Sha1Extractor::new(),
//! );
//! let checksums = processor.process(["/srv/downloads", "/srv/mirror"])?;
//! for (path, checksum) in &checksums {
//!     println!("{}  {}", checksum, path.display());
//! }
//! # Ok(())
//! # }
//! ```

pub mod config;
pub mod core;
pub mod discovery;
pub mod extraction;
pub mod filtering;
pub mod logging;
pub mod pipeline;

// Re-export the public surface at the crate root
pub use crate::config::{CliConfig, Config};
pub use crate::core::error::{FileSiftError, Result};
pub use crate::discovery::{CompositeSearcher, FileSearcher, Searcher};
pub use crate::extraction::{extract_fn, Extractor, ImageUrlExtractor, Sha1Extractor};
pub use crate::filtering::{
    filter_fn, ExcludeGlobFilterer, ExtensionFilterer, Filterer, IncludeGlobFilterer,
};
pub use crate::pipeline::FileProcessor;
