//! Data extraction
//!
//! This module contains the extractor contract and the built-in
//! checksum and image URL extraction strategies.

pub mod checksum;
pub mod extractor;
pub mod image_urls;

// Re-export commonly used items
pub use checksum::Sha1Extractor;
pub use extractor::{extract_fn, ExtractFn, Extractor};
pub use image_urls::ImageUrlExtractor;
