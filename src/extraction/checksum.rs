use sha1::{Digest, Sha1};

use crate::core::constants::files;
use crate::core::error::Result;
use crate::extraction::extractor::Extractor;

use std::fs::File;
use std::io::Read;
use std::path::Path;

/// Extractor that streams a file through a SHA-1 digest.
///
/// The file is read in fixed-size blocks so large files never have to be
/// held in memory in full. Produces the lowercase hex digest string.
#[derive(Debug, Clone)]
pub struct Sha1Extractor {
    block_size: usize,
}

impl Sha1Extractor {
    pub fn new() -> Self {
        Self {
            block_size: files::DEFAULT_CHECKSUM_BLOCK_SIZE,
        }
    }

    /// Use a custom read block size. Lower values keep memory usage down
    /// on constrained machines.
    pub fn with_block_size(block_size: usize) -> Self {
        Self {
            block_size: block_size.max(1),
        }
    }
}

impl Default for Sha1Extractor {
    fn default() -> Self {
        Self::new()
    }
}

impl Extractor for Sha1Extractor {
    type Output = String;

    fn extract(&self, path: &Path) -> Result<String> {
        let mut file = File::open(path)?;
        let mut hasher = Sha1::new();
        let mut block = vec![0u8; self.block_size];

        loop {
            let bytes_read = file.read(&mut block)?;
            if bytes_read == 0 {
                break;
            }
            hasher.update(&block[..bytes_read]);
        }

        Ok(hex::encode(hasher.finalize()))
    }
}
