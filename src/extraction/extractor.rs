use crate::core::error::Result;

use std::path::Path;

/// Capability to derive a value from a single file.
///
/// What gets produced is entirely up to the concrete strategy, which may
/// read the file in full or as a stream, as text or as bytes. Any handle it
/// opens is released before `extract` returns.
pub trait Extractor {
    type Output;

    fn extract(&self, path: &Path) -> Result<Self::Output>;
}

/// Adapt a plain function into an [`Extractor`].
///
/// ```
/// use std::path::Path;
/// use filesift::extraction::{extract_fn, Extractor};
///
/// let file_size = extract_fn(|path: &Path| Ok(std::fs::metadata(path)?.len()));
/// # let _ = &file_size;
/// ```
pub fn extract_fn<F, T>(f: F) -> ExtractFn<F>
where
    F: Fn(&Path) -> Result<T>,
{
    ExtractFn(f)
}

/// An [`Extractor`] backed by a plain function, created by [`extract_fn`].
#[derive(Debug, Clone)]
pub struct ExtractFn<F>(F);

impl<F, T> Extractor for ExtractFn<F>
where
    F: Fn(&Path) -> Result<T>,
{
    type Output = T;

    fn extract(&self, path: &Path) -> Result<T> {
        (self.0)(path)
    }
}
