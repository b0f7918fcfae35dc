use std::path::PathBuf;

/// Capability to narrow a file listing by some criterion.
///
/// `filter` returns a new listing containing a subset of the input with the
/// relative order of kept elements preserved. The input is borrowed, so a
/// filterer can never mutate the listing it was given.
pub trait Filterer {
    fn filter(&self, listing: &[PathBuf]) -> Vec<PathBuf>;
}

/// Adapt a plain function into a [`Filterer`].
///
/// ```
/// use std::path::PathBuf;
/// use filesift::filtering::{filter_fn, Filterer};
///
/// let drop_hidden = filter_fn(|listing: &[PathBuf]| {
///     listing
///         .iter()
///         .filter(|p| {
///             p.file_name()
///                 .and_then(|name| name.to_str())
///                 .is_none_or(|name| !name.starts_with('.'))
///         })
///         .cloned()
///         .collect()
/// });
///
/// let listing = vec![PathBuf::from("/a/.git"), PathBuf::from("/a/kept.txt")];
/// assert_eq!(drop_hidden.filter(&listing), vec![PathBuf::from("/a/kept.txt")]);
/// ```
pub fn filter_fn<F>(f: F) -> FilterFn<F>
where
    F: Fn(&[PathBuf]) -> Vec<PathBuf>,
{
    FilterFn(f)
}

/// A [`Filterer`] backed by a plain function, created by [`filter_fn`].
#[derive(Debug, Clone)]
pub struct FilterFn<F>(F);

impl<F> Filterer for FilterFn<F>
where
    F: Fn(&[PathBuf]) -> Vec<PathBuf>,
{
    fn filter(&self, listing: &[PathBuf]) -> Vec<PathBuf> {
        (self.0)(listing)
    }
}
