use log::warn;

use crate::core::error::{FileSiftError, Result};
use crate::discovery::searcher::Searcher;
use crate::extraction::extractor::Extractor;
use crate::filtering::filterer::Filterer;

use std::collections::HashMap;
use std::path::{Path, PathBuf};

/// Harness for searching, filtering and extracting data from files.
///
/// Constructed from one [`Searcher`], an ordered list of zero or more
/// [`Filterer`]s and one [`Extractor`]; the three collaborators are fixed
/// for the processor's lifetime. Exactly how files are found and what gets
/// extracted from them is entirely up to those collaborators; the
/// processor only owns the orchestration:
///
/// root directories -> searcher listing -> filter pipeline -> per-file
/// extraction -> result mapping.
pub struct FileProcessor<S, E> {
    searcher: S,
    filterers: Vec<Box<dyn Filterer>>,
    extractor: E,
}

impl<S, E> FileProcessor<S, E>
where
    S: Searcher,
    E: Extractor,
{
    pub fn new(searcher: S, filterers: Vec<Box<dyn Filterer>>, extractor: E) -> Self {
        Self {
            searcher,
            filterers,
            extractor,
        }
    }

    /// Process a set of root directories.
    ///
    /// Returns a mapping from the absolute path of every file that survived
    /// filtering to the value the extractor produced for it. Root
    /// directories are processed in the given order; when the same file
    /// path shows up under more than one root the last write wins.
    ///
    /// A root directory that does not exist is skipped with a warning so a
    /// batch of mixed valid and invalid roots still yields the results of
    /// the valid ones. An extraction failure is not recovered: it aborts
    /// the whole call.
    pub fn process<I>(&self, root_dirs: I) -> Result<HashMap<PathBuf, E::Output>>
    where
        I: IntoIterator,
        I::Item: AsRef<Path>,
    {
        let mut results = HashMap::new();

        for root_dir in root_dirs {
            let root_dir = root_dir.as_ref();
            if root_dir.as_os_str().is_empty() {
                return Err(FileSiftError::InvalidArgument(
                    "root directory path must not be empty".to_string(),
                ));
            }
            if !root_dir.is_dir() {
                warn!(
                    "root directory '{}' does not exist, skipping it",
                    root_dir.display()
                );
                continue;
            }

            let mut listing = self.searcher.search(root_dir)?;
            for filterer in &self.filterers {
                listing = filterer.filter(&listing);
            }

            for path in listing {
                let value = self.extractor.extract(&path)?;
                results.insert(path, value);
            }
        }

        Ok(results)
    }

    /// Convenience for processing a single root directory.
    ///
    /// Equivalent to `process` with a one-element sequence.
    pub fn process_root<P>(&self, root_dir: P) -> Result<HashMap<PathBuf, E::Output>>
    where
        P: AsRef<Path>,
    {
        self.process(std::iter::once(root_dir.as_ref()))
    }
}
