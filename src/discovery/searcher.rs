use log::warn;
use rustc_hash::FxHashSet;

use crate::core::constants::files;
use crate::core::error::{FileSiftError, Result};
use crate::discovery::path_utils::absolutize;

use std::path::{Path, PathBuf};

/// Capability to enumerate candidate files under a root directory.
///
/// Whether the search is flat or recursive is the concrete strategy's
/// choice; the contract only requires absolute paths of files that exist
/// under the given root.
pub trait Searcher {
    fn search(&self, root_dir: &Path) -> Result<Vec<PathBuf>>;
}

/// Searches the filesystem for files, either flat or recursively.
#[derive(Default, Debug)]
pub struct FileSearcher {
    recurse: bool,
}

impl FileSearcher {
    /// Create a searcher that only lists files directly under the root.
    pub fn new() -> Self {
        Self { recurse: false }
    }

    /// Create a searcher that descends into sub-directories.
    pub fn recursive() -> Self {
        Self { recurse: true }
    }

    pub fn is_recursive(&self) -> bool {
        self.recurse
    }
}

impl Searcher for FileSearcher {
    fn search(&self, root_dir: &Path) -> Result<Vec<PathBuf>> {
        if root_dir.as_os_str().is_empty() {
            return Err(FileSiftError::InvalidArgument(
                "root directory path must not be empty".to_string(),
            ));
        }
        if !root_dir.is_dir() {
            return Err(FileSiftError::DirectoryNotFound(
                root_dir.display().to_string(),
            ));
        }

        let mut builder = ignore::WalkBuilder::new(root_dir);
        // Every file counts, including hidden and gitignored ones
        builder.standard_filters(false);
        if !self.recurse {
            builder.max_depth(Some(1));
        }

        let mut listing = Vec::with_capacity(files::DEFAULT_LISTING_CAPACITY);
        for entry in builder.build() {
            let entry = entry?;
            let entry_path = entry.path();

            if entry_path.is_file() {
                listing.push(absolutize(entry_path)?);
            }
        }

        // Walk order is filesystem-dependent, sort for a deterministic listing
        listing.sort();
        Ok(listing)
    }
}

/// Fans a search out over a set of independent child searchers.
///
/// Each child is guarded by an isolated failure boundary: a failing child is
/// logged and skipped, so one broken strategy cannot take down the others.
/// Successful listings are merged with order-preserving deduplication.
pub struct CompositeSearcher {
    searchers: Vec<Box<dyn Searcher>>,
}

impl CompositeSearcher {
    pub fn new(searchers: Vec<Box<dyn Searcher>>) -> Self {
        Self { searchers }
    }

    pub fn len(&self) -> usize {
        self.searchers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.searchers.is_empty()
    }
}

impl Searcher for CompositeSearcher {
    fn search(&self, root_dir: &Path) -> Result<Vec<PathBuf>> {
        let mut seen = FxHashSet::default();
        let mut merged = Vec::new();

        for searcher in &self.searchers {
            match searcher.search(root_dir) {
                Ok(listing) => {
                    for path in listing {
                        if seen.insert(path.clone()) {
                            merged.push(path);
                        }
                    }
                }
                Err(err) => {
                    warn!(
                        "searcher failed under '{}', skipping it: {err}",
                        root_dir.display()
                    );
                }
            }
        }

        Ok(merged)
    }
}

#[cfg(test)]
mod tests {
    #![allow(non_snake_case)]

    use super::*;
    use std::fs;

    type TestResult = std::result::Result<(), Box<dyn std::error::Error>>;

    struct MockSearcher {
        listing: Vec<PathBuf>,
    }

    impl MockSearcher {
        fn returning(paths: &[&str]) -> Self {
            Self {
                listing: paths.iter().map(PathBuf::from).collect(),
            }
        }
    }

    impl Searcher for MockSearcher {
        fn search(&self, _root_dir: &Path) -> Result<Vec<PathBuf>> {
            Ok(self.listing.clone())
        }
    }

    struct FailingSearcher;

    impl Searcher for FailingSearcher {
        fn search(&self, root_dir: &Path) -> Result<Vec<PathBuf>> {
            Err(FileSiftError::DirectoryNotFound(
                root_dir.display().to_string(),
            ))
        }
    }

    fn create_test_tree() -> std::result::Result<tempfile::TempDir, Box<dyn std::error::Error>> {
        let temp_dir = tempfile::tempdir()?;
        let base = temp_dir.path();

        fs::create_dir_all(base.join("sub_dir/sub_dir2"))?;
        fs::write(base.join("one.txt"), "TEST_FILE")?;
        fs::write(base.join("two.txt"), "TEST_FILE")?;
        fs::write(base.join("sub_dir/three.txt"), "TEST_FILE")?;
        fs::write(base.join("sub_dir/sub_dir2/four.txt"), "TEST_FILE")?;

        Ok(temp_dir)
    }

    #[test]
    fn test_construction() {
        assert!(!FileSearcher::new().is_recursive());
        assert!(FileSearcher::recursive().is_recursive());
        assert!(!FileSearcher::default().is_recursive());
    }

    #[test]
    fn test_search__flat_lists_only_top_level_files() -> TestResult {
        let temp_dir = create_test_tree()?;

        let actual = FileSearcher::new().search(temp_dir.path())?;

        let expected = vec![
            absolutize(&temp_dir.path().join("one.txt"))?,
            absolutize(&temp_dir.path().join("two.txt"))?,
        ];
        assert_eq!(actual, expected);
        Ok(())
    }

    #[test]
    fn test_search__recursive_lists_nested_files() -> TestResult {
        let temp_dir = create_test_tree()?;

        let actual = FileSearcher::recursive().search(temp_dir.path())?;

        let file_names: Vec<String> = actual
            .iter()
            .map(|p| p.file_name().unwrap().to_string_lossy().to_string())
            .collect();
        assert_eq!(actual.len(), 4);
        assert!(file_names.contains(&"one.txt".to_string()));
        assert!(file_names.contains(&"two.txt".to_string()));
        assert!(file_names.contains(&"three.txt".to_string()));
        assert!(file_names.contains(&"four.txt".to_string()));
        Ok(())
    }

    #[test]
    fn test_search__returns_absolute_sorted_paths() -> TestResult {
        let temp_dir = create_test_tree()?;

        let actual = FileSearcher::recursive().search(temp_dir.path())?;

        assert!(actual.iter().all(|p| p.is_absolute()));
        let mut sorted = actual.clone();
        sorted.sort();
        assert_eq!(actual, sorted);
        Ok(())
    }

    #[test]
    fn test_search__includes_hidden_files() -> TestResult {
        let temp_dir = tempfile::tempdir()?;
        fs::write(temp_dir.path().join(".hidden"), "data")?;
        fs::write(temp_dir.path().join("visible.txt"), "data")?;

        let actual = FileSearcher::new().search(temp_dir.path())?;

        assert_eq!(actual.len(), 2);
        Ok(())
    }

    #[test]
    fn test_search__nonexistent_directory() {
        let result = FileSearcher::new().search(Path::new("/definitely/does/not/exist"));

        match result {
            Err(FileSiftError::DirectoryNotFound(path)) => {
                assert!(path.contains("/definitely/does/not/exist"))
            }
            _ => panic!("Expected DirectoryNotFound error"),
        }
    }

    #[test]
    fn test_search__file_as_root_directory() -> TestResult {
        let temp_dir = create_test_tree()?;
        let file_path = temp_dir.path().join("one.txt");

        let result = FileSearcher::new().search(&file_path);

        assert!(matches!(result, Err(FileSiftError::DirectoryNotFound(_))));
        Ok(())
    }

    #[test]
    fn test_search__empty_path() {
        let result = FileSearcher::new().search(Path::new(""));

        assert!(matches!(result, Err(FileSiftError::InvalidArgument(_))));
    }

    #[test]
    fn test_search__empty_directory() -> TestResult {
        let temp_dir = tempfile::tempdir()?;

        let actual = FileSearcher::recursive().search(temp_dir.path())?;

        assert!(actual.is_empty());
        Ok(())
    }

    #[test]
    fn test_composite_search__unions_and_dedups_child_results() -> TestResult {
        let composite = CompositeSearcher::new(vec![
            Box::new(MockSearcher::returning(&[
                "/a/one.js",
                "/a/hello.html",
                "/a/something.bin",
            ])),
            Box::new(MockSearcher::returning(&[])), // nothing returned
            Box::new(MockSearcher::returning(&["/a/README", "/a/one.js"])),
        ]);

        let actual = composite.search(Path::new("/a"))?;

        let expected: Vec<PathBuf> = [
            "/a/one.js",
            "/a/hello.html",
            "/a/something.bin",
            "/a/README",
        ]
        .iter()
        .map(PathBuf::from)
        .collect();
        assert_eq!(actual, expected);
        Ok(())
    }

    #[test]
    fn test_composite_search__swallows_child_failures() -> TestResult {
        let composite = CompositeSearcher::new(vec![
            Box::new(MockSearcher::returning(&["/a/kept.txt"])),
            Box::new(FailingSearcher),
            Box::new(MockSearcher::returning(&["/a/also-kept.txt"])),
        ]);

        let actual = composite.search(Path::new("/a"))?;

        assert_eq!(
            actual,
            vec![PathBuf::from("/a/kept.txt"), PathBuf::from("/a/also-kept.txt")]
        );
        Ok(())
    }

    #[test]
    fn test_composite_search__all_children_failing_yields_empty() -> TestResult {
        let composite =
            CompositeSearcher::new(vec![Box::new(FailingSearcher), Box::new(FailingSearcher)]);

        let actual = composite.search(Path::new("/a"))?;

        assert!(actual.is_empty());
        Ok(())
    }

    #[test]
    fn test_composite_construction() {
        let composite = CompositeSearcher::new(vec![]);
        assert!(composite.is_empty());
        assert_eq!(composite.len(), 0);

        let composite = CompositeSearcher::new(vec![Box::new(FileSearcher::new())]);
        assert_eq!(composite.len(), 1);
    }
}
