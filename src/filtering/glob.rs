use globset::{Glob, GlobSet, GlobSetBuilder};

use crate::core::error::Result;
use crate::filtering::filterer::Filterer;

use std::path::PathBuf;

fn build_glob_set<I, S>(patterns: I) -> Result<GlobSet>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut builder = GlobSetBuilder::new();
    for pattern in patterns {
        builder.add(Glob::new(pattern.as_ref())?);
    }
    Ok(builder.build()?)
}

/// Filterer which removes files matching any of a set of glob patterns.
#[derive(Debug, Clone)]
pub struct ExcludeGlobFilterer {
    exclusions: GlobSet,
}

impl ExcludeGlobFilterer {
    /// Build a deny-list filterer. Fails if any pattern is not a valid glob.
    pub fn new<I, S>(patterns: I) -> Result<Self>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        Ok(Self {
            exclusions: build_glob_set(patterns)?,
        })
    }
}

impl Filterer for ExcludeGlobFilterer {
    fn filter(&self, listing: &[PathBuf]) -> Vec<PathBuf> {
        listing
            .iter()
            .filter(|path| !self.exclusions.is_match(path))
            .cloned()
            .collect()
    }
}

/// Filterer which removes files NOT matching any of a set of glob patterns.
#[derive(Debug, Clone)]
pub struct IncludeGlobFilterer {
    inclusions: GlobSet,
}

impl IncludeGlobFilterer {
    /// Build an allow-list filterer. Fails if any pattern is not a valid glob.
    pub fn new<I, S>(patterns: I) -> Result<Self>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        Ok(Self {
            inclusions: build_glob_set(patterns)?,
        })
    }
}

impl Filterer for IncludeGlobFilterer {
    fn filter(&self, listing: &[PathBuf]) -> Vec<PathBuf> {
        listing
            .iter()
            .filter(|path| self.inclusions.is_match(path))
            .cloned()
            .collect()
    }
}
