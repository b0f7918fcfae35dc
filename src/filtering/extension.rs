use crate::filtering::filterer::Filterer;

use std::collections::HashSet;
use std::path::PathBuf;

/// Filterer which keeps only files whose extension is in an allow-list.
///
/// Extensions are given without the leading dot (e.g. `["txt", "md"]`) and
/// matched case-sensitively. The empty string matches files without any
/// extension.
#[derive(Debug, Clone, Default)]
pub struct ExtensionFilterer {
    allowed: HashSet<String>,
}

impl ExtensionFilterer {
    pub fn new<I, S>(allowed_extensions: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            allowed: allowed_extensions.into_iter().map(Into::into).collect(),
        }
    }
}

impl Filterer for ExtensionFilterer {
    fn filter(&self, listing: &[PathBuf]) -> Vec<PathBuf> {
        listing
            .iter()
            .filter(|path| {
                match path.extension().and_then(|ext| ext.to_str()) {
                    Some(ext) => self.allowed.contains(ext),
                    None => self.allowed.contains(""),
                }
            })
            .cloned()
            .collect()
    }
}
