use once_cell::sync::Lazy;
use regex::Regex;

use crate::core::error::Result;
use crate::extraction::extractor::Extractor;

use std::fs;
use std::path::Path;

const IMAGE_TAG_PATTERN: &str = r#"<img[^>]*?src=(?:"([^"]*)"|'([^']*)')[^>]*?/>"#;
const CSS_URL_PATTERN: &str = r#"url\( ?(?:"([^"]*)"|'([^']*)') ?\)"#;

static IMAGE_TAG_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(IMAGE_TAG_PATTERN).expect("Failed to compile image tag regex pattern")
});

static CSS_URL_REGEX: Lazy<Regex> =
    Lazy::new(|| Regex::new(CSS_URL_PATTERN).expect("Failed to compile CSS url regex pattern"));

/// Extractor that scrapes image URLs out of web page sources.
///
/// Scans the file as text for `<img ... src="...">` tags and CSS
/// `url("...")` values. Only quoted URLs are recognized.
#[derive(Default, Debug)]
pub struct ImageUrlExtractor {}

impl Extractor for ImageUrlExtractor {
    type Output = Vec<String>;

    fn extract(&self, path: &Path) -> Result<Vec<String>> {
        let data = fs::read_to_string(path)?;
        Ok(Self::extract_from_string(&data))
    }
}

impl ImageUrlExtractor {
    fn extract_from_string(data: &str) -> Vec<String> {
        let mut image_urls = Vec::new();

        for captures in IMAGE_TAG_REGEX.captures_iter(data) {
            if let Some(url) = captures.get(1).or_else(|| captures.get(2)) {
                image_urls.push(url.as_str().to_string());
            }
        }
        for captures in CSS_URL_REGEX.captures_iter(data) {
            if let Some(url) = captures.get(1).or_else(|| captures.get(2)) {
                image_urls.push(url.as_str().to_string());
            }
        }

        image_urls
    }
}
