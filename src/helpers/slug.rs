//! Slug helper functions

use lazy_static::lazy_static;
use regex::Regex;

lazy_static! {
    /// Runs of anything that isn't a lowercase ASCII letter or digit
    static ref SEPARATOR_REGEX: Regex = Regex::new(r"[^a-z0-9]+").unwrap();
}

/// Derive a filename slug from a post title.
///
/// Lowercases, collapses each run of non-alphanumeric characters into a
/// single `-`, and trims hyphens from both ends. Only ASCII letters and
/// digits survive; other characters are separators.
///
/// # Examples
/// ```ignore
/// title_slug("Hello, World! 2021") // -> "hello-world-2021"
/// ```
pub fn title_slug(title: &str) -> String {
    let lower = title.to_lowercase();
    SEPARATOR_REGEX
        .replace_all(&lower, "-")
        .trim_matches('-')
        .to_string()
}
