//! Date helper functions

use chrono::NaiveDateTime;

use crate::error::{MigrateError, Result};

/// Timestamp layout of `wp:post_date`
pub const POST_DATE_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// Parse a WordPress post date (`YYYY-MM-DD HH:MM:SS`).
///
/// The pattern is fixed; nothing else is accepted.
pub fn parse_post_date(s: &str) -> Result<NaiveDateTime> {
    NaiveDateTime::parse_from_str(s, POST_DATE_FORMAT).map_err(|source| MigrateError::Format {
        value: s.to_string(),
        source,
    })
}

/// Date portion used in Jekyll post filenames
///
/// # Examples
/// ```ignore
/// jekyll_date("2021-05-04 09:15:00") // -> Ok("2021-05-04")
/// ```
pub fn jekyll_date(s: &str) -> Result<String> {
    Ok(parse_post_date(s)?.format("%Y-%m-%d").to_string())
}
