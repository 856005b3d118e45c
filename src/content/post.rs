//! Posts ready to be written as Jekyll files

use super::{ContentTransformer, FrontMatter};
use crate::error::{MigrateError, Result};
use crate::feed::PostRecord;
use crate::helpers::{jekyll_date, title_slug};

/// A published post after conversion
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TransformedPost {
    /// Post title, placeholder applied
    pub title: String,

    /// Source timestamp, `YYYY-MM-DD HH:MM:SS`
    pub date: String,

    /// Rewritten body
    pub body: String,

    /// Category labels in feed order
    pub categories: Vec<String>,

    /// `<YYYY-MM-DD>-<slug>.md`
    pub filename: String,
}

impl TransformedPost {
    /// Convert one published record.
    ///
    /// Fails when the record has no `wp:post_date` or the date isn't in the
    /// fixed `YYYY-MM-DD HH:MM:SS` layout.
    pub fn build(
        record: &PostRecord,
        transformer: &ContentTransformer,
        untitled: &str,
    ) -> Result<Self> {
        let date = record
            .post_date
            .as_deref()
            .ok_or_else(|| MigrateError::MissingElement("wp:post_date".to_string()))?;
        let day = jekyll_date(date)?;

        let title = record.title_or(untitled).to_string();
        let slug = match record.slug() {
            Some(slug) => slug.to_string(),
            None => title_slug(&title),
        };

        Ok(Self {
            filename: format!("{}-{}.md", day, slug),
            body: transformer.transform(record.body()),
            categories: record.categories.clone(),
            date: date.to_string(),
            title,
        })
    }

    /// Front-matter for this post
    pub fn front_matter(&self, layout: &str) -> FrontMatter {
        FrontMatter {
            layout: layout.to_string(),
            title: self.title.clone(),
            date: self.date.clone(),
            categories: self.categories.clone(),
        }
    }

    /// Complete file contents
    pub fn render(&self, layout: &str) -> Result<String> {
        self.front_matter(layout).render(&self.body)
    }
}
