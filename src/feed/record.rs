//! Post records read from the feed

/// One `<item>` of the export, as found in the feed.
///
/// Every field is optional here; defaults are applied by the pipeline.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PostRecord {
    /// `<title>`
    pub title: Option<String>,
    /// `<content:encoded>`
    pub content: Option<String>,
    /// `<excerpt:encoded>`
    pub excerpt: Option<String>,
    /// `<dc:creator>`
    pub author: Option<String>,
    /// `<wp:post_date>`, `YYYY-MM-DD HH:MM:SS`
    pub post_date: Option<String>,
    /// `<wp:post_name>`, the slug WordPress assigned
    pub post_name: Option<String>,
    /// `<wp:post_type>`
    pub post_type: Option<String>,
    /// `<wp:status>`
    pub status: Option<String>,
    /// `<category domain="category">` labels, in feed order
    pub categories: Vec<String>,
    /// `<category domain="post_tag">` labels, in feed order
    pub tags: Vec<String>,
}

impl PostRecord {
    /// True only for published blog posts. Missing fields never match.
    pub fn is_published_post(&self) -> bool {
        self.post_type.as_deref() == Some("post") && self.status.as_deref() == Some("publish")
    }

    /// Title, or the placeholder when the feed has none
    pub fn title_or<'a>(&'a self, placeholder: &'a str) -> &'a str {
        match self.title.as_deref() {
            Some(title) if !title.is_empty() => title,
            _ => placeholder,
        }
    }

    /// Raw post body, empty when absent
    pub fn body(&self) -> &str {
        self.content.as_deref().unwrap_or("")
    }

    /// Slug supplied by WordPress, verbatim. Blank slugs count as absent.
    pub fn slug(&self) -> Option<&str> {
        self.post_name
            .as_deref()
            .filter(|s| !s.trim().is_empty())
    }
}

/// Keep only published blog posts
pub fn published_posts<'a, I>(records: I) -> impl Iterator<Item = &'a PostRecord>
where
    I: IntoIterator<Item = &'a PostRecord>,
{
    records.into_iter().filter(|record| {
        let keep = record.is_published_post();
        if !keep {
            tracing::debug!(
                "Skipping {:?} (type={:?}, status={:?})",
                record.title,
                record.post_type,
                record.status
            );
        }
        keep
    })
}
