//! List the posts a conversion would write

use anyhow::{Context, Result};

use crate::content::TransformedPost;
use crate::feed::{published_posts, Feed};
use crate::Migrator;

/// Print one line per published post, then totals. Nothing is written.
pub fn run(app: &Migrator) -> Result<()> {
    let feed_path = app.feed_path();
    let feed = app
        .load_feed()
        .with_context(|| format!("Failed to load feed {:?}", feed_path))?;

    for line in describe(app, &feed)? {
        println!("{}", line);
    }

    Ok(())
}

/// Listing lines for a parsed feed
pub fn describe(app: &Migrator, feed: &Feed) -> Result<Vec<String>> {
    let transformer = app.transformer()?;
    let mut lines = Vec::new();

    if let Some(title) = feed.title.as_deref().filter(|t| !t.is_empty()) {
        lines.push(format!("Feed: {}", title));
    }

    let mut posts = 0;
    for record in published_posts(&feed.items) {
        let post = TransformedPost::build(record, &transformer, &app.config.untitled)
            .with_context(|| format!("Failed to convert post {:?}", record.title_or("")))?;

        let mut line = format!("  {}  {}", post.filename, post.title);
        if !post.categories.is_empty() {
            line.push_str(&format!(" [{}]", post.categories.join(", ")));
        }
        if let Some(author) = record.author.as_deref() {
            line.push_str(&format!(" by {}", author));
        }
        lines.push(line);
        posts += 1;
    }

    lines.push(format!(
        "Posts: {} (skipped {} other items)",
        posts,
        feed.items.len() - posts
    ));

    Ok(lines)
}
