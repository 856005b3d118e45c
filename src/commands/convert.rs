//! Convert the feed into Jekyll posts

use anyhow::{Context, Result};
use std::fs;
use std::path::{Path, PathBuf};

use crate::content::TransformedPost;
use crate::feed::published_posts;
use crate::Migrator;

/// Outcome of a conversion run
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Summary {
    /// Posts written
    pub written: usize,
    /// Feed items that were not published posts
    pub skipped: usize,
}

/// Convert every published post, aborting on the first error
pub fn run(app: &Migrator) -> Result<Summary> {
    let start = std::time::Instant::now();

    let feed_path = app.feed_path();
    let feed = app
        .load_feed()
        .with_context(|| format!("Failed to load feed {:?}", feed_path))?;
    tracing::info!("Loaded {} items from {:?}", feed.items.len(), feed_path);

    let transformer = app.transformer()?;
    let output_dir = app.output_dir();
    fs::create_dir_all(&output_dir)
        .with_context(|| format!("Failed to create {:?}", output_dir))?;

    let mut summary = Summary::default();
    for record in published_posts(&feed.items) {
        let post = TransformedPost::build(record, &transformer, &app.config.untitled)
            .with_context(|| format!("Failed to convert post {:?}", record.title_or("")))?;
        write_post(&output_dir, &post, &app.config.layout)?;

        summary.written += 1;
        println!("Processed: {}", post.filename);
    }
    summary.skipped = feed.items.len() - summary.written;

    println!("Converted {} posts successfully.", summary.written);
    tracing::info!(
        "Skipped {} non-post items, completed in {:.2}s",
        summary.skipped,
        start.elapsed().as_secs_f64()
    );

    Ok(summary)
}

/// Write one post into `output_dir`, replacing any file of the same name
pub fn write_post(output_dir: &Path, post: &TransformedPost, layout: &str) -> Result<PathBuf> {
    let file_path = output_dir.join(&post.filename);
    let content = post.render(layout)?;

    if file_path.exists() {
        tracing::debug!("Overwriting {:?}", file_path);
    }
    fs::write(&file_path, content).with_context(|| format!("Failed to write {:?}", file_path))?;

    Ok(file_path)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::MigrateConfig;
    use crate::content::FrontMatter;
    use crate::feed::fixtures::SAMPLE_FEED;
    use crate::MigrateError;

    fn site(feed: &str) -> (tempfile::TempDir, Migrator) {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join("feed.xml"), feed).unwrap();
        let app = Migrator::with_config(dir.path(), MigrateConfig::default());
        (dir, app)
    }

    fn written_files(app: &Migrator) -> Vec<String> {
        let mut names: Vec<String> = fs::read_dir(app.output_dir())
            .unwrap()
            .map(|e| e.unwrap().file_name().to_string_lossy().to_string())
            .collect();
        names.sort();
        names
    }

    #[test]
    fn test_convert_sample_feed() {
        let (_dir, app) = site(SAMPLE_FEED);
        let summary = run(&app).unwrap();

        assert_eq!(summary, Summary { written: 2, skipped: 3 });
        // Drafts, pages and attachments produce nothing
        assert_eq!(
            written_files(&app),
            vec!["2021-05-04-hello-world-2021.md", "2021-06-10-second-post.md"]
        );
    }

    #[test]
    fn test_written_post_contents() {
        let (_dir, app) = site(SAMPLE_FEED);
        run(&app).unwrap();

        let doc = fs::read_to_string(app.output_dir().join("2021-05-04-hello-world-2021.md")).unwrap();
        let (fm, body) = FrontMatter::parse(&doc).unwrap().unwrap();
        assert_eq!(fm.layout, "post");
        assert_eq!(fm.title, "Hello, World! 2021");
        assert_eq!(fm.date, "2021-05-04 09:15:00");
        assert_eq!(fm.categories, vec!["Travel", "Notes & Thoughts"]);

        assert!(body.starts_with("<img src=\"/assets/images/2021/05/photo.jpg\" /> A photo\n"));
        assert!(body.contains("Some text."));
        assert!(!body.contains("[gallery"));
        assert!(!body.contains("[caption"));
        assert!(body.ends_with("```\nfn main() {\n    println!(\"hi\");\n}\n```"));
    }

    #[test]
    fn test_empty_categories_written() {
        let (_dir, app) = site(SAMPLE_FEED);
        run(&app).unwrap();

        let doc = fs::read_to_string(app.output_dir().join("2021-06-10-second-post.md")).unwrap();
        assert!(doc.contains("categories: []\n"));
        assert!(doc.ends_with("---\n\nPlain body."));
    }

    #[test]
    fn test_overwrites_existing_file() {
        let (_dir, app) = site(SAMPLE_FEED);
        fs::create_dir_all(app.output_dir()).unwrap();
        let target = app.output_dir().join("2021-06-10-second-post.md");
        fs::write(&target, "stale").unwrap();

        run(&app).unwrap();
        assert!(fs::read_to_string(&target).unwrap().starts_with("---\n"));
    }

    #[test]
    fn test_custom_output_dir_is_created() {
        let (dir, mut app) = site(SAMPLE_FEED);
        app.config.output_dir = "site/_posts".to_string();
        run(&app).unwrap();
        assert!(dir.path().join("site/_posts/2021-06-10-second-post.md").is_file());
    }

    #[test]
    fn test_malformed_feed_aborts() {
        let (_dir, app) = site("<rss><channel><item></rss>");
        let err = run(&app).unwrap_err();
        let cause = err.downcast_ref::<MigrateError>().unwrap();
        assert!(cause.is_parse());
        assert!(!app.output_dir().exists());
    }

    #[test]
    fn test_bad_date_aborts_run() {
        let feed = r#"<rss xmlns:wp="http://wordpress.org/export/1.2/"><channel>
            <item>
                <title>Fine</title>
                <wp:post_date>2021-01-01 10:00:00</wp:post_date>
                <wp:post_type>post</wp:post_type>
                <wp:status>publish</wp:status>
            </item>
            <item>
                <title>Broken</title>
                <wp:post_date>01/02/2021</wp:post_date>
                <wp:post_type>post</wp:post_type>
                <wp:status>publish</wp:status>
            </item>
        </channel></rss>"#;
        let (_dir, app) = site(feed);
        let err = run(&app).unwrap_err();
        let cause = err.downcast_ref::<MigrateError>().unwrap();
        assert!(cause.is_format());
        // Posts before the failure were already written
        assert_eq!(written_files(&app), vec!["2021-01-01-fine.md"]);
    }

    #[test]
    fn test_missing_feed_file() {
        let dir = tempfile::tempdir().unwrap();
        let app = Migrator::with_config(dir.path(), MigrateConfig::default());
        assert!(run(&app).is_err());
    }
}
