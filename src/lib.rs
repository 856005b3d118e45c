//! wp2jekyll: migrate a WordPress export into Jekyll posts
//!
//! Reads a WXR feed, keeps published blog posts, cleans up WordPress
//! markup and writes one Markdown file with YAML front-matter per post.

pub mod commands;
pub mod config;
pub mod content;
pub mod error;
pub mod feed;
pub mod helpers;

use anyhow::Result;
use std::path::{Path, PathBuf};

pub use error::MigrateError;

/// The main migration application
#[derive(Debug, Clone)]
pub struct Migrator {
    /// Migration configuration
    pub config: config::MigrateConfig,
    /// Base directory, relative paths in the config resolve against it
    pub base_dir: PathBuf,
}

impl Migrator {
    /// Create a migrator for a directory, reading `wp2jekyll.yml` if present
    pub fn new<P: AsRef<Path>>(base_dir: P) -> Result<Self> {
        let base_dir = base_dir.as_ref().to_path_buf();
        let config = config::MigrateConfig::load_or_default(&base_dir)?;
        Ok(Self::with_config(base_dir, config))
    }

    /// Create a migrator with an explicit configuration
    pub fn with_config<P: AsRef<Path>>(base_dir: P, config: config::MigrateConfig) -> Self {
        Self {
            config,
            base_dir: base_dir.as_ref().to_path_buf(),
        }
    }

    /// Path of the export feed
    pub fn feed_path(&self) -> PathBuf {
        self.base_dir.join(&self.config.feed)
    }

    /// Directory posts are written to
    pub fn output_dir(&self) -> PathBuf {
        self.base_dir.join(&self.config.output_dir)
    }

    /// Load and parse the export feed
    pub fn load_feed(&self) -> error::Result<feed::Feed> {
        feed::FeedLoader::new(&feed::WORDPRESS_NAMESPACES).load(self.feed_path())
    }

    /// Body transformer for the configured media host
    pub fn transformer(&self) -> error::Result<content::ContentTransformer> {
        let media = content::MediaRewriter::new(&self.config.media_host, &self.config.asset_dir)?;
        Ok(content::ContentTransformer::new(media))
    }

    /// Convert every published post in the feed
    pub fn convert(&self) -> Result<commands::convert::Summary> {
        commands::convert::run(self)
    }

    /// List the posts a conversion would write
    pub fn list(&self) -> Result<()> {
        commands::list::run(self)
    }
}
