//! Migration configuration (wp2jekyll.yml)

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// Name of the optional configuration file in the base directory
pub const CONFIG_FILE: &str = "wp2jekyll.yml";

/// Main migration configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct MigrateConfig {
    // Input / output
    pub feed: String,
    pub output_dir: String,

    // Media
    /// Host whose `wp-content/uploads` URLs are rewritten
    pub media_host: String,
    /// Site-relative prefix that replaces the uploads URL
    pub asset_dir: String,

    // Writing
    /// Title used for posts that have none
    pub untitled: String,
    pub layout: String,
}

impl Default for MigrateConfig {
    fn default() -> Self {
        Self {
            feed: "feed.xml".to_string(),
            output_dir: "_posts".to_string(),

            media_host: "finnern.com".to_string(),
            asset_dir: "/assets/images".to_string(),

            untitled: "Untitled Post".to_string(),
            layout: "post".to_string(),
        }
    }
}

impl MigrateConfig {
    /// Load configuration from a file
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config {:?}", path))?;
        let config: MigrateConfig = serde_yaml::from_str(&content)
            .with_context(|| format!("Failed to parse config {:?}", path))?;
        tracing::debug!("Loaded config from {:?}", path);
        Ok(config)
    }

    /// Load `wp2jekyll.yml` from the base directory, or fall back to defaults
    pub fn load_or_default<P: AsRef<Path>>(base_dir: P) -> Result<Self> {
        let config_path = base_dir.as_ref().join(CONFIG_FILE);
        if config_path.exists() {
            Self::load(&config_path)
        } else {
            Ok(Self::default())
        }
    }
}
