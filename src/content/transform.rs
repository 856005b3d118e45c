//! Post body rewriting: WordPress shortcodes, code blocks and media URLs

use lazy_static::lazy_static;
use regex::{Captures, Regex};

use crate::error::Result;

lazy_static! {
    /// `[caption ...]inner[/caption]`, captures the inner content
    static ref CAPTION_REGEX: Regex =
        Regex::new(r"(?s)\[caption[^\]]*\](.*?)\[/caption\]").unwrap();
    /// `[gallery ...]`
    static ref GALLERY_REGEX: Regex = Regex::new(r"\[gallery[^\]]*\]").unwrap();
    /// `<pre ...>code</pre>`, captures the code verbatim
    static ref PRE_REGEX: Regex = Regex::new(r"(?s)<pre(?:\s[^>]*)?>(.*?)</pre>").unwrap();
}

/// Clean up WordPress-specific markup in a post body.
///
/// Steps run in a fixed order:
/// 1. `[caption]` wrappers are dropped, their content kept
/// 2. `[gallery]` shortcodes are removed
/// 3. `<pre>` blocks become fenced code blocks
/// 4. `&nbsp;` becomes a plain space
///
/// Malformed shortcodes don't match and are left alone.
pub fn clean_content(content: &str) -> String {
    let content = CAPTION_REGEX.replace_all(content, "${1}");
    let content = GALLERY_REGEX.replace_all(&content, "");
    let content = PRE_REGEX.replace_all(&content, "```\n${1}\n```");
    content.replace("&nbsp;", " ")
}

/// Rewrites absolute upload URLs of the old site to local asset paths
#[derive(Debug, Clone)]
pub struct MediaRewriter {
    pattern: Regex,
    asset_dir: String,
}

impl MediaRewriter {
    /// Match `http(s)://<host>/wp-content/uploads/<year>/<month>/<name>.<ext>`
    pub fn new(host: &str, asset_dir: &str) -> Result<Self> {
        let pattern = Regex::new(&format!(
            r#"https?://{}/wp-content/uploads/(?P<year>\d+)/(?P<month>\d+)/(?P<name>[^\s"'<>()]+?)\.(?P<ext>jpg|jpeg|png|gif)"#,
            regex::escape(host)
        ))?;

        Ok(Self {
            pattern,
            asset_dir: asset_dir.trim_end_matches('/').to_string(),
        })
    }

    /// Rewrite every matching image URL in `content`
    ///
    /// # Examples
    /// ```ignore
    /// rewriter.rewrite("http://finnern.com/wp-content/uploads/2021/05/photo.jpg")
    /// // -> "/assets/images/2021/05/photo.jpg"
    /// ```
    pub fn rewrite(&self, content: &str) -> String {
        self.pattern
            .replace_all(content, |caps: &Captures| {
                format!(
                    "{}/{}/{}/{}.{}",
                    self.asset_dir, &caps["year"], &caps["month"], &caps["name"], &caps["ext"]
                )
            })
            .into_owned()
    }
}

/// Full body pipeline: markup cleanup followed by media URL rewriting
#[derive(Debug, Clone)]
pub struct ContentTransformer {
    media: MediaRewriter,
}

impl ContentTransformer {
    pub fn new(media: MediaRewriter) -> Self {
        Self { media }
    }

    pub fn transform(&self, content: &str) -> String {
        self.media.rewrite(&clean_content(content))
    }
}
