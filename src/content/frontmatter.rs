//! Jekyll front-matter

use serde::{Deserialize, Serialize};

use crate::error::Result;

/// Front-matter written at the top of every Jekyll post.
///
/// Field order is the serialization order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FrontMatter {
    pub layout: String,
    pub title: String,
    /// Original `wp:post_date`, unmodified
    pub date: String,
    /// Always serialized, `[]` when empty
    #[serde(default)]
    pub categories: Vec<String>,
}

impl FrontMatter {
    /// Serialize the YAML block (without the `---` fences)
    pub fn to_yaml(&self) -> Result<String> {
        Ok(serde_yaml::to_string(self)?)
    }

    /// Render a complete post: fenced front-matter, a blank line, then the body
    pub fn render(&self, body: &str) -> Result<String> {
        let yaml = self.to_yaml()?;
        let mut out = String::with_capacity(yaml.len() + body.len() + 10);
        out.push_str("---\n");
        out.push_str(&yaml);
        out.push_str("---\n\n");
        out.push_str(body);
        Ok(out)
    }

    /// Split a rendered post back into front-matter and body.
    /// Returns `None` if the document doesn't start with a `---` block.
    #[cfg(test)]
    pub fn parse(document: &str) -> Result<Option<(Self, &str)>> {
        let Some(rest) = document.strip_prefix("---\n") else {
            return Ok(None);
        };
        let Some(end_pos) = rest.find("\n---\n") else {
            return Ok(None);
        };

        let yaml_content = &rest[..end_pos];
        let remaining = &rest[end_pos + 5..];
        let remaining = remaining.strip_prefix('\n').unwrap_or(remaining);

        let fm: FrontMatter = serde_yaml::from_str(yaml_content)?;
        Ok(Some((fm, remaining)))
    }
}
