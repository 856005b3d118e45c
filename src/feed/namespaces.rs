//! XML namespaces used by WordPress exports

/// Namespace URIs the feed loader resolves element names against.
///
/// Elements are matched by URI, so a feed that binds these namespaces to
/// unusual prefixes is still read correctly.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Namespaces {
    /// Post metadata (`wp:post_date`, `wp:status`, ...)
    pub wp: &'static str,
    /// Encoded post body (`content:encoded`)
    pub content: &'static str,
    /// Encoded excerpt (`excerpt:encoded`)
    pub excerpt: &'static str,
    /// Dublin Core (`dc:creator`)
    pub dc: &'static str,
}

/// Namespaces of a WXR 1.2 export
pub const WORDPRESS_NAMESPACES: Namespaces = Namespaces {
    wp: "http://wordpress.org/export/1.2/",
    content: "http://purl.org/rss/1.0/modules/content/",
    excerpt: "http://wordpress.org/export/1.2/excerpt/",
    dc: "http://purl.org/dc/elements/1.1/",
};

impl Namespaces {
    /// Conventional prefix and URI pairs
    pub fn entries(&self) -> [(&'static str, &'static str); 4] {
        [
            ("wp", self.wp),
            ("content", self.content),
            ("excerpt", self.excerpt),
            ("dc", self.dc),
        ]
    }

    /// Conventional prefix bound to a URI, if it is one of ours
    pub fn prefix_of(&self, uri: &[u8]) -> Option<&'static str> {
        self.entries()
            .into_iter()
            .find(|(_, u)| u.as_bytes() == uri)
            .map(|(prefix, _)| prefix)
    }
}
