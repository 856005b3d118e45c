//! Feed loader - turns a WXR document into post records

use quick_xml::events::{BytesStart, Event};
use quick_xml::name::{Namespace, ResolveResult};
use quick_xml::NsReader;
use std::fs;
use std::path::Path;

use super::{Namespaces, PostRecord};
use crate::error::{MigrateError, Result};

/// A parsed export: channel title plus every `<item>` in document order
#[derive(Debug, Clone, Default)]
pub struct Feed {
    pub title: Option<String>,
    pub items: Vec<PostRecord>,
}

/// Namespace an element name resolved to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Scope {
    /// No namespace: `<title>`, `<category>`, `<item>`
    Default,
    Wp,
    Content,
    Excerpt,
    Dc,
    Other,
}

/// Item children the loader knows how to read
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Field {
    Title,
    Content,
    Excerpt,
    Creator,
    PostDate,
    PostName,
    PostType,
    Status,
    Category,
    Tag,
}

/// Reads WordPress exports
pub struct FeedLoader<'a> {
    namespaces: &'a Namespaces,
}

impl<'a> FeedLoader<'a> {
    /// Create a loader resolving names against the given namespace table
    pub fn new(namespaces: &'a Namespaces) -> Self {
        Self { namespaces }
    }

    /// Read and parse an export file
    pub fn load<P: AsRef<Path>>(&self, path: P) -> Result<Feed> {
        let bytes = fs::read(path.as_ref())?;
        let xml = String::from_utf8(bytes).map_err(|e| MigrateError::Parse {
            position: e.utf8_error().valid_up_to() as u64,
            message: e.to_string(),
        })?;
        self.parse(&xml)
    }

    /// Parse an export document held in memory
    pub fn parse(&self, xml: &str) -> Result<Feed> {
        let mut reader = NsReader::from_str(xml);

        let mut feed = Feed::default();
        // Number of currently open elements
        let mut depth: usize = 0;
        let mut saw_rss = false;
        let mut channel_level: Option<usize> = None;
        let mut in_channel_title = false;
        let mut channel_title = String::new();

        // Level of the open <item>, and the child field being read
        let mut item_level: Option<usize> = None;
        let mut item = PostRecord::default();
        let mut field: Option<Field> = None;
        let mut text = String::new();

        loop {
            let (scope, event) = match reader.read_resolved_event() {
                Ok((ns, event)) => (self.scope_of(&ns), event),
                Err(e) => {
                    return Err(MigrateError::Parse {
                        position: reader.error_position() as u64,
                        message: e.to_string(),
                    })
                }
            };

            match event {
                Event::Start(e) => {
                    let local = e.local_name();
                    let local: &[u8] = local.as_ref();
                    let unbound = scope == Scope::Default;

                    if depth == 0 && unbound && local == b"rss" {
                        saw_rss = true;
                    } else if saw_rss && depth == 1 && unbound && local == b"channel" {
                        channel_level = Some(depth);
                    } else if let Some(level) = item_level {
                        if depth == level + 1 {
                            field = classify(scope, local, &e, &reader)?;
                            text.clear();
                        }
                    } else if unbound && local == b"item" {
                        item_level = Some(depth);
                        item = PostRecord::default();
                    } else if channel_level.map_or(false, |level| depth == level + 1)
                        && unbound
                        && local == b"title"
                    {
                        in_channel_title = true;
                    }
                    depth += 1;
                }
                Event::Empty(e) => {
                    let local = e.local_name();
                    let local: &[u8] = local.as_ref();
                    let unbound = scope == Scope::Default;

                    if depth == 0 && unbound && local == b"rss" {
                        saw_rss = true;
                    } else if saw_rss && depth == 1 && unbound && local == b"channel" {
                        channel_level = Some(depth);
                    } else if let Some(level) = item_level {
                        // <wp:post_name/> and friends: present but empty
                        if depth == level + 1 {
                            if let Some(f) = classify(scope, local, &e, &reader)? {
                                assign(&mut item, f, String::new());
                            }
                        }
                    } else if unbound && local == b"item" {
                        feed.items.push(PostRecord::default());
                    }
                }
                Event::Text(e) => {
                    if collecting(field, item_level, depth) || in_channel_title {
                        let unescaped = e.unescape().map_err(|err| MigrateError::Parse {
                            position: reader.buffer_position() as u64,
                            message: err.to_string(),
                        })?;
                        if in_channel_title {
                            channel_title.push_str(&unescaped);
                        } else {
                            text.push_str(&unescaped);
                        }
                    }
                }
                Event::CData(e) => {
                    if collecting(field, item_level, depth) || in_channel_title {
                        let raw = std::str::from_utf8(&e).map_err(|err| MigrateError::Parse {
                            position: reader.buffer_position() as u64,
                            message: err.to_string(),
                        })?;
                        if in_channel_title {
                            channel_title.push_str(raw);
                        } else {
                            text.push_str(raw);
                        }
                    }
                }
                Event::End(_) => {
                    depth = depth.checked_sub(1).ok_or_else(|| MigrateError::Parse {
                        position: reader.buffer_position() as u64,
                        message: "unexpected closing tag".to_string(),
                    })?;

                    if in_channel_title {
                        in_channel_title = false;
                        feed.title = Some(std::mem::take(&mut channel_title));
                    }

                    if let Some(level) = item_level {
                        if depth == level + 1 {
                            if let Some(f) = field.take() {
                                assign(&mut item, f, std::mem::take(&mut text));
                            }
                        } else if depth == level {
                            item_level = None;
                            feed.items.push(std::mem::take(&mut item));
                        }
                    }
                }
                Event::Eof => break,
                _ => {}
            }
        }

        if depth != 0 {
            return Err(MigrateError::Parse {
                position: reader.buffer_position() as u64,
                message: format!("unexpected end of document, {} unclosed element(s)", depth),
            });
        }
        if !saw_rss {
            return Err(MigrateError::MissingElement("rss".to_string()));
        }
        if channel_level.is_none() {
            return Err(MigrateError::MissingElement("channel".to_string()));
        }

        tracing::debug!(
            "Parsed feed {:?}: {} items",
            feed.title.as_deref().unwrap_or(""),
            feed.items.len()
        );

        Ok(feed)
    }

    /// Which of our namespaces a resolved name belongs to
    fn scope_of(&self, ns: &ResolveResult) -> Scope {
        let uri = match ns {
            ResolveResult::Unbound => return Scope::Default,
            ResolveResult::Bound(Namespace(uri)) => *uri,
            ResolveResult::Unknown(_) => return Scope::Other,
        };

        match self.namespaces.prefix_of(uri) {
            Some("wp") => Scope::Wp,
            Some("content") => Scope::Content,
            Some("excerpt") => Scope::Excerpt,
            Some("dc") => Scope::Dc,
            _ => Scope::Other,
        }
    }
}

/// Map an item child element to the field it fills
fn classify(
    scope: Scope,
    local: &[u8],
    start: &BytesStart,
    reader: &NsReader<&[u8]>,
) -> Result<Option<Field>> {
    let field = match (scope, local) {
        (Scope::Default, b"title") => Some(Field::Title),
        (Scope::Default, b"category") => return category_field(start, reader),
        (Scope::Content, b"encoded") => Some(Field::Content),
        (Scope::Excerpt, b"encoded") => Some(Field::Excerpt),
        (Scope::Dc, b"creator") => Some(Field::Creator),
        (Scope::Wp, b"post_date") => Some(Field::PostDate),
        (Scope::Wp, b"post_name") => Some(Field::PostName),
        (Scope::Wp, b"post_type") => Some(Field::PostType),
        (Scope::Wp, b"status") => Some(Field::Status),
        _ => None,
    };
    Ok(field)
}

/// Whether text at the current depth belongs to an item field
fn collecting(field: Option<Field>, item_level: Option<usize>, depth: usize) -> bool {
    match (field, item_level) {
        (Some(_), Some(level)) => depth == level + 2,
        _ => false,
    }
}

/// `<category>` becomes a category or a tag depending on its `domain`
fn category_field(start: &BytesStart, reader: &NsReader<&[u8]>) -> Result<Option<Field>> {
    let domain = start
        .try_get_attribute("domain")
        .map_err(|e| MigrateError::Parse {
            position: reader.buffer_position() as u64,
            message: e.to_string(),
        })?;

    let Some(domain) = domain else {
        return Ok(None);
    };

    let value = domain
        .decode_and_unescape_value(reader.decoder())
        .map_err(|e| MigrateError::Parse {
            position: reader.buffer_position() as u64,
            message: e.to_string(),
        })?;

    Ok(match value.as_ref() {
        "category" => Some(Field::Category),
        "post_tag" => Some(Field::Tag),
        _ => None,
    })
}

fn assign(item: &mut PostRecord, field: Field, value: String) {
    match field {
        Field::Title => item.title = Some(value),
        Field::Content => item.content = Some(value),
        Field::Excerpt => item.excerpt = Some(value),
        Field::Creator => item.author = Some(value),
        Field::PostDate => item.post_date = Some(value),
        Field::PostName => item.post_name = Some(value),
        Field::PostType => item.post_type = Some(value),
        Field::Status => item.status = Some(value),
        Field::Category => item.categories.push(value),
        Field::Tag => item.tags.push(value),
    }
}
