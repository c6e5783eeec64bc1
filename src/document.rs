//! In-memory model of the host document's `<head>`
//!
//! Page controllers write their metadata here; the layout component renders
//! it. A document may have no head at all, in which case writers skip their
//! work silently.

use serde_json::Value;

/// Attribute a `<meta>` tag is keyed by.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MetaAttr {
    /// `<meta name="..">`
    Name,
    /// `<meta property="..">`, used by Open Graph.
    Property,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MetaTag {
    pub attr: MetaAttr,
    pub key: String,
    pub content: String,
}

impl MetaTag {
    pub fn name(key: &str, content: &str) -> Self {
        Self {
            attr: MetaAttr::Name,
            key: key.to_string(),
            content: content.to_string(),
        }
    }

    pub fn property(key: &str, content: &str) -> Self {
        Self {
            attr: MetaAttr::Property,
            key: key.to_string(),
            content: content.to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LinkTag {
    pub rel: String,
    pub href: String,
}

/// Contents of the document head.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Head {
    title: Option<String>,
    meta: Vec<MetaTag>,
    links: Vec<LinkTag>,
    json_ld: Vec<Value>,
}

impl Head {
    pub fn title(&self) -> Option<&str> {
        self.title.as_deref()
    }

    pub fn meta(&self) -> &[MetaTag] {
        &self.meta
    }

    pub fn links(&self) -> &[LinkTag] {
        &self.links
    }

    pub fn json_ld(&self) -> &[Value] {
        &self.json_ld
    }

    pub fn set_title(&mut self, title: &str) {
        self.title = Some(title.to_string());
    }

    /// Adds a meta tag, replacing the content of an existing tag with the
    /// same attribute and key.
    pub fn upsert_meta(&mut self, tag: MetaTag) {
        match self
            .meta
            .iter_mut()
            .find(|m| m.attr == tag.attr && m.key == tag.key)
        {
            Some(existing) => existing.content = tag.content,
            None => self.meta.push(tag),
        }
    }

    /// Looks up a meta tag's content by attribute and key.
    pub fn meta_content(&self, attr: MetaAttr, key: &str) -> Option<&str> {
        self.meta
            .iter()
            .find(|m| m.attr == attr && m.key == key)
            .map(|m| m.content.as_str())
    }

    pub fn append_link(&mut self, rel: &str, href: &str) {
        self.links.push(LinkTag {
            rel: rel.to_string(),
            href: href.to_string(),
        });
    }

    pub fn append_json_ld(&mut self, data: Value) {
        self.json_ld.push(data);
    }
}

/// Host document a page renders into.
#[derive(Debug, Clone, PartialEq)]
pub struct Document {
    url: String,
    head: Option<Head>,
}

impl Document {
    /// Creates a document at `url` with an empty head.
    pub fn new(url: &str) -> Self {
        Self {
            url: url.to_string(),
            head: Some(Head::default()),
        }
    }

    /// Creates a document whose head is unavailable.
    pub fn headless(url: &str) -> Self {
        Self {
            url: url.to_string(),
            head: None,
        }
    }

    pub fn url(&self) -> &str {
        &self.url
    }

    pub fn head(&self) -> Option<&Head> {
        self.head.as_ref()
    }

    pub fn head_mut(&mut self) -> Option<&mut Head> {
        self.head.as_mut()
    }
}

/// Serializes structured data for embedding in a `<script>` element.
///
/// `</` is written as `<\/` so string values cannot terminate the script
/// element early; JSON parsers read both forms identically.
pub fn json_ld_text(data: &Value) -> String {
    data.to_string().replace("</", "<\\/")
}
