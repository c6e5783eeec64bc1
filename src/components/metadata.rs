//! Document head metadata components

use maud::{Markup, PreEscaped, html};

use crate::document::{Head, MetaAttr, json_ld_text};

/// Renders the injected head contents
///
/// Emits meta tags keyed by `name` or `property`, link elements and one
/// `application/ld+json` script per structured data block. The title is
/// rendered by the layout, which owns the fallback.
///
/// # Arguments
///
/// * `head`: Head populated by the page's load-time initialization
///
/// # Returns
///
/// Markup for placement inside `<head>`
pub fn head_tags(head: &Head) -> Markup {
    html! {
        @for tag in head.meta() {
            @match tag.attr {
                MetaAttr::Name => {
                    meta name=(tag.key) content=(tag.content);
                }
                MetaAttr::Property => {
                    meta property=(tag.key) content=(tag.content);
                }
            }
        }
        @for link in head.links() {
            link rel=(link.rel) href=(link.href);
        }
        @for data in head.json_ld() {
            script type="application/ld+json" { (PreEscaped(json_ld_text(data))) }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::document::MetaTag;
    use serde_json::json;

    #[test]
    fn test_head_tags_renders_each_kind() {
        // Arrange
        let mut head = Head::default();
        head.upsert_meta(MetaTag::name("robots", "index, follow"));
        head.upsert_meta(MetaTag::property("og:type", "website"));
        head.append_link("canonical", "https://aalekhansoftware.com/");
        head.append_json_ld(json!({ "@type": "Organization" }));

        // Act
        let html = head_tags(&head).into_string();

        // Assert
        assert!(html.contains(r#"<meta name="robots" content="index, follow">"#));
        assert!(html.contains(r#"<meta property="og:type" content="website">"#));
        assert!(html.contains(r#"<link rel="canonical" href="https://aalekhansoftware.com/">"#));
        assert!(html.contains(r#"<script type="application/ld+json">{"@type":"Organization"}</script>"#));
    }

    #[test]
    fn test_head_tags_escapes_content() {
        // Arrange
        let mut head = Head::default();
        head.upsert_meta(MetaTag::name("description", "\"quoted\" <b>"));

        // Act
        let html = head_tags(&head).into_string();

        // Assert
        assert!(html.contains("&quot;quoted&quot; &lt;b&gt;"));
    }
}
