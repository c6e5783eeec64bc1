//! Page layout wrapper component

use maud::{DOCTYPE, Markup, html};

use super::metadata::head_tags;
use crate::content::COMPANY;
use crate::document::Document;

/// Wraps page content with standard HTML structure
///
/// Provides DOCTYPE, charset, viewport, icon font and stylesheet loading,
/// and renders whatever the page's load-time initialization wrote into the
/// document head. A headless document gets only the fixed head elements and
/// a title falling back to the company name.
///
/// # Arguments
///
/// * `document`: Host document carrying injected metadata
/// * `stylesheets`: CSS file paths to include
/// * `scripts`: Deferred script paths to include
/// * `body`: Page-specific body markup
///
/// # Returns
///
/// Complete HTML document with wrapped content
pub fn page_wrapper(
    document: &Document,
    stylesheets: &[&str],
    scripts: &[&str],
    body: Markup,
) -> Markup {
    let head = document.head();
    let title = head.and_then(|h| h.title()).unwrap_or(COMPANY.name);

    html! {
        (DOCTYPE)
        html lang="en" {
            head {
                meta charset="utf-8";
                meta name="viewport" content="width=device-width, initial-scale=1.0";
                title { (title) }
                @if let Some(head) = head {
                    (head_tags(head))
                }
                script src="https://unpkg.com/@phosphor-icons/web" {}
                @for stylesheet in stylesheets {
                    link rel="stylesheet" href=(stylesheet);
                }
                @for script in scripts {
                    script src=(script) defer {}
                }
            }
            body {
                (body)
            }
        }
    }
}
