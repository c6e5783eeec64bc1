//! Phosphor icon rendering

use maud::{Markup, html};

/// Renders a Phosphor icon inside the standard icon box
///
/// # Arguments
///
/// * `icon`: Phosphor icon name including the `ph-` prefix
pub fn icon_box(icon: &str) -> Markup {
    html! {
        div class="icon-box" {
            (icon_tag(icon))
        }
    }
}

/// Renders a bare Phosphor icon element.
pub fn icon_tag(icon: &str) -> Markup {
    html! {
        i class=(icon_class(icon)) aria-hidden="true" {}
    }
}

/// Returns the full class list for a Phosphor icon name
///
/// Names already carrying a weight prefix (`ph-fill`, `ph-bold`) are passed
/// through as they are; bare names get the regular weight.
pub fn icon_class(icon: &str) -> String {
    if icon.contains(' ') {
        icon.to_string()
    } else {
        format!("ph {}", icon)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_icon_class_bare_name() {
        assert_eq!(icon_class("ph-code"), "ph ph-code");
    }

    #[test]
    fn test_icon_class_with_weight() {
        assert_eq!(icon_class("ph-fill ph-star"), "ph-fill ph-star");
    }

    #[test]
    fn test_icon_box_markup() {
        // Arrange & Act
        let html = icon_box("ph-rocket").into_string();

        // Assert
        assert!(html.contains(r#"class="icon-box""#));
        assert!(html.contains(r#"class="ph ph-rocket""#));
    }
}
