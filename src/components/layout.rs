//! Page layout wrapper component

use maud::{DOCTYPE, Markup, PreEscaped, html};

use crate::assets::COMMIT_CSS;

/// Wraps page content with standard HTML structure
///
/// Provides DOCTYPE, charset and viewport meta tags, and the stylesheet
/// embedded inline so every exported page stands alone without sibling
/// asset files.
///
/// # Arguments
///
/// * `title`: Full page title text
/// * `body`: Page-specific body markup
///
/// # Returns
///
/// Complete HTML document with wrapped content
pub fn document(title: &str, body: Markup) -> Markup {
    html! {
        (DOCTYPE)
        html lang="en" {
            head {
                meta charset="UTF-8";
                meta name="viewport" content="width=device-width, initial-scale=1.0";
                title { (title) }
                style { (PreEscaped(COMMIT_CSS)) }
            }
            body {
                (body)
            }
        }
    }
}
