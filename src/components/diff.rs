//! Colorized diff body component

use maud::{Markup, PreEscaped, html};

use crate::util::escape_html;

/// Kind of a diff line, decided by its first character.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LineKind {
    Addition,
    Deletion,
    Context,
}

impl LineKind {
    /// CSS class for the wrapping span, if the line gets one.
    pub fn css_class(self) -> Option<&'static str> {
        match self {
            Self::Addition => Some("addition"),
            Self::Deletion => Some("deletion"),
            Self::Context => None,
        }
    }
}

/// Classifies a diff line by its leading `+` or `-`.
///
/// File headers (`+++`, `---`) count as additions and deletions too.
pub fn classify_line(line: &str) -> LineKind {
    if line.starts_with('+') {
        LineKind::Addition
    } else if line.starts_with('-') {
        LineKind::Deletion
    } else {
        LineKind::Context
    }
}

/// Renders raw diff text as escaped, line-classified markup.
///
/// Splits on `\n` and rejoins with `\n`, so line structure (including a
/// trailing newline) survives unchanged. Each addition or deletion line is
/// wrapped in a span carrying the matching class.
pub fn diff_lines(raw: &str) -> Markup {
    let escaped = escape_html(raw);
    let rendered: Vec<String> = escaped
        .split('\n')
        .map(|line| match classify_line(line).css_class() {
            Some(class) => format!("<span class=\"{}\">{}</span>", class, line),
            None => line.to_string(),
        })
        .collect();

    PreEscaped(rendered.join("\n"))
}

/// Renders the diff block wrapped in `pre` and `code.diff`.
pub fn render_diff(raw: &str) -> Markup {
    html! {
        pre {
            code class="diff" { (diff_lines(raw)) }
        }
    }
}
