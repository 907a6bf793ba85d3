//! Utility functions for commit-pages

use chrono::{Local, TimeZone};

/// Reduces a commit subject to a filename-safe token.
///
/// Keeps ASCII alphanumerics, hyphen, underscore and space, drops every
/// other character, then turns each run of spaces into a single underscore.
/// The result may be empty when the subject has no allowed characters.
///
/// # Arguments
///
/// * `subject`: Commit subject line
///
/// # Returns
///
/// Sanitized token suitable for embedding in a file name
pub fn sanitize_title(subject: &str) -> String {
    let mut out = String::with_capacity(subject.len());
    let mut in_space = false;

    for ch in subject.chars() {
        match ch {
            ' ' => {
                if !in_space {
                    out.push('_');
                }
                in_space = true;
            }
            c if c.is_ascii_alphanumeric() || c == '-' || c == '_' => {
                out.push(c);
                in_space = false;
            }
            _ => {}
        }
    }

    out
}

/// Escapes text for inclusion in HTML element content.
///
/// Replaces `&`, `<` and `>` only. Ampersands go first so the entities
/// produced for the angle brackets are never escaped twice.
pub fn escape_html(text: &str) -> String {
    text.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
}

/// Formats Unix timestamp in the local time zone
///
/// Uses the same layout as `git log --date=local`, for example
/// `Thu Oct 16 18:11:00 2026`. Timestamps outside the representable range
/// fall back to the raw seconds value.
pub fn format_local_date(seconds: i64) -> String {
    match Local.timestamp_opt(seconds, 0).single() {
        Some(time) => time.format("%a %b %-d %H:%M:%S %Y").to_string(),
        None => seconds.to_string(),
    }
}
