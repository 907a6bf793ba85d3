//! Commit metadata components

use maud::{Markup, html};

use crate::git::CommitInfo;
use crate::util::format_local_date;

/// Renders commit heading with date, author and subject
///
/// # Arguments
///
/// * `index`: 1-based export position of the commit
/// * `commit`: Metadata fetched for this commit
pub fn commit_metadata(index: usize, commit: &CommitInfo) -> Markup {
    html! {
        h2 { "[" (index) "] Commit " (commit.short_oid()) }
        p { strong { "Date:" } " " (format_local_date(commit.date())) }
        p { strong { "Author:" } " " (commit.author()) }
        p { strong { "Message:" } " " (commit.subject()) }
    }
}
