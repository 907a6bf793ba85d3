//! Commit page generation

use maud::{Markup, html};

use crate::components::diff::render_diff;
use crate::components::layout::document;
use crate::components::metadata::commit_metadata;
use crate::git::{CommitInfo, CommitRef};
use crate::util::sanitize_title;

/// File name of the exported page for a commit.
///
/// Follows `<index>_commit_<hash>_<sanitized subject>.html` with an
/// unpadded 1-based index.
pub fn file_name(index: usize, commit: &CommitRef) -> String {
    format!(
        "{}_commit_{}_{}.html",
        index,
        commit.short_oid(),
        sanitize_title(commit.subject())
    )
}

/// Page title, `[index] Commit <hash> - <subject>`.
pub fn title(index: usize, commit: &CommitRef) -> String {
    format!("[{}] Commit {} - {}", index, commit.short_oid(), commit.subject())
}

/// Generates the standalone HTML page for one commit
///
/// # Arguments
///
/// * `index`: 1-based export position of the commit
/// * `commit`: Commit as enumerated from history (title source)
/// * `info`: Metadata fetched for this commit
/// * `diff`: Raw output of `git show` for this commit
///
/// # Returns
///
/// Rendered HTML markup
pub fn generate(index: usize, commit: &CommitRef, info: &CommitInfo, diff: &str) -> Markup {
    document(
        &title(index, commit),
        html! {
            (commit_metadata(index, info))
            (render_diff(diff))
        },
    )
}
