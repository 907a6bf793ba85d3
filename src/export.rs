//! Commit export pass.

use std::fs;
use std::path::{Path, PathBuf};
use tracing::{debug, info};

use crate::error::ExportError;
use crate::git;
use crate::pages;

/// Default output directory name, created beneath the repository.
pub const DEFAULT_OUTPUT_DIR: &str = "commits_html";

/// Outcome of a successful export run.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ExportReport {
    files_written: usize,
    log: String,
    files: Vec<PathBuf>,
}

impl ExportReport {
    /// Number of pages written.
    pub fn files_written(&self) -> usize {
        self.files_written
    }

    /// One `Generated: <path>` line per page written.
    pub fn log(&self) -> &str {
        &self.log
    }

    /// Written page paths in export order.
    pub fn files(&self) -> &[PathBuf] {
        &self.files
    }

    fn record(&mut self, path: PathBuf) {
        self.log.push_str(&format!("Generated: {}\n", path.display()));
        self.files.push(path);
        self.files_written += 1;
    }
}

/// Exports every commit of a repository as a standalone HTML page.
///
/// Commits are processed one at a time, oldest first, numbered from 1.
/// The output directory is created only after history has been read, so a
/// path that is not a repository leaves nothing behind. Existing pages with
/// the same name are overwritten; pages from earlier runs whose names no
/// longer occur are left untouched.
///
/// # Arguments
///
/// * `repo_path`: Path to git repository
/// * `output_dir`: Directory receiving the pages
///
/// # Errors
///
/// Returns [`ExportError::RepositoryAccess`] if history, metadata or a diff
/// cannot be read, and [`ExportError::Write`] if the directory or a page
/// cannot be written. Pages written before the failure remain on disk.
///
/// # Examples
///
/// ```no_run
/// use commit_pages::export;
///
/// let report = export(".", "commits_html")?;
/// println!("{} pages", report.files_written());
/// # Ok::<(), commit_pages::ExportError>(())
/// ```
pub fn export(
    repo_path: impl AsRef<Path>,
    output_dir: impl AsRef<Path>,
) -> Result<ExportReport, ExportError> {
    let repo_path = repo_path.as_ref();
    let output_dir = output_dir.as_ref();

    let commits =
        git::list_commits(repo_path).map_err(|e| ExportError::repository(repo_path, e))?;

    info!(
        repo = %repo_path.display(),
        count = commits.len(),
        "Exporting commits"
    );

    fs::create_dir_all(output_dir).map_err(|e| ExportError::write(output_dir, e))?;

    let mut report = ExportReport::default();

    for (offset, commit) in commits.iter().enumerate() {
        let index = offset + 1;
        let path = output_dir.join(pages::commit::file_name(index, commit));

        let info = git::read_commit(repo_path, commit.oid())
            .map_err(|e| ExportError::repository(repo_path, e))?;
        let diff = git::show_diff(repo_path, commit.oid())
            .map_err(|e| ExportError::repository(repo_path, e))?;

        let html = pages::commit::generate(index, commit, &info, &diff);
        fs::write(&path, html.into_string()).map_err(|e| ExportError::write(&path, e))?;

        debug!(path = %path.display(), "Generated commit page");
        report.record(path);
    }

    info!(files = report.files_written(), "Export finished");

    Ok(report)
}
