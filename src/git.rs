//! Git repository operations.

use anyhow::{Context, Result, bail};
use gix::bstr::ByteSlice;
use gix::objs::commit::MessageRef;
use gix::traverse::commit::simple::Sorting;
use std::path::Path;
use std::process::Command;

/// Commit as enumerated from history.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommitRef {
    oid: String,
    short_oid: String,
    subject: String,
}

impl CommitRef {
    /// Builds a commit reference from already known values.
    pub fn new(
        oid: impl Into<String>,
        short_oid: impl Into<String>,
        subject: impl Into<String>,
    ) -> Self {
        Self {
            oid: oid.into(),
            short_oid: short_oid.into(),
            subject: subject.into(),
        }
    }

    /// Full commit hash.
    pub fn oid(&self) -> &str {
        &self.oid
    }

    /// Abbreviated commit hash, as `git log --pretty=%h` prints it.
    pub fn short_oid(&self) -> &str {
        &self.short_oid
    }

    /// Commit subject, as `git log --pretty=%s` prints it.
    pub fn subject(&self) -> &str {
        &self.subject
    }
}

/// Commit metadata shown on an exported page.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommitInfo {
    short_oid: String,
    author: String,
    date: i64,
    subject: String,
}

impl CommitInfo {
    /// Builds metadata from already known values.
    pub fn new(
        short_oid: impl Into<String>,
        author: impl Into<String>,
        date: i64,
        subject: impl Into<String>,
    ) -> Self {
        Self {
            short_oid: short_oid.into(),
            author: author.into(),
            date,
            subject: subject.into(),
        }
    }

    /// Abbreviated commit hash.
    pub fn short_oid(&self) -> &str {
        &self.short_oid
    }

    /// Author name.
    pub fn author(&self) -> &str {
        &self.author
    }

    /// Author timestamp (Unix seconds).
    pub fn date(&self) -> i64 {
        self.date
    }

    /// Commit subject.
    pub fn subject(&self) -> &str {
        &self.subject
    }
}

/// Opens the repository containing `repo_path`, searching parent
/// directories the way git does from a working directory.
fn open_repository(repo_path: &Path) -> Result<gix::Repository> {
    gix::discover(repo_path)
        .with_context(|| format!("Failed to open repository at {}", repo_path.display()))
}

/// First paragraph of the message with line breaks folded into spaces.
fn subject_of(message: MessageRef<'_>) -> String {
    message.summary().to_str_lossy().into_owned()
}

fn short_id(commit: &gix::Commit<'_>) -> Result<String> {
    let prefix = commit
        .id()
        .shorten()
        .with_context(|| format!("Failed to abbreviate commit id {}", commit.id))?;
    Ok(prefix.to_string())
}

/// Lists every commit reachable from HEAD, oldest first.
///
/// Walks history newest first by commit time, never visiting a commit
/// before its children, and reverses the result. This is the order of
/// `git log --reverse`. A repository whose HEAD is unborn has no commits
/// and yields an empty vector.
///
/// # Errors
///
/// Returns error if:
/// - Repository cannot be opened
/// - HEAD cannot be read
/// - Commit traversal fails
///
/// # Examples
///
/// ```no_run
/// use commit_pages::list_commits;
/// use std::path::Path;
///
/// for commit in list_commits(Path::new("."))? {
///     println!("{}: {}", commit.short_oid(), commit.subject());
/// }
/// # Ok::<(), anyhow::Error>(())
/// ```
pub fn list_commits(repo_path: impl AsRef<Path>) -> Result<Vec<CommitRef>> {
    let repo = open_repository(repo_path.as_ref())?;

    let head = repo.head().context("Failed to read HEAD reference")?;
    if head.is_unborn() {
        return Ok(Vec::new());
    }

    let tip = repo.head_commit().context("Failed to read HEAD commit")?;
    let walker = tip
        .ancestors()
        .sorting(Sorting::ByCommitTimeNewestFirst)
        .all()
        .context("Failed to create commit ancestor iterator")?;

    let mut commits = Vec::new();
    for result in walker {
        let info = result.context("Failed to traverse commit ancestor")?;
        let commit = info.object().context("Failed to read commit object")?;

        let message = commit.message().context("Failed to read commit message")?;

        commits.push(CommitRef {
            oid: commit.id.to_hex().to_string(),
            short_oid: short_id(&commit)?,
            subject: subject_of(message),
        });
    }

    commits.reverse();

    Ok(commits)
}

/// Reads metadata for exactly one commit.
///
/// # Errors
///
/// Returns error if the repository cannot be opened, the id is malformed,
/// or the object is missing or not a commit.
pub fn read_commit(repo_path: impl AsRef<Path>, oid: &str) -> Result<CommitInfo> {
    let repo = open_repository(repo_path.as_ref())?;

    let id = gix::ObjectId::from_hex(oid.as_bytes())
        .with_context(|| format!("Invalid commit id: {}", oid))?;

    let commit = repo
        .find_object(id)
        .with_context(|| format!("Failed to find commit {}", oid))?
        .try_into_commit()
        .map_err(|_| anyhow::anyhow!("Object {} is not a commit", oid))?;

    let author = commit.author().context("Failed to read author")?;
    let message = commit.message().context("Failed to read commit message")?;

    Ok(CommitInfo {
        short_oid: short_id(&commit)?,
        author: author.name.to_str_lossy().to_string(),
        date: author.time.seconds,
        subject: subject_of(message),
    })
}

/// Produces the textual diff of one commit.
///
/// Runs `git show` with color and external diff drivers disabled. The
/// commit id is passed as a separate argument and never reaches a shell.
///
/// # Errors
///
/// Returns error if git cannot be spawned or exits unsuccessfully; the
/// error carries git's stderr.
pub fn show_diff(repo_path: impl AsRef<Path>, oid: &str) -> Result<String> {
    let output = Command::new("git")
        .args(["show", "--color=never", "--no-ext-diff", oid, "--"])
        .current_dir(repo_path.as_ref())
        .output()
        .context("Failed to run git show")?;

    if !output.status.success() {
        bail!(
            "git show {} failed: {}",
            oid,
            String::from_utf8_lossy(&output.stderr).trim()
        );
    }

    Ok(String::from_utf8_lossy(&output.stdout).into_owned())
}
