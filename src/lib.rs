//! Export every commit of a git repository as a standalone HTML page.

mod assets;
pub mod components;
mod config;
mod error;
mod export;
mod git;
pub mod pages;
pub mod server;
mod util;

pub use assets::{COMMIT_CSS, FULLSCREEN_JS};
pub use config::{Config, DEFAULT_PORT};
pub use error::ExportError;
pub use export::{DEFAULT_OUTPUT_DIR, ExportReport, export};
pub use git::{CommitInfo, CommitRef, list_commits, read_commit, show_diff};
pub use util::{escape_html, format_local_date, sanitize_title};
