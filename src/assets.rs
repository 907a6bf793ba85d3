//! Bundled static assets

/// Stylesheet embedded inline into every commit page.
pub const COMMIT_CSS: &str = include_str!("../assets/commit.css");

/// Browser snippet requesting fullscreen on the current document.
///
/// Tries the standard API, then the Mozilla, WebKit and Microsoft prefixed
/// variants, and does nothing when none is available.
pub const FULLSCREEN_JS: &str = include_str!("../assets/fullscreen.js");
