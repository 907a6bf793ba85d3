//! Page generation modules
//!
//! One page type exists: the per-commit export page.

pub mod commit;
