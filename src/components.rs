//! Reusable UI components for exported commit pages
//!
//! Provides the document wrapper, the commit metadata block and the
//! colorized diff body. Pages compose these pieces into complete documents.

pub mod diff;
pub mod layout;
pub mod metadata;
