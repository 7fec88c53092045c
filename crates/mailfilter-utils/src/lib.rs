//! HTML escaping utilities for the mailfilter frontend
//!
//! Mail subjects, sender display names and filter patterns are
//! user-controlled and end up in HTML text nodes all over the frontend.
//! This crate provides the single escaping routine those pages share.

#![warn(missing_docs)]
#![warn(rustdoc::broken_intra_doc_links)]

pub mod html;

// Re-exports for convenience
pub use html::{escape, escape_opt};
