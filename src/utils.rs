//! HTML escaping utilities
//!
//! Escaping for inserting untrusted mail data (subjects, display names)
//! into HTML text nodes. Text-node context only; see
//! [`mailfilter_utils::html`] for the exact contract.

// Re-export all mailfilter-utils functionality
pub use mailfilter_utils::*;
