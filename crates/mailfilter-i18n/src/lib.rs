//! German date-time rendering for the mailfilter frontend
//!
//! The frontend is German-only; every timestamp it shows (mail receipt
//! times, log entries, training runs) is rendered in the fixed `de-DE`
//! pattern `dd.MM.yyyy, HH:mm:ss`. This crate owns that rendering plus the
//! ISO-8601 parsing that precedes it.

#![warn(missing_docs)]
#![warn(rustdoc::broken_intra_doc_links)]

pub mod datetime;

// Re-exports for convenience
pub use datetime::{
	INVALID_DATE_PLACEHOLDER, NO_DATE_PLACEHOLDER, format_datetime_de, format_datetime_de_in,
	parse_iso_datetime_in,
};
