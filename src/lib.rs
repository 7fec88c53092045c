//! # Mailfilter Web
//!
//! Presentation-layer helpers for the mailfilter web frontend.
//!
//! Mailfilter's pages display untrusted mail data (subjects, sender
//! addresses, timestamps) and bind remote data tables to the JSON API
//! (`/api/mail`, `/api/mails`). This facade bundles the helper crates
//! those pages rely on:
//!
//! - [`utils`]: HTML escaping for text-node insertion
//! - [`i18n`]: German (`de-DE`) date-time rendering
//! - [`tables`]: remote data table configuration and initialization
//!
//! The helpers are independent of each other and stateless apart from one
//! process-wide language resource URL injected at startup (see
//! [`tables::language`]).
//!
//! ## Feature Flags
//!
//! - `full` (default) - All helpers
//! - `utils` - HTML escaping only
//! - `i18n` - Date-time rendering only
//! - `tables` - Table configuration only
//!
//! ## Example
//!
//! ```
//! use mailfilter::tables::{ColumnSpec, TableSettings};
//! use mailfilter::{escape, format_datetime_de};
//!
//! let subject = escape("Re: 10 > 5 & other truths");
//! assert_eq!(subject, "Re: 10 &gt; 5 &amp; other truths");
//!
//! assert_eq!(format_datetime_de(None), "(kein Datum)");
//!
//! let settings = TableSettings::new(
//! 	"/api/mails",
//! 	vec![ColumnSpec::new("subject").title("Betreff")],
//! )
//! .to_value()
//! .unwrap();
//! assert_eq!(settings["ajax"]["dataSrc"], "");
//! ```

#[cfg(feature = "i18n")]
pub mod i18n;
#[cfg(feature = "tables")]
pub mod tables;
#[cfg(feature = "utils")]
pub mod utils;

// Direct re-exports for the names pages reach for most
#[cfg(feature = "i18n")]
pub use mailfilter_i18n::datetime::{format_datetime_de, format_datetime_de_in};
#[cfg(feature = "tables")]
pub use mailfilter_tables::{ColumnSpec, TableHandle, TableSettings, TableWidget, init_data_table};
#[cfg(feature = "utils")]
pub use mailfilter_utils::html::{escape, escape_opt};
