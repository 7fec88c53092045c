//! Remote data table configuration for the mailfilter frontend
//!
//! The frontend's lists (inbox mails, spam candidates, filter rules, log
//! entries) are rendered by an external tabular widget fed from the JSON
//! API. This crate builds the widget's settings object (remote source,
//! column definitions, localization resource, caller overrides) and
//! mounts the widget through a small library seam.
//!
//! # Features
//!
//! - **Settings construction**: [`TableSettings`] with shallow caller
//!   overrides (later keys win, no deep merge)
//! - **Column definitions**: [`ColumnSpec`], serialized verbatim into the
//!   settings object
//! - **Localization**: process-wide widget language resource, injected at
//!   startup ([`language`])
//! - **Widget seam**: [`TableWidget`]/[`TableHandle`] traits and
//!   [`init_data_table`]
//!
//! All paging, sorting, searching and fetching is the widget library's
//! own; nothing here awaits, retries or caches.
//!
//! # Example
//!
//! ```
//! use mailfilter_tables::{ColumnSpec, TableSettings};
//! use serde_json::json;
//!
//! let settings = TableSettings::new(
//! 	"/api/mails",
//! 	vec![
//! 		ColumnSpec::new("subject").title("Betreff"),
//! 		ColumnSpec::new("received_at").title("Empfangen"),
//! 	],
//! )
//! .override_with("paging", json!(false))
//! .to_value()
//! .unwrap();
//!
//! assert_eq!(settings["ajax"]["url"], "/api/mails");
//! assert_eq!(settings["paging"], json!(false));
//! ```

#![warn(missing_docs)]
#![warn(rustdoc::broken_intra_doc_links)]

pub mod column;
pub mod error;
pub mod language;
pub mod settings;
pub mod widget;

// Re-exports for convenience
pub use column::ColumnSpec;
pub use error::{Result, TableError};
pub use settings::TableSettings;
pub use widget::{TableHandle, TableWidget, init_data_table};
