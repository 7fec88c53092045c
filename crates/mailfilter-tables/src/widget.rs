//! The seam to the external table widget library
//!
//! The frontend does not render, page, sort or fetch anything itself; the
//! widget library owns all of that, including the asynchronous GET against
//! the configured URL. This module only carries the finished settings
//! object across the seam and hands the library's control handle back.

use serde_json::{Map, Value};

use crate::column::ColumnSpec;
use crate::error::Result;
use crate::settings::TableSettings;

/// Caller-side control over a live table
pub trait TableHandle {
	/// Asks the widget to re-fetch its rows from the configured source
	fn reload(&mut self) -> Result<()>;

	/// Tears the widget down and releases the element
	fn destroy(&mut self) -> Result<()>;
}

/// A table widget library able to mount a table onto a page element
///
/// Implementations resolve the selector against their document model and
/// construct the widget with the given settings. Selector resolution
/// failure is reported as [`crate::TableError::ElementNotFound`].
pub trait TableWidget {
	/// The control handle the library hands back for a live table
	type Handle: TableHandle;

	/// Resolves `selector` and mounts the widget with `settings`
	fn instantiate(&self, selector: &str, settings: &Value) -> Result<Self::Handle>;
}

/// Builds the settings object and mounts a remote-fed table
///
/// The settings object points the widget at `url` (top-level JSON array
/// response), passes `columns` through unchanged, carries the process-wide
/// localization resource, and lays `overrides` on top (shallow, later keys
/// win). The returned handle is the caller's to keep; its lifecycle is not
/// managed here.
///
/// # Errors
///
/// Whatever the widget implementation reports, plus
/// [`crate::TableError::Serialization`] if the column list cannot be
/// serialized.
///
/// # Examples
///
/// ```no_run
/// use mailfilter_tables::{ColumnSpec, TableWidget, init_data_table};
/// use serde_json::{Map, json};
///
/// fn mount<W: TableWidget>(widget: &W) -> mailfilter_tables::Result<W::Handle> {
/// 	let mut overrides = Map::new();
/// 	overrides.insert("pageLength".to_string(), json!(50));
/// 	init_data_table(
/// 		widget,
/// 		"#mail-table",
/// 		"/api/mails",
/// 		vec![
/// 			ColumnSpec::new("subject").title("Betreff"),
/// 			ColumnSpec::new("received_at").title("Empfangen"),
/// 		],
/// 		Some(overrides),
/// 	)
/// }
/// ```
pub fn init_data_table<W: TableWidget>(
	widget: &W,
	selector: &str,
	url: impl Into<String>,
	columns: Vec<ColumnSpec>,
	overrides: Option<Map<String, Value>>,
) -> Result<W::Handle> {
	let mut settings = TableSettings::new(url, columns);
	if let Some(overrides) = overrides {
		settings = settings.merge_overrides(overrides);
	}
	let settings = settings.to_value()?;
	tracing::debug!(selector, "mounting remote data table");
	widget.instantiate(selector, &settings)
}
