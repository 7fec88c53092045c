//! Widget settings construction
//!
//! A settings object has three defaults, the remote source (`ajax`), the
//! column list (`columns`) and the localization resource (`language`),
//! plus whatever top-level options the caller lays over them. Overrides
//! are shallow: an override key replaces the same-named default wholesale,
//! later keys win, nested objects are never merged.

use serde_json::{Map, Value, json};

use crate::column::ColumnSpec;
use crate::error::Result;
use crate::language;

/// Builder for the settings object handed to the table widget
///
/// # Examples
///
/// ```
/// use mailfilter_tables::{ColumnSpec, TableSettings};
/// use serde_json::json;
///
/// let settings = TableSettings::new(
/// 	"/api/mails",
/// 	vec![ColumnSpec::new("subject").title("Betreff")],
/// )
/// .override_with("paging", json!(false))
/// .to_value()
/// .unwrap();
///
/// assert_eq!(settings["ajax"]["url"], "/api/mails");
/// assert_eq!(settings["ajax"]["dataSrc"], "");
/// assert_eq!(settings["paging"], json!(false));
/// ```
#[derive(Debug, Clone)]
pub struct TableSettings {
	ajax_url: String,
	columns: Vec<ColumnSpec>,
	language_url: String,
	overrides: Map<String, Value>,
}

impl TableSettings {
	/// Creates settings for a table fed from `url`
	///
	/// The remote response must be a top-level JSON array (`dataSrc` is
	/// the empty string, no envelope key). The localization resource is
	/// taken from [`language::language_url`] at construction time.
	pub fn new(url: impl Into<String>, columns: Vec<ColumnSpec>) -> Self {
		Self {
			ajax_url: url.into(),
			columns,
			language_url: language::language_url().to_string(),
			overrides: Map::new(),
		}
	}

	/// Replaces the localization resource for this table only
	pub fn language_url(mut self, url: impl Into<String>) -> Self {
		self.language_url = url.into();
		self
	}

	/// Lays a single top-level option over the defaults
	///
	/// Overriding `ajax`, `columns` or `language` replaces the default
	/// wholesale.
	pub fn override_with(mut self, key: impl Into<String>, value: Value) -> Self {
		self.overrides.insert(key.into(), value);
		self
	}

	/// Lays a bundle of top-level options over the defaults
	///
	/// Keys already overridden are replaced; later calls win.
	pub fn merge_overrides(mut self, overrides: Map<String, Value>) -> Self {
		self.overrides.extend(overrides);
		self
	}

	/// Builds the finished settings object
	///
	/// Without overrides the object contains exactly the keys `ajax`,
	/// `columns` and `language`.
	///
	/// # Errors
	///
	/// Returns [`crate::TableError::Serialization`] if the column list
	/// cannot be serialized.
	pub fn to_value(&self) -> Result<Value> {
		let mut settings = Map::new();
		settings.insert(
			"ajax".to_string(),
			json!({ "url": self.ajax_url, "dataSrc": "" }),
		);
		settings.insert("columns".to_string(), serde_json::to_value(&self.columns)?);
		settings.insert("language".to_string(), json!({ "url": self.language_url }));
		for (key, value) in &self.overrides {
			settings.insert(key.clone(), value.clone());
		}
		Ok(Value::Object(settings))
	}
}
