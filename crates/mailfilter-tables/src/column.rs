//! Column definitions passed through to the table widget

use serde::Serialize;

/// A single column definition, serialized verbatim into the widget
/// settings
///
/// Only `data` (the key of the row property the column shows) is
/// mandatory; every other option is omitted from the wire format unless
/// set. Field names serialize in the camelCase spelling the widget
/// library expects (`className`, `defaultContent`).
///
/// # Examples
///
/// ```
/// use mailfilter_tables::ColumnSpec;
///
/// let column = ColumnSpec::new("subject")
/// 	.title("Betreff")
/// 	.class_name("text-truncate");
///
/// let wire = serde_json::to_value(&column).unwrap();
/// assert_eq!(
/// 	wire,
/// 	serde_json::json!({
/// 		"data": "subject",
/// 		"title": "Betreff",
/// 		"className": "text-truncate",
/// 	})
/// );
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ColumnSpec {
	data: String,
	#[serde(skip_serializing_if = "Option::is_none")]
	title: Option<String>,
	#[serde(skip_serializing_if = "Option::is_none")]
	name: Option<String>,
	#[serde(skip_serializing_if = "Option::is_none")]
	orderable: Option<bool>,
	#[serde(skip_serializing_if = "Option::is_none")]
	searchable: Option<bool>,
	#[serde(skip_serializing_if = "Option::is_none")]
	visible: Option<bool>,
	#[serde(skip_serializing_if = "Option::is_none")]
	class_name: Option<String>,
	#[serde(skip_serializing_if = "Option::is_none")]
	width: Option<String>,
	#[serde(skip_serializing_if = "Option::is_none")]
	default_content: Option<String>,
}

impl ColumnSpec {
	/// Creates a column showing the row property named `data`
	pub fn new(data: impl Into<String>) -> Self {
		Self {
			data: data.into(),
			title: None,
			name: None,
			orderable: None,
			searchable: None,
			visible: None,
			class_name: None,
			width: None,
			default_content: None,
		}
	}

	/// Sets the header text
	pub fn title(mut self, title: impl Into<String>) -> Self {
		self.title = Some(title.into());
		self
	}

	/// Sets the column name used in widget API calls
	pub fn name(mut self, name: impl Into<String>) -> Self {
		self.name = Some(name.into());
		self
	}

	/// Sets whether the column can be sorted
	pub fn orderable(mut self, orderable: bool) -> Self {
		self.orderable = Some(orderable);
		self
	}

	/// Sets whether the column participates in the widget's search box
	pub fn searchable(mut self, searchable: bool) -> Self {
		self.searchable = Some(searchable);
		self
	}

	/// Sets whether the column is rendered at all
	pub fn visible(mut self, visible: bool) -> Self {
		self.visible = Some(visible);
		self
	}

	/// Sets CSS classes applied to the column's cells
	pub fn class_name(mut self, class_name: impl Into<String>) -> Self {
		self.class_name = Some(class_name.into());
		self
	}

	/// Sets the column width (any CSS width value)
	pub fn width(mut self, width: impl Into<String>) -> Self {
		self.width = Some(width.into());
		self
	}

	/// Sets the cell content shown when the row property is null or
	/// missing
	pub fn default_content(mut self, default_content: impl Into<String>) -> Self {
		self.default_content = Some(default_content.into());
		self
	}

	/// Returns the row property key this column shows
	pub fn data(&self) -> &str {
		&self.data
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use serde_json::json;

	#[test]
	fn test_minimal_column_serializes_data_only() {
		let column = ColumnSpec::new("subject");
		assert_eq!(
			serde_json::to_value(&column).unwrap(),
			json!({ "data": "subject" })
		);
	}

	#[test]
	fn test_set_options_serialize_in_camel_case() {
		let column = ColumnSpec::new("received_at")
			.title("Empfangen")
			.orderable(true)
			.searchable(false)
			.class_name("text-nowrap")
			.default_content("(kein Datum)");
		assert_eq!(
			serde_json::to_value(&column).unwrap(),
			json!({
				"data": "received_at",
				"title": "Empfangen",
				"orderable": true,
				"searchable": false,
				"className": "text-nowrap",
				"defaultContent": "(kein Datum)",
			})
		);
	}

	#[test]
	fn test_data_accessor() {
		assert_eq!(ColumnSpec::new("spam_score").data(), "spam_score");
	}
}
