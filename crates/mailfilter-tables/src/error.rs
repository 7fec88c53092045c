//! Error types for table widget configuration

use thiserror::Error;

/// Errors surfaced while building settings or mounting a table widget
#[derive(Debug, Error)]
pub enum TableError {
	/// No element in the page matched the given selector
	#[error("no element matches selector `{selector}`")]
	ElementNotFound {
		/// The selector that failed to resolve
		selector: String,
	},

	/// The widget library rejected the settings or failed to mount
	#[error("widget instantiation failed: {0}")]
	Widget(String),

	/// The settings object could not be serialized
	#[error("settings serialization failed: {0}")]
	Serialization(#[from] serde_json::Error),
}

/// Convenience alias for table operations
pub type Result<T> = std::result::Result<T, TableError>;
