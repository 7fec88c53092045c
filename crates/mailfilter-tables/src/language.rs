//! Process-wide widget localization resource
//!
//! The table widget loads its own interface strings (pagination labels,
//! search box, empty-table message) from a JSON resource. The resource URL
//! is application configuration: it is injected once at startup and read
//! by every table initialized afterwards.

use std::sync::OnceLock;

/// Global widget localization resource URL.
///
/// Initialized once at application startup via [`init_language_url`];
/// [`language_url`] falls back to [`DEFAULT_LANGUAGE_URL`] when the
/// application never injects one.
static LANGUAGE_URL: OnceLock<String> = OnceLock::new();

/// Bundled German interface strings, served with the application's static
/// files
pub const DEFAULT_LANGUAGE_URL: &str = "/static/i18n/datatables.de-DE.json";

/// Installs the widget localization resource URL
///
/// Call once at application startup, before any table is initialized.
///
/// # Errors
///
/// Returns `Err` carrying the rejected URL if a resource URL has already
/// been installed.
///
/// # Examples
///
/// ```
/// use mailfilter_tables::language::{init_language_url, language_url};
///
/// init_language_url("/static/i18n/tables.json").unwrap();
/// assert_eq!(language_url(), "/static/i18n/tables.json");
///
/// // A second installation is rejected and hands the URL back
/// let rejected = init_language_url("/elsewhere.json").unwrap_err();
/// assert_eq!(rejected, "/elsewhere.json");
/// ```
pub fn init_language_url(url: impl Into<String>) -> Result<(), String> {
	LANGUAGE_URL.set(url.into()).map_err(|rejected| {
		tracing::warn!(
			url = %rejected,
			"table language resource URL already installed, ignoring"
		);
		rejected
	})
}

/// Returns the widget localization resource URL
///
/// The installed URL, or [`DEFAULT_LANGUAGE_URL`] when none was installed.
pub fn language_url() -> &'static str {
	LANGUAGE_URL.get().map(String::as_str).unwrap_or(DEFAULT_LANGUAGE_URL)
}
