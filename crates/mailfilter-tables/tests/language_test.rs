//! Process-wide language resource installation.
//!
//! Kept in its own test binary: installing the URL is a one-shot,
//! process-wide operation, and the settings suite relies on the
//! compiled-in default staying in effect.

use mailfilter_tables::language::{DEFAULT_LANGUAGE_URL, init_language_url, language_url};
use mailfilter_tables::{ColumnSpec, TableSettings};

#[test]
fn test_installation_is_one_shot_and_visible_to_settings() {
	assert_eq!(language_url(), DEFAULT_LANGUAGE_URL);

	init_language_url("/static/i18n/custom.de-DE.json").unwrap();
	assert_eq!(language_url(), "/static/i18n/custom.de-DE.json");

	// Second installation is rejected and hands the URL back
	let rejected = init_language_url("/somewhere/else.json").unwrap_err();
	assert_eq!(rejected, "/somewhere/else.json");
	assert_eq!(language_url(), "/static/i18n/custom.de-DE.json");

	// Settings built after installation pick the installed resource up
	let settings = TableSettings::new("/api/mails", vec![ColumnSpec::new("subject")])
		.to_value()
		.unwrap();
	assert_eq!(settings["language"]["url"], "/static/i18n/custom.de-DE.json");
}
