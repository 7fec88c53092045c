//! Localization helpers
//!
//! German (`de-DE`) date-time rendering for mail timestamps, including the
//! `"(kein Datum)"` sentinel the pages show for mails without a date.

// Re-export all mailfilter-i18n functionality
pub use mailfilter_i18n::*;
