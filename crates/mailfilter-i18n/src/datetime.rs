//! ISO-8601 parsing and `de-DE` date-time formatting

use std::fmt::Display;

use chrono::{DateTime, Local, NaiveDate, NaiveDateTime, TimeZone, Utc};

/// Rendered in place of a missing timestamp.
pub const NO_DATE_PLACEHOLDER: &str = "(kein Datum)";

/// Rendered when a non-empty timestamp string cannot be parsed.
///
/// Malformed-but-present input is accepted and rendered as this fixed
/// fallback; it is not an error.
pub const INVALID_DATE_PLACEHOLDER: &str = "(ungültiges Datum)";

/// `de-DE` with explicit two-digit day/month/hour/minute/second fields:
/// `05.01.2024, 09:30:00`.
const DE_DATETIME_FORMAT: &str = "%d.%m.%Y, %H:%M:%S";

/// Render an ISO-8601 timestamp in the fixed `de-DE` pattern, in the
/// host's local time zone
///
/// Absent or empty input renders as [`NO_DATE_PLACEHOLDER`]; non-empty
/// input the parser rejects renders as [`INVALID_DATE_PLACEHOLDER`].
/// Infallible either way.
///
/// # Examples
///
/// ```
/// use mailfilter_i18n::datetime::format_datetime_de;
///
/// assert_eq!(format_datetime_de(None), "(kein Datum)");
/// assert_eq!(format_datetime_de(Some("")), "(kein Datum)");
/// assert_eq!(format_datetime_de(Some("gestern")), "(ungültiges Datum)");
/// ```
pub fn format_datetime_de(value: Option<&str>) -> String {
	format_datetime_de_in(value, &Local)
}

/// Render an ISO-8601 timestamp in the fixed `de-DE` pattern, in an
/// explicit time zone
///
/// [`format_datetime_de`] delegates here with [`Local`]; tests pin the
/// zone for deterministic output.
///
/// # Examples
///
/// ```
/// use chrono::Utc;
/// use mailfilter_i18n::datetime::format_datetime_de_in;
///
/// assert_eq!(
/// 	format_datetime_de_in(Some("2024-01-05T08:30:00Z"), &Utc),
/// 	"05.01.2024, 08:30:00"
/// );
/// ```
pub fn format_datetime_de_in<Tz: TimeZone>(value: Option<&str>, tz: &Tz) -> String
where
	Tz::Offset: Display,
{
	let raw = match value {
		Some(raw) if !raw.is_empty() => raw,
		_ => return NO_DATE_PLACEHOLDER.to_string(),
	};
	match parse_iso_datetime_in(raw, tz) {
		Some(parsed) => parsed.format(DE_DATETIME_FORMAT).to_string(),
		None => INVALID_DATE_PLACEHOLDER.to_string(),
	}
}

/// Parse an ISO-8601 timestamp into the given time zone
///
/// Accepted shapes, tried in order:
///
/// 1. RFC 3339 (`2024-01-05T08:30:00Z`, numeric offsets, optional
///    fractional seconds): the instant is converted into `tz`
/// 2. Naive date-time (`2024-01-05T08:30:00`, optional fractional
///    seconds, `T` or space separator): interpreted as wall-clock time
///    in `tz`; the earlier instant wins on DST-ambiguous wall times
/// 3. Bare date (`2024-01-05`): midnight UTC, converted into `tz`
///
/// # Examples
///
/// ```
/// use chrono::Utc;
/// use mailfilter_i18n::datetime::parse_iso_datetime_in;
///
/// assert!(parse_iso_datetime_in("2024-01-05T08:30:00Z", &Utc).is_some());
/// assert!(parse_iso_datetime_in("2024-01-05", &Utc).is_some());
/// assert!(parse_iso_datetime_in("05.01.2024", &Utc).is_none());
/// ```
pub fn parse_iso_datetime_in<Tz: TimeZone>(input: &str, tz: &Tz) -> Option<DateTime<Tz>> {
	let trimmed = input.trim();
	if let Ok(parsed) = DateTime::parse_from_rfc3339(trimmed) {
		return Some(parsed.with_timezone(tz));
	}
	for format in ["%Y-%m-%dT%H:%M:%S%.f", "%Y-%m-%d %H:%M:%S%.f"] {
		if let Ok(naive) = NaiveDateTime::parse_from_str(trimmed, format) {
			return tz.from_local_datetime(&naive).earliest();
		}
	}
	if let Ok(date) = NaiveDate::parse_from_str(trimmed, "%Y-%m-%d") {
		let midnight = date.and_hms_opt(0, 0, 0)?;
		return Some(Utc.from_utc_datetime(&midnight).with_timezone(tz));
	}
	None
}

#[cfg(test)]
mod tests {
	use super::*;
	use chrono::FixedOffset;
	use chrono_tz::Europe::Berlin;

	#[test]
	fn test_absent_input_renders_placeholder() {
		assert_eq!(format_datetime_de(None), NO_DATE_PLACEHOLDER);
		assert_eq!(format_datetime_de(Some("")), NO_DATE_PLACEHOLDER);
		assert_eq!(format_datetime_de_in(None, &Utc), NO_DATE_PLACEHOLDER);
	}

	#[test]
	fn test_unparseable_input_renders_invalid_placeholder() {
		assert_eq!(format_datetime_de(Some("gestern")), INVALID_DATE_PLACEHOLDER);
		assert_eq!(
			format_datetime_de_in(Some("05.01.2024"), &Utc),
			INVALID_DATE_PLACEHOLDER
		);
		assert_eq!(
			format_datetime_de_in(Some("2024-13-40T99:00:00Z"), &Utc),
			INVALID_DATE_PLACEHOLDER
		);
	}

	#[test]
	fn test_utc_instant_converts_into_target_zone() {
		// Berlin is UTC+1 in January
		assert_eq!(
			format_datetime_de_in(Some("2024-01-05T08:30:00Z"), &Berlin),
			"05.01.2024, 09:30:00"
		);
		// and UTC+2 in July
		assert_eq!(
			format_datetime_de_in(Some("2024-07-01T10:00:00Z"), &Berlin),
			"01.07.2024, 12:00:00"
		);
	}

	#[test]
	fn test_offset_input_is_honoured() {
		assert_eq!(
			format_datetime_de_in(Some("2024-01-05T08:30:00+02:00"), &Utc),
			"05.01.2024, 06:30:00"
		);
	}

	#[test]
	fn test_fractional_seconds_are_accepted_and_truncated() {
		assert_eq!(
			format_datetime_de_in(Some("2024-01-05T08:30:00.123Z"), &Utc),
			"05.01.2024, 08:30:00"
		);
	}

	#[test]
	fn test_naive_datetime_is_wall_clock_in_target_zone() {
		assert_eq!(
			format_datetime_de_in(Some("2024-01-05T08:30:00"), &Berlin),
			"05.01.2024, 08:30:00"
		);
		assert_eq!(
			format_datetime_de_in(Some("2024-01-05 08:30:00"), &Berlin),
			"05.01.2024, 08:30:00"
		);
	}

	#[test]
	fn test_bare_date_is_utc_midnight() {
		assert_eq!(
			format_datetime_de_in(Some("2024-01-05"), &Utc),
			"05.01.2024, 00:00:00"
		);
		// UTC midnight shifted into Berlin winter time
		assert_eq!(
			format_datetime_de_in(Some("2024-01-05"), &Berlin),
			"05.01.2024, 01:00:00"
		);
	}

	#[test]
	fn test_single_digit_fields_are_zero_padded() {
		assert_eq!(
			format_datetime_de_in(Some("2024-03-07T04:05:06Z"), &Utc),
			"07.03.2024, 04:05:06"
		);
	}

	#[test]
	fn test_parse_into_fixed_offset() {
		let plus_one = FixedOffset::east_opt(3600).unwrap();
		let parsed = parse_iso_datetime_in("2024-01-05T08:30:00Z", &plus_one).unwrap();
		assert_eq!(parsed.format("%H:%M").to_string(), "09:30");
	}

	#[test]
	fn test_parse_rejects_garbage() {
		assert!(parse_iso_datetime_in("", &Utc).is_none());
		assert!(parse_iso_datetime_in("not-a-date", &Utc).is_none());
		assert!(parse_iso_datetime_in("2024-01-05T08:30", &Utc).is_none());
	}
}
