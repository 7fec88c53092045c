//! HTML text-node escaping
//!
//! Escapes the three characters that break out of an HTML text node:
//!
//! - `&` → `&amp;`
//! - `<` → `&lt;`
//! - `>` → `&gt;`
//!
//! Quote characters (`"`, `'`) are left untouched: escaped output is safe
//! for text nodes only, never for attribute values. Callers that need to
//! place data inside attributes must quote-escape it themselves.

/// Escape HTML special characters for text-node insertion
///
/// The input is walked in a single pass, so the `&` written by the `<` and
/// `>` substitutions is never re-escaped. Applying the function a second
/// time to already-escaped output does double-escape `&` sequences
/// (`&lt;` becomes `&amp;lt;`); escape once, at render time.
///
/// # Examples
///
/// ```
/// use mailfilter_utils::html::escape;
///
/// assert_eq!(escape("<b>a & b</b>"), "&lt;b&gt;a &amp; b&lt;/b&gt;");
/// assert_eq!(escape("plain subject"), "plain subject");
/// assert_eq!(escape(""), "");
/// ```
pub fn escape(text: &str) -> String {
	let mut result = String::with_capacity(text.len() + 10);
	for ch in text.chars() {
		match ch {
			'&' => result.push_str("&amp;"),
			'<' => result.push_str("&lt;"),
			'>' => result.push_str("&gt;"),
			_ => result.push(ch),
		}
	}
	result
}

/// Escape an optional string, rendering absent input as the empty string
///
/// Mail headers are frequently missing; pages pass them through as
/// `Option<&str>` and expect an empty text node rather than a panic or an
/// error.
///
/// # Examples
///
/// ```
/// use mailfilter_utils::html::escape_opt;
///
/// assert_eq!(escape_opt(Some("a < b")), "a &lt; b");
/// assert_eq!(escape_opt(None), "");
/// ```
pub fn escape_opt(text: Option<&str>) -> String {
	match text {
		Some(text) => escape(text),
		None => String::new(),
	}
}
