//! Core field abstractions shared by the formatting and validation engines.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Identifies one of the four provisioning fields.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FieldId {
	Type,
	SerialNumber,
	ModemId,
	CwmpId,
}

impl FieldId {
	/// All fields in display and export order.
	pub const ALL: [FieldId; 4] = [
		FieldId::Type,
		FieldId::SerialNumber,
		FieldId::ModemId,
		FieldId::CwmpId,
	];

	pub(crate) const fn index(self) -> usize {
		self as usize
	}
}

impl fmt::Display for FieldId {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str(match self {
			FieldId::Type => "type",
			FieldId::SerialNumber => "serial_number",
			FieldId::ModemId => "modem_id",
			FieldId::CwmpId => "cwmp_id",
		})
	}
}

/// Advisory feedback for a field's current value.
///
/// `Info` describes progress on an incomplete value (rendered muted by the
/// shell), `Error` describes a malformed value (rendered as an error).
/// Hints never block input.
///
/// # Examples
///
/// ```
/// use ontcheck::Hint;
///
/// let hint = Hint::Info("3 characters missing".to_string());
/// assert!(!hint.is_error());
/// assert_eq!(hint.text(), "3 characters missing");
/// assert!(Hint::None.is_empty());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Hint {
	None,
	Info(String),
	Error(String),
}

impl Hint {
	/// The hint message, or the empty string for [`Hint::None`].
	pub fn text(&self) -> &str {
		match self {
			Hint::None => "",
			Hint::Info(text) | Hint::Error(text) => text,
		}
	}

	/// Whether there is no hint to display.
	pub fn is_empty(&self) -> bool {
		matches!(self, Hint::None)
	}

	/// Whether the hint is error-level rather than informational.
	pub fn is_error(&self) -> bool {
		matches!(self, Hint::Error(_))
	}
}

/// Result of one formatting pass over a field's raw text.
///
/// `cursor_at_end` is true exactly when `display` differs from the input,
/// i.e. when the caller has to rewrite the field's content and move the text
/// cursor to the end. Re-running the formatter on `display` returns it
/// unchanged, so a rewrite never triggers a second rewrite.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Formatted {
	pub display: String,
	pub cursor_at_end: bool,
}

/// Outcome of a single [`ProvisionForm::set_value`](crate::ProvisionForm::set_value)
/// pass, ready for the shell to render.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FieldUpdate {
	pub display: String,
	pub is_valid: bool,
	pub hint: Hint,
	pub cursor_at_end: bool,
}

/// A provisioning field: cleaning and live formatting of raw keystrokes,
/// canonical-pattern validation, and tiered advisory hints.
///
/// Validation runs against the canonical (formatted) value, never against
/// literal keystrokes; `format` is total and idempotent for any input.
pub trait ProvisionField: Send + Sync {
	fn id(&self) -> FieldId;

	/// Label used for the export block, e.g. `SN`.
	fn label(&self) -> &str;

	/// Maximum cleaned length; longer input is reported as over-length.
	fn max_clean_length(&self) -> usize;

	/// Cleaned length of a complete value.
	fn required_clean_length(&self) -> usize;

	/// Normalizes raw text into the canonical display string.
	fn format(&self, raw: &str) -> Formatted;

	/// Full match of the canonical pattern, after removing the field's own
	/// separator characters.
	fn is_valid(&self, value: &str) -> bool;

	/// Advisory hint for the current value; [`Hint::None`] when the value is
	/// empty or complete and well-formed.
	fn hint(&self, value: &str) -> Hint;
}

/// Strips every character outside `[A-Za-z0-9]`.
///
/// # Examples
///
/// ```
/// use ontcheck::field::clean_alphanumeric;
///
/// assert_eq!(clean_alphanumeric("A12.3-4 é5"), "A12345");
/// assert_eq!(clean_alphanumeric("...-"), "");
/// ```
pub fn clean_alphanumeric(raw: &str) -> String {
	raw.chars().filter(|c| c.is_ascii_alphanumeric()).collect()
}
