//! Modem identifier field with forced `AVMG` prefix.

use crate::field::{FieldId, Formatted, Hint, ProvisionField, clean_alphanumeric};
use regex::Regex;
use std::sync::LazyLock;

// Literal AVMG prefix followed by eight alphanumerics.
static MODEM_ID_REGEX: LazyLock<Regex> = LazyLock::new(|| {
	Regex::new(r"^AVMG[A-Za-z0-9]{8}$").expect("MODEM_ID_REGEX: invalid regex pattern")
});

const MAX_CLEAN_LENGTH: usize = 12;
const PREFIX: &str = "AVMG";

/// Modem identifier: the literal `AVMG` prefix plus eight alphanumerics.
///
/// Formatting overwrites the first four cleaned characters with `AVMG`
/// whatever the user typed there; shorter input is replaced by the
/// matching-length prefix of `AVMG`.
///
/// # Examples
///
/// ```
/// use ontcheck::{ModemIdField, ProvisionField};
///
/// let field = ModemIdField::new();
/// assert_eq!(field.format("avmgtest123").display, "AVMGTEST123");
/// assert_eq!(field.format("xxxx12345678").display, "AVMG12345678");
/// assert_eq!(field.format("xy").display, "AV");
/// ```
#[derive(Debug, Clone)]
pub struct ModemIdField {
	label: String,
}

impl ModemIdField {
	pub fn new() -> Self {
		Self {
			label: "ModemID".to_string(),
		}
	}

	/// Sets the label used in the export block.
	pub fn with_label(mut self, label: impl Into<String>) -> Self {
		self.label = label.into();
		self
	}
}

impl Default for ModemIdField {
	fn default() -> Self {
		Self::new()
	}
}

impl ProvisionField for ModemIdField {
	fn id(&self) -> FieldId {
		FieldId::ModemId
	}

	fn label(&self) -> &str {
		&self.label
	}

	fn max_clean_length(&self) -> usize {
		MAX_CLEAN_LENGTH
	}

	fn required_clean_length(&self) -> usize {
		MAX_CLEAN_LENGTH
	}

	fn format(&self, raw: &str) -> Formatted {
		let mut clean = clean_alphanumeric(raw);
		clean.truncate(MAX_CLEAN_LENGTH);

		// The cleaned value is pure ASCII, so byte offsets are char offsets.
		let display = if clean.len() >= PREFIX.len() {
			format!("{}{}", PREFIX, &clean[PREFIX.len()..])
		} else {
			PREFIX[..clean.len()].to_string()
		}
		.to_ascii_uppercase();

		Formatted {
			cursor_at_end: display != raw,
			display,
		}
	}

	fn is_valid(&self, value: &str) -> bool {
		MODEM_ID_REGEX.is_match(value)
	}

	fn hint(&self, value: &str) -> Hint {
		let clean = clean_alphanumeric(value);
		let length = clean.chars().count();
		if length == 0 {
			return Hint::None;
		}
		if length > MAX_CLEAN_LENGTH {
			return Hint::Error("Max. 12 characters (AVMG + 8)".to_string());
		}
		if !clean.starts_with(PREFIX) {
			return Hint::Error("Must start with AVMG".to_string());
		}
		if length < MAX_CLEAN_LENGTH {
			return Hint::Info(format!("{} characters missing", MAX_CLEAN_LENGTH - length));
		}
		if !self.is_valid(value) {
			return Hint::Error("Invalid modem ID".to_string());
		}
		Hint::None
	}
}
