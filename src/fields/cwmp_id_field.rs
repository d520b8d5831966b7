//! CWMP identifier field with a single dash separator.

use crate::field::{FieldId, Formatted, Hint, ProvisionField, clean_alphanumeric};
use regex::Regex;
use std::sync::LazyLock;

// Literal 000 prefix followed by fifteen alphanumerics, separator removed.
static CWMP_REGEX: LazyLock<Regex> = LazyLock::new(|| {
	Regex::new(r"^000[A-Za-z0-9]{15}$").expect("CWMP_REGEX: invalid regex pattern")
});

const MAX_CLEAN_LENGTH: usize = 18;

// Display splits into a 6-char head and 12-char tail.
const SPLIT_AT: usize = 6;

/// CWMP identifier: `000` plus fifteen alphanumerics, displayed with a dash
/// after the sixth character (`000123-456789012345`).
///
/// Unlike the modem identifier, the `000` prefix is not forced by the
/// formatter; the pattern reports its absence instead.
///
/// # Examples
///
/// ```
/// use ontcheck::{CwmpIdField, ProvisionField};
///
/// let field = CwmpIdField::new();
/// let formatted = field.format("0001234567890123456");
/// assert_eq!(formatted.display, "000123-456789012345");
/// assert!(field.is_valid(&formatted.display));
/// ```
#[derive(Debug, Clone)]
pub struct CwmpIdField {
	label: String,
}

impl CwmpIdField {
	pub fn new() -> Self {
		Self {
			label: "CWMP".to_string(),
		}
	}

	/// Sets the label used in the export block.
	pub fn with_label(mut self, label: impl Into<String>) -> Self {
		self.label = label.into();
		self
	}
}

impl Default for CwmpIdField {
	fn default() -> Self {
		Self::new()
	}
}

impl ProvisionField for CwmpIdField {
	fn id(&self) -> FieldId {
		FieldId::CwmpId
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
		let display = if clean.len() >= SPLIT_AT {
			format!("{}-{}", &clean[..SPLIT_AT], &clean[SPLIT_AT..])
		} else {
			clean
		}
		.to_ascii_uppercase();

		Formatted {
			cursor_at_end: display != raw,
			display,
		}
	}

	fn is_valid(&self, value: &str) -> bool {
		CWMP_REGEX.is_match(&value.replace('-', ""))
	}

	fn hint(&self, value: &str) -> Hint {
		let clean = value.replace('-', "");
		let length = clean.chars().count();
		if length == 0 {
			return Hint::None;
		}
		if length > MAX_CLEAN_LENGTH {
			return Hint::Error("Max. 18 characters".to_string());
		}
		if length < MAX_CLEAN_LENGTH {
			return Hint::Info(format!("{} characters missing", MAX_CLEAN_LENGTH - length));
		}
		if !self.is_valid(value) {
			return Hint::Error("Invalid CWMP format".to_string());
		}
		Hint::None
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use rstest::rstest;

	#[rstest]
	#[case("0001234567890123456", "000123-456789012345")]
	#[case("000123456789012345", "000123-456789012345")]
	#[case("000123-456789012345", "000123-456789012345")]
	#[case("00012", "00012")]
	#[case("000123", "000123-")]
	#[case("000abc456", "000ABC-456")]
	#[case("", "")]
	#[case("---", "")]
	fn test_format_inserts_separator(#[case] raw: &str, #[case] expected: &str) {
		let field = CwmpIdField::new();

		assert_eq!(field.format(raw).display, expected);
	}

	#[rstest]
	fn test_format_is_idempotent_on_partial_values() {
		let field = CwmpIdField::new();

		for raw in ["0", "00012", "000123", "000123456789012345"] {
			let first = field.format(raw);
			let second = field.format(&first.display);
			assert_eq!(second.display, first.display);
			assert!(!second.cursor_at_end);
		}
	}

	#[rstest]
	#[case("000123-456789012345", true)]
	#[case("000123456789012345", true)]
	#[case("000ABC-DEF456789012", true)]
	#[case("100123-456789012345", false)]
	#[case("000123-45678901234", false)]
	#[case("000123-4567890123456", false)]
	#[case("", false)]
	fn test_validate(#[case] value: &str, #[case] expected: bool) {
		let field = CwmpIdField::new();

		assert_eq!(field.is_valid(value), expected);
	}

	#[rstest]
	#[case("", Hint::None)]
	#[case("000123-4", Hint::Info("10 characters missing".to_string()))]
	#[case("000123-45678901234", Hint::Info("1 characters missing".to_string()))]
	#[case("0001234567890123456", Hint::Error("Max. 18 characters".to_string()))]
	#[case("00X123-456789012345", Hint::Error("Invalid CWMP format".to_string()))]
	#[case("000123-456789012345", Hint::None)]
	fn test_hint_tiers(#[case] value: &str, #[case] expected: Hint) {
		let field = CwmpIdField::new();

		assert_eq!(field.hint(value), expected);
	}
}
