//! Serial number field with dot segmentation.

use crate::field::{FieldId, Formatted, Hint, ProvisionField, clean_alphanumeric};
use regex::Regex;
use std::sync::LazyLock;

// One letter followed by fourteen digits, separators removed.
static SN_REGEX: LazyLock<Regex> =
	LazyLock::new(|| Regex::new(r"^[A-Za-z]\d{14}$").expect("SN_REGEX: invalid regex pattern"));

const MAX_CLEAN_LENGTH: usize = 15;

// Start offsets of the digit groups behind the leading letter; each group
// ends where the next one starts, the last group takes the remainder.
const GROUP_OFFSETS: [usize; 5] = [0, 3, 6, 8, 11];

/// Serial number: one letter plus fourteen digits, displayed in dot-separated
/// groups (`A123.456.78.901.234`).
///
/// Segmentation starts as soon as two cleaned characters exist, so the first
/// dot appears while the value is still being typed (`"A12"` renders as
/// `"A12."`).
///
/// # Examples
///
/// ```
/// use ontcheck::{ProvisionField, SerialNumberField};
///
/// let field = SerialNumberField::new();
/// let formatted = field.format("a12345678901234");
/// assert_eq!(formatted.display, "A123.456.78.901.234");
/// assert!(field.is_valid(&formatted.display));
/// ```
#[derive(Debug, Clone)]
pub struct SerialNumberField {
	label: String,
}

impl SerialNumberField {
	pub fn new() -> Self {
		Self {
			label: "SN".to_string(),
		}
	}

	/// Sets the label used in the export block.
	pub fn with_label(mut self, label: impl Into<String>) -> Self {
		self.label = label.into();
		self
	}
}

impl Default for SerialNumberField {
	fn default() -> Self {
		Self::new()
	}
}

impl ProvisionField for SerialNumberField {
	fn id(&self) -> FieldId {
		FieldId::SerialNumber
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

		let display = if clean.len() >= 2 {
			// The cleaned value is pure ASCII, so byte offsets are char offsets.
			let (letter, digits) = clean.split_at(1);
			let mut groups = Vec::new();
			for (i, &start) in GROUP_OFFSETS.iter().enumerate() {
				if start >= digits.len() {
					break;
				}
				let end = GROUP_OFFSETS
					.get(i + 1)
					.copied()
					.unwrap_or(digits.len())
					.min(digits.len());
				groups.push(&digits[start..end]);
			}
			format!("{}{}.{}", letter, groups[0], groups[1..].join("."))
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
		SN_REGEX.is_match(&value.replace('.', ""))
	}

	fn hint(&self, value: &str) -> Hint {
		let clean = value.replace('.', "");
		let length = clean.chars().count();
		if length == 0 {
			return Hint::None;
		}
		if length > MAX_CLEAN_LENGTH {
			return Hint::Error("Max. 15 characters (1 letter + 14 digits)".to_string());
		}
		if length < MAX_CLEAN_LENGTH {
			return Hint::Info(format!("{} characters missing", MAX_CLEAN_LENGTH - length));
		}
		if !self.is_valid(value) {
			return Hint::Error("Invalid serial number format".to_string());
		}
		Hint::None
	}
}
