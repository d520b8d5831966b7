//! Device type code field.

use crate::field::{FieldId, Formatted, Hint, ProvisionField, clean_alphanumeric};
use regex::Regex;
use std::sync::LazyLock;

// Exactly four decimal digits, e.g. `5530`.
static TYPE_REGEX: LazyLock<Regex> =
	LazyLock::new(|| Regex::new(r"^\d{4}$").expect("TYPE_REGEX: invalid regex pattern"));

const REQUIRED_LENGTH: usize = 4;

/// Device type code: a four-digit number.
///
/// The only field without a structural transform; formatting strips
/// non-alphanumeric characters and the pattern enforces the digit shape.
///
/// # Examples
///
/// ```
/// use ontcheck::{ProvisionField, TypeField};
///
/// let field = TypeField::new();
/// assert_eq!(field.format("55-30").display, "5530");
/// assert!(field.is_valid("5530"));
/// assert!(!field.is_valid("55a0"));
/// ```
#[derive(Debug, Clone)]
pub struct TypeField {
	label: String,
}

impl TypeField {
	pub fn new() -> Self {
		Self {
			label: "Type".to_string(),
		}
	}

	/// Sets the label used in the export block.
	///
	/// # Examples
	///
	/// ```
	/// use ontcheck::{ProvisionField, TypeField};
	///
	/// let field = TypeField::new().with_label("Typ");
	/// assert_eq!(field.label(), "Typ");
	/// ```
	pub fn with_label(mut self, label: impl Into<String>) -> Self {
		self.label = label.into();
		self
	}
}

impl Default for TypeField {
	fn default() -> Self {
		Self::new()
	}
}

impl ProvisionField for TypeField {
	fn id(&self) -> FieldId {
		FieldId::Type
	}

	fn label(&self) -> &str {
		&self.label
	}

	fn max_clean_length(&self) -> usize {
		REQUIRED_LENGTH
	}

	fn required_clean_length(&self) -> usize {
		REQUIRED_LENGTH
	}

	fn format(&self, raw: &str) -> Formatted {
		let display = clean_alphanumeric(raw).to_ascii_uppercase();
		Formatted {
			cursor_at_end: display != raw,
			display,
		}
	}

	fn is_valid(&self, value: &str) -> bool {
		TYPE_REGEX.is_match(value)
	}

	fn hint(&self, value: &str) -> Hint {
		let clean = clean_alphanumeric(value);
		let length = clean.chars().count();
		if length == 0 {
			return Hint::None;
		}
		if length > REQUIRED_LENGTH {
			return Hint::Error("4-digit number required".to_string());
		}
		if length < REQUIRED_LENGTH {
			return Hint::Info(format!("{} characters missing", REQUIRED_LENGTH - length));
		}
		if !self.is_valid(value) {
			return Hint::Error("Invalid number".to_string());
		}
		Hint::None
	}
}
