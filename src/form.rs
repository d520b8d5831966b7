//! Form state for the four provisioning fields: per-field updates, the
//! aggregate gate, the export block, and reset.

use crate::field::{FieldId, FieldUpdate, Hint, ProvisionField};
use crate::fields;
use serde::{Deserialize, Serialize};

#[derive(Debug, thiserror::Error)]
pub enum FormError {
	/// `export` was called while at least one field fails validation.
	#[error("export disabled: invalid fields {0:?}")]
	ExportDisabled(Vec<FieldId>),
}

pub type FormResult<T> = Result<T, FormError>;

/// Snapshot of one field as the shell renders it: the canonical display
/// text, the validity glyph, and the secondary hint caption.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FieldState {
	pub display: String,
	pub is_valid: bool,
	pub hint: Hint,
}

/// Holds the current values of the four provisioning fields.
///
/// All outputs are pure derivations of the stored values; nothing is cached
/// between changes. Values are always stored in canonical form, so a change
/// notification from the shell after a rewrite re-derives the same state and
/// the update cycle terminates after a single pass.
///
/// # Examples
///
/// ```
/// use ontcheck::{FieldId, ProvisionForm};
///
/// let mut form = ProvisionForm::new();
/// let update = form.set_value(FieldId::SerialNumber, "a12345678901234");
/// assert_eq!(update.display, "A123.456.78.901.234");
/// assert!(update.is_valid);
/// assert!(!form.export_enabled());
/// ```
pub struct ProvisionForm {
	fields: [Box<dyn ProvisionField>; 4],
	values: [String; 4],
}

impl ProvisionForm {
	/// Creates the form with all four fields empty and untouched: no hints,
	/// nothing valid, export disabled.
	pub fn new() -> Self {
		Self {
			fields: FieldId::ALL.map(fields::create),
			values: Default::default(),
		}
	}

	/// Replaces one field implementation, e.g. to relabel it.
	///
	/// # Examples
	///
	/// ```
	/// use ontcheck::{FieldId, ProvisionForm, TypeField};
	///
	/// let form = ProvisionForm::new()
	/// 	.with_field(Box::new(TypeField::new().with_label("Typ")));
	/// assert_eq!(form.label(FieldId::Type), "Typ");
	/// ```
	pub fn with_field(mut self, field: Box<dyn ProvisionField>) -> Self {
		let index = field.id().index();
		self.fields[index] = field;
		self
	}

	/// Applies a raw text change to one field: normalizes it, stores the
	/// canonical value, and returns everything the shell needs to render.
	///
	/// `cursor_at_end` is true when the stored value differs from `raw`; the
	/// shell then replaces the field content and moves the cursor to the
	/// end. Feeding the returned display back in is a no-op, so the rewrite
	/// cannot cascade.
	pub fn set_value(&mut self, id: FieldId, raw: impl Into<String>) -> FieldUpdate {
		let raw = raw.into();
		let field = &self.fields[id.index()];
		let formatted = field.format(&raw);
		if formatted.cursor_at_end {
			tracing::trace!(field = %id, "input rewritten to canonical form");
		}
		self.values[id.index()] = formatted.display.clone();

		let value = &self.values[id.index()];
		FieldUpdate {
			is_valid: field.is_valid(value),
			hint: field.hint(value),
			display: formatted.display,
			cursor_at_end: formatted.cursor_at_end,
		}
	}

	/// The stored (canonical) value of a field.
	pub fn value(&self, id: FieldId) -> &str {
		&self.values[id.index()]
	}

	/// The export label of a field.
	pub fn label(&self, id: FieldId) -> &str {
		self.fields[id.index()].label()
	}

	/// Re-derives the render state of one field from its stored value.
	pub fn field_state(&self, id: FieldId) -> FieldState {
		let field = &self.fields[id.index()];
		let value = &self.values[id.index()];
		FieldState {
			display: value.clone(),
			is_valid: field.is_valid(value),
			hint: field.hint(value),
		}
	}

	pub fn is_field_valid(&self, id: FieldId) -> bool {
		self.fields[id.index()].is_valid(&self.values[id.index()])
	}

	/// The aggregate gate: true only when every field validates.
	pub fn all_valid(&self) -> bool {
		FieldId::ALL.iter().all(|id| self.is_field_valid(*id))
	}

	/// Whether the export action is reachable. Alias of [`all_valid`](Self::all_valid).
	pub fn export_enabled(&self) -> bool {
		self.all_valid()
	}

	/// Produces the export block, one `"<Label>: <value>"` line per field in
	/// the order Type, SN, ModemID, CWMP, without a trailing newline.
	///
	/// # Examples
	///
	/// ```
	/// use ontcheck::{FieldId, ProvisionForm};
	///
	/// let mut form = ProvisionForm::new();
	/// form.set_value(FieldId::Type, "5530");
	/// form.set_value(FieldId::SerialNumber, "a12345678901234");
	/// form.set_value(FieldId::ModemId, "avmgtest1234");
	/// form.set_value(FieldId::CwmpId, "000123456789012345");
	///
	/// let block = form.export().unwrap();
	/// assert_eq!(
	/// 	block,
	/// 	"Type: 5530\n\
	/// 	 SN: A123.456.78.901.234\n\
	/// 	 ModemID: AVMGTEST1234\n\
	/// 	 CWMP: 000123-456789012345"
	/// );
	/// ```
	pub fn export(&self) -> FormResult<String> {
		let invalid: Vec<FieldId> = FieldId::ALL
			.iter()
			.copied()
			.filter(|id| !self.is_field_valid(*id))
			.collect();
		if !invalid.is_empty() {
			return Err(FormError::ExportDisabled(invalid));
		}

		let block = FieldId::ALL
			.iter()
			.map(|id| format!("{}: {}", self.label(*id), self.value(*id)))
			.collect::<Vec<_>>()
			.join("\n");
		tracing::debug!("export block produced");
		Ok(block)
	}

	/// Clears all four fields back to the untouched-empty state: empty
	/// values, no hints, nothing valid, export disabled.
	pub fn reset(&mut self) {
		for value in &mut self.values {
			value.clear();
		}
		tracing::debug!("all fields cleared");
	}
}

impl Default for ProvisionForm {
	fn default() -> Self {
		Self::new()
	}
}
