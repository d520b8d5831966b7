// Provisioning fields
pub mod cwmp_id_field;
pub mod modem_id_field;
pub mod serial_number_field;
pub mod type_field;

// Re-exports
pub use cwmp_id_field::CwmpIdField;
pub use modem_id_field::ModemIdField;
pub use serial_number_field::SerialNumberField;
pub use type_field::TypeField;

use crate::field::{FieldId, ProvisionField};

/// Registry lookup: the field implementation for an id, with its default
/// label.
///
/// # Examples
///
/// ```
/// use ontcheck::{FieldId, fields};
///
/// let field = fields::create(FieldId::SerialNumber);
/// assert_eq!(field.label(), "SN");
/// assert_eq!(field.max_clean_length(), 15);
/// ```
pub fn create(id: FieldId) -> Box<dyn ProvisionField> {
	match id {
		FieldId::Type => Box::new(TypeField::new()),
		FieldId::SerialNumber => Box::new(SerialNumberField::new()),
		FieldId::ModemId => Box::new(ModemIdField::new()),
		FieldId::CwmpId => Box::new(CwmpIdField::new()),
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use rstest::rstest;

	#[rstest]
	#[case(FieldId::Type, "Type", 4)]
	#[case(FieldId::SerialNumber, "SN", 15)]
	#[case(FieldId::ModemId, "ModemID", 12)]
	#[case(FieldId::CwmpId, "CWMP", 18)]
	fn test_registry_table(
		#[case] id: FieldId,
		#[case] label: &str,
		#[case] required: usize,
	) {
		let field = create(id);

		assert_eq!(field.id(), id);
		assert_eq!(field.label(), label);
		assert_eq!(field.required_clean_length(), required);
	}
}
