//! End-to-end scenarios for the provisioning form
//!
//! Drives the form the way a UI shell would: raw text changes in, rendered
//! field state and the export gate out.

use ontcheck::{FieldId, Hint, ProvisionForm};
use rstest::rstest;
use serde_json::json;

const VALID_INPUTS: [(FieldId, &str); 4] = [
	(FieldId::Type, "5530"),
	(FieldId::SerialNumber, "a12345678901234"),
	(FieldId::ModemId, "avmgtest1234"),
	(FieldId::CwmpId, "000123456789012345"),
];

const INVALID_INPUTS: [(FieldId, &str); 4] = [
	(FieldId::Type, "55"),
	(FieldId::SerialNumber, "a1"),
	(FieldId::ModemId, "avmg12"),
	(FieldId::CwmpId, "0001"),
];

fn filled_form() -> ProvisionForm {
	let mut form = ProvisionForm::new();
	for (id, input) in VALID_INPUTS {
		form.set_value(id, input);
	}
	form
}

#[rstest]
fn test_aggregate_gate_over_all_combinations() {
	// Every subset of valid fields; the gate must be the AND of the four.
	for mask in 0u32..16 {
		let mut form = ProvisionForm::new();
		for (bit, ((id, valid), (_, invalid))) in
			VALID_INPUTS.iter().zip(INVALID_INPUTS.iter()).enumerate()
		{
			let input = if mask & (1 << bit) != 0 { valid } else { invalid };
			form.set_value(*id, *input);
		}

		assert_eq!(
			form.all_valid(),
			mask == 0b1111,
			"gate mismatch for combination {mask:04b}"
		);
		assert_eq!(form.export_enabled(), form.all_valid());
	}
}

#[rstest]
fn test_flipping_one_field_flips_the_gate() {
	let mut form = filled_form();
	assert!(form.all_valid());

	form.set_value(FieldId::ModemId, "avmg12");
	assert!(!form.all_valid());

	form.set_value(FieldId::ModemId, "avmgtest1234");
	assert!(form.all_valid());
}

#[rstest]
fn test_export_block_layout() {
	let form = filled_form();

	let block = form.export().unwrap();
	let lines: Vec<&str> = block.split('\n').collect();
	assert_eq!(
		lines,
		vec![
			"Type: 5530",
			"SN: A123.456.78.901.234",
			"ModemID: AVMGTEST1234",
			"CWMP: 000123-456789012345",
		]
	);
	assert!(!block.ends_with('\n'));
}

#[rstest]
fn test_reset_after_full_entry() {
	let mut form = filled_form();
	assert!(form.export_enabled());

	form.reset();

	for id in FieldId::ALL {
		let state = form.field_state(id);
		assert_eq!(state.display, "");
		assert!(!state.is_valid);
		assert_eq!(state.hint, Hint::None);
	}
	assert!(!form.export_enabled());
}

#[rstest]
fn test_overlength_paste_is_clipped_and_stays_valid() {
	let mut form = ProvisionForm::new();

	let update = form.set_value(FieldId::SerialNumber, "a123456789012345extra");
	assert_eq!(update.display, "A123.456.78.901.234");
	assert!(update.is_valid);
	assert_eq!(update.hint, Hint::None);
}

#[rstest]
fn test_paste_with_existing_separators() {
	let mut form = ProvisionForm::new();

	let update = form.set_value(FieldId::CwmpId, "000123-456789012345");
	assert_eq!(update.display, "000123-456789012345");
	assert!(!update.cursor_at_end);
	assert!(update.is_valid);
}

#[rstest]
fn test_modem_prefix_is_forced_on_foreign_input() {
	let mut form = ProvisionForm::new();

	let update = form.set_value(FieldId::ModemId, "xxxx12345678");
	assert_eq!(update.display, "AVMG12345678");
	assert!(update.is_valid);
}

#[rstest]
#[case(FieldId::Type, "55", Hint::Info("2 characters missing".to_string()))]
#[case(
	FieldId::SerialNumber,
	"a12345",
	Hint::Info("9 characters missing".to_string())
)]
#[case(FieldId::ModemId, "avmg12", Hint::Info("6 characters missing".to_string()))]
#[case(FieldId::CwmpId, "0001", Hint::Info("14 characters missing".to_string()))]
fn test_progress_hints_through_the_form(
	#[case] id: FieldId,
	#[case] raw: &str,
	#[case] expected: Hint,
) {
	let mut form = ProvisionForm::new();

	let update = form.set_value(id, raw);
	assert_eq!(update.hint, expected);
	assert!(!update.is_valid);
}

#[rstest]
fn test_field_state_serializes_for_the_shell() {
	let mut form = ProvisionForm::new();
	form.set_value(FieldId::Type, "55");

	let state = form.field_state(FieldId::Type);
	assert_eq!(
		serde_json::to_value(&state).unwrap(),
		json!({
			"display": "55",
			"is_valid": false,
			"hint": { "info": "2 characters missing" },
		})
	);

	let untouched = form.field_state(FieldId::CwmpId);
	assert_eq!(
		serde_json::to_value(&untouched).unwrap(),
		json!({
			"display": "",
			"is_valid": false,
			"hint": "none",
		})
	);
}
