//! Format validation and live input formatting for ONT provisioning fields
//!
//! This crate provides the format gate used when provisioning ONT devices:
//! - Per-field cleaning and canonical reformatting of raw keystrokes
//!   (prefix injection, fixed-position separators, upper-casing)
//! - Canonical-pattern validation of the device type code, serial number,
//!   modem identifier, and CWMP identifier
//! - Tiered advisory hints for incomplete or malformed values
//! - An aggregate gate over all four fields driving a clipboard-style export
//!
//! Everything is local and synchronous; nothing is checked against a device
//! or backend. A UI shell feeds raw text changes into [`ProvisionForm`] and
//! renders the returned per-field state.
//!
//! # Examples
//!
//! ```
//! use ontcheck::{FieldId, Hint, ProvisionForm};
//!
//! let mut form = ProvisionForm::new();
//!
//! // Keystrokes are normalized as they arrive.
//! let update = form.set_value(FieldId::SerialNumber, "a12345678901234");
//! assert_eq!(update.display, "A123.456.78.901.234");
//! assert!(update.is_valid);
//!
//! // Incomplete values get a progress hint instead of an error.
//! let update = form.set_value(FieldId::Type, "55");
//! assert_eq!(update.hint, Hint::Info("2 characters missing".to_string()));
//!
//! form.set_value(FieldId::Type, "5530");
//! form.set_value(FieldId::ModemId, "avmgtest1234");
//! form.set_value(FieldId::CwmpId, "000123456789012345");
//!
//! // The export block only exists once every field validates.
//! assert!(form.export_enabled());
//! assert!(form.export().unwrap().starts_with("Type: 5530\n"));
//! ```

pub mod field;
pub mod fields;
pub mod form;

pub use field::{FieldId, FieldUpdate, Formatted, Hint, ProvisionField, clean_alphanumeric};
pub use fields::{CwmpIdField, ModemIdField, SerialNumberField, TypeField};
pub use form::{FieldState, FormError, FormResult, ProvisionForm};
