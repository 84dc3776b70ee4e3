// File: src/validator/mandatory.rs
// Purpose: Requires a non-empty value

use super::Validator;
use crate::control::Control;
use crate::error::FormResult;
use crate::value::Value;

/// Requires a value. For controls with a map value (checkboxes) at least one
/// entry must be set.
#[derive(Debug, Clone, Copy, Default)]
pub struct MandatoryValidator;

impl Validator for MandatoryValidator {
    fn validate(&self, control: &mut Control) -> FormResult<bool> {
        let valid = match control.submitted_value() {
            Value::Null | Value::Bool(false) => false,
            Value::String(text) => !text.is_empty(),
            Value::Map(map) => map.values().any(Value::to_bool),
            Value::List(items) => !items.is_empty(),
            Value::Bool(true) | Value::Int(_) | Value::Float(_) => true,
        };

        if !valid {
            control.set_error_message("This field is mandatory.");
        }

        Ok(valid)
    }
}
