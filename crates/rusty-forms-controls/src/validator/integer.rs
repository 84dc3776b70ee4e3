// File: src/validator/integer.rs
// Purpose: Checks integers with optional bounds

use super::{scalar_text, Validator};
use crate::control::Control;
use crate::error::FormResult;
use rusty_forms_validation::{parse_integer, validate_range};

/// Validator for integers within optional inclusive bounds. Empty values are valid.
#[derive(Debug, Clone, Copy, Default)]
pub struct IntegerValidator {
    min: Option<i64>,
    max: Option<i64>,
}

impl IntegerValidator {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_range(min: Option<i64>, max: Option<i64>) -> Self {
        Self { min, max }
    }
}

impl Validator for IntegerValidator {
    fn validate(&self, control: &mut Control) -> FormResult<bool> {
        let value = control.submitted_value();
        let Some(text) = scalar_text("IntegerValidator", control, &value)? else {
            return Ok(true);
        };

        let Some(number) = parse_integer(&text) else {
            control.set_error_message(format!("'{}' is not a valid number.", text));
            return Ok(false);
        };

        match validate_range(number, self.min, self.max) {
            Ok(()) => Ok(true),
            Err(message) => {
                control.set_error_message(message);
                Ok(false)
            }
        }
    }
}
