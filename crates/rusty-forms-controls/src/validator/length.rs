// File: src/validator/length.rs
// Purpose: Bounds the number of characters of a value

use super::{scalar_text, Validator};
use crate::control::Control;
use crate::error::FormResult;
use rusty_forms_validation::validate_length;

/// Validator for the number of characters of a value. Empty values are valid;
/// combine with [`super::MandatoryValidator`] to require input.
#[derive(Debug, Clone, Copy, Default)]
pub struct LengthValidator {
    min: Option<usize>,
    max: Option<usize>,
}

impl LengthValidator {
    pub fn new(min: Option<usize>, max: Option<usize>) -> Self {
        Self { min, max }
    }
}

impl Validator for LengthValidator {
    fn validate(&self, control: &mut Control) -> FormResult<bool> {
        let value = control.submitted_value();
        let Some(text) = scalar_text("LengthValidator", control, &value)? else {
            return Ok(true);
        };

        match validate_length(&text, self.min, self.max) {
            Ok(()) => Ok(true),
            Err(message) => {
                control.set_error_message(message);
                Ok(false)
            }
        }
    }
}
