// File: src/validator/email.rs
// Purpose: Checks the shape of email addresses

use super::{scalar_text, Validator};
use crate::control::Control;
use crate::error::FormResult;
use rusty_forms_validation::is_valid_email;

/// Validator for email addresses. Empty values are valid.
#[derive(Debug, Clone, Copy, Default)]
pub struct EmailValidator;

impl Validator for EmailValidator {
    fn validate(&self, control: &mut Control) -> FormResult<bool> {
        let value = control.submitted_value();
        let Some(text) = scalar_text("EmailValidator", control, &value)? else {
            return Ok(true);
        };

        let valid = is_valid_email(&text);
        if !valid {
            control.set_error_message(format!("'{}' is not a valid email address.", text));
        }

        Ok(valid)
    }
}
