// File: src/validator/http.rs
// Purpose: Checks http and https URLs

use super::{scalar_text, Validator};
use crate::control::Control;
use crate::error::FormResult;
use rusty_forms_validation::is_valid_http_url;

/// Validator for http and https URLs. Empty values are valid.
#[derive(Debug, Clone, Copy, Default)]
pub struct HttpValidator;

impl Validator for HttpValidator {
    fn validate(&self, control: &mut Control) -> FormResult<bool> {
        let value = control.submitted_value();
        let Some(text) = scalar_text("HttpValidator", control, &value)? else {
            return Ok(true);
        };

        let valid = is_valid_http_url(&text);
        if !valid {
            control.set_error_message(format!("'{}' is not a valid URL.", text));
        }

        Ok(valid)
    }
}
