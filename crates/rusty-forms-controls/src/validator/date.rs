// File: src/validator/date.rs
// Purpose: Checks that a value is an existing calendar date

use super::{scalar_text, Validator};
use crate::control::Control;
use crate::error::FormResult;
use rusty_forms_validation::is_valid_date;

/// Validator for dates in `YYYY-M-D` format that exist in the calendar.
///
/// Empty values are valid. Run a [`crate::DateCleaner`] first to accept other
/// layouts.
#[derive(Debug, Clone, Copy, Default)]
pub struct DateValidator;

impl Validator for DateValidator {
    fn validate(&self, control: &mut Control) -> FormResult<bool> {
        let value = control.submitted_value();
        let Some(text) = scalar_text("DateValidator", control, &value)? else {
            return Ok(true);
        };

        let valid = is_valid_date(&text);
        if !valid {
            control.set_error_message(format!("'{}' is not a valid date.", text));
        }

        Ok(valid)
    }
}
