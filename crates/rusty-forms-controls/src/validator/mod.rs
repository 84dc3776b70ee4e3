// File: src/validator/mod.rs
// Purpose: Validators run against the reconciled value of a control

use crate::control::Control;
use crate::error::{FormError, FormResult};
use crate::value::Value;
use std::fmt;

mod date;
mod email;
mod http;
mod integer;
mod length;
mod mandatory;

pub use date::DateValidator;
pub use email::EmailValidator;
pub use http::HttpValidator;
pub use integer::IntegerValidator;
pub use length::LengthValidator;
pub use mandatory::MandatoryValidator;

/// Checks the value of a control.
///
/// A validator reads the control's submitted value only. On failure it sets a
/// human readable message on the control and returns `Ok(false)`. `Err` is
/// reserved for programming errors such as a list reaching a scalar validator.
pub trait Validator: Send + Sync + fmt::Debug {
    fn validate(&self, control: &mut Control) -> FormResult<bool>;
}

/// The text of a scalar value, or `None` for values that count as "not entered"
/// (null, false and the empty string).
pub(crate) fn scalar_text(
    validator: &'static str,
    control: &Control,
    value: &Value,
) -> FormResult<Option<String>> {
    match value {
        Value::Null | Value::Bool(false) => Ok(None),
        Value::List(_) | Value::Map(_) => Err(FormError::NotScalar {
            validator,
            control: control.name().to_string(),
            found: value.type_name(),
        }),
        scalar => {
            let text = scalar.as_text();
            if text.is_empty() {
                Ok(None)
            } else {
                Ok(Some(text.into_owned()))
            }
        }
    }
}
