// File: src/error.rs
// Purpose: Errors raised while validating or executing a form

use thiserror::Error;

/// Errors that indicate a programming error rather than invalid user input.
///
/// Invalid user input is never an error: validators report it by returning
/// `Ok(false)` and setting a message on the control.
#[derive(Debug, Error)]
pub enum FormError {
    /// A validator for scalar values was given a list or a map.
    #[error("{validator}: value of control '{control}' is a {found}, not a scalar")]
    NotScalar {
        validator: &'static str,
        control: String,
        found: &'static str,
    },
}

pub type FormResult<T> = Result<T, FormError>;
