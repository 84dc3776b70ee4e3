// File: src/validation.rs
// Purpose: Outcome of validating a form

use std::collections::BTreeMap;

/// Error messages of the invalid controls of a form, keyed by submit name.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ValidationResult {
    pub is_valid: bool,
    pub errors: BTreeMap<String, Vec<String>>,
}

impl ValidationResult {
    pub fn success() -> Self {
        Self {
            is_valid: true,
            errors: BTreeMap::new(),
        }
    }

    pub fn failure(errors: BTreeMap<String, Vec<String>>) -> Self {
        Self {
            is_valid: false,
            errors,
        }
    }

    pub fn from_errors(errors: BTreeMap<String, Vec<String>>) -> Self {
        if errors.is_empty() {
            Self::success()
        } else {
            Self::failure(errors)
        }
    }

    pub fn has_errors(&self) -> bool {
        !self.errors.is_empty()
    }

    /// First error of the control submitted as `submit_name`.
    pub fn get_error(&self, submit_name: &str) -> Option<&str> {
        self.errors
            .get(submit_name)
            .and_then(|errors| errors.first())
            .map(String::as_str)
    }

    pub fn get_errors(&self, submit_name: &str) -> &[String] {
        self.errors.get(submit_name).map(Vec::as_slice).unwrap_or_default()
    }
}
