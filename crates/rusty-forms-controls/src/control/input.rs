// File: src/control/input.rs
// Purpose: Single-valued <input> controls and the reconciliation they share

use crate::cleaner::Cleaner;
use crate::formatter::Formatter;
use crate::value::Value;
use crate::walker::LoadWalker;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputType {
    Text,
    Tel,
    Email,
    Url,
    Password,
    Number,
    Date,
    Hidden,
    /// Rendered as a hidden input; changes are never reported.
    Silent,
}

impl InputType {
    /// The value of the `type` attribute.
    pub fn html_type(&self) -> &'static str {
        match self {
            InputType::Text => "text",
            InputType::Tel => "tel",
            InputType::Email => "email",
            InputType::Url => "url",
            InputType::Password => "password",
            InputType::Number => "number",
            InputType::Date => "date",
            InputType::Hidden | InputType::Silent => "hidden",
        }
    }
}

#[derive(Debug)]
pub struct InputState {
    pub input_type: InputType,
    pub value: Value,
    /// Formats the rendered value; the value itself is left untouched.
    pub formatter: Option<Box<dyn Formatter>>,
}

impl InputState {
    pub fn new(input_type: InputType) -> Self {
        Self {
            input_type,
            value: Value::Null,
            formatter: None,
        }
    }

    /// The text of the `value` attribute.
    pub fn rendered_value(&self) -> String {
        match &self.formatter {
            Some(formatter) => formatter.format(&self.value),
            None => self.value.as_text().into_owned(),
        }
    }
}

/// Reconciles one scalar control with the submitted data.
///
/// An immutable control whitelists its current value and ignores the submission.
/// Otherwise the submitted value is cleaned; if its text differs from the text
/// of the current value the control takes the new value and, when
/// `report_change` is set, is marked as changed. The cleaned value is always
/// whitelisted.
pub(crate) fn reconcile_scalar(
    walker: &mut LoadWalker<'_>,
    name: &str,
    current: &mut Value,
    cleaner: Option<&dyn Cleaner>,
    immutable: bool,
    report_change: bool,
) {
    if immutable {
        walker.set_white_list_value(name, current.clone());
        return;
    }

    let submitted = walker.submitted_value(name).cloned().unwrap_or_default();
    let new_value = match cleaner {
        Some(cleaner) => cleaner.clean(&submitted),
        None => submitted,
    };

    // Lists and maps have no text; they always replace the current value.
    if current.as_text() != new_value.as_text() || !new_value.is_scalar() {
        if report_change {
            tracing::trace!(control = name, old = %current, new = %new_value, "value changed");
            walker.set_changed(name);
        }
        *current = new_value.clone();
    }

    walker.set_white_list_value(name, new_value);
}
