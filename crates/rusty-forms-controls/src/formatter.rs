// File: src/formatter.rs
// Purpose: Presentation of input values when they are rendered

use crate::value::Value;
use std::fmt;

/// Turns the value of an input control into the text of its `value` attribute.
///
/// Formatting only affects rendering. Submitted values are reconciled against
/// the unformatted value.
pub trait Formatter: Send + Sync + fmt::Debug {
    fn format(&self, value: &Value) -> String;
}

/// Writes numbers with a fixed number of decimals.
///
/// Text that parses as a number is formatted too. Anything else is rendered
/// as is.
#[derive(Debug, Clone, Copy)]
pub struct DecimalFormatter {
    decimals: usize,
}

impl DecimalFormatter {
    pub fn new(decimals: usize) -> Self {
        Self { decimals }
    }
}

impl Formatter for DecimalFormatter {
    fn format(&self, value: &Value) -> String {
        let number = match value {
            Value::Int(n) => Some(*n as f64),
            Value::Float(n) => Some(*n),
            Value::String(s) => s.trim().parse::<f64>().ok(),
            _ => None,
        };

        match number {
            Some(n) if n.is_finite() => format!("{:.*}", self.decimals, n),
            _ => value.as_text().into_owned(),
        }
    }
}
