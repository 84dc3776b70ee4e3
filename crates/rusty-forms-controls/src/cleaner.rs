// File: src/cleaner.rs
// Purpose: Normalization of raw submitted values before they are compared

use crate::value::Value;
use rusty_forms_validation::normalize_date;
use std::fmt;

/// Normalizes a raw submitted value.
///
/// Cleaning must be deterministic and idempotent. Values that are empty after
/// cleaning become `Value::Null`. Lists and maps are returned unchanged so that
/// validators can reject them.
pub trait Cleaner: Send + Sync + fmt::Debug {
    fn clean(&self, value: &Value) -> Value;
}

fn text_or_null(text: String) -> Value {
    if text.is_empty() {
        Value::Null
    } else {
        Value::String(text)
    }
}

/// Collapses runs of whitespace and control characters into one space.
fn prune(text: &str) -> String {
    text.split(|c: char| c.is_whitespace() || c.is_control())
        .filter(|part| !part.is_empty())
        .collect::<Vec<_>>()
        .join(" ")
}

/// Removes leading and trailing whitespace.
#[derive(Debug, Clone, Copy, Default)]
pub struct TrimWhitespaceCleaner;

impl Cleaner for TrimWhitespaceCleaner {
    fn clean(&self, value: &Value) -> Value {
        match value {
            Value::Null | Value::Bool(false) => Value::Null,
            Value::List(_) | Value::Map(_) => value.clone(),
            scalar => text_or_null(scalar.as_text().trim().to_string()),
        }
    }
}

/// Removes leading and trailing whitespace and replaces every run of
/// whitespace (including control characters) with a single space.
#[derive(Debug, Clone, Copy, Default)]
pub struct PruneWhitespaceCleaner;

impl Cleaner for PruneWhitespaceCleaner {
    fn clean(&self, value: &Value) -> Value {
        match value {
            Value::Null | Value::Bool(false) => Value::Null,
            Value::List(_) | Value::Map(_) => value.clone(),
            scalar => text_or_null(prune(&scalar.as_text())),
        }
    }
}

/// Prunes whitespace and rewrites recognised dates as `YYYY-MM-DD`.
///
/// Text that is not a recognised date is returned pruned but otherwise unchanged.
#[derive(Debug, Clone, Copy, Default)]
pub struct DateCleaner;

impl Cleaner for DateCleaner {
    fn clean(&self, value: &Value) -> Value {
        match PruneWhitespaceCleaner.clean(value) {
            Value::String(text) => match normalize_date(&text) {
                Some(date) => Value::String(date),
                None => Value::String(text),
            },
            other => other,
        }
    }
}
