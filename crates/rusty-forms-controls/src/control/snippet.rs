// File: src/control/snippet.rs
// Purpose: Display-only elements (div, span, a) inside a form

/// Tag and inner HTML of a div, span or link control.
#[derive(Debug, Clone)]
pub struct ElementState {
    pub tag: &'static str,
    pub inner: String,
}

impl ElementState {
    pub fn new(tag: &'static str) -> Self {
        Self {
            tag,
            inner: String::new(),
        }
    }
}
