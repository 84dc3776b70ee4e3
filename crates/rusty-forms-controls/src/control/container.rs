// File: src/control/container.rs
// Purpose: Fieldsets and complex controls holding child controls

use super::Control;
use crate::html::{self, Attributes, IdGenerator};
use crate::value::Map;

/// Markup around the children of a container.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ContainerElement {
    /// `<fieldset>` with an optional `<legend>`.
    FieldSet,
    /// No markup of its own.
    None,
}

#[derive(Debug)]
pub struct Container {
    pub element: ContainerElement,
    pub legend: Option<String>,
    pub controls: Vec<Control>,
}

impl Container {
    pub fn new(element: ContainerElement) -> Self {
        Self {
            element,
            legend: None,
            controls: Vec::new(),
        }
    }

    pub(super) fn push(&mut self, control: Control) -> &mut Control {
        let index = self.controls.len();
        self.controls.push(control);
        &mut self.controls[index]
    }

    pub(super) fn set_values(&mut self, values: &Map) {
        for control in &mut self.controls {
            control.set_values(values);
        }
    }

    pub(super) fn merge_values(&mut self, values: &Map) {
        for control in &mut self.controls {
            control.merge_values(values);
        }
    }

    pub(super) fn collect_values(&self, values: &mut Map) {
        for control in &self.controls {
            control.collect_values(values);
        }
    }

    pub(super) fn render(&self, buffer: &mut String, attributes: &Attributes, ids: &mut IdGenerator) {
        if self.element == ContainerElement::FieldSet {
            buffer.push_str(&html::tag("fieldset", attributes));
            if let Some(legend) = &self.legend {
                buffer.push_str(&html::element("legend", &Attributes::new(), legend, false));
            }
        }

        for control in &self.controls {
            buffer.push_str(&control.get_html(ids).into_string());
        }

        if self.element == ContainerElement::FieldSet {
            buffer.push_str("</fieldset>");
        }
    }
}
