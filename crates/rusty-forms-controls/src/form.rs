// File: src/form.rs
// Purpose: A form: fieldsets of controls, submission handling and rendering

use crate::config::FormsConfig;
use crate::control::{self, Control};
use crate::error::FormResult;
use crate::html::{self, AttrValue, Attributes, IdGenerator};
use crate::validation::ValidationResult;
use crate::value::{Map, Value};
use crate::walker::LoadWalker;
use maud::Markup;
use std::collections::BTreeMap;

/// What [`Form::execute`] found.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    /// The form was submitted and all controls are valid.
    Submitted { handler: Option<String> },
    /// The form was submitted but at least one control is invalid.
    Invalid { handler: Option<String> },
    /// No submit control recognised the request; show the form.
    NotSubmitted,
}

/// A form.
///
/// The submitted data of a named form lives under the form's name; the controls
/// of an unnamed form read the top level of the submitted data.
#[derive(Debug)]
pub struct Form {
    name: String,
    attributes: Attributes,
    fieldsets: Vec<Control>,
    config: FormsConfig,
    values: Map,
    changed: Map,
    submitted: bool,
    submit_handler: Option<String>,
    errors: BTreeMap<String, Vec<String>>,
}

impl Form {
    pub fn new(name: &str) -> Self {
        Self::with_config(name, FormsConfig::default())
    }

    pub fn with_config(name: &str, config: FormsConfig) -> Self {
        Self {
            name: name.to_string(),
            attributes: Attributes::new(),
            fieldsets: Vec::new(),
            config,
            values: Map::new(),
            changed: Map::new(),
            submitted: false,
            submit_handler: None,
            errors: BTreeMap::new(),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Sets an attribute of the `<form>` element; `method` and `action` override
    /// the configured ones.
    pub fn set_attribute(&mut self, name: &str, value: impl Into<AttrValue>) -> &mut Self {
        self.attributes.set(name, value);
        self
    }

    /// Adds a fieldset (usually [`Control::fieldset`] or [`Control::complex`]).
    pub fn add_fieldset(&mut self, fieldset: Control) -> &mut Control {
        let index = self.fieldsets.len();
        self.fieldsets.push(fieldset);
        &mut self.fieldsets[index]
    }

    pub fn fieldsets(&self) -> &[Control] {
        &self.fieldsets
    }

    /// The control at `path`, e.g. `["address", "city"]`. Unnamed fieldsets and
    /// complex controls are looked through.
    pub fn find_control(&self, path: &[&str]) -> Option<&Control> {
        control::find_in(&self.fieldsets, path)
    }

    pub fn find_control_mut(&mut self, path: &[&str]) -> Option<&mut Control> {
        control::find_in_mut(&mut self.fieldsets, path)
    }

    fn prepare(&mut self) {
        for fieldset in &mut self.fieldsets {
            fieldset.prepare(&self.name);
        }
    }

    /// Reconciles every control with the submitted data.
    ///
    /// Afterwards [`Form::values`] holds the whitelisted values and
    /// [`Form::changed_controls`] the controls whose value differs from the
    /// value they had before.
    pub fn load_submitted_values(&mut self, submitted: &Value) {
        self.prepare();

        let empty = Value::Null;
        let root = if self.name.is_empty() {
            submitted
        } else {
            submitted
                .as_map()
                .and_then(|values| values.get(&self.name))
                .unwrap_or(&empty)
        };

        let mut walker = LoadWalker::new(root);
        for fieldset in &mut self.fieldsets {
            fieldset.load_submitted_values(&mut walker);
        }
        let result = walker.finish();

        tracing::debug!(
            form = %self.name,
            submitted = result.submitted,
            handler = ?result.submit_handler,
            changed = result.changed.len(),
            "loaded submitted values"
        );

        self.values = result.values;
        self.changed = result.changed;
        self.submitted = result.submitted;
        self.submit_handler = result.submit_handler;
    }

    /// The whitelisted values of the last submission.
    pub fn values(&self) -> &Map {
        &self.values
    }

    /// The changed controls of the last submission, nested like the values.
    pub fn changed_controls(&self) -> &Map {
        &self.changed
    }

    /// True if a submit control recognised the last submission.
    pub fn is_submitted(&self) -> bool {
        self.submitted
    }

    pub fn submit_handler(&self) -> Option<&str> {
        self.submit_handler.as_deref()
    }

    /// Validates all controls. Returns `Ok(false)` if any control is invalid.
    pub fn validate(&mut self) -> FormResult<bool> {
        self.prepare();
        self.errors.clear();

        let mut valid = true;
        for fieldset in &mut self.fieldsets {
            if !fieldset.validate(&mut self.errors)? {
                valid = false;
            }
        }

        if !valid {
            tracing::debug!(form = %self.name, invalid = self.errors.len(), "form is invalid");
        }

        Ok(valid)
    }

    /// True unless the last validation found invalid controls.
    pub fn is_valid(&self) -> bool {
        self.errors.is_empty()
    }

    pub fn validation_result(&self) -> ValidationResult {
        ValidationResult::from_errors(self.errors.clone())
    }

    /// Loads the submitted data and, if the form was submitted, validates it.
    pub fn execute(&mut self, submitted: &Value) -> FormResult<Outcome> {
        self.load_submitted_values(submitted);

        if !self.submitted {
            return Ok(Outcome::NotSubmitted);
        }

        let handler = self.submit_handler.clone();
        if self.validate()? {
            Ok(Outcome::Submitted { handler })
        } else {
            Ok(Outcome::Invalid { handler })
        }
    }

    /// Sets the values of all controls; controls missing from `values` are
    /// emptied.
    pub fn set_values(&mut self, values: &Map) {
        for fieldset in &mut self.fieldsets {
            fieldset.set_values(values);
        }
    }

    /// Sets the values of the controls present in `values` only.
    pub fn merge_values(&mut self, values: &Map) {
        for fieldset in &mut self.fieldsets {
            fieldset.merge_values(values);
        }
    }

    /// The current values of all controls.
    pub fn get_set_values(&self) -> Map {
        let mut values = Map::new();
        for fieldset in &self.fieldsets {
            fieldset.collect_values(&mut values);
        }
        values
    }

    /// Renders the form.
    pub fn get_html(&mut self) -> Markup {
        self.prepare();

        let mut attributes = Attributes::new();
        attributes
            .set("method", self.config.form.method.as_str())
            .set("action", self.config.form.action.as_str());
        for (name, value) in self.attributes.iter() {
            attributes.set(name, value.clone());
        }

        let mut ids = IdGenerator::new(self.config.html.auto_id_prefix.as_str());
        let mut buffer = html::tag("form", &attributes);
        for fieldset in &self.fieldsets {
            buffer.push_str(&fieldset.get_html(&mut ids).into_string());
        }
        buffer.push_str("</form>");

        html::markup(buffer)
    }
}
