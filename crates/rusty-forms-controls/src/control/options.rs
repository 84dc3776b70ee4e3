// File: src/control/options.rs
// Purpose: Options of checkboxes and radios controls, optionally built from records

use crate::html::{AttrValue, Attributes};
use crate::obfuscator::Obfuscator;
use crate::value::{Map, Value};
use std::fmt;
use std::sync::Arc;

/// One checkbox or radio button in a group.
#[derive(Debug, Clone, PartialEq)]
pub struct ControlOption {
    pub key: Value,
    pub label: String,
    pub checked: bool,
    pub input_attributes: Attributes,
    pub label_attributes: Attributes,
}

impl ControlOption {
    pub fn new(key: impl Into<Value>, label: &str) -> Self {
        Self {
            key: key.into(),
            label: label.to_string(),
            checked: false,
            input_attributes: Attributes::new(),
            label_attributes: Attributes::new(),
        }
    }

    pub fn checked(mut self, checked: bool) -> Self {
        self.checked = checked;
        self
    }

    pub fn input_attribute(mut self, name: &str, value: impl Into<AttrValue>) -> Self {
        self.input_attributes.set(name, value);
        self
    }

    pub fn label_attribute(mut self, name: &str, value: impl Into<AttrValue>) -> Self {
        self.label_attributes.set(name, value);
        self
    }

    /// The key as used in whitelisted and changed maps.
    pub(crate) fn key_text(&self) -> String {
        self.key.as_text().into_owned()
    }
}

/// Which record fields feed the options of a group.
#[derive(Debug, Clone)]
pub struct OptionFields {
    key: String,
    label: String,
    checked: String,
    input_attributes: Vec<(String, String)>,
    label_attributes: Vec<(String, String)>,
}

impl OptionFields {
    /// Keys from field `key`, labels from field `label`, checked flags from
    /// field `checked`.
    pub fn new(key: &str, label: &str) -> Self {
        Self {
            key: key.to_string(),
            label: label.to_string(),
            checked: "checked".to_string(),
            input_attributes: Vec::new(),
            label_attributes: Vec::new(),
        }
    }

    pub fn checked_field(mut self, field: &str) -> Self {
        self.checked = field.to_string();
        self
    }

    /// Copies record field `field` into attribute `attribute` of the input.
    pub fn input_attribute(mut self, field: &str, attribute: &str) -> Self {
        self.input_attributes.push((field.to_string(), attribute.to_string()));
        self
    }

    /// Copies record field `field` into attribute `attribute` of the label.
    pub fn label_attribute(mut self, field: &str, attribute: &str) -> Self {
        self.label_attributes.push((field.to_string(), attribute.to_string()));
        self
    }
}

fn mapped_attributes(record: &Map, mapping: &[(String, String)]) -> Attributes {
    let mut attributes = Attributes::new();
    for (field, attribute) in mapping {
        if let Some(value) = record.get(field).filter(|value| !value.is_null()) {
            attributes.set(attribute, value);
        }
    }
    attributes
}

/// The options of a checkboxes or radios control.
#[derive(Clone, Default)]
pub struct OptionGroup {
    options: Vec<ControlOption>,
    obfuscator: Option<Arc<dyn Obfuscator>>,
    label_is_html: bool,
    label_prefix: String,
    label_postfix: String,
}

impl fmt::Debug for OptionGroup {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("OptionGroup")
            .field("options", &self.options)
            .field("obfuscated", &self.obfuscator.is_some())
            .field("label_is_html", &self.label_is_html)
            .finish()
    }
}

impl OptionGroup {
    pub fn new(options: Vec<ControlOption>) -> Self {
        Self {
            options,
            ..Self::default()
        }
    }

    /// Builds one option per record.
    pub fn from_records(records: &[Map], fields: &OptionFields) -> Self {
        let options = records
            .iter()
            .map(|record| ControlOption {
                key: record.get(&fields.key).cloned().unwrap_or_default(),
                label: record
                    .get(&fields.label)
                    .map(|label| label.as_text().into_owned())
                    .unwrap_or_default(),
                checked: record.get(&fields.checked).is_some_and(Value::to_bool),
                input_attributes: mapped_attributes(record, &fields.input_attributes),
                label_attributes: mapped_attributes(record, &fields.label_attributes),
            })
            .collect();

        Self::new(options)
    }

    /// Option keys are rendered and submitted as codes of this obfuscator.
    /// Keys must then be integers.
    pub fn with_obfuscator(mut self, obfuscator: Arc<dyn Obfuscator>) -> Self {
        self.obfuscator = Some(obfuscator);
        self
    }

    pub fn with_label_is_html(mut self, label_is_html: bool) -> Self {
        self.label_is_html = label_is_html;
        self
    }

    /// HTML around each option's label.
    pub fn with_label_wrapper(mut self, prefix: &str, postfix: &str) -> Self {
        self.label_prefix = prefix.to_string();
        self.label_postfix = postfix.to_string();
        self
    }

    pub fn options(&self) -> &[ControlOption] {
        &self.options
    }

    pub fn options_mut(&mut self) -> &mut [ControlOption] {
        &mut self.options
    }

    pub(crate) fn label_is_html(&self) -> bool {
        self.label_is_html
    }

    pub(crate) fn label_prefix(&self) -> &str {
        &self.label_prefix
    }

    pub(crate) fn label_postfix(&self) -> &str {
        &self.label_postfix
    }

    /// The code under which an option is rendered and submitted.
    pub(crate) fn code(&self, key: &Value) -> String {
        match &self.obfuscator {
            Some(obfuscator) => {
                let id = key.as_int();
                if id.is_none() && !key.is_null() {
                    tracing::warn!(key = %key, "option key is not an integer and cannot be obfuscated");
                }
                obfuscator.encode(id)
            }
            None => key.as_text().into_owned(),
        }
    }

    /// Option key text to checked flag.
    pub(crate) fn checked_map(&self) -> Map {
        self.options
            .iter()
            .map(|option| (option.key_text(), Value::Bool(option.checked)))
            .collect()
    }

    /// Checks the options whose key maps to a non-empty value in `values`;
    /// all options are unchecked when `values` is `None`.
    pub(crate) fn set_checked(&mut self, values: Option<&Map>) {
        for option in &mut self.options {
            option.checked = values
                .and_then(|values| values.get(&option.key_text()))
                .is_some_and(Value::to_bool);
        }
    }

    /// Like [`OptionGroup::set_checked`] but leaves options absent from `values`
    /// untouched.
    pub(crate) fn merge_checked(&mut self, values: &Map) {
        for option in &mut self.options {
            if let Some(value) = values.get(&option.key_text()) {
                option.checked = value.to_bool();
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::obfuscator::ReferenceObfuscator;
    use pretty_assertions::assert_eq;

    fn record(id: i64, name: &str, checked: bool) -> Map {
        let mut record = Map::new();
        record.insert("id".to_string(), Value::Int(id));
        record.insert("name".to_string(), Value::from(name));
        record.insert("selected".to_string(), Value::Bool(checked));
        record.insert("class".to_string(), Value::from("colour"));
        record
    }

    #[test]
    fn test_from_records() {
        let records = vec![record(1, "red", true), record(2, "green", false)];
        let fields = OptionFields::new("id", "name")
            .checked_field("selected")
            .label_attribute("class", "class");

        let group = OptionGroup::from_records(&records, &fields);

        assert_eq!(group.options().len(), 2);
        assert_eq!(group.options()[0].key, Value::Int(1));
        assert_eq!(group.options()[0].label, "red");
        assert!(group.options()[0].checked);
        assert!(!group.options()[1].checked);
        assert_eq!(group.options()[1].label_attributes.text("class"), Some("colour"));
        assert!(group.options()[1].input_attributes.is_empty());
    }

    #[test]
    fn test_code_without_obfuscator_is_key_text() {
        let group = OptionGroup::default();
        assert_eq!(group.code(&Value::Int(7)), "7");
        assert_eq!(group.code(&Value::from("nl")), "nl");
    }

    #[test]
    fn test_code_with_obfuscator() {
        let obfuscator = Arc::new(ReferenceObfuscator::new(0, 4));
        let group = OptionGroup::default().with_obfuscator(obfuscator);

        assert_eq!(group.code(&Value::Int(255)), "00ff");
        assert_eq!(group.code(&Value::from("nl")), "");
    }

    #[test]
    fn test_set_and_merge_checked() {
        let mut group = OptionGroup::new(vec![
            ControlOption::new(1, "one").checked(true),
            ControlOption::new(2, "two").checked(true),
        ]);

        let mut values = Map::new();
        values.insert("2".to_string(), Value::Bool(false));
        group.merge_checked(&values);
        assert_eq!(
            group.options().iter().map(|o| o.checked).collect::<Vec<_>>(),
            vec![true, false]
        );

        group.set_checked(None);
        assert!(group.options().iter().all(|o| !o.checked));
    }
}
