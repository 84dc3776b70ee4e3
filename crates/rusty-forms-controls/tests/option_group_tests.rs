//! Integration tests for checkboxes and radios controls

use pretty_assertions::assert_eq;
use rusty_forms_controls::*;
use serde_json::json;
use std::sync::Arc;

fn post(body: &str) -> Value {
    parse_form_body(body)
}

fn colours() -> OptionGroup {
    OptionGroup::new(vec![ControlOption::new(1, "red"), ControlOption::new(2, "green")])
}

#[test]
fn test_checkboxes_values_and_changes() {
    let mut form = Form::new("");
    form.add_fieldset(Control::fieldset(""))
        .add_control(Control::checkboxes("colours", colours()));

    form.load_submitted_values(&post("colours[1]=on"));

    assert_eq!(
        Value::Map(form.values().clone()),
        Value::from(json!({"colours": {"1": true, "2": false}}))
    );
    assert_eq!(
        Value::Map(form.changed_controls().clone()),
        Value::from(json!({"colours": {"1": true}}))
    );
}

#[test]
fn test_checkboxes_without_changes_have_no_changed_entry() {
    let mut form = Form::new("");
    form.add_fieldset(Control::fieldset(""))
        .add_control(Control::checkboxes("colours", colours()))
        .set_value(Value::from(json!({"2": true})));

    form.load_submitted_values(&post("colours[2]=on"));

    assert_eq!(
        Value::Map(form.values().clone()),
        Value::from(json!({"colours": {"1": false, "2": true}}))
    );
    assert!(form.changed_controls().is_empty());
}

#[test]
fn test_checkboxes_with_obfuscated_keys() {
    let obfuscator = Arc::new(ReferenceObfuscator::new(0xff, 4));
    let group = colours().with_obfuscator(obfuscator.clone());
    let code = obfuscator.encode(Some(2));

    let mut form = Form::new("");
    form.add_fieldset(Control::fieldset(""))
        .add_control(Control::checkboxes("colours", group));

    // The plain key is not accepted, only the code.
    form.load_submitted_values(&post(&format!("colours[1]=on&colours[{}]=on", code)));

    assert_eq!(
        Value::Map(form.values().clone()),
        Value::from(json!({"colours": {"1": false, "2": true}}))
    );

    let html = form.get_html().into_string();
    assert!(html.contains(&format!("name=\"colours[{}]\"", code)));
    assert!(!html.contains("name=\"colours[2]\""));
}

#[test]
fn test_checkboxes_from_records() {
    let records: Vec<Map> = [json!({"id": 10, "name": "red"}), json!({"id": 20, "name": "blue", "checked": 1})]
        .into_iter()
        .filter_map(|record| Value::from(record).as_map().cloned())
        .collect();
    let group = OptionGroup::from_records(&records, &OptionFields::new("id", "name"));

    let mut form = Form::new("");
    form.add_fieldset(Control::fieldset(""))
        .add_control(Control::checkboxes("colours", group));

    assert_eq!(
        Value::Map(form.get_set_values()),
        Value::from(json!({"colours": {"10": false, "20": true}}))
    );
}

#[test]
fn test_radios_with_obfuscated_code() {
    let obfuscator = Arc::new(ReferenceObfuscator::new(0x1234, 8));
    let group = OptionGroup::new(vec![
        ControlOption::new(3, "three"),
        ControlOption::new(4, "four"),
    ])
    .with_obfuscator(obfuscator.clone());

    let mut form = Form::new("");
    form.add_fieldset(Control::fieldset(""))
        .add_control(Control::radios("number", group));

    let body = format!("number={}", obfuscator.encode(Some(4)));
    form.load_submitted_values(&post(&body));

    assert_eq!(form.values()["number"], Value::Int(4));
    assert!(form.changed_controls().contains_key("number"));
}

#[test]
fn test_radios_with_unknown_code() {
    let group = OptionGroup::new(vec![ControlOption::new(3, "three")])
        .with_obfuscator(Arc::new(ReferenceObfuscator::new(0x1234, 8)));

    let mut form = Form::new("");
    form.add_fieldset(Control::fieldset(""))
        .add_control(Control::radios("number", group))
        .set_value(3);

    form.load_submitted_values(&post("number=deadbeef"));

    assert_eq!(form.values()["number"], Value::Null);
    assert!(form.changed_controls().contains_key("number"));
}

#[test]
fn test_radios_unchanged_selection() {
    let group = OptionGroup::new(vec![
        ControlOption::new("nl", "Dutch"),
        ControlOption::new("en", "English"),
    ]);

    let mut form = Form::new("");
    form.add_fieldset(Control::fieldset(""))
        .add_control(Control::radios("language", group))
        .set_value("en");

    form.load_submitted_values(&post("language=en"));

    assert_eq!(form.values()["language"], Value::from("en"));
    assert!(form.changed_controls().is_empty());
}

#[test]
fn test_radios_accept_only_the_rendered_code() {
    let group = OptionGroup::new(vec![ControlOption::new(2, "two")])
        .with_obfuscator(Arc::new(ReferenceObfuscator::new(0, 8)));

    let mut form = Form::new("");
    form.add_fieldset(Control::fieldset(""))
        .add_control(Control::radios("r", group))
        .set_value(2);

    // "2" decodes to the key but is not the code "00000002" that was rendered.
    form.load_submitted_values(&post("r=2"));

    assert_eq!(form.values()["r"], Value::Null);
    assert!(form.changed_controls().contains_key("r"));

    form.load_submitted_values(&post("r=00000002"));

    assert_eq!(form.values()["r"], Value::Int(2));
}

#[test]
fn test_immutable_radios_ignore_submitted_code() {
    let group = OptionGroup::new(vec![
        ControlOption::new("nl", "Dutch"),
        ControlOption::new("en", "English"),
    ]);

    let mut form = Form::new("");
    form.add_fieldset(Control::fieldset(""))
        .add_control(Control::radios("language", group))
        .set_value("nl")
        .set_immutable(true);

    form.load_submitted_values(&post("language=en"));

    assert_eq!(form.values()["language"], Value::from("nl"));
    assert!(form.changed_controls().is_empty());
}

#[test]
fn test_immutable_input_in_nested_fieldset() {
    let mut form = Form::new("");
    form.add_fieldset(Control::fieldset(""))
        .add_control(Control::fieldset("address"))
        .add_control(Control::text("city"))
        .set_value("Delft")
        .set_immutable(true);

    form.load_submitted_values(&post("address[city]=Leiden"));

    assert_eq!(
        Value::Map(form.values().clone()),
        Value::from(json!({"address": {"city": "Delft"}}))
    );
    assert!(form.changed_controls().is_empty());
}
