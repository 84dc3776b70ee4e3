//! Integration tests for single-valued input controls

use pretty_assertions::assert_eq;
use rstest::rstest;
use rusty_forms_controls::*;

fn post(fields: &[(&str, &str)]) -> Value {
    from_fields(fields.iter().copied())
}

/// An unnamed form with `control` and a force submit control calling
/// `handle_submit`.
fn force_submitted_form(control: Control) -> Form {
    let mut form = Form::new("");
    let fieldset = form.add_fieldset(Control::fieldset(""));
    fieldset.add_control(control);
    fieldset
        .add_control(Control::force_submit("submit", true))
        .set_method("handle_submit");
    form
}

#[rstest]
#[case::tel(Control::tel("myInput"), "tel")]
#[case::silent(Control::silent("myInput"), "hidden")]
#[case::hidden(Control::hidden("myInput"), "hidden")]
#[case::text(Control::text("myInput"), "text")]
fn test_html(#[case] control: Control, #[case] html_type: &str) {
    let mut form = Form::new("myForm");
    form.add_fieldset(Control::fieldset("myFieldSet")).add_control(control);

    let expected = format!(
        "<form method=\"post\" action=\"/\"><fieldset><input type=\"{}\" name=\"myForm[myFieldSet][myInput]\"/></fieldset></form>",
        html_type
    );
    assert_eq!(form.get_html().into_string(), expected);
}

#[test]
fn test_tel_prune_whitespace_no_change() {
    let mut tel = Control::tel("test");
    tel.set_value("+1 555 123456789");
    let mut form = force_submitted_form(tel);

    let outcome = form
        .execute(&post(&[("test", "  +1   555   123456789  ")]))
        .unwrap();

    assert_eq!(
        outcome,
        Outcome::Submitted {
            handler: Some("handle_submit".to_string())
        }
    );
    assert_eq!(form.values()["test"], Value::from("+1 555 123456789"));
    assert!(!form.changed_controls().contains_key("test"));
}

#[test]
fn test_silent_change_is_whitelisted_but_not_reported() {
    let mut silent = Control::silent("test");
    silent.set_value("Old value");
    let mut form = force_submitted_form(silent);

    let outcome = form.execute(&post(&[("test", "New value")])).unwrap();

    assert!(matches!(outcome, Outcome::Submitted { .. }));
    assert!(form.is_valid());
    assert_eq!(form.submit_handler(), Some("handle_submit"));
    assert!(form.changed_controls().is_empty());
    assert_eq!(form.values()["test"], Value::from("New value"));
}

#[rstest]
#[case::zero("0")]
#[case::zero_float("0.0")]
#[case::text("some text")]
fn test_silent_echoes_submitted_value(#[case] submitted: &str) {
    let mut silent = Control::silent("name");
    silent.set_value(submitted);
    let mut form = force_submitted_form(silent);

    form.execute(&post(&[("name", submitted)])).unwrap();

    assert_eq!(form.values()["name"], Value::from(submitted));
    assert!(form.changed_controls().is_empty());

    let html = form.get_html().into_string();
    assert!(html.contains(&format!("value=\"{}\"", submitted)));
}

#[rstest]
#[case::empty(&[("name", "")])]
#[case::missing(&[("other_name", "")])]
fn test_silent_without_value(#[case] fields: &[(&str, &str)]) {
    let mut form = force_submitted_form(Control::silent("name"));

    form.execute(&post(fields)).unwrap();

    assert_eq!(form.values()["name"], Value::Null);
    assert!(form.changed_controls().is_empty());
}

#[test]
fn test_immutable_text_ignores_submission() {
    let mut text = Control::text("name");
    text.set_value("Alice").set_immutable(true);
    let mut form = force_submitted_form(text);

    form.execute(&post(&[("name", "Mallory")])).unwrap();

    assert_eq!(form.values()["name"], Value::from("Alice"));
    assert!(form.changed_controls().is_empty());
}

#[test]
fn test_date_is_normalized_before_comparison() {
    let mut date = Control::date("birthday");
    date.set_value("1990-07-04");
    let mut form = force_submitted_form(date);

    form.execute(&post(&[("birthday", " 4-7-1990 ")])).unwrap();

    assert_eq!(form.values()["birthday"], Value::from("1990-07-04"));
    assert!(form.changed_controls().is_empty());
    assert!(form.is_valid());
}

#[test]
fn test_label_gets_generated_id() {
    let mut form = Form::new("");
    let fieldset = form.add_fieldset(Control::fieldset(""));
    fieldset.add_control(Control::text("first")).set_label("First & last");
    fieldset
        .add_control(Control::text("second"))
        .set_attribute("id", "second-id")
        .set_label_html("<b>Second</b>");

    assert_eq!(
        form.get_html().into_string(),
        "<form method=\"post\" action=\"/\"><fieldset>\
         <label for=\"abc-id-1\">First &amp; last</label><input type=\"text\" name=\"first\" id=\"abc-id-1\"/>\
         <label for=\"second-id\"><b>Second</b></label><input id=\"second-id\" type=\"text\" name=\"second\"/>\
         </fieldset></form>"
    );
}

#[test]
fn test_custom_id_prefix() {
    let mut config = FormsConfig::default();
    config.html.auto_id_prefix = "f-".to_string();

    let mut form = Form::with_config("", config);
    form.add_fieldset(Control::complex(""))
        .add_control(Control::checkbox("agree"))
        .set_label("Agree");

    assert!(form.get_html().into_string().contains("id=\"f-1\""));
}

#[test]
fn test_number_renders_through_formatter() {
    let mut form = Form::new("");
    form.add_fieldset(Control::fieldset(""))
        .add_control(Control::number("amount"))
        .set_value(3)
        .set_formatter(DecimalFormatter::new(2));

    let html = form.get_html().into_string();
    assert!(html.contains("<input type=\"number\" name=\"amount\" value=\"3.00\"/>"), "{html}");

    // The unformatted value is what submissions are compared with.
    form.load_submitted_values(&post(&[("amount", "3")]));
    assert!(form.changed_controls().is_empty());
    assert_eq!(form.values()["amount"], Value::from("3"));
}

#[test]
fn test_boolean_value_renders_as_text() {
    let mut form = Form::new("");
    form.add_fieldset(Control::fieldset(""))
        .add_control(Control::hidden("flag"))
        .set_value(true);

    let html = form.get_html().into_string();
    assert!(html.contains("<input type=\"hidden\" name=\"flag\" value=\"1\"/>"), "{html}");
}
