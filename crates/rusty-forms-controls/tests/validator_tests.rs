//! Integration tests for validators running inside a form

use pretty_assertions::assert_eq;
use rstest::rstest;
use rusty_forms_controls::*;

/// An unnamed form with one text control `field` using `validator`.
fn form_with_validator(validator: impl Validator + 'static) -> Form {
    let mut form = Form::new("");
    let mut text = Control::text("field");
    text.set_cleaner(None).add_validator(validator);
    form.add_fieldset(Control::fieldset("")).add_control(text);
    form
}

fn validate(form: &mut Form, submitted: Value) -> bool {
    form.load_submitted_values(&submitted);
    form.validate().unwrap()
}

fn field(value: &str) -> Value {
    from_fields([("field", value)])
}

#[rstest]
#[case("hffd//:www.setbased/nl")]
#[case("http//golgelinva")]
#[case("ftp//:!#$%&'*+-/=?^_`{}|~ed.com")]
fn test_invalid_http(#[case] url: &str) {
    let mut form = form_with_validator(HttpValidator);
    assert!(!validate(&mut form, field(url)));
    assert_eq!(
        form.validation_result().get_error("field"),
        Some(format!("'{}' is not a valid URL.", url).as_str())
    );
}

#[rstest]
#[case("http://www.setbased.nl")]
#[case("http://www.google.com")]
#[case("http://www.php.net")]
#[case("")]
fn test_valid_http(#[case] url: &str) {
    let mut form = form_with_validator(HttpValidator);
    assert!(validate(&mut form, field(url)));
    assert!(form.is_valid());
}

#[test]
fn test_http_missing_value_is_valid() {
    let mut form = form_with_validator(HttpValidator);
    assert!(validate(&mut form, Value::Map(Map::new())));
}

#[rstest]
#[case("2024-02-29", true)]
#[case("2024-2-5", true)]
#[case("", true)]
#[case("2023-02-29", false)]
#[case("2024-13-01", false)]
#[case("31-12-2024", false)]
#[case("tomorrow", false)]
fn test_date_validator(#[case] date: &str, #[case] valid: bool) {
    let mut form = form_with_validator(DateValidator);
    assert_eq!(validate(&mut form, field(date)), valid);
}

#[rstest]
#[case("john@example.com", true)]
#[case("", true)]
#[case("john.example.com", false)]
#[case("john@", false)]
fn test_email_validator(#[case] email: &str, #[case] valid: bool) {
    let mut form = form_with_validator(EmailValidator);
    assert_eq!(validate(&mut form, field(email)), valid);
}

#[rstest]
#[case("5", true)]
#[case("-3", false)]
#[case("11", false)]
#[case("five", false)]
#[case("", true)]
fn test_integer_validator(#[case] number: &str, #[case] valid: bool) {
    let mut form = form_with_validator(IntegerValidator::with_range(Some(0), Some(10)));
    assert_eq!(validate(&mut form, field(number)), valid);
}

#[rstest]
#[case("abc", true)]
#[case("ab", false)]
#[case("abcdef", false)]
fn test_length_validator(#[case] text: &str, #[case] valid: bool) {
    let mut form = form_with_validator(LengthValidator::new(Some(3), Some(5)));
    assert_eq!(validate(&mut form, field(text)), valid);
}

#[rstest]
#[case("x", true)]
#[case("0", true)]
#[case("", false)]
fn test_mandatory_validator(#[case] text: &str, #[case] valid: bool) {
    let mut form = form_with_validator(MandatoryValidator);
    assert_eq!(validate(&mut form, field(text)), valid);
    if !valid {
        assert_eq!(
            form.validation_result().get_errors("field"),
            ["This field is mandatory.".to_string()]
        );
    }
}

#[test]
fn test_mandatory_checkboxes_need_one_checked_option() {
    let group = OptionGroup::new(vec![ControlOption::new(1, "one"), ControlOption::new(2, "two")]);
    let mut form = Form::new("");
    form.add_fieldset(Control::fieldset(""))
        .add_control(Control::checkboxes("options", group))
        .add_validator(MandatoryValidator);

    assert!(!validate(&mut form, Value::Map(Map::new())));
    assert!(validate(&mut form, parse_form_body("options[2]=on")));
}

#[test]
fn test_validators_stop_at_first_failure() {
    let mut form = Form::new("");
    form.add_fieldset(Control::fieldset(""))
        .add_control(Control::text("field"))
        .add_validator(MandatoryValidator)
        .add_validator(LengthValidator::new(Some(3), None));

    assert!(!validate(&mut form, field("")));
    assert_eq!(form.validation_result().get_errors("field").len(), 1);
}

#[test]
fn test_errors_are_keyed_by_submit_name() {
    let mut form = Form::new("person");
    form.add_fieldset(Control::fieldset("contact"))
        .add_control(Control::email("email"));

    assert!(!validate(&mut form, parse_form_body("person[contact][email]=nope")));

    let result = form.validation_result();
    assert!(!result.is_valid);
    assert_eq!(
        result.get_error("person[contact][email]"),
        Some("'nope' is not a valid email address.")
    );
}

#[test]
fn test_list_reaching_scalar_validator_is_an_error() {
    let mut form = form_with_validator(DateValidator);
    form.load_submitted_values(&parse_form_body("field[]=2024-01-01"));

    assert!(matches!(form.validate(), Err(FormError::NotScalar { .. })));
}
