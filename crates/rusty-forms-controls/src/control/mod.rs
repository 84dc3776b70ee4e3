// File: src/control/mod.rs
// Purpose: The form control type shared by every kind of control

use crate::cleaner::{Cleaner, DateCleaner, PruneWhitespaceCleaner};
use crate::error::FormResult;
use crate::formatter::Formatter;
use crate::html::{self, AttrValue, Attributes, IdGenerator};
use crate::validator::{DateValidator, EmailValidator, HttpValidator, IntegerValidator, Validator};
use crate::value::{Map, Value};
use crate::walker::LoadWalker;
use maud::Markup;
use std::collections::BTreeMap;

mod checkbox;
mod checkboxes;
mod container;
mod input;
mod options;
mod radios;
mod snippet;
mod submit;

pub use container::{Container, ContainerElement};
pub use input::{InputState, InputType};
pub use options::{ControlOption, OptionFields, OptionGroup};
pub use radios::RadiosState;
pub use snippet::ElementState;
pub use submit::SubmitState;

pub(crate) use input::reconcile_scalar;

/// Where the label of a control is rendered relative to the control.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LabelPosition {
    #[default]
    Pre,
    Post,
}

/// A `<label>` attached to an input or checkbox control.
#[derive(Debug, Clone)]
pub struct Label {
    pub text: String,
    pub is_html: bool,
    pub position: LabelPosition,
    pub attributes: Attributes,
}

/// What a control is, with the state specific to that kind.
#[derive(Debug)]
pub enum ControlKind {
    Input(InputState),
    Checkbox { checked: bool },
    Checkboxes(OptionGroup),
    Radios(RadiosState),
    /// Arbitrary HTML written into the form.
    Html(Option<String>),
    Element(ElementState),
    Submit(SubmitState),
    Container(Container),
}

/// A form control.
///
/// Controls are built once per request, reconciled once with the submitted data,
/// validated, and rendered.
#[derive(Debug)]
pub struct Control {
    name: String,
    submit_name: String,
    attributes: Attributes,
    prefix: String,
    postfix: String,
    label: Option<Label>,
    validators: Vec<Box<dyn Validator>>,
    cleaner: Option<Box<dyn Cleaner>>,
    immutable: bool,
    error_messages: Vec<String>,
    kind: ControlKind,
}

/// The name under which a control is submitted: `parent[name]`.
pub(crate) fn submit_name(parent: &str, name: &str) -> String {
    match (parent.is_empty(), name.is_empty()) {
        (true, _) => name.to_string(),
        (false, true) => parent.to_string(),
        (false, false) => format!("{}[{}]", parent, name),
    }
}

impl Control {
    pub fn new(name: &str, kind: ControlKind) -> Self {
        Self {
            name: name.to_string(),
            submit_name: name.to_string(),
            attributes: Attributes::new(),
            prefix: String::new(),
            postfix: String::new(),
            label: None,
            validators: Vec::new(),
            cleaner: None,
            immutable: false,
            error_messages: Vec::new(),
            kind,
        }
    }

    fn input(name: &str, input_type: InputType) -> Self {
        let mut control = Self::new(name, ControlKind::Input(InputState::new(input_type)));
        control.cleaner = Some(Box::new(PruneWhitespaceCleaner));
        control
    }

    /// `<input type="text">`, whitespace is pruned.
    pub fn text(name: &str) -> Self {
        Self::input(name, InputType::Text)
    }

    pub fn tel(name: &str) -> Self {
        Self::input(name, InputType::Tel)
    }

    pub fn password(name: &str) -> Self {
        Self::input(name, InputType::Password)
    }

    pub fn email(name: &str) -> Self {
        let mut control = Self::input(name, InputType::Email);
        control.add_validator(EmailValidator);
        control
    }

    pub fn url(name: &str) -> Self {
        let mut control = Self::input(name, InputType::Url);
        control.add_validator(HttpValidator);
        control
    }

    /// `<input type="number">` accepting integers.
    pub fn number(name: &str) -> Self {
        let mut control = Self::input(name, InputType::Number);
        control.add_validator(IntegerValidator::new());
        control
    }

    pub fn date(name: &str) -> Self {
        let mut control = Self::input(name, InputType::Date);
        control.cleaner = Some(Box::new(DateCleaner));
        control.add_validator(DateValidator);
        control
    }

    pub fn hidden(name: &str) -> Self {
        Self::input(name, InputType::Hidden)
    }

    /// A hidden input whose value is whitelisted but never reported as changed.
    pub fn silent(name: &str) -> Self {
        Self::input(name, InputType::Silent)
    }

    pub fn checkbox(name: &str) -> Self {
        Self::new(name, ControlKind::Checkbox { checked: false })
    }

    pub fn checkboxes(name: &str, group: OptionGroup) -> Self {
        let mut control = Self::new(name, ControlKind::Checkboxes(group));
        control.attributes.set("class", "checkboxes");
        control
    }

    pub fn radios(name: &str, group: OptionGroup) -> Self {
        let mut control = Self::new(name, ControlKind::Radios(RadiosState::new(group)));
        control.attributes.set("class", "radios");
        control
    }

    /// A pseudo control generating arbitrary HTML inside a form.
    pub fn html(name: &str) -> Self {
        Self::new(name, ControlKind::Html(None))
    }

    pub fn div(name: &str) -> Self {
        Self::new(name, ControlKind::Element(ElementState::new("div")))
    }

    pub fn span(name: &str) -> Self {
        Self::new(name, ControlKind::Element(ElementState::new("span")))
    }

    /// `<a>`; set the `href` attribute with [`Control::set_attribute`].
    pub fn link(name: &str) -> Self {
        Self::new(name, ControlKind::Element(ElementState::new("a")))
    }

    pub fn submit(name: &str) -> Self {
        Self::new(name, ControlKind::Submit(SubmitState::new(false)))
    }

    /// A submit control that, when `force` is set, submits the form whether or
    /// not it was pressed.
    pub fn force_submit(name: &str, force: bool) -> Self {
        Self::new(name, ControlKind::Submit(SubmitState::new(force)))
    }

    pub fn fieldset(name: &str) -> Self {
        Self::new(name, ControlKind::Container(Container::new(ContainerElement::FieldSet)))
    }

    /// A named group of controls without markup of its own.
    pub fn complex(name: &str) -> Self {
        Self::new(name, ControlKind::Container(Container::new(ContainerElement::None)))
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn submit_name(&self) -> &str {
        &self.submit_name
    }

    pub fn kind(&self) -> &ControlKind {
        &self.kind
    }

    pub fn attributes(&self) -> &Attributes {
        &self.attributes
    }

    pub fn error_messages(&self) -> &[String] {
        &self.error_messages
    }

    pub fn is_immutable(&self) -> bool {
        self.immutable
    }

    pub fn is_hidden(&self) -> bool {
        matches!(
            &self.kind,
            ControlKind::Input(state) if matches!(state.input_type, InputType::Hidden | InputType::Silent)
        )
    }

    /// The child controls of a fieldset or complex control.
    pub fn children(&self) -> &[Control] {
        match &self.kind {
            ControlKind::Container(container) => &container.controls,
            _ => &[],
        }
    }

    /// Adds a child to a fieldset or complex control.
    ///
    /// # Panics
    ///
    /// Panics if this control is not a fieldset or complex control.
    pub fn add_control(&mut self, control: Control) -> &mut Control {
        match &mut self.kind {
            ControlKind::Container(container) => container.push(control),
            _ => panic!("control '{}' cannot hold child controls", self.name),
        }
    }

    pub fn set_attribute(&mut self, name: &str, value: impl Into<AttrValue>) -> &mut Self {
        self.attributes.set(name, value);
        self
    }

    /// Sets HTML inserted before the control.
    pub fn set_prefix(&mut self, html_snippet: &str) -> &mut Self {
        self.prefix = html_snippet.to_string();
        self
    }

    /// Sets HTML appended after the control.
    pub fn set_postfix(&mut self, html_snippet: &str) -> &mut Self {
        self.postfix = html_snippet.to_string();
        self
    }

    /// Sets a text label. Special characters are escaped.
    pub fn set_label(&mut self, text: &str) -> &mut Self {
        self.set_label_inner(text, false)
    }

    /// Sets a label that is HTML code.
    pub fn set_label_html(&mut self, html_snippet: &str) -> &mut Self {
        self.set_label_inner(html_snippet, true)
    }

    fn set_label_inner(&mut self, text: &str, is_html: bool) -> &mut Self {
        let label = self.label.get_or_insert_with(|| Label {
            text: String::new(),
            is_html,
            position: LabelPosition::default(),
            attributes: Attributes::new(),
        });
        label.text = text.to_string();
        label.is_html = is_html;
        self
    }

    pub fn set_label_position(&mut self, position: LabelPosition) -> &mut Self {
        if let Some(label) = &mut self.label {
            label.position = position;
        }
        self
    }

    pub fn set_label_attribute(&mut self, name: &str, value: impl Into<AttrValue>) -> &mut Self {
        if let Some(label) = &mut self.label {
            label.attributes.set(name, value);
        }
        self
    }

    pub fn add_validator(&mut self, validator: impl Validator + 'static) -> &mut Self {
        self.validators.push(Box::new(validator));
        self
    }

    /// Replaces the cleaner; `None` disables cleaning.
    pub fn set_cleaner(&mut self, cleaner: Option<Box<dyn Cleaner>>) -> &mut Self {
        self.cleaner = cleaner;
        self
    }

    /// An immutable control ignores submitted data and keeps its current value.
    pub fn set_immutable(&mut self, immutable: bool) -> &mut Self {
        self.immutable = immutable;
        self
    }

    pub fn set_mutable(&mut self, mutable: bool) -> &mut Self {
        self.immutable = !mutable;
        self
    }

    pub fn set_error_message(&mut self, message: impl Into<String>) -> &mut Self {
        self.error_messages.push(message.into());
        self
    }

    /// Sets the value of this control.
    ///
    /// Inputs and radios take the value as is, a checkbox is checked by any
    /// non-empty value, checkboxes take a map from option key to checked flag,
    /// HTML and element controls take the HTML code, submit controls the caption,
    /// and containers a map of values for their children.
    pub fn set_value(&mut self, value: impl Into<Value>) -> &mut Self {
        let value = value.into();
        match &mut self.kind {
            ControlKind::Input(state) => state.value = value,
            ControlKind::Checkbox { checked } => *checked = value.to_bool(),
            ControlKind::Checkboxes(group) => {
                if let Value::Map(values) = &value {
                    group.set_checked(Some(values));
                }
            }
            ControlKind::Radios(state) => state.value = value,
            ControlKind::Html(html) => {
                *html = (!value.is_null()).then(|| value.as_text().into_owned())
            }
            ControlKind::Element(state) => state.inner = value.as_text().into_owned(),
            ControlKind::Submit(state) => state.caption = value,
            ControlKind::Container(container) => {
                if let Value::Map(values) = &value {
                    container.set_values(values);
                }
            }
        }
        self
    }

    /// Sets the inner HTML of an HTML or element control. It is the caller's
    /// responsibility that the snippet is valid HTML.
    pub fn set_html(&mut self, html_snippet: &str) -> &mut Self {
        match &mut self.kind {
            ControlKind::Html(html) => *html = Some(html_snippet.to_string()),
            ControlKind::Element(state) => state.inner = html_snippet.to_string(),
            _ => tracing::warn!(control = %self.name, "set_html ignored: not an HTML or element control"),
        }
        self
    }

    /// Sets the inner text of an HTML or element control. Special characters
    /// are escaped.
    pub fn set_text(&mut self, text: &str) -> &mut Self {
        self.set_html(&html::escape(text))
    }

    /// Sets the legend of a fieldset.
    pub fn set_legend(&mut self, text: &str) -> &mut Self {
        match &mut self.kind {
            ControlKind::Container(container) => container.legend = Some(text.to_string()),
            _ => tracing::warn!(control = %self.name, "set_legend ignored: not a fieldset"),
        }
        self
    }

    /// Formats the value of an input control when it is rendered.
    pub fn set_formatter(&mut self, formatter: impl Formatter + 'static) -> &mut Self {
        match &mut self.kind {
            ControlKind::Input(state) => state.formatter = Some(Box::new(formatter)),
            _ => tracing::warn!(control = %self.name, "set_formatter ignored: not an input control"),
        }
        self
    }

    /// Sets the handler reported when this submit control submits the form.
    pub fn set_method(&mut self, handler: &str) -> &mut Self {
        match &mut self.kind {
            ControlKind::Submit(state) => state.method = Some(handler.to_string()),
            _ => tracing::warn!(control = %self.name, "set_method ignored: not a submit control"),
        }
        self
    }

    /// The current value of this control as seen by validators.
    pub fn submitted_value(&self) -> Value {
        match &self.kind {
            ControlKind::Input(state) => state.value.clone(),
            ControlKind::Checkbox { checked } => Value::Bool(*checked),
            ControlKind::Checkboxes(group) => Value::Map(group.checked_map()),
            ControlKind::Radios(state) => state.value.clone(),
            ControlKind::Html(html) => Value::from(html.clone()),
            ControlKind::Element(_) => Value::Null,
            ControlKind::Submit(state) => state.caption.clone(),
            ControlKind::Container(container) => {
                let mut values = Map::new();
                container.collect_values(&mut values);
                Value::Map(values)
            }
        }
    }

    /// Sets the submit names of this control and its children.
    pub fn prepare(&mut self, parent_submit_name: &str) {
        let name = submit_name(parent_submit_name, &self.name);
        if let ControlKind::Container(container) = &mut self.kind {
            for child in &mut container.controls {
                child.prepare(&name);
            }
        }
        self.submit_name = name;
    }

    /// Reads this control's slice of the submitted data, records whether it
    /// changed, and writes the whitelisted value.
    pub fn load_submitted_values(&mut self, walker: &mut LoadWalker<'_>) {
        let Control {
            name,
            cleaner,
            immutable,
            kind,
            ..
        } = self;
        let immutable = *immutable;

        match kind {
            ControlKind::Input(state) => {
                let report_change = state.input_type != InputType::Silent;
                reconcile_scalar(walker, name, &mut state.value, cleaner.as_deref(), immutable, report_change);
            }
            ControlKind::Checkbox { checked } => checkbox::load(walker, name, checked, immutable),
            ControlKind::Checkboxes(group) => checkboxes::load(walker, name, group, immutable),
            ControlKind::Radios(state) => radios::load(walker, name, state, immutable),
            ControlKind::Html(html) => {
                walker.set_white_list_value(name, Value::from(html.clone()));
            }
            ControlKind::Element(_) => {}
            ControlKind::Submit(state) => submit::load(walker, name, state),
            ControlKind::Container(container) => {
                walker.within(name, name, |walker| {
                    for child in &mut container.controls {
                        child.load_submitted_values(walker);
                    }
                });
            }
        }
    }

    /// Runs the validators of this control and of its children.
    ///
    /// Validators of one control run in order and stop at the first failure.
    /// Invalid controls are recorded in `invalid` under their submit name with
    /// their error messages. Returns `Ok(false)` if any control is invalid.
    pub fn validate(&mut self, invalid: &mut BTreeMap<String, Vec<String>>) -> FormResult<bool> {
        let mut valid = true;

        if let ControlKind::Container(container) = &mut self.kind {
            for child in &mut container.controls {
                if !child.validate(invalid)? {
                    valid = false;
                }
            }
        }

        self.error_messages.clear();
        let validators = std::mem::take(&mut self.validators);
        let mut outcome = Ok(true);
        for validator in &validators {
            outcome = validator.validate(self);
            if !matches!(outcome, Ok(true)) {
                break;
            }
        }
        self.validators = validators;

        if !outcome? {
            tracing::debug!(control = %self.submit_name, errors = ?self.error_messages, "control is invalid");
            invalid.insert(self.submit_name.clone(), self.error_messages.clone());
            valid = false;
        }

        Ok(valid)
    }

    /// Sets the values of this control from `values`; absent entries reset the
    /// control to empty.
    pub fn set_values(&mut self, values: &Map) {
        match &mut self.kind {
            ControlKind::Input(state) => {
                state.value = values.get(&self.name).cloned().unwrap_or_default()
            }
            ControlKind::Checkbox { checked } => {
                *checked = values.get(&self.name).is_some_and(Value::to_bool)
            }
            ControlKind::Checkboxes(group) => {
                let scoped = if self.name.is_empty() {
                    Some(values)
                } else {
                    values.get(&self.name).and_then(Value::as_map)
                };
                group.set_checked(scoped);
            }
            ControlKind::Radios(state) => {
                state.value = values.get(&self.name).cloned().unwrap_or_default()
            }
            ControlKind::Html(html) => {
                *html = values
                    .get(&self.name)
                    .filter(|value| !value.is_null())
                    .map(|value| value.as_text().into_owned())
            }
            ControlKind::Element(_) | ControlKind::Submit(_) => {}
            ControlKind::Container(container) => {
                let empty = Map::new();
                let scoped = if self.name.is_empty() {
                    values
                } else {
                    values.get(&self.name).and_then(Value::as_map).unwrap_or(&empty)
                };
                container.set_values(scoped);
            }
        }
    }

    /// Like [`Control::set_values`] but only touches controls (and options)
    /// present in `values`.
    pub fn merge_values(&mut self, values: &Map) {
        let scoped = if self.name.is_empty() {
            Some(values)
        } else {
            values.get(&self.name).and_then(Value::as_map)
        };

        match &mut self.kind {
            ControlKind::Checkboxes(group) => {
                if let Some(scoped) = scoped {
                    group.merge_checked(scoped);
                }
                return;
            }
            ControlKind::Container(container) => {
                if let Some(scoped) = scoped {
                    container.merge_values(scoped);
                }
                return;
            }
            _ => {}
        }

        if values.contains_key(&self.name) {
            self.set_values(values);
        }
    }

    /// Adds the current values of this control (and its children) to `values`.
    pub fn collect_values(&self, values: &mut Map) {
        match &self.kind {
            ControlKind::Input(state) => {
                values.insert(self.name.clone(), state.value.clone());
            }
            ControlKind::Checkbox { checked } => {
                values.insert(self.name.clone(), Value::Bool(*checked));
            }
            ControlKind::Checkboxes(group) => {
                if self.name.is_empty() {
                    values.extend(group.checked_map());
                } else {
                    values.insert(self.name.clone(), Value::Map(group.checked_map()));
                }
            }
            ControlKind::Radios(state) => {
                values.insert(self.name.clone(), state.value.clone());
            }
            ControlKind::Html(html) => {
                values.insert(self.name.clone(), Value::from(html.clone()));
            }
            ControlKind::Element(_) | ControlKind::Submit(_) => {}
            ControlKind::Container(container) => {
                if self.name.is_empty() {
                    container.collect_values(values);
                } else {
                    let mut inner = Map::new();
                    container.collect_values(&mut inner);
                    values.insert(self.name.clone(), Value::Map(inner));
                }
            }
        }
    }

    /// Renders this control: prefix, markup of the control, postfix.
    pub fn get_html(&self, ids: &mut IdGenerator) -> Markup {
        let mut html = self.prefix.clone();

        match &self.kind {
            ControlKind::Input(state) => {
                let mut attributes = self.attributes.clone();
                attributes
                    .set("type", state.input_type.html_type())
                    .set("name", self.submit_name.as_str())
                    .set("value", AttrValue::Text(state.rendered_value()));
                self.push_labelled(&mut html, attributes, ids);
            }
            ControlKind::Checkbox { checked } => {
                let mut attributes = self.attributes.clone();
                attributes
                    .set("type", "checkbox")
                    .set("name", self.submit_name.as_str())
                    .set("checked", *checked);
                self.push_labelled(&mut html, attributes, ids);
            }
            ControlKind::Checkboxes(group) => {
                checkboxes::render(&mut html, &self.attributes, &self.submit_name, group, ids)
            }
            ControlKind::Radios(state) => {
                radios::render(&mut html, &self.attributes, &self.submit_name, state, ids)
            }
            ControlKind::Html(inner) => html.push_str(inner.as_deref().unwrap_or_default()),
            ControlKind::Element(state) => {
                html.push_str(&html::element(state.tag, &self.attributes, &state.inner, true))
            }
            ControlKind::Submit(state) => {
                let mut attributes = self.attributes.clone();
                attributes
                    .set("type", "submit")
                    .set("name", self.submit_name.as_str())
                    .set("value", AttrValue::Text(state.caption.as_text().into_owned()));
                html.push_str(&html::void_element("input", &attributes));
            }
            ControlKind::Container(container) => {
                container.render(&mut html, &self.attributes, ids)
            }
        }

        html.push_str(&self.postfix);
        html::markup(html)
    }

    /// Appends `<input>` with its label (if any) on the configured side.
    fn push_labelled(&self, html: &mut String, mut attributes: Attributes, ids: &mut IdGenerator) {
        let Some(label) = &self.label else {
            html.push_str(&html::void_element("input", &attributes));
            return;
        };

        let id = match attributes.text("id").map(str::to_string) {
            Some(id) => id,
            None => {
                let id = ids.next_id();
                attributes.set("id", id.as_str());
                id
            }
        };

        let mut label_attributes = label.attributes.clone();
        label_attributes.set("for", id);
        let label_html = html::element("label", &label_attributes, &label.text, label.is_html);
        let input_html = html::void_element("input", &attributes);

        match label.position {
            LabelPosition::Pre => {
                html.push_str(&label_html);
                html.push_str(&input_html);
            }
            LabelPosition::Post => {
                html.push_str(&input_html);
                html.push_str(&label_html);
            }
        }
    }
}

/// Finds a control by the names on the path from `controls` down. Controls
/// without a name are looked through.
pub(crate) fn find_in<'c>(controls: &'c [Control], path: &[&str]) -> Option<&'c Control> {
    let (first, rest) = path.split_first()?;

    for control in controls {
        if control.name == *first {
            return if rest.is_empty() {
                Some(control)
            } else {
                find_in(control.children(), rest)
            };
        }
        if control.name.is_empty() {
            if let Some(found) = find_in(control.children(), path) {
                return Some(found);
            }
        }
    }

    None
}

/// Index path of the control [`find_in`] would return.
fn locate(controls: &[Control], path: &[&str], indices: &mut Vec<usize>) -> bool {
    let Some((first, rest)) = path.split_first() else {
        return false;
    };

    for (index, control) in controls.iter().enumerate() {
        if control.name == *first {
            indices.push(index);
            return rest.is_empty() || locate(control.children(), rest, indices);
        }
        if control.name.is_empty() {
            indices.push(index);
            if locate(control.children(), path, indices) {
                return true;
            }
            indices.pop();
        }
    }

    false
}

pub(crate) fn find_in_mut<'c>(controls: &'c mut [Control], path: &[&str]) -> Option<&'c mut Control> {
    let mut indices = Vec::new();
    if !locate(controls, path, &mut indices) {
        return None;
    }

    let (first, rest) = indices.split_first()?;
    let mut control = controls.get_mut(*first)?;
    for index in rest {
        control = match &mut control.kind {
            ControlKind::Container(container) => container.controls.get_mut(*index)?,
            _ => return None,
        };
    }

    Some(control)
}
