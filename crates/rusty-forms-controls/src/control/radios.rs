// File: src/control/radios.rs
// Purpose: A group of radio buttons with one value

use super::options::OptionGroup;
use crate::html::{self, Attributes, IdGenerator};
use crate::value::Value;
use crate::walker::LoadWalker;

#[derive(Debug, Clone)]
pub struct RadiosState {
    pub group: OptionGroup,
    /// Key of the selected option, `Null` if none.
    pub value: Value,
}

impl RadiosState {
    pub fn new(group: OptionGroup) -> Self {
        Self {
            group,
            value: Value::Null,
        }
    }

    /// The key of the option rendered under `code`. Only the exact rendered
    /// code selects an option, obfuscated or not.
    fn key_for(&self, code: &str) -> Option<&Value> {
        self.group
            .options()
            .iter()
            .find(|option| self.group.code(&option.key) == code)
            .map(|option| &option.key)
    }
}

/// Only a key of one of the options (or `Null`) is ever whitelisted.
pub(super) fn load(walker: &mut LoadWalker<'_>, name: &str, state: &mut RadiosState, immutable: bool) {
    if immutable {
        walker.set_white_list_value(name, state.value.clone());
        return;
    }

    let old_text = state.value.as_text().into_owned();
    let code = walker
        .submitted_value(name)
        .filter(|submitted| submitted.is_scalar())
        .map(|submitted| submitted.as_text())
        .filter(|code| !code.is_empty());
    let key = code.as_deref().and_then(|code| state.key_for(code).cloned());

    if key.is_none() {
        if let Some(code) = &code {
            tracing::debug!(control = name, %code, "submitted code matches no option");
        }
    }

    match key {
        Some(key) => {
            if old_text != key.as_text() {
                walker.set_changed(name);
            }
            walker.set_white_list_value(name, key.clone());
            state.value = key;
        }
        None => {
            if !old_text.is_empty() {
                walker.set_changed(name);
            }
            walker.set_white_list_value(name, Value::Null);
            state.value = Value::Null;
        }
    }
}

/// `<span attributes>` with one radio button and label per option.
pub(super) fn render(
    html: &mut String,
    attributes: &Attributes,
    submit_name: &str,
    state: &RadiosState,
    ids: &mut IdGenerator,
) {
    let group = &state.group;
    let selected = state.value.as_text();

    html.push_str(&html::tag("span", attributes));

    for option in group.options() {
        let mut input = option.input_attributes.clone();
        input.set("type", "radio").set("name", submit_name);
        let id = match input.text("id").map(str::to_string) {
            Some(id) => id,
            None => {
                let id = ids.next_id();
                input.set("id", id.as_str());
                id
            }
        };
        input
            .set("value", group.code(&option.key))
            .set("checked", !state.value.is_null() && option.key.as_text() == selected);
        html.push_str(&html::void_element("input", &input));

        let mut label = option.label_attributes.clone();
        label.set("for", id);
        html.push_str(group.label_prefix());
        html.push_str(&html::element("label", &label, &option.label, group.label_is_html()));
        html.push_str(group.label_postfix());
    }

    html.push_str("</span>");
}
