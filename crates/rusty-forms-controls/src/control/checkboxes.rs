// File: src/control/checkboxes.rs
// Purpose: A group of checkboxes submitted as one map

use super::options::OptionGroup;
use crate::html::{self, Attributes, IdGenerator};
use crate::value::Value;
use crate::walker::LoadWalker;

/// Each option is submitted under its code inside the group's level and
/// whitelisted under its key text as a boolean.
pub(super) fn load(walker: &mut LoadWalker<'_>, name: &str, group: &mut OptionGroup, immutable: bool) {
    let codes: Vec<String> = group.options().iter().map(|option| group.code(&option.key)).collect();

    walker.within(name, name, |walker| {
        for (option, code) in group.options_mut().iter_mut().zip(&codes) {
            let key = option.key_text();

            if !immutable {
                let checked = walker.submitted_value(code).is_some_and(Value::to_bool);
                if option.checked != checked {
                    walker.set_changed(&key);
                    option.checked = checked;
                }
            }

            walker.set_white_list_value(&key, Value::Bool(option.checked));
        }
    });
}

/// `<span attributes>` with one checkbox and label per option.
pub(super) fn render(
    html: &mut String,
    attributes: &Attributes,
    submit_name: &str,
    group: &OptionGroup,
    ids: &mut IdGenerator,
) {
    html.push_str(&html::tag("span", attributes));

    for option in group.options() {
        let code = group.code(&option.key);
        let name = super::submit_name(submit_name, &code);

        let mut input = option.input_attributes.clone();
        input.set("type", "checkbox");
        let id = match input.text("id").map(str::to_string) {
            Some(id) => id,
            None => {
                let id = ids.next_id();
                input.set("id", id.as_str());
                id
            }
        };
        input.set("name", name).set("checked", option.checked);
        html.push_str(&html::void_element("input", &input));

        let mut label = option.label_attributes.clone();
        label.set("for", id);
        html.push_str(group.label_prefix());
        html.push_str(&html::element("label", &label, &option.label, group.label_is_html()));
        html.push_str(group.label_postfix());
    }

    html.push_str("</span>");
}
