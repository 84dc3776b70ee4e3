// File: src/control/checkbox.rs
// Purpose: Loading of a single checkbox

use crate::value::Value;
use crate::walker::LoadWalker;

/// A checkbox is checked when its submitted value is non-empty. A change is a
/// change of checked state; the whitelisted value is always a boolean.
pub(super) fn load(walker: &mut LoadWalker<'_>, name: &str, checked: &mut bool, immutable: bool) {
    if !immutable {
        let new_checked = walker.submitted_value(name).is_some_and(Value::to_bool);
        if *checked != new_checked {
            walker.set_changed(name);
            *checked = new_checked;
        }
    }

    walker.set_white_list_value(name, Value::Bool(*checked));
}
