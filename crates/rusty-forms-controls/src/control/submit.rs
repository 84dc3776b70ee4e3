// File: src/control/submit.rs
// Purpose: Submit buttons and the handler they select

use crate::value::Value;
use crate::walker::LoadWalker;

#[derive(Debug, Clone)]
pub struct SubmitState {
    /// Value of the button, submitted when it is pressed.
    pub caption: Value,
    /// Name of the handler to run when this button submitted the form.
    pub method: Option<String>,
    /// Submit the form whether or not the button was pressed.
    pub force: bool,
}

impl SubmitState {
    pub fn new(force: bool) -> Self {
        Self {
            caption: Value::Null,
            method: None,
            force,
        }
    }

    fn pressed(&self, submitted: Option<&Value>) -> bool {
        let caption = self.caption.as_text();
        !caption.is_empty()
            && submitted
                .filter(|value| value.is_scalar())
                .is_some_and(|value| value.as_text() == caption)
    }
}

pub(super) fn load(walker: &mut LoadWalker<'_>, name: &str, state: &SubmitState) {
    if state.force || state.pressed(walker.submitted_value(name)) {
        tracing::debug!(control = name, handler = ?state.method, forced = state.force, "form submitted");
        walker.set_submit_handler(state.method.clone());
        walker.set_white_list_value(name, state.caption.clone());
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::value::Map;

    #[test]
    fn test_pressed_requires_matching_caption() {
        let mut state = SubmitState::new(false);
        state.caption = Value::from("Save");

        assert!(state.pressed(Some(&Value::from("Save"))));
        assert!(!state.pressed(Some(&Value::from("Delete"))));
        assert!(!state.pressed(None));
    }

    #[test]
    fn test_not_pressed_does_not_submit() {
        let data = Value::Map(Map::new());
        let mut state = SubmitState::new(false);
        state.caption = Value::from("Save");
        state.method = Some("handle_save".to_string());

        let mut walker = LoadWalker::new(&data);
        load(&mut walker, "save", &state);
        let result = walker.finish();

        assert!(!result.submitted);
        assert_eq!(result.submit_handler, None);
        assert!(result.values.is_empty());
    }
}
