// File: src/walker.rs
// Purpose: Correlates the nested submitted data with the nested form structure

use crate::value::{Map, Value};

/// One level of the form tree while loading submitted values.
#[derive(Debug)]
struct Frame<'a> {
    name: String,
    submitted: Option<&'a Map>,
    white_list: Map,
    changed: Map,
}

impl<'a> Frame<'a> {
    fn new(name: &str, submitted: Option<&'a Map>) -> Self {
        Self {
            name: name.to_string(),
            submitted,
            white_list: Map::new(),
            changed: Map::new(),
        }
    }
}

/// Everything collected by a [`LoadWalker`].
#[derive(Debug, Clone, Default, PartialEq)]
pub struct LoadResult {
    /// The whitelisted values, mirroring the nesting of named containers.
    pub values: Map,
    /// The changed controls; leaves are `true`, named containers are nested maps.
    pub changed: Map,
    /// The handler of the submit control that submitted the form, if any.
    pub submit_handler: Option<String>,
    /// True if a submit control recognised the submission.
    pub submitted: bool,
}

/// Walks the submitted data while controls load their submitted values.
///
/// The submitted data is only read. Every level has its own whitelist map and set
/// of changed names which are attached to the parent level under the level's name
/// on the way back up. A control with an empty name does not open a level; it
/// reads and writes the level of its parent.
#[derive(Debug)]
pub struct LoadWalker<'a> {
    frames: Vec<Frame<'a>>,
    submit_handler: Option<String>,
    submitted: bool,
}

impl<'a> LoadWalker<'a> {
    /// Starts a walk at the root of `submitted`. Anything that is not a map is
    /// treated as an empty submission.
    pub fn new(submitted: &'a Value) -> Self {
        Self {
            frames: vec![Frame::new("", submitted.as_map())],
            submit_handler: None,
            submitted: false,
        }
    }

    fn current(&self) -> &Frame<'a> {
        // The root frame is never popped.
        &self.frames[self.frames.len() - 1]
    }

    fn current_mut(&mut self) -> &mut Frame<'a> {
        let last = self.frames.len() - 1;
        &mut self.frames[last]
    }

    /// Runs `f` one level down, under `name` in the whitelisted values and under
    /// `submit_key` in the submitted data.
    pub fn within<R>(&mut self, name: &str, submit_key: &str, f: impl FnOnce(&mut Self) -> R) -> R {
        if name.is_empty() {
            return f(self);
        }

        let submitted = self
            .current()
            .submitted
            .and_then(|values| values.get(submit_key))
            .and_then(Value::as_map);
        self.frames.push(Frame::new(name, submitted));

        let result = f(self);

        if let Some(frame) = self.frames.pop() {
            let parent = self.current_mut();
            if !frame.changed.is_empty() {
                parent.changed.insert(frame.name.clone(), Value::Map(frame.changed));
            }
            parent.white_list.insert(frame.name, Value::Map(frame.white_list));
        }

        result
    }

    /// The submitted value under `key` at the current level.
    pub fn submitted_value(&self, key: &str) -> Option<&'a Value> {
        self.current().submitted.and_then(|values| values.get(key))
    }

    pub fn set_white_list_value(&mut self, name: &str, value: Value) {
        self.current_mut().white_list.insert(name.to_string(), value);
    }

    pub fn white_list_value(&self, name: &str) -> Option<&Value> {
        self.current().white_list.get(name)
    }

    /// Records that the control (or option) `name` at the current level has changed.
    pub fn set_changed(&mut self, name: &str) {
        self.current_mut()
            .changed
            .insert(name.to_string(), Value::Bool(true));
    }

    /// Records that a submit control recognised the submission.
    pub fn set_submit_handler(&mut self, handler: Option<String>) {
        self.submitted = true;
        self.submit_handler = handler;
    }

    pub fn finish(mut self) -> LoadResult {
        // Only the root frame is left; `within` pops what it pushes.
        let root = self.frames.swap_remove(0);
        LoadResult {
            values: root.white_list,
            changed: root.changed,
            submit_handler: self.submit_handler,
            submitted: self.submitted,
        }
    }
}
