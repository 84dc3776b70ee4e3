// File: src/html.rs
// Purpose: Attribute lists and markup generation for form controls

use crate::value::Value;
use maud::{Markup, PreEscaped, Render};

/// Value of an HTML attribute
#[derive(Debug, Clone, PartialEq)]
pub enum AttrValue {
    Text(String),
    /// Boolean attribute such as `checked` or `disabled`.
    Flag(bool),
}

impl From<&str> for AttrValue {
    fn from(s: &str) -> Self {
        AttrValue::Text(s.to_string())
    }
}

impl From<String> for AttrValue {
    fn from(s: String) -> Self {
        AttrValue::Text(s)
    }
}

impl From<bool> for AttrValue {
    fn from(b: bool) -> Self {
        AttrValue::Flag(b)
    }
}

impl From<&Value> for AttrValue {
    fn from(value: &Value) -> Self {
        match value {
            Value::Null => AttrValue::Flag(false),
            Value::Bool(b) => AttrValue::Flag(*b),
            other => AttrValue::Text(other.as_text().into_owned()),
        }
    }
}

/// Insertion ordered list of HTML attributes.
///
/// Setting an attribute that is already present replaces its value but keeps its
/// position, so the rendered order is the order in which attributes were first set.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Attributes {
    entries: Vec<(String, AttrValue)>,
}

impl Attributes {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set(&mut self, name: &str, value: impl Into<AttrValue>) -> &mut Self {
        let value = value.into();
        match self.entries.iter_mut().find(|(key, _)| key == name) {
            Some(entry) => entry.1 = value,
            None => self.entries.push((name.to_string(), value)),
        }
        self
    }

    pub fn get(&self, name: &str) -> Option<&AttrValue> {
        self.entries
            .iter()
            .find(|(key, _)| key == name)
            .map(|(_, value)| value)
    }

    /// The text of an attribute, if it is present and not a flag.
    pub fn text(&self, name: &str) -> Option<&str> {
        match self.get(name) {
            Some(AttrValue::Text(text)) if !text.is_empty() => Some(text),
            _ => None,
        }
    }

    pub fn contains(&self, name: &str) -> bool {
        self.get(name).is_some()
    }

    pub fn remove(&mut self, name: &str) -> Option<AttrValue> {
        let index = self.entries.iter().position(|(key, _)| key == name)?;
        Some(self.entries.remove(index).1)
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &AttrValue)> {
        self.entries.iter().map(|(key, value)| (key.as_str(), value))
    }

    /// Appends the attributes to `buffer`, each preceded by a space.
    pub fn render_to(&self, buffer: &mut String) {
        for (name, value) in &self.entries {
            match value {
                AttrValue::Flag(false) => {}
                AttrValue::Text(text) if text.is_empty() => {}
                AttrValue::Flag(true) => {
                    buffer.push(' ');
                    buffer.push_str(name);
                    buffer.push_str("=\"");
                    name.as_str().render_to(buffer);
                    buffer.push('"');
                }
                AttrValue::Text(text) => {
                    buffer.push(' ');
                    buffer.push_str(name);
                    buffer.push_str("=\"");
                    text.as_str().render_to(buffer);
                    buffer.push('"');
                }
            }
        }
    }
}

impl<K: AsRef<str>, V: Into<AttrValue>> FromIterator<(K, V)> for Attributes {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut attributes = Attributes::new();
        for (name, value) in iter {
            attributes.set(name.as_ref(), value);
        }
        attributes
    }
}

/// HTML-escapes text.
pub fn escape(text: &str) -> String {
    let mut buffer = String::with_capacity(text.len());
    text.render_to(&mut buffer);
    buffer
}

/// `<tag attributes>`
pub fn tag(name: &str, attributes: &Attributes) -> String {
    let mut html = format!("<{}", name);
    attributes.render_to(&mut html);
    html.push('>');
    html
}

/// `<tag attributes/>`
pub fn void_element(name: &str, attributes: &Attributes) -> String {
    let mut html = format!("<{}", name);
    attributes.render_to(&mut html);
    html.push_str("/>");
    html
}

/// `<tag attributes>inner</tag>`; `inner` is escaped unless `is_html`.
pub fn element(name: &str, attributes: &Attributes, inner: &str, is_html: bool) -> String {
    let mut html = tag(name, attributes);
    if is_html {
        html.push_str(inner);
    } else {
        inner.render_to(&mut html);
    }
    html.push_str("</");
    html.push_str(name);
    html.push('>');
    html
}

/// Wraps already generated markup.
pub fn markup(html: String) -> Markup {
    PreEscaped(html)
}

/// Generates ids for elements that need one (e.g. inputs with a label) but were
/// not given one. Lives for one rendering pass.
#[derive(Debug, Clone)]
pub struct IdGenerator {
    prefix: String,
    next: u32,
}

impl IdGenerator {
    pub fn new(prefix: impl Into<String>) -> Self {
        Self {
            prefix: prefix.into(),
            next: 1,
        }
    }

    pub fn next_id(&mut self) -> String {
        let id = format!("{}{}", self.prefix, self.next);
        self.next += 1;
        id
    }
}

impl Default for IdGenerator {
    fn default() -> Self {
        Self::new("abc-id-")
    }
}
