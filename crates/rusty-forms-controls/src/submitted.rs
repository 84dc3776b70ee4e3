// File: src/submitted.rs
// Purpose: Builds the nested submitted values tree from request bodies

use crate::value::{Map, Value};
use std::borrow::Cow;

/// Splits `a[b][c]` into `["a", "b", "c"]`. An empty segment (`a[]`) means
/// "append". Names with unbalanced brackets are used as a single plain key.
fn split_name(name: &str) -> Vec<&str> {
    let Some(open) = name.find('[') else {
        return vec![name];
    };

    let mut keys = vec![&name[..open]];
    let mut rest = &name[open..];
    while !rest.is_empty() {
        let Some(inner) = rest.strip_prefix('[') else {
            return vec![name];
        };
        let Some(close) = inner.find(']') else {
            return vec![name];
        };
        keys.push(&inner[..close]);
        rest = &inner[close + 1..];
    }

    keys
}

fn insert(map: &mut Map, keys: &[&str], value: Value) {
    let Some((first, rest)) = keys.split_first() else {
        return;
    };

    if rest.is_empty() {
        map.insert(first.to_string(), value);
        return;
    }

    let entry = map.entry(first.to_string()).or_insert(Value::Null);
    if rest[0].is_empty() {
        if !matches!(entry, Value::List(_)) {
            *entry = Value::List(Vec::new());
        }
        if let Value::List(items) = entry {
            if rest.len() == 1 {
                items.push(value);
            } else {
                let mut child = Map::new();
                insert(&mut child, &rest[1..], value);
                items.push(Value::Map(child));
            }
        }
    } else {
        if !matches!(entry, Value::Map(_)) {
            *entry = Value::Map(Map::new());
        }
        if let Value::Map(child) = entry {
            insert(child, rest, value);
        }
    }
}

fn decode_component(raw: &str) -> Cow<'_, str> {
    let spaced = raw.replace('+', " ");
    match urlencoding::decode(&spaced) {
        Ok(decoded) => Cow::Owned(decoded.into_owned()),
        Err(error) => {
            tracing::warn!(%error, "submitted data is not valid UTF-8 after decoding");
            Cow::Borrowed(raw)
        }
    }
}

/// Builds the submitted values tree from already decoded name/value pairs.
///
/// Bracketed names nest (`person[name]`), `tags[]` appends to a list and a later
/// pair for the same scalar key replaces an earlier one.
pub fn from_fields<N, V, I>(fields: I) -> Value
where
    N: AsRef<str>,
    V: Into<String>,
    I: IntoIterator<Item = (N, V)>,
{
    let mut root = Map::new();
    for (name, value) in fields {
        let keys = split_name(name.as_ref());
        if keys.first().map_or(true, |key| key.is_empty()) {
            continue;
        }
        insert(&mut root, &keys, Value::String(value.into()));
    }

    Value::Map(root)
}

/// Parses an `application/x-www-form-urlencoded` request body.
pub fn parse_form_body(body: &str) -> Value {
    let pairs = body
        .split('&')
        .filter(|pair| !pair.is_empty())
        .map(|pair| {
            let (name, value) = pair.split_once('=').unwrap_or((pair, ""));
            (decode_component(name).into_owned(), decode_component(value).into_owned())
        });

    from_fields(pairs)
}
