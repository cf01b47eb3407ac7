//! # Header Parsing
//!
//! Documents may open with a front-matter block fenced by dash lines:
//!
//! ```text
//! ---
//! title: "Spring Sonnet"
//! category: poetry
//! tags: [nature, spring]
//! ---
//! Body text starts here.
//! ```
//!
//! [`parse`] splits raw text into a [`Header`] and the remaining body. It never
//! fails: a missing fence, an unterminated fence or invalid YAML all degrade to
//! an empty header. The exact fallbacks are:
//!
//! | input                          | header      | body                     |
//! |--------------------------------|-------------|--------------------------|
//! | no opening fence               | empty       | trimmed text             |
//! | opening fence, no closing one  | empty       | trimmed text             |
//! | block is empty / not a mapping | empty       | trimmed text after fence |
//! | block is invalid YAML          | empty       | raw text, untouched      |
//! | block is a mapping             | the mapping | trimmed text after fence |
//!
//! A key repeated at the top level of the block keeps its last value.
//!
//! Values are converted from `serde_yaml::Value` into the closed [`HeaderValue`]
//! union so accessors on [`crate::model::Document`] can match exhaustively.

use serde::de::{Deserialize, Deserializer, MapAccess, Visitor};
use serde::Serialize;
use serde_yaml::{Mapping, Value};
use std::collections::BTreeMap;
use std::fmt;

/// A single YAML scalar.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum Scalar {
    Null,
    Bool(bool),
    Int(i64),
    Float(f64),
    Str(String),
}

impl fmt::Display for Scalar {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Scalar::Null => Ok(()),
            Scalar::Bool(b) => write!(f, "{}", b),
            Scalar::Int(i) => write!(f, "{}", i),
            Scalar::Float(x) => write!(f, "{}", x),
            Scalar::Str(s) => f.write_str(s),
        }
    }
}

/// A parsed header value.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum HeaderValue {
    Scalar(Scalar),
    List(Vec<Scalar>),
    Mapping(BTreeMap<String, HeaderValue>),
}

impl HeaderValue {
    /// Text of a non-null scalar, `None` for anything else.
    pub fn as_text(&self) -> Option<String> {
        match self {
            HeaderValue::Scalar(Scalar::Null) => None,
            HeaderValue::Scalar(s) => Some(s.to_string()),
            HeaderValue::List(_) | HeaderValue::Mapping(_) => None,
        }
    }

    fn from_yaml(value: Value) -> Self {
        match value {
            Value::Sequence(items) => {
                HeaderValue::List(items.into_iter().map(scalar_from_yaml).collect())
            }
            Value::Mapping(map) => HeaderValue::Mapping(mapping_from_yaml(map)),
            Value::Tagged(tagged) => HeaderValue::from_yaml(tagged.value),
            other => HeaderValue::Scalar(scalar_from_yaml(other)),
        }
    }
}

impl fmt::Display for HeaderValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            HeaderValue::Scalar(s) => write!(f, "{}", s),
            HeaderValue::List(items) => {
                let parts: Vec<String> = items.iter().map(|s| s.to_string()).collect();
                f.write_str(&parts.join(", "))
            }
            HeaderValue::Mapping(map) => {
                let parts: Vec<String> = map.iter().map(|(k, v)| format!("{}: {}", k, v)).collect();
                write!(f, "{{{}}}", parts.join(", "))
            }
        }
    }
}

/// Key/value pairs from a document's front matter. Possibly empty.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(transparent)]
pub struct Header(BTreeMap<String, HeaderValue>);

impl Header {
    pub fn get(&self, key: &str) -> Option<&HeaderValue> {
        self.0.get(key)
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&String, &HeaderValue)> {
        self.0.iter()
    }
}

/// Splits `raw` into header and body. See the module docs for fallback rules.
pub fn parse(raw: &str) -> (Header, String) {
    let (header, body, _) = parse_with_diagnostics(raw);
    (header, body)
}

/// Like [`parse`], additionally returning the YAML error that forced the
/// fallback, so callers with more context (a file path) can report it.
pub fn parse_with_diagnostics(raw: &str) -> (Header, String, Option<serde_yaml::Error>) {
    let text = raw.strip_prefix('\u{feff}').unwrap_or(raw).trim();

    let Some((block, rest)) = split_fences(text) else {
        return (Header::default(), text.to_string(), None);
    };

    if block.trim().is_empty() {
        return (Header::default(), rest.trim().to_string(), None);
    }

    let body = rest.trim().to_string();
    match serde_yaml::from_str::<Value>(block) {
        Ok(Value::Mapping(map)) => (Header(mapping_from_yaml(map)), body, None),
        Ok(_) => (Header::default(), body, None),
        // `Value` rejects duplicate keys; retry keeping the last one.
        Err(err) => match serde_yaml::from_str::<LastWins>(block) {
            Ok(LastWins(map)) => (Header(mapping_from_yaml(map)), body, None),
            Err(_) => (Header::default(), raw.to_string(), Some(err)),
        },
    }
}

/// A top-level mapping where a repeated key overwrites the earlier entry.
struct LastWins(Mapping);

impl<'de> Deserialize<'de> for LastWins {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        struct LastWinsVisitor;

        impl<'de> Visitor<'de> for LastWinsVisitor {
            type Value = LastWins;

            fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str("a mapping")
            }

            fn visit_map<A: MapAccess<'de>>(self, mut access: A) -> Result<LastWins, A::Error> {
                let mut map = Mapping::new();
                while let Some((key, value)) = access.next_entry::<Value, Value>()? {
                    map.insert(key, value);
                }
                Ok(LastWins(map))
            }
        }

        deserializer.deserialize_map(LastWinsVisitor)
    }
}

/// A fence line is three or more dashes followed only by whitespace.
fn is_fence(line: &str) -> bool {
    let dashes = line.bytes().take_while(|b| *b == b'-').count();
    dashes >= 3 && line[dashes..].trim().is_empty()
}

/// Returns `(block, rest)` when `text` opens with a fence that is later closed.
fn split_fences(text: &str) -> Option<(&str, &str)> {
    let mut lines = text.split_inclusive('\n');
    let first = lines.next()?;
    if !is_fence(first) {
        return None;
    }

    let block_start = first.len();
    let mut offset = block_start;
    for line in lines {
        if is_fence(line) {
            return Some((&text[block_start..offset], &text[offset + line.len()..]));
        }
        offset += line.len();
    }
    None
}

fn scalar_from_yaml(value: Value) -> Scalar {
    match value {
        Value::Null => Scalar::Null,
        Value::Bool(b) => Scalar::Bool(b),
        Value::Number(n) => match n.as_i64() {
            Some(i) => Scalar::Int(i),
            None => Scalar::Float(n.as_f64().unwrap_or_default()),
        },
        Value::String(s) => Scalar::Str(s),
        Value::Tagged(tagged) => scalar_from_yaml(tagged.value),
        // Nested collections inside a list are kept as compact text.
        nested @ (Value::Sequence(_) | Value::Mapping(_)) => {
            Scalar::Str(serde_json::to_string(&nested).unwrap_or_default())
        }
    }
}

fn mapping_from_yaml(map: Mapping) -> BTreeMap<String, HeaderValue> {
    map.into_iter()
        .map(|(key, value)| {
            let key = match key {
                Value::String(s) => s,
                Value::Null => "null".to_string(),
                other => scalar_from_yaml(other).to_string(),
            };
            (key, HeaderValue::from_yaml(value))
        })
        .collect()
}
