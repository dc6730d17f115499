//! Request-shaped inputs for create and update.
//!
//! Bodies arrive as arbitrary JSON, so field values are coerced to text:
//! strings are taken verbatim, `null` becomes the empty string, and anything
//! else is rendered as its JSON text.

use serde_json::{Map, Value};

use crate::errors::PostError;

const TITLE: &str = "title";
const CONTENT: &str = "content";

fn value_text(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        Value::Null => String::new(),
        other => other.to_string(),
    }
}

fn is_blank(text: &str) -> bool {
    text.trim().is_empty()
}

/// JSON values that count as "no body at all".
fn is_empty_payload(value: &Value) -> bool {
    match value {
        Value::Null => true,
        Value::Bool(b) => !b,
        Value::Number(n) => n.as_f64() == Some(0.0),
        Value::String(s) => s.is_empty(),
        Value::Array(items) => items.is_empty(),
        Value::Object(_) => false,
    }
}

fn field(map: &Map<String, Value>, key: &str) -> Option<String> {
    map.get(key).map(value_text)
}

/// Create input. Both fields are required; values are kept untrimmed.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct NewPost {
    pub title: Option<String>,
    pub content: Option<String>,
}

impl NewPost {
    pub fn new(title: impl Into<String>, content: impl Into<String>) -> Self {
        Self { title: Some(title.into()), content: Some(content.into()) }
    }

    /// `None` stands for a missing or unparsable body.
    pub fn from_payload(payload: Option<&Value>) -> Result<Self, PostError> {
        match payload {
            None => Err(PostError::EmptyBody),
            Some(v) if is_empty_payload(v) => Err(PostError::EmptyBody),
            Some(Value::Object(map)) => Ok(Self {
                title: field(map, TITLE),
                content: field(map, CONTENT),
            }),
            // a non-empty array or scalar carries neither field
            Some(_) => Ok(Self::default()),
        }
    }

    /// Returns `(title, content)` or every missing/blank field, title first.
    pub fn into_fields(self) -> Result<(String, String), PostError> {
        let title = self.title.filter(|t| !is_blank(t));
        let content = self.content.filter(|c| !is_blank(c));
        match (title, content) {
            (Some(title), Some(content)) => Ok((title, content)),
            (title, content) => {
                let mut missing = Vec::with_capacity(2);
                if title.is_none() {
                    missing.push(TITLE);
                }
                if content.is_none() {
                    missing.push(CONTENT);
                }
                Err(PostError::MissingFields(missing))
            }
        }
    }
}

/// Partial update. Absent fields are left untouched; present ones must not be
/// blank. A patch with neither field is a valid no-op.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct PostPatch {
    pub title: Option<String>,
    pub content: Option<String>,
}

impl PostPatch {
    /// `None` means no usable body: missing, unparsable, `{}` or not an object.
    /// The store reports that as `EmptyBody` only after the id lookup, so this
    /// never fails by itself.
    pub fn from_payload(payload: Option<&Value>) -> Option<Self> {
        match payload {
            Some(Value::Object(map)) if !map.is_empty() => Some(Self {
                title: field(map, TITLE),
                content: field(map, CONTENT),
            }),
            _ => None,
        }
    }

    pub fn is_noop(&self) -> bool {
        self.title.is_none() && self.content.is_none()
    }

    pub fn validate(&self) -> Result<(), PostError> {
        let mut blank = Vec::new();
        if self.title.as_deref().is_some_and(is_blank) {
            blank.push(TITLE);
        }
        if self.content.as_deref().is_some_and(is_blank) {
            blank.push(CONTENT);
        }
        if blank.is_empty() {
            Ok(())
        } else {
            Err(PostError::MissingFields(blank))
        }
    }
}
