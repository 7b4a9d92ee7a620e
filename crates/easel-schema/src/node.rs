//! Attribute schema node definitions

use serde::{Deserialize, Serialize};
use serde_json::{json, Value};
use std::fmt;

/// The type of a single overlay attribute
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AttrKind {
    Boolean,
    Number,
    Integer,
    String,
    Color,
    Enumerated { values: Vec<String> },
    /// The literal `"paper"`, or an axis identifier accepted by the
    /// host's [`AxisRefCheck`](crate::AxisRefCheck) predicate.
    AxisRef,
    /// Accepted without validation; interpretation is deferred to the
    /// renderer (e.g. a position whose unit depends on a sibling
    /// reference-frame attribute).
    Any,
}

impl AttrKind {
    pub fn type_name(&self) -> &'static str {
        match self {
            AttrKind::Boolean => "boolean",
            AttrKind::Number => "number",
            AttrKind::Integer => "integer",
            AttrKind::String => "string",
            AttrKind::Color => "color",
            AttrKind::Enumerated { .. } => "enumerated",
            AttrKind::AxisRef => "axis_ref",
            AttrKind::Any => "any",
        }
    }

    pub fn is_numeric(&self) -> bool {
        matches!(self, AttrKind::Number | AttrKind::Integer)
    }

    /// The default value a node of this kind starts with when the schema
    /// author does not supply one.
    pub fn natural_default(&self) -> Value {
        match self {
            AttrKind::Boolean => json!(false),
            AttrKind::Number => json!(0),
            AttrKind::Integer => json!(0),
            AttrKind::String => json!(""),
            AttrKind::Color => json!("#000000"),
            AttrKind::Enumerated { values } => {
                values.first().map(|v| json!(v)).unwrap_or(Value::Null)
            }
            AttrKind::AxisRef => json!("paper"),
            AttrKind::Any => Value::Null,
        }
    }
}

/// Opaque re-render scope tag attached to resolved attribute values.
///
/// The engine never interprets the tag; the consuming renderer uses it to
/// decide how much work a change to the attribute requires.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct EditClass(String);

impl EditClass {
    pub fn new(tag: impl Into<String>) -> Self {
        Self(tag.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for EditClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for EditClass {
    fn from(tag: &str) -> Self {
        Self(tag.to_string())
    }
}

impl From<String> for EditClass {
    fn from(tag: String) -> Self {
        Self(tag)
    }
}

/// Schema for a single attribute of an overlay element
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AttrSchema {
    pub name: String,
    pub kind: AttrKind,
    /// Used when neither the raw input nor the template supplies a valid
    /// value. Must itself satisfy the node's constraints.
    pub default: Value,
    #[serde(default)]
    pub min: Option<f64>,
    #[serde(default)]
    pub max: Option<f64>,
    /// Inherits the tree-level default classification when absent.
    #[serde(default)]
    pub edit: Option<EditClass>,
    #[serde(default)]
    pub description: Option<String>,
}

impl AttrSchema {
    pub fn new(name: impl Into<String>, kind: AttrKind) -> Self {
        let default = kind.natural_default();
        Self {
            name: name.into(),
            kind,
            default,
            min: None,
            max: None,
            edit: None,
            description: None,
        }
    }

    pub fn boolean(name: impl Into<String>) -> Self {
        Self::new(name, AttrKind::Boolean)
    }

    pub fn number(name: impl Into<String>) -> Self {
        Self::new(name, AttrKind::Number)
    }

    pub fn integer(name: impl Into<String>) -> Self {
        Self::new(name, AttrKind::Integer)
    }

    pub fn string(name: impl Into<String>) -> Self {
        Self::new(name, AttrKind::String)
    }

    pub fn color(name: impl Into<String>) -> Self {
        Self::new(name, AttrKind::Color)
    }

    pub fn enumerated<S: Into<String>>(
        name: impl Into<String>,
        values: impl IntoIterator<Item = S>,
    ) -> Self {
        Self::new(
            name,
            AttrKind::Enumerated {
                values: values.into_iter().map(Into::into).collect(),
            },
        )
    }

    pub fn axis_ref(name: impl Into<String>) -> Self {
        Self::new(name, AttrKind::AxisRef)
    }

    pub fn any(name: impl Into<String>) -> Self {
        Self::new(name, AttrKind::Any)
    }

    pub fn with_default(mut self, default: Value) -> Self {
        self.default = default;
        self
    }

    pub fn with_min(mut self, min: f64) -> Self {
        self.min = Some(min);
        self
    }

    pub fn with_max(mut self, max: f64) -> Self {
        self.max = Some(max);
        self
    }

    pub fn with_range(mut self, min: f64, max: f64) -> Self {
        self.min = Some(min);
        self.max = Some(max);
        self
    }

    pub fn with_edit(mut self, edit: impl Into<EditClass>) -> Self {
        self.edit = Some(edit.into());
        self
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }
}
