//! Schema registry for loading and managing element schemas

use crate::builtin;
use crate::node::{AttrKind, AttrSchema};
use crate::tree::SchemaTree;
use easel_core::{EaselError, Result};
use serde::Deserialize;
use serde_json::Value;
use std::collections::HashMap;
use std::fs;
use std::path::Path;

/// Registry that holds the schema tree of every known element kind
#[derive(Debug, Default)]
pub struct SchemaRegistry {
    elements: HashMap<String, SchemaTree>,
}

impl SchemaRegistry {
    /// Create a new empty registry
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a registry pre-populated with the built-in element kinds
    pub fn with_builtins() -> Result<Self> {
        let mut registry = Self::new();
        registry.register(builtin::image_overlay())?;
        Ok(registry)
    }

    /// Register an element schema directly.
    ///
    /// Runs the tree's self-check first; a malformed schema (duplicate
    /// attribute names, or a default violating its own constraints) is
    /// refused and never served to resolution.
    pub fn register(&mut self, tree: SchemaTree) -> Result<()> {
        tree.self_check()?;
        tracing::debug!(element = tree.element(), attrs = tree.len(), "registered element schema");
        self.elements.insert(tree.element().to_string(), tree);
        Ok(())
    }

    /// Get an element schema by kind name
    pub fn get(&self, element: &str) -> Option<&SchemaTree> {
        self.elements.get(element)
    }

    /// List all registered element kind names
    pub fn element_names(&self) -> Vec<&str> {
        self.elements.keys().map(|s| s.as_str()).collect()
    }

    /// Load element schemas from a TOML string
    pub fn load_str(&mut self, content: &str) -> Result<()> {
        let file: ElementFile = toml::from_str(content)?;
        for (name, def) in file.element {
            self.register(def.into_schema_tree(name)?)?;
        }
        Ok(())
    }

    /// Load element schemas from a TOML file
    pub fn load_file<P: AsRef<Path>>(&mut self, path: P) -> Result<()> {
        let content = fs::read_to_string(path)?;
        self.load_str(&content)
    }

    /// Load every `*.toml` schema file in a directory
    pub fn load_directory<P: AsRef<Path>>(&mut self, path: P) -> Result<()> {
        for entry in fs::read_dir(path)? {
            let file_path = entry?.path();
            if file_path.extension().map(|e| e == "toml").unwrap_or(false) {
                self.load_file(&file_path)?;
            }
        }
        Ok(())
    }
}

/// TOML file format for element schemas
#[derive(Debug, Deserialize)]
struct ElementFile {
    element: HashMap<String, ElementDef>,
}

#[derive(Debug, Deserialize)]
struct ElementDef {
    #[serde(default)]
    description: Option<String>,
    #[serde(default)]
    edit: Option<String>,
    /// Array of tables, so attribute declaration order survives parsing
    #[serde(default)]
    attr: Vec<AttrDef>,
}

impl ElementDef {
    fn into_schema_tree(self, name: String) -> Result<SchemaTree> {
        let mut tree = SchemaTree::new(name);
        if let Some(description) = self.description {
            tree = tree.with_description(description);
        }
        if let Some(edit) = self.edit {
            tree = tree.with_default_edit(edit);
        }
        for attr_def in self.attr {
            tree = tree.with_attr(attr_def.into_attr_schema()?);
        }
        Ok(tree)
    }
}

/// Attribute definition as it appears in TOML files
#[derive(Debug, Deserialize)]
struct AttrDef {
    name: String,
    #[serde(rename = "type")]
    kind: String,
    #[serde(default)]
    values: Option<Vec<String>>,
    #[serde(default)]
    default: Option<toml::Value>,
    #[serde(default)]
    min: Option<f64>,
    #[serde(default)]
    max: Option<f64>,
    #[serde(default)]
    edit: Option<String>,
    #[serde(default)]
    description: Option<String>,
}

impl AttrDef {
    fn into_attr_schema(self) -> Result<AttrSchema> {
        let kind = parse_attr_kind(&self.kind, self.values)?;
        let mut attr = AttrSchema::new(self.name, kind);
        if let Some(default) = self.default {
            attr = attr.with_default(toml_to_json(default));
        }
        if let Some(min) = self.min {
            attr = attr.with_min(min);
        }
        if let Some(max) = self.max {
            attr = attr.with_max(max);
        }
        if let Some(edit) = self.edit {
            attr = attr.with_edit(edit);
        }
        if let Some(description) = self.description {
            attr = attr.with_description(description);
        }
        Ok(attr)
    }
}

fn parse_attr_kind(type_str: &str, values: Option<Vec<String>>) -> Result<AttrKind> {
    match type_str {
        "boolean" => Ok(AttrKind::Boolean),
        "number" => Ok(AttrKind::Number),
        "integer" => Ok(AttrKind::Integer),
        "string" => Ok(AttrKind::String),
        "color" => Ok(AttrKind::Color),
        "enumerated" => Ok(AttrKind::Enumerated {
            values: values.unwrap_or_default(),
        }),
        "axis_ref" => Ok(AttrKind::AxisRef),
        "any" => Ok(AttrKind::Any),
        other => Err(EaselError::SchemaError(format!(
            "unknown attribute type '{}'",
            other
        ))),
    }
}

/// Bridge schema-file literals into the runtime value domain
fn toml_to_json(value: toml::Value) -> Value {
    match value {
        toml::Value::String(s) => Value::String(s),
        toml::Value::Integer(i) => Value::from(i),
        toml::Value::Float(f) => serde_json::Number::from_f64(f)
            .map(Value::Number)
            .unwrap_or(Value::Null),
        toml::Value::Boolean(b) => Value::Bool(b),
        toml::Value::Datetime(dt) => Value::String(dt.to_string()),
        toml::Value::Array(arr) => Value::Array(arr.into_iter().map(toml_to_json).collect()),
        toml::Value::Table(table) => Value::Object(
            table
                .into_iter()
                .map(|(k, v)| (k, toml_to_json(v)))
                .collect(),
        ),
    }
}
