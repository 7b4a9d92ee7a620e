//! Single-instance resolution against a schema tree

use crate::report::{Issue, ResolveReport};
use crate::template::TemplateDefaults;
use easel_schema::{validate_value, value_type_name, AxisRefCheck, EditClass, SchemaTree};
use serde_json::{Map, Value};
use std::collections::HashMap;

/// One resolved attribute: the adopted value plus the classification the
/// renderer uses to scope re-render work when the value changes
#[derive(Debug, Clone, PartialEq)]
pub struct ResolvedAttr {
    pub name: String,
    pub value: Value,
    pub edit: Option<EditClass>,
}

/// Fully validated, fully defaulted configuration of one element.
///
/// Created fresh on every resolution pass and never mutated; the next
/// pass supersedes it wholesale.
#[derive(Debug, Clone)]
pub struct ResolvedInstance {
    element: String,
    attrs: Vec<ResolvedAttr>,
    index: HashMap<String, usize>,
}

impl ResolvedInstance {
    pub fn element(&self) -> &str {
        &self.element
    }

    /// The resolved value of an attribute
    pub fn get(&self, name: &str) -> Option<&Value> {
        self.attr(name).map(|a| &a.value)
    }

    pub fn attr(&self, name: &str) -> Option<&ResolvedAttr> {
        self.index.get(name).map(|&i| &self.attrs[i])
    }

    /// Resolved attributes in schema declaration order
    pub fn iter(&self) -> impl Iterator<Item = &ResolvedAttr> {
        self.attrs.iter()
    }

    pub fn len(&self) -> usize {
        self.attrs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.attrs.is_empty()
    }

    /// Whether the renderer should paint this element. Hidden elements
    /// keep their collection slot; only removing them from `items` drops
    /// the slot.
    pub fn visible(&self) -> bool {
        self.get("visible").and_then(Value::as_bool).unwrap_or(true)
    }

    /// The instance as a plain configuration object. Feeding this back
    /// into resolution reproduces the instance exactly (resolution is a
    /// fixed point).
    pub fn to_value(&self) -> Value {
        let mut map = Map::new();
        for attr in &self.attrs {
            map.insert(attr.name.clone(), attr.value.clone());
        }
        Value::Object(map)
    }
}

/// Resolve one raw configuration object against a schema tree.
///
/// Precedence per attribute: valid raw value, then schema default.
/// Invalid values are recorded in the report and fall through; unknown
/// keys are reported and ignored. The returned instance always carries
/// exactly one valid value per attribute in the tree.
pub fn resolve_instance(
    tree: &SchemaTree,
    raw: &Value,
    axes: &dyn AxisRefCheck,
) -> (ResolvedInstance, ResolveReport) {
    let mut report = ResolveReport::new();
    let instance = resolve_item(tree, raw, None, None, axes, &mut report);
    (instance, report)
}

pub(crate) fn resolve_item(
    tree: &SchemaTree,
    raw: &Value,
    template: Option<&TemplateDefaults>,
    item_index: Option<usize>,
    axes: &dyn AxisRefCheck,
    report: &mut ResolveReport,
) -> ResolvedInstance {
    let raw_obj = match raw {
        Value::Object(map) => Some(map),
        Value::Null => None,
        other => {
            report.push(Issue::malformed_item(item_index, value_type_name(other)));
            None
        }
    };

    let mut attrs = Vec::with_capacity(tree.len());
    let mut index = HashMap::with_capacity(tree.len());

    for (pos, node) in tree.iter().enumerate() {
        let mut chosen = None;
        if let Some(obj) = raw_obj {
            if let Some(value) = obj.get(&node.name) {
                match validate_value(node, value, axes) {
                    Ok(()) => chosen = Some(value.clone()),
                    Err(e) => {
                        report.push(Issue::invalid_value(&node.name, item_index, e.to_string()))
                    }
                }
            }
        }
        if chosen.is_none() {
            if let Some(defaults) = template {
                chosen = defaults.get(pos).cloned();
            }
        }
        let value = chosen.unwrap_or_else(|| node.default.clone());

        index.insert(node.name.clone(), attrs.len());
        attrs.push(ResolvedAttr {
            name: node.name.clone(),
            value,
            edit: tree.effective_edit(node).cloned(),
        });
    }

    if let Some(obj) = raw_obj {
        for key in obj.keys() {
            if !tree.contains(key) {
                report.push(Issue::unknown_attribute(key, item_index));
            }
        }
    }

    ResolvedInstance {
        element: tree.element().to_string(),
        attrs,
        index,
    }
}
