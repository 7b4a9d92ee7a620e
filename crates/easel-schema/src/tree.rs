//! Ordered schema trees for element kinds

use crate::node::{AttrSchema, EditClass};
use crate::validation::{validate_value, AxisRefCheck};
use easel_core::{EaselError, Result};
use std::collections::{HashMap, HashSet};

/// The full configuration surface of one element kind: an ordered set of
/// attribute schema nodes.
///
/// Declaration order is preserved and observable through
/// [`Self::iter`]; resolution and documentation generation both depend
/// on it being deterministic.
#[derive(Debug, Clone)]
pub struct SchemaTree {
    element: String,
    description: Option<String>,
    /// Classification nodes fall back to when they declare none.
    default_edit: Option<EditClass>,
    attrs: Vec<AttrSchema>,
    index: HashMap<String, usize>,
}

impl SchemaTree {
    pub fn new(element: impl Into<String>) -> Self {
        Self {
            element: element.into(),
            description: None,
            default_edit: None,
            attrs: Vec::new(),
            index: HashMap::new(),
        }
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    pub fn with_default_edit(mut self, edit: impl Into<EditClass>) -> Self {
        self.default_edit = Some(edit.into());
        self
    }

    /// Append an attribute node. Duplicate names are tolerated here and
    /// rejected by [`self_check`](Self::self_check) so that malformed
    /// schemas surface as errors at load time rather than panics.
    pub fn with_attr(mut self, attr: AttrSchema) -> Self {
        let pos = self.attrs.len();
        self.index.entry(attr.name.clone()).or_insert(pos);
        self.attrs.push(attr);
        self
    }

    pub fn element(&self) -> &str {
        &self.element
    }

    pub fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }

    pub fn default_edit(&self) -> Option<&EditClass> {
        self.default_edit.as_ref()
    }

    pub fn get(&self, name: &str) -> Option<&AttrSchema> {
        self.index.get(name).map(|&i| &self.attrs[i])
    }

    pub fn contains(&self, name: &str) -> bool {
        self.index.contains_key(name)
    }

    /// Visit every attribute node exactly once, in declaration order.
    pub fn iter(&self) -> impl Iterator<Item = &AttrSchema> {
        self.attrs.iter()
    }

    pub fn names(&self) -> Vec<&str> {
        self.attrs.iter().map(|a| a.name.as_str()).collect()
    }

    pub fn len(&self) -> usize {
        self.attrs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.attrs.is_empty()
    }

    /// The classification attached to resolved values of `attr`: the
    /// node's own, or the tree default when the node declares none.
    pub fn effective_edit<'a>(&'a self, attr: &'a AttrSchema) -> Option<&'a EditClass> {
        attr.edit.as_ref().or(self.default_edit.as_ref())
    }

    /// Verify schema self-consistency: no duplicate attribute names, and
    /// every default satisfies its own node's constraints.
    ///
    /// Axis-reference defaults are checked structurally (any string
    /// passes) since the host's identifier grammar is not available at
    /// load time.
    pub fn self_check(&self) -> Result<()> {
        let mut seen = HashSet::new();
        for attr in &self.attrs {
            if !seen.insert(attr.name.as_str()) {
                return Err(EaselError::DuplicateAttribute(attr.name.clone()));
            }
        }
        let any_axis: &dyn AxisRefCheck = &|_: &str| true;
        for attr in &self.attrs {
            validate_value(attr, &attr.default, any_axis).map_err(|e| {
                EaselError::InvalidDefault {
                    attr: attr.name.clone(),
                    reason: e.to_string(),
                }
            })?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::node::AttrSchema;
    use serde_json::json;

    fn sample_tree() -> SchemaTree {
        SchemaTree::new("annotation")
            .with_default_edit("overlay")
            .with_attr(AttrSchema::boolean("visible").with_default(json!(true)))
            .with_attr(
                AttrSchema::number("opacity")
                    .with_range(0.0, 1.0)
                    .with_default(json!(1)),
            )
            .with_attr(
                AttrSchema::enumerated("layer", ["below", "above"])
                    .with_default(json!("above"))
                    .with_edit("canvas"),
            )
    }

    #[test]
    fn test_declaration_order_iteration() {
        let tree = sample_tree();
        let names: Vec<&str> = tree.iter().map(|a| a.name.as_str()).collect();
        assert_eq!(names, vec!["visible", "opacity", "layer"]);
        assert_eq!(tree.names(), names);
        assert_eq!(tree.len(), 3);
    }

    #[test]
    fn test_lookup_by_name() {
        let tree = sample_tree();
        assert!(tree.contains("opacity"));
        assert_eq!(tree.get("opacity").unwrap().min, Some(0.0));
        assert!(tree.get("missing").is_none());
    }

    #[test]
    fn test_edit_inheritance() {
        let tree = sample_tree();
        let visible = tree.get("visible").unwrap();
        let layer = tree.get("layer").unwrap();
        assert_eq!(
            tree.effective_edit(visible).map(|e| e.as_str()),
            Some("overlay")
        );
        assert_eq!(
            tree.effective_edit(layer).map(|e| e.as_str()),
            Some("canvas")
        );
    }

    #[test]
    fn test_self_check_accepts_valid_tree() {
        assert!(sample_tree().self_check().is_ok());
    }

    #[test]
    fn test_self_check_rejects_duplicate_names() {
        let tree = SchemaTree::new("bad")
            .with_attr(AttrSchema::boolean("visible"))
            .with_attr(AttrSchema::number("visible"));
        assert!(matches!(
            tree.self_check(),
            Err(EaselError::DuplicateAttribute(name)) if name == "visible"
        ));
    }

    #[test]
    fn test_self_check_rejects_default_outside_range() {
        let tree = SchemaTree::new("bad").with_attr(
            AttrSchema::number("opacity")
                .with_range(0.0, 1.0)
                .with_default(json!(2.0)),
        );
        assert!(matches!(
            tree.self_check(),
            Err(EaselError::InvalidDefault { attr, .. }) if attr == "opacity"
        ));
    }

    #[test]
    fn test_self_check_rejects_default_outside_enum() {
        let tree = SchemaTree::new("bad").with_attr(
            AttrSchema::enumerated("layer", ["below", "above"]).with_default(json!("middle")),
        );
        assert!(tree.self_check().is_err());
    }
}
