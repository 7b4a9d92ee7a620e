//! Templated collections: an ordered array of elements sharing a
//! template default layer

use crate::report::{Issue, ResolveReport};
use crate::resolver::{resolve_item, ResolvedInstance};
use easel_schema::{validate_value, AxisRefCheck, SchemaTree};
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Raw input for one templated collection.
///
/// `template` supplies per-collection defaults that sit between explicit
/// item values and the schema's own defaults. `items` order is
/// semantically meaningful: it decides stacking among elements of the
/// same layer.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ArrayInput {
    #[serde(default)]
    pub template: Option<Value>,
    #[serde(default)]
    pub items: Vec<Value>,
}

impl ArrayInput {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_items(items: Vec<Value>) -> Self {
        Self {
            template: None,
            items,
        }
    }

    pub fn with_template(mut self, template: Value) -> Self {
        self.template = Some(template);
        self
    }
}

/// Template values that passed validation, aligned with the schema
/// tree's declaration order. Invalid or absent template values hold
/// `None` and fall through to the schema default.
pub(crate) struct TemplateDefaults {
    values: Vec<Option<Value>>,
}

impl TemplateDefaults {
    pub(crate) fn get(&self, pos: usize) -> Option<&Value> {
        self.values.get(pos).and_then(|v| v.as_ref())
    }

    fn compute(
        tree: &SchemaTree,
        template: &Value,
        axes: &dyn AxisRefCheck,
        report: &mut ResolveReport,
    ) -> Self {
        let template_obj = match template {
            Value::Object(map) => Some(map),
            Value::Null => None,
            other => {
                report.push(Issue::template_value(
                    "*",
                    format!(
                        "template must be an object, got {}",
                        easel_schema::value_type_name(other)
                    ),
                ));
                None
            }
        };

        let mut values = Vec::with_capacity(tree.len());
        for node in tree.iter() {
            let supplied = template_obj.and_then(|obj| obj.get(&node.name));
            let valid = match supplied {
                None => None,
                Some(value) => match validate_value(node, value, axes) {
                    Ok(()) => Some(value.clone()),
                    Err(e) => {
                        report.push(Issue::template_value(&node.name, e.to_string()));
                        None
                    }
                },
            };
            values.push(valid);
        }

        if let Some(obj) = template_obj {
            for key in obj.keys() {
                if !tree.contains(key) {
                    report.push(Issue::template_unknown(key));
                }
            }
        }

        Self { values }
    }
}

/// A schema tree wrapped for collection resolution.
///
/// Immutable once constructed; `template` and `items` arrive with each
/// [`resolve`](Self::resolve) call, so one wrapper serves any number of
/// independent resolution passes.
pub struct TemplatedArray<'a> {
    tree: &'a SchemaTree,
}

impl<'a> TemplatedArray<'a> {
    pub fn new(tree: &'a SchemaTree) -> Self {
        Self { tree }
    }

    pub fn tree(&self) -> &SchemaTree {
        self.tree
    }

    /// Resolve every item of the collection independently.
    ///
    /// Precedence per attribute: explicit item value, then valid
    /// template value, then schema default. A validation failure in one
    /// item never touches its siblings, and item issues carry the item's
    /// index. Output order and count mirror `items` exactly: hiding an
    /// element (`visible: false`) keeps its slot, only removal drops it.
    pub fn resolve(&self, input: &ArrayInput, axes: &dyn AxisRefCheck) -> ResolvedArray {
        let mut report = ResolveReport::new();
        tracing::debug!(
            element = self.tree.element(),
            items = input.items.len(),
            templated = input.template.is_some(),
            "resolving collection"
        );

        let defaults = input
            .template
            .as_ref()
            .map(|t| TemplateDefaults::compute(self.tree, t, axes, &mut report));

        let items = input
            .items
            .iter()
            .enumerate()
            .map(|(i, raw)| {
                resolve_item(self.tree, raw, defaults.as_ref(), Some(i), axes, &mut report)
            })
            .collect();

        ResolvedArray { items, report }
    }
}

/// Output of one collection resolution pass
#[derive(Debug)]
pub struct ResolvedArray {
    pub items: Vec<ResolvedInstance>,
    pub report: ResolveReport,
}

impl ResolvedArray {
    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Items the renderer should paint, with their collection indices.
    /// Hidden items are skipped here but still occupy their slot in
    /// `items`.
    pub fn visible_items(&self) -> impl Iterator<Item = (usize, &ResolvedInstance)> {
        self.items
            .iter()
            .enumerate()
            .filter(|(_, item)| item.visible())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::report::Severity;
    use easel_schema::{image_overlay, NoAxes};
    use serde_json::json;

    #[test]
    fn test_precedence_item_over_template_over_default() {
        let tree = image_overlay();
        let array = TemplatedArray::new(&tree);
        let template = json!({"opacity": 0.5});

        // explicit item value wins
        let input = ArrayInput::from_items(vec![json!({"opacity": 0.25})])
            .with_template(template.clone());
        let resolved = array.resolve(&input, &NoAxes);
        assert_eq!(resolved.items[0].get("opacity"), Some(&json!(0.25)));

        // without the item value the template applies
        let input = ArrayInput::from_items(vec![json!({})]).with_template(template);
        let resolved = array.resolve(&input, &NoAxes);
        assert_eq!(resolved.items[0].get("opacity"), Some(&json!(0.5)));

        // without either, the schema default
        let input = ArrayInput::from_items(vec![json!({})]);
        let resolved = array.resolve(&input, &NoAxes);
        assert_eq!(resolved.items[0].get("opacity"), Some(&json!(1)));
    }

    #[test]
    fn test_invalid_item_value_falls_back_to_template() {
        let tree = image_overlay();
        let array = TemplatedArray::new(&tree);
        let input = ArrayInput::from_items(vec![json!({"opacity": 7})])
            .with_template(json!({"opacity": 0.5}));

        let resolved = array.resolve(&input, &NoAxes);
        assert_eq!(resolved.items[0].get("opacity"), Some(&json!(0.5)));
        assert_eq!(resolved.report.error_count(), 1);
    }

    #[test]
    fn test_invalid_template_value_treated_as_absent() {
        let tree = image_overlay();
        let array = TemplatedArray::new(&tree);
        let input = ArrayInput::from_items(vec![json!({}), json!({})])
            .with_template(json!({"layer": "middle"}));

        let resolved = array.resolve(&input, &NoAxes);
        // every item falls through to the schema default
        for item in &resolved.items {
            assert_eq!(item.get("layer"), Some(&json!("above")));
        }
        // reported once, against the template, as its own warning class
        assert_eq!(resolved.report.error_count(), 0);
        assert_eq!(resolved.report.warning_count(), 1);
        let issue = &resolved.report.issues[0];
        assert_eq!(issue.attr, "layer");
        assert_eq!(issue.index, None);
        assert!(issue.message.contains("template"));
    }

    #[test]
    fn test_unknown_template_key_warns() {
        let tree = image_overlay();
        let array = TemplatedArray::new(&tree);
        let input =
            ArrayInput::from_items(vec![json!({})]).with_template(json!({"opcaity": 0.5}));

        let resolved = array.resolve(&input, &NoAxes);
        assert_eq!(resolved.report.warning_count(), 1);
        assert!(resolved.report.issues[0].message.contains("template"));
    }

    #[test]
    fn test_hiding_preserves_slot_removal_drops_it() {
        let tree = image_overlay();
        let array = TemplatedArray::new(&tree);

        let three = ArrayInput::from_items(vec![
            json!({"source": "a.png"}),
            json!({"source": "b.png", "visible": false}),
            json!({"source": "c.png"}),
        ]);
        let resolved = array.resolve(&three, &NoAxes);
        assert_eq!(resolved.len(), 3);
        assert!(resolved.items[0].visible());
        assert!(!resolved.items[1].visible());
        assert!(resolved.items[2].visible());

        let painted: Vec<usize> = resolved.visible_items().map(|(i, _)| i).collect();
        assert_eq!(painted, vec![0, 2]);

        // removal is a different operation with a different outcome
        let two = ArrayInput::from_items(vec![
            json!({"source": "a.png"}),
            json!({"source": "c.png"}),
        ]);
        let resolved = array.resolve(&two, &NoAxes);
        assert_eq!(resolved.len(), 2);
        assert_eq!(resolved.items[1].get("source"), Some(&json!("c.png")));
    }

    #[test]
    fn test_one_bad_item_never_poisons_siblings() {
        let tree = image_overlay();
        let array = TemplatedArray::new(&tree);
        let input = ArrayInput::from_items(vec![
            json!({"layer": "middle", "opacity": 9}),
            json!({"source": "fine.png", "opacity": 0.5}),
        ]);

        let resolved = array.resolve(&input, &NoAxes);
        assert_eq!(resolved.len(), 2);
        assert_eq!(resolved.items[1].get("source"), Some(&json!("fine.png")));
        assert_eq!(resolved.items[1].get("opacity"), Some(&json!(0.5)));

        // both failures are attributed to item 0
        assert_eq!(resolved.report.error_count(), 2);
        assert_eq!(resolved.report.for_index(0).count(), 2);
        assert_eq!(resolved.report.for_index(1).count(), 0);
        assert!(resolved
            .report
            .for_index(0)
            .all(|i| i.severity == Severity::Error));
    }

    #[test]
    fn test_empty_collection_resolves_clean() {
        let tree = image_overlay();
        let array = TemplatedArray::new(&tree);
        let resolved = array.resolve(&ArrayInput::new(), &NoAxes);
        assert!(resolved.is_empty());
        assert!(resolved.report.is_clean());
    }

    #[test]
    fn test_template_itself_must_validate_against_the_tree() {
        let tree = image_overlay();
        let array = TemplatedArray::new(&tree);
        // a template is not a schema: it cannot add attributes, and its
        // values go through the same validators as item values
        let input = ArrayInput::from_items(vec![json!({})])
            .with_template(json!({"opacity": "half", "extra": 1}));

        let resolved = array.resolve(&input, &NoAxes);
        assert_eq!(resolved.items[0].get("opacity"), Some(&json!(1)));
        assert_eq!(resolved.report.warning_count(), 2);
        assert!(resolved.items[0].get("extra").is_none());
    }

    #[test]
    fn test_unknown_item_attribute_indexed_per_item() {
        let tree = image_overlay();
        let array = TemplatedArray::new(&tree);
        let input = ArrayInput::from_items(vec![
            json!({"opcaity": 0.5}),
            json!({}),
            json!({"opcaity": 0.9}),
        ]);

        let resolved = array.resolve(&input, &NoAxes);
        assert_eq!(resolved.report.warning_count(), 2);
        assert_eq!(resolved.report.for_index(0).count(), 1);
        assert_eq!(resolved.report.for_index(2).count(), 1);
    }
}
