//! Change sets between resolution passes

use crate::resolver::ResolvedInstance;
use easel_schema::EditClass;

/// One attribute whose resolved value changed between two passes
#[derive(Debug, Clone, PartialEq)]
pub struct AttrChange {
    pub name: String,
    /// Classification of the change, for the renderer to decide
    /// re-render scope. Opaque to the engine.
    pub edit: Option<EditClass>,
}

/// Attributes that changed between two resolutions of the same element,
/// in schema declaration order
#[derive(Debug, Default, Clone)]
pub struct ChangeSet {
    pub changes: Vec<AttrChange>,
}

impl ChangeSet {
    pub fn is_empty(&self) -> bool {
        self.changes.is_empty()
    }

    pub fn len(&self) -> usize {
        self.changes.len()
    }

    pub fn contains(&self, name: &str) -> bool {
        self.changes.iter().any(|c| c.name == name)
    }

    /// The distinct edit classifications touched by this change set, in
    /// first-seen order. Lets the renderer batch work per classification
    /// instead of per attribute.
    pub fn edit_classes(&self) -> Vec<&EditClass> {
        let mut classes: Vec<&EditClass> = Vec::new();
        for change in &self.changes {
            if let Some(edit) = &change.edit {
                if !classes.contains(&edit) {
                    classes.push(edit);
                }
            }
        }
        classes
    }
}

/// Compare two resolved instances of the same element kind.
///
/// Attributes are walked in the new instance's declaration order; an
/// attribute counts as changed when its resolved value differs from the
/// old instance's (or the old instance lacks it, after a schema reload).
pub fn diff_instances(old: &ResolvedInstance, new: &ResolvedInstance) -> ChangeSet {
    let mut changes = Vec::new();
    for attr in new.iter() {
        if old.get(&attr.name) != Some(&attr.value) {
            changes.push(AttrChange {
                name: attr.name.clone(),
                edit: attr.edit.clone(),
            });
        }
    }
    ChangeSet { changes }
}
