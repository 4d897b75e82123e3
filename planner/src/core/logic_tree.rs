//! Logic tree flattening
//!
//! Clause logic trees are nested boolean expressions:
//!
//! ```json
//! {"op": "AND", "children": [
//!     {"op": "has", "id": "req.elig.ssn"},
//!     {"op": "OR", "children": [{"op": "has", "id": "req_passport"},
//!                               {"op": "has", "id": "req_itin"}]}
//! ]}
//! ```
//!
//! Extraction collects every requirement identity referenced anywhere in
//! the tree without distinguishing the internal operators: the result says
//! which requirements are *referenced*, not whether the formula holds.
//! Viability checking then requires all of them (see DESIGN.md on the
//! preserved flattening behavior).

use serde_json::Value;
use shared::RequirementId;
use std::collections::HashSet;

/// Flattens clause logic trees into referenced requirement identities
pub struct LogicTreeEvaluator;

impl LogicTreeEvaluator {
    /// Extract requirement identities from a serialized logic tree
    ///
    /// Malformed input (unparsable JSON, wrong shape) yields the empty
    /// set; extraction is advisory and never fails.
    pub fn referenced_requirements(logic_tree: &str) -> HashSet<RequirementId> {
        if logic_tree.is_empty() {
            return HashSet::new();
        }

        match serde_json::from_str::<Value>(logic_tree) {
            Ok(tree) => Self::referenced_in_value(&tree),
            Err(error) => {
                tracing::warn!(%error, "Failed to parse logic tree, treating as empty");
                HashSet::new()
            }
        }
    }

    /// Extract requirement identities from an already-parsed tree
    pub fn referenced_in_value(tree: &Value) -> HashSet<RequirementId> {
        let mut ids = HashSet::new();
        Self::collect(tree, &mut ids);
        ids
    }

    fn collect(node: &Value, ids: &mut HashSet<RequirementId>) {
        match node {
            Value::Object(fields) => {
                if fields.get("op").and_then(Value::as_str) == Some("has") {
                    if let Some(id) = fields.get("id").and_then(Value::as_str) {
                        ids.insert(RequirementId::new(id));
                    }
                }
                // Recurse regardless of operator; AND/OR/NOT/K_OF_N are not
                // distinguished for extraction purposes
                if let Some(Value::Array(children)) = fields.get("children") {
                    for child in children {
                        Self::collect(child, ids);
                    }
                }
            }
            Value::Array(items) => {
                for item in items {
                    Self::collect(item, ids);
                }
            }
            _ => {}
        }
    }
}
