//! Condition tree rendering.

use serde::Serialize;
use tracing::{trace, warn};

use crate::index::ReferenceIndex;
use crate::localizer::Localizer;
use crate::render::join_label;
use crate::types::{ConditionNode, ConditionRecord, Operator};

/// A rendered, pruned condition tree.
///
/// Every fragment has visible content: leaves carry a name or description,
/// and groups carry at least one child.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "camelCase")]
pub enum ConditionFragment {
    #[serde(rename_all = "camelCase")]
    Leaf {
        depth: usize,
        condition_type: String,
        name: String,
        description: String,
    },
    Group {
        depth: usize,
        operator: Operator,
        children: Vec<ConditionFragment>,
    },
}

impl ConditionFragment {
    /// Nesting level, zero at the tree root. Only affects indentation.
    pub fn depth(&self) -> usize {
        match self {
            ConditionFragment::Leaf { depth, .. } | ConditionFragment::Group { depth, .. } => *depth,
        }
    }

    /// Display text of a leaf, `"{name}: {description}"` when both exist.
    ///
    /// Groups have no label of their own and return `None`.
    pub fn label(&self) -> Option<String> {
        match self {
            ConditionFragment::Leaf {
                name, description, ..
            } => Some(join_label(name, description)),
            ConditionFragment::Group { .. } => None,
        }
    }

    /// Number of leaves in this fragment.
    pub fn leaf_count(&self) -> usize {
        match self {
            ConditionFragment::Leaf { .. } => 1,
            ConditionFragment::Group { children, .. } => {
                children.iter().map(ConditionFragment::leaf_count).sum()
            }
        }
    }
}

/// Render a condition tree rooted at `node`, starting at `depth`.
///
/// Returns `None` when nothing in the tree is displayable:
/// - a leaf whose id is dangling, or whose name and description both
///   localize to the empty string
/// - a group none of whose children rendered
/// - a node of unknown type
///
/// Children render at `depth + 1`, in their original order.
pub fn render_condition(
    node: &ConditionNode,
    conditions: &ReferenceIndex<ConditionRecord>,
    localizer: &Localizer,
    depth: usize,
) -> Option<ConditionFragment> {
    match node {
        ConditionNode::Leaf { id } => {
            let Some(condition) = conditions.get(id) else {
                trace!(condition = %id, "skipping dangling condition reference");
                return None;
            };
            let name = localizer.localize_owned(&condition.name);
            let description = localizer.localize_owned(&condition.description);
            if name.is_empty() && description.is_empty() {
                return None;
            }
            Some(ConditionFragment::Leaf {
                depth,
                condition_type: condition.condition_type.clone(),
                name,
                description,
            })
        }
        ConditionNode::Group { operator, children } => {
            let rendered: Vec<ConditionFragment> = children
                .iter()
                .filter_map(|child| render_condition(child, conditions, localizer, depth + 1))
                .collect();
            if rendered.is_empty() {
                return None;
            }
            Some(ConditionFragment::Group {
                depth,
                operator: *operator,
                children: rendered,
            })
        }
        ConditionNode::Unknown { kind } => {
            warn!(kind = ?kind, "ignoring condition node of unknown type");
            None
        }
    }
}
