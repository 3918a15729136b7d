use std::fmt::{Display, Formatter, Result as FmtResult};

use serde::{Deserialize, Serialize};

use super::RecordId;

/// Logical connective of a condition group.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Operator {
    #[serde(rename = "AND")]
    And,
    #[serde(rename = "OR")]
    Or,
}

impl Operator {
    pub fn as_str(self) -> &'static str {
        match self {
            Operator::And => "AND",
            Operator::Or => "OR",
        }
    }
}

impl Display for Operator {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        f.write_str(self.as_str())
    }
}

/// A node of a permission's boolean condition tree.
///
/// Trees are finite and each one is owned by exactly one permission.
/// In JSON a node is tagged by its `type` field:
///
/// ```
/// use licat::ConditionNode;
///
/// let node: ConditionNode = serde_json::from_str(
///     r#"{"type": "AND", "children": [{"type": "LEAF", "ref": "c1"}]}"#,
/// ).unwrap();
/// assert_eq!(node, ConditionNode::and(vec![ConditionNode::leaf("c1")]));
/// ```
///
/// A `type` outside `LEAF`/`AND`/`OR` (or no `type` at all) reads as
/// [`ConditionNode::Unknown`] instead of failing the whole dataset.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "RawConditionNode", into = "RawConditionNode")]
pub enum ConditionNode {
    /// Reference to a condition record.
    Leaf { id: RecordId },
    /// Group of child nodes joined by a connective.
    Group {
        operator: Operator,
        children: Vec<ConditionNode>,
    },
    /// Node with an unrecognized type. Renders nothing.
    Unknown { kind: Option<String> },
}

impl ConditionNode {
    pub fn leaf(id: impl Into<RecordId>) -> Self {
        ConditionNode::Leaf { id: id.into() }
    }

    pub fn and(children: Vec<ConditionNode>) -> Self {
        ConditionNode::Group {
            operator: Operator::And,
            children,
        }
    }

    pub fn or(children: Vec<ConditionNode>) -> Self {
        ConditionNode::Group {
            operator: Operator::Or,
            children,
        }
    }
}

/// Wire shape of a condition node: a flat object discriminated by `type`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
struct RawConditionNode {
    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    kind: Option<String>,
    #[serde(rename = "ref", skip_serializing_if = "Option::is_none")]
    id: Option<RecordId>,
    #[serde(skip_serializing_if = "Option::is_none")]
    children: Option<Vec<RawConditionNode>>,
}

impl From<RawConditionNode> for ConditionNode {
    fn from(raw: RawConditionNode) -> Self {
        let RawConditionNode { kind, id, children } = raw;
        let children = move || {
            children
                .unwrap_or_default()
                .into_iter()
                .map(ConditionNode::from)
                .collect()
        };
        match kind.as_deref() {
            Some("LEAF") => ConditionNode::Leaf {
                id: id.unwrap_or_default(),
            },
            Some("AND") => ConditionNode::and(children()),
            Some("OR") => ConditionNode::or(children()),
            _ => ConditionNode::Unknown { kind },
        }
    }
}

impl From<ConditionNode> for RawConditionNode {
    fn from(node: ConditionNode) -> Self {
        match node {
            ConditionNode::Leaf { id } => RawConditionNode {
                kind: Some("LEAF".to_string()),
                id: Some(id),
                children: None,
            },
            ConditionNode::Group { operator, children } => RawConditionNode {
                kind: Some(operator.as_str().to_string()),
                id: None,
                children: Some(children.into_iter().map(RawConditionNode::from).collect()),
            },
            ConditionNode::Unknown { kind } => RawConditionNode {
                kind,
                id: None,
                children: None,
            },
        }
    }
}
