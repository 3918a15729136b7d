//! Reference checks over license records.
//!
//! Rendering drops dangling references and unknown condition nodes without a
//! trace. These checks surface them so data problems can be fixed at the
//! source.

use std::fmt::{Display, Formatter, Result as FmtResult};

use serde::Serialize;

use crate::index::CatalogIndex;
use crate::types::{ConditionNode, LicenseRecord, RecordId};

/// A data-quality problem found in a license record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "camelCase")]
pub enum ReferenceWarning {
    /// A permission refers to an action id that has no record.
    MissingAction { license: String, action: RecordId },
    /// A condition leaf refers to a condition id that has no record.
    MissingCondition {
        license: String,
        condition: RecordId,
    },
    /// A license refers to a notice id that has no record.
    MissingNotice { license: String, notice: RecordId },
    /// A condition node has a type other than LEAF, AND, or OR.
    #[serde(rename_all = "camelCase")]
    UnknownConditionNode {
        license: String,
        node_type: Option<String>,
    },
}

impl ReferenceWarning {
    /// Display name of the license the warning belongs to.
    pub fn license(&self) -> &str {
        match self {
            ReferenceWarning::MissingAction { license, .. }
            | ReferenceWarning::MissingCondition { license, .. }
            | ReferenceWarning::MissingNotice { license, .. }
            | ReferenceWarning::UnknownConditionNode { license, .. } => license,
        }
    }
}

impl Display for ReferenceWarning {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        match self {
            ReferenceWarning::MissingAction { license, action } => {
                write!(f, "license '{license}': unknown action '{action}'")
            }
            ReferenceWarning::MissingCondition { license, condition } => {
                write!(f, "license '{license}': unknown condition '{condition}'")
            }
            ReferenceWarning::MissingNotice { license, notice } => {
                write!(f, "license '{license}': unknown notice '{notice}'")
            }
            ReferenceWarning::UnknownConditionNode {
                license,
                node_type: Some(node_type),
            } => {
                write!(f, "license '{license}': condition node has unknown type '{node_type}'")
            }
            ReferenceWarning::UnknownConditionNode {
                license,
                node_type: None,
            } => {
                write!(f, "license '{license}': condition node has no type")
            }
        }
    }
}

/// Check every reference made by `licenses` against `index`.
///
/// Warnings follow license order, then permission order (actions before the
/// condition tree, which is walked depth first), then notices. A reference
/// that misses twice is reported twice.
pub fn lint_references(licenses: &[LicenseRecord], index: &CatalogIndex) -> Vec<ReferenceWarning> {
    let mut warnings = Vec::new();
    for license in licenses {
        let name = license_label(license);
        for permission in &license.permissions {
            for reference in &permission.actions {
                if !index.actions.contains(&reference.id) {
                    warnings.push(ReferenceWarning::MissingAction {
                        license: name.clone(),
                        action: reference.id.clone(),
                    });
                }
            }
            if let Some(head) = &permission.condition_head {
                lint_condition(head, &name, index, &mut warnings);
            }
        }
        for reference in &license.notices {
            if !index.notices.contains(&reference.id) {
                warnings.push(ReferenceWarning::MissingNotice {
                    license: name.clone(),
                    notice: reference.id.clone(),
                });
            }
        }
    }
    warnings
}

fn lint_condition(
    node: &ConditionNode,
    license: &str,
    index: &CatalogIndex,
    warnings: &mut Vec<ReferenceWarning>,
) {
    match node {
        ConditionNode::Leaf { id } => {
            if !index.conditions.contains(id) {
                warnings.push(ReferenceWarning::MissingCondition {
                    license: license.to_string(),
                    condition: id.clone(),
                });
            }
        }
        ConditionNode::Group { children, .. } => {
            for child in children {
                lint_condition(child, license, index, warnings);
            }
        }
        ConditionNode::Unknown { kind } => {
            warnings.push(ReferenceWarning::UnknownConditionNode {
                license: license.to_string(),
                node_type: kind.clone(),
            });
        }
    }
}

/// Licenses are named by `name`, falling back to `spdx`.
fn license_label(license: &LicenseRecord) -> String {
    if license.name.is_empty() {
        license.spdx.clone()
    } else {
        license.name.clone()
    }
}
