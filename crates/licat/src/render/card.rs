//! License card composition.

use serde::Serialize;
use tracing::trace;

use crate::index::CatalogIndex;
use crate::localizer::Localizer;
use crate::render::condition::{ConditionFragment, render_condition};
use crate::render::join_label;
use crate::types::{LicenseRecord, PermissionRecord, RecordId, Reference};

/// Presentation-ready view of one license.
///
/// Empty strings mean the field is absent. `permissions` and `notices` hold
/// only entries with visible content; an empty list means the whole block is
/// omitted.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Card {
    pub name: String,
    pub spdx: String,
    pub summary: String,
    pub description: String,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub permissions: Vec<PermissionSection>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub notices: Vec<NoticeEntry>,
    /// Raw license text, verbatim.
    #[serde(skip_serializing_if = "String::is_empty")]
    pub content: String,
}

impl Card {
    /// True when the card has nothing beyond its header.
    pub fn is_header_only(&self) -> bool {
        self.permissions.is_empty() && self.notices.is_empty() && self.content.is_empty()
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct PermissionSection {
    pub summary: String,
    pub description: String,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub actions: Vec<ActionEntry>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub conditions: Option<ConditionFragment>,
}

impl PermissionSection {
    fn has_content(&self) -> bool {
        !self.summary.is_empty()
            || !self.description.is_empty()
            || !self.actions.is_empty()
            || self.conditions.is_some()
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ActionEntry {
    pub id: RecordId,
    pub name: String,
    pub description: String,
}

impl ActionEntry {
    pub fn label(&self) -> String {
        join_label(&self.name, &self.description)
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct NoticeEntry {
    pub id: RecordId,
    pub description: String,
    pub content: String,
}

impl NoticeEntry {
    pub fn label(&self) -> String {
        join_label(&self.description, &self.content)
    }
}

/// Compose the card for one license.
///
/// Never fails: dangling references and empty text are dropped, so a license
/// whose references all miss still yields a header-only card.
pub fn compose_card(license: &LicenseRecord, index: &CatalogIndex, localizer: &Localizer) -> Card {
    Card {
        name: license.name.clone(),
        spdx: license.spdx.clone(),
        summary: localizer.localize_owned(&license.summary),
        description: localizer.localize_owned(&license.description),
        permissions: license
            .permissions
            .iter()
            .filter_map(|permission| compose_permission(permission, index, localizer))
            .collect(),
        notices: license
            .notices
            .iter()
            .filter_map(|reference| resolve_notice(reference, index, localizer))
            .collect(),
        content: license.content.clone(),
    }
}

/// Returns `None` when nothing about the permission is displayable.
fn compose_permission(
    permission: &PermissionRecord,
    index: &CatalogIndex,
    localizer: &Localizer,
) -> Option<PermissionSection> {
    let section = PermissionSection {
        summary: localizer.localize_owned(&permission.summary),
        description: localizer.localize_owned(&permission.description),
        actions: permission
            .actions
            .iter()
            .filter_map(|reference| resolve_action(reference, index, localizer))
            .collect(),
        conditions: permission
            .condition_head
            .as_ref()
            .and_then(|head| render_condition(head, &index.conditions, localizer, 0)),
    };
    section.has_content().then_some(section)
}

fn resolve_action(
    reference: &Reference,
    index: &CatalogIndex,
    localizer: &Localizer,
) -> Option<ActionEntry> {
    let Some(action) = index.actions.get(&reference.id) else {
        trace!(action = %reference.id, "skipping dangling action reference");
        return None;
    };
    let entry = ActionEntry {
        id: action.id.clone(),
        name: localizer.localize_owned(&action.name),
        description: localizer.localize_owned(&action.description),
    };
    (!entry.name.is_empty() || !entry.description.is_empty()).then_some(entry)
}

fn resolve_notice(
    reference: &Reference,
    index: &CatalogIndex,
    localizer: &Localizer,
) -> Option<NoticeEntry> {
    let Some(notice) = index.notices.get(&reference.id) else {
        trace!(notice = %reference.id, "skipping dangling notice reference");
        return None;
    };
    let entry = NoticeEntry {
        id: notice.id.clone(),
        description: localizer.localize_owned(&notice.description),
        content: localizer.localize_owned(&notice.content),
    };
    (!entry.description.is_empty() || !entry.content.is_empty()).then_some(entry)
}
