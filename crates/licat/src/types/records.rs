use serde::{Deserialize, Serialize};

use super::nullable::null_as_default;
use super::{ConditionNode, LocalizedText, RecordId};

/// Dataset wrapper: every record in a dataset file sits under `data`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Envelope<T> {
    pub data: T,
}

/// A pointer from one record to another by id.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Reference {
    #[serde(rename = "ref", deserialize_with = "null_as_default")]
    pub id: RecordId,
}

impl Reference {
    pub fn new(id: impl Into<RecordId>) -> Self {
        Self { id: id.into() }
    }
}

/// Something a license lets the licensee do, e.g. "use" or "modify".
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ActionRecord {
    #[serde(deserialize_with = "null_as_default")]
    pub id: RecordId,
    #[serde(deserialize_with = "null_as_default")]
    pub name: LocalizedText,
    #[serde(deserialize_with = "null_as_default")]
    pub description: LocalizedText,
}

/// A condition leaf target, e.g. an obligation to disclose source.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ConditionRecord {
    #[serde(deserialize_with = "null_as_default")]
    pub id: RecordId,
    /// Free-form classification such as `OBLIGATION` or `RESTRICTION`.
    #[serde(deserialize_with = "null_as_default")]
    pub condition_type: String,
    #[serde(deserialize_with = "null_as_default")]
    pub name: LocalizedText,
    #[serde(deserialize_with = "null_as_default")]
    pub description: LocalizedText,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct NoticeRecord {
    #[serde(deserialize_with = "null_as_default")]
    pub id: RecordId,
    #[serde(deserialize_with = "null_as_default")]
    pub description: LocalizedText,
    #[serde(deserialize_with = "null_as_default")]
    pub content: LocalizedText,
}

/// One grant of a license: its actions and the conditions attached to them.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct PermissionRecord {
    #[serde(deserialize_with = "null_as_default")]
    pub summary: LocalizedText,
    #[serde(deserialize_with = "null_as_default")]
    pub description: LocalizedText,
    #[serde(deserialize_with = "null_as_default")]
    pub actions: Vec<Reference>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub condition_head: Option<ConditionNode>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LicenseRecord {
    #[serde(deserialize_with = "null_as_default")]
    pub name: String,
    #[serde(deserialize_with = "null_as_default")]
    pub spdx: String,
    #[serde(deserialize_with = "null_as_default")]
    pub summary: LocalizedText,
    #[serde(deserialize_with = "null_as_default")]
    pub description: LocalizedText,
    /// Full license text. Not localized.
    #[serde(deserialize_with = "null_as_default")]
    pub content: String,
    #[serde(deserialize_with = "null_as_default")]
    pub permissions: Vec<PermissionRecord>,
    #[serde(deserialize_with = "null_as_default")]
    pub notices: Vec<Reference>,
}

/// A record addressable by id through a
/// [`ReferenceIndex`](crate::ReferenceIndex).
pub trait Record {
    fn id(&self) -> &RecordId;
}

impl Record for ActionRecord {
    fn id(&self) -> &RecordId {
        &self.id
    }
}

impl Record for ConditionRecord {
    fn id(&self) -> &RecordId {
        &self.id
    }
}

impl Record for NoticeRecord {
    fn id(&self) -> &RecordId {
        &self.id
    }
}
