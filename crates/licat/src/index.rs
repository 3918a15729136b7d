//! Id-keyed lookup tables for cross-dataset references.

use std::collections::HashMap;

use tracing::debug;

use crate::types::{ActionRecord, ConditionRecord, NoticeRecord, Record, RecordId};

/// Read-only mapping from record id to record.
///
/// Built once after the datasets load and never mutated afterward. When the
/// input repeats an id, the last record wins, the same as inserting into a
/// map in order.
///
/// # Example
///
/// ```
/// use licat::{ActionRecord, RecordId, ReferenceIndex};
///
/// let index = ReferenceIndex::build(vec![
///     ActionRecord { id: RecordId::new("use"), ..Default::default() },
/// ]);
/// assert!(index.get("use").is_some());
/// assert!(index.get("modify").is_none());
/// ```
#[derive(Debug, Clone)]
pub struct ReferenceIndex<T> {
    records: HashMap<RecordId, T>,
}

impl<T> Default for ReferenceIndex<T> {
    fn default() -> Self {
        Self {
            records: HashMap::new(),
        }
    }
}

impl<T: Record> ReferenceIndex<T> {
    /// Index records by id, later duplicates replacing earlier ones.
    pub fn build(records: impl IntoIterator<Item = T>) -> Self {
        let mut map = HashMap::new();
        for record in records {
            map.insert(record.id().clone(), record);
        }
        Self { records: map }
    }
}

impl<T: Record> FromIterator<T> for ReferenceIndex<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Self::build(iter)
    }
}

impl<T> ReferenceIndex<T> {
    /// Look up a record. A missing id is an ordinary outcome.
    pub fn get(&self, id: &str) -> Option<&T> {
        self.records.get(id)
    }

    pub fn contains(&self, id: &str) -> bool {
        self.records.contains_key(id)
    }

    /// Number of distinct ids.
    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

/// The three indices a license resolves its references through.
#[derive(Debug, Clone, Default)]
pub struct CatalogIndex {
    pub actions: ReferenceIndex<ActionRecord>,
    pub conditions: ReferenceIndex<ConditionRecord>,
    pub notices: ReferenceIndex<NoticeRecord>,
}

impl CatalogIndex {
    pub fn build(
        actions: impl IntoIterator<Item = ActionRecord>,
        conditions: impl IntoIterator<Item = ConditionRecord>,
        notices: impl IntoIterator<Item = NoticeRecord>,
    ) -> Self {
        let index = Self {
            actions: ReferenceIndex::build(actions),
            conditions: ReferenceIndex::build(conditions),
            notices: ReferenceIndex::build(notices),
        };
        debug!(
            actions = index.actions.len(),
            conditions = index.conditions.len(),
            notices = index.notices.len(),
            "built reference indices"
        );
        index
    }
}
