//! Tests for id-keyed reference indices.

use licat::{
    ActionRecord, CatalogIndex, ConditionRecord, NoticeRecord, RecordId, ReferenceIndex,
    TextVariant,
};

fn action(id: &str, name: &str) -> ActionRecord {
    ActionRecord {
        id: RecordId::new(id),
        name: vec![TextVariant::new("en", name)],
        description: vec![],
    }
}

#[test]
fn lookup_by_id() {
    let index = ReferenceIndex::build(vec![action("use", "Use"), action("modify", "Modify")]);
    assert_eq!(index.len(), 2);
    assert_eq!(index.get("use").unwrap().name[0].text, "Use");
    assert_eq!(index.get("modify").unwrap().name[0].text, "Modify");
}

#[test]
fn absent_id_is_none() {
    let index = ReferenceIndex::build(vec![action("use", "Use")]);
    assert!(index.get("distribute").is_none());
    assert!(!index.contains("distribute"));
    assert!(index.get("").is_none());
}

#[test]
fn duplicate_ids_keep_last_record() {
    let index = ReferenceIndex::build(vec![
        action("use", "first"),
        action("modify", "Modify"),
        action("use", "second"),
        action("use", "third"),
    ]);
    assert_eq!(index.len(), 2);
    assert_eq!(index.get("use").unwrap().name[0].text, "third");
}

#[test]
fn empty_index() {
    let index: ReferenceIndex<NoticeRecord> = ReferenceIndex::default();
    assert!(index.is_empty());
    assert!(index.get("anything").is_none());
}

#[test]
fn collects_from_iterator() {
    let index: ReferenceIndex<ActionRecord> =
        ["a", "b", "a"].iter().map(|id| action(id, id)).collect();
    assert_eq!(index.len(), 2);
    assert!(index.contains("a"));
    assert!(index.contains("b"));
}

#[test]
fn catalog_index_builds_all_three() {
    let index = CatalogIndex::build(
        vec![action("use", "Use")],
        vec![ConditionRecord {
            id: RecordId::new("c1"),
            condition_type: "OBLIGATION".to_string(),
            ..Default::default()
        }],
        vec![
            NoticeRecord {
                id: RecordId::new("n1"),
                ..Default::default()
            },
            NoticeRecord {
                id: RecordId::new("n2"),
                ..Default::default()
            },
        ],
    );
    assert_eq!(index.actions.len(), 1);
    assert_eq!(index.conditions.get("c1").unwrap().condition_type, "OBLIGATION");
    assert_eq!(index.notices.len(), 2);
}

#[test]
fn lookups_accept_str_and_record_id() {
    let index = ReferenceIndex::build(vec![action("use", "Use"), action("modify", "Modify")]);
    let id = RecordId::new("modify");
    assert_eq!(index.get(&id).unwrap().id, id);
    assert_eq!(index.get("use").unwrap().name[0].text, "Use");
    assert!(index.contains(&id));
    assert!(!index.contains("Use"));
}
