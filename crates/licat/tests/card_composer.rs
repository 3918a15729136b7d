//! Tests for composing license cards.

use licat::{
    ActionRecord, CatalogIndex, ConditionFragment, ConditionNode, ConditionRecord, LicenseRecord,
    Localizer, NoticeRecord, Operator, PermissionRecord, RecordId, Reference, TextVariant,
    compose_card,
};

fn en(s: &str) -> Vec<TextVariant> {
    vec![TextVariant::new("en", s)]
}

fn index() -> CatalogIndex {
    CatalogIndex::build(
        vec![
            ActionRecord {
                id: RecordId::new("use"),
                name: en("Use"),
                description: en("Use the software"),
            },
            ActionRecord {
                id: RecordId::new("silent"),
                ..Default::default()
            },
        ],
        vec![ConditionRecord {
            id: RecordId::new("c1"),
            condition_type: "OBLIGATION".to_string(),
            name: en("Disclose Source"),
            description: vec![],
        }],
        vec![
            NoticeRecord {
                id: RecordId::new("n1"),
                description: en("Copyright notice"),
                content: en("Keep the copyright line"),
            },
            NoticeRecord {
                id: RecordId::new("hollow"),
                ..Default::default()
            },
        ],
    )
}

fn license(name: &str) -> LicenseRecord {
    LicenseRecord {
        name: name.to_string(),
        spdx: name.to_string(),
        ..Default::default()
    }
}

// =========================================================================
// Header
// =========================================================================

#[test]
fn header_only_card_for_bare_license() {
    let card = compose_card(&license("MIT"), &CatalogIndex::default(), &Localizer::new());
    assert_eq!(card.name, "MIT");
    assert_eq!(card.spdx, "MIT");
    assert_eq!(card.summary, "");
    assert_eq!(card.description, "");
    assert!(card.permissions.is_empty());
    assert!(card.notices.is_empty());
    assert!(card.is_header_only());
}

#[test]
fn header_fields_are_localized_and_content_is_verbatim() {
    let record = LicenseRecord {
        summary: vec![
            TextVariant::new("en", "Permissive"),
            TextVariant::new("ja", "寛容"),
        ],
        description: en("A short license"),
        content: "Permission is hereby granted...\n\nTHE SOFTWARE IS PROVIDED \"AS IS\"".to_string(),
        ..license("MIT")
    };
    let card = compose_card(&record, &index(), &Localizer::new());
    assert_eq!(card.summary, "寛容");
    assert_eq!(card.description, "A short license");
    assert_eq!(card.content, record.content);
    assert!(!card.is_header_only());
}

// =========================================================================
// Permissions
// =========================================================================

#[test]
fn permission_with_nothing_resolvable_is_dropped() {
    let record = LicenseRecord {
        permissions: vec![PermissionRecord {
            actions: vec![Reference::new("missing-action")],
            condition_head: Some(ConditionNode::and(vec![])),
            ..Default::default()
        }],
        ..license("X")
    };
    let card = compose_card(&record, &index(), &Localizer::new());
    assert!(card.permissions.is_empty());
    assert!(card.is_header_only());
}

#[test]
fn actions_without_text_are_dropped() {
    let record = LicenseRecord {
        permissions: vec![PermissionRecord {
            actions: vec![
                Reference::new("silent"),
                Reference::new("use"),
                Reference::new("nope"),
            ],
            ..Default::default()
        }],
        ..license("X")
    };
    let card = compose_card(&record, &index(), &Localizer::new());
    assert_eq!(card.permissions.len(), 1);
    let actions = &card.permissions[0].actions;
    assert_eq!(actions.len(), 1);
    assert_eq!(actions[0].id.as_str(), "use");
    assert_eq!(actions[0].label(), "Use: Use the software");
}

#[test]
fn permission_kept_for_summary_alone() {
    let record = LicenseRecord {
        permissions: vec![PermissionRecord {
            summary: en("Commercial use"),
            ..Default::default()
        }],
        ..license("X")
    };
    let card = compose_card(&record, &index(), &Localizer::new());
    assert_eq!(card.permissions.len(), 1);
    assert_eq!(card.permissions[0].summary, "Commercial use");
    assert!(card.permissions[0].actions.is_empty());
    assert!(card.permissions[0].conditions.is_none());
}

#[test]
fn permission_kept_for_conditions_alone() {
    let record = LicenseRecord {
        permissions: vec![PermissionRecord {
            condition_head: Some(ConditionNode::leaf("c1")),
            ..Default::default()
        }],
        ..license("X")
    };
    let card = compose_card(&record, &index(), &Localizer::new());
    assert_eq!(card.permissions.len(), 1);
    assert_eq!(
        card.permissions[0]
            .conditions
            .as_ref()
            .and_then(ConditionFragment::label)
            .as_deref(),
        Some("Disclose Source")
    );
}

#[test]
fn condition_tree_drops_dangling_leaf() {
    let record = LicenseRecord {
        permissions: vec![PermissionRecord {
            summary: en("Modify"),
            condition_head: Some(ConditionNode::and(vec![
                ConditionNode::leaf("c1"),
                ConditionNode::leaf("c2"),
            ])),
            ..Default::default()
        }],
        ..license("GPL-3.0")
    };
    let card = compose_card(&record, &index(), &Localizer::new());
    let Some(ConditionFragment::Group {
        operator, children, ..
    }) = &card.permissions[0].conditions
    else {
        panic!("expected an AND group");
    };
    assert_eq!(*operator, Operator::And);
    assert_eq!(children.len(), 1);
    assert_eq!(children[0].label().as_deref(), Some("Disclose Source"));
}

#[test]
fn permission_order_is_preserved() {
    let record = LicenseRecord {
        permissions: vec![
            PermissionRecord {
                summary: en("first"),
                ..Default::default()
            },
            PermissionRecord::default(),
            PermissionRecord {
                summary: en("third"),
                ..Default::default()
            },
        ],
        ..license("X")
    };
    let card = compose_card(&record, &index(), &Localizer::new());
    let summaries: Vec<&str> = card
        .permissions
        .iter()
        .map(|p| p.summary.as_str())
        .collect();
    assert_eq!(summaries, vec!["first", "third"]);
}

// =========================================================================
// Notices
// =========================================================================

#[test]
fn notices_resolve_and_drop_empty_or_dangling() {
    let record = LicenseRecord {
        notices: vec![
            Reference::new("hollow"),
            Reference::new("n1"),
            Reference::new("ghost"),
        ],
        ..license("X")
    };
    let card = compose_card(&record, &index(), &Localizer::new());
    assert_eq!(card.notices.len(), 1);
    assert_eq!(card.notices[0].id.as_str(), "n1");
    assert_eq!(card.notices[0].label(), "Copyright notice: Keep the copyright line");
}

// =========================================================================
// Idempotence
// =========================================================================

#[test]
fn composing_twice_gives_identical_cards() {
    let record = LicenseRecord {
        summary: en("Permissive"),
        permissions: vec![PermissionRecord {
            summary: en("Use"),
            actions: vec![Reference::new("use"), Reference::new("nope")],
            condition_head: Some(ConditionNode::or(vec![
                ConditionNode::leaf("c1"),
                ConditionNode::leaf("c9"),
            ])),
            ..Default::default()
        }],
        notices: vec![Reference::new("n1")],
        content: "text".to_string(),
        ..license("MIT")
    };
    let index = index();
    let localizer = Localizer::new();
    assert_eq!(
        compose_card(&record, &index, &localizer),
        compose_card(&record, &index, &localizer)
    );
}
