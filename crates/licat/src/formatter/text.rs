use crate::render::{Card, ConditionFragment, PermissionSection};

/// Spaces per indentation level.
const INDENT: usize = 2;

/// Formats cards as indented plain text.
///
/// Each card starts with the license name; its fields and blocks are indented
/// beneath it, and cards are separated by a blank line. Condition fragments
/// add one level per tree depth below their `Conditions:` heading.
pub fn format_text(cards: &[Card]) -> String {
    let mut out = Lines::default();
    for (i, card) in cards.iter().enumerate() {
        if i > 0 {
            out.blank();
        }
        write_card(&mut out, card);
    }
    out.finish()
}

fn write_card(out: &mut Lines, card: &Card) {
    out.push(0, &card.name);
    out.field(1, "SPDX", &card.spdx);
    out.field(1, "Summary", &card.summary);
    out.field(1, "Description", &card.description);

    if !card.permissions.is_empty() {
        out.push(1, "Permissions:");
        for (i, permission) in card.permissions.iter().enumerate() {
            out.push(2, &format!("[{}]", i + 1));
            write_permission(out, permission);
        }
    }

    if !card.notices.is_empty() {
        out.push(1, "Notices:");
        for notice in &card.notices {
            out.push(2, &notice.label());
        }
    }

    if !card.content.is_empty() {
        out.push(1, "Content:");
        for line in card.content.lines() {
            out.push(2, line);
        }
    }
}

fn write_permission(out: &mut Lines, permission: &PermissionSection) {
    out.field(3, "Summary", &permission.summary);
    out.field(3, "Description", &permission.description);
    if !permission.actions.is_empty() {
        out.push(3, "Actions:");
        for action in &permission.actions {
            out.push(4, &action.label());
        }
    }
    if let Some(conditions) = &permission.conditions {
        out.push(3, "Conditions:");
        write_condition(out, conditions, 4);
    }
}

fn write_condition(out: &mut Lines, fragment: &ConditionFragment, base: usize) {
    let level = base + fragment.depth();
    match fragment {
        ConditionFragment::Leaf { condition_type, .. } => {
            let label = fragment.label().unwrap_or_default();
            out.push(level, &format!("LEAF ({condition_type}): {label}"));
        }
        ConditionFragment::Group {
            operator, children, ..
        } => {
            out.push(level, &format!("{operator}:"));
            for child in children {
                write_condition(out, child, base);
            }
        }
    }
}

#[derive(Default)]
struct Lines {
    lines: Vec<String>,
}

impl Lines {
    fn push(&mut self, level: usize, text: &str) {
        if text.is_empty() {
            self.lines.push(String::new());
        } else {
            self.lines.push(format!("{}{text}", " ".repeat(level * INDENT)));
        }
    }

    /// Writes `label: value`, skipping empty values.
    fn field(&mut self, level: usize, label: &str, value: &str) {
        if !value.is_empty() {
            self.push(level, &format!("{label}: {value}"));
        }
    }

    fn blank(&mut self) {
        self.lines.push(String::new());
    }

    fn finish(self) -> String {
        if self.lines.is_empty() {
            return String::new();
        }
        let mut text = self.lines.join("\n");
        text.push('\n');
        text
    }
}
