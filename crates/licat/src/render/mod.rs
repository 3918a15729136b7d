//! Resolution of license records into presentation-ready cards.
//!
//! Rendering is pure: it reads the reference indices and the localizer and
//! never fails. Anything that cannot be resolved, such as a dangling id or a
//! field with no text, is left out at the point where it is found.

mod card;
mod condition;

pub use card::{ActionEntry, Card, NoticeEntry, PermissionSection, compose_card};
pub use condition::{ConditionFragment, render_condition};

/// Joins a heading and detail as `"{head}: {detail}"`, or returns whichever
/// one is nonempty.
pub(crate) fn join_label(head: &str, detail: &str) -> String {
    match (head.is_empty(), detail.is_empty()) {
        (false, false) => format!("{head}: {detail}"),
        (false, true) => head.to_string(),
        (true, _) => detail.to_string(),
    }
}
