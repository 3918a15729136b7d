mod condition;
mod nullable;
mod record_id;
mod records;
mod text;

pub use condition::{ConditionNode, Operator};
pub use record_id::RecordId;
pub use records::{
    ActionRecord, ConditionRecord, Envelope, LicenseRecord, NoticeRecord, PermissionRecord,
    Record, Reference,
};
pub use text::{LocalizedText, TextVariant};
