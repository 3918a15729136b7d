pub mod catalog;
pub mod formatter;
pub mod index;
pub mod localizer;
pub mod render;
pub mod types;

#[cfg(feature = "http")]
pub use catalog::HttpProvider;
pub use catalog::{
    Catalog, DataProvider, Dataset, Datasets, DirectoryProvider, LoadError, MemoryProvider,
    ReferenceWarning, assemble, lint_references, parse_dataset,
};
pub use index::{CatalogIndex, ReferenceIndex};
pub use localizer::{DEFAULT_LANGUAGE, FALLBACK_LANGUAGE, Localizer, localize};
pub use render::{
    ActionEntry, Card, ConditionFragment, NoticeEntry, PermissionSection, compose_card,
    render_condition,
};
pub use types::{
    ActionRecord, ConditionNode, ConditionRecord, Envelope, LicenseRecord, LocalizedText,
    NoticeRecord, Operator, PermissionRecord, Record, RecordId, Reference, TextVariant,
};
