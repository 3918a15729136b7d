//! Table formatting utilities for CLI output.

use comfy_table::{presets, CellAlignment, ColumnConstraint, ContentArrangement, Table, Width};

/// Summary of one license card.
pub struct LicenseRow {
    /// License display name.
    pub name: String,
    /// SPDX identifier.
    pub spdx: String,
    /// Number of permissions with visible content.
    pub permissions: usize,
    /// Number of resolved notices.
    pub notices: usize,
}

/// Format license rows as an ASCII table.
pub fn format_license_table(rows: &[LicenseRow]) -> Table {
    let mut table = Table::new();
    table.load_preset(presets::UTF8_BORDERS_ONLY);
    table.set_content_arrangement(ContentArrangement::Dynamic);
    table.set_header(vec!["License", "SPDX", "Permissions", "Notices"]);

    for row in rows {
        table.add_row(vec![
            row.name.clone(),
            row.spdx.clone(),
            row.permissions.to_string(),
            row.notices.to_string(),
        ]);
    }

    for index in [2, 3] {
        if let Some(column) = table.column_mut(index) {
            column.set_cell_alignment(CellAlignment::Right);
        }
    }
    if let Some(column) = table.column_mut(0) {
        column.set_constraint(ColumnConstraint::UpperBoundary(Width::Fixed(48)));
    }

    table
}
