//! Implementation of the `licat list` command.

use clap::Args;
use licat::Catalog;
use miette::{IntoDiagnostic, Result};
use serde::Serialize;

use crate::output::table::{format_license_table, LicenseRow};

/// Arguments for the list command.
#[derive(Debug, Args)]
pub struct ListArgs {
    /// Output results as JSON.
    #[arg(long)]
    pub json: bool,
}

/// JSON output format for one license.
#[derive(Debug, Serialize)]
struct LicenseJson<'a> {
    name: &'a str,
    spdx: &'a str,
    permissions: usize,
    notices: usize,
}

/// Run the list command.
pub fn run_list(args: ListArgs, catalog: &Catalog) -> Result<i32> {
    let rows: Vec<LicenseRow> = catalog
        .cards()
        .iter()
        .map(|card| LicenseRow {
            name: card.name.clone(),
            spdx: card.spdx.clone(),
            permissions: card.permissions.len(),
            notices: card.notices.len(),
        })
        .collect();

    if args.json {
        let json_data: Vec<LicenseJson<'_>> = rows
            .iter()
            .map(|row| LicenseJson {
                name: &row.name,
                spdx: &row.spdx,
                permissions: row.permissions,
                notices: row.notices,
            })
            .collect();
        let json_output = serde_json::to_string_pretty(&json_data).into_diagnostic()?;
        println!("{}", json_output);
    } else {
        println!("{}", format_license_table(&rows));
    }
    Ok(exitcode::OK)
}
