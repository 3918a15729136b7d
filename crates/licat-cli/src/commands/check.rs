//! Implementation of the `licat check` command.

use licat::Catalog;
use miette::{IntoDiagnostic, Result};
use owo_colors::OwoColorize;

/// Arguments for the check command.
#[derive(Debug, clap::Args)]
pub struct CheckArgs {
    /// Output as JSON
    #[arg(long)]
    pub json: bool,

    /// Exit with non-zero code if any warning is found
    #[arg(long)]
    pub strict: bool,
}

/// Run the check command.
pub fn run_check(args: CheckArgs, catalog: &Catalog) -> Result<i32> {
    let warnings = catalog.lint();

    if args.json {
        let json_output = serde_json::to_string_pretty(&warnings).into_diagnostic()?;
        println!("{}", json_output);
    } else if warnings.is_empty() {
        println!(
            "{} {} license(s), no dangling references",
            "ok:".green(),
            catalog.licenses().len()
        );
    } else {
        for warning in &warnings {
            println!("{} {}", "warning:".yellow(), warning);
        }
        println!("\n{} warning(s)", warnings.len());
    }

    if args.strict && !warnings.is_empty() {
        Ok(exitcode::DATAERR)
    } else {
        Ok(exitcode::OK)
    }
}
