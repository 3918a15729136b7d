//! Implementation of the `licat render` command.

use std::fs::write;
use std::path::PathBuf;

use clap::ValueEnum;
use licat::formatter::{format_html, format_text};
use licat::Catalog;
use miette::{miette, IntoDiagnostic, Result};

/// Output document format.
#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum RenderFormat {
    Text,
    Html,
    Json,
}

/// Arguments for the render command.
#[derive(Debug, clap::Args)]
pub struct RenderArgs {
    /// Output format
    #[arg(long, value_enum, default_value_t = RenderFormat::Text)]
    pub format: RenderFormat,

    /// Write to this file instead of stdout
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Document title for HTML output
    #[arg(long, default_value = "Licenses")]
    pub title: String,
}

/// Run the render command.
pub fn run_render(args: RenderArgs, catalog: &Catalog) -> Result<i32> {
    let document = match args.format {
        RenderFormat::Text => format_text(catalog.cards()),
        RenderFormat::Html => format_html(catalog.cards(), &args.title),
        RenderFormat::Json => {
            let mut json = serde_json::to_string_pretty(catalog.cards()).into_diagnostic()?;
            json.push('\n');
            json
        }
    };

    match &args.output {
        Some(path) => {
            if let Err(e) = write(path, &document) {
                eprintln!(
                    "{:?}",
                    miette!("Cannot write output file {}: {}", path.display(), e)
                );
                return Ok(exitcode::IOERR);
            }
        }
        None => print!("{}", document),
    }
    Ok(exitcode::OK)
}
