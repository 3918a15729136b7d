//! licat CLI entry point.
//!
//! Provides command-line tools for license metadata catalogs:
//! - `licat render` - Print the catalog as text, HTML, or JSON
//! - `licat list` - Summarize licenses in a table
//! - `licat check` - Report dangling references

mod commands;
mod output;

use std::io::stderr;
use std::path::PathBuf;
use std::process::exit;

use clap::{Parser, Subcommand, ValueEnum};
use commands::{run_check, run_list, run_render, CheckArgs, ListArgs, RenderArgs};
use licat::{Catalog, DataProvider, DirectoryProvider, HttpProvider, Localizer};
use output::LoadDiagnostic;
use tracing::debug;
use tracing_subscriber::EnvFilter;

/// License catalog tools.
#[derive(Debug, Parser)]
#[command(name = "licat")]
#[command(about = "License metadata catalog tools", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Directory containing licenses.json, actions.json, conditions.json, notices.json
    #[arg(long, env = "LICAT_DATA", default_value = "data", global = true)]
    pub data: PathBuf,

    /// Base URL serving the dataset files (instead of --data)
    #[arg(long, global = true, conflicts_with = "data")]
    pub url: Option<String>,

    /// Preferred language for localized text
    #[arg(long, env = "LICAT_LANG", default_value = licat::DEFAULT_LANGUAGE, global = true)]
    pub lang: String,

    /// Color output control
    #[arg(long, value_enum, default_value_t = ColorWhen::Auto, global = true)]
    pub color: ColorWhen,

    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

/// When to use colored output.
#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum ColorWhen {
    Auto,
    Always,
    Never,
}

/// CLI subcommands.
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Render license cards
    Render(RenderArgs),
    /// List licenses with permission and notice counts
    List(ListArgs),
    /// Report dangling references and unknown condition nodes
    Check(CheckArgs),
}

/// Set up color output based on user preference.
fn setup_colors(color_when: ColorWhen) {
    match color_when {
        ColorWhen::Auto => {
            // owo-colors automatically checks TTY, NO_COLOR, FORCE_COLOR
        }
        ColorWhen::Always => {
            owo_colors::set_override(true);
        }
        ColorWhen::Never => {
            owo_colors::set_override(false);
        }
    }
}

/// Log to stderr. `RUST_LOG` wins; otherwise warnings, or debug with `--verbose`.
fn setup_logging(verbose: bool) {
    let default_directive = if verbose { "debug" } else { "warn" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_directive));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(stderr)
        .init();
}

fn provider(cli: &Cli) -> Box<dyn DataProvider> {
    match &cli.url {
        Some(url) => {
            debug!(%url, "loading catalog over HTTP");
            Box::new(HttpProvider::new(url.as_str()))
        }
        None => {
            debug!(data = %cli.data.display(), "loading catalog from directory");
            Box::new(DirectoryProvider::new(&cli.data))
        }
    }
}

fn main() -> miette::Result<()> {
    let cli = Cli::parse();
    setup_colors(cli.color);
    setup_logging(cli.verbose);

    miette::set_hook(Box::new(|_| {
        Box::new(
            miette::MietteHandlerOpts::new()
                .terminal_links(true)
                .unicode(true)
                .context_lines(2)
                .build(),
        )
    }))?;

    let localizer = Localizer::with_language(cli.lang.as_str());
    let data_provider = provider(&cli);
    let catalog = match Catalog::load(data_provider.as_ref(), &localizer) {
        Ok(catalog) => catalog,
        Err(e) => {
            eprintln!("{:?}", miette::Report::new(LoadDiagnostic::from(e)));
            exit(exitcode::NOINPUT);
        }
    };

    let result = match cli.command {
        Commands::Render(args) => run_render(args, &catalog),
        Commands::List(args) => run_list(args, &catalog),
        Commands::Check(args) => run_check(args, &catalog),
    };

    match result {
        Ok(code) => exit(code),
        Err(e) => {
            eprintln!("{:?}", e);
            exit(exitcode::SOFTWARE);
        }
    }
}
