//! Tabula preview - main entry point.
//!
//! Renders the sales table as plain text: loads config and records, applies
//! an optional query from the command line, and prints the resulting
//! display rows. A debug aid, not a renderer.

use std::process::ExitCode;

use tabula_core::util::truncate;
use tabula_core::{AppConfig, DisplayRow, Field, SaleRecord};
use tabula_view::{JsonFile, RecordSource, SidebarState, StaticRecords, TableState, NAV_ENTRIES};

const USAGE: &str = "\
Usage: tabula [OPTIONS]

Options:
  --records <PATH>    Load records from a JSON file instead of the demo set
  --search <TERM>     Apply a search term
  --sort <FIELD>      Sort ascending by a field (e.g. completion, total)
  --group-by <FIELD>  Group by a field (e.g. workflow, salesRep)
";

// =============================================================================
// Options
// =============================================================================

#[derive(Debug, Default)]
struct Options {
    records: Option<String>,
    search: Option<String>,
    sort: Option<Field>,
    group: Option<Field>,
}

impl Options {
    fn parse(mut args: impl Iterator<Item = String>) -> Result<Self, String> {
        let mut opts = Options::default();
        while let Some(arg) = args.next() {
            let mut value = |flag: &str| {
                args.next()
                    .ok_or_else(|| format!("{flag} requires a value"))
            };
            match arg.as_str() {
                "--records" => opts.records = Some(value("--records")?),
                "--search" => opts.search = Some(value("--search")?),
                "--sort" => {
                    let name = value("--sort")?;
                    opts.sort = Some(name.parse().map_err(|e| format!("{e}"))?);
                }
                "--group-by" => {
                    let name = value("--group-by")?;
                    opts.group = Some(name.parse().map_err(|e| format!("{e}"))?);
                }
                other => return Err(format!("unknown option: {other}")),
            }
        }
        Ok(opts)
    }
}

// =============================================================================
// Rendering
// =============================================================================

fn print_sidebar(sidebar: &SidebarState) {
    let marker = |active: bool| if active { ">" } else { " " };
    for entry in &NAV_ENTRIES {
        if sidebar.collapsed {
            println!("{} [{}]", marker(sidebar.is_active(entry)), entry.icon);
        } else {
            println!("{} {}", marker(sidebar.is_active(entry)), entry.name);
        }
    }
    println!();
}

fn print_record(record: &SaleRecord) {
    println!(
        "{:<14}  {:<18}  {:<16}  {:<14}  {:>10}  {:<20}  {:<20}  {:>4}%",
        record.id,
        truncate(&record.created_at, 18),
        truncate(&record.client.name, 16),
        truncate(&record.sales_rep, 14),
        record.total,
        truncate(&record.sale_status, 20),
        truncate(&record.workflow, 20),
        record.completion,
    );
}

// =============================================================================
// Entry point
// =============================================================================

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing::Level::INFO.into()),
        )
        .init();

    let opts = match Options::parse(std::env::args().skip(1)) {
        Ok(opts) => opts,
        Err(message) => {
            eprintln!("{message}\n\n{USAGE}");
            return ExitCode::FAILURE;
        }
    };

    // A broken or missing config never blocks the table.
    let config = match AppConfig::load() {
        Ok(config) => config,
        Err(err) => {
            tracing::warn!("using default config: {err}");
            AppConfig::default()
        }
    };

    let source: Box<dyn RecordSource> = match &opts.records {
        Some(path) => Box::new(JsonFile::new(path)),
        None => Box::new(StaticRecords),
    };
    let mut state = match TableState::from_source(source.as_ref()) {
        Ok(state) => state,
        Err(err) => {
            eprintln!("failed to load records: {err}");
            return ExitCode::FAILURE;
        }
    };

    if let Some(term) = opts.search {
        state.set_search_term(term);
    }
    if let Some(field) = opts.sort {
        state.toggle_sort(field);
    }
    if let Some(field) = opts.group {
        state.set_group(field);
    }

    print_sidebar(&SidebarState::new(&config.sidebar));
    for row in state.rows() {
        match row {
            DisplayRow::GroupHeader { label } => println!("== {label} =="),
            DisplayRow::Record(record) => print_record(record),
        }
    }
    println!();
    println!("{}", state.status_line());

    ExitCode::SUCCESS
}
