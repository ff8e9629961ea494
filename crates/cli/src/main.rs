//! # gridfeed-cli
//!
//! Command-line interface for inspecting worksheet feeds.

use anyhow::{bail, Context, Result};
use clap::{Parser, Subcommand};
use gridfeed_client::{
    CellFeed, CellQuery, HttpService, ListFeed, ListQuery, ServiceRequest, Worksheet,
    WorksheetFeed,
};
use std::sync::Arc;
use tracing_subscriber::EnvFilter;

/// gridfeed - inspect Atom worksheet feeds from the command line
#[derive(Parser)]
#[command(name = "gridfeed")]
#[command(author, version, about = "Worksheet feed client", long_about = None)]
struct Cli {
    /// Worksheet feed URL
    #[arg(short, long, value_name = "URL")]
    url: String,

    /// Bearer token for the Authorization header
    #[arg(long, env = "GRIDFEED_TOKEN", hide_env_values = true)]
    token: Option<String>,

    /// Request timeout in seconds
    #[arg(long, default_value_t = 30)]
    timeout: u64,

    /// Output format (json, table)
    #[arg(short, long, default_value = "table")]
    format: OutputFormat,

    /// Enable verbose output
    #[arg(short, long)]
    verbose: bool,

    #[command(subcommand)]
    command: Command,
}

/// Output format for results.
#[derive(Clone, Copy, Default, clap::ValueEnum)]
enum OutputFormat {
    /// JSON output
    Json,
    /// Plain table output (default)
    #[default]
    Table,
}

#[derive(Subcommand)]
enum Command {
    /// List the worksheets of the feed with their metadata
    Worksheets,

    /// Print the rows of a worksheet's list feed
    Rows {
        /// Worksheet title
        #[arg(short, long)]
        worksheet: String,

        /// Return rows in reverse order
        #[arg(long)]
        reverse: bool,

        /// Sort key (default: column:timestamp)
        #[arg(long)]
        sort: Option<String>,

        /// Drop the sort parameter entirely
        #[arg(long, conflicts_with = "sort")]
        unsorted: bool,

        /// Cap on the number of returned rows
        #[arg(long, value_name = "N")]
        max: Option<u32>,
    },

    /// Print the populated cells of a worksheet's cell feed
    Cells {
        /// Worksheet title
        #[arg(short, long)]
        worksheet: String,

        #[arg(long)]
        min_row: Option<u32>,
        #[arg(long)]
        max_row: Option<u32>,
        #[arg(long)]
        min_col: Option<u32>,
        #[arg(long)]
        max_col: Option<u32>,
    },

    /// Delete a worksheet
    Delete {
        /// Worksheet title
        #[arg(short, long)]
        worksheet: String,

        /// Confirm the deletion
        #[arg(long)]
        yes: bool,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize logging
    if cli.verbose {
        tracing_subscriber::fmt()
            .with_env_filter(
                EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("debug")),
            )
            .init();
    }

    let mut service = HttpService::with_timeout(cli.timeout)?;
    if let Some(token) = &cli.token {
        service = service.access_token(token.clone());
    }
    let service: Arc<dyn ServiceRequest> = Arc::new(service);

    let feed = WorksheetFeed::fetch(&cli.url, &service)
        .await
        .with_context(|| format!("Failed to fetch worksheet feed from {}", cli.url))?;
    tracing::debug!(worksheets = feed.worksheets().len(), "fetched feed");

    match cli.command {
        Command::Worksheets => print_worksheets(&feed, cli.format),
        Command::Rows {
            worksheet,
            reverse,
            sort,
            unsorted,
            max,
        } => {
            let ws = feed.find_by_title(&worksheet)?;
            let mut query = ListQuery::default();
            if reverse {
                query = query.reverse();
            }
            if unsorted {
                query = query.unsorted();
            } else if let Some(sort) = sort {
                query = query.sort(sort);
            }
            if let Some(max) = max {
                query = query.max_results(max);
            }

            let rows = ws
                .list_feed(&query)
                .await
                .with_context(|| format!("Failed to fetch list feed of '{worksheet}'"))?;
            print_rows(&rows, cli.format)
        }
        Command::Cells {
            worksheet,
            min_row,
            max_row,
            min_col,
            max_col,
        } => {
            let ws = feed.find_by_title(&worksheet)?;
            let query = CellQuery {
                min_row,
                max_row,
                min_col,
                max_col,
            };

            let cells = ws
                .cell_feed(&query)
                .await
                .with_context(|| format!("Failed to fetch cell feed of '{worksheet}'"))?;
            print_cells(&cells, cli.format)
        }
        Command::Delete { worksheet, yes } => {
            if !yes {
                bail!("Refusing to delete '{worksheet}' without --yes");
            }
            let ws = feed.find_by_title(&worksheet)?;
            ws.delete()
                .await
                .with_context(|| format!("Failed to delete '{worksheet}'"))?;
            println!("Deleted worksheet '{worksheet}'");
            Ok(())
        }
    }
}

fn print_worksheets(feed: &WorksheetFeed, format: OutputFormat) -> Result<()> {
    match format {
        OutputFormat::Json => {
            let entries: Vec<_> = feed.worksheets().iter().map(Worksheet::entry).collect();
            println!("{}", serde_json::to_string_pretty(&entries)?);
        }
        OutputFormat::Table => {
            for ws in feed.worksheets() {
                println!(
                    "{}\t{} rows x {} cols\tupdated {}",
                    ws.title(),
                    ws.row_count(),
                    ws.col_count(),
                    ws.updated().to_rfc3339()
                );
            }
        }
    }
    Ok(())
}

fn print_rows(feed: &ListFeed, format: OutputFormat) -> Result<()> {
    match format {
        OutputFormat::Json => {
            let rows: Vec<_> = feed.rows().iter().map(|row| &row.fields).collect();
            println!("{}", serde_json::to_string_pretty(&rows)?);
        }
        OutputFormat::Table => {
            for row in feed.rows() {
                let line: Vec<String> = row
                    .fields
                    .iter()
                    .map(|(column, value)| format!("{column}={value}"))
                    .collect();
                println!("{}", line.join("\t"));
            }
        }
    }
    Ok(())
}

fn print_cells(feed: &CellFeed, format: OutputFormat) -> Result<()> {
    match format {
        OutputFormat::Json => {
            println!("{}", serde_json::to_string_pretty(feed.cells())?);
        }
        OutputFormat::Table => {
            for cell in feed.cells() {
                println!("R{}C{}\t{}", cell.row, cell.col, cell.value);
            }
        }
    }
    Ok(())
}
