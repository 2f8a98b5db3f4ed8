//! Mocktrade CLI — inspect the watchlist without opening the TUI.
//!
//! Commands:
//! - `watchlist` — print every group and row with its change direction
//! - `quote` — print the center-pane header for an instrument id
//! - `export` — write the active watchlist as TOML

use std::io::Write;
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use env_logger::Env;
use serde::Serialize;

use mocktrade_core::{Direction, Selection, StockItem, Watchlist};

#[derive(Parser)]
#[command(name = "mocktrade-cli", about = "Mocktrade CLI — watchlist inspection and export")]
struct Cli {
    /// Watchlist TOML file. Defaults to the built-in sample list.
    #[arg(long, global = true)]
    watchlist: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Print every group and its rows.
    Watchlist {
        /// Emit JSON instead of a table.
        #[arg(long, default_value_t = false)]
        json: bool,
    },
    /// Print the header shown for an instrument.
    Quote {
        /// Instrument id. Defaults to the first row.
        id: Option<String>,

        /// Emit JSON instead of text.
        #[arg(long, default_value_t = false)]
        json: bool,
    },
    /// Write the watchlist as TOML.
    Export {
        /// Output file. Prints to stdout when omitted.
        #[arg(long)]
        out: Option<PathBuf>,
    },
}

/// One printed row, direction included.
#[derive(Serialize)]
struct RowView<'a> {
    group: &'a str,
    #[serde(flatten)]
    item: &'a StockItem,
    direction: Direction,
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(Env::default().default_filter_or("warn")).init();
    let cli = Cli::parse();

    let watchlist = Watchlist::load(cli.watchlist.as_deref()).context("load watchlist")?;
    let stdout = std::io::stdout();
    let mut out = stdout.lock();

    match cli.command {
        Commands::Watchlist { json } => print_watchlist(&mut out, &watchlist, json),
        Commands::Quote { id, json } => print_quote(&mut out, &watchlist, id, json),
        Commands::Export { out: path } => export(&mut out, &watchlist, path),
    }
}

fn print_watchlist(out: &mut impl Write, watchlist: &Watchlist, json: bool) -> Result<()> {
    if json {
        let rows: Vec<RowView> = watchlist
            .groups
            .iter()
            .flat_map(|g| {
                g.items.iter().map(move |item| RowView {
                    group: &g.title,
                    item,
                    direction: item.direction(),
                })
            })
            .collect();
        serde_json::to_writer_pretty(&mut *out, &rows)?;
        writeln!(out)?;
        return Ok(());
    }

    for group in &watchlist.groups {
        writeln!(out, "{}", group.title)?;
        for item in &group.items {
            writeln!(
                out,
                "  {} {:<8} {:<16} {:>14} {:>8} {}",
                item.logo(),
                item.code,
                item.name,
                item.price_text,
                item.change_text,
                item.direction().label()
            )?;
        }
    }
    Ok(())
}

fn print_quote(
    out: &mut impl Write,
    watchlist: &Watchlist,
    id: Option<String>,
    json: bool,
) -> Result<()> {
    let mut selection = Selection::initial(watchlist);
    if let Some(id) = id {
        selection.select(id);
    }
    if selection.resolve(watchlist).is_none() {
        log::warn!("no instrument with id {:?}", selection.id());
    }
    let header = selection.header(watchlist);

    if json {
        serde_json::to_writer_pretty(&mut *out, &header)?;
        writeln!(out)?;
    } else {
        writeln!(out, "{} {}", header.name, header.code_line())?;
        writeln!(out, "{} {}", header.price_text, header.change_text)?;
    }
    Ok(())
}

fn export(out: &mut impl Write, watchlist: &Watchlist, path: Option<PathBuf>) -> Result<()> {
    let toml = watchlist.to_toml()?;
    match path {
        Some(path) => {
            std::fs::write(&path, toml)
                .with_context(|| format!("write watchlist to {}", path.display()))?;
            log::info!("exported {} instruments to {}", watchlist.len(), path.display());
            writeln!(out, "Wrote {}", path.display())?;
        }
        None => write!(out, "{toml}")?,
    }
    Ok(())
}
