//! mocktrade — three-pane mock-trading page in the terminal.
//!
//! Panes:
//! 1. Watchlist — grouped instruments; click or j/k to select
//! 2. Chart — selected instrument header with chart/volume placeholders
//! 3. Info — 요약 / 재무 / 이슈 tabs

use std::io::{self, stdout};
use std::path::PathBuf;
use std::time::Duration;

use anyhow::{Context, Result};
use clap::Parser;
use crossterm::event::{self, DisableMouseCapture, EnableMouseCapture, Event};
use crossterm::execute;
use crossterm::terminal::{
    disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen,
};
use ratatui::backend::CrosstermBackend;
use ratatui::Terminal;

use mocktrade_core::{InfoTab, Watchlist};
use mocktrade_tui::{input, logging, ui, AppState};

#[derive(Parser)]
#[command(name = "mocktrade", about = "Mock-trading watchlist page in the terminal")]
struct Args {
    /// Watchlist TOML file. Defaults to the built-in sample list.
    #[arg(long)]
    watchlist: Option<PathBuf>,

    /// Initial info tab: summary, finance or issue.
    #[arg(long, default_value_t = InfoTab::Summary)]
    tab: InfoTab,

    /// Log file. Defaults to mocktrade.log in the temp directory.
    #[arg(long)]
    log_file: Option<PathBuf>,
}

fn main() -> Result<()> {
    let args = Args::parse();

    let log_path = args.log_file.unwrap_or_else(logging::default_log_path);
    logging::init(&log_path)?;

    let watchlist = Watchlist::load(args.watchlist.as_deref()).context("load watchlist")?;
    let mut app = AppState::new(watchlist);
    app.set_tab(args.tab);
    log::info!(
        "starting with {} instruments, selected {:?}, tab {}",
        app.watchlist.len(),
        app.selected_id(),
        app.active_tab
    );

    // Install a panic hook that restores the terminal before printing the panic.
    let default_hook = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |info| {
        let _ = disable_raw_mode();
        let _ = execute!(io::stderr(), LeaveAlternateScreen, DisableMouseCapture);
        default_hook(info);
    }));

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;
    terminal.clear()?;

    let result = run_app(&mut terminal, &mut app);

    // Restore terminal
    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )?;
    terminal.show_cursor()?;

    if let Err(err) = &result {
        log::error!("event loop failed: {err:#}");
    }
    log::info!("exiting");
    result
}

fn run_app(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    app: &mut AppState,
) -> Result<()> {
    loop {
        // 1. Render, keeping this frame's click regions.
        let mut hits = None;
        terminal.draw(|f| hits = Some(ui::draw(f, app)))?;
        if let Some(hits) = hits {
            app.hit_map = hits;
        }

        // 2. Poll for input events.
        if event::poll(Duration::from_millis(250))? {
            match event::read()? {
                Event::Key(key) => input::handle_key(app, key),
                Event::Mouse(mouse) => input::handle_mouse(app, mouse),
                _ => {}
            }
        }

        // 3. Check quit
        if !app.running {
            break;
        }
    }
    Ok(())
}
