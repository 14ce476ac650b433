//! # Lista Entry Point
//!
//! ## Startup Sequence
//! 1. Parse flags
//! 2. Initialize tracing (log file while the UI is up, stderr otherwise)
//! 3. Load `ListConfig` from the environment and apply flags
//! 4. `--snapshot`: print the initial list as JSON and exit
//! 5. Otherwise enter the alternate screen and run the event loop

use std::io;
use std::time::Duration;

use anyhow::Result;
use clap::Parser;
use crossterm::event::{self, Event};
use lista_core::{Editor, ListConfig};
use lista_tui::{init_tracing, ui, App, Args, LogTarget, TerminalGuard};
use ratatui::{backend::CrosstermBackend, Terminal};
use tracing::info;

fn main() -> Result<()> {
    let args = Args::parse();

    init_tracing(if args.snapshot {
        LogTarget::Stderr
    } else {
        LogTarget::File
    });

    let config = args.apply(ListConfig::from_env()?);
    info!(seed = config.seed, currency = %config.currency_label, "starting lista");

    if args.snapshot {
        let editor = Editor::new(config);
        println!("{}", serde_json::to_string_pretty(&editor.snapshot())?);
        return Ok(());
    }

    let mut app = App::new(config);

    // Setup terminal; the guard undoes it on every exit path
    let mut guard = TerminalGuard::enter()?;
    let backend = CrosstermBackend::new(io::stdout());
    let mut terminal = Terminal::new(backend)?;

    let res = run_event_loop(&mut terminal, &mut app);

    // Restore terminal
    guard.restore()?;
    terminal.show_cursor()?;

    if let Err(err) = &res {
        tracing::error!(error = %err, "event loop failed");
    }
    info!(
        items = app.editor.items().len(),
        total = %app.editor.total(),
        "lista closed"
    );

    res
}

/// Draws, then handles one key event at a time until the user quits.
///
/// A frame is only redrawn when the editor revision, the app's own state,
/// or the clock second changed since the last draw.
fn run_event_loop<B: ratatui::backend::Backend>(
    terminal: &mut Terminal<B>,
    app: &mut App,
) -> Result<()> {
    let mut last_drawn: Option<(u64, i64)> = None;
    let mut force_redraw = true;

    loop {
        let stamp = (app.editor.revision(), chrono::Local::now().timestamp());
        if force_redraw || last_drawn != Some(stamp) {
            terminal.draw(|f| ui::render(f, app))?;
            last_drawn = Some(stamp);
            force_redraw = false;
        }

        if event::poll(Duration::from_millis(200))? {
            match event::read()? {
                Event::Key(key) => {
                    app.handle_key(key);
                    // Focus and selection changes do not bump the revision.
                    force_redraw = true;
                }
                Event::Resize(_, _) => force_redraw = true,
                _ => {}
            }
        }

        if app.should_quit {
            break;
        }
    }

    Ok(())
}
