//! # Lista Terminal Library
//!
//! Everything behind the `lista` binary, kept in a library so key handling
//! and rendering can be tested without a real terminal.
//!
//! ## Module Organization
//! ```text
//! lista_tui/
//! ├── lib.rs          ◄─── You are here (logging setup)
//! ├── cli.rs          ◄─── Command-line flags
//! ├── app.rs          ◄─── Focus, selection, key handling
//! ├── terminal.rs     ◄─── Raw mode / alternate screen guard
//! └── ui/
//!     ├── mod.rs      ◄─── Frame composition
//!     ├── layout.rs   ◄─── Screen areas
//!     ├── header.rs   ◄─── Title and grand total
//!     ├── form.rs     ◄─── Draft inputs and error line
//!     ├── item_list.rs◄─── Item rows
//!     └── status_bar.rs◄── Key hints and clock
//! ```

pub mod app;
pub mod cli;
pub mod terminal;
pub mod ui;

use std::fs::{self, OpenOptions};
use std::path::PathBuf;
use std::sync::Mutex;

use directories::ProjectDirs;
use tracing_subscriber::EnvFilter;

pub use app::{App, Focus};
pub use cli::Args;
pub use terminal::TerminalGuard;

/// Environment variable overriding the log file location.
pub const ENV_LOG_PATH: &str = "LISTA_LOG_PATH";

/// Used when `RUST_LOG` is unset. `lista` is the binary's own target.
pub const DEFAULT_FILTER: &str = "warn,lista=info,lista_core=info,lista_tui=info";

/// Where logs go.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogTarget {
    /// Standard error; only safe when the terminal UI is not drawn.
    Stderr,
    /// A log file in the app data directory, so the UI stays clean.
    File,
}

/// Initializes the tracing subscriber for structured logging.
///
/// ## Log Levels
/// - `RUST_LOG=debug` - Show every editor operation
/// - Default: `warn,lista=info,lista_core=info,lista_tui=info`
///
/// ## Log File
/// - `LISTA_LOG_PATH` if set
/// - otherwise `<data dir>/lista/lista.log`
/// - if neither can be opened, logging is discarded
pub fn init_tracing(target: LogTarget) {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER));

    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false);

    match target {
        LogTarget::Stderr => builder.with_writer(std::io::stderr).init(),
        LogTarget::File => match open_log_file() {
            Some(file) => builder.with_ansi(false).with_writer(Mutex::new(file)).init(),
            None => builder.with_writer(std::io::sink).init(),
        },
    }
}

fn open_log_file() -> Option<fs::File> {
    let path = log_path()?;
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).ok()?;
    }
    OpenOptions::new().create(true).append(true).open(path).ok()
}

/// Determines the log file path.
///
/// ## Platform-Specific Paths
/// - **macOS**: `~/Library/Application Support/com.lista.lista/lista.log`
/// - **Windows**: `%APPDATA%\lista\lista\data\lista.log`
/// - **Linux**: `~/.local/share/lista/lista.log`
pub fn log_path() -> Option<PathBuf> {
    if let Ok(path) = std::env::var(ENV_LOG_PATH) {
        return Some(PathBuf::from(path));
    }

    let proj_dirs = ProjectDirs::from("com", "lista", "lista")?;
    Some(proj_dirs.data_dir().join("lista.log"))
}
