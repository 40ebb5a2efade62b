//! Command line configuration, logging setup, and preference storage wiring.

use std::path::PathBuf;
use std::sync::Arc;

use clap::Parser;
use folio_storage::{FileSlotStore, InMemorySlotStore, SlotStore};
use folio_ui::THEME_SLOT;
use tracing_subscriber::EnvFilter;

/// Directory name appended to the platform data directory.
const APP_DIR: &str = "folio";

/// Command line arguments.
#[derive(Parser, Debug, Clone)]
#[command(name = "folio")]
#[command(about = "Personal portfolio page as a desktop app")]
pub struct Args {
    /// Directory holding preferences.json (defaults to the platform data dir)
    #[arg(long, env = "FOLIO_DATA_DIR")]
    pub data_dir: Option<PathBuf>,

    /// Tracing filter directive, e.g. "info" or "folio_ui=debug"
    #[arg(long, env = "RUST_LOG", default_value = "info")]
    pub log_level: String,

    /// Initial window width in logical pixels
    #[arg(long, default_value_t = 1280)]
    pub width: u32,

    /// Initial window height in logical pixels
    #[arg(long, default_value_t = 900)]
    pub height: u32,

    /// Forget the stored theme before launching
    #[arg(long)]
    pub clean: bool,
}

impl Args {
    /// The data directory to use, explicit or platform default.
    pub fn resolved_data_dir(&self) -> PathBuf {
        self.data_dir
            .clone()
            .unwrap_or_else(|| default_data_dir(|key| std::env::var(key).ok()))
    }
}

/// Platform data directory for Folio, looked up through `env`.
pub fn default_data_dir(env: impl Fn(&str) -> Option<String>) -> PathBuf {
    #[cfg(target_os = "macos")]
    {
        if let Some(home) = env("HOME") {
            return PathBuf::from(home).join("Library/Application Support").join(APP_DIR);
        }
    }
    #[cfg(target_os = "linux")]
    {
        if let Some(xdg) = env("XDG_DATA_HOME") {
            return PathBuf::from(xdg).join(APP_DIR);
        }
        if let Some(home) = env("HOME") {
            return PathBuf::from(home).join(".local/share").join(APP_DIR);
        }
    }
    #[cfg(target_os = "windows")]
    {
        if let Some(appdata) = env("APPDATA") {
            return PathBuf::from(appdata).join(APP_DIR);
        }
    }
    #[cfg(not(any(target_os = "macos", target_os = "linux", target_os = "windows")))]
    let _ = &env;

    PathBuf::from(".").join(APP_DIR)
}

/// Install the global tracing subscriber.
///
/// An unparsable filter falls back to `info`. Calling this twice is harmless.
pub fn init_logging(filter: &str) {
    let env_filter = EnvFilter::try_new(filter).unwrap_or_else(|e| {
        eprintln!("Invalid log filter {filter:?} ({e}), using \"info\"");
        EnvFilter::new("info")
    });

    let _ = tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_target(false)
        .try_init();
}

/// Open the durable slot in `dir`, falling back to a volatile one.
///
/// With `clean` set, the stored theme is removed first.
pub fn open_slot_store(dir: PathBuf, clean: bool) -> Arc<dyn SlotStore> {
    let store: Arc<dyn SlotStore> = match FileSlotStore::open(&dir) {
        Ok(store) => {
            tracing::info!(path = ?store.path(), "Using preferences file");
            Arc::new(store)
        }
        Err(e) => {
            tracing::warn!(
                dir = %dir.display(),
                error = %e,
                "Preferences directory unavailable, theme will not persist"
            );
            Arc::new(InMemorySlotStore::new())
        }
    };

    if clean {
        match store.remove(THEME_SLOT) {
            Ok(()) => tracing::info!(slot = THEME_SLOT, "--clean: removed stored theme"),
            Err(e) => tracing::error!(error = %e, "Failed to remove stored theme"),
        }
    }

    store
}
