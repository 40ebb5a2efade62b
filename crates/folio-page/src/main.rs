//! Entry point for the Folio desktop app.
//!
//! Opens one window showing the portfolio page. The only state kept between
//! launches is the theme preference.

use std::sync::{Arc, OnceLock};

use clap::Parser;
use dioxus::desktop::{Config, LogicalSize, WindowBuilder};
use dioxus::prelude::*;

use folio_page::components::{PortfolioPage, SITE_TITLE};
use folio_page::config::{self, Args};
use folio_storage::SlotStore;
use folio_ui::{SHARED_CSS, ThemeStore};

/// Page CSS embedded at compile time.
const STYLES_CSS: &str = include_str!("../assets/styles.css");

/// Preference slot opened before launch, handed to the root component.
static PREFERENCES: OnceLock<Arc<dyn SlotStore>> = OnceLock::new();

fn main() -> anyhow::Result<()> {
    let args = Args::parse();
    config::init_logging(&args.log_level);

    tracing::info!("Starting Folio");

    let slot = config::open_slot_store(args.resolved_data_dir(), args.clean);
    PREFERENCES
        .set(slot)
        .map_err(|_| anyhow::anyhow!("preference slot already initialized"))?;

    dioxus::LaunchBuilder::desktop()
        .with_cfg(
            Config::new()
                .with_window(
                    WindowBuilder::new()
                        .with_title(SITE_TITLE)
                        .with_inner_size(LogicalSize::new(args.width, args.height)),
                )
                .with_custom_head(format!(
                    r#"
                    <meta name="viewport" content="width=device-width, initial-scale=1">
                    <style>{}</style>
                    <style>{}</style>
                    "#,
                    SHARED_CSS, STYLES_CSS
                )),
        )
        .launch(RootApp);

    tracing::info!("Folio closed");
    Ok(())
}

/// Root component: wraps the opened slot in a theme store for the page.
#[component]
fn RootApp() -> Element {
    let store = use_hook(|| PREFERENCES.get().cloned().map(ThemeStore::new));

    match store {
        Some(store) => rsx! { PortfolioPage { store } },
        None => rsx! {},
    }
}
