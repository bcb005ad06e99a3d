#![allow(non_snake_case)]

mod app;
mod components;
pub mod context;
mod pages;
mod theme;

use std::path::{Path, PathBuf};
use std::sync::OnceLock;

use clap::Parser;
use dioxus::desktop::{Config, WindowBuilder};
use folio_core::logging::LoggingBuilder;
use folio_core::{FolioResult, SiteContent, Theme};

/// Options fixed at launch and read by the app shell.
#[derive(Debug, Clone, Default)]
pub struct LaunchOptions {
    pub content: SiteContent,
    pub theme: Theme,
}

/// Global launch options, set once from the command line
static LAUNCH: OnceLock<LaunchOptions> = OnceLock::new();

/// Get the launch options (defaults if main has not set them).
pub fn launch_options() -> &'static LaunchOptions {
    LAUNCH.get_or_init(LaunchOptions::default)
}

/// Folio - Portfolio page
#[derive(Parser, Debug)]
#[command(name = "folio-desktop")]
#[command(about = "Folio - personal portfolio with project and certificate viewer")]
struct Args {
    /// JSON content file (defaults to <config dir>/folio/content.json if present)
    #[arg(short, long)]
    content: Option<PathBuf>,

    /// Initial theme: light or dark
    #[arg(short, long, default_value_t = Theme::Light)]
    theme: Theme,

    /// Log filter directives (RUST_LOG takes precedence)
    #[arg(long)]
    log_filter: Option<String>,

    /// Disable ANSI colours in log output
    #[arg(long)]
    no_ansi: bool,

    /// Hide event targets in log output
    #[arg(long)]
    no_log_target: bool,
}

/// Content file in the user's config directory, if one exists.
fn default_content_path() -> Option<PathBuf> {
    let path = dirs::config_dir()?.join("folio").join("content.json");
    path.is_file().then_some(path)
}

fn load_content(explicit: Option<&Path>) -> FolioResult<SiteContent> {
    match explicit {
        Some(path) => SiteContent::load(path),
        None => match default_content_path() {
            Some(path) => SiteContent::load(path),
            None => {
                tracing::info!("No content file found, using built-in content");
                Ok(SiteContent::default())
            }
        },
    }
}

fn main() {
    let args = Args::parse();

    let mut logging = LoggingBuilder::new();
    if let Some(filter) = &args.log_filter {
        logging = logging.with_filter(filter.clone());
    }
    if args.no_ansi {
        logging = logging.no_ansi();
    }
    if args.no_log_target {
        logging = logging.without_target();
    }
    if let Err(e) = logging.init() {
        eprintln!("Failed to initialize logging: {}", e);
    }

    let content = match load_content(args.content.as_deref()) {
        Ok(content) => content,
        Err(e) => {
            tracing::warn!("Failed to load site content, using built-in content: {}", e);
            SiteContent::default()
        }
    };

    let title = format!("{} - Portfolio", content.profile.name);
    tracing::info!("Starting '{}' with {} theme", title, args.theme);

    let _ = LAUNCH.set(LaunchOptions {
        content,
        theme: args.theme,
    });

    // Configure desktop window
    let config = Config::new().with_window(
        WindowBuilder::new()
            .with_title(&title)
            .with_inner_size(dioxus::desktop::LogicalSize::new(1100.0, 900.0))
            .with_resizable(true),
    );

    dioxus::LaunchBuilder::desktop()
        .with_cfg(config)
        .launch(app::App);
}
