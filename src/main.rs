use std::env;
use std::fs::File;
use std::path::PathBuf;
use std::process::ExitCode;
use std::sync::Mutex;

use anyhow::{Context, Result};
use clap::Parser;
use tracing_subscriber::EnvFilter;

use skim_filters::{FilterSet, load_filter_specs, read_log_lines};
use skim_tui::{
    Action, AppState, Event, EventHandler, KeyBindings, KeyContext, Settings, Theme, Tui,
    ViewerScreen,
};

const DEFAULT_FILTER_FILE: &str = "demos/simple_filter.tat";
const DEFAULT_LOG_FILE: &str = "demos/simple.log";

const DEFAULT_LOG_FILTER: &str = "warn";

/// Environment variable naming an optional TOML settings file
const CONFIG_ENV: &str = "SKIM_CONFIG";

/// Environment variable naming a file to receive log output
const LOG_FILE_ENV: &str = "SKIM_LOG_FILE";

/// Skim - browse a log file through TextAnalysisTool filters
#[derive(Parser, Debug)]
#[command(name = "skim")]
#[command(author, version, about, long_about = None)]
struct Args {
    /// TextAnalysisTool.NET filter definition file
    #[arg(value_name = "FILTER_FILE", default_value = DEFAULT_FILTER_FILE)]
    filter_file: PathBuf,

    /// Log file to view
    #[arg(value_name = "LOG_FILE", default_value = DEFAULT_LOG_FILE)]
    log_file: PathBuf,
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> ExitCode {
    let args = Args::parse();

    init_tracing();

    // Run the application
    match run_app(args).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {:#}", e);
            ExitCode::FAILURE
        }
    }
}

/// Log to `SKIM_LOG_FILE` if given, else stderr
///
/// `RUST_LOG` replaces the default `warn` filter when set.
fn init_tracing() {
    let subscriber = tracing_subscriber::fmt()
        .with_env_filter(log_filter(env::var(EnvFilter::DEFAULT_ENV).ok().as_deref()));

    match env::var_os(LOG_FILE_ENV).map(|path| (File::create(&path), path)) {
        Some((Ok(file), _)) => subscriber.with_ansi(false).with_writer(Mutex::new(file)).init(),
        Some((Err(e), path)) => {
            subscriber.with_writer(std::io::stderr).init();
            tracing::warn!("cannot open log file {}: {}", path.to_string_lossy(), e);
        }
        None => subscriber.with_writer(std::io::stderr).init(),
    }
}

fn log_filter(directives: Option<&str>) -> EnvFilter {
    directives
        .and_then(|directives| EnvFilter::try_new(directives).ok())
        .unwrap_or_else(|| EnvFilter::new(DEFAULT_LOG_FILTER))
}

async fn run_app(args: Args) -> Result<()> {
    let config_path = env::var_os(CONFIG_ENV).map(PathBuf::from);
    let settings = Settings::load_optional(config_path.as_deref())?;
    let theme = Theme::from_palette(&settings.palette)?;

    // Everything that can fail fatally happens before the terminal is touched
    let specs = load_filter_specs(&args.filter_file)?;
    let filters = FilterSet::compile(specs).context("Failed to compile filters")?;
    let lines = read_log_lines(&args.log_file)?;

    tracing::info!(
        filters = filters.len(),
        lines = lines.len(),
        "starting viewer"
    );

    let mut state = AppState::new(filters, lines, settings.hide_unmatched);

    // Initialize TUI
    let mut tui = Tui::new()?;
    let size = tui.size()?;
    state.handle(Action::Resize(size.width, size.height));

    // Initialize event handler
    let mut events = EventHandler::new();

    // Initialize keybindings
    let keybindings = KeyBindings::new();

    // Initial render
    render(&mut tui, &state, &theme, &settings)?;

    // Main event loop
    while let Some(event) = events.next().await {
        match event {
            Event::Key(key) => {
                let context = if state.help_visible {
                    KeyContext::Help
                } else {
                    KeyContext::Viewer
                };

                if let Some(action) = keybindings.get_action(context, &key) {
                    state.handle(action);
                }
            }
            Event::Resize(width, height) => {
                state.handle(Action::Resize(width, height));
            }
            Event::Error(e) => {
                tracing::warn!("terminal event error: {}", e);
            }
        }

        if state.should_quit {
            break;
        }

        render(&mut tui, &state, &theme, &settings)?;
    }

    // Cleanup
    events.shutdown();
    tui.restore()?;
    tracing::info!("viewer closed");

    Ok(())
}

fn render(tui: &mut Tui, state: &AppState, theme: &Theme, settings: &Settings) -> Result<()> {
    tui.terminal().draw(|frame| {
        ViewerScreen::render(frame, state, theme, settings.tab_width);
    })?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tracing::level_filters::LevelFilter;

    #[test]
    fn test_log_filter_defaults_to_warn() {
        assert_eq!(log_filter(None).max_level_hint(), Some(LevelFilter::WARN));
    }

    #[test]
    fn test_rust_log_overrides_default_level() {
        assert_eq!(
            log_filter(Some("debug")).max_level_hint(),
            Some(LevelFilter::DEBUG)
        );
        assert_eq!(
            log_filter(Some("info")).max_level_hint(),
            Some(LevelFilter::INFO)
        );
    }
}
