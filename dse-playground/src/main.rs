mod app;
mod config;
mod error;
mod paths;

use std::fs::{self, File};
use std::time::Duration;

use crossterm::event::{Event as CrosstermEvent, KeyCode, KeyModifiers};
use dse::Runtime;
use dse_dom::{Event, Rect, Terminal};
use dse_foundation::DefaultTheme;
use simplelog::{Config, LevelFilter, WriteLogger};

use crate::app::App;
use crate::config::PlaygroundConfig;
use crate::error::PlaygroundError;

const POLL_INTERVAL: Duration = Duration::from_millis(100);

fn init_logging() -> Result<(), PlaygroundError> {
    paths::rotate_logs();
    let Some(path) = paths::log_file() else {
        return Ok(());
    };
    if let Some(dir) = path.parent() {
        fs::create_dir_all(dir)?;
    }
    WriteLogger::init(LevelFilter::Debug, Config::default(), File::create(path)?)?;
    Ok(())
}

fn is_quit(event: &CrosstermEvent) -> bool {
    match event {
        CrosstermEvent::Key(key) => {
            key.code == KeyCode::Char('q')
                || (key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL))
        }
        _ => false,
    }
}

fn run() -> Result<(), PlaygroundError> {
    let config = match paths::config_file() {
        Some(path) => PlaygroundConfig::load(&path)?,
        None => PlaygroundConfig::default(),
    };
    let app = App::new(&config)?;
    let theme = DefaultTheme::default();

    let mut term = Terminal::new()?;
    let (width, height) = term.size();
    let mut runtime = Runtime::with_viewport(app, Rect::from_size(width, height));
    log::info!("[playground] started at {width}x{height}");

    let mut redraw = true;
    loop {
        if redraw || runtime.component().take_dirty() {
            term.render(runtime.root(), &theme)?;
            redraw = false;
        }

        let raw = term.poll(POLL_INTERVAL)?;
        if raw.iter().any(is_quit) {
            break;
        }
        if raw.is_empty() {
            continue;
        }

        let focus_before = runtime.focused().map(str::to_owned);
        let dispatched = runtime.handle_raw(&raw);
        redraw = runtime.focused() != focus_before.as_deref()
            || dispatched
                .iter()
                .any(|(event, _)| matches!(event, Event::Resize { .. }));
    }

    match runtime.component().select().selected_option() {
        Some(option) => log::info!("[playground] exiting with {} selected", option.value),
        None => log::info!("[playground] exiting with nothing selected"),
    }
    Ok(())
}

fn main() {
    if let Err(e) = init_logging() {
        eprintln!("Logging disabled: {e}");
    }

    if let Err(e) = run() {
        log::error!("[playground] {e}");
        eprintln!("Error: {e}");
        std::process::exit(1);
    }
}
