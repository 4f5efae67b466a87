//! formflow-tui - Terminal UI for FormFlow
//!
//! Three pages (numbers, email, age) driven by the keyboard. Logs go to a
//! file so they never draw over the screen.

use formflow_tui::{
    error::Result,
    app::{AppState, UiConfig, reduce, event::EventHandler, Action},
    terminal::{install_panic_hook, setup_terminal, restore_terminal},
    ui,
};
use libformflow::{
    config::{resolve_data_path, Config},
    logging::LoggingConfig,
};

fn main() -> Result<()> {
    let config = Config::load()?;
    init_logging(&config)?;

    // Install panic hook to restore terminal on panic
    install_panic_hook();

    let mut terminal = setup_terminal()?;

    let result = run_app(&mut terminal, UiConfig::from_settings(&config.ui));

    restore_terminal(terminal)?;

    if let Err(ref e) = result {
        tracing::error!("formflow-tui exited with error: {}", e);
    }
    result
}

fn init_logging(config: &Config) -> Result<()> {
    let log_file = match config.log_file() {
        Some(path) => path,
        None => resolve_data_path()?.join("formflow-tui.log"),
    };

    LoggingConfig::new(config.logging.format, config.logging.level.clone(), false)
        .with_file(log_file)
        .init()?;

    Ok(())
}

fn run_app(terminal: &mut formflow_tui::terminal::Tui, ui_config: UiConfig) -> Result<()> {
    let event_handler = EventHandler::new(ui_config.tick_rate_ms);
    let mut state = AppState::with_config(ui_config);

    tracing::info!(page = %state.page(), "formflow-tui started");

    loop {
        terminal.draw(|frame| {
            ui::render(frame, &state);
        })?;

        let action: Action = event_handler.next()?.into();
        state = reduce(state, action);

        if state.should_quit {
            break;
        }
    }

    tracing::info!("formflow-tui stopped");
    Ok(())
}
