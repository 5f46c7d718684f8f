use crate::config::UiConfig;
use crate::error::AppError;
use crate::ui::app::App;
use crate::ui::events::{AppEvent, EventHandler};
use crate::ui::input::handle_key;
use crate::ui::render::draw;
use crate::ui::terminal_guard::setup_terminal;
use std::sync::mpsc::RecvTimeoutError;
use std::time::Duration;

pub fn run(ui: &UiConfig) -> Result<(), AppError> {
    let (mut terminal, guard) = setup_terminal(ui.mouse)?;
    let tick_rate = Duration::from_millis(ui.tick_rate_ms);
    let mut app = App::new(ui.title.as_str());
    let events = EventHandler::new(tick_rate);
    if let Ok((cols, rows)) = crossterm::terminal::size() {
        app.on_resize(cols, rows);
    }
    tracing::info!(
        tick_rate_ms = ui.tick_rate_ms,
        mouse = ui.mouse,
        "Counter started"
    );

    loop {
        terminal.draw(|frame| draw(frame, &app))?;
        if app.should_quit() {
            break;
        }

        match events.next(tick_rate) {
            Ok(AppEvent::Key(key)) => {
                handle_key(&mut app, key);
            }
            Ok(AppEvent::Mouse(mouse)) => {
                app.on_mouse(mouse);
            }
            Ok(AppEvent::Resize(cols, rows)) => app.on_resize(cols, rows),
            Ok(AppEvent::Tick) => {}
            Err(RecvTimeoutError::Timeout) => {}
            Err(RecvTimeoutError::Disconnected) => {
                tracing::warn!("Input thread stopped, closing");
                break;
            }
        }
    }

    tracing::info!(value = app.counter().value(), "Counter closed");
    drop(guard);
    Ok(())
}
