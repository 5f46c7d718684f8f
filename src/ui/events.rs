use crossterm::event::{self, Event, KeyEvent, MouseEvent};
use std::sync::mpsc::{self, Receiver};
use std::thread;
use std::time::{Duration, Instant};

pub enum AppEvent {
    Key(KeyEvent),
    Mouse(MouseEvent),
    Resize(u16, u16),
    Tick,
}

/// Reads terminal input on a background thread and forwards it to the UI loop.
///
/// The thread never touches widget state. It exits when the receiver is
/// dropped or reading the terminal fails.
pub struct EventHandler {
    rx: Receiver<AppEvent>,
}

impl EventHandler {
    pub fn new(tick_rate: Duration) -> Self {
        let (tx, rx) = mpsc::channel();

        thread::spawn(move || {
            let mut last_tick = Instant::now();
            loop {
                let timeout = tick_rate.saturating_sub(last_tick.elapsed());

                let forwarded = match event::poll(timeout) {
                    Ok(true) => match event::read() {
                        Ok(Event::Key(key)) => tx.send(AppEvent::Key(key)),
                        Ok(Event::Mouse(mouse)) => tx.send(AppEvent::Mouse(mouse)),
                        Ok(Event::Resize(cols, rows)) => tx.send(AppEvent::Resize(cols, rows)),
                        Ok(_) => Ok(()),
                        Err(err) => {
                            tracing::error!("Failed to read terminal event: {}", err);
                            break;
                        }
                    },
                    // Timeout, no event
                    Ok(false) => Ok(()),
                    Err(err) => {
                        tracing::error!("Failed to poll terminal events: {}", err);
                        break;
                    }
                };
                if forwarded.is_err() {
                    break;
                }

                if last_tick.elapsed() >= tick_rate {
                    if tx.send(AppEvent::Tick).is_err() {
                        break;
                    }
                    last_tick = Instant::now();
                }
            }
            tracing::debug!("Input thread exiting");
        });

        Self { rx }
    }

    pub fn next(&self, timeout: Duration) -> Result<AppEvent, mpsc::RecvTimeoutError> {
        self.rx.recv_timeout(timeout)
    }
}
