//! Event handling for the browser

use std::sync::mpsc;
use std::thread;
use std::time::Duration;

use anyhow::Result;
use crossterm::event::{self, Event as CrosstermEvent, KeyEvent, KeyEventKind};

/// Terminal events
#[derive(Debug)]
pub enum Event {
    Key(KeyEvent),
    /// The terminal was resized; the next draw picks up the new size
    Resize,
    /// No input within one tick
    Tick,
}

/// Reads terminal events on a background thread
pub struct EventHandler {
    rx: mpsc::Receiver<Event>,
}

impl EventHandler {
    /// Create a new event handler with the given tick rate in milliseconds
    pub fn new(tick_rate_ms: u64) -> Self {
        let tick_rate = Duration::from_millis(tick_rate_ms);
        let (tx, rx) = mpsc::channel();

        thread::spawn(move || loop {
            let sent = if event::poll(tick_rate).unwrap_or(false) {
                match event::read() {
                    // Only presses; releases would double every key on some terminals
                    Ok(CrosstermEvent::Key(key)) if key.kind == KeyEventKind::Press => {
                        tx.send(Event::Key(key))
                    }
                    Ok(CrosstermEvent::Resize(_, _)) => tx.send(Event::Resize),
                    _ => Ok(()),
                }
            } else {
                tx.send(Event::Tick)
            };

            if sent.is_err() {
                break;
            }
        });

        Self { rx }
    }

    /// Receive the next event (blocking)
    pub fn next(&self) -> Result<Event> {
        Ok(self.rx.recv()?)
    }
}
