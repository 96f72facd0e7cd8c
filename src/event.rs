use std::sync::mpsc;
use std::thread;
use std::time::Duration;

use anyhow::{Context, Result};
use crossterm::event::{self, Event, KeyEvent, KeyEventKind, KeyModifiers};

pub enum AppEvent {
    Key(KeyEvent),
    Tick,
    Resize,
}

/// Reads terminal input on a background thread and emits a `Tick` whenever
/// `tick_rate` passes without input.
pub struct EventHandler {
    rx: mpsc::Receiver<AppEvent>,
}

impl EventHandler {
    pub fn new(tick_rate: Duration) -> Self {
        let (tx, rx) = mpsc::channel();

        thread::spawn(move || {
            loop {
                let event = if event::poll(tick_rate).unwrap_or(false) {
                    match event::read() {
                        // Release/repeat reports would double-type characters.
                        Ok(Event::Key(key)) if key.kind == KeyEventKind::Press => {
                            AppEvent::Key(key)
                        }
                        Ok(Event::Resize(_, _)) => AppEvent::Resize,
                        Ok(_) => continue,
                        Err(err) => {
                            log::error!("terminal event read failed: {err}");
                            return;
                        }
                    }
                } else {
                    AppEvent::Tick
                };
                if tx.send(event).is_err() {
                    return;
                }
            }
        });

        Self { rx }
    }

    pub fn next(&self) -> Result<AppEvent> {
        self.rx.recv().context("terminal event thread stopped")
    }
}

/// Whether a character key should be typed into the answer. Control and Alt
/// chords are shortcuts, not text.
pub fn is_text_entry(key: &KeyEvent) -> bool {
    !key.modifiers.intersects(KeyModifiers::CONTROL | KeyModifiers::ALT)
}
