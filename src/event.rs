//! Input events for the picker.
//!
//! tui leaves input handling to the backend, so this is the usual termion
//! arrangement: one thread reads keys from stdin, another emits ticks, both
//! feed a single channel the UI loop blocks on. Ticks keep the UI redrawing
//! while nothing is typed.

use std::io;
use std::sync::mpsc;
use std::thread;
use std::time::Duration;

use termion::event::Key;
use termion::input::TermRead;

const TICK_RATE: Duration = Duration::from_millis(250);

pub enum Event {
    Input(Key),
    Tick,
}

pub struct Events {
    rx: mpsc::Receiver<Event>,
}

impl Events {
    pub fn new() -> Events {
        let (tx, rx) = mpsc::channel();

        {
            let tx = tx.clone();
            thread::spawn(move || {
                let stdin = io::stdin();
                for key in stdin.keys().flatten() {
                    if tx.send(Event::Input(key)).is_err() {
                        return;
                    }
                }
            });
        }

        thread::spawn(move || loop {
            if tx.send(Event::Tick).is_err() {
                return;
            }
            thread::sleep(TICK_RATE);
        });

        Events { rx }
    }

    /// Blocks until the next key or tick.
    pub fn next(&self) -> Result<Event, mpsc::RecvError> {
        self.rx.recv()
    }
}

impl Default for Events {
    fn default() -> Events {
        Events::new()
    }
}
