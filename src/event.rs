//! Terminal event handling for the indicator.
//!
//! A background thread polls the terminal for input and emits two clocks:
//! a fast UI tick and the slower status poll that drives re-querying the
//! VPN client. Events are delivered through a channel and consumed on the
//! single UI thread.

use color_eyre::Result;
use crossterm::event::{self, Event as CrosstermEvent, KeyEvent, KeyEventKind};
use std::sync::mpsc;
use std::thread;
use std::time::{Duration, Instant};

/// Events that drive the indicator.
#[derive(Debug)]
pub enum Event {
    /// Keyboard input event.
    Key(KeyEvent),
    /// Terminal window resize event.
    Resize,
    /// UI tick (toast expiry, redraw).
    Tick,
    /// Time to re-query the client's status.
    Poll,
}

/// Handles terminal events in a background thread.
pub struct EventHandler {
    receiver: mpsc::Receiver<Event>,
    #[allow(dead_code)]
    handler: thread::JoinHandle<()>,
}

impl EventHandler {
    /// Creates a new event handler.
    ///
    /// # Arguments
    ///
    /// * `tick_rate` - Interval between [`Event::Tick`]s
    /// * `poll_rate` - Interval between [`Event::Poll`]s
    pub fn new(tick_rate: Duration, poll_rate: Duration) -> Self {
        let (sender, receiver) = mpsc::channel();

        let handler = thread::spawn(move || {
            let mut last_tick = Instant::now();
            let mut last_poll = Instant::now();
            loop {
                let timeout = tick_rate
                    .checked_sub(last_tick.elapsed())
                    .unwrap_or(Duration::ZERO);

                if event::poll(timeout).unwrap_or(false) {
                    let forwarded = match event::read() {
                        // Ignore key releases reported by some terminals.
                        Ok(CrosstermEvent::Key(key)) if key.kind == KeyEventKind::Press => {
                            Some(Event::Key(key))
                        }
                        Ok(CrosstermEvent::Resize(_, _)) => Some(Event::Resize),
                        _ => None,
                    };
                    if let Some(evt) = forwarded {
                        if sender.send(evt).is_err() {
                            return;
                        }
                    }
                }

                if last_tick.elapsed() >= tick_rate {
                    if sender.send(Event::Tick).is_err() {
                        return;
                    }
                    last_tick = Instant::now();
                }

                if last_poll.elapsed() >= poll_rate {
                    if sender.send(Event::Poll).is_err() {
                        return;
                    }
                    last_poll = Instant::now();
                }
            }
        });

        Self { receiver, handler }
    }

    /// Blocks until the next event is available.
    ///
    /// # Errors
    ///
    /// Returns an error if the event channel is disconnected.
    pub fn next(&self) -> Result<Event> {
        Ok(self.receiver.recv()?)
    }
}
