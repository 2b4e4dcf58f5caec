//! Event handling for the TUI
//!
//! Terminal events (key presses, mouse events, resize) are read on a
//! background thread with crossterm. Submission outcomes from the async
//! runtime are pushed into the same channel, so the UI thread has a single
//! place to wait on.

use crossterm::event::{self, Event as CrosstermEvent, KeyEvent, MouseEvent};
use std::sync::mpsc;
use std::thread;
use std::time::{Duration, Instant};
use tracing::error;

use crate::api::{SubmissionOutcome, SubmissionTicket};

/// Events handled by the UI loop
#[derive(Debug, Clone)]
pub enum Event {
    /// Key press event
    Key(KeyEvent),
    /// Mouse event
    Mouse(MouseEvent),
    /// Terminal resize
    Resize(u16, u16),
    /// Tick event for periodic updates
    Tick,
    /// A transaction submission finished
    Submission {
        ticket: SubmissionTicket,
        outcome: SubmissionOutcome,
    },
}

/// Event handler for terminal events
pub struct EventHandler {
    /// Event sender, cloned for producers outside the input thread
    sender: mpsc::Sender<Event>,
    /// Event receiver
    receiver: mpsc::Receiver<Event>,
    /// Event thread handle
    #[allow(dead_code)]
    handler: thread::JoinHandle<()>,
}

impl EventHandler {
    /// Create a new event handler with the specified tick rate
    pub fn new(tick_rate: Duration) -> Self {
        let (sender, receiver) = mpsc::channel();
        let handler = {
            let sender = sender.clone();
            thread::spawn(move || {
                let mut last_tick = Instant::now();
                loop {
                    // Calculate timeout for next tick
                    let timeout = tick_rate
                        .checked_sub(last_tick.elapsed())
                        .unwrap_or(Duration::ZERO);

                    match event::poll(timeout) {
                        Ok(true) => {
                            let forwarded = match event::read() {
                                Ok(CrosstermEvent::Key(key)) => sender.send(Event::Key(key)),
                                Ok(CrosstermEvent::Mouse(mouse)) => {
                                    sender.send(Event::Mouse(mouse))
                                }
                                Ok(CrosstermEvent::Resize(width, height)) => {
                                    sender.send(Event::Resize(width, height))
                                }
                                Ok(_) => Ok(()),
                                Err(e) => {
                                    error!("Failed to read terminal event: {}", e);
                                    return;
                                }
                            };
                            if forwarded.is_err() {
                                return;
                            }
                        }
                        Ok(false) => {}
                        Err(e) => {
                            error!("Failed to poll terminal events: {}", e);
                            return;
                        }
                    }

                    // Send tick event if needed
                    if last_tick.elapsed() >= tick_rate {
                        if sender.send(Event::Tick).is_err() {
                            return;
                        }
                        last_tick = Instant::now();
                    }
                }
            })
        };

        Self {
            sender,
            receiver,
            handler,
        }
    }

    /// A sender for pushing events from other threads
    pub fn sender(&self) -> mpsc::Sender<Event> {
        self.sender.clone()
    }

    /// Get the next event (blocking)
    pub fn next(&self) -> Result<Event, mpsc::RecvError> {
        self.receiver.recv()
    }
}

impl Default for EventHandler {
    fn default() -> Self {
        Self::new(Duration::from_millis(250))
    }
}
