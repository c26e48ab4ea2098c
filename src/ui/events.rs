use std::sync::mpsc::{self, Receiver, Sender};
use std::thread;
use std::time::{Duration, Instant};

use crossterm::event::{Event, KeyEvent};

use crate::api::{CreatedProduct, Product, WeatherReport};

/// Everything the UI loop reacts to: terminal input, ticks, and completion
/// events posted by the fetch worker. Completions carry the request
/// generation so stale ones can be discarded.
#[derive(Debug)]
pub enum AppEvent {
    Input(KeyEvent),
    Tick,
    Resize(u16, u16),
    ProductsLoaded {
        request: u64,
        result: Result<Vec<Product>, String>,
    },
    ProductLoaded {
        request: u64,
        result: Result<Product, String>,
    },
    WeatherLoaded {
        request: u64,
        result: Result<WeatherReport, String>,
    },
    ProductCreated {
        request: u64,
        result: Result<CreatedProduct, String>,
    },
    /// The post-create navigation delay elapsed. Honored only while the
    /// editor still shows the creation tagged with this generation.
    NavigateAfterCreate { request: u64 },
}

pub struct EventHandler {
    rx: Receiver<AppEvent>,
    tx: Sender<AppEvent>,
}

impl EventHandler {
    /// Spawn the input thread: polls terminal events and emits a tick at
    /// `tick_rate`. The sender side is cloned into the fetch worker so
    /// completions arrive on the same channel.
    pub fn new(tick_rate: Duration) -> Self {
        let (tx, rx) = mpsc::channel();
        let event_tx = tx.clone();

        thread::spawn(move || {
            let mut last_tick = Instant::now();
            loop {
                let timeout = tick_rate.saturating_sub(last_tick.elapsed());
                match crossterm::event::poll(timeout) {
                    Ok(true) => match crossterm::event::read() {
                        Ok(Event::Key(key)) => {
                            if event_tx.send(AppEvent::Input(key)).is_err() {
                                break;
                            }
                        }
                        Ok(Event::Resize(cols, rows)) => {
                            let _ = event_tx.send(AppEvent::Resize(cols, rows));
                        }
                        Ok(_) => {}
                        Err(err) => {
                            tracing::error!(error = %err, "terminal event read failed");
                            break;
                        }
                    },
                    Ok(false) => {}
                    Err(err) => {
                        tracing::error!(error = %err, "terminal event poll failed");
                        break;
                    }
                }

                if last_tick.elapsed() >= tick_rate {
                    if event_tx.send(AppEvent::Tick).is_err() {
                        break;
                    }
                    last_tick = Instant::now();
                }
            }
        });

        Self { rx, tx }
    }

    pub fn next(&self, timeout: Duration) -> Result<AppEvent, mpsc::RecvTimeoutError> {
        self.rx.recv_timeout(timeout)
    }

    pub fn sender(&self) -> Sender<AppEvent> {
        self.tx.clone()
    }
}
