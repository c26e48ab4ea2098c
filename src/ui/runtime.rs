use std::sync::mpsc::RecvTimeoutError;
use std::time::Duration;

use anyhow::Context;
use tracing::info;

use crate::api::ApiClient;
use crate::cli::Cli;
use crate::config::Config;
use crate::ui::app::App;
use crate::ui::events::{AppEvent, EventHandler};
use crate::ui::input::handle_key;
use crate::ui::render::draw;
use crate::ui::route::Route;
use crate::ui::terminal_guard::setup_terminal;
use crate::ui::worker;

pub fn run(args: Cli) -> anyhow::Result<()> {
    let config = match &args.config {
        Some(path) => Config::load_from(path)?,
        None => Config::load()?,
    };

    let runtime = tokio::runtime::Builder::new_multi_thread()
        .enable_all()
        .build()
        .context("failed to start async runtime")?;
    let api = ApiClient::new(config.endpoints.clone())?;

    let tick_rate = Duration::from_millis(args.tick_rate_ms);
    let (mut terminal, guard) = setup_terminal()?;
    let events = EventHandler::new(tick_rate);

    let (command_tx, command_rx) = tokio::sync::mpsc::unbounded_channel();
    runtime.spawn(worker::run(api, command_rx, events.sender()));

    let mut app = App::new();
    app.attach_worker(command_tx);
    app.navigate(Route::parse(&args.start));
    info!(start = %args.start, "ui started");

    loop {
        terminal.draw(|frame| draw(frame, &app))?;
        if app.should_quit() {
            break;
        }

        match events.next(tick_rate) {
            Ok(AppEvent::Input(key)) => handle_key(&mut app, key),
            Ok(AppEvent::Tick) => {}
            Ok(AppEvent::Resize(..)) => {}
            Ok(event) => app.on_event(event),
            Err(RecvTimeoutError::Timeout) => {}
            Err(RecvTimeoutError::Disconnected) => break,
        }
    }

    drop(guard);
    Ok(())
}
