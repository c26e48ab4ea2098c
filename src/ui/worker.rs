//! Fetch worker: turns `UiCommand`s into HTTP calls and posts
//! generation-tagged completion events back to the UI channel.
//!
//! Each command spawns its own task, so independent views can have requests
//! in flight concurrently and a slow call never blocks the queue. There is
//! no cancellation: a superseded request still completes and its event is
//! discarded by the generation check on the UI side.

use std::sync::mpsc::Sender;

use tokio::sync::mpsc::UnboundedReceiver;
use tracing::debug;

use crate::api::ApiClient;
use crate::ui::app::UiCommand;
use crate::ui::events::AppEvent;

pub async fn run(api: ApiClient, mut commands: UnboundedReceiver<UiCommand>, events: Sender<AppEvent>) {
    while let Some(command) = commands.recv().await {
        debug!(?command, "fetch worker command");
        let api = api.clone();
        let events = events.clone();
        tokio::spawn(async move {
            let event = match command {
                UiCommand::FetchProducts { request } => AppEvent::ProductsLoaded {
                    request,
                    result: api.fetch_products().await.map_err(|e| e.to_string()),
                },
                UiCommand::FetchProduct { request, id } => AppEvent::ProductLoaded {
                    request,
                    result: api.fetch_product(&id).await.map_err(|e| e.to_string()),
                },
                UiCommand::FetchWeather { request, city } => AppEvent::WeatherLoaded {
                    request,
                    result: api.fetch_weather(&city).await.map_err(|e| e.to_string()),
                },
                UiCommand::CreateProduct { request, draft } => AppEvent::ProductCreated {
                    request,
                    result: api.create_product(&draft).await.map_err(|e| e.to_string()),
                },
                UiCommand::ScheduleNavigate { request, delay } => {
                    tokio::time::sleep(delay).await;
                    AppEvent::NavigateAfterCreate { request }
                }
            };
            // The UI may already be gone on shutdown; nothing to do then.
            let _ = events.send(event);
        });
    }
}
