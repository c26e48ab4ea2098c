use std::time::Duration;

use tokio::sync::mpsc;
use tracing::warn;

use crate::api::NewProduct;
use crate::ui::detail::{DetailIntent, DetailReducer, DetailState};
use crate::ui::editor::{validate, EditorIntent, EditorReducer, EditorState, SubmitState};
use crate::ui::events::AppEvent;
use crate::ui::mvi::Reducer;
use crate::ui::products::{ProductsIntent, ProductsReducer, ProductsState};
use crate::ui::route::Route;
use crate::ui::weather::{WeatherIntent, WeatherReducer, WeatherState};

/// Delay between a successful create and navigation back to the listing.
pub const NAVIGATE_DELAY: Duration = Duration::from_millis(1000);

/// Work orders for the fetch worker. Each carries the request generation its
/// completion event must echo back.
#[derive(Debug, PartialEq)]
pub enum UiCommand {
    FetchProducts { request: u64 },
    FetchProduct { request: u64, id: String },
    FetchWeather { request: u64, city: String },
    CreateProduct { request: u64, draft: NewProduct },
    ScheduleNavigate { request: u64, delay: Duration },
}

pub type UiCommandSender = mpsc::UnboundedSender<UiCommand>;

/// Generic MVI dispatch: takes current state, runs reducer, stores result.
macro_rules! dispatch_mvi {
    ($self:expr, $field:ident, $reducer:ty, $intent:expr) => {{
        $self.$field = <$reducer>::reduce(std::mem::take(&mut $self.$field), $intent);
    }};
}

pub struct App {
    should_quit: bool,
    route: Route,
    products: ProductsState,
    detail: DetailState,
    editor: EditorState,
    weather: WeatherState,
    next_request: u64,
    commands: Option<UiCommandSender>,
}

impl App {
    pub fn new() -> Self {
        Self {
            should_quit: false,
            route: Route::Home,
            products: ProductsState::default(),
            detail: DetailState::default(),
            editor: EditorState::default(),
            weather: WeatherState::default(),
            next_request: 0,
            commands: None,
        }
    }

    /// Connect the fetch worker. Views issue no requests until this is set.
    pub fn attach_worker(&mut self, sender: UiCommandSender) {
        self.commands = Some(sender);
    }

    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    pub fn request_quit(&mut self) {
        self.should_quit = true;
    }

    pub fn route(&self) -> &Route {
        &self.route
    }

    pub fn products(&self) -> &ProductsState {
        &self.products
    }

    pub fn detail(&self) -> &DetailState {
        &self.detail
    }

    pub fn editor(&self) -> &EditorState {
        &self.editor
    }

    pub fn weather(&self) -> &WeatherState {
        &self.weather
    }

    /// Switch screens. The view being left is dismantled (its draft, fetch
    /// slot, and any pending scheduled navigation die with it); the view
    /// being entered runs its mount effect.
    /// Navigating to the route already shown still re-runs the mount
    /// effect; for the detail view this is how a parameter change re-fetches.
    pub fn navigate(&mut self, route: Route) {
        self.reset_current_view();
        self.route = route;
        self.mount_current_view();
    }

    fn reset_current_view(&mut self) {
        match self.route {
            Route::Products => dispatch_mvi!(self, products, ProductsReducer, ProductsIntent::Reset),
            Route::ProductDetail(_) => dispatch_mvi!(self, detail, DetailReducer, DetailIntent::Reset),
            Route::Editor => dispatch_mvi!(self, editor, EditorReducer, EditorIntent::Reset),
            Route::Weather => dispatch_mvi!(self, weather, WeatherReducer, WeatherIntent::Reset),
            Route::Home | Route::NotFound => {}
        }
    }

    fn mount_current_view(&mut self) {
        match self.route.clone() {
            Route::Products => self.fetch_products(),
            Route::ProductDetail(id) => self.fetch_product(id),
            // Editor and weather fetch only on explicit user action.
            Route::Editor | Route::Weather | Route::Home | Route::NotFound => {}
        }
    }

    /// Re-run the current screen's fetch on explicit user request.
    pub fn reload(&mut self) {
        self.mount_current_view();
    }

    fn fetch_products(&mut self) {
        let request = self.next_request();
        dispatch_mvi!(
            self,
            products,
            ProductsReducer,
            ProductsIntent::FetchStarted { request }
        );
        self.send(UiCommand::FetchProducts { request });
    }

    fn fetch_product(&mut self, id: String) {
        let request = self.next_request();
        dispatch_mvi!(
            self,
            detail,
            DetailReducer,
            DetailIntent::FetchStarted {
                id: id.clone(),
                request,
            }
        );
        self.send(UiCommand::FetchProduct { request, id });
    }

    /// Open the detail screen for the product under the listing cursor.
    pub fn open_selected_product(&mut self) {
        if let Some(id) = self.products.selected_product().map(|p| p.id.to_string()) {
            self.navigate(Route::ProductDetail(id));
        }
    }

    pub fn dispatch_products(&mut self, intent: ProductsIntent) {
        dispatch_mvi!(self, products, ProductsReducer, intent);
    }

    pub fn dispatch_editor(&mut self, intent: EditorIntent) {
        dispatch_mvi!(self, editor, EditorReducer, intent);
    }

    pub fn dispatch_weather(&mut self, intent: WeatherIntent) {
        dispatch_mvi!(self, weather, WeatherReducer, intent);
    }

    /// Submit the editor draft: validate locally, then issue the create
    /// request. Disabled while a request is in flight.
    pub fn submit_editor(&mut self) {
        if self.editor.is_submitting() {
            return;
        }
        match validate(&self.editor.title, &self.editor.price, &self.editor.image) {
            Ok(draft) => {
                let request = self.next_request();
                dispatch_mvi!(
                    self,
                    editor,
                    EditorReducer,
                    EditorIntent::SubmitStarted { request }
                );
                self.send(UiCommand::CreateProduct { request, draft });
            }
            Err(err) => {
                dispatch_mvi!(
                    self,
                    editor,
                    EditorReducer,
                    EditorIntent::SubmitRejected {
                        message: err.to_string(),
                    }
                );
            }
        }
    }

    /// Look up the weather for the typed city. Empty input is a no-op; a
    /// repeat trigger supersedes the in-flight lookup.
    pub fn search_weather(&mut self) {
        if self.weather.city.is_empty() {
            return;
        }
        let request = self.next_request();
        let city = self.weather.city.clone();
        dispatch_mvi!(
            self,
            weather,
            WeatherReducer,
            WeatherIntent::FetchStarted { request }
        );
        self.send(UiCommand::FetchWeather { request, city });
    }

    /// Apply a completion event from the fetch worker.
    pub fn on_event(&mut self, event: AppEvent) {
        match event {
            AppEvent::ProductsLoaded { request, result } => {
                dispatch_mvi!(
                    self,
                    products,
                    ProductsReducer,
                    ProductsIntent::FetchFinished {
                        request,
                        outcome: result,
                    }
                );
            }
            AppEvent::ProductLoaded { request, result } => {
                dispatch_mvi!(
                    self,
                    detail,
                    DetailReducer,
                    DetailIntent::FetchFinished {
                        request,
                        outcome: result,
                    }
                );
            }
            AppEvent::WeatherLoaded { request, result } => {
                dispatch_mvi!(
                    self,
                    weather,
                    WeatherReducer,
                    WeatherIntent::FetchFinished {
                        request,
                        outcome: result,
                    }
                );
            }
            AppEvent::ProductCreated { request, result } => {
                dispatch_mvi!(
                    self,
                    editor,
                    EditorReducer,
                    EditorIntent::SubmitFinished {
                        request,
                        outcome: result,
                    }
                );
                if matches!(
                    self.editor.submit,
                    SubmitState::Created { navigate, .. } if navigate == request
                ) {
                    self.send(UiCommand::ScheduleNavigate {
                        request,
                        delay: NAVIGATE_DELAY,
                    });
                }
            }
            AppEvent::NavigateAfterCreate { request } => {
                // Only honored while the editor still shows this creation;
                // navigating away first cancels the timer by generation.
                let live = matches!(
                    self.editor.submit,
                    SubmitState::Created { navigate, .. } if navigate == request
                );
                if live && self.route == Route::Editor {
                    self.navigate(Route::Products);
                }
            }
            AppEvent::Input(_) | AppEvent::Tick | AppEvent::Resize(..) => {}
        }
    }

    fn next_request(&mut self) -> u64 {
        self.next_request += 1;
        self.next_request
    }

    fn send(&mut self, command: UiCommand) {
        let Some(sender) = &self.commands else {
            warn!(?command, "no fetch worker attached, dropping command");
            return;
        };
        if sender.send(command).is_err() {
            warn!("fetch worker is gone");
        }
    }
}

impl Default for App {
    fn default() -> Self {
        Self::new()
    }
}
