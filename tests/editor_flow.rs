mod common;

use common::{app_with_worker, press, screen_text, type_str};
use crossterm::event::KeyCode;

use storefront::api::CreatedProduct;
use storefront::ui::app::{UiCommand, NAVIGATE_DELAY};
use storefront::ui::editor::{SubmitState, PLACEHOLDER_IMAGE};
use storefront::ui::events::AppEvent;
use storefront::ui::route::Route;

#[test]
fn empty_title_is_rejected_without_a_request() {
    let (mut app, mut commands) = app_with_worker();
    app.navigate(Route::Editor);
    press(&mut app, KeyCode::Enter);

    assert!(commands.try_recv().is_err(), "no network call on rejection");
    assert!(screen_text(&app).contains("Title is required"));
}

#[test]
fn zero_and_negative_prices_are_rejected_without_a_request() {
    for price in ["0", "-5"] {
        let (mut app, mut commands) = app_with_worker();
        app.navigate(Route::Editor);
        type_str(&mut app, "Blue Hoodie");
        press(&mut app, KeyCode::Tab);
        type_str(&mut app, price);
        press(&mut app, KeyCode::Enter);

        assert!(commands.try_recv().is_err());
        assert!(
            screen_text(&app).contains("Price must be a number and greater than 0."),
            "price {:?} must be rejected",
            price
        );
    }
}

#[test]
fn blank_image_falls_back_to_placeholder() {
    let (mut app, mut commands) = app_with_worker();
    app.navigate(Route::Editor);
    type_str(&mut app, "Blue Hoodie");
    press(&mut app, KeyCode::Tab);
    type_str(&mut app, "39.99");
    press(&mut app, KeyCode::Enter);

    match commands.try_recv().unwrap() {
        UiCommand::CreateProduct { draft, .. } => {
            assert_eq!(draft.title, "Blue Hoodie");
            assert_eq!(draft.price, 39.99);
            assert_eq!(draft.image, PLACEHOLDER_IMAGE);
        }
        other => panic!("unexpected command: {:?}", other),
    }
    assert!(app.editor().is_submitting());
}

#[test]
fn successful_create_confirms_and_navigates_after_delay() {
    let (mut app, mut commands) = app_with_worker();
    app.navigate(Route::Editor);
    type_str(&mut app, "Blue Hoodie");
    press(&mut app, KeyCode::Tab);
    type_str(&mut app, "39.99");
    press(&mut app, KeyCode::Enter);
    let request = match commands.try_recv().unwrap() {
        UiCommand::CreateProduct { request, .. } => request,
        other => panic!("unexpected command: {:?}", other),
    };

    app.on_event(AppEvent::ProductCreated {
        request,
        result: Ok(CreatedProduct { id: Some(42) }),
    });
    assert!(screen_text(&app).contains("42"));
    match commands.try_recv().unwrap() {
        UiCommand::ScheduleNavigate {
            request: scheduled,
            delay,
        } => {
            assert_eq!(scheduled, request);
            assert_eq!(delay, NAVIGATE_DELAY);
        }
        other => panic!("unexpected command: {:?}", other),
    }

    app.on_event(AppEvent::NavigateAfterCreate { request });
    assert_eq!(app.route(), &Route::Products);
}

#[test]
fn create_without_server_id_shows_fallback_marker() {
    let (mut app, mut commands) = app_with_worker();
    app.navigate(Route::Editor);
    type_str(&mut app, "Mug");
    press(&mut app, KeyCode::Tab);
    type_str(&mut app, "12.5");
    press(&mut app, KeyCode::Enter);
    let request = match commands.try_recv().unwrap() {
        UiCommand::CreateProduct { request, .. } => request,
        other => panic!("unexpected command: {:?}", other),
    };

    app.on_event(AppEvent::ProductCreated {
        request,
        result: Ok(CreatedProduct { id: None }),
    });
    assert!(screen_text(&app).contains("N/A"));
}

#[test]
fn create_failure_stays_on_the_form() {
    let (mut app, mut commands) = app_with_worker();
    app.navigate(Route::Editor);
    type_str(&mut app, "Mug");
    press(&mut app, KeyCode::Tab);
    type_str(&mut app, "12.5");
    press(&mut app, KeyCode::Enter);
    let request = match commands.try_recv().unwrap() {
        UiCommand::CreateProduct { request, .. } => request,
        other => panic!("unexpected command: {:?}", other),
    };

    app.on_event(AppEvent::ProductCreated {
        request,
        result: Err("Failed to create product.".to_string()),
    });
    assert_eq!(app.route(), &Route::Editor);
    assert!(screen_text(&app).contains("Failed to create product."));
    // No navigation was scheduled.
    assert!(commands.try_recv().is_err());
}

#[test]
fn leaving_the_editor_cancels_the_scheduled_navigation() {
    let (mut app, mut commands) = app_with_worker();
    app.navigate(Route::Editor);
    type_str(&mut app, "Mug");
    press(&mut app, KeyCode::Tab);
    type_str(&mut app, "12.5");
    press(&mut app, KeyCode::Enter);
    let request = match commands.try_recv().unwrap() {
        UiCommand::CreateProduct { request, .. } => request,
        other => panic!("unexpected command: {:?}", other),
    };
    app.on_event(AppEvent::ProductCreated {
        request,
        result: Ok(CreatedProduct { id: Some(7) }),
    });
    let _ = commands.try_recv(); // the scheduled navigation

    // User walks away before the delay fires; the editor is dismantled.
    app.navigate(Route::Weather);
    app.on_event(AppEvent::NavigateAfterCreate { request });
    assert_eq!(app.route(), &Route::Weather);
}

#[test]
fn submit_is_disabled_while_a_request_is_in_flight() {
    let (mut app, mut commands) = app_with_worker();
    app.navigate(Route::Editor);
    type_str(&mut app, "Mug");
    press(&mut app, KeyCode::Tab);
    type_str(&mut app, "12.5");
    press(&mut app, KeyCode::Enter);
    assert!(commands.try_recv().is_ok());

    assert!(screen_text(&app).contains("Creating..."));
    press(&mut app, KeyCode::Enter);
    assert!(commands.try_recv().is_err(), "second submit must be ignored");
}

#[test]
fn draft_is_discarded_on_navigation() {
    let (mut app, _commands) = app_with_worker();
    app.navigate(Route::Editor);
    type_str(&mut app, "Draft title");
    app.navigate(Route::Home);
    app.navigate(Route::Editor);
    assert_eq!(app.editor().title, "");
    assert_eq!(app.editor().submit, SubmitState::Idle);
}
