use crate::common::*;
use client::{AppState, LoginForm, Screen, SessionStorage, View};
use pretty_assertions::assert_eq;

fn login_form() -> LoginForm {
    LoginForm {
        email: "rita@example.com".into(),
        password: "secret".into(),
    }
}

#[tokio::test]
async fn login_then_logout_clears_session_and_storage() {
    let backend = StubBackend::new();
    seed_catalog(&backend);
    script_login(&backend, "tok-abc", &reader());
    let base = backend.serve().await;
    let (controller, storage) = controller(&base);

    let step = controller.login(&login_form()).await.unwrap();
    assert_eq!(step.screen.view(), View::BooksList);
    assert_eq!(controller.session().credential().as_deref(), Some("tok-abc"));
    assert_eq!(storage.get("token").as_deref(), Some("tok-abc"));
    assert!(storage.get("user").is_some());

    let step = controller.logout();
    assert_eq!(step.screen, Screen::Login);
    assert!(controller.session().credential().is_none());
    assert!(controller.current_user().is_none());
    assert!(storage.get("token").is_none());
    assert!(storage.get("user").is_none());
}

#[tokio::test]
async fn logout_sends_no_request() {
    let backend = StubBackend::new();
    seed_catalog(&backend);
    let (controller, _storage) = signed_in(&backend, &reader()).await;

    controller.logout();
    assert!(backend.requests().is_empty());
}

#[tokio::test]
async fn login_lands_on_role_view_once() {
    let backend = StubBackend::new();
    seed_catalog(&backend);
    script_login(&backend, "tok-lib", &librarian());
    let base = backend.serve().await;
    let (controller, _storage) = controller(&base);

    let mut state = controller.start().await;
    assert_eq!(state.view(), View::Login);

    state.apply(controller.login(&login_form()).await);
    assert_eq!(state.view(), View::PendingRequests);
    assert_eq!(state.notice, None);
    assert_eq!(backend.requests_to("/login").len(), 1);
    assert_eq!(backend.requests_to("/borrow-requests").len(), 1);
}

#[tokio::test]
async fn startup_restores_persisted_session() {
    let backend = StubBackend::new();
    seed_catalog(&backend);
    let (controller, _storage) = signed_in(&backend, &reader()).await;

    let state = controller.start().await;
    assert!(state.ready);
    assert_eq!(state.view(), View::BooksList);
    match state.screen {
        Screen::Books(books) => assert_eq!(books.books.len(), 1),
        other => panic!("expected books page, got {other:?}"),
    }
    assert_eq!(controller.current_user(), Some(reader()));
}

#[tokio::test]
async fn startup_with_half_written_session_shows_login() {
    let backend = StubBackend::new();
    let base = backend.serve().await;
    let mut storage = client::MemoryStorage::new();
    storage.set("token", "orphaned").unwrap();
    let (controller, storage) = controller_with(&base, storage);

    let state = controller.start().await;
    assert_eq!(state.view(), View::Login);
    assert!(storage.get("token").is_none());
    assert!(backend.requests().is_empty());
}

#[tokio::test]
async fn failed_login_stays_on_login_with_server_message() {
    let backend = StubBackend::new();
    backend.respond(
        "POST",
        "/login",
        401,
        serde_json::json!({ "error": "Invalid credentials" }),
    );
    let base = backend.serve().await;
    let (controller, storage) = controller(&base);

    let mut state = AppState {
        screen: Screen::Login,
        notice: None,
        ready: true,
        revision: 0,
    };
    state.apply(controller.login(&login_form()).await);

    assert_eq!(state.view(), View::Login);
    assert_eq!(state.notice.unwrap().message, "Invalid credentials");
    assert!(storage.is_empty());
}
