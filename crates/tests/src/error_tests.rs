use crate::common::*;
use client::{
    AppState, BookForm, Controller, NoticeLevel, Outcome, RegisterForm, ReviewForm, Screen, View,
};
use pretty_assertions::assert_eq;
use serde_json::json;
use shared_types::{RequestErrorKind, User};

#[tokio::test]
async fn server_error_message_is_shown_and_view_kept() {
    let backend = StubBackend::new();
    seed_catalog(&backend);
    backend.respond(
        "POST",
        "/books/1/request-borrow",
        400,
        json!({ "error": "Book is not available" }),
    );
    let (controller, _storage) = signed_in(&backend, &reader()).await;

    let mut state = controller.start().await;
    let before = state.screen.clone();
    state.apply(controller.request_borrow(1).await);

    assert_eq!(state.view(), View::BooksList);
    assert_eq!(state.screen, before);
    let notice = state.notice.unwrap();
    assert_eq!(notice.level, NoticeLevel::Error);
    assert_eq!(notice.message, "Book is not available");
}

#[tokio::test]
async fn error_without_message_uses_generic_text() {
    let backend = StubBackend::new();
    seed_catalog(&backend);
    backend.respond("POST", "/books/1/return", 500, json!({ "detail": "boom" }));
    let (controller, _storage) = signed_in(&backend, &reader()).await;

    let err = controller.return_book(1).await.unwrap_err();
    assert_eq!(err.kind, RequestErrorKind::Application);
    assert_eq!(err.status, Some(500));
    assert_eq!(err.message, "Something went wrong");
}

#[tokio::test]
async fn unreachable_backend_gives_readable_error() {
    // Bind then drop to get a port nothing listens on.
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);
    let (controller, _storage) = controller_with(
        &format!("http://{addr}"),
        signed_in_storage("tok-123", &reader()),
    );

    let state = controller.start().await;
    assert_eq!(state.view(), View::BooksList);
    let notice = state.notice.unwrap();
    assert_eq!(notice.level, NoticeLevel::Error);
    assert!(
        notice.message.starts_with("Could not reach the library service"),
        "{}",
        notice.message
    );
}

#[tokio::test]
async fn malformed_success_body_is_a_decode_error() {
    let backend = StubBackend::new();
    backend
        .respond("GET", "/books", 200, json!({ "not": "a list" }))
        .respond("GET", "/categories", 200, json!([]));
    let (controller, _storage) = signed_in(&backend, &reader()).await;

    let err = controller.filter_books("").await.unwrap_err();
    assert_eq!(err.kind, RequestErrorKind::Decode);
}

#[tokio::test]
async fn failed_reload_after_success_keeps_stale_page() {
    let backend = StubBackend::new();
    seed_catalog(&backend);
    backend.respond("POST", "/books/1/request-borrow", 200, json!({ "message": "ok", "id": 9 }));
    let (controller, _storage) = signed_in(&backend, &reader()).await;
    let mut state = controller.start().await;
    let before = state.screen.clone();

    backend.respond("GET", "/books", 503, json!({ "error": "Catalog offline" }));
    state.apply(controller.request_borrow(1).await);

    assert_eq!(state.screen, before);
    assert_eq!(state.notice.unwrap().message, "Catalog offline");
    assert_eq!(backend.requests_to("/books/1/request-borrow").len(), 1);
}

/// Actions whose server-side rejection must surface as a notice.
#[derive(Debug, Clone, Copy)]
enum Action {
    Return,
    Approve,
    CreateBook,
    CreateCategory,
    SubmitReview,
    Register,
}

impl Action {
    fn endpoint(self) -> &'static str {
        match self {
            Action::Return => "/books/1/return",
            Action::Approve => "/borrow-requests/4/approve",
            Action::CreateBook => "/books",
            Action::CreateCategory => "/categories",
            Action::SubmitReview => "/books/1/reviews",
            Action::Register => "/register",
        }
    }

    fn actor(self) -> Option<User> {
        match self {
            Action::Return | Action::SubmitReview => Some(reader()),
            Action::Approve | Action::CreateBook | Action::CreateCategory => Some(librarian()),
            Action::Register => None,
        }
    }

    fn starts_on(self) -> View {
        match self {
            Action::Return | Action::CreateBook | Action::CreateCategory => View::BooksList,
            Action::Approve => View::PendingRequests,
            Action::SubmitReview => View::BorrowHistory,
            Action::Register => View::Register,
        }
    }

    async fn run(self, controller: &Controller) -> Outcome {
        match self {
            Action::Return => controller.return_book(1).await,
            Action::Approve => controller.approve_request(4).await,
            Action::CreateBook => {
                let form = BookForm {
                    name: "Dune".into(),
                    author: "Frank Herbert".into(),
                    category: "2".into(),
                };
                controller.create_book(&form).await
            }
            Action::CreateCategory => controller.create_category("Poetry").await,
            Action::SubmitReview => {
                let form = ReviewForm {
                    text: "Loved it".into(),
                    rating: 4,
                };
                controller.submit_review(1, &form).await
            }
            Action::Register => {
                let form = RegisterForm {
                    name: "Rita".into(),
                    email: "rita@example.com".into(),
                    password: "secret".into(),
                    is_librarian: false,
                };
                controller.register(&form).await
            }
        }
    }
}

#[tokio::test]
async fn rejected_actions_keep_the_page_and_show_the_server_message() {
    let actions = [
        Action::Return,
        Action::Approve,
        Action::CreateBook,
        Action::CreateCategory,
        Action::SubmitReview,
        Action::Register,
    ];

    for action in actions {
        let backend = StubBackend::new();
        let message = format!("{action:?} refused");
        backend.respond("POST", action.endpoint(), 422, json!({ "error": message }));
        let (controller, _storage) = match action.actor() {
            Some(user) => signed_in(&backend, &user).await,
            None => controller(&backend.serve().await),
        };

        let screen = Screen::empty(action.starts_on());
        let mut state = AppState {
            screen: screen.clone(),
            notice: None,
            ready: true,
            revision: 2,
        };
        state.apply(action.run(&controller).await);

        assert_eq!(state.screen, screen, "{action:?}");
        assert_eq!(state.revision, 2, "{action:?}");
        let notice = state.notice.expect("notice raised");
        assert_eq!(notice.level, NoticeLevel::Error, "{action:?}");
        assert_eq!(notice.message, message, "{action:?}");
        assert_eq!(backend.requests_to(action.endpoint()).len(), 1, "{action:?}");
    }
}
