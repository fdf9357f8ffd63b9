use crate::common::*;
use client::{BookForm, Screen, Transition, View};
use pretty_assertions::assert_eq;
use serde_json::json;
use shared_types::RequestErrorKind;

#[tokio::test]
async fn regular_user_cannot_reach_librarian_actions() {
    let backend = StubBackend::new();
    seed_catalog(&backend);
    let (controller, _storage) = signed_in(&backend, &reader()).await;

    let approve = controller.approve_request(4).await.unwrap_err();
    assert_eq!(approve.kind, RequestErrorKind::Validation);

    let book = controller
        .create_book(&BookForm {
            name: "Dune".into(),
            author: "Frank Herbert".into(),
            category: "Science Fiction".into(),
        })
        .await
        .unwrap_err();
    assert_eq!(book.kind, RequestErrorKind::Validation);

    let category = controller.create_category("Poetry").await.unwrap_err();
    assert_eq!(category.kind, RequestErrorKind::Validation);

    let nav = controller
        .navigate(View::BooksList, Transition::OpenRequests)
        .await
        .unwrap_err();
    assert_eq!(nav.kind, RequestErrorKind::Validation);

    assert!(backend.requests().is_empty());
}

#[tokio::test]
async fn librarian_approves_and_sees_refreshed_queue() {
    let backend = StubBackend::new();
    seed_catalog(&backend);
    backend.respond(
        "POST",
        "/borrow-requests/4/approve",
        200,
        json!({ "message": "Request approved" }),
    );
    let (controller, _storage) = signed_in(&backend, &librarian()).await;

    let state = controller.start().await;
    assert_eq!(state.view(), View::PendingRequests);

    backend.respond("GET", "/borrow-requests", 200, json!([]));
    let step = controller.approve_request(4).await.unwrap();

    assert_eq!(step.screen, Screen::Requests(vec![]));
    assert_eq!(step.notice.unwrap().message, "Request approved successfully!");
    let approve = &backend.requests_to("/borrow-requests/4/approve")[0];
    assert_eq!(approve.method, "POST");
    assert_eq!(approve.bearer.as_deref(), Some("tok-123"));
}

#[tokio::test]
async fn librarian_creates_book() {
    let backend = StubBackend::new();
    seed_catalog(&backend);
    backend.respond("POST", "/books", 201, json!({ "message": "Book created", "id": 2 }));
    let (controller, _storage) = signed_in(&backend, &librarian()).await;

    let step = controller
        .create_book(&BookForm {
            name: " Dune ".into(),
            author: "Frank Herbert".into(),
            category: "Science Fiction".into(),
        })
        .await
        .unwrap();

    assert_eq!(step.screen.view(), View::BooksList);
    assert_eq!(step.notice.unwrap().message, "Book created successfully!");
    let posted = backend
        .requests()
        .into_iter()
        .find(|r| r.method == "POST" && r.path == "/books")
        .unwrap();
    assert_eq!(
        posted.body,
        Some(json!({ "name": "Dune", "author": "Frank Herbert", "category": "Science Fiction" }))
    );
}

#[tokio::test]
async fn librarian_book_form_requires_fields() {
    let backend = StubBackend::new();
    let (controller, _storage) = signed_in(&backend, &librarian()).await;

    let err = controller
        .create_book(&BookForm {
            name: "Dune".into(),
            author: String::new(),
            category: "Science Fiction".into(),
        })
        .await
        .unwrap_err();

    assert_eq!(err.message, "Author is required");
    assert!(backend.requests().is_empty());
}

#[tokio::test]
async fn librarian_creates_category() {
    let backend = StubBackend::new();
    seed_catalog(&backend);
    backend.respond("POST", "/categories", 201, json!({ "message": "Category created", "id": 8 }));
    let (controller, _storage) = signed_in(&backend, &librarian()).await;

    let step = controller.create_category("Poetry").await.unwrap();

    assert_eq!(step.notice.unwrap().message, "Category created successfully!");
    let posted = backend
        .requests()
        .into_iter()
        .find(|r| r.method == "POST" && r.path == "/categories")
        .unwrap();
    assert_eq!(posted.body, Some(json!({ "name": "Poetry" })));
}

#[tokio::test]
async fn librarian_moves_between_queue_and_catalog() {
    let backend = StubBackend::new();
    seed_catalog(&backend);
    let (controller, _storage) = signed_in(&backend, &librarian()).await;

    let step = controller
        .navigate(View::PendingRequests, Transition::OpenBooks)
        .await
        .unwrap();
    assert_eq!(step.screen.view(), View::BooksList);

    let step = controller
        .navigate(View::BooksList, Transition::OpenRequests)
        .await
        .unwrap();
    assert_eq!(step.screen.view(), View::PendingRequests);
}
