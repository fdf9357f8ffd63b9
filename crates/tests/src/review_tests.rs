use crate::common::*;
use client::{ReviewForm, Screen, View};
use pretty_assertions::assert_eq;
use serde_json::json;
use shared_types::RequestErrorKind;

#[tokio::test]
async fn empty_review_sends_nothing() {
    let backend = StubBackend::new();
    seed_catalog(&backend);
    let (controller, _storage) = signed_in(&backend, &reader()).await;

    let err = controller
        .submit_review(
            1,
            &ReviewForm {
                text: "   ".into(),
                rating: 4,
            },
        )
        .await
        .unwrap_err();

    assert_eq!(err.kind, RequestErrorKind::Validation);
    assert_eq!(err.message, "Please write a review before submitting");
    assert!(backend.requests().is_empty());
}

#[tokio::test]
async fn out_of_range_rating_sends_nothing() {
    let backend = StubBackend::new();
    let (controller, _storage) = signed_in(&backend, &reader()).await;

    let err = controller
        .submit_review(
            1,
            &ReviewForm {
                text: "Fine".into(),
                rating: 9,
            },
        )
        .await
        .unwrap_err();

    assert!(err.is_validation());
    assert!(backend.requests().is_empty());
}

#[tokio::test]
async fn review_posts_and_reloads_history() {
    let backend = StubBackend::new();
    seed_catalog(&backend);
    backend.respond(
        "POST",
        "/books/1/reviews",
        201,
        json!({ "message": "Review added", "id": 5 }),
    );
    let (controller, _storage) = signed_in(&backend, &reader()).await;

    let step = controller
        .submit_review(
            1,
            &ReviewForm {
                text: "A quiet classic".into(),
                rating: 5,
            },
        )
        .await
        .unwrap();

    assert_eq!(step.screen.view(), View::BorrowHistory);
    assert_eq!(step.notice.unwrap().message, "Review submitted successfully!");
    match step.screen {
        Screen::History(entries) => assert_eq!(entries[0].book_name, "Book 1"),
        other => panic!("expected history page, got {other:?}"),
    }

    let posted = &backend.requests_to("/books/1/reviews")[0];
    assert_eq!(posted.method, "POST");
    assert_eq!(
        posted.body,
        Some(json!({ "text": "A quiet classic", "rating": 5 }))
    );
    assert_eq!(backend.requests_to("/user/history").len(), 1);
}
