use client::ReviewForm;
use dioxus::prelude::*;
use shared_types::{BookId, HistoryEntry};

/// Key for one entry's review draft. A book borrowed twice appears twice,
/// and `revision` changes after every successful action so drafts reset
/// once a review has gone through.
fn draft_key(revision: u64, index: usize, book_id: BookId) -> String {
    format!("{revision}-{index}-{book_id}")
}

/// The current user's borrow history with a review form per entry.
#[component]
pub fn HistoryPage(
    entries: Vec<HistoryEntry>,
    revision: u64,
    on_back: EventHandler<()>,
    on_review: EventHandler<(BookId, ReviewForm)>,
) -> Element {
    let keyed: Vec<(String, HistoryEntry)> = entries
        .iter()
        .enumerate()
        .map(|(index, entry)| (draft_key(revision, index, entry.book_id), entry.clone()))
        .collect();

    rsx! {
        div { class: "history-page",
            div { class: "books-toolbar",
                button {
                    id: "back-to-books",
                    class: "button",
                    r#type: "button",
                    onclick: move |_| on_back.call(()),
                    "Back to Books"
                }
            }
            h2 { "Borrow History" }
            if entries.is_empty() {
                p { class: "empty-state", "You have not borrowed any books yet." }
            }
            div { id: "history-list",
                for (key, entry) in keyed {
                    HistoryCard { key: "{key}", entry, on_review }
                }
            }
        }
    }
}

#[component]
fn HistoryCard(entry: HistoryEntry, on_review: EventHandler<(BookId, ReviewForm)>) -> Element {
    let book_id = entry.book_id;
    let status = if entry.returned { "Returned" } else { "Borrowed" };
    let mut text = use_signal(String::new);
    let mut rating = use_signal(|| ReviewForm::default().rating);

    let handle_submit = move |evt: FormEvent| {
        evt.prevent_default();
        on_review.call((
            book_id,
            ReviewForm {
                text: text(),
                rating: rating(),
            },
        ));
    };

    rsx! {
        div { class: "history-entry",
            h3 { "{entry.book_name}" }
            if !entry.author.is_empty() {
                p { "Author: {entry.author}" }
            }
            p { class: "history-status", "Status: {status}" }
            if let Some(review) = entry.review.as_ref() {
                div { class: "review",
                    if !review.text.is_empty() {
                        p { class: "review-text", "{review.text}" }
                    }
                    p { class: "review-rating", "Rating: {review.rating}/5" }
                }
            }
            form { class: "review-form", onsubmit: handle_submit,
                textarea {
                    class: "review-input",
                    placeholder: "Write your review",
                    value: "{text}",
                    oninput: move |e: FormEvent| text.set(e.value()),
                }
                select {
                    class: "review-rating-select",
                    value: "{rating}",
                    onchange: move |e: FormEvent| {
                        if let Ok(value) = e.value().parse::<u8>() {
                            rating.set(value);
                        }
                    },
                    for value in (1..=5u8).rev() {
                        option { key: "{value}", value: "{value}", selected: value == rating(), "{value}" }
                    }
                }
                button { class: "button", r#type: "submit", "Submit Review" }
            }
        }
    }
}
