use dioxus::prelude::*;
use shared_types::{BorrowRequest, RequestId};

/// Pending borrow requests awaiting librarian approval.
#[component]
pub fn RequestsPage(
    requests: Vec<BorrowRequest>,
    on_approve: EventHandler<RequestId>,
    on_books: EventHandler<()>,
) -> Element {
    rsx! {
        div { class: "requests-page",
            div { class: "books-toolbar",
                button {
                    id: "back-to-books",
                    class: "button",
                    r#type: "button",
                    onclick: move |_| on_books.call(()),
                    "Back to Books"
                }
            }
            h2 { "Pending Requests" }
            if requests.is_empty() {
                p { class: "empty-state", "No pending requests." }
            }
            div { id: "requests-list",
                for request in requests.iter() {
                    RequestCard { key: "{request.id}", request: request.clone(), on_approve }
                }
            }
        }
    }
}

#[component]
fn RequestCard(request: BorrowRequest, on_approve: EventHandler<RequestId>) -> Element {
    let request_id = request.id;

    rsx! {
        div { class: "request-card",
            p { "Book: {request.book_name}" }
            p { "Requested by: {request.user_name}" }
            button {
                class: "button approve-btn",
                r#type: "button",
                onclick: move |_| on_approve.call(request_id),
                "Approve"
            }
        }
    }
}
