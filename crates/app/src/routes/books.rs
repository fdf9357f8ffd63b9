use crate::format_helpers::{availability_label, book_control, format_rating, BookControl};
use client::{BookForm, BooksScreen, CatalogModal};
use dioxus::prelude::*;
use shared_types::{Book, BookId, Category, User, UserId};

/// Book catalog with the category filter and, for librarians, the catalog
/// management controls.
#[component]
pub fn BooksPage(
    screen: BooksScreen,
    viewer: User,
    on_filter: EventHandler<String>,
    on_borrow: EventHandler<BookId>,
    on_return: EventHandler<BookId>,
    on_history: EventHandler<()>,
    on_requests: EventHandler<()>,
    on_open_modal: EventHandler<CatalogModal>,
    on_close_modal: EventHandler<()>,
    on_create_book: EventHandler<BookForm>,
    on_create_category: EventHandler<String>,
) -> Element {
    let selected = screen.category_filter.clone().unwrap_or_default();
    let librarian = viewer.is_librarian;

    rsx! {
        div { class: "books-page",
            div { class: "books-toolbar",
                select {
                    id: "category-filter",
                    value: "{selected}",
                    onchange: move |e: FormEvent| on_filter.call(e.value()),
                    option { value: "", "All categories" }
                    for category in screen.categories.iter() {
                        option {
                            key: "{category.id}",
                            value: "{category.id}",
                            selected: selected == category.id.to_string(),
                            "{category.name}"
                        }
                    }
                }
                button {
                    id: "show-history",
                    class: "button",
                    r#type: "button",
                    onclick: move |_| on_history.call(()),
                    "Borrow History"
                }
                if librarian {
                    button {
                        id: "add-book",
                        class: "button",
                        r#type: "button",
                        onclick: move |_| on_open_modal.call(CatalogModal::CreateBook),
                        "Add Book"
                    }
                    button {
                        id: "add-category",
                        class: "button",
                        r#type: "button",
                        onclick: move |_| on_open_modal.call(CatalogModal::CreateCategory),
                        "Add Category"
                    }
                    button {
                        id: "show-requests",
                        class: "button",
                        r#type: "button",
                        onclick: move |_| on_requests.call(()),
                        "Pending Requests"
                    }
                }
            }

            if screen.books.is_empty() {
                p { class: "empty-state", "No books found." }
            }
            div { id: "books-list", class: "books-grid",
                for book in screen.books.iter() {
                    BookCard {
                        key: "{book.id}",
                        book: book.clone(),
                        viewer_id: viewer.id,
                        on_borrow,
                        on_return,
                    }
                }
            }

            if librarian {
                {match screen.modal {
                    Some(CatalogModal::CreateBook) => rsx! {
                        CreateBookModal {
                            categories: screen.categories.clone(),
                            on_submit: on_create_book,
                            on_close: on_close_modal,
                        }
                    },
                    Some(CatalogModal::CreateCategory) => rsx! {
                        CreateCategoryModal {
                            on_submit: on_create_category,
                            on_close: on_close_modal,
                        }
                    },
                    None => rsx! {},
                }}
            }
        }
    }
}

/// A single catalog entry with its borrow control and reviews.
#[component]
pub fn BookCard(
    book: Book,
    viewer_id: UserId,
    on_borrow: EventHandler<BookId>,
    on_return: EventHandler<BookId>,
) -> Element {
    let book_id = book.id;
    let control = book_control(&book, viewer_id);
    let rating = format_rating(book.rating);
    let status = availability_label(book.available);

    rsx! {
        div { class: "book-card",
            h3 { class: "book-title", "{book.name}" }
            p { "Author: {book.author}" }
            p { "Category: {book.category}" }
            p { "Rating: {rating}" }
            p { class: "book-status", "Status: {status}" }

            {match control {
                BookControl::RequestBorrow => rsx! {
                    button {
                        class: "button borrow-btn",
                        r#type: "button",
                        onclick: move |_| on_borrow.call(book_id),
                        "Request Borrow"
                    }
                },
                BookControl::Return { enabled: true } => rsx! {
                    button {
                        class: "button return-btn",
                        r#type: "button",
                        onclick: move |_| on_return.call(book_id),
                        "Return"
                    }
                },
                BookControl::Return { enabled: false } => rsx! {
                    button {
                        class: "button return-btn is-disabled",
                        r#type: "button",
                        disabled: true,
                        "Return"
                    }
                },
            }}

            if !book.reviews.is_empty() {
                div { class: "book-reviews",
                    h4 { "Reviews" }
                    for (index, review) in book.reviews.iter().enumerate() {
                        div { key: "{index}", class: "review",
                            if !review.text.is_empty() {
                                p { class: "review-text", "{review.text}" }
                            }
                            p { class: "review-rating", "Rating: {review.rating}/5" }
                        }
                    }
                }
            }
        }
    }
}

#[component]
fn Modal(title: String, on_close: EventHandler<()>, children: Element) -> Element {
    rsx! {
        div { class: "modal-backdrop",
            div { class: "modal", role: "dialog",
                div { class: "modal-header",
                    h3 { "{title}" }
                    button {
                        class: "modal-close",
                        r#type: "button",
                        onclick: move |_| on_close.call(()),
                        "×"
                    }
                }
                {children}
            }
        }
    }
}

#[component]
fn CreateBookModal(
    categories: Vec<Category>,
    on_submit: EventHandler<BookForm>,
    on_close: EventHandler<()>,
) -> Element {
    let mut name = use_signal(String::new);
    let mut author = use_signal(String::new);
    let mut category = use_signal(String::new);

    let handle_submit = move |evt: FormEvent| {
        evt.prevent_default();
        on_submit.call(BookForm {
            name: name(),
            author: author(),
            category: category(),
        });
    };

    rsx! {
        Modal { title: "Add Book", on_close,
            form { id: "create-book-form", onsubmit: handle_submit,
                div { class: "auth-field",
                    label { r#for: "book-name", "Title" }
                    input {
                        id: "book-name",
                        r#type: "text",
                        value: "{name}",
                        oninput: move |e: FormEvent| name.set(e.value()),
                    }
                }
                div { class: "auth-field",
                    label { r#for: "book-author", "Author" }
                    input {
                        id: "book-author",
                        r#type: "text",
                        value: "{author}",
                        oninput: move |e: FormEvent| author.set(e.value()),
                    }
                }
                div { class: "auth-field",
                    label { r#for: "book-category", "Category" }
                    // Unknown names create the category on the server.
                    input {
                        id: "book-category",
                        r#type: "text",
                        list: "book-category-options",
                        value: "{category}",
                        oninput: move |e: FormEvent| category.set(e.value()),
                    }
                    datalist { id: "book-category-options",
                        for c in categories.iter() {
                            option { key: "{c.id}", value: "{c.name}" }
                        }
                    }
                }
                button { class: "auth-submit button", r#type: "submit", "Create Book" }
            }
        }
    }
}

#[component]
fn CreateCategoryModal(on_submit: EventHandler<String>, on_close: EventHandler<()>) -> Element {
    let mut name = use_signal(String::new);

    let handle_submit = move |evt: FormEvent| {
        evt.prevent_default();
        on_submit.call(name());
    };

    rsx! {
        Modal { title: "Add Category", on_close,
            form { id: "create-category-form", onsubmit: handle_submit,
                div { class: "auth-field",
                    label { r#for: "category-name", "Name" }
                    input {
                        id: "category-name",
                        r#type: "text",
                        value: "{name}",
                        oninput: move |e: FormEvent| name.set(e.value()),
                    }
                }
                button { class: "auth-submit button", r#type: "submit", "Create Category" }
            }
        }
    }
}
