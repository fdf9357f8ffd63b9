pub mod books;
pub mod history;
pub mod login;
pub mod register;
pub mod requests;

use crate::notify::NoticeDialog;
use crate::state::{use_app, AppContext};
use client::{
    BookForm, CatalogModal, LoginForm, RegisterForm, ReviewForm, Screen, Transition, View,
};
use dioxus::prelude::*;
use shared_types::{BookId, RequestId, User};

use books::BooksPage;
use history::HistoryPage;
use login::LoginPage;
use register::RegisterPage;
use requests::RequestsPage;

/// Top-level layout: profile header, the current page and the notice dialog.
///
/// Shows a loading placeholder until the startup load has settled.
#[component]
pub fn Shell() -> Element {
    let app = use_app();
    let state = app.state.read().clone();

    if !state.ready {
        return rsx! {
            div { class: "auth-guard-loading", p { "Loading..." } }
        };
    }

    let view = state.view();
    let user = app.controller().current_user();
    let header_user = user.clone().filter(|_| view.requires_auth());

    rsx! {
        if let Some(user) = header_user {
            ProfileHeader { user, on_logout: move |_| app.logout() }
        }
        main { id: "app", class: "app-main",
            {page(app, state.screen, user, state.revision)}
        }
        if let Some(notice) = state.notice {
            NoticeDialog { notice, on_dismiss: move |_| app.dismiss_notice() }
        }
    }
}

fn navigate(app: AppContext, from: View, transition: Transition) {
    app.dispatch(move |c| async move { c.navigate(from, transition).await });
}

/// Wire the page for `screen` to controller actions.
fn page(app: AppContext, screen: Screen, user: Option<User>, revision: u64) -> Element {
    match (screen, user) {
        (Screen::Login, _) => rsx! {
            LoginPage {
                on_submit: move |form: LoginForm| {
                    app.dispatch(move |c| async move { c.login(&form).await })
                },
                on_register: move |_| navigate(app, View::Login, Transition::ShowRegister),
            }
        },
        (Screen::Register, _) => rsx! {
            RegisterPage {
                on_submit: move |form: RegisterForm| {
                    app.dispatch(move |c| async move { c.register(&form).await })
                },
                on_login: move |_| navigate(app, View::Register, Transition::ShowLogin),
            }
        },
        (Screen::Books(screen), Some(viewer)) => {
            let opened_over = screen.clone();
            let closed_over = screen.clone();
            rsx! {
                BooksPage {
                    screen,
                    viewer,
                    on_filter: move |category: String| {
                        app.dispatch(move |c| async move { c.filter_books(&category).await })
                    },
                    on_borrow: move |id: BookId| {
                        app.dispatch(move |c| async move { c.request_borrow(id).await })
                    },
                    on_return: move |id: BookId| {
                        app.dispatch(move |c| async move { c.return_book(id).await })
                    },
                    on_history: move |_| navigate(app, View::BooksList, Transition::OpenHistory),
                    on_requests: move |_| navigate(app, View::BooksList, Transition::OpenRequests),
                    on_open_modal: move |modal: CatalogModal| {
                        app.apply(app.controller().open_modal(opened_over.clone(), modal))
                    },
                    on_close_modal: move |_| {
                        app.apply(app.controller().close_modal(closed_over.clone()))
                    },
                    on_create_book: move |form: BookForm| {
                        app.dispatch(move |c| async move { c.create_book(&form).await })
                    },
                    on_create_category: move |name: String| {
                        app.dispatch(move |c| async move { c.create_category(&name).await })
                    },
                }
            }
        }
        (Screen::History(entries), Some(_)) => rsx! {
            HistoryPage {
                entries,
                revision,
                on_back: move |_| navigate(app, View::BorrowHistory, Transition::Back),
                on_review: move |(book_id, form): (BookId, ReviewForm)| {
                    app.dispatch(move |c| async move { c.submit_review(book_id, &form).await })
                },
            }
        },
        (Screen::Requests(requests), Some(_)) => rsx! {
            RequestsPage {
                requests,
                on_approve: move |id: RequestId| {
                    app.dispatch(move |c| async move { c.approve_request(id).await })
                },
                on_books: move |_| navigate(app, View::PendingRequests, Transition::OpenBooks),
            }
        },
        // Authenticated page without a session; the next action routes to login.
        (_, None) => rsx! {
            div { class: "auth-guard-loading", p { "Loading..." } }
        },
    }
}

/// Signed-in user's name, email, role and the logout button.
#[component]
pub fn ProfileHeader(user: User, on_logout: EventHandler<()>) -> Element {
    let role = user.role().label();

    rsx! {
        header { id: "profile", class: "profile-header",
            div { class: "profile-info",
                h2 { "Welcome, {user.name}!" }
                p { "Email: {user.email}" }
                p { "Role: {role}" }
            }
            button {
                id: "logout",
                class: "button",
                r#type: "button",
                onclick: move |_| on_logout.call(()),
                "Logout"
            }
        }
    }
}
