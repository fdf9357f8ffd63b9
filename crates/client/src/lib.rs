//! Library lending client: session persistence, the REST API wrapper, and
//! the page state machine the UI drives.

pub mod api;
pub mod config;
pub mod controller;
pub mod forms;
pub mod session;
pub mod storage;
pub mod view;

pub use api::ApiClient;
pub use controller::{
    AppState, BooksScreen, CatalogModal, Controller, Notice, NoticeLevel, Outcome, Screen, Step,
};
pub use forms::{BookForm, LoginForm, RegisterForm, ReviewForm};
pub use session::{SessionHandle, SessionStore};
#[cfg(feature = "web")]
pub use storage::LocalStorage;
pub use storage::{FileStorage, MemoryStorage, SessionStorage, StorageError};
pub use view::{Transition, View};
