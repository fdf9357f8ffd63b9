//! Executes user actions against the API and decides what to show next.
//!
//! Nothing here touches a DOM. Every action returns an [`Outcome`]: either a
//! freshly loaded [`Screen`] (plus an optional notice) or the error that
//! stopped it. [`AppState::apply`] folds outcomes into what the UI renders.

use shared_types::{
    Book, BookId, BorrowRequest, Category, ClientConfig, HistoryEntry, RequestError, RequestId,
    Role, User,
};

use crate::api::ApiClient;
use crate::forms::{validate_category_name, BookForm, LoginForm, RegisterForm, ReviewForm};
use crate::session::{SessionHandle, SessionStore};
use crate::view::{Transition, View};

pub const MSG_REGISTERED: &str = "Registration successful! Please login.";
pub const MSG_BORROW_REQUESTED: &str = "Borrow request submitted successfully!";
pub const MSG_BOOK_RETURNED: &str = "Book returned successfully!";
pub const MSG_REQUEST_APPROVED: &str = "Request approved successfully!";
pub const MSG_BOOK_CREATED: &str = "Book created successfully!";
pub const MSG_CATEGORY_CREATED: &str = "Category created successfully!";
pub const MSG_REVIEW_SUBMITTED: &str = "Review submitted successfully!";

/// Catalog management dialog open over the books page.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CatalogModal {
    CreateBook,
    CreateCategory,
}

impl CatalogModal {
    fn opened_by(self) -> Transition {
        match self {
            CatalogModal::CreateBook => Transition::OpenCreateBook,
            CatalogModal::CreateCategory => Transition::OpenCreateCategory,
        }
    }
}

/// Data behind the books page.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct BooksScreen {
    pub books: Vec<Book>,
    pub categories: Vec<Category>,
    /// Selected category id, `None` for all categories.
    pub category_filter: Option<String>,
    /// Stays open when a create fails; a successful create reloads the
    /// page, which closes it.
    pub modal: Option<CatalogModal>,
}

/// A page together with the server data it renders.
#[derive(Debug, Clone, PartialEq)]
pub enum Screen {
    Login,
    Register,
    Books(BooksScreen),
    History(Vec<HistoryEntry>),
    Requests(Vec<BorrowRequest>),
}

impl Screen {
    pub fn view(&self) -> View {
        match self {
            Screen::Login => View::Login,
            Screen::Register => View::Register,
            Screen::Books(_) => View::BooksList,
            Screen::History(_) => View::BorrowHistory,
            Screen::Requests(_) => View::PendingRequests,
        }
    }

    /// The page for `view` with no data loaded.
    pub fn empty(view: View) -> Screen {
        match view {
            View::Login => Screen::Login,
            View::Register => Screen::Register,
            View::BooksList => Screen::Books(BooksScreen::default()),
            View::BorrowHistory => Screen::History(Vec::new()),
            View::PendingRequests => Screen::Requests(Vec::new()),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoticeLevel {
    Success,
    Error,
}

/// A blocking message the user has to dismiss.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notice {
    pub level: NoticeLevel,
    pub message: String,
}

impl Notice {
    pub fn success(message: impl Into<String>) -> Self {
        Self {
            level: NoticeLevel::Success,
            message: message.into(),
        }
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self {
            level: NoticeLevel::Error,
            message: message.into(),
        }
    }
}

/// Result of an action that succeeded.
#[derive(Debug, Clone, PartialEq)]
pub struct Step {
    pub screen: Screen,
    pub notice: Option<Notice>,
}

impl Step {
    pub fn to(screen: Screen) -> Self {
        Self {
            screen,
            notice: None,
        }
    }

    pub fn with_success(screen: Screen, message: &str) -> Self {
        Self {
            screen,
            notice: Some(Notice::success(message)),
        }
    }
}

pub type Outcome = Result<Step, RequestError>;

/// What the UI renders: the current page and an optional notice.
#[derive(Debug, Clone, PartialEq)]
pub struct AppState {
    pub screen: Screen,
    pub notice: Option<Notice>,
    /// False until the first page has been loaded.
    pub ready: bool,
    /// Bumped on every successful outcome. Pages key per-item drafts on it
    /// so they reset after a success and survive a failure.
    pub revision: u64,
}

impl AppState {
    pub fn booting() -> Self {
        Self {
            screen: Screen::Login,
            notice: None,
            ready: false,
            revision: 0,
        }
    }

    pub fn view(&self) -> View {
        self.screen.view()
    }

    /// Fold an action outcome in. Failures keep the current page and only
    /// raise a notice carrying the error message.
    pub fn apply(&mut self, outcome: Outcome) {
        match outcome {
            Ok(step) => {
                self.screen = step.screen;
                self.notice = step.notice;
                self.revision += 1;
            }
            Err(err) => {
                self.notice = Some(Notice::error(err.message));
            }
        }
        self.ready = true;
    }

    pub fn dismiss_notice(&mut self) {
        self.notice = None;
    }
}

/// Runs every user action. Cheap to clone; clones share the session.
#[derive(Clone)]
pub struct Controller {
    api: ApiClient,
}

impl Controller {
    pub fn new(api: ApiClient) -> Self {
        Self { api }
    }

    /// Wire a controller to the session storage for this build.
    pub fn from_config(config: &ClientConfig) -> Self {
        let storage = crate::config::session_storage(config);
        let session = SessionHandle::new(SessionStore::load(storage));
        Self::new(ApiClient::new(config, session))
    }

    pub fn api(&self) -> &ApiClient {
        &self.api
    }

    pub fn session(&self) -> &SessionHandle {
        self.api.session()
    }

    pub fn role(&self) -> Option<Role> {
        self.session().role()
    }

    pub fn current_user(&self) -> Option<User> {
        self.session().current_user()
    }

    fn route(&self, from: View, transition: Transition) -> Result<View, RequestError> {
        from.next(transition, self.role()).ok_or_else(|| {
            tracing::warn!(?from, ?transition, "Transition not available");
            RequestError::validation("That action is not available here")
        })
    }

    async fn load_books(&self, category_filter: Option<String>) -> Result<Screen, RequestError> {
        let books = async {
            match category_filter.as_deref() {
                Some(id) => self.api.list_books_by_category(id).await,
                None => self.api.list_books().await,
            }
        };
        let (categories, books) = futures::try_join!(self.api.list_categories(), books)?;
        Ok(Screen::Books(BooksScreen {
            books,
            categories,
            category_filter,
            modal: None,
        }))
    }

    async fn load(&self, view: View) -> Result<Screen, RequestError> {
        tracing::debug!(?view, "Loading page");
        match view {
            View::Login => Ok(Screen::Login),
            View::Register => Ok(Screen::Register),
            View::BooksList => self.load_books(None).await,
            View::BorrowHistory => Ok(Screen::History(self.api.borrow_history().await?)),
            View::PendingRequests => Ok(Screen::Requests(self.api.list_borrow_requests().await?)),
        }
    }

    /// Load `view`, falling back to its empty page with an error notice.
    async fn enter(&self, view: View) -> Step {
        match self.load(view).await {
            Ok(screen) => Step::to(screen),
            Err(err) => Step {
                screen: Screen::empty(view),
                notice: Some(Notice::error(err.message)),
            },
        }
    }

    /// First page after startup, chosen from the persisted session.
    pub async fn start(&self) -> AppState {
        let view = View::initial(self.role());
        tracing::info!(?view, "Starting");
        let step = self.enter(view).await;
        AppState {
            screen: step.screen,
            notice: step.notice,
            ready: true,
            revision: 0,
        }
    }

    /// Move between pages without changing server state.
    pub async fn navigate(&self, from: View, transition: Transition) -> Outcome {
        let to = self.route(from, transition)?;
        tracing::debug!(?from, ?to, "Navigating");
        Ok(Step::to(self.load(to).await?))
    }

    pub async fn login(&self, form: &LoginForm) -> Outcome {
        let (email, password) = form.validate()?;
        self.api.login(&email, &password).await?;
        let to = self.route(View::Login, Transition::LoggedIn)?;
        Ok(self.enter(to).await)
    }

    pub async fn register(&self, form: &RegisterForm) -> Outcome {
        let req = form.validate()?;
        let to = self.route(View::Register, Transition::Registered)?;
        self.api.register(&req).await?;
        tracing::info!(librarian = req.is_librarian, "Registered account");
        Ok(Step::with_success(Screen::empty(to), MSG_REGISTERED))
    }

    /// Sign out locally. Always lands on the login page.
    pub fn logout(&self) -> Step {
        self.api.logout();
        Step::to(Screen::Login)
    }

    /// Reload the books page with `category_id` selected; blank means all.
    pub async fn filter_books(&self, category_id: &str) -> Outcome {
        self.route(View::BooksList, Transition::FilterApplied)?;
        let filter = Some(category_id.trim())
            .filter(|id| !id.is_empty())
            .map(str::to_string);
        Ok(Step::to(self.load_books(filter).await?))
    }

    pub async fn request_borrow(&self, book_id: BookId) -> Outcome {
        let to = self.route(View::BooksList, Transition::BorrowRequested)?;
        self.api.request_borrow(book_id).await?;
        Ok(Step::with_success(self.load(to).await?, MSG_BORROW_REQUESTED))
    }

    pub async fn return_book(&self, book_id: BookId) -> Outcome {
        let to = self.route(View::BooksList, Transition::BookReturned)?;
        self.api.return_book(book_id).await?;
        Ok(Step::with_success(self.load(to).await?, MSG_BOOK_RETURNED))
    }

    pub async fn approve_request(&self, request_id: RequestId) -> Outcome {
        let to = self.route(View::PendingRequests, Transition::Approved)?;
        self.api.approve_borrow_request(request_id).await?;
        Ok(Step::with_success(self.load(to).await?, MSG_REQUEST_APPROVED))
    }

    /// Open a catalog dialog over `screen`. Librarians only.
    pub fn open_modal(&self, screen: BooksScreen, modal: CatalogModal) -> Outcome {
        self.route(View::BooksList, modal.opened_by())?;
        Ok(Step::to(Screen::Books(BooksScreen {
            modal: Some(modal),
            ..screen
        })))
    }

    pub fn close_modal(&self, screen: BooksScreen) -> Outcome {
        self.route(View::BooksList, Transition::CloseModal)?;
        Ok(Step::to(Screen::Books(BooksScreen {
            modal: None,
            ..screen
        })))
    }

    pub async fn create_book(&self, form: &BookForm) -> Outcome {
        let to = self.route(View::BooksList, Transition::BookCreated)?;
        let req = form.validate()?;
        self.api.create_book(&req).await?;
        Ok(Step::with_success(self.load(to).await?, MSG_BOOK_CREATED))
    }

    pub async fn create_category(&self, name: &str) -> Outcome {
        let to = self.route(View::BooksList, Transition::CategoryCreated)?;
        let name = validate_category_name(name)?;
        self.api.create_category(&name).await?;
        Ok(Step::with_success(self.load(to).await?, MSG_CATEGORY_CREATED))
    }

    pub async fn submit_review(&self, book_id: BookId, form: &ReviewForm) -> Outcome {
        let to = self.route(View::BorrowHistory, Transition::ReviewSubmitted)?;
        let req = form.validate()?;
        self.api.create_review(book_id, &req).await?;
        Ok(Step::with_success(self.load(to).await?, MSG_REVIEW_SUBMITTED))
    }
}
