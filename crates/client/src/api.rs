//! HTTP client for the library REST API.

use reqwest::header::{ACCEPT, CONTENT_TYPE};
use reqwest::Method;
use serde::de::DeserializeOwned;
use serde::Serialize;
use shared_types::{
    Book, BookId, BorrowRequest, Category, ClientConfig, CreateBookRequest, CreateCategoryRequest,
    CreateReviewRequest, CreatedResponse, HistoryEntry, LoginRequest, LoginResponse,
    MessageResponse, RegisterRequest, RequestError, RequestId,
};

use crate::session::SessionHandle;

/// Thin wrapper over the library backend.
///
/// Stateless apart from the shared session: every call reads the current
/// credential from it, and only [`ApiClient::login`] and
/// [`ApiClient::logout`] write to it. Nothing is retried.
#[derive(Clone)]
pub struct ApiClient {
    http: reqwest::Client,
    base_url: String,
    session: SessionHandle,
}

impl ApiClient {
    pub fn new(config: &ClientConfig, session: SessionHandle) -> Self {
        Self {
            http: reqwest::Client::new(),
            base_url: config.base_url().to_string(),
            session,
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn session(&self) -> &SessionHandle {
        &self.session
    }

    /// Issue one JSON request and decode the JSON reply.
    ///
    /// When `requires_auth` is set and a credential is stored it is sent as
    /// a bearer token. Non-success statuses become application errors
    /// carrying the server's `error` message.
    #[tracing::instrument(skip(self, body, method), fields(method = %method))]
    pub async fn request<T, B>(
        &self,
        endpoint: &str,
        method: Method,
        body: Option<&B>,
        requires_auth: bool,
    ) -> Result<T, RequestError>
    where
        T: DeserializeOwned,
        B: Serialize + ?Sized,
    {
        let url = format!("{}{}", self.base_url, endpoint);
        let mut builder = self
            .http
            .request(method, &url)
            .header(CONTENT_TYPE, "application/json")
            .header(ACCEPT, "application/json");

        if requires_auth {
            if let Some(token) = self.session.credential() {
                builder = builder.bearer_auth(token);
            }
        }
        if let Some(body) = body {
            builder = builder.json(body);
        }

        tracing::debug!("Sending request");
        let response = builder.send().await.map_err(|e| {
            tracing::warn!(error = %e, "Request could not be sent");
            RequestError::network(format!("Could not reach the library service: {e}"))
        })?;

        let status = response.status();
        let bytes = response.bytes().await.map_err(|e| {
            tracing::warn!(error = %e, "Response body could not be read");
            RequestError::network(format!("Connection lost while reading the response: {e}"))
        })?;

        if !status.is_success() {
            let err = RequestError::from_error_body(status.as_u16(), &bytes);
            tracing::warn!(status = status.as_u16(), message = %err.message, "Request rejected");
            return Err(err);
        }

        serde_json::from_slice(&bytes).map_err(|e| {
            tracing::warn!(error = %e, "Response body did not match the expected shape");
            RequestError::decode(format!("Unexpected response from the library service: {e}"))
        })
    }

    async fn get<T: DeserializeOwned>(&self, endpoint: &str) -> Result<T, RequestError> {
        self.request(endpoint, Method::GET, None::<&()>, true).await
    }

    async fn post<T, B>(&self, endpoint: &str, body: Option<&B>) -> Result<T, RequestError>
    where
        T: DeserializeOwned,
        B: Serialize + ?Sized,
    {
        self.request(endpoint, Method::POST, body, true).await
    }

    // --- Accounts ---

    pub async fn register(&self, req: &RegisterRequest) -> Result<MessageResponse, RequestError> {
        self.request("/register", Method::POST, Some(req), false)
            .await
    }

    /// Authenticate and store the returned credential and user in the session.
    pub async fn login(&self, email: &str, password: &str) -> Result<LoginResponse, RequestError> {
        let body = LoginRequest {
            email: email.to_string(),
            password: password.to_string(),
        };
        let resp: LoginResponse = self
            .request("/login", Method::POST, Some(&body), false)
            .await?;

        self.session
            .set_user(resp.access_token.clone(), resp.user.clone())
            .map_err(|e| RequestError::storage(format!("Could not save your session: {e}")))?;

        tracing::info!(user_id = resp.user.id, librarian = resp.user.is_librarian, "Signed in");
        Ok(resp)
    }

    /// Forget the stored credential and user. No request is sent.
    pub fn logout(&self) {
        if let Err(e) = self.session.clear_user() {
            tracing::warn!(error = %e, "Failed to clear stored session");
        }
        tracing::info!("Signed out");
    }

    // --- Catalogue ---

    pub async fn list_books(&self) -> Result<Vec<Book>, RequestError> {
        self.get("/books").await
    }

    pub async fn list_books_by_category(
        &self,
        category_id: &str,
    ) -> Result<Vec<Book>, RequestError> {
        self.get(&format!("/books?category={}", urlencoding::encode(category_id)))
            .await
    }

    pub async fn list_categories(&self) -> Result<Vec<Category>, RequestError> {
        self.get("/categories").await
    }

    pub async fn create_book(&self, req: &CreateBookRequest) -> Result<CreatedResponse, RequestError> {
        self.post("/books", Some(req)).await
    }

    pub async fn create_category(&self, name: &str) -> Result<CreatedResponse, RequestError> {
        let body = CreateCategoryRequest {
            name: name.to_string(),
        };
        self.post("/categories", Some(&body)).await
    }

    // --- Borrowing ---

    pub async fn list_borrow_requests(&self) -> Result<Vec<BorrowRequest>, RequestError> {
        self.get("/borrow-requests").await
    }

    pub async fn approve_borrow_request(
        &self,
        request_id: RequestId,
    ) -> Result<MessageResponse, RequestError> {
        self.post(&format!("/borrow-requests/{request_id}/approve"), None::<&()>)
            .await
    }

    pub async fn request_borrow(&self, book_id: BookId) -> Result<MessageResponse, RequestError> {
        self.post(&format!("/books/{book_id}/request-borrow"), None::<&()>)
            .await
    }

    pub async fn return_book(&self, book_id: BookId) -> Result<MessageResponse, RequestError> {
        self.post(&format!("/books/{book_id}/return"), None::<&()>)
            .await
    }

    pub async fn borrow_history(&self) -> Result<Vec<HistoryEntry>, RequestError> {
        self.get("/user/history").await
    }

    pub async fn create_review(
        &self,
        book_id: BookId,
        req: &CreateReviewRequest,
    ) -> Result<MessageResponse, RequestError> {
        self.post(&format!("/books/{book_id}/reviews"), Some(req))
            .await
    }
}
