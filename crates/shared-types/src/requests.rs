use serde::{Deserialize, Serialize};

use crate::{BookId, User};

/// Body of `POST /register`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct RegisterRequest {
    pub name: String,
    pub email: String,
    pub password: String,
    pub is_librarian: bool,
}

/// Body of `POST /login`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

/// Response returned after successful authentication.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct LoginResponse {
    pub access_token: String,
    pub user: User,
}

/// Body of `POST /books`. `category` is a category name; the backend
/// creates it when it does not exist yet.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CreateBookRequest {
    pub name: String,
    pub author: String,
    pub category: String,
}

/// Body of `POST /categories`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CreateCategoryRequest {
    pub name: String,
}

/// Body of `POST /books/{id}/reviews`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CreateReviewRequest {
    pub text: String,
    pub rating: u8,
}

/// Plain acknowledgement, e.g. `{"message": "Borrow request approved"}`.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct MessageResponse {
    #[serde(default)]
    pub message: String,
}

/// Acknowledgement for calls that create a row.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CreatedResponse {
    #[serde(default)]
    pub message: String,
    pub id: BookId,
}
