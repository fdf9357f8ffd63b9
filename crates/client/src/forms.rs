//! Form contents as typed in, with the presence checks run before submitting.

use shared_types::{CreateBookRequest, CreateReviewRequest, RegisterRequest, RequestError};

pub const MIN_RATING: u8 = 1;
pub const MAX_RATING: u8 = 5;

fn required(value: &str, message: &str) -> Result<String, RequestError> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        Err(RequestError::validation(message))
    } else {
        Ok(trimmed.to_string())
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct LoginForm {
    pub email: String,
    pub password: String,
}

impl LoginForm {
    /// Trimmed email. The password is passed through untouched.
    pub fn validate(&self) -> Result<(String, String), RequestError> {
        let email = required(&self.email, "Email is required")?;
        if self.password.is_empty() {
            return Err(RequestError::validation("Password is required"));
        }
        Ok((email, self.password.clone()))
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct RegisterForm {
    pub name: String,
    pub email: String,
    pub password: String,
    pub is_librarian: bool,
}

impl RegisterForm {
    pub fn validate(&self) -> Result<RegisterRequest, RequestError> {
        let name = required(&self.name, "Name is required")?;
        let email = required(&self.email, "Email is required")?;
        if self.password.is_empty() {
            return Err(RequestError::validation("Password is required"));
        }
        Ok(RegisterRequest {
            name,
            email,
            password: self.password.clone(),
            is_librarian: self.is_librarian,
        })
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct BookForm {
    pub name: String,
    pub author: String,
    pub category: String,
}

impl BookForm {
    pub fn validate(&self) -> Result<CreateBookRequest, RequestError> {
        Ok(CreateBookRequest {
            name: required(&self.name, "Book name is required")?,
            author: required(&self.author, "Author is required")?,
            category: required(&self.category, "Category is required")?,
        })
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct ReviewForm {
    pub text: String,
    pub rating: u8,
}

impl Default for ReviewForm {
    fn default() -> Self {
        Self {
            text: String::new(),
            rating: MAX_RATING,
        }
    }
}

impl ReviewForm {
    pub fn validate(&self) -> Result<CreateReviewRequest, RequestError> {
        let text = required(&self.text, "Please write a review before submitting")?;
        if !(MIN_RATING..=MAX_RATING).contains(&self.rating) {
            return Err(RequestError::validation(format!(
                "Rating must be between {MIN_RATING} and {MAX_RATING}"
            )));
        }
        Ok(CreateReviewRequest {
            text,
            rating: self.rating,
        })
    }
}

/// Validate a new category name.
pub fn validate_category_name(name: &str) -> Result<String, RequestError> {
    required(name, "Category name is required")
}
