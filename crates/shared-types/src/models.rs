use serde::{Deserialize, Deserializer, Serialize};

pub type UserId = i64;
pub type BookId = i64;
pub type CategoryId = i64;
pub type RequestId = i64;

/// Role of the signed-in user.
///
/// - `Regular`: browses books, asks to borrow them, returns and reviews them.
/// - `Librarian`: additionally approves borrow requests and manages the catalogue.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
pub enum Role {
    #[default]
    Regular,
    Librarian,
}

impl Role {
    /// Human-readable label for the profile header.
    pub fn label(&self) -> &'static str {
        match self {
            Role::Regular => "Regular User",
            Role::Librarian => "Librarian",
        }
    }
}

/// A library member as returned by `/login` and embedded in book borrowers.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct User {
    pub id: UserId,
    pub name: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub is_librarian: bool,
}

impl User {
    pub fn role(&self) -> Role {
        if self.is_librarian {
            Role::Librarian
        } else {
            Role::Regular
        }
    }
}

/// A review left on a book, rated 1 to 5.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Review {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<i64>,
    /// Nullable on the server; `null` reads as empty.
    #[serde(default, deserialize_with = "null_as_empty")]
    pub text: String,
    pub rating: u8,
}

fn null_as_empty<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<String>::deserialize(deserializer)?.unwrap_or_default())
}

/// A book in the catalogue.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Book {
    pub id: BookId,
    pub name: String,
    pub author: String,
    /// Category name, not id.
    pub category: String,
    /// Mean review rating, 0 when unreviewed.
    #[serde(default)]
    pub rating: f64,
    pub available: bool,
    #[serde(default)]
    pub current_borrowers: Vec<User>,
    #[serde(default)]
    pub reviews: Vec<Review>,
}

impl Book {
    /// Whether `user_id` holds this book, i.e. is the first current borrower.
    pub fn is_held_by(&self, user_id: UserId) -> bool {
        self.current_borrowers
            .first()
            .map(|b| b.id == user_id)
            .unwrap_or(false)
    }
}

/// A book category. The backend also nests the category's books, which the
/// client does not need.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Category {
    pub id: CategoryId,
    pub name: String,
}

/// A pending request by a regular user to borrow a book.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct BorrowRequest {
    pub id: RequestId,
    pub book_id: BookId,
    pub book_name: String,
    pub user_id: UserId,
    pub user_name: String,
}

/// One book in the current user's borrow history.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct HistoryEntry {
    pub book_id: BookId,
    pub book_name: String,
    #[serde(default)]
    pub author: String,
    #[serde(default)]
    pub returned: bool,
    #[serde(default)]
    pub review: Option<Review>,
}
