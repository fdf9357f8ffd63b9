//! Shared formatting utilities for the UI layer.

use shared_types::{Book, UserId};

/// Which borrow control a book card shows.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BookControl {
    RequestBorrow,
    /// Return is only enabled for the first current borrower.
    Return { enabled: bool },
}

/// Decide the borrow control for `book` as seen by `viewer`.
pub fn book_control(book: &Book, viewer: UserId) -> BookControl {
    if book.available {
        BookControl::RequestBorrow
    } else {
        BookControl::Return {
            enabled: book.is_held_by(viewer),
        }
    }
}

/// Format a mean rating with one decimal, e.g. `4.0`.
pub fn format_rating(rating: f64) -> String {
    format!("{rating:.1}")
}

pub fn availability_label(available: bool) -> &'static str {
    if available {
        "Available"
    } else {
        "Borrowed"
    }
}
