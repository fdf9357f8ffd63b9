//! The page state machine, independent of any rendering.

use shared_types::Role;

/// Pages the client can show.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum View {
    Login,
    Register,
    BooksList,
    BorrowHistory,
    PendingRequests,
}

/// Everything that can move the client from one page to another.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Transition {
    LoggedIn,
    ShowRegister,
    ShowLogin,
    Registered,
    Logout,
    OpenHistory,
    Back,
    ReviewSubmitted,
    Approved,
    BorrowRequested,
    BookReturned,
    FilterApplied,
    OpenCreateBook,
    OpenCreateCategory,
    BookCreated,
    CategoryCreated,
    CloseModal,
    OpenBooks,
    OpenRequests,
}

impl View {
    /// Landing page for a freshly loaded client or a fresh login.
    pub fn initial(role: Option<Role>) -> View {
        match role {
            None => View::Login,
            Some(Role::Regular) => View::BooksList,
            Some(Role::Librarian) => View::PendingRequests,
        }
    }

    /// Pages that need a signed-in user.
    pub fn requires_auth(self) -> bool {
        !matches!(self, View::Login | View::Register)
    }

    /// The transition table. `None` means the transition is not available
    /// from this page for this role, and the current page stays.
    pub fn next(self, transition: Transition, role: Option<Role>) -> Option<View> {
        use Transition as T;
        use View as V;

        let librarian = role == Some(Role::Librarian);
        match (self, transition) {
            (V::Login, T::LoggedIn) => role.map(|r| View::initial(Some(r))),
            (V::Login, T::ShowRegister) => Some(V::Register),
            (V::Register, T::ShowLogin) => Some(V::Login),
            (V::Register, T::Registered) => Some(V::Login),

            (from, T::Logout) if from.requires_auth() => Some(V::Login),
            (from, _) if from.requires_auth() && role.is_none() => None,

            (V::BooksList, T::OpenHistory) => Some(V::BorrowHistory),
            (V::BooksList, T::BorrowRequested | T::BookReturned | T::FilterApplied) => {
                Some(V::BooksList)
            }
            (V::BooksList, T::CloseModal) => Some(V::BooksList),
            (
                V::BooksList,
                T::OpenCreateBook | T::OpenCreateCategory | T::BookCreated | T::CategoryCreated,
            ) if librarian => Some(V::BooksList),
            (V::BooksList, T::OpenRequests) if librarian => Some(V::PendingRequests),

            (V::BorrowHistory, T::Back) => Some(V::BooksList),
            (V::BorrowHistory, T::ReviewSubmitted) => Some(V::BorrowHistory),

            (V::PendingRequests, T::Approved) if librarian => Some(V::PendingRequests),
            (V::PendingRequests, T::OpenBooks) if librarian => Some(V::BooksList),

            _ => None,
        }
    }
}
