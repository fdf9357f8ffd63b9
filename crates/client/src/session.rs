use std::sync::{Arc, Mutex, MutexGuard};

use shared_types::{Role, User};

use crate::storage::{SessionStorage, StorageError};

/// Storage key holding the bearer credential.
pub const TOKEN_KEY: &str = "token";
/// Storage key holding the JSON-encoded user record.
pub const USER_KEY: &str = "user";

/// Who is signed in, persisted through a [`SessionStorage`].
///
/// The user and the credential are always present together. Storage is the
/// only source of truth across restarts: [`SessionStore::load`] re-derives
/// everything from it.
pub struct SessionStore {
    storage: Box<dyn SessionStorage>,
    credential: Option<String>,
    user: Option<User>,
}

impl SessionStore {
    /// Restore the session persisted in `storage`.
    ///
    /// Never fails. A malformed user record, or a token without a user (or
    /// the reverse), loads as signed out and the stale keys are dropped.
    pub fn load(storage: Box<dyn SessionStorage>) -> Self {
        let mut store = Self {
            storage,
            credential: None,
            user: None,
        };

        let token = store.storage.get(TOKEN_KEY);
        let raw_user = store.storage.get(USER_KEY);
        if token.is_none() && raw_user.is_none() {
            return store;
        }

        let user = raw_user
            .as_deref()
            .and_then(|raw| serde_json::from_str::<User>(raw).ok());

        match (token, user) {
            (Some(token), Some(user)) if !token.is_empty() => {
                tracing::debug!(user_id = user.id, "Restored session");
                store.credential = Some(token);
                store.user = Some(user);
            }
            _ => {
                tracing::warn!("Discarding incomplete or malformed stored session");
                if let Err(e) = store.remove_keys() {
                    tracing::warn!(error = %e, "Failed to clear stale session");
                }
            }
        }
        store
    }

    pub fn is_authenticated(&self) -> bool {
        self.user.is_some() && self.credential.is_some()
    }

    /// False when nobody is signed in.
    pub fn is_librarian(&self) -> bool {
        self.user.as_ref().map(|u| u.is_librarian).unwrap_or(false)
    }

    pub fn role(&self) -> Option<Role> {
        self.user.as_ref().map(User::role)
    }

    pub fn credential(&self) -> Option<&str> {
        self.credential.as_deref()
    }

    pub fn current_user(&self) -> Option<&User> {
        self.user.as_ref()
    }

    /// Sign `user` in with `credential` and persist both.
    ///
    /// In-memory state only changes once both keys are written.
    pub fn set_user(&mut self, credential: String, user: User) -> Result<(), StorageError> {
        let encoded = serde_json::to_string(&user)
            .map_err(|e| StorageError::new(format!("Failed to encode user: {e}")))?;

        self.storage.set(TOKEN_KEY, &credential)?;
        if let Err(e) = self.storage.set(USER_KEY, &encoded) {
            if let Err(rollback) = self.storage.remove(TOKEN_KEY) {
                tracing::warn!(error = %rollback, "Failed to roll back stored token");
            }
            return Err(e);
        }

        self.credential = Some(credential);
        self.user = Some(user);
        Ok(())
    }

    /// Sign out and drop both persisted keys.
    pub fn clear_user(&mut self) -> Result<(), StorageError> {
        self.credential = None;
        self.user = None;
        self.remove_keys()
    }

    fn remove_keys(&mut self) -> Result<(), StorageError> {
        let token = self.storage.remove(TOKEN_KEY);
        let user = self.storage.remove(USER_KEY);
        token.and(user)
    }
}

/// Cloneable shared access to one [`SessionStore`].
///
/// The API client reads the credential through it and the UI reads the
/// signed-in user; only login and logout write.
#[derive(Clone)]
pub struct SessionHandle {
    inner: Arc<Mutex<SessionStore>>,
}

impl SessionHandle {
    pub fn new(store: SessionStore) -> Self {
        Self {
            inner: Arc::new(Mutex::new(store)),
        }
    }

    fn lock(&self) -> MutexGuard<'_, SessionStore> {
        self.inner.lock().unwrap_or_else(|e| e.into_inner())
    }

    pub fn is_authenticated(&self) -> bool {
        self.lock().is_authenticated()
    }

    pub fn is_librarian(&self) -> bool {
        self.lock().is_librarian()
    }

    pub fn role(&self) -> Option<Role> {
        self.lock().role()
    }

    pub fn credential(&self) -> Option<String> {
        self.lock().credential().map(str::to_string)
    }

    pub fn current_user(&self) -> Option<User> {
        self.lock().current_user().cloned()
    }

    pub fn set_user(&self, credential: String, user: User) -> Result<(), StorageError> {
        self.lock().set_user(credential, user)
    }

    pub fn clear_user(&self) -> Result<(), StorageError> {
        self.lock().clear_user()
    }
}
