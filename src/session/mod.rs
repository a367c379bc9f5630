//! Client-side session storage.
//!
//! The real storage layer (browser storage, keychain, whatever hosts this
//! client) is an external collaborator; the cache only ever reads an access
//! token and the logged-in user record through this seam.

use std::sync::Mutex;

use serde_json::Value;

/// Read access to the current session.
pub trait SessionStore: Send + Sync {
    /// The bearer token for outbound API calls, if logged in.
    fn access_token(&self) -> Option<String>;

    /// The stored user record, if logged in. Shape is backend-owned.
    fn current_user(&self) -> Option<Value>;
}

/// In-memory session store for the smoke binary and tests.
#[derive(Debug, Default)]
pub struct MemorySessionStore {
    inner: Mutex<SessionData>,
}

#[derive(Debug, Default)]
struct SessionData {
    token: Option<String>,
    user: Option<Value>,
}

impl MemorySessionStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Store a login session.
    pub fn log_in(&self, token: impl Into<String>, user: Option<Value>) {
        let mut inner = self.inner.lock().unwrap_or_else(|e| e.into_inner());
        inner.token = Some(token.into());
        inner.user = user;
    }

    /// Discard the session (logout).
    pub fn log_out(&self) {
        let mut inner = self.inner.lock().unwrap_or_else(|e| e.into_inner());
        inner.token = None;
        inner.user = None;
    }
}

impl SessionStore for MemorySessionStore {
    fn access_token(&self) -> Option<String> {
        self.inner
            .lock()
            .unwrap_or_else(|e| e.into_inner())
            .token
            .clone()
    }

    fn current_user(&self) -> Option<Value> {
        self.inner
            .lock()
            .unwrap_or_else(|e| e.into_inner())
            .user
            .clone()
    }
}
