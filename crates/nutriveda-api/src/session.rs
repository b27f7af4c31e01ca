//! Session token storage.
//!
//! The auth token is process-wide session state behind an explicit
//! interface and injected into the client, never read from an ambient
//! global.

use std::sync::Mutex;

/// Accessors for the bearer token attached to every request.
pub trait SessionStore: Send + Sync {
    fn set_token(&self, token: String);
    fn clear_token(&self);
    fn current_token(&self) -> Option<String>;
}

/// In-memory session store.
#[derive(Debug, Default)]
pub struct MemorySession {
    token: Mutex<Option<String>>,
}

impl MemorySession {
    pub fn new() -> Self {
        Self::default()
    }
}

impl SessionStore for MemorySession {
    fn set_token(&self, token: String) {
        if let Ok(mut guard) = self.token.lock() {
            *guard = Some(token);
        }
    }

    fn clear_token(&self) {
        if let Ok(mut guard) = self.token.lock() {
            *guard = None;
        }
    }

    fn current_token(&self) -> Option<String> {
        self.token.lock().ok().and_then(|guard| guard.clone())
    }
}
