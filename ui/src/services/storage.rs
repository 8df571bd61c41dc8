use gloo_storage::{LocalStorage, SessionStorage, Storage};
use std::cell::RefCell;

use crate::services::client::SessionPayload;
use crate::services::errors::AuthResult;

const SESSION_KEY: &str = "auth_session";
const FLASH_ERROR_KEY: &str = "auth_flash_error";

/// Where the opaque backend session lives once authentication succeeds
pub trait SessionStore {
    fn save(&self, session: &SessionPayload) -> AuthResult<()>;
    fn load(&self) -> Option<SessionPayload>;
    fn clear(&self);
}

/// Browser `localStorage` backed session store
pub struct BrowserSessionStore;

impl SessionStore for BrowserSessionStore {
    fn save(&self, session: &SessionPayload) -> AuthResult<()> {
        LocalStorage::set(SESSION_KEY, session)?;
        Ok(())
    }

    fn load(&self) -> Option<SessionPayload> {
        LocalStorage::get(SESSION_KEY).ok()
    }

    fn clear(&self) {
        LocalStorage::delete(SESSION_KEY);
    }
}

/// In-memory session store
#[derive(Default)]
pub struct MemorySessionStore {
    session: RefCell<Option<SessionPayload>>,
}

impl MemorySessionStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl SessionStore for MemorySessionStore {
    fn save(&self, session: &SessionPayload) -> AuthResult<()> {
        *self.session.borrow_mut() = Some(session.clone());
        Ok(())
    }

    fn load(&self) -> Option<SessionPayload> {
        self.session.borrow().clone()
    }

    fn clear(&self) {
        self.session.borrow_mut().take();
    }
}

/// One-shot message handed to the login view across a navigation
pub struct FlashStore;

impl FlashStore {
    pub fn store_error(message: &str) -> AuthResult<()> {
        SessionStorage::set(FLASH_ERROR_KEY, message)?;
        Ok(())
    }

    /// Read and clear the pending message
    pub fn take_error() -> Option<String> {
        let message: Option<String> = SessionStorage::get(FLASH_ERROR_KEY).ok();
        if message.is_some() {
            SessionStorage::delete(FLASH_ERROR_KEY);
        }
        message
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_memory_store_round_trip_and_clear() {
        let store = MemorySessionStore::new();
        assert!(store.load().is_none());

        let session = SessionPayload(json!({ "token": "abc" }));
        store.save(&session).unwrap();
        assert_eq!(store.load(), Some(session));

        store.clear();
        assert!(store.load().is_none());
    }
}
