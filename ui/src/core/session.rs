//! The signed-in user, shared with views through Dioxus context.
//!
//! `Session` is the only place that reads or writes the persisted identifier, so
//! "is the user authenticated" has one answer everywhere. The check is a navigation
//! convenience; the backend remains responsible for authorising requests.

use std::rc::Rc;

use super::storage::{self, MemoryStore, SessionStore, StorageError};

#[derive(Clone)]
pub struct Session {
    store: Rc<dyn SessionStore>,
}

impl Session {
    pub fn new(store: impl SessionStore + 'static) -> Self {
        Self {
            store: Rc::new(store),
        }
    }

    pub fn in_memory() -> Self {
        Self::new(MemoryStore::new())
    }

    pub fn platform_default() -> Self {
        Self {
            store: Rc::from(storage::platform_store()),
        }
    }

    /// Identifier of the signed-in user. Unreadable storage counts as signed out.
    pub fn user_id(&self) -> Option<String> {
        match self.store.load() {
            Ok(value) => value.filter(|id| !id.is_empty()),
            Err(err) => {
                log::warn!("Could not read session: {err}");
                None
            }
        }
    }

    pub fn is_authenticated(&self) -> bool {
        self.user_id().is_some()
    }

    pub fn sign_in(&self, user_id: &str) -> Result<(), StorageError> {
        self.store.save(user_id)?;
        log::info!("Session started for user {user_id}");
        Ok(())
    }

    pub fn sign_out(&self) -> Result<(), StorageError> {
        self.store.clear()?;
        log::info!("Session cleared");
        Ok(())
    }
}

impl std::fmt::Debug for Session {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Session")
            .field("authenticated", &self.is_authenticated())
            .finish()
    }
}
