//! Local persistence for the session identifier.
//!
//! Web builds keep it in `localStorage` under [`SESSION_KEY`]; native builds write a
//! small file in the platform data directory. Tests use [`MemoryStore`].

use std::cell::RefCell;

/// Storage key (web) / file name (native) holding the signed-in user's id.
pub const SESSION_KEY: &str = "userId";

#[derive(Debug, thiserror::Error)]
pub enum StorageError {
    #[error("Storage unavailable: {0}")]
    Unavailable(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Storage error: {0}")]
    Backend(String),
}

/// Persistence for one opaque string value.
pub trait SessionStore {
    fn load(&self) -> Result<Option<String>, StorageError>;
    fn save(&self, value: &str) -> Result<(), StorageError>;
    fn clear(&self) -> Result<(), StorageError>;
}

/// Volatile store. Lives as long as the value that owns it.
#[derive(Debug, Default)]
pub struct MemoryStore {
    value: RefCell<Option<String>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl SessionStore for MemoryStore {
    fn load(&self) -> Result<Option<String>, StorageError> {
        Ok(self.value.borrow().clone())
    }

    fn save(&self, value: &str) -> Result<(), StorageError> {
        self.value.replace(Some(value.to_string()));
        Ok(())
    }

    fn clear(&self) -> Result<(), StorageError> {
        self.value.replace(None);
        Ok(())
    }
}

/// Browser `localStorage`, scoped to the page origin.
#[cfg(target_arch = "wasm32")]
#[derive(Debug, Default)]
pub struct LocalStorageStore;

#[cfg(target_arch = "wasm32")]
impl LocalStorageStore {
    fn storage() -> Result<web_sys::Storage, StorageError> {
        let window = web_sys::window()
            .ok_or_else(|| StorageError::Unavailable("No window object available".to_string()))?;
        window
            .local_storage()
            .map_err(|e| StorageError::Unavailable(format!("localStorage access error: {e:?}")))?
            .ok_or_else(|| StorageError::Unavailable("localStorage not available".to_string()))
    }
}

#[cfg(target_arch = "wasm32")]
impl SessionStore for LocalStorageStore {
    fn load(&self) -> Result<Option<String>, StorageError> {
        Self::storage()?
            .get_item(SESSION_KEY)
            .map_err(|e| StorageError::Backend(format!("Failed to read from localStorage: {e:?}")))
    }

    fn save(&self, value: &str) -> Result<(), StorageError> {
        Self::storage()?
            .set_item(SESSION_KEY, value)
            .map_err(|e| StorageError::Backend(format!("Failed to save to localStorage: {e:?}")))
    }

    fn clear(&self) -> Result<(), StorageError> {
        Self::storage()?
            .remove_item(SESSION_KEY)
            .map_err(|e| StorageError::Backend(format!("Failed to clear localStorage: {e:?}")))
    }
}

/// One file per value inside a directory.
#[cfg(not(target_arch = "wasm32"))]
#[derive(Debug, Clone)]
pub struct FileStore {
    path: std::path::PathBuf,
}

#[cfg(not(target_arch = "wasm32"))]
impl FileStore {
    pub fn in_dir(dir: impl Into<std::path::PathBuf>) -> Self {
        Self {
            path: dir.into().join(SESSION_KEY),
        }
    }

    /// Store inside the per-user data directory of the OS.
    pub fn platform_default() -> Result<Self, StorageError> {
        let dirs = directories::ProjectDirs::from("app", "DigitalForge", "DigitalForge")
            .ok_or_else(|| StorageError::Unavailable("No home directory".to_string()))?;
        Ok(Self::in_dir(dirs.data_dir()))
    }
}

#[cfg(not(target_arch = "wasm32"))]
impl SessionStore for FileStore {
    fn load(&self) -> Result<Option<String>, StorageError> {
        match std::fs::read_to_string(&self.path) {
            Ok(contents) => Ok(Some(contents)),
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => Ok(None),
            Err(err) => Err(err.into()),
        }
    }

    fn save(&self, value: &str) -> Result<(), StorageError> {
        if let Some(parent) = self.path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        std::fs::write(&self.path, value)?;
        Ok(())
    }

    fn clear(&self) -> Result<(), StorageError> {
        match std::fs::remove_file(&self.path) {
            Ok(()) => Ok(()),
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => Ok(()),
            Err(err) => Err(err.into()),
        }
    }
}

/// The persistent store for the current platform, or memory if none is reachable.
pub fn platform_store() -> Box<dyn SessionStore> {
    #[cfg(target_arch = "wasm32")]
    {
        Box::new(LocalStorageStore)
    }

    #[cfg(not(target_arch = "wasm32"))]
    {
        match FileStore::platform_default() {
            Ok(store) => Box::new(store),
            Err(err) => {
                log::warn!("Falling back to in-memory session storage: {err}");
                Box::new(MemoryStore::new())
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn memory_store_round_trip() {
        let store = MemoryStore::new();
        assert_eq!(store.load().unwrap(), None);
        store.save("12").unwrap();
        assert_eq!(store.load().unwrap().as_deref(), Some("12"));
        store.clear().unwrap();
        assert_eq!(store.load().unwrap(), None);
    }

    #[cfg(not(target_arch = "wasm32"))]
    #[test]
    fn file_store_survives_reopen_and_clear_is_idempotent() {
        let dir = tempfile::tempdir().unwrap();
        let store = FileStore::in_dir(dir.path().join("nested"));

        assert_eq!(store.load().unwrap(), None);
        store.save("42").unwrap();

        let reopened = FileStore::in_dir(dir.path().join("nested"));
        assert_eq!(reopened.load().unwrap().as_deref(), Some("42"));

        reopened.clear().unwrap();
        reopened.clear().unwrap();
        assert_eq!(store.load().unwrap(), None);
    }
}
