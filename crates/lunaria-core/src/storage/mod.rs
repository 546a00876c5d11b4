//! Local persistence: data directory, the byte-vault contract, and the
//! file-backed vault that holds the serialized user list.

mod config;

pub use config::AppConfig;

use std::path::PathBuf;

use crate::error::StorageError;

/// Returns `~/.config/lunaria[-dev]/` based on LUNARIA_ENV.
///
/// Set LUNARIA_ENV=dev to use a development data directory.
///
/// # Errors
/// Returns an error if the home directory cannot be determined or if
/// creating the config directory fails.
pub fn data_dir() -> Result<PathBuf, Box<dyn std::error::Error>> {
    let base_dir = dirs::home_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join(".config");

    let env = std::env::var("LUNARIA_ENV").unwrap_or_else(|_| "production".to_string());

    let dir = if env == "dev" {
        base_dir.join("lunaria-dev")
    } else {
        base_dir.join("lunaria")
    };

    std::fs::create_dir_all(&dir)?;
    Ok(dir)
}

/// Stored user-list file name.
const USERS_FILE: &str = "users.json";

/// Byte store holding the entire serialized user list under a fixed key.
///
/// `load` distinguishes "nothing stored yet" (`Ok(None)`) from a read
/// failure; `save` replaces the stored payload atomically from the
/// caller's point of view.
pub trait UserVault {
    fn load(&self) -> Result<Option<Vec<u8>>, StorageError>;
    fn save(&self, bytes: &[u8]) -> Result<(), StorageError>;
}

/// File-backed vault at `data_dir()/users.json`.
#[derive(Debug, Clone)]
pub struct FileVault {
    path: PathBuf,
}

impl FileVault {
    /// Vault at the default data directory.
    ///
    /// # Errors
    /// Returns an error if the data directory cannot be created.
    pub fn open() -> Result<Self, Box<dyn std::error::Error>> {
        Ok(Self {
            path: data_dir()?.join(USERS_FILE),
        })
    }

    /// Vault at an explicit path (tests, alternate locations).
    pub fn at(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &std::path::Path {
        &self.path
    }
}

impl UserVault for FileVault {
    fn load(&self) -> Result<Option<Vec<u8>>, StorageError> {
        match std::fs::read(&self.path) {
            Ok(bytes) => Ok(Some(bytes)),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(None),
            Err(e) => Err(StorageError::ReadFailed {
                path: self.path.clone(),
                source: e,
            }),
        }
    }

    fn save(&self, bytes: &[u8]) -> Result<(), StorageError> {
        std::fs::write(&self.path, bytes).map_err(|e| StorageError::WriteFailed {
            path: self.path.clone(),
            source: e,
        })
    }
}
