//! JSON file persistence for exchange state

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use tracing::info;

use crate::domain::swap::EngineSnapshot;
use crate::infrastructure::native_vault::InMemoryVault;
use crate::shared::errors::AppError;

/// Everything needed to resume an exchange
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PersistedState {
    pub version: u32,
    pub engine: EngineSnapshot,
    pub vault: InMemoryVault,
}

impl PersistedState {
    pub const VERSION: u32 = 1;

    pub fn new(engine: EngineSnapshot, vault: InMemoryVault) -> Self {
        Self {
            version: Self::VERSION,
            engine,
            vault,
        }
    }
}

/// Pretty-JSON state file, replaced atomically on save
#[derive(Debug, Clone)]
pub struct JsonStateStore {
    path: PathBuf,
}

impl JsonStateStore {
    pub fn new<P: AsRef<Path>>(path: P) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Load saved state. `Ok(None)` when nothing has been saved yet.
    pub fn load(&self) -> Result<Option<PersistedState>, AppError> {
        if !self.path.exists() {
            info!("📂 No state at {}, starting fresh", self.path.display());
            return Ok(None);
        }

        let content = fs::read_to_string(&self.path)?;
        let state: PersistedState = serde_json::from_str(&content)?;
        if state.version != PersistedState::VERSION {
            return Err(AppError::StorageError(format!(
                "Unsupported state version {} in {}",
                state.version,
                self.path.display()
            )));
        }

        info!("📂 Loaded state from {}", self.path.display());
        Ok(Some(state))
    }

    pub fn save(&self, state: &PersistedState) -> Result<(), AppError> {
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent)?;
            }
        }

        let data = serde_json::to_vec_pretty(state)?;
        let tmp_path = self.path.with_extension("json.tmp");
        fs::write(&tmp_path, data)?;
        fs::rename(&tmp_path, &self.path)?;

        info!("💾 State saved to {}", self.path.display());
        Ok(())
    }
}
