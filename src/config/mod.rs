//! Persistent API-key store.
//!
//! The key lives in a single pretty-printed JSON file under the user's home
//! directory (`~/.grapho-config.json` by default). The path is injectable so
//! tests never touch the real home directory. Storage is plaintext.

use std::fs;
use std::path::{Path, PathBuf};

use console::style;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::ConfigError;
use crate::lang::Messages;
use crate::session::Prompter;

/// On-disk shape of the config file.
///
/// The field serializes as `apiKey` to stay compatible with config files
/// written by earlier versions of the tool.
#[derive(Debug, Serialize, Deserialize)]
struct ConfigFile {
    #[serde(rename = "apiKey")]
    api_key: String,
}

/// Reads and writes the per-user config file.
pub struct ConfigStore {
    path: PathBuf,
}

impl ConfigStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Default location: `.grapho-config.json` in the user's home directory.
    pub fn default_path() -> Result<PathBuf, ConfigError> {
        let home = dirs::home_dir().ok_or(ConfigError::NoHomeDir)?;
        Ok(home.join(".grapho-config.json"))
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Load the stored API key, if the file exists and holds a non-empty one.
    pub fn load(&self) -> Result<Option<String>, ConfigError> {
        if !self.path.exists() {
            return Ok(None);
        }

        let raw = fs::read_to_string(&self.path).map_err(ConfigError::ReadFailed)?;
        let config: ConfigFile = serde_json::from_str(&raw).map_err(ConfigError::InvalidJson)?;

        let key = config.api_key.trim();
        if key.is_empty() {
            Ok(None)
        } else {
            Ok(Some(key.to_string()))
        }
    }

    /// Persist the API key, creating parent directories as needed.
    pub fn save(&self, api_key: &str) -> Result<(), ConfigError> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent).map_err(ConfigError::WriteFailed)?;
        }

        let config = ConfigFile {
            api_key: api_key.to_string(),
        };
        let data =
            serde_json::to_string_pretty(&config).expect("config serialization cannot fail");
        fs::write(&self.path, data).map_err(ConfigError::WriteFailed)?;

        debug!("wrote API key to {}", self.path.display());
        Ok(())
    }
}

/// Return the stored API key, prompting for one if none is on disk.
///
/// Empty or whitespace-only input is rejected with the localized notice and
/// the prompt repeats; nothing is written for a rejected attempt. A key that
/// already exists on disk is returned without touching the file.
pub fn ensure_api_key(
    store: &ConfigStore,
    prompter: &dyn Prompter,
    messages: &Messages,
) -> Result<String, ConfigError> {
    if let Some(key) = store.load()? {
        return Ok(key);
    }

    loop {
        let input = prompter
            .input(messages.enter_api_key)
            .map_err(ConfigError::PromptFailed)?;
        let key = input.trim();

        if key.is_empty() {
            eprintln!("{}", style(messages.api_key_empty).red());
            continue;
        }

        store.save(key)?;
        return Ok(key.to_string());
    }
}
