use crate::error::{AddrBookError, Result};
use crate::store::DEFAULT_CHUNK_SIZE;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

const CONFIG_FILENAME: &str = "config.json";
const DEFAULT_BOOK_FILE: &str = "address_book.json";

/// Configuration for addrbook, stored in `<data home>/config.json`
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct AppConfig {
    /// Address book file. Relative paths are resolved against the data home.
    #[serde(default = "default_book_file")]
    pub book_file: PathBuf,

    /// Save right after every change instead of only on `close`
    #[serde(default = "default_autosave")]
    pub autosave: bool,

    /// Records per page when showing all contacts
    #[serde(default = "default_page_size")]
    pub page_size: usize,
}

fn default_book_file() -> PathBuf {
    PathBuf::from(DEFAULT_BOOK_FILE)
}

fn default_autosave() -> bool {
    true
}

fn default_page_size() -> usize {
    DEFAULT_CHUNK_SIZE
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            book_file: default_book_file(),
            autosave: default_autosave(),
            page_size: default_page_size(),
        }
    }
}

impl AppConfig {
    /// Load config from the given directory, or return defaults if not found
    pub fn load<P: AsRef<Path>>(config_dir: P) -> Result<Self> {
        let config_path = config_dir.as_ref().join(CONFIG_FILENAME);

        if !config_path.exists() {
            return Ok(Self::default());
        }

        let content = fs::read_to_string(&config_path).map_err(AddrBookError::Io)?;
        let config: AppConfig = serde_json::from_str(&content).map_err(|e| {
            AddrBookError::Config(format!("{}: {}", config_path.display(), e))
        })?;
        Ok(config)
    }

    /// Absolute location of the address book for a given data home
    pub fn book_path(&self, data_home: &Path) -> PathBuf {
        if self.book_file.is_absolute() {
            self.book_file.clone()
        } else {
            data_home.join(&self.book_file)
        }
    }
}
