use std::{fmt, io, path::PathBuf};

use crate::service::progress_store::STORE_FILE;

pub const APP_DIR_NAME: &str = "champ-challenge";
pub const LOG_FILE: &str = "champ-challenge.log";
pub const DEFAULT_LOCALE: &str = "en_US";

#[derive(Debug, Clone)]
pub struct Config {
    pub data_dir: PathBuf,
    pub locale: String,
    pub load_local: bool,
    pub store_responses: bool,
}

impl Config {
    /// Resolves the data directory (explicit override or the platform's local
    /// data dir) and makes sure it exists.
    pub fn resolve(
        data_dir: Option<PathBuf>,
        locale: String,
        load_local: bool,
        store_responses: bool,
    ) -> Result<Self, ConfigError> {
        let data_dir = match data_dir {
            Some(dir) => dir,
            None => dirs::data_local_dir()
                .ok_or(ConfigError::DataDirNotFound)?
                .join(APP_DIR_NAME),
        };

        if !data_dir.exists() {
            std::fs::create_dir_all(&data_dir).map_err(ConfigError::DataDirCreationFailed)?;
        }

        Ok(Self {
            data_dir,
            locale,
            load_local,
            store_responses,
        })
    }

    pub fn store_path(&self) -> PathBuf {
        self.data_dir.join(STORE_FILE)
    }

    pub fn log_path(&self) -> PathBuf {
        self.data_dir.join(LOG_FILE)
    }
}

#[derive(Debug)]
pub enum ConfigError {
    DataDirNotFound,
    DataDirCreationFailed(io::Error),
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            ConfigError::DataDirNotFound => write!(f, "Could not find a local data directory"),
            ConfigError::DataDirCreationFailed(err) => {
                write!(f, "Failed to create data directory: {}", err)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn explicit_dir_is_created_and_used() {
        let tmp = tempfile::tempdir().unwrap();
        let dir = tmp.path().join("state");

        let config = Config::resolve(Some(dir.clone()), DEFAULT_LOCALE.into(), false, false).unwrap();

        assert!(dir.is_dir());
        assert_eq!(config.store_path(), dir.join(STORE_FILE));
        assert_eq!(config.log_path(), dir.join(LOG_FILE));
    }
}
