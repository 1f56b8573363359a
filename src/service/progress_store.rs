use std::{
    collections::HashMap,
    fmt, fs, io,
    path::{Path, PathBuf},
};

use crate::model::{ids::ChampionId, progress::ProgressRecord};

pub const STORE_FILE: &str = "lol-champion-progress.json";

pub type ProgressMap = HashMap<ChampionId, ProgressRecord>;

/// User progress keyed by champion, mirrored in full to a JSON file after
/// every change.
pub struct ProgressStore {
    path: PathBuf,
    records: ProgressMap,
}

impl ProgressStore {
    /// Reads the store file. A missing, unreadable or corrupt file yields an
    /// empty store; the problem is logged and not reported further. A corrupt
    /// file is moved aside to `<name>.corrupt` so the next save cannot clobber it.
    pub fn load(path: impl Into<PathBuf>) -> Self {
        let path = path.into();
        let records = match Self::read_from_disk(&path) {
            Ok(Some(records)) => {
                log::info!("Loaded progress for {} champions from {}", records.len(), path.display());
                records
            }
            Ok(None) => {
                log::info!("No progress file at {}, starting empty", path.display());
                ProgressMap::new()
            }
            Err(err) => {
                log::warn!("Failed to load progress from {}: {}", path.display(), err);
                if let ProgressStoreError::Serde(_) = err {
                    Self::move_aside(&path);
                }
                ProgressMap::new()
            }
        };

        Self { path, records }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn get(&self, id: &ChampionId) -> Option<&ProgressRecord> {
        self.records.get(id)
    }

    pub fn is_done(&self, id: &ChampionId) -> bool {
        self.get(id).is_some_and(ProgressRecord::is_done)
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    #[cfg(test)]
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Inserts or replaces the record, then rewrites the whole file. A failed
    /// write is logged; the in-memory value is kept either way.
    pub fn save(&mut self, id: ChampionId, record: ProgressRecord) {
        log::debug!("Saving progress for {}: {:?}", id, record);
        self.records.insert(id, record);

        if let Err(err) = self.write_to_disk() {
            log::error!("Failed to write progress to {}: {}", self.path.display(), err);
        }
    }

    pub fn to_json(records: &ProgressMap) -> Result<String, ProgressStoreError> {
        Ok(serde_json::to_string_pretty(records)?)
    }

    pub fn from_json(text: &str) -> Result<ProgressMap, ProgressStoreError> {
        Ok(serde_json::from_str(text)?)
    }

    fn corrupt_path(path: &Path) -> PathBuf {
        let mut name = path.as_os_str().to_owned();
        name.push(".corrupt");
        PathBuf::from(name)
    }

    fn move_aside(path: &Path) {
        let backup = Self::corrupt_path(path);
        match fs::rename(path, &backup) {
            Ok(_) => log::warn!("Kept unreadable progress file as {}", backup.display()),
            Err(err) => log::error!("Failed to move {} aside: {}", path.display(), err),
        }
    }

    fn read_from_disk(path: &Path) -> Result<Option<ProgressMap>, ProgressStoreError> {
        if !path.exists() {
            return Ok(None);
        }

        let contents = fs::read_to_string(path)?;
        Ok(Some(Self::from_json(&contents)?))
    }

    fn write_to_disk(&self) -> Result<(), ProgressStoreError> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent)?;
        }

        let json = Self::to_json(&self.records)?;
        fs::write(&self.path, json)?;
        Ok(())
    }
}

#[derive(Debug)]
pub enum ProgressStoreError {
    Io(io::Error),
    Serde(serde_json::Error),
}

impl fmt::Display for ProgressStoreError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            ProgressStoreError::Io(err) => write!(f, "File error: {}", err),
            ProgressStoreError::Serde(err) => write!(f, "Invalid progress data: {}", err),
        }
    }
}

impl From<io::Error> for ProgressStoreError {
    fn from(error: io::Error) -> Self {
        Self::Io(error)
    }
}

impl From<serde_json::Error> for ProgressStoreError {
    fn from(error: serde_json::Error) -> Self {
        Self::Serde(error)
    }
}
