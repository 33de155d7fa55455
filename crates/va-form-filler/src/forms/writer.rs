use std::fmt::Debug;
use std::fs;
use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex, PoisonError};

use crate::forms::va21_0966::FilledFieldMap;

#[derive(Debug, thiserror::Error)]
pub enum FormWriteError {
    #[error("failed to write filled fields to {path}: {source}")]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("failed to serialize filled fields: {0}")]
    Serialize(#[from] serde_json::Error),
    #[error("writer rejected the filled fields: {0}")]
    Rejected(String),
}

/// Seam to the tool that stamps field values into the blank PDF.
///
/// `destination` is where the filled PDF belongs; implementations return the
/// location they actually wrote.
pub trait FormWriter: Debug + Send + Sync {
    fn write(
        &self,
        fields: &FilledFieldMap,
        destination: &Path,
    ) -> Result<PathBuf, FormWriteError>;
}

/// Writes the map as pretty JSON next to the PDF destination (`.json` extension),
/// for consumption by an external PDF stamping step.
#[derive(Debug, Clone, Copy, Default)]
pub struct JsonFieldDump;

impl FormWriter for JsonFieldDump {
    fn write(
        &self,
        fields: &FilledFieldMap,
        destination: &Path,
    ) -> Result<PathBuf, FormWriteError> {
        let location = destination.with_extension("json");
        if let Some(parent) = location
            .parent()
            .filter(|parent| !parent.as_os_str().is_empty())
        {
            fs::create_dir_all(parent).map_err(|source| FormWriteError::Io {
                path: parent.to_path_buf(),
                source,
            })?;
        }

        let body = serde_json::to_vec_pretty(fields)?;
        fs::write(&location, body).map_err(|source| FormWriteError::Io {
            path: location.clone(),
            source,
        })?;
        Ok(location)
    }
}

/// Keeps every write in memory. Clones share the same log.
#[derive(Debug, Clone, Default)]
pub struct RecordingWriter {
    writes: Arc<Mutex<Vec<(PathBuf, FilledFieldMap)>>>,
}

impl RecordingWriter {
    pub fn writes(&self) -> Vec<(PathBuf, FilledFieldMap)> {
        self.writes
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }
}

impl FormWriter for RecordingWriter {
    fn write(
        &self,
        fields: &FilledFieldMap,
        destination: &Path,
    ) -> Result<PathBuf, FormWriteError> {
        let mut guard = self
            .writes
            .lock()
            .map_err(|_| FormWriteError::Rejected("recording writer lock poisoned".to_string()))?;
        guard.push((destination.to_path_buf(), fields.clone()));
        Ok(destination.to_path_buf())
    }
}
