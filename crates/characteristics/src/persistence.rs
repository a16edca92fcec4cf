//! Persistence for snapshots - save/load JSON files.

use std::fs::{self, File};
use std::io::{BufReader, BufWriter};
use std::path::Path;

use serde::Serialize;
use serde::de::DeserializeOwned;
use tracing::debug;

use crate::characterization::Characterized;
use crate::curator::Curator;
use crate::error::{CharacteristicsError, Result};
use crate::snapshot::Snapshot;

impl<S: Serialize> Snapshot<S> {
    /// Serialize to a JSON string.
    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string(self)?)
    }

    /// Save the snapshot to a JSON file, creating parent directories.
    pub fn save(&self, path: impl AsRef<Path>) -> Result<()> {
        let path = path.as_ref();

        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() && !parent.exists() {
                fs::create_dir_all(parent).map_err(|e| {
                    CharacteristicsError::Persistence(format!(
                        "Failed to create directory '{}': {}",
                        parent.display(),
                        e
                    ))
                })?;
            }
        }

        let file = File::create(path).map_err(|e| {
            CharacteristicsError::Persistence(format!(
                "Failed to create file '{}': {}",
                path.display(),
                e
            ))
        })?;

        let writer = BufWriter::new(file);
        serde_json::to_writer_pretty(writer, self).map_err(|e| {
            CharacteristicsError::Persistence(format!("Failed to serialize snapshot: {}", e))
        })?;

        debug!(path = %path.display(), "saved snapshot");
        Ok(())
    }
}

impl<S: DeserializeOwned> Snapshot<S> {
    /// Parse from a JSON string.
    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Load a snapshot from a JSON file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();

        let file = File::open(path).map_err(|e| {
            CharacteristicsError::Persistence(format!(
                "Failed to open file '{}': {}",
                path.display(),
                e
            ))
        })?;

        let reader = BufReader::new(file);
        serde_json::from_reader(reader).map_err(|e| {
            CharacteristicsError::Persistence(format!(
                "Failed to parse snapshot '{}': {}",
                path.display(),
                e
            ))
        })
    }
}

impl<S: Characterized + Serialize> Curator<S> {
    /// Export and save to a JSON file.
    pub fn save(&self, path: impl AsRef<Path>) -> Result<()> {
        self.export().save(path)
    }
}

impl<S: Characterized + DeserializeOwned> Curator<S> {
    /// Load a snapshot from a JSON file and import it.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        Ok(Self::import(Snapshot::load(path)?))
    }
}
