//! JSON-backed question sources.

use async_trait::async_trait;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use crate::repository::{QuestionRecord, QuestionSource, StorageError};

/// Parse a JSON array of question records.
///
/// # Errors
///
/// Returns `StorageError::Serialization` for malformed JSON, missing fields or
/// unknown fields.
pub fn parse_records(raw: &str) -> Result<Vec<QuestionRecord>, StorageError> {
    serde_json::from_str(raw).map_err(|e| StorageError::Serialization(e.to_string()))
}

/// Question bank stored as a JSON file on disk.
#[derive(Debug, Clone)]
pub struct JsonFileSource {
    path: PathBuf,
}

impl JsonFileSource {
    #[must_use]
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }
}

#[async_trait]
impl QuestionSource for JsonFileSource {
    async fn load_records(&self) -> Result<Vec<QuestionRecord>, StorageError> {
        let raw = tokio::fs::read_to_string(&self.path)
            .await
            .map_err(|source| match source.kind() {
                ErrorKind::NotFound => StorageError::NotFound(self.path.clone()),
                _ => StorageError::Io {
                    path: self.path.clone(),
                    source,
                },
            })?;
        let records = parse_records(&raw)?;
        tracing::debug!(path = %self.path.display(), records = records.len(), "read question file");
        Ok(records)
    }

    fn describe(&self) -> String {
        self.path.display().to_string()
    }
}

/// Question bank held as JSON text, e.g. a bundled sample compiled into the binary.
#[derive(Debug, Clone)]
pub struct JsonStrSource {
    name: String,
    raw: &'static str,
}

impl JsonStrSource {
    #[must_use]
    pub fn new(name: impl Into<String>, raw: &'static str) -> Self {
        Self {
            name: name.into(),
            raw,
        }
    }
}

#[async_trait]
impl QuestionSource for JsonStrSource {
    async fn load_records(&self) -> Result<Vec<QuestionRecord>, StorageError> {
        parse_records(self.raw)
    }

    fn describe(&self) -> String {
        self.name.clone()
    }
}
