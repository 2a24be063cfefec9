pub mod memory;

pub use memory::MemoryStorage;

use crate::model::GolferRecord;
use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use std::error::Error;
use std::fmt;

#[derive(Debug, Clone)]
pub struct StorageError {
    message: String,
}

impl StorageError {
    #[must_use]
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

impl fmt::Display for StorageError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.message)
    }
}

impl Error for StorageError {}

/// Outcome of a write, shaped like a document store's acknowledgement.
#[derive(Serialize, Deserialize, Clone, Copy, Debug, Default, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct WriteResult {
    pub acknowledged: bool,
    pub matched_count: u64,
    pub modified_count: u64,
    pub inserted_count: u64,
}

/// The golfer collection. One document per golfer.
#[async_trait]
pub trait Storage: Send + Sync {
    async fn fetch_all_records(&self) -> Result<Vec<GolferRecord>, StorageError>;
    async fn fetch_one_record(&self, name: &str) -> Result<Option<GolferRecord>, StorageError>;
    /// Set every given field on every document.
    async fn apply_bulk_field_set(
        &self,
        fields: &Map<String, Value>,
    ) -> Result<WriteResult, StorageError>;
    /// Remove every given field from every document.
    async fn apply_bulk_field_unset(
        &self,
        field_names: &[String],
    ) -> Result<WriteResult, StorageError>;
    async fn insert_record(&self, record: GolferRecord) -> Result<WriteResult, StorageError>;
    async fn update_single_field(
        &self,
        name: &str,
        date_key: &str,
        score: i32,
    ) -> Result<WriteResult, StorageError>;
}
