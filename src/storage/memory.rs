use crate::model::GolferRecord;
use crate::storage::{Storage, StorageError, WriteResult};
use async_trait::async_trait;
use serde_json::{Map, Value};
use std::sync::Arc;
use tokio::sync::RwLock;

/// In-process golfer collection. Clones share the same documents.
#[derive(Debug, Clone, Default)]
pub struct MemoryStorage {
    records: Arc<RwLock<Vec<GolferRecord>>>,
}

impl MemoryStorage {
    #[must_use]
    pub fn new(records: Vec<GolferRecord>) -> Self {
        Self {
            records: Arc::new(RwLock::new(records)),
        }
    }

    /// Seed from a JSON array of golfer documents.
    ///
    /// # Errors
    ///
    /// Will return `Err` if the value is not an array of objects.
    pub fn from_json(value: &Value) -> Result<Self, StorageError> {
        let records: Vec<GolferRecord> = serde_json::from_value(value.clone())
            .map_err(|e| StorageError::new(format!("invalid golfer documents: {e}")))?;
        Ok(Self::new(records))
    }
}

#[async_trait]
impl Storage for MemoryStorage {
    async fn fetch_all_records(&self) -> Result<Vec<GolferRecord>, StorageError> {
        Ok(self.records.read().await.clone())
    }

    async fn fetch_one_record(&self, name: &str) -> Result<Option<GolferRecord>, StorageError> {
        Ok(self
            .records
            .read()
            .await
            .iter()
            .find(|r| r.name() == Some(name))
            .cloned())
    }

    async fn apply_bulk_field_set(
        &self,
        fields: &Map<String, Value>,
    ) -> Result<WriteResult, StorageError> {
        let mut records = self.records.write().await;
        let mut result = WriteResult {
            acknowledged: true,
            matched_count: records.len() as u64,
            ..WriteResult::default()
        };
        for record in records.iter_mut() {
            let mut modified = false;
            for (key, value) in fields {
                if record.set_field(key.clone(), value.clone()).as_ref() != Some(value) {
                    modified = true;
                }
            }
            if modified {
                result.modified_count += 1;
            }
        }
        Ok(result)
    }

    async fn apply_bulk_field_unset(
        &self,
        field_names: &[String],
    ) -> Result<WriteResult, StorageError> {
        let mut records = self.records.write().await;
        let mut result = WriteResult {
            acknowledged: true,
            matched_count: records.len() as u64,
            ..WriteResult::default()
        };
        for record in records.iter_mut() {
            let mut modified = false;
            for key in field_names {
                modified |= record.remove_field(key).is_some();
            }
            if modified {
                result.modified_count += 1;
            }
        }
        Ok(result)
    }

    async fn insert_record(&self, record: GolferRecord) -> Result<WriteResult, StorageError> {
        self.records.write().await.push(record);
        Ok(WriteResult {
            acknowledged: true,
            inserted_count: 1,
            ..WriteResult::default()
        })
    }

    async fn update_single_field(
        &self,
        name: &str,
        date_key: &str,
        score: i32,
    ) -> Result<WriteResult, StorageError> {
        let mut records = self.records.write().await;
        let mut result = WriteResult {
            acknowledged: true,
            ..WriteResult::default()
        };
        if let Some(record) = records.iter_mut().find(|r| r.name() == Some(name)) {
            result.matched_count = 1;
            let value = Value::from(score);
            if record.set_field(date_key, value.clone()) != Some(value) {
                result.modified_count = 1;
            }
        }
        Ok(result)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn storage() -> MemoryStorage {
        MemoryStorage::from_json(&json!([
            {"Names": "Al", "2022 Wk 1": 40},
            {"Names": "Bo", "2022 Wk 1": ""}
        ]))
        .unwrap()
    }

    #[tokio::test]
    async fn bulk_set_touches_every_document() {
        let storage = storage();
        let mut fields = Map::new();
        fields.insert("2022 Wk 2".to_string(), json!(""));
        let result = storage.apply_bulk_field_set(&fields).await.unwrap();
        assert_eq!(result.matched_count, 2);
        assert_eq!(result.modified_count, 2);

        let again = storage.apply_bulk_field_set(&fields).await.unwrap();
        assert_eq!(again.modified_count, 0);
    }

    #[tokio::test]
    async fn bulk_unset_counts_only_documents_that_changed() {
        let storage = storage();
        storage
            .update_single_field("Al", "2022 Wk 3", 41)
            .await
            .unwrap();
        let result = storage
            .apply_bulk_field_unset(&["2022 Wk 3".to_string()])
            .await
            .unwrap();
        assert_eq!(result.matched_count, 2);
        assert_eq!(result.modified_count, 1);
    }

    #[tokio::test]
    async fn update_unknown_golfer_matches_nothing() {
        let result = storage()
            .update_single_field("Cy", "2022 Wk 1", 40)
            .await
            .unwrap();
        assert_eq!(result.matched_count, 0);
        assert_eq!(result.modified_count, 0);
    }

    #[tokio::test]
    async fn clones_share_documents() {
        let storage = storage();
        let other = storage.clone();
        other.insert_record(GolferRecord::new("Cy")).await.unwrap();
        assert!(storage.fetch_one_record("Cy").await.unwrap().is_some());
        assert_eq!(storage.fetch_all_records().await.unwrap().len(), 3);
    }

    #[test]
    fn rejects_non_array_seed() {
        assert!(MemoryStorage::from_json(&json!({"Names": "Al"})).is_err());
    }
}
