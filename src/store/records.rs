use thiserror::Error;
use tokio::sync::RwLock;
use tracing::debug;

use crate::types::ModRecord;

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("mod not found: {0}")]
    NotFound(String),
}

/// Ordered, in-memory mod collection.
///
/// Lookups are linear scans and act on the first record whose id matches.
#[derive(Debug, Default)]
pub struct RecordStore {
    records: RwLock<Vec<ModRecord>>,
}

impl RecordStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_records(records: Vec<ModRecord>) -> Self {
        Self { records: RwLock::new(records) }
    }

    pub async fn list(&self) -> Vec<ModRecord> {
        self.records.read().await.clone()
    }

    pub async fn get(&self, id: &str) -> Result<ModRecord, StoreError> {
        self.records
            .read()
            .await
            .iter()
            .find(|r| r.id == id)
            .cloned()
            .ok_or_else(|| StoreError::NotFound(id.to_string()))
    }

    /// Append verbatim; duplicate ids are allowed
    pub async fn create(&self, record: ModRecord) -> ModRecord {
        let mut records = self.records.write().await;
        records.push(record.clone());
        debug!("Created mod '{}' ({} total)", record.id, records.len());
        record
    }

    /// Replace the first match in place, keeping its position
    pub async fn update(&self, id: &str, record: ModRecord) -> Result<ModRecord, StoreError> {
        let mut records = self.records.write().await;
        let slot = records
            .iter_mut()
            .find(|r| r.id == id)
            .ok_or_else(|| StoreError::NotFound(id.to_string()))?;

        *slot = record.clone();
        debug!("Updated mod '{}'", id);
        Ok(record)
    }

    /// Remove the first match; the remaining records keep their order
    pub async fn delete(&self, id: &str) -> Result<ModRecord, StoreError> {
        let mut records = self.records.write().await;
        let index = records
            .iter()
            .position(|r| r.id == id)
            .ok_or_else(|| StoreError::NotFound(id.to_string()))?;

        let removed = records.remove(index);
        debug!("Deleted mod '{}' ({} remaining)", id, records.len());
        Ok(removed)
    }

    pub async fn len(&self) -> usize {
        self.records.read().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.records.read().await.is_empty()
    }
}

/// The three mods the collection starts with when demo data is enabled
pub fn demo_records() -> Vec<ModRecord> {
    vec![
        ModRecord::new("1", "Bite", "+330% Critical Chance\n+220% Critical Damage"),
        ModRecord::new(
            "2",
            "Ulfrun's Endurance",
            "Ulfrun's Descent Augment: During Ulfrun’s attack, enemies that die from Slash Status within 20m restore Voruna’s charges.",
        ),
        ModRecord::new(
            "3",
            "Fracturing Crush",
            "Crush Augment: Crush gains +50% casting speed. The armor of surviving enemies decreases by 75% and they are unable to move for 7s.",
        ),
    ]
}
