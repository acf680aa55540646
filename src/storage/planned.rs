//! Planned purchase repository for JSON storage

use std::collections::HashMap;
use std::path::PathBuf;
use std::sync::RwLock;

use crate::error::FintrackError;
use crate::models::{PlannedPurchase, PlannedPurchaseId};

use super::file_io::{read_json, write_json_atomic};

/// Serializable planned purchase data structure
#[derive(Debug, Clone, Default, serde::Serialize, serde::Deserialize)]
struct PlannedData {
    planned: Vec<PlannedPurchase>,
}

/// Repository for planned purchase persistence
pub struct PlannedPurchaseRepository {
    path: PathBuf,
    data: RwLock<HashMap<PlannedPurchaseId, PlannedPurchase>>,
}

impl PlannedPurchaseRepository {
    /// Create a new planned purchase repository
    pub fn new(path: PathBuf) -> Self {
        Self {
            path,
            data: RwLock::new(HashMap::new()),
        }
    }

    /// Load planned purchases from disk
    pub fn load(&self) -> Result<(), FintrackError> {
        let file_data: PlannedData = read_json(&self.path)?;

        let mut data = self
            .data
            .write()
            .map_err(|e| FintrackError::Storage(format!("Failed to acquire write lock: {}", e)))?;

        data.clear();
        for planned in file_data.planned {
            data.insert(planned.id, planned);
        }

        Ok(())
    }

    /// Save planned purchases to disk
    pub fn save(&self) -> Result<(), FintrackError> {
        let data = self
            .data
            .read()
            .map_err(|e| FintrackError::Storage(format!("Failed to acquire read lock: {}", e)))?;

        let mut planned: Vec<_> = data.values().cloned().collect();
        planned.sort_by(|a, b| a.created_at.cmp(&b.created_at));

        let file_data = PlannedData { planned };
        write_json_atomic(&self.path, &file_data)
    }

    /// Get a planned purchase by ID
    pub fn get(&self, id: PlannedPurchaseId) -> Result<Option<PlannedPurchase>, FintrackError> {
        let data = self
            .data
            .read()
            .map_err(|e| FintrackError::Storage(format!("Failed to acquire read lock: {}", e)))?;

        Ok(data.get(&id).cloned())
    }

    /// Get all planned purchases in creation order
    pub fn get_all(&self) -> Result<Vec<PlannedPurchase>, FintrackError> {
        let data = self
            .data
            .read()
            .map_err(|e| FintrackError::Storage(format!("Failed to acquire read lock: {}", e)))?;

        let mut planned: Vec<_> = data.values().cloned().collect();
        planned.sort_by(|a, b| a.created_at.cmp(&b.created_at));
        Ok(planned)
    }

    /// Insert or update a planned purchase
    pub fn upsert(&self, planned: PlannedPurchase) -> Result<(), FintrackError> {
        let mut data = self
            .data
            .write()
            .map_err(|e| FintrackError::Storage(format!("Failed to acquire write lock: {}", e)))?;

        data.insert(planned.id, planned);
        Ok(())
    }

    /// Delete a planned purchase
    pub fn delete(&self, id: PlannedPurchaseId) -> Result<bool, FintrackError> {
        let mut data = self
            .data
            .write()
            .map_err(|e| FintrackError::Storage(format!("Failed to acquire write lock: {}", e)))?;

        Ok(data.remove(&id).is_some())
    }

    /// Count planned purchases
    pub fn count(&self) -> Result<usize, FintrackError> {
        let data = self
            .data
            .read()
            .map_err(|e| FintrackError::Storage(format!("Failed to acquire read lock: {}", e)))?;

        Ok(data.len())
    }
}
