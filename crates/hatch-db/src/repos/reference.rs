//! Location and auditor lists used by selection pickers.

use hatch_core::entities::{Auditor, Location};
use hatch_core::ids::{PREFIX_AUDITOR, PREFIX_LOCATION, random_id};
use tracing::info;

use crate::error::DatabaseError;
use crate::keys;
use crate::service::AuditStore;

impl AuditStore {
    /// # Errors
    ///
    /// Returns `DatabaseError` if the backend fails or the list is corrupt.
    pub async fn get_locations(&self) -> Result<Vec<Location>, DatabaseError> {
        Ok(self.read_json(keys::LOCATIONS).await?.unwrap_or_default())
    }

    /// # Errors
    ///
    /// Returns `DatabaseError` if the write fails.
    pub async fn save_locations(&self, locations: &[Location]) -> Result<(), DatabaseError> {
        self.write_json(keys::LOCATIONS, locations).await
    }

    /// Append a location with a fresh id.
    ///
    /// # Errors
    ///
    /// Returns `DatabaseError` if the backend fails.
    pub async fn add_location(&self, name: &str, code: &str) -> Result<Location, DatabaseError> {
        let mut locations = self.get_locations().await?;
        let location = Location {
            id: random_id(PREFIX_LOCATION)?,
            name: name.to_string(),
            code: code.to_string(),
        };
        locations.push(location.clone());
        self.save_locations(&locations).await?;
        info!(id = %location.id, name, "location added");
        Ok(location)
    }

    /// # Errors
    ///
    /// Returns `DatabaseError::NotFound` if no location has this id.
    pub async fn remove_location(&self, id: &str) -> Result<(), DatabaseError> {
        let mut locations = self.get_locations().await?;
        let before = locations.len();
        locations.retain(|l| l.id != id);
        if locations.len() == before {
            return Err(DatabaseError::not_found("location", id));
        }
        self.save_locations(&locations).await
    }

    /// # Errors
    ///
    /// Returns `DatabaseError` if the backend fails or the list is corrupt.
    pub async fn get_auditors(&self) -> Result<Vec<Auditor>, DatabaseError> {
        Ok(self.read_json(keys::AUDITORS).await?.unwrap_or_default())
    }

    /// # Errors
    ///
    /// Returns `DatabaseError` if the write fails.
    pub async fn save_auditors(&self, auditors: &[Auditor]) -> Result<(), DatabaseError> {
        self.write_json(keys::AUDITORS, auditors).await
    }

    /// Append an auditor with a fresh id.
    ///
    /// # Errors
    ///
    /// Returns `DatabaseError` if the backend fails.
    pub async fn add_auditor(&self, name: &str, role: &str) -> Result<Auditor, DatabaseError> {
        let mut auditors = self.get_auditors().await?;
        let auditor = Auditor {
            id: random_id(PREFIX_AUDITOR)?,
            name: name.to_string(),
            role: role.to_string(),
        };
        auditors.push(auditor.clone());
        self.save_auditors(&auditors).await?;
        info!(id = %auditor.id, name, "auditor added");
        Ok(auditor)
    }

    /// # Errors
    ///
    /// Returns `DatabaseError::NotFound` if no auditor has this id.
    pub async fn remove_auditor(&self, id: &str) -> Result<(), DatabaseError> {
        let mut auditors = self.get_auditors().await?;
        let before = auditors.len();
        auditors.retain(|a| a.id != id);
        if auditors.len() == before {
            return Err(DatabaseError::not_found("auditor", id));
        }
        self.save_auditors(&auditors).await
    }
}
