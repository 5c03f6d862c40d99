//! Donor collection controller
//!
//! Owns the in-memory donor list; the repository owns the durable copy and
//! is the source of truth on load. Each store operation is a single-attempt
//! request, and the cached list is mutated only in the success path, so a
//! failed request always leaves the list at its last known-good value.

use std::sync::{Arc, RwLock};

use tracing::{debug, info};

use crate::domain::donor::{
    BloodGroupFilter, BloodGroupStats, Donor, DonorId, DonorRepository, DonorUpdate, NewDonor,
};
use crate::domain::DomainError;

/// Controller over the donor collection
#[derive(Debug)]
pub struct DonorCollection {
    repository: Arc<dyn DonorRepository>,
    donors: RwLock<Vec<Donor>>,
}

impl DonorCollection {
    /// Create a collection with an empty cache; call [`load`](Self::load)
    /// to populate it from the store
    pub fn new(repository: Arc<dyn DonorRepository>) -> Self {
        Self {
            repository,
            donors: RwLock::new(Vec::new()),
        }
    }

    /// Fetch all donors from the store, newest first
    ///
    /// On success the cache is replaced wholesale; on failure the prior
    /// list is left unchanged and the error is surfaced.
    pub async fn load(&self) -> Result<Vec<Donor>, DomainError> {
        let donors = self.repository.list().await?;

        info!(count = donors.len(), "Loaded donor collection");
        *self.donors.write().unwrap() = donors.clone();

        Ok(donors)
    }

    /// Register a new donor
    ///
    /// On success the store-assigned record is prepended to the cached list
    /// and returned; on failure local state is untouched.
    pub async fn add(&self, fields: NewDonor) -> Result<Donor, DomainError> {
        debug!(name = %fields.name(), blood_group = %fields.blood_group(), "Adding donor");

        let donor = self.repository.insert(fields).await?;
        self.donors.write().unwrap().insert(0, donor.clone());

        Ok(donor)
    }

    /// Apply a partial update to a donor
    ///
    /// On success the matching cached entry is replaced with the store's
    /// returned row; on failure local state is untouched.
    pub async fn update(&self, id: &DonorId, update: DonorUpdate) -> Result<Donor, DomainError> {
        debug!(id = %id, "Updating donor");

        let updated = self.repository.update(id, update).await?;

        let mut donors = self.donors.write().unwrap();
        if let Some(entry) = donors.iter_mut().find(|d| d.id() == id) {
            *entry = updated.clone();
        }

        Ok(updated)
    }

    /// Delete a donor by id
    ///
    /// A delete the store did not perform (already-deleted id) surfaces a
    /// not-found error and leaves the list unchanged.
    pub async fn delete(&self, id: &DonorId) -> Result<(), DomainError> {
        debug!(id = %id, "Deleting donor");

        if !self.repository.delete(id).await? {
            return Err(DomainError::not_found(format!("Donor '{}' not found", id)));
        }

        self.donors.write().unwrap().retain(|d| d.id() != id);
        Ok(())
    }

    /// Fetch a single donor from the store
    pub async fn get(&self, id: &DonorId) -> Result<Option<Donor>, DomainError> {
        self.repository.get(id).await
    }

    /// Pure, synchronous derivation over the cached list: the full list for
    /// the `All` sentinel, else the equal-group subset, order preserved
    pub fn filter_by_group(&self, filter: BloodGroupFilter) -> Vec<Donor> {
        let donors = self.donors.read().unwrap();

        match filter {
            BloodGroupFilter::All => donors.clone(),
            BloodGroupFilter::Group(group) => donors
                .iter()
                .filter(|d| d.blood_group() == group)
                .cloned()
                .collect(),
        }
    }

    /// Snapshot of the full cached list
    pub fn snapshot(&self) -> Vec<Donor> {
        self.donors.read().unwrap().clone()
    }

    /// Aggregate statistics over the full (unfiltered) cached list
    pub fn stats(&self) -> BloodGroupStats {
        let donors = self.donors.read().unwrap();
        BloodGroupStats::from_donors(&donors)
    }
}
