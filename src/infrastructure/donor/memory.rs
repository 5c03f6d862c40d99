//! In-memory donor repository
//!
//! Used when no database is configured, and by tests. Ids are assigned as
//! UUID v4 strings; creation timestamps are taken at insert time.

use std::sync::RwLock;

use async_trait::async_trait;
use chrono::Utc;
use uuid::Uuid;

use crate::domain::donor::{Donor, DonorId, DonorRepository, DonorUpdate, NewDonor};
use crate::domain::DomainError;

/// In-memory implementation of DonorRepository
#[derive(Debug, Default)]
pub struct InMemoryDonorRepository {
    donors: RwLock<Vec<Donor>>,
}

impl InMemoryDonorRepository {
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a repository pre-populated with the given donors
    pub fn with_donors(donors: Vec<Donor>) -> Self {
        Self {
            donors: RwLock::new(donors),
        }
    }
}

#[async_trait]
impl DonorRepository for InMemoryDonorRepository {
    async fn list(&self) -> Result<Vec<Donor>, DomainError> {
        let donors = self.donors.read().unwrap();

        // Newest first; rows sharing a timestamp order latest-inserted first
        let mut indexed: Vec<(usize, &Donor)> = donors.iter().enumerate().collect();
        indexed.sort_by(|a, b| {
            b.1.created_at()
                .cmp(&a.1.created_at())
                .then(b.0.cmp(&a.0))
        });

        Ok(indexed.into_iter().map(|(_, d)| d.clone()).collect())
    }

    async fn get(&self, id: &DonorId) -> Result<Option<Donor>, DomainError> {
        let donors = self.donors.read().unwrap();
        Ok(donors.iter().find(|d| d.id() == id).cloned())
    }

    async fn insert(&self, fields: NewDonor) -> Result<Donor, DomainError> {
        let id = DonorId::new(Uuid::new_v4().to_string())
            .map_err(|e| DomainError::internal(format!("Generated invalid donor ID: {}", e)))?;
        let donor = Donor::new(id, fields, Utc::now());

        let mut donors = self.donors.write().unwrap();
        donors.push(donor.clone());

        Ok(donor)
    }

    async fn update(&self, id: &DonorId, update: DonorUpdate) -> Result<Donor, DomainError> {
        let mut donors = self.donors.write().unwrap();

        let donor = donors
            .iter_mut()
            .find(|d| d.id() == id)
            .ok_or_else(|| DomainError::not_found(format!("Donor '{}' not found", id)))?;

        donor.apply_update(update);
        Ok(donor.clone())
    }

    async fn delete(&self, id: &DonorId) -> Result<bool, DomainError> {
        let mut donors = self.donors.write().unwrap();
        let before = donors.len();

        donors.retain(|d| d.id() != id);
        Ok(donors.len() < before)
    }
}
