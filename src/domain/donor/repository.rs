//! Donor repository trait

use async_trait::async_trait;

use super::entity::{Donor, DonorId, DonorUpdate, NewDonor};
use crate::domain::DomainError;

/// Repository for durable donor records
///
/// The store assigns ids and creation timestamps. Every operation is a
/// single-attempt request against the store; there is no retry logic and no
/// optimistic concurrency control.
#[async_trait]
pub trait DonorRepository: Send + Sync + std::fmt::Debug {
    /// List all donors, ordered by creation time descending
    async fn list(&self) -> Result<Vec<Donor>, DomainError>;

    /// Get a donor by ID
    async fn get(&self, id: &DonorId) -> Result<Option<Donor>, DomainError>;

    /// Insert a new donor, returning the stored row with its assigned id
    /// and creation timestamp
    async fn insert(&self, fields: NewDonor) -> Result<Donor, DomainError>;

    /// Apply a partial update keyed by id, returning the updated row
    async fn update(&self, id: &DonorId, update: DonorUpdate) -> Result<Donor, DomainError>;

    /// Delete a donor by ID; returns whether a row was removed
    async fn delete(&self, id: &DonorId) -> Result<bool, DomainError>;
}
