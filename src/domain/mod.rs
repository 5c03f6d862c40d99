//! Domain layer - Core business logic and entities

pub mod donor;
pub mod error;

pub use donor::{
    BloodGroup, BloodGroupFilter, BloodGroupStats, Donor, DonorId, DonorRepository, DonorUpdate,
    DonorValidationError, NewDonor,
};
pub use error::DomainError;
