//! Donor domain module
//!
//! The donor record is the single entity of this service: registration
//! fields, the closed blood-group code set, validation rules, the remote
//! store contract, and the derived aggregate statistics.

mod entity;
mod repository;
mod stats;
mod validation;

pub use entity::{BloodGroup, BloodGroupFilter, Donor, DonorId, DonorUpdate, NewDonor};
pub use repository::DonorRepository;
pub use stats::BloodGroupStats;
pub use validation::{
    validate_donor_age, validate_donor_name, validate_donor_phone, DonorValidationError,
    MAX_DONOR_AGE, MIN_DONOR_AGE,
};
