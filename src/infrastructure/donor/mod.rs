//! Donor infrastructure implementations

mod collection;
mod memory;
pub mod migrations;
mod postgres;

pub use collection::DonorCollection;
pub use memory::InMemoryDonorRepository;
pub use postgres::PostgresDonorRepository;
