//! Donor Registry API
//!
//! A blood donor management service with:
//! - Donor CRUD with validation (age range, blood group codes)
//! - Blood group filtering and aggregate statistics
//! - PostgreSQL or in-memory storage backends

pub mod api;
pub mod cli;
pub mod config;
pub mod domain;
pub mod infrastructure;

pub use config::AppConfig;

use std::sync::Arc;

use chrono::{Duration, Utc};
use tracing::info;

use api::state::AppState;
use config::StorageBackend;
use domain::donor::{BloodGroup, Donor, DonorId, DonorRepository, NewDonor};
use infrastructure::donor::{DonorCollection, InMemoryDonorRepository, PostgresDonorRepository};

/// Create the application state with the default configuration
pub async fn create_app_state() -> anyhow::Result<AppState> {
    create_app_state_with_config(&AppConfig::default()).await
}

/// Create the application state with custom configuration
pub async fn create_app_state_with_config(config: &AppConfig) -> anyhow::Result<AppState> {
    let repository: Arc<dyn DonorRepository> = match config.storage.backend {
        StorageBackend::Postgres => {
            let database_url = std::env::var("DATABASE_URL")
                .map_err(|_| anyhow::anyhow!("DATABASE_URL environment variable is required"))?;

            info!("Connecting to PostgreSQL...");
            let pg_pool = sqlx::PgPool::connect(&database_url)
                .await
                .map_err(|e| anyhow::anyhow!("Failed to connect to PostgreSQL: {}", e))?;
            info!("PostgreSQL connection established");

            infrastructure::donor::migrations::run_donor_migrations(&pg_pool)
                .await
                .map_err(|e| anyhow::anyhow!("Failed to run migrations: {}", e))?;

            Arc::new(PostgresDonorRepository::new(pg_pool))
        }
        StorageBackend::Memory => {
            info!("Using in-memory donor storage");
            Arc::new(InMemoryDonorRepository::with_donors(default_donors()))
        }
    };

    let donors = Arc::new(DonorCollection::new(repository));

    // Warm the cache so the first list request does not pay the load
    let loaded = donors.load().await?;
    info!("Loaded {} donors", loaded.len());

    Ok(AppState::new(donors))
}

fn seed_donor(
    id: &str,
    name: &str,
    age: u8,
    blood_group: BloodGroup,
    phone: &str,
    days_ago: i64,
) -> Donor {
    // Seed records are well-formed by construction
    let fields = NewDonor::new(name, age, blood_group, phone).unwrap();
    let donor_id = DonorId::new(id).unwrap();

    Donor::new(donor_id, fields, Utc::now() - Duration::days(days_ago))
}

fn default_donors() -> Vec<Donor> {
    vec![
        seed_donor(
            "11111111-1111-1111-1111-111111111111",
            "John Smith",
            28,
            BloodGroup::OPositive,
            "555-0101",
            3,
        ),
        seed_donor(
            "22222222-2222-2222-2222-222222222222",
            "Sarah Johnson",
            34,
            BloodGroup::ANegative,
            "555-0102",
            2,
        ),
        seed_donor(
            "33333333-3333-3333-3333-333333333333",
            "Michael Chen",
            45,
            BloodGroup::BPositive,
            "555-0103",
            1,
        ),
    ]
}
