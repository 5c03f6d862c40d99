//! Application state for shared services

use std::sync::Arc;

use crate::infrastructure::donor::DonorCollection;

/// Application state shared across request handlers
#[derive(Clone)]
pub struct AppState {
    pub donors: Arc<DonorCollection>,
}

impl AppState {
    /// Create new application state
    pub fn new(donors: Arc<DonorCollection>) -> Self {
        Self { donors }
    }
}
