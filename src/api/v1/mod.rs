//! Donor registry v1 API endpoints

pub mod donors;

use axum::{routing::get, Router};

use super::state::AppState;

/// Create v1 API router
pub fn create_v1_router() -> Router<AppState> {
    Router::new()
        .route("/donors", get(donors::list_donors).post(donors::create_donor))
        .route("/donors/stats", get(donors::donor_stats))
        .route(
            "/donors/{donor_id}",
            get(donors::get_donor)
                .put(donors::update_donor)
                .delete(donors::delete_donor),
        )
}
