//! Donor CRUD and statistics endpoints

use axum::{
    extract::{Path, Query, State},
    Json,
};
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::api::state::AppState;
use crate::api::types::ApiError;
use crate::domain::donor::{
    BloodGroupFilter, BloodGroupStats, Donor, DonorId, DonorUpdate, NewDonor,
};

/// Request to register a new donor
#[derive(Debug, Clone, Deserialize)]
pub struct CreateDonorRequest {
    pub name: String,
    pub age: u8,
    pub blood_group: String,
    pub phone: String,
}

/// Request to update a donor; absent fields are left unchanged
#[derive(Debug, Clone, Default, Deserialize)]
pub struct UpdateDonorRequest {
    pub name: Option<String>,
    pub age: Option<u8>,
    pub blood_group: Option<String>,
    pub phone: Option<String>,
}

/// Query parameters for listing donors
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ListDonorsQuery {
    /// A blood group code, or "all" (the default) for no filter
    pub blood_group: Option<String>,
}

/// Donor response with the record-table display formatting
#[derive(Debug, Clone, Serialize)]
pub struct DonorResponse {
    pub id: String,
    /// Truncated, upper-cased id fragment as shown in the record table
    pub short_id: String,
    pub name: String,
    pub age: u8,
    /// Pluralized age string as shown in the record table
    pub age_display: String,
    pub blood_group: String,
    pub phone: String,
    pub created_at: String,
}

impl From<&Donor> for DonorResponse {
    fn from(donor: &Donor) -> Self {
        Self {
            id: donor.id().to_string(),
            short_id: short_id(donor.id().as_str()),
            name: donor.name().to_string(),
            age: donor.age(),
            age_display: format!("{} yrs", donor.age()),
            blood_group: donor.blood_group().to_string(),
            phone: donor.phone().to_string(),
            created_at: donor.created_at().to_rfc3339(),
        }
    }
}

fn short_id(id: &str) -> String {
    let fragment: String = id.chars().take(6).collect();
    format!("#{}", fragment.to_uppercase())
}

/// List donors response
#[derive(Debug, Clone, Serialize)]
pub struct ListDonorsResponse {
    pub donors: Vec<DonorResponse>,
    pub total: usize,
}

/// Per-group entry of the stats response, in enumeration order
#[derive(Debug, Clone, Serialize)]
pub struct GroupCount {
    pub blood_group: String,
    pub count: usize,
}

/// Aggregate statistics response
#[derive(Debug, Clone, Serialize)]
pub struct StatsResponse {
    pub total_donors: usize,
    /// Number of blood groups with at least one donor
    pub blood_types: usize,
    /// Most common group, "-" when the registry is empty
    pub most_common: String,
    pub counts: Vec<GroupCount>,
}

impl From<&BloodGroupStats> for StatsResponse {
    fn from(stats: &BloodGroupStats) -> Self {
        Self {
            total_donors: stats.total(),
            blood_types: stats.groups_represented(),
            most_common: stats
                .most_common()
                .map(|g| g.to_string())
                .unwrap_or_else(|| "-".to_string()),
            counts: stats
                .counts()
                .map(|(group, count)| GroupCount {
                    blood_group: group.to_string(),
                    count,
                })
                .collect(),
        }
    }
}

fn parse_filter(query: &ListDonorsQuery) -> Result<BloodGroupFilter, ApiError> {
    match query.blood_group.as_deref() {
        None => Ok(BloodGroupFilter::All),
        Some(value) => value
            .parse()
            .map_err(|_| {
                ApiError::bad_request(format!("Unknown blood group '{}'", value))
                    .with_param("blood_group")
            }),
    }
}

fn parse_donor_id(id: &str) -> Result<DonorId, ApiError> {
    DonorId::new(id).map_err(ApiError::from)
}

/// GET /v1/donors
pub async fn list_donors(
    State(state): State<AppState>,
    Query(query): Query<ListDonorsQuery>,
) -> Result<Json<ListDonorsResponse>, ApiError> {
    let filter = parse_filter(&query)?;
    debug!(filter = %filter, "Listing donors");

    let donors = state.donors.filter_by_group(filter);
    let donor_responses: Vec<DonorResponse> = donors.iter().map(DonorResponse::from).collect();
    let total = donor_responses.len();

    Ok(Json(ListDonorsResponse {
        donors: donor_responses,
        total,
    }))
}

/// POST /v1/donors
pub async fn create_donor(
    State(state): State<AppState>,
    Json(request): Json<CreateDonorRequest>,
) -> Result<Json<DonorResponse>, ApiError> {
    debug!(name = %request.name, blood_group = %request.blood_group, "Registering donor");

    let blood_group = request.blood_group.parse().map_err(|_| {
        ApiError::bad_request(format!("Unknown blood group '{}'", request.blood_group))
            .with_param("blood_group")
    })?;

    let fields = NewDonor::new(request.name, request.age, blood_group, request.phone)
        .map_err(|e| ApiError::bad_request(e.to_string()))?;

    let donor = state.donors.add(fields).await.map_err(ApiError::from)?;

    Ok(Json(DonorResponse::from(&donor)))
}

/// GET /v1/donors/{donor_id}
pub async fn get_donor(
    State(state): State<AppState>,
    Path(donor_id): Path<String>,
) -> Result<Json<DonorResponse>, ApiError> {
    let id = parse_donor_id(&donor_id)?;

    let donor = state
        .donors
        .get(&id)
        .await
        .map_err(ApiError::from)?
        .ok_or_else(|| ApiError::not_found(format!("Donor '{}' not found", donor_id)))?;

    Ok(Json(DonorResponse::from(&donor)))
}

/// PUT /v1/donors/{donor_id}
pub async fn update_donor(
    State(state): State<AppState>,
    Path(donor_id): Path<String>,
    Json(request): Json<UpdateDonorRequest>,
) -> Result<Json<DonorResponse>, ApiError> {
    debug!(donor_id = %donor_id, "Updating donor");

    let id = parse_donor_id(&donor_id)?;

    let blood_group = match request.blood_group {
        Some(value) => Some(value.parse().map_err(|_| {
            ApiError::bad_request(format!("Unknown blood group '{}'", value))
                .with_param("blood_group")
        })?),
        None => None,
    };

    let update = DonorUpdate {
        name: request.name,
        age: request.age,
        blood_group,
        phone: request.phone,
    }
    .validate()
    .map_err(|e| ApiError::bad_request(e.to_string()))?;

    let donor = state.donors.update(&id, update).await.map_err(ApiError::from)?;

    Ok(Json(DonorResponse::from(&donor)))
}

/// DELETE /v1/donors/{donor_id}
pub async fn delete_donor(
    State(state): State<AppState>,
    Path(donor_id): Path<String>,
) -> Result<Json<serde_json::Value>, ApiError> {
    debug!(donor_id = %donor_id, "Deleting donor");

    let id = parse_donor_id(&donor_id)?;
    state.donors.delete(&id).await.map_err(ApiError::from)?;

    Ok(Json(serde_json::json!({
        "deleted": true,
        "id": donor_id
    })))
}

/// GET /v1/donors/stats
pub async fn donor_stats(State(state): State<AppState>) -> Result<Json<StatsResponse>, ApiError> {
    let stats = state.donors.stats();
    Ok(Json(StatsResponse::from(&stats)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::donor::BloodGroup;
    use chrono::Utc;

    fn donor(id: &str, group: BloodGroup) -> Donor {
        Donor::new(
            DonorId::new(id).unwrap(),
            NewDonor::new("John Smith", 28, group, "555-0101").unwrap(),
            Utc::now(),
        )
    }

    #[test]
    fn test_create_donor_request_deserialization() {
        let json = r#"{
            "name": "John Smith",
            "age": 28,
            "blood_group": "O+",
            "phone": "555-0101"
        }"#;

        let request: CreateDonorRequest = serde_json::from_str(json).unwrap();
        assert_eq!(request.name, "John Smith");
        assert_eq!(request.age, 28);
        assert_eq!(request.blood_group, "O+");
        assert_eq!(request.phone, "555-0101");
    }

    #[test]
    fn test_update_donor_request_partial() {
        let json = r#"{ "phone": "555-9999" }"#;

        let request: UpdateDonorRequest = serde_json::from_str(json).unwrap();
        assert_eq!(request.phone, Some("555-9999".to_string()));
        assert!(request.name.is_none());
        assert!(request.age.is_none());
        assert!(request.blood_group.is_none());
    }

    #[test]
    fn test_update_donor_request_empty() {
        let request: UpdateDonorRequest = serde_json::from_str("{}").unwrap();
        assert!(request.name.is_none());
        assert!(request.age.is_none());
        assert!(request.blood_group.is_none());
        assert!(request.phone.is_none());
    }

    #[test]
    fn test_short_id_formatting() {
        assert_eq!(short_id("abc123def"), "#ABC123");
        assert_eq!(short_id("ab"), "#AB");
    }

    #[test]
    fn test_donor_response_from() {
        let donor = donor("abc123def", BloodGroup::OPositive);
        let response = DonorResponse::from(&donor);

        assert_eq!(response.id, "abc123def");
        assert_eq!(response.short_id, "#ABC123");
        assert_eq!(response.name, "John Smith");
        assert_eq!(response.age_display, "28 yrs");
        assert_eq!(response.blood_group, "O+");
    }

    #[test]
    fn test_parse_filter() {
        let all = ListDonorsQuery { blood_group: None };
        assert_eq!(parse_filter(&all).unwrap(), BloodGroupFilter::All);

        let sentinel = ListDonorsQuery {
            blood_group: Some("all".to_string()),
        };
        assert_eq!(parse_filter(&sentinel).unwrap(), BloodGroupFilter::All);

        let group = ListDonorsQuery {
            blood_group: Some("AB-".to_string()),
        };
        assert_eq!(
            parse_filter(&group).unwrap(),
            BloodGroupFilter::Group(BloodGroup::AbNegative)
        );

        let bad = ListDonorsQuery {
            blood_group: Some("Z+".to_string()),
        };
        assert!(parse_filter(&bad).is_err());
    }

    #[test]
    fn test_stats_response_empty_registry_placeholder() {
        let stats = BloodGroupStats::from_donors(&[]);
        let response = StatsResponse::from(&stats);

        assert_eq!(response.total_donors, 0);
        assert_eq!(response.blood_types, 0);
        assert_eq!(response.most_common, "-");
        assert_eq!(response.counts.len(), 8);
    }

    #[test]
    fn test_stats_response_counts_in_order() {
        let donors = vec![donor("d-1", BloodGroup::OPositive)];
        let stats = BloodGroupStats::from_donors(&donors);
        let response = StatsResponse::from(&stats);

        let codes: Vec<&str> = response.counts.iter().map(|c| c.blood_group.as_str()).collect();
        assert_eq!(codes, ["A+", "A-", "B+", "B-", "AB+", "AB-", "O+", "O-"]);
        assert_eq!(response.counts[6].count, 1);
        assert_eq!(response.most_common, "O+");
    }

    #[test]
    fn test_list_donors_response_serialization() {
        let donor = donor("d-1", BloodGroup::BPositive);
        let response = ListDonorsResponse {
            donors: vec![DonorResponse::from(&donor)],
            total: 1,
        };

        let json = serde_json::to_string(&response).unwrap();
        assert!(json.contains("\"total\":1"));
        assert!(json.contains("\"blood_group\":\"B+\""));
        assert!(json.contains("\"age_display\":\"28 yrs\""));
    }
}
