// src/message.rs
use serde::{Deserialize, Serialize};

#[derive(Deserialize)]
pub struct PlannerRequest {
    pub input: String,
}

#[derive(Serialize)]
pub struct PlannerResponse {
    pub reply: String,
}

#[derive(Serialize)]
pub struct LocationResponse {
    pub reply: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image_url: Option<String>,
}

/// Body accepted by `POST /trip_planner_api`. Field names match the
/// external trip-planner API, so the payload is forwarded as-is.
#[derive(Debug, Serialize, Deserialize)]
pub struct TripPlannerRequest {
    pub where_to: String,
    pub number_of_days: i64,
    pub itinerary_type: String,
    pub when_your_trip_start: String,
    pub travel_preference: String,
    pub budget: i64,
}

#[derive(Serialize)]
pub struct TripPlannerResponse {
    pub success: bool,
    pub response: serde_json::Value,
}
