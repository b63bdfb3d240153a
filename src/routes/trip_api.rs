use axum::Json;
use axum::extract::State;
use axum::http::StatusCode;

use crate::error::AppError;
use crate::message::{TripPlannerRequest, TripPlannerResponse};
use crate::services::provider::ProviderError;
use crate::state::SharedState;

/// Pass-through trip planner. Validates the body, attaches the bearer
/// credential, forwards the fields verbatim to the configured external API,
/// and relays whatever comes back. No retries, no translation.
pub async fn trip_planner_handler(
    State(state): State<SharedState>,
    Json(payload): Json<TripPlannerRequest>,
) -> Result<Json<TripPlannerResponse>, AppError> {
    if payload.number_of_days <= 0 {
        return Err(AppError::BadRequest(
            "number_of_days must be greater than zero".to_string(),
        ));
    }
    if payload.budget < 0 {
        return Err(AppError::BadRequest(
            "budget cannot be negative".to_string(),
        ));
    }

    tracing::debug!(where_to = %payload.where_to, "forwarding trip planner request");

    let response = state
        .http
        .post(&state.config.trip_api_url)
        .bearer_auth(&state.config.trip_api_key)
        .json(&payload)
        .send()
        .await
        .map_err(|e| AppError::Provider(ProviderError::Network(e.to_string())))?;

    let status = response.status();
    if status == StatusCode::OK {
        let body = response
            .json::<serde_json::Value>()
            .await
            .map_err(|e| AppError::Provider(ProviderError::MalformedResponse(e.to_string())))?;
        Ok(Json(TripPlannerResponse {
            success: true,
            response: body,
        }))
    } else {
        let detail = response.text().await.unwrap_or_default();
        Err(AppError::Upstream {
            status: status.as_u16(),
            detail,
        })
    }
}
