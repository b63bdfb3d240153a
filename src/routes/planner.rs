use axum::Json;
use axum::extract::{Multipart, State};

use crate::error::AppError;
use crate::message::{LocationResponse, PlannerRequest, PlannerResponse};
use crate::prompts::{GenerationRequest, Section, UserInput};
use crate::services::provider::{GenerationReply, ImageData};
use crate::state::SharedState;

/// Location finder: multipart image upload, answered with a place summary
/// and, when the provider returns one, an image reference.
pub async fn location_handler(
    State(state): State<SharedState>,
    mut multipart: Multipart,
) -> Result<Json<LocationResponse>, AppError> {
    let mut image = None;

    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| AppError::BadRequest(e.to_string()))?
    {
        if field.name() != Some("image") {
            continue;
        }
        let mime_type = field
            .content_type()
            .unwrap_or("application/octet-stream")
            .to_string();
        let bytes = field
            .bytes()
            .await
            .map_err(|e| AppError::BadRequest(e.to_string()))?;
        image = Some(ImageData {
            mime_type,
            bytes: bytes.to_vec(),
        });
    }

    let request = GenerationRequest::image(Section::LocationFinder, image)?;
    let reply = generate(&state, request).await?;

    Ok(Json(LocationResponse {
        reply: reply.text,
        image_url: reply.image_url,
    }))
}

pub async fn itinerary_handler(
    State(state): State<SharedState>,
    Json(payload): Json<PlannerRequest>,
) -> Result<Json<PlannerResponse>, AppError> {
    run_text(state, Section::TripPlanner, payload).await
}

pub async fn weather_handler(
    State(state): State<SharedState>,
    Json(payload): Json<PlannerRequest>,
) -> Result<Json<PlannerResponse>, AppError> {
    run_text(state, Section::WeatherForecast, payload).await
}

pub async fn hotels_handler(
    State(state): State<SharedState>,
    Json(payload): Json<PlannerRequest>,
) -> Result<Json<PlannerResponse>, AppError> {
    run_text(state, Section::HotelFinder, payload).await
}

async fn run_text(
    state: SharedState,
    section: Section,
    payload: PlannerRequest,
) -> Result<Json<PlannerResponse>, AppError> {
    let request = GenerationRequest::text(section, &payload.input)?;
    let reply = generate(&state, request).await?;
    Ok(Json(PlannerResponse { reply: reply.text }))
}

/// One outbound provider call per request; the reply text is relayed to the
/// caller untouched.
async fn generate(
    state: &SharedState,
    request: GenerationRequest,
) -> Result<GenerationReply, AppError> {
    let instruction = request.section.template();
    let reply = match &request.input {
        UserInput::Text(text) => state.provider.generate_text(instruction, text).await?,
        UserInput::Image(image) => state.provider.generate_vision(instruction, image).await?,
    };
    Ok(reply)
}
