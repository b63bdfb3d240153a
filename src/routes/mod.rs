// src/routes/mod.rs
pub mod planner;
pub mod trip_api;

use axum::{
    Router,
    routing::{get, post},
};
use tower_http::services::ServeDir;
use tower_http::trace::TraceLayer;

use crate::state::SharedState;
use planner::{hotels_handler, itinerary_handler, location_handler, weather_handler};
use trip_api::trip_planner_handler;

pub fn create_router() -> Router<SharedState> {
    let planner_routes = Router::new()
        .route("/location", post(location_handler))
        .route("/itinerary", post(itinerary_handler))
        .route("/weather", post(weather_handler))
        .route("/hotels", post(hotels_handler));

    Router::new()
        .nest("/api", planner_routes)
        .route("/trip_planner_api", post(trip_planner_handler))
        .route("/health", get(|| async { "OK" }))
        .fallback_service(ServeDir::new("public"))
        .layer(TraceLayer::new_for_http())
}
