use std::sync::Arc;

use anyhow::Context;
use tower_http::cors::CorsLayer;

use planner_backend::config::Config;
use planner_backend::routes::create_router;
use planner_backend::services::gemini::GeminiClient;
use planner_backend::state::AppState;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    tracing_subscriber::fmt().init();

    let config = Config::from_env().context("loading configuration")?;
    let provider = Arc::new(GeminiClient::new(&config)?);

    let bind_addr = config.bind_addr.clone();
    let state = Arc::new(AppState::new(config, provider)?);

    let cors = CorsLayer::very_permissive();

    let app = create_router().with_state(state).layer(cors);

    let listener = tokio::net::TcpListener::bind(&bind_addr)
        .await
        .with_context(|| format!("binding {bind_addr}"))?;

    tracing::info!("planner backend running at http://{bind_addr}");
    axum::serve(listener, app).await?;

    Ok(())
}
