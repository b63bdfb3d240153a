// src/config.rs
use std::env;
use std::time::Duration;

use crate::error::AppError;

const DEFAULT_TEXT_MODEL: &str = "gemini-2.0-flash";
const DEFAULT_VISION_MODEL: &str = "gemini-2.0-flash";
const DEFAULT_TIMEOUT_SECS: u64 = 60;
const DEFAULT_BIND_ADDR: &str = "0.0.0.0:3000";

/// Process configuration, loaded once at startup. Handlers get it through
/// `AppState` instead of reading the environment at call time, so a missing
/// credential fails the boot rather than the first request.
#[derive(Debug, Clone)]
pub struct Config {
    /// Key for the generative-language API (text + vision calls).
    pub google_api_key: String,
    /// Bearer credential attached to forwarded trip-planner requests.
    pub trip_api_key: String,
    /// External URL the trip-planner endpoint forwards to.
    pub trip_api_url: String,
    pub text_model: String,
    pub vision_model: String,
    pub request_timeout: Duration,
    pub bind_addr: String,
}

impl Config {
    pub fn from_env() -> Result<Self, AppError> {
        Self::from_lookup(|name| env::var(name).ok())
    }

    fn from_lookup(get: impl Fn(&str) -> Option<String>) -> Result<Self, AppError> {
        let timeout_secs = match get("REQUEST_TIMEOUT_SECS") {
            Some(raw) => raw
                .parse()
                .map_err(|_| AppError::Config(format!("REQUEST_TIMEOUT_SECS is not a number: {raw}")))?,
            None => DEFAULT_TIMEOUT_SECS,
        };

        Ok(Self {
            google_api_key: require(&get, "GOOGLE_API_KEY")?,
            trip_api_key: require(&get, "GEMINI_API_KEY")?,
            trip_api_url: require(&get, "TRIP_PLANNER_API_URL")?,
            text_model: get("PLANNER_TEXT_MODEL").unwrap_or_else(|| DEFAULT_TEXT_MODEL.to_string()),
            vision_model: get("PLANNER_VISION_MODEL")
                .unwrap_or_else(|| DEFAULT_VISION_MODEL.to_string()),
            request_timeout: Duration::from_secs(timeout_secs),
            bind_addr: get("BIND_ADDR").unwrap_or_else(|| DEFAULT_BIND_ADDR.to_string()),
        })
    }
}

fn require(get: &impl Fn(&str) -> Option<String>, name: &str) -> Result<String, AppError> {
    match get(name) {
        Some(value) if !value.trim().is_empty() => Ok(value),
        _ => Err(AppError::Config(format!("{name} is not set"))),
    }
}
