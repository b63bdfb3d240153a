// src/services/provider.rs
use async_trait::async_trait;
use thiserror::Error;

#[derive(Debug, Clone, Error)]
pub enum ProviderError {
    /// Non-success status from the provider; body text kept verbatim.
    #[error("provider returned {status}: {body}")]
    Api { status: u16, body: String },

    #[error("network error: {0}")]
    Network(String),

    #[error("malformed provider response: {0}")]
    MalformedResponse(String),
}

/// Raw upload bytes plus the MIME type the browser declared. No format or
/// size checks happen here; whatever arrived is forwarded.
#[derive(Debug, Clone)]
pub struct ImageData {
    pub mime_type: String,
    pub bytes: Vec<u8>,
}

#[derive(Debug, Clone)]
pub struct GenerationReply {
    /// Markdown text, relayed to the caller verbatim.
    pub text: String,
    /// Image reference, when the provider returns one alongside the text.
    pub image_url: Option<String>,
}

/// The two call shapes every generation backend supports. Handlers depend on
/// this trait rather than a concrete client, so tests swap in `MockProvider`.
#[async_trait]
pub trait GenerationProvider: Send + Sync {
    async fn generate_text(
        &self,
        instruction: &str,
        input: &str,
    ) -> Result<GenerationReply, ProviderError>;

    async fn generate_vision(
        &self,
        instruction: &str,
        image: &ImageData,
    ) -> Result<GenerationReply, ProviderError>;
}
