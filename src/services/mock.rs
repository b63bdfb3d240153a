// src/services/mock.rs
use std::sync::atomic::{AtomicUsize, Ordering};

use async_trait::async_trait;

use super::provider::{GenerationProvider, GenerationReply, ImageData, ProviderError};

/// Canned provider used by tests in place of the real API. Counts calls so
/// tests can assert that invalid input never reaches the wire.
pub struct MockProvider {
    reply: Result<GenerationReply, ProviderError>,
    calls: AtomicUsize,
}

impl MockProvider {
    pub fn replying(text: &str, image_url: Option<&str>) -> Self {
        Self {
            reply: Ok(GenerationReply {
                text: text.to_string(),
                image_url: image_url.map(str::to_string),
            }),
            calls: AtomicUsize::new(0),
        }
    }

    pub fn failing(err: ProviderError) -> Self {
        Self {
            reply: Err(err),
            calls: AtomicUsize::new(0),
        }
    }

    pub fn call_count(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl GenerationProvider for MockProvider {
    async fn generate_text(
        &self,
        _instruction: &str,
        _input: &str,
    ) -> Result<GenerationReply, ProviderError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        self.reply.clone()
    }

    async fn generate_vision(
        &self,
        _instruction: &str,
        _image: &ImageData,
    ) -> Result<GenerationReply, ProviderError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        self.reply.clone()
    }
}
