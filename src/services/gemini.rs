// src/services/gemini.rs
use async_trait::async_trait;
use base64::Engine as _;
use base64::engine::general_purpose::STANDARD as BASE64;
use serde::{Deserialize, Serialize};

use super::provider::{GenerationProvider, GenerationReply, ImageData, ProviderError};
use crate::config::Config;

const GEMINI_API_BASE: &str = "https://generativelanguage.googleapis.com/v1beta";

/// Client for the generative-language `generateContent` REST API. One call
/// per request, no retries; failures are returned to the caller as-is.
pub struct GeminiClient {
    http: reqwest::Client,
    api_key: String,
    text_model: String,
    vision_model: String,
}

impl GeminiClient {
    pub fn new(config: &Config) -> Result<Self, ProviderError> {
        let http = reqwest::Client::builder()
            .timeout(config.request_timeout)
            .build()
            .map_err(|e| ProviderError::Network(e.to_string()))?;

        Ok(Self {
            http,
            api_key: config.google_api_key.clone(),
            text_model: config.text_model.clone(),
            vision_model: config.vision_model.clone(),
        })
    }

    fn api_url(&self, model: &str) -> String {
        format!(
            "{}/models/{}:generateContent?key={}",
            GEMINI_API_BASE, model, self.api_key
        )
    }

    async fn generate(
        &self,
        model: &str,
        parts: Vec<ContentPart>,
    ) -> Result<GenerationReply, ProviderError> {
        let request = GenerateContentRequest {
            contents: vec![Content {
                role: Some("user".to_string()),
                parts,
            }],
        };

        tracing::debug!(model, "sending generateContent request");

        let response = self
            .http
            .post(self.api_url(model))
            .json(&request)
            .send()
            .await
            .map_err(|e| ProviderError::Network(e.to_string()))?;

        if !response.status().is_success() {
            let status = response.status().as_u16();
            let body = response.text().await.unwrap_or_default();
            return Err(ProviderError::Api { status, body });
        }

        let api_response: GenerateContentResponse = response
            .json()
            .await
            .map_err(|e| ProviderError::MalformedResponse(e.to_string()))?;

        let candidate = api_response
            .candidates
            .into_iter()
            .next()
            .ok_or_else(|| ProviderError::MalformedResponse("no candidates".to_string()))?;

        let mut text = None;
        let mut image_url = None;
        for part in candidate.content.parts {
            match part {
                ContentPart::Text { text: t } if text.is_none() => text = Some(t),
                ContentPart::FileData { file_data } if image_url.is_none() => {
                    image_url = Some(file_data.file_uri)
                }
                _ => {}
            }
        }

        let text =
            text.ok_or_else(|| ProviderError::MalformedResponse("no text part".to_string()))?;

        Ok(GenerationReply { text, image_url })
    }
}

#[async_trait]
impl GenerationProvider for GeminiClient {
    async fn generate_text(
        &self,
        instruction: &str,
        input: &str,
    ) -> Result<GenerationReply, ProviderError> {
        let parts = vec![
            ContentPart::Text {
                text: instruction.to_string(),
            },
            ContentPart::Text {
                text: input.to_string(),
            },
        ];
        self.generate(&self.text_model, parts).await
    }

    async fn generate_vision(
        &self,
        instruction: &str,
        image: &ImageData,
    ) -> Result<GenerationReply, ProviderError> {
        // Image first, instruction after, matching the text+image call order
        // the API documents for single-image prompts.
        let parts = vec![
            ContentPart::InlineData {
                inline_data: InlineData {
                    mime_type: image.mime_type.clone(),
                    data: BASE64.encode(&image.bytes),
                },
            },
            ContentPart::Text {
                text: instruction.to_string(),
            },
        ];
        self.generate(&self.vision_model, parts).await
    }
}

// ============================================================================
// Wire types for the generateContent API
// ============================================================================

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct GenerateContentRequest {
    contents: Vec<Content>,
}

#[derive(Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
struct Content {
    #[serde(skip_serializing_if = "Option::is_none")]
    role: Option<String>,
    parts: Vec<ContentPart>,
}

#[derive(Debug, Serialize, Deserialize)]
#[serde(untagged)]
enum ContentPart {
    Text {
        text: String,
    },
    InlineData {
        #[serde(alias = "inlineData")]
        inline_data: InlineData,
    },
    FileData {
        #[serde(rename = "fileData", alias = "file_data")]
        file_data: FileData,
    },
}

#[derive(Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
struct InlineData {
    mime_type: String,
    data: String,
}

#[derive(Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
struct FileData {
    file_uri: String,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct GenerateContentResponse {
    #[serde(default)]
    candidates: Vec<Candidate>,
}

#[derive(Debug, Deserialize)]
struct Candidate {
    content: Content,
}
