use base64::{engine::general_purpose::STANDARD as BASE64, Engine};
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::GenerationTask;

/// Default image-capable Gemini model.
pub const DEFAULT_MODEL: &str = "gemini-2.5-flash-image";

const DEFAULT_BASE_URL: &str = "https://generativelanguage.googleapis.com/v1beta";

/// Client for the Gemini `generateContent` REST API, specialized to
/// image-in/image-out calls.
///
/// The client is a pure pass-through: it attaches the fixed instruction
/// template of a [`GenerationTask`] to the supplied image bytes and returns
/// whatever image the backend produces. It never inspects or modifies the
/// bytes itself.
pub struct GeminiClient {
    http: reqwest::Client,
    api_key: String,
    model: String,
    base_url: String,
}

impl GeminiClient {
    pub fn new(api_key: impl Into<String>) -> Self {
        Self::with_model(api_key, DEFAULT_MODEL)
    }

    pub fn with_model(api_key: impl Into<String>, model: impl Into<String>) -> Self {
        Self {
            http: reqwest::Client::new(),
            api_key: api_key.into(),
            model: model.into(),
            base_url: DEFAULT_BASE_URL.to_string(),
        }
    }

    /// Point the client at a different endpoint (test servers).
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    /// Send `image` to the backend with the instruction template of `task`
    /// and return the generated image bytes.
    pub async fn generate_image(
        &self,
        task: GenerationTask,
        image: &[u8],
        mime_type: &str,
    ) -> Result<Vec<u8>, GeminiError> {
        let url = format!(
            "{}/models/{}:generateContent",
            self.base_url.trim_end_matches('/'),
            self.model,
        );

        let request = GenerateContentRequest {
            contents: vec![Content {
                parts: vec![
                    Part::text(task.instruction()),
                    Part::inline_data(mime_type, BASE64.encode(image)),
                ],
            }],
            generation_config: GenerationConfig {
                response_modalities: vec!["IMAGE".to_string()],
            },
        };

        tracing::debug!(model = %self.model, bytes = image.len(), "requesting image generation");

        let resp = self
            .http
            .post(&url)
            .header("x-goog-api-key", &self.api_key)
            .json(&request)
            .send()
            .await
            .map_err(|e| GeminiError::ResponseError(e.to_string()))?;

        let status = resp.status();
        if !status.is_success() {
            let body = resp.text().await.unwrap_or_default();
            return Err(GeminiError::BackendError {
                status: status.as_u16(),
                body,
            });
        }

        let response = resp.json::<GenerateContentResponse>().await.map_err(|e| {
            GeminiError::ParsingError(format!("failed to parse response as JSON: {e}"))
        })?;

        extract_image(response)
    }
}

/// Pull the first inline image out of a response, decoding its base64 payload.
fn extract_image(response: GenerateContentResponse) -> Result<Vec<u8>, GeminiError> {
    let data = response
        .candidates
        .into_iter()
        .flat_map(|candidate| candidate.content.parts)
        .find_map(|part| part.inline_data.map(|inline| inline.data))
        .ok_or(GeminiError::NoImage)?;

    BASE64
        .decode(data)
        .map_err(|e| GeminiError::ParsingError(format!("invalid base64 image payload: {e}")))
}

#[derive(Error, Debug)]
pub enum GeminiError {
    #[error("backend returned status {status}: {body}")]
    BackendError { status: u16, body: String },
    #[error("ResponseError: {0}")]
    ResponseError(String),
    #[error("ParsingError: {0}")]
    ParsingError(String),
    #[error("no image in response")]
    NoImage,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct GenerateContentRequest {
    contents: Vec<Content>,
    generation_config: GenerationConfig,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct GenerationConfig {
    response_modalities: Vec<String>,
}

#[derive(Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
struct Content {
    #[serde(default)]
    parts: Vec<Part>,
}

#[derive(Debug, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
struct Part {
    #[serde(skip_serializing_if = "Option::is_none")]
    text: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    inline_data: Option<InlineData>,
}

impl Part {
    fn text(text: impl Into<String>) -> Self {
        Self {
            text: Some(text.into()),
            ..Self::default()
        }
    }

    fn inline_data(mime_type: impl Into<String>, data: String) -> Self {
        Self {
            inline_data: Some(InlineData {
                mime_type: mime_type.into(),
                data,
            }),
            ..Self::default()
        }
    }
}

#[derive(Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
struct InlineData {
    mime_type: String,
    data: String,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct GenerateContentResponse {
    #[serde(default)]
    candidates: Vec<Candidate>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct Candidate {
    content: Content,
}
