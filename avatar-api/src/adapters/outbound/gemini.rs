use async_trait::async_trait;
use gemini_image::{GeminiClient, GenerationTask};

use crate::domain::{models::UploadedImage, ports::outbound::AvatarGenerator, AvatarError};

/// Avatar generation backed by the Gemini image API.
pub struct GeminiAvatarGenerator {
    client: GeminiClient,
}

impl GeminiAvatarGenerator {
    pub fn new(client: GeminiClient) -> Self {
        Self { client }
    }
}

#[async_trait]
impl AvatarGenerator for GeminiAvatarGenerator {
    async fn generate(&self, upload: &UploadedImage) -> Result<Vec<u8>, AvatarError> {
        self.client
            .generate_image(
                GenerationTask::AvatarStandardization,
                &upload.bytes,
                &upload.media_type,
            )
            .await
            .map_err(|err| AvatarError::Generation(err.to_string()))
    }
}
