use async_trait::async_trait;

use crate::domain::{models::UploadedImage, AvatarError};

#[async_trait]
pub trait AvatarGenerator: Send + Sync + 'static {
    /// Transform the uploaded photo into avatar bytes. Pure pass-through to
    /// the generative backend; any backend failure surfaces as one generic
    /// generation error.
    async fn generate(&self, upload: &UploadedImage) -> Result<Vec<u8>, AvatarError>;
}
