use async_trait::async_trait;

use crate::domain::{
    models::{UploadedImage, UserId},
    AvatarError,
};

#[async_trait]
pub trait AvatarService: Send + Sync + 'static {
    /// Run the full pipeline for one upload: validate the image policy,
    /// confirm the account exists, generate the avatar, persist it, and
    /// return the public URL of the stored blob.
    async fn generate_avatar(
        &self,
        user_id: &UserId,
        upload: UploadedImage,
    ) -> Result<String, AvatarError>;
}
