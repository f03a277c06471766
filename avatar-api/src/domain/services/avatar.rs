use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::{
    models::{UploadedImage, UserId},
    ports::{
        inbound::AvatarService,
        outbound::{AvatarGenerator, AvatarStorage, ProfileRepository},
    },
    AvatarError,
};

pub const MAX_IMAGE_SIZE: usize = 10 * 1024 * 1024;
pub const ALLOWED_MEDIA_TYPES: [&str; 4] =
    ["image/jpeg", "image/jpg", "image/png", "image/webp"];

/// The avatar pipeline: validate policy, check existence, generate, persist.
///
/// Stages run strictly in order and every failure short-circuits the rest.
/// The existence check deliberately precedes the generation call so a bogus
/// identifier never incurs backend cost. The upload and the profile update
/// are sequential and not transactional; a failed update after a successful
/// upload leaves the blob in place and the row stale.
pub struct AvatarServiceImpl<R, S, G> {
    profiles: Arc<R>,
    storage: Arc<S>,
    generator: Arc<G>,
}

impl<R, S, G> AvatarServiceImpl<R, S, G> {
    pub fn new(profiles: Arc<R>, storage: Arc<S>, generator: Arc<G>) -> Self {
        Self {
            profiles,
            storage,
            generator,
        }
    }
}

#[async_trait]
impl<R: ProfileRepository, S: AvatarStorage, G: AvatarGenerator> AvatarService
    for AvatarServiceImpl<R, S, G>
{
    async fn generate_avatar(
        &self,
        user_id: &UserId,
        upload: UploadedImage,
    ) -> Result<String, AvatarError> {
        if !ALLOWED_MEDIA_TYPES.contains(&upload.media_type.as_str()) {
            return Err(AvatarError::UnsupportedMediaType);
        }

        if upload.bytes.len() > MAX_IMAGE_SIZE {
            return Err(AvatarError::PayloadTooLarge);
        }

        if !self.profiles.user_exists(user_id).await {
            return Err(AvatarError::UserNotFound);
        }

        let generated = self.generator.generate(&upload).await?;

        let avatar_url = self.storage.store_avatar(user_id, generated).await?;
        self.profiles.set_avatar_url(user_id, &avatar_url).await?;

        tracing::info!(%user_id, %avatar_url, "avatar generated");

        Ok(avatar_url)
    }
}
