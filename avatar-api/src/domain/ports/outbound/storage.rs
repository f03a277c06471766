use async_trait::async_trait;

use crate::domain::{models::UserId, AvatarError};

#[async_trait]
pub trait AvatarStorage: Send + Sync + 'static {
    /// Upsert the generated PNG under the per-identifier key and return its
    /// public retrieval URL. A repeat store for the same identifier replaces
    /// the prior blob at the same key.
    async fn store_avatar(&self, user_id: &UserId, image: Vec<u8>) -> Result<String, AvatarError>;
}
