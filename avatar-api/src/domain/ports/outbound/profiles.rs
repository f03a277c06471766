use async_trait::async_trait;

use crate::domain::{models::UserId, AvatarError};

#[async_trait]
pub trait ProfileRepository: Send + Sync + 'static {
    /// Whether an account row exists for `user_id`. Lookup failures read as
    /// non-existence; the caller cannot tell "store unreachable" from "no
    /// such account".
    async fn user_exists(&self, user_id: &UserId) -> bool;

    async fn set_avatar_url(&self, user_id: &UserId, avatar_url: &str)
        -> Result<(), AvatarError>;
}
