use async_trait::async_trait;
use reqwest::header;

use crate::domain::{models::UserId, ports::outbound::AvatarStorage, AvatarError};

const AVATAR_BUCKET: &str = "avatars";

/// Blob storage over the Supabase storage HTTP API. Uploads are upserts, so
/// regenerating an avatar replaces the prior blob at the same key.
pub struct SupabaseAvatarStorage {
    http: reqwest::Client,
    base_url: String,
    service_role_key: String,
}

impl SupabaseAvatarStorage {
    pub fn new(base_url: impl Into<String>, service_role_key: impl Into<String>) -> Self {
        Self {
            http: reqwest::Client::new(),
            base_url: base_url.into(),
            service_role_key: service_role_key.into(),
        }
    }

    fn object_path(user_id: &UserId) -> String {
        format!("{AVATAR_BUCKET}/{user_id}.png")
    }

    fn public_url(&self, object_path: &str) -> String {
        format!(
            "{}/storage/v1/object/public/{object_path}",
            self.base_url.trim_end_matches('/'),
        )
    }
}

#[async_trait]
impl AvatarStorage for SupabaseAvatarStorage {
    async fn store_avatar(&self, user_id: &UserId, image: Vec<u8>) -> Result<String, AvatarError> {
        let object_path = Self::object_path(user_id);
        let upload_url = format!(
            "{}/storage/v1/object/{object_path}",
            self.base_url.trim_end_matches('/'),
        );

        let resp = self
            .http
            .post(&upload_url)
            .bearer_auth(&self.service_role_key)
            .header("x-upsert", "true")
            .header(header::CONTENT_TYPE, "image/png")
            .body(image)
            .send()
            .await
            .map_err(|err| AvatarError::Storage(err.to_string()))?;

        let status = resp.status();
        if !status.is_success() {
            let body = resp.text().await.unwrap_or_default();
            return Err(AvatarError::Storage(format!(
                "upload of {object_path} failed with status {status}: {body}"
            )));
        }

        Ok(self.public_url(&object_path))
    }
}
