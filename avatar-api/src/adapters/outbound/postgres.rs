use async_trait::async_trait;
use sqlx::PgPool;

use crate::domain::{models::UserId, ports::outbound::ProfileRepository, AvatarError};

/// Profile access against the externally owned `user_profiles` table. The
/// service only reads existence and writes the avatar-URL column; it owns no
/// part of the schema.
pub struct PostgresProfileRepository {
    pool: PgPool,
}

impl PostgresProfileRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl ProfileRepository for PostgresProfileRepository {
    async fn user_exists(&self, user_id: &UserId) -> bool {
        let row = sqlx::query_scalar::<_, i32>(
            r#"
            SELECT 1
            FROM user_profiles
            WHERE id = $1::uuid
            "#,
        )
        .bind(user_id.as_str())
        .fetch_optional(&self.pool)
        .await;

        match row {
            Ok(found) => found.is_some(),
            Err(err) => {
                // Lookup failures read as non-existence to the pipeline.
                tracing::warn!(%user_id, "profile existence check failed: {err}");
                false
            }
        }
    }

    async fn set_avatar_url(
        &self,
        user_id: &UserId,
        avatar_url: &str,
    ) -> Result<(), AvatarError> {
        sqlx::query(
            r#"
            UPDATE user_profiles
            SET avatar_image_url = $2
            WHERE id = $1::uuid
            "#,
        )
        .bind(user_id.as_str())
        .bind(avatar_url)
        .execute(&self.pool)
        .await
        .map_err(|err| AvatarError::Profile(err.to_string()))?;

        Ok(())
    }
}
