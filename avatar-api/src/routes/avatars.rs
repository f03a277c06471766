use axum::{
    extract::{DefaultBodyLimit, Multipart, State},
    routing::post,
    Json, Router,
};
use serde::Serialize;
use tracing::instrument;

use crate::{
    app_state::AppState,
    domain::{
        models::{UploadedImage, UserId},
        AvatarError,
    },
    routes::ApiError,
};

// Allow multipart overhead while keeping the actual image payload policy at 10 MiB.
const UPLOAD_BODY_LIMIT: usize = 11 * 1024 * 1024;

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/avatar", post(generate_avatar).options(preflight))
        .route_layer(DefaultBodyLimit::max(UPLOAD_BODY_LIMIT))
}

#[derive(Serialize)]
struct AvatarResponse {
    success: bool,
    avatar_image_url: String,
    user_id: UserId,
}

/// Preflight target; the CORS layer decorates the response headers.
async fn preflight() -> Json<serde_json::Value> {
    Json(serde_json::json!({}))
}

#[instrument(name = "POST /api/avatar", skip(app_state, multipart))]
async fn generate_avatar(
    State(app_state): State<AppState>,
    mut multipart: Multipart,
) -> Result<Json<AvatarResponse>, ApiError> {
    let (user_id, upload) = extract_submission(&mut multipart).await?;

    let avatar_image_url = app_state
        .avatar_service
        .generate_avatar(&user_id, upload)
        .await
        .map_err(|err| ApiError::from_avatar(err, app_state.environment))?;

    Ok(Json(AvatarResponse {
        success: true,
        avatar_image_url,
        user_id,
    }))
}

/// Pull the `user_id` text field and the `image` file field out of the
/// multipart body, validating presence and identifier shape. Field order in
/// the body does not matter; check order follows the contract: identifier
/// presence, identifier shape, then image presence.
async fn extract_submission(
    multipart: &mut Multipart,
) -> Result<(UserId, UploadedImage), ApiError> {
    let mut user_id_value: Option<String> = None;
    let mut image: Option<UploadedImage> = None;

    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|_| ApiError::bad_request("failed to parse multipart field"))?
    {
        let name = field.name().map(str::to_string);
        match name.as_deref() {
            Some("user_id") => {
                let value = field
                    .text()
                    .await
                    .map_err(|_| ApiError::bad_request("failed to read user_id field"))?;
                user_id_value = Some(value);
            }
            Some("image") => {
                // A genuine file attachment carries a filename; a plain text
                // field posted under the same name does not count.
                if field.file_name().is_none() {
                    continue;
                }

                let media_type = field.content_type().map(str::to_string).unwrap_or_default();
                let bytes = field
                    .bytes()
                    .await
                    .map_err(|_| ApiError::bad_request("failed to read image payload"))?;
                image = Some(UploadedImage::new(bytes.to_vec(), media_type));
            }
            _ => {}
        }
    }

    let user_id = match user_id_value.as_deref() {
        Some(value) if !value.is_empty() => {
            UserId::parse(value).map_err(|err| ApiError::bad_request(err.to_string()))?
        }
        _ => return Err(ApiError::bad_request(AvatarError::MissingUserId.to_string())),
    };

    let upload = image.ok_or_else(|| ApiError::bad_request(AvatarError::MissingImage.to_string()))?;

    Ok((user_id, upload))
}
