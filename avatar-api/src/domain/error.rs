use thiserror::Error;

/// Errors that can occur while producing an avatar.
///
/// The client-facing variants carry their exact response message as the
/// display string; the downstream variants carry the underlying cause, which
/// is logged but only surfaced to clients in local runs.
#[derive(Debug, Error)]
pub enum AvatarError {
    #[error("user_id is required")]
    MissingUserId,
    #[error("Invalid user_id format. Must be a valid UUID.")]
    InvalidUserId,
    #[error("Image file is required")]
    MissingImage,
    #[error("Invalid file type. Allowed types: image/jpeg, image/jpg, image/png, image/webp")]
    UnsupportedMediaType,
    #[error("File size exceeds maximum allowed size of 10MB")]
    PayloadTooLarge,
    #[error("User not found")]
    UserNotFound,
    #[error("avatar generation failed: {0}")]
    Generation(String),
    #[error("avatar upload failed: {0}")]
    Storage(String),
    #[error("profile update failed: {0}")]
    Profile(String),
}

impl AvatarError {
    /// Downstream failures are collapsed into one 500 category at the
    /// response boundary; everything else maps to a specific client error.
    pub fn is_internal(&self) -> bool {
        matches!(
            self,
            Self::Generation(_) | Self::Storage(_) | Self::Profile(_)
        )
    }
}
