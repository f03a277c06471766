//! Composition root — the only module that imports concrete outbound adapters.

use std::sync::Arc;

use gemini_image::GeminiClient;
use sqlx::PgPool;

use crate::{
    adapters::outbound::{GeminiAvatarGenerator, PostgresProfileRepository, SupabaseAvatarStorage},
    config::Settings,
    domain::{ports::inbound::AvatarService, services::AvatarServiceImpl},
};

pub fn avatar_service(connection_pool: PgPool, config: &Settings) -> Arc<dyn AvatarService> {
    let profiles = Arc::new(PostgresProfileRepository::new(connection_pool));
    let storage = Arc::new(SupabaseAvatarStorage::new(
        config.storage.url.clone(),
        config.storage.service_role_key.clone(),
    ));
    let generator = Arc::new(GeminiAvatarGenerator::new(GeminiClient::with_model(
        config.gemini.api_key.clone(),
        config.gemini.model.clone(),
    )));

    Arc::new(AvatarServiceImpl::new(profiles, storage, generator))
}
