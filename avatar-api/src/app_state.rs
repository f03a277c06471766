use std::sync::Arc;

use crate::{config::Environment, domain::ports::inbound::AvatarService};

/// Shared per-request state: the composed avatar pipeline and the execution
/// environment (which decides how much error detail clients see).
#[derive(Clone)]
pub struct AppState {
    pub avatar_service: Arc<dyn AvatarService>,
    pub environment: Environment,
}

impl AppState {
    pub fn new(avatar_service: Arc<dyn AvatarService>, environment: Environment) -> Self {
        Self {
            avatar_service,
            environment,
        }
    }
}
