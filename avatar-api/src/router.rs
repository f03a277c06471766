use axum::{
    http::{header, Method},
    routing::get,
    Router,
};
use sqlx::PgPool;
use tower_http::{
    cors::{Any, CorsLayer},
    trace::{DefaultMakeSpan, TraceLayer},
};

use crate::{
    app_state::AppState,
    config::{Environment, Settings},
    factory, routes,
};

pub fn create(connection_pool: PgPool, config: Settings, environment: Environment) -> Router<()> {
    let avatar_service = factory::avatar_service(connection_pool, &config);
    let app_state = AppState::new(avatar_service, environment);

    // The endpoint is called cross-origin from the manual test page, so any
    // origin may POST.
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods([Method::POST, Method::OPTIONS])
        .allow_headers([header::CONTENT_TYPE]);

    Router::new()
        .route("/", get(|| async { "avatar-api is running" }))
        .nest("/api", routes::avatars::router())
        .with_state(app_state)
        .layer(cors)
        .layer(TraceLayer::new_for_http().make_span_with(DefaultMakeSpan::default()))
}
