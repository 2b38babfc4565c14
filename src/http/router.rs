use crate::app_context::AppContext;
use crate::cli::Args;
use crate::http::{cors, middleware};
use crate::storage::sessions::HashMapSessionsStorage;
use crate::{giveaway, health, sessions};
use axum::extract::DefaultBodyLimit;
use axum::{
    routing::{get, post},
    Router,
};
use tower::ServiceBuilder;

pub fn new(args: &Args, app_context: AppContext<HashMapSessionsStorage>) -> Router {
    let cors_policy = cors::layer(args);
    tracing::info!("Initialized HTTP configuration.");

    let health_routes = Router::new().route("/check", get(health::handlers::healthcheck));
    let sessions_routes = Router::new()
        .route("/", post(sessions::handlers::create))
        .route("/:session-id", get(sessions::handlers::status))
        .route(
            "/:session-id/participants",
            post(sessions::handlers::upload_participants)
                .get(sessions::handlers::participants)
                .layer(DefaultBodyLimit::max(args.max_upload_bytes)),
        )
        .route("/:session-id/map", get(sessions::handlers::map_view))
        .route(
            "/:session-id/winner",
            post(sessions::handlers::draw_winner).get(sessions::handlers::winner_view),
        )
        .route(
            "/:session-id/leaderboard",
            get(sessions::handlers::leaderboard),
        )
        .route(
            "/:session-id/navigate",
            post(sessions::handlers::navigate),
        );

    Router::new()
        .nest("/health", health_routes)
        .route("/giveaway", get(giveaway::handlers::giveaway))
        .nest("/sessions", sessions_routes)
        .with_state(app_context)
        .layer(
            ServiceBuilder::new()
                .layer(axum::middleware::from_fn(middleware::request_logging))
                .layer(cors_policy),
        )
}
