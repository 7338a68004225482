pub mod middleware;
pub mod routes;

use axum::{
    middleware as axum_middleware,
    routing::{get, post},
    Json, Router,
};
use http::header::{HeaderValue, CACHE_CONTROL};
use serde_json::json;
use sqlx::SqlitePool;
use tower_http::catch_panic::CatchPanicLayer;
use tower_http::set_header::SetResponseHeaderLayer;
use tower_http::trace::TraceLayer;

use crate::web::middleware::auth as auth_middleware;
use crate::web::routes::{friends, suggestions, tags};

pub fn router(pool: SqlitePool) -> Router {
    let protected_routes = Router::new()
        .route(
            "/get_friend_suggestions",
            get(suggestions::get_friend_suggestions_handler),
        )
        .route(
            "/remove_friend_suggestion/:user_id",
            post(suggestions::remove_friend_suggestion_handler),
        )
        .route("/get_tags", get(tags::get_tags_handler))
        .route("/update_tags", post(tags::update_tags_handler))
        .route(
            "/send_friend_request",
            post(friends::send_friend_request_by_email_handler),
        )
        .route(
            "/send_friend_request_by_id",
            post(friends::send_friend_request_handler),
        )
        .route("/get_friend_requests", get(friends::incoming_requests_handler))
        .route(
            "/get_outgoing_requests",
            get(friends::outgoing_requests_handler),
        )
        .route(
            "/handle_friend_request/:request_id",
            post(friends::handle_friend_request_handler),
        )
        .route("/remove_friend/:friend_id", post(friends::remove_friend_handler))
        .layer(axum_middleware::from_fn(auth_middleware::require_auth));

    Router::new()
        .route("/health", get(|| async { Json(json!({ "status": "ok" })) }))
        .merge(protected_routes)
        .layer(SetResponseHeaderLayer::if_not_present(
            CACHE_CONTROL,
            HeaderValue::from_static("no-store"),
        ))
        .layer(CatchPanicLayer::new())
        .layer(TraceLayer::new_for_http())
        .with_state(pool)
}
