use axum::{
    extract::{Path, State},
    Extension, Json,
};
use serde_json::{json, Value};
use sqlx::SqlitePool;
use tracing::warn;

use crate::error::AppResult;
use crate::services::suggestion::{self, Suggestion};
use crate::web::middleware::auth::AuthenticatedUser;

pub async fn get_friend_suggestions_handler(
    Extension(auth_user): Extension<AuthenticatedUser>,
    State(pool): State<SqlitePool>,
) -> AppResult<Json<Vec<Suggestion>>> {
    let suggestions = suggestion::get_suggestions(&pool, &auth_user.id)
        .await
        .inspect_err(|e| warn!(user_id = %auth_user.id, error = %e, "friend suggestions failed"))?;
    Ok(Json(suggestions))
}

pub async fn remove_friend_suggestion_handler(
    Extension(auth_user): Extension<AuthenticatedUser>,
    Path(user_id): Path<String>,
    State(pool): State<SqlitePool>,
) -> AppResult<Json<Value>> {
    suggestion::dismiss_suggestion(&pool, &auth_user.id, &user_id).await?;
    Ok(Json(json!({ "success": true })))
}
