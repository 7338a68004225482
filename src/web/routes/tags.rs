use axum::{extract::State, Extension, Json};
use serde::Deserialize;
use serde_json::{json, Value};
use sqlx::SqlitePool;

use crate::error::AppResult;
use crate::services::tags_service;
use crate::web::middleware::auth::AuthenticatedUser;

#[derive(Debug, Deserialize)]
pub struct UpdateTagsBody {
    #[serde(default)]
    pub tags: Vec<String>,
}

pub async fn get_tags_handler(
    Extension(auth_user): Extension<AuthenticatedUser>,
    State(pool): State<SqlitePool>,
) -> AppResult<Json<Value>> {
    let tags = tags_service::get_tags(&pool, &auth_user.id).await?;
    Ok(Json(json!({ "success": true, "tags": tags })))
}

pub async fn update_tags_handler(
    Extension(auth_user): Extension<AuthenticatedUser>,
    State(pool): State<SqlitePool>,
    Json(body): Json<UpdateTagsBody>,
) -> AppResult<Json<Value>> {
    let tags = tags_service::update_tags(&pool, &auth_user.id, body.tags).await?;
    Ok(Json(json!({ "success": true, "tags": tags })))
}
