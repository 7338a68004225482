use axum::{
    extract::{Path, State},
    Extension, Json,
};
use serde::Deserialize;
use serde_json::{json, Value};
use sqlx::SqlitePool;

use crate::error::{AppError, AppResult};
use crate::services::friendship_service::{
    self, IncomingRequestView, OutgoingRequestView, RequestAction,
};
use crate::web::middleware::auth::AuthenticatedUser;

#[derive(Debug, Deserialize)]
pub struct SendFriendRequestBody {
    pub receiver_id: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct SendFriendRequestByEmailBody {
    pub email: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct HandleFriendRequestBody {
    pub action: String, // accept|reject
}

pub async fn send_friend_request_handler(
    Extension(auth_user): Extension<AuthenticatedUser>,
    State(pool): State<SqlitePool>,
    Json(body): Json<SendFriendRequestBody>,
) -> AppResult<Json<Value>> {
    let receiver_id = body
        .receiver_id
        .as_deref()
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .ok_or_else(|| AppError::BadRequest("Receiver ID is required".into()))?;

    let request = friendship_service::send_request(&pool, &auth_user.id, receiver_id).await?;
    Ok(Json(json!({
        "success": true,
        "message": format!("Friend request sent to {}", request.receiver_name),
        "request": request,
    })))
}

pub async fn send_friend_request_by_email_handler(
    Extension(auth_user): Extension<AuthenticatedUser>,
    State(pool): State<SqlitePool>,
    Json(body): Json<SendFriendRequestByEmailBody>,
) -> AppResult<Json<Value>> {
    let email = body
        .email
        .as_deref()
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .ok_or_else(|| AppError::BadRequest("Email is required".into()))?;

    let request = friendship_service::send_request_by_email(&pool, &auth_user.id, email).await?;
    Ok(Json(json!({
        "success": true,
        "message": format!("Friend request sent to {}", request.receiver_name),
        "request": request,
    })))
}

pub async fn incoming_requests_handler(
    Extension(auth_user): Extension<AuthenticatedUser>,
    State(pool): State<SqlitePool>,
) -> AppResult<Json<Vec<IncomingRequestView>>> {
    Ok(Json(
        friendship_service::list_incoming(&pool, &auth_user.id).await?,
    ))
}

pub async fn outgoing_requests_handler(
    Extension(auth_user): Extension<AuthenticatedUser>,
    State(pool): State<SqlitePool>,
) -> AppResult<Json<Vec<OutgoingRequestView>>> {
    Ok(Json(
        friendship_service::list_outgoing(&pool, &auth_user.id).await?,
    ))
}

pub async fn handle_friend_request_handler(
    Extension(auth_user): Extension<AuthenticatedUser>,
    Path(request_id): Path<String>,
    State(pool): State<SqlitePool>,
    Json(body): Json<HandleFriendRequestBody>,
) -> AppResult<Json<Value>> {
    let action = RequestAction::parse(&body.action)?;
    friendship_service::respond(&pool, &auth_user.id, &request_id, action).await?;
    Ok(Json(json!({ "success": true })))
}

pub async fn remove_friend_handler(
    Extension(auth_user): Extension<AuthenticatedUser>,
    Path(friend_id): Path<String>,
    State(pool): State<SqlitePool>,
) -> AppResult<Json<Value>> {
    friendship_service::remove_friend(&pool, &auth_user.id, &friend_id).await?;
    Ok(Json(json!({ "success": true })))
}
