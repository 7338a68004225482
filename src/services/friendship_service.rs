use serde::Serialize;
use sqlx::SqlitePool;
use tracing::info;
use uuid::Uuid;

use crate::database::{friend_request_repo, friends_repo, user_repo};
use crate::error::{AppError, AppResult};
use crate::models::PendingRequestRow;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RequestAction {
    Accept,
    Reject,
}

impl RequestAction {
    pub fn parse(raw: &str) -> AppResult<Self> {
        match raw.trim() {
            "accept" => Ok(Self::Accept),
            "reject" => Ok(Self::Reject),
            _ => Err(AppError::BadRequest("Invalid action".into())),
        }
    }

    fn resolved_status(self) -> &'static str {
        match self {
            Self::Accept => "accepted",
            Self::Reject => "rejected",
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct SentRequestView {
    pub id: String,
    pub receiver_id: String,
    pub receiver_name: String,
    pub status: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct IncomingRequestView {
    pub id: String,
    pub sender_id: String,
    pub sender_name: String,
    pub sender_email: String,
    pub timestamp: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct OutgoingRequestView {
    pub id: String,
    pub receiver_id: String,
    pub receiver_name: String,
    pub receiver_email: String,
    pub timestamp: String,
}

impl From<PendingRequestRow> for IncomingRequestView {
    fn from(row: PendingRequestRow) -> Self {
        Self {
            id: row.request_id,
            sender_id: row.counterpart_id,
            sender_name: row.counterpart_name,
            sender_email: row.counterpart_email,
            timestamp: format_timestamp(&row.created_at),
        }
    }
}

impl From<PendingRequestRow> for OutgoingRequestView {
    fn from(row: PendingRequestRow) -> Self {
        Self {
            id: row.request_id,
            receiver_id: row.counterpart_id,
            receiver_name: row.counterpart_name,
            receiver_email: row.counterpart_email,
            timestamp: format_timestamp(&row.created_at),
        }
    }
}

pub async fn send_request(
    pool: &SqlitePool,
    sender_id: &str,
    receiver_id: &str,
) -> AppResult<SentRequestView> {
    if user_repo::load_user(pool, sender_id).await?.is_none() {
        return Err(AppError::NotFound("User".into()));
    }
    let Some(receiver) = user_repo::load_user(pool, receiver_id).await? else {
        return Err(AppError::NotFound("User".into()));
    };

    if receiver.user_id == sender_id {
        return Err(AppError::BadRequest(
            "Cannot send friend request to yourself".into(),
        ));
    }
    if friends_repo::is_friend(pool, sender_id, receiver_id).await? {
        return Err(AppError::BadRequest(format!(
            "You are already friends with {}",
            receiver.name
        )));
    }
    if friend_request_repo::has_pending_from(pool, sender_id, receiver_id).await? {
        return Err(already_sent(&receiver.name));
    }

    let id = Uuid::new_v4().to_string();
    let inserted = friend_request_repo::insert_friend_request(
        pool,
        friend_request_repo::NewFriendRequest {
            id: &id,
            sender_id,
            receiver_id,
        },
    )
    .await;

    match inserted {
        Ok(()) => {}
        // A concurrent send won the race for the single pending slot.
        Err(sqlx::Error::Database(e)) if e.is_unique_violation() => {
            return Err(already_sent(&receiver.name));
        }
        Err(e) => return Err(e.into()),
    }

    info!(request_id = %id, sender_id, receiver_id, "friend request sent");
    Ok(SentRequestView {
        id,
        receiver_id: receiver.user_id,
        receiver_name: receiver.name,
        status: "pending".to_string(),
    })
}

/// Same as [`send_request`] with the receiver looked up by email.
pub async fn send_request_by_email(
    pool: &SqlitePool,
    sender_id: &str,
    email: &str,
) -> AppResult<SentRequestView> {
    let Some(receiver) = user_repo::load_user_by_email(pool, email.trim()).await? else {
        return Err(AppError::NotFound("User".into()));
    };
    send_request(pool, sender_id, &receiver.user_id).await
}

fn already_sent(name: &str) -> AppError {
    AppError::BadRequest(format!("Friend request already sent to {}", name))
}

pub async fn list_incoming(pool: &SqlitePool, user_id: &str) -> AppResult<Vec<IncomingRequestView>> {
    let rows = friend_request_repo::list_incoming(pool, user_id).await?;
    Ok(rows.into_iter().map(IncomingRequestView::from).collect())
}

pub async fn list_outgoing(pool: &SqlitePool, user_id: &str) -> AppResult<Vec<OutgoingRequestView>> {
    let rows = friend_request_repo::list_outgoing(pool, user_id).await?;
    Ok(rows.into_iter().map(OutgoingRequestView::from).collect())
}

/// Accepts or rejects a pending request addressed to `user_id`. Accepting
/// records the friendship and closes any pending request in the opposite
/// direction in the same transaction as the status change.
pub async fn respond(
    pool: &SqlitePool,
    user_id: &str,
    request_id: &str,
    action: RequestAction,
) -> AppResult<()> {
    let request = friend_request_repo::load_friend_request(pool, request_id)
        .await?
        .filter(|r| r.receiver_id == user_id && r.status == "pending")
        .ok_or_else(|| AppError::NotFound("Friend request".into()))?;

    let mut tx = pool.begin().await?;
    let resolved =
        friend_request_repo::resolve_pending(&mut *tx, request_id, action.resolved_status()).await?;
    if resolved == 0 {
        return Err(AppError::NotFound("Friend request".into()));
    }
    if action == RequestAction::Accept {
        // A crossing request the other way is settled by the same accept.
        friend_request_repo::resolve_pending_from(
            &mut *tx,
            &request.receiver_id,
            &request.sender_id,
            action.resolved_status(),
        )
        .await?;
        friends_repo::insert_friendship(&mut *tx, &request.receiver_id, &request.sender_id).await?;
    }
    tx.commit().await?;

    info!(
        request_id,
        sender_id = %request.sender_id,
        receiver_id = %request.receiver_id,
        ?action,
        "friend request resolved"
    );
    Ok(())
}

pub async fn remove_friend(pool: &SqlitePool, user_id: &str, friend_id: &str) -> AppResult<()> {
    if user_repo::load_user(pool, friend_id).await?.is_none() {
        return Err(AppError::NotFound("Friend".into()));
    }
    if !friends_repo::is_friend(pool, user_id, friend_id).await? {
        return Err(AppError::BadRequest("This user is not your friend".into()));
    }

    let mut tx = pool.begin().await?;
    friends_repo::delete_friendship(&mut *tx, user_id, friend_id).await?;
    tx.commit().await?;

    info!(user_id, friend_id, "friendship removed");
    Ok(())
}

// "2025-12-12 08:06:12.920" -> "2025-12-12 08:06"
fn format_timestamp(raw: &str) -> String {
    raw.trim().replacen('T', " ", 1).chars().take(16).collect()
}
