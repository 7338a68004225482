use sqlx::{SqliteConnection, SqlitePool};

use crate::models::{FriendRequestRow, PendingRequestRow};

pub struct NewFriendRequest<'a> {
    pub id: &'a str,
    pub sender_id: &'a str,
    pub receiver_id: &'a str,
}

const SQL_INSERT_FRIEND_REQUEST: &str = r#"
INSERT INTO friend_requests (
  request_id,
  sender_id,
  receiver_id,
  status
) VALUES (?1, ?2, ?3, 'pending')
"#;

const SQL_LOAD_FRIEND_REQUEST: &str = r#"
SELECT request_id, sender_id, receiver_id, status, created_at
FROM friend_requests
WHERE request_id = ?1
LIMIT 1
"#;

const SQL_COUNT_PENDING_FROM: &str = r#"
SELECT COUNT(*)
FROM friend_requests
WHERE sender_id = ?1
  AND receiver_id = ?2
  AND status = 'pending'
"#;

const SQL_COUNT_PENDING_BETWEEN: &str = r#"
SELECT COUNT(*)
FROM friend_requests
WHERE ((sender_id = ?1 AND receiver_id = ?2) OR (sender_id = ?2 AND receiver_id = ?1))
  AND status = 'pending'
"#;

// Only a pending request can change status; the guard makes concurrent
// responses to the same request resolve to a single winner.
const SQL_RESOLVE_PENDING: &str = r#"
UPDATE friend_requests
SET status = ?1
WHERE request_id = ?2
  AND status = 'pending'
"#;

const SQL_RESOLVE_PENDING_FROM: &str = r#"
UPDATE friend_requests
SET status = ?1
WHERE sender_id = ?2
  AND receiver_id = ?3
  AND status = 'pending'
"#;

const SQL_LIST_INCOMING: &str = r#"
SELECT
  r.request_id,
  u.user_id AS counterpart_id,
  u.name AS counterpart_name,
  u.email AS counterpart_email,
  r.created_at
FROM friend_requests r
JOIN users u ON u.user_id = r.sender_id
WHERE r.receiver_id = ?1
  AND r.status = 'pending'
ORDER BY r.created_at ASC, r.rowid ASC
"#;

const SQL_LIST_OUTGOING: &str = r#"
SELECT
  r.request_id,
  u.user_id AS counterpart_id,
  u.name AS counterpart_name,
  u.email AS counterpart_email,
  r.created_at
FROM friend_requests r
JOIN users u ON u.user_id = r.receiver_id
WHERE r.sender_id = ?1
  AND r.status = 'pending'
ORDER BY r.created_at ASC, r.rowid ASC
"#;

pub async fn insert_friend_request(
    pool: &SqlitePool,
    req: NewFriendRequest<'_>,
) -> sqlx::Result<()> {
    sqlx::query(SQL_INSERT_FRIEND_REQUEST)
        .bind(req.id)
        .bind(req.sender_id)
        .bind(req.receiver_id)
        .execute(pool)
        .await?;
    Ok(())
}

pub async fn load_friend_request(
    pool: &SqlitePool,
    request_id: &str,
) -> sqlx::Result<Option<FriendRequestRow>> {
    sqlx::query_as::<_, FriendRequestRow>(SQL_LOAD_FRIEND_REQUEST)
        .bind(request_id)
        .fetch_optional(pool)
        .await
}

/// Directed: a pending request sent by `sender_id` to `receiver_id`.
pub async fn has_pending_from(
    pool: &SqlitePool,
    sender_id: &str,
    receiver_id: &str,
) -> sqlx::Result<bool> {
    let count: i64 = sqlx::query_scalar(SQL_COUNT_PENDING_FROM)
        .bind(sender_id)
        .bind(receiver_id)
        .fetch_one(pool)
        .await?;
    Ok(count > 0)
}

/// Undirected: a pending request in either direction.
pub async fn has_pending_between(pool: &SqlitePool, a: &str, b: &str) -> sqlx::Result<bool> {
    let count: i64 = sqlx::query_scalar(SQL_COUNT_PENDING_BETWEEN)
        .bind(a)
        .bind(b)
        .fetch_one(pool)
        .await?;
    Ok(count > 0)
}

pub async fn resolve_pending(
    conn: &mut SqliteConnection,
    request_id: &str,
    status: &str, // accepted|rejected
) -> sqlx::Result<u64> {
    let res = sqlx::query(SQL_RESOLVE_PENDING)
        .bind(status)
        .bind(request_id)
        .execute(conn)
        .await?;
    Ok(res.rows_affected())
}

/// Resolves whatever is still pending from `sender_id` to `receiver_id`.
pub async fn resolve_pending_from(
    conn: &mut SqliteConnection,
    sender_id: &str,
    receiver_id: &str,
    status: &str,
) -> sqlx::Result<u64> {
    let res = sqlx::query(SQL_RESOLVE_PENDING_FROM)
        .bind(status)
        .bind(sender_id)
        .bind(receiver_id)
        .execute(conn)
        .await?;
    Ok(res.rows_affected())
}

pub async fn list_incoming(pool: &SqlitePool, user_id: &str) -> sqlx::Result<Vec<PendingRequestRow>> {
    sqlx::query_as::<_, PendingRequestRow>(SQL_LIST_INCOMING)
        .bind(user_id)
        .fetch_all(pool)
        .await
}

pub async fn list_outgoing(pool: &SqlitePool, user_id: &str) -> sqlx::Result<Vec<PendingRequestRow>> {
    sqlx::query_as::<_, PendingRequestRow>(SQL_LIST_OUTGOING)
        .bind(user_id)
        .fetch_all(pool)
        .await
}
