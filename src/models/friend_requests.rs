// Pending request joined with the user on the other side of it.
#[derive(Debug, Clone, sqlx::FromRow)]
pub struct PendingRequestRow {
    pub request_id: String,
    pub counterpart_id: String,
    pub counterpart_name: String,
    pub counterpart_email: String,
    pub created_at: String,
}

#[derive(Debug, Clone, sqlx::FromRow)]
pub struct FriendRequestRow {
    pub request_id: String,
    pub sender_id: String,
    pub receiver_id: String,
    pub status: String, // pending|accepted|rejected
    pub created_at: String,
}
