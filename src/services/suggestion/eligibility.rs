use tracing::debug;

use super::store::{RelationshipStore, TaggedUser};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Exclusion {
    Requester,
    Friend,
    PendingRequest,
    Dismissed,
}

/// Why `user_id` cannot be suggested to `requester_id`, if anything.
pub async fn exclusion<S: RelationshipStore>(
    store: &S,
    requester_id: &str,
    user_id: &str,
) -> sqlx::Result<Option<Exclusion>> {
    if user_id == requester_id {
        return Ok(Some(Exclusion::Requester));
    }
    if store.is_friend(requester_id, user_id).await? {
        return Ok(Some(Exclusion::Friend));
    }
    if store.has_pending_request(requester_id, user_id).await? {
        return Ok(Some(Exclusion::PendingRequest));
    }
    if store.is_dismissed(requester_id, user_id).await? {
        return Ok(Some(Exclusion::Dismissed));
    }
    Ok(None)
}

/// Filters `users` down to suggestion candidates, keeping their order.
pub async fn eligible_candidates<S: RelationshipStore>(
    store: &S,
    requester_id: &str,
    users: Vec<TaggedUser>,
) -> sqlx::Result<Vec<TaggedUser>> {
    let mut eligible = Vec::with_capacity(users.len());
    for user in users {
        if let Some(reason) = exclusion(store, requester_id, &user.id).await? {
            debug!(requester_id, user_id = %user.id, ?reason, "candidate excluded");
            continue;
        }
        eligible.push(user);
    }
    Ok(eligible)
}
