use sqlx::SqlitePool;

use crate::database::{dismissal_repo, friend_request_repo, friends_repo, user_repo};
use crate::services::suggestion::{RelationshipStore, TaggedUser};

impl RelationshipStore for SqlitePool {
    async fn find_user(&self, user_id: &str) -> sqlx::Result<Option<TaggedUser>> {
        Ok(user_repo::load_user(self, user_id).await?.map(TaggedUser::from))
    }

    async fn list_users(&self) -> sqlx::Result<Vec<TaggedUser>> {
        let rows = user_repo::list_users(self).await?;
        Ok(rows.into_iter().map(TaggedUser::from).collect())
    }

    async fn is_friend(&self, a: &str, b: &str) -> sqlx::Result<bool> {
        friends_repo::is_friend(self, a, b).await
    }

    async fn has_pending_request(&self, a: &str, b: &str) -> sqlx::Result<bool> {
        friend_request_repo::has_pending_between(self, a, b).await
    }

    async fn is_dismissed(&self, requester: &str, target: &str) -> sqlx::Result<bool> {
        dismissal_repo::is_dismissed(self, requester, target).await
    }

    async fn record_dismissal(&self, requester: &str, target: &str) -> sqlx::Result<()> {
        dismissal_repo::insert_dismissal(self, requester, target).await?;
        Ok(())
    }
}
