use sqlx::SqlitePool;

use codeconnect::database::{self, dismissal_repo, user_repo};
use codeconnect::error::AppError;
use codeconnect::services::friendship_service::{self, RequestAction};
use codeconnect::services::suggestion::{self, RelationshipStore};

async fn pool_with(users: &[(&str, &[&str])]) -> SqlitePool {
    let pool = database::connect_in_memory().await.unwrap();
    for &(id, tags) in users {
        let tags: Vec<String> = tags.iter().map(|t| t.to_string()).collect();
        let email = format!("{}@example.com", id);
        user_repo::insert_user(
            &pool,
            user_repo::NewUser {
                id,
                name: id,
                email: &email,
                tags: &tags,
            },
        )
        .await
        .unwrap();
    }
    pool
}

async fn suggested_ids(pool: &SqlitePool, user_id: &str) -> Vec<String> {
    suggestion::get_suggestions(pool, user_id)
        .await
        .unwrap()
        .into_iter()
        .map(|s| s.id)
        .collect()
}

#[tokio::test]
async fn ranks_by_tag_overlap_against_the_database() {
    let pool = pool_with(&[
        ("me", &["rust", "hiking"]),
        ("cook", &["cooking"]),
        ("twin", &["rust", "hiking"]),
        ("partial", &["rust", "hiking", "chess"]),
    ])
    .await;

    assert_eq!(suggested_ids(&pool, "me").await, vec!["twin", "partial"]);
}

#[tokio::test]
async fn list_users_keeps_insertion_order() {
    let pool = pool_with(&[("c", &[]), ("a", &[]), ("b", &[])]).await;
    let ids: Vec<String> = pool.list_users().await.unwrap().into_iter().map(|u| u.id).collect();
    assert_eq!(ids, vec!["c", "a", "b"]);
}

#[tokio::test]
async fn pending_requests_hide_both_sides_until_resolved() {
    let pool = pool_with(&[("me", &["rust"]), ("other", &["rust"])]).await;
    let sent = friendship_service::send_request(&pool, "other", "me").await.unwrap();

    assert!(suggested_ids(&pool, "me").await.is_empty());
    assert!(suggested_ids(&pool, "other").await.is_empty());

    friendship_service::respond(&pool, "me", &sent.id, RequestAction::Reject)
        .await
        .unwrap();
    assert_eq!(suggested_ids(&pool, "me").await, vec!["other"]);
}

#[tokio::test]
async fn accepted_friends_are_never_suggested() {
    let pool = pool_with(&[("me", &["rust"]), ("other", &["rust"])]).await;
    let sent = friendship_service::send_request(&pool, "me", "other").await.unwrap();
    friendship_service::respond(&pool, "other", &sent.id, RequestAction::Accept)
        .await
        .unwrap();

    assert!(suggested_ids(&pool, "me").await.is_empty());
    assert!(suggested_ids(&pool, "other").await.is_empty());

    friendship_service::remove_friend(&pool, "me", "other").await.unwrap();
    assert_eq!(suggested_ids(&pool, "me").await, vec!["other"]);
}

#[tokio::test]
async fn crossing_requests_do_not_outlive_the_friendship() {
    let pool = pool_with(&[("a", &["rust"]), ("b", &["rust"])]).await;
    let a_to_b = friendship_service::send_request(&pool, "a", "b").await.unwrap();
    friendship_service::send_request(&pool, "b", "a").await.unwrap();

    friendship_service::respond(&pool, "b", &a_to_b.id, RequestAction::Accept)
        .await
        .unwrap();
    assert!(friendship_service::list_incoming(&pool, "a").await.unwrap().is_empty());

    friendship_service::remove_friend(&pool, "a", "b").await.unwrap();
    assert_eq!(suggested_ids(&pool, "a").await, vec!["b"]);
    assert_eq!(suggested_ids(&pool, "b").await, vec!["a"]);
}

#[tokio::test]
async fn dismissal_is_persisted_once_and_one_way() {
    let pool = pool_with(&[("me", &["rust"]), ("other", &["rust"])]).await;

    suggestion::dismiss_suggestion(&pool, "me", "other").await.unwrap();
    suggestion::dismiss_suggestion(&pool, "me", "other").await.unwrap();
    assert_eq!(
        dismissal_repo::insert_dismissal(&pool, "me", "other").await.unwrap(),
        0
    );

    assert!(suggested_ids(&pool, "me").await.is_empty());
    assert_eq!(suggested_ids(&pool, "other").await, vec!["me"]);
}

#[tokio::test]
async fn malformed_tag_column_counts_as_no_tags() {
    let pool = pool_with(&[("me", &["rust"]), ("broken", &[])]).await;
    sqlx::query("UPDATE users SET tags = 'not json' WHERE user_id = 'broken'")
        .execute(&pool)
        .await
        .unwrap();

    assert!(suggested_ids(&pool, "me").await.is_empty());
}

#[tokio::test]
async fn closed_pool_is_an_error() {
    let pool = pool_with(&[("me", &["rust"])]).await;
    pool.close().await;
    assert!(matches!(
        suggestion::get_suggestions(&pool, "me").await,
        Err(AppError::Database(_))
    ));
}
