use sqlx::{SqliteConnection, SqlitePool};

// Both directions are stored, so one lookup answers the symmetric question.
const SQL_IS_FRIEND: &str = r#"
SELECT COUNT(*)
FROM friends
WHERE user_id = ?1 AND friend_id = ?2
"#;

const SQL_INSERT_FRIEND: &str = r#"
INSERT OR IGNORE INTO friends (user_id, friend_id)
VALUES (?1, ?2)
"#;

const SQL_DELETE_FRIENDSHIP: &str = r#"
DELETE FROM friends
WHERE (user_id = ?1 AND friend_id = ?2)
   OR (user_id = ?2 AND friend_id = ?1)
"#;

pub async fn is_friend(pool: &SqlitePool, user_id: &str, other_id: &str) -> sqlx::Result<bool> {
    let count: i64 = sqlx::query_scalar(SQL_IS_FRIEND)
        .bind(user_id)
        .bind(other_id)
        .fetch_one(pool)
        .await?;
    Ok(count > 0)
}

pub async fn insert_friendship(
    conn: &mut SqliteConnection,
    user_id: &str,
    other_id: &str,
) -> sqlx::Result<()> {
    for (a, b) in [(user_id, other_id), (other_id, user_id)] {
        sqlx::query(SQL_INSERT_FRIEND)
            .bind(a)
            .bind(b)
            .execute(&mut *conn)
            .await?;
    }
    Ok(())
}

pub async fn delete_friendship(
    conn: &mut SqliteConnection,
    user_id: &str,
    other_id: &str,
) -> sqlx::Result<u64> {
    let res = sqlx::query(SQL_DELETE_FRIENDSHIP)
        .bind(user_id)
        .bind(other_id)
        .execute(conn)
        .await?;
    Ok(res.rows_affected())
}
