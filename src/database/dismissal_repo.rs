use sqlx::SqlitePool;

const SQL_IS_DISMISSED: &str = r#"
SELECT COUNT(*)
FROM dismissed_suggestions
WHERE user_id = ?1 AND suggested_user_id = ?2
"#;

const SQL_INSERT_DISMISSAL: &str = r#"
INSERT OR IGNORE INTO dismissed_suggestions (user_id, suggested_user_id)
VALUES (?1, ?2)
"#;

pub async fn is_dismissed(pool: &SqlitePool, user_id: &str, target_id: &str) -> sqlx::Result<bool> {
    let count: i64 = sqlx::query_scalar(SQL_IS_DISMISSED)
        .bind(user_id)
        .bind(target_id)
        .fetch_one(pool)
        .await?;
    Ok(count > 0)
}

/// Returns the number of rows inserted: 0 when the pair was already dismissed.
pub async fn insert_dismissal(pool: &SqlitePool, user_id: &str, target_id: &str) -> sqlx::Result<u64> {
    let res = sqlx::query(SQL_INSERT_DISMISSAL)
        .bind(user_id)
        .bind(target_id)
        .execute(pool)
        .await?;
    Ok(res.rows_affected())
}
