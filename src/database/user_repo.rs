use sqlx::SqlitePool;

use crate::models::UsersRow;

const SQL_LOAD_USER: &str = r#"
SELECT user_id, name, email, tags
FROM users
WHERE user_id = ?1
LIMIT 1
"#;

const SQL_LOAD_USER_BY_EMAIL: &str = r#"
SELECT user_id, name, email, tags
FROM users
WHERE email = ?1
LIMIT 1
"#;

// rowid order is the stable enumeration order of the user set.
const SQL_LIST_USERS: &str = r#"
SELECT user_id, name, email, tags
FROM users
ORDER BY rowid ASC
"#;

const SQL_INSERT_USER: &str = r#"
INSERT INTO users (user_id, name, email, tags)
VALUES (?1, ?2, ?3, ?4)
"#;

const SQL_UPDATE_TAGS: &str = r#"
UPDATE users
SET tags = ?1
WHERE user_id = ?2
"#;

pub struct NewUser<'a> {
    pub id: &'a str,
    pub name: &'a str,
    pub email: &'a str,
    pub tags: &'a [String],
}

pub async fn load_user(pool: &SqlitePool, user_id: &str) -> sqlx::Result<Option<UsersRow>> {
    sqlx::query_as::<_, UsersRow>(SQL_LOAD_USER)
        .bind(user_id)
        .fetch_optional(pool)
        .await
}

pub async fn load_user_by_email(pool: &SqlitePool, email: &str) -> sqlx::Result<Option<UsersRow>> {
    sqlx::query_as::<_, UsersRow>(SQL_LOAD_USER_BY_EMAIL)
        .bind(email)
        .fetch_optional(pool)
        .await
}

pub async fn list_users(pool: &SqlitePool) -> sqlx::Result<Vec<UsersRow>> {
    sqlx::query_as::<_, UsersRow>(SQL_LIST_USERS)
        .fetch_all(pool)
        .await
}

pub async fn insert_user(pool: &SqlitePool, user: NewUser<'_>) -> sqlx::Result<()> {
    sqlx::query(SQL_INSERT_USER)
        .bind(user.id)
        .bind(user.name)
        .bind(user.email)
        .bind(encode_tags(user.tags)?)
        .execute(pool)
        .await?;
    Ok(())
}

pub async fn update_tags(pool: &SqlitePool, user_id: &str, tags: &[String]) -> sqlx::Result<u64> {
    let res = sqlx::query(SQL_UPDATE_TAGS)
        .bind(encode_tags(tags)?)
        .bind(user_id)
        .execute(pool)
        .await?;
    Ok(res.rows_affected())
}

fn encode_tags(tags: &[String]) -> sqlx::Result<String> {
    serde_json::to_string(tags).map_err(|e| sqlx::Error::Encode(Box::new(e)))
}
