use sqlx::SqlitePool;

use crate::database::user_repo;
use crate::error::{AppError, AppResult};

pub const MAX_TAGS: usize = 50;
pub const MAX_TAG_LEN: usize = 64;

pub async fn get_tags(pool: &SqlitePool, user_id: &str) -> AppResult<Vec<String>> {
    let Some(row) = user_repo::load_user(pool, user_id).await? else {
        return Err(AppError::NotFound("User".into()));
    };
    Ok(row.tag_list())
}

/// Replaces the user's tags and returns what was stored.
pub async fn update_tags(pool: &SqlitePool, user_id: &str, tags: Vec<String>) -> AppResult<Vec<String>> {
    let tags = clean_tags(tags)?;
    let updated = user_repo::update_tags(pool, user_id, &tags).await?;
    if updated == 0 {
        return Err(AppError::NotFound("User".into()));
    }
    Ok(tags)
}

/// Trims entries and drops blanks. Duplicates stay: they count towards
/// a tag's weight when ranking suggestions.
pub fn clean_tags(tags: Vec<String>) -> AppResult<Vec<String>> {
    let tags: Vec<String> = tags
        .into_iter()
        .map(|t| t.trim().to_string())
        .filter(|t| !t.is_empty())
        .collect();

    if tags.len() > MAX_TAGS {
        return Err(AppError::BadRequest(format!(
            "Too many tags (max {})",
            MAX_TAGS
        )));
    }
    if let Some(long) = tags.iter().find(|t| t.chars().count() > MAX_TAG_LEN) {
        return Err(AppError::BadRequest(format!(
            "Tag '{}' is longer than {} characters",
            long, MAX_TAG_LEN
        )));
    }
    Ok(tags)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::database::{self, user_repo::NewUser};

    #[test]
    fn cleaning_trims_and_keeps_duplicates() {
        let cleaned = clean_tags(vec![" rust ".into(), "".into(), "  ".into(), "rust".into()]).unwrap();
        assert_eq!(cleaned, vec!["rust", "rust"]);
    }

    #[test]
    fn rejects_oversized_input() {
        let many = (0..=MAX_TAGS).map(|i| format!("t{}", i)).collect();
        assert!(matches!(clean_tags(many), Err(AppError::BadRequest(_))));

        let long = vec!["x".repeat(MAX_TAG_LEN + 1)];
        assert!(matches!(clean_tags(long), Err(AppError::BadRequest(_))));
    }

    #[tokio::test]
    async fn update_then_read_back() {
        let pool = database::connect_in_memory().await.unwrap();
        user_repo::insert_user(
            &pool,
            NewUser { id: "u1", name: "Ada", email: "ada@example.com", tags: &[] },
        )
        .await
        .unwrap();

        assert!(get_tags(&pool, "u1").await.unwrap().is_empty());

        let stored = update_tags(&pool, "u1", vec!["Rust".into(), " hiking".into()]).await.unwrap();
        assert_eq!(stored, vec!["Rust", "hiking"]);
        assert_eq!(get_tags(&pool, "u1").await.unwrap(), vec!["Rust", "hiking"]);
    }

    #[tokio::test]
    async fn unknown_user_is_not_found() {
        let pool = database::connect_in_memory().await.unwrap();
        assert!(matches!(get_tags(&pool, "ghost").await, Err(AppError::NotFound(_))));
        assert!(matches!(
            update_tags(&pool, "ghost", vec!["rust".into()]).await,
            Err(AppError::NotFound(_))
        ));
    }
}
