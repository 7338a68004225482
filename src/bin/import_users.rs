use dotenvy::dotenv;
use serde::Deserialize;
use std::env;
use std::fs;
use uuid::Uuid;

use codeconnect::config::Config;
use codeconnect::database::{self, user_repo};
use codeconnect::services::tags_service;

#[derive(Debug, Deserialize)]
struct ImportedUser {
    name: String,
    email: String,
    #[serde(default)]
    tags: Vec<String>,
}

#[derive(Debug, Default)]
struct ImportReport {
    created: usize,
    updated: usize,
    failed: usize,
}

#[tokio::main]
async fn main() {
    dotenv().ok();
    tracing_subscriber::fmt::init();

    let Some(path) = env::args().nth(1) else {
        eprintln!("usage: import_users <users.json>");
        std::process::exit(2);
    };

    let raw = match fs::read_to_string(&path) {
        Ok(raw) => raw,
        Err(e) => {
            eprintln!("cannot read {}: {}", path, e);
            std::process::exit(1);
        }
    };
    let users: Vec<ImportedUser> = match serde_json::from_str(&raw) {
        Ok(users) => users,
        Err(e) => {
            eprintln!("{} is not a JSON array of users: {}", path, e);
            std::process::exit(1);
        }
    };

    let config = Config::load();
    let pool = match database::connect(&config.database_url, config.database_max_connections).await {
        Ok(pool) => pool,
        Err(e) => {
            eprintln!("cannot open database {}: {}", config.database_url, e);
            std::process::exit(1);
        }
    };

    let mut report = ImportReport::default();
    for user in users {
        match import_one(&pool, &user).await {
            Ok(true) => report.created += 1,
            Ok(false) => report.updated += 1,
            Err(e) => {
                tracing::warn!(email = %user.email, error = %e, "import failed");
                report.failed += 1;
            }
        }
    }

    println!(
        "user import: created={}, updated={}, failed={}",
        report.created, report.updated, report.failed
    );
    if report.failed > 0 {
        std::process::exit(1);
    }
}

/// Upserts by email. Returns true when a new user was created.
async fn import_one(
    pool: &sqlx::SqlitePool,
    user: &ImportedUser,
) -> codeconnect::error::AppResult<bool> {
    let tags = tags_service::clean_tags(user.tags.clone())?;

    if let Some(existing) = user_repo::load_user_by_email(pool, &user.email).await? {
        user_repo::update_tags(pool, &existing.user_id, &tags).await?;
        return Ok(false);
    }

    let id = Uuid::new_v4().to_string();
    user_repo::insert_user(
        pool,
        user_repo::NewUser {
            id: &id,
            name: &user.name,
            email: &user.email,
            tags: &tags,
        },
    )
    .await?;
    Ok(true)
}
