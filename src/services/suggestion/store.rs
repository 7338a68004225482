use crate::models::UsersRow;

/// A user as the suggestion engine sees them.
#[derive(Debug, Clone, PartialEq)]
pub struct TaggedUser {
    pub id: String,
    pub name: String,
    pub email: String,
    pub tags: Vec<String>,
}

impl From<UsersRow> for TaggedUser {
    fn from(row: UsersRow) -> Self {
        let tags = row.tag_list();
        Self {
            id: row.user_id,
            name: row.name,
            email: row.email,
            tags,
        }
    }
}

/// Read side of the user/relationship data plus the one write the engine
/// performs. Every lookup is a point query by id pair.
#[allow(async_fn_in_trait)]
pub trait RelationshipStore {
    async fn find_user(&self, user_id: &str) -> sqlx::Result<Option<TaggedUser>>;

    /// All users in a stable enumeration order. May include the requester.
    async fn list_users(&self) -> sqlx::Result<Vec<TaggedUser>>;

    /// Symmetric.
    async fn is_friend(&self, a: &str, b: &str) -> sqlx::Result<bool>;

    /// True when a pending request exists from `a` to `b` or from `b` to `a`.
    async fn has_pending_request(&self, a: &str, b: &str) -> sqlx::Result<bool>;

    /// Directed: has `requester` dismissed `target`.
    async fn is_dismissed(&self, requester: &str, target: &str) -> sqlx::Result<bool>;

    /// Idempotent.
    async fn record_dismissal(&self, requester: &str, target: &str) -> sqlx::Result<()>;
}

#[cfg(test)]
pub(crate) mod memory {
    use std::collections::HashSet;
    use std::sync::Mutex;

    use super::{RelationshipStore, TaggedUser};

    /// In-process store for engine tests.
    #[derive(Default)]
    pub struct MemoryStore {
        pub users: Vec<TaggedUser>,
        pub friends: HashSet<(String, String)>,
        pub pending: HashSet<(String, String)>,
        pub dismissed: Mutex<HashSet<(String, String)>>,
        pub fail: bool,
    }

    impl MemoryStore {
        pub fn with_users(users: &[(&str, &[&str])]) -> Self {
            Self {
                users: users
                    .iter()
                    .map(|(id, tags)| user(id, tags))
                    .collect(),
                ..Default::default()
            }
        }

        pub fn befriend(&mut self, a: &str, b: &str) {
            self.friends.insert((a.to_string(), b.to_string()));
            self.friends.insert((b.to_string(), a.to_string()));
        }

        pub fn request(&mut self, sender: &str, receiver: &str) {
            self.pending.insert((sender.to_string(), receiver.to_string()));
        }

        pub fn dismiss(&self, requester: &str, target: &str) {
            self.dismissed
                .lock()
                .unwrap()
                .insert((requester.to_string(), target.to_string()));
        }

        fn check(&self) -> sqlx::Result<()> {
            if self.fail {
                return Err(sqlx::Error::PoolClosed);
            }
            Ok(())
        }
    }

    pub fn user(id: &str, tags: &[&str]) -> TaggedUser {
        TaggedUser {
            id: id.to_string(),
            name: format!("User {}", id),
            email: format!("{}@example.com", id),
            tags: tags.iter().map(|t| t.to_string()).collect(),
        }
    }

    fn pair(a: &str, b: &str) -> (String, String) {
        (a.to_string(), b.to_string())
    }

    impl RelationshipStore for MemoryStore {
        async fn find_user(&self, user_id: &str) -> sqlx::Result<Option<TaggedUser>> {
            self.check()?;
            Ok(self.users.iter().find(|u| u.id == user_id).cloned())
        }

        async fn list_users(&self) -> sqlx::Result<Vec<TaggedUser>> {
            self.check()?;
            Ok(self.users.clone())
        }

        async fn is_friend(&self, a: &str, b: &str) -> sqlx::Result<bool> {
            self.check()?;
            Ok(self.friends.contains(&pair(a, b)))
        }

        async fn has_pending_request(&self, a: &str, b: &str) -> sqlx::Result<bool> {
            self.check()?;
            Ok(self.pending.contains(&pair(a, b)) || self.pending.contains(&pair(b, a)))
        }

        async fn is_dismissed(&self, requester: &str, target: &str) -> sqlx::Result<bool> {
            self.check()?;
            Ok(self.dismissed.lock().unwrap().contains(&pair(requester, target)))
        }

        async fn record_dismissal(&self, requester: &str, target: &str) -> sqlx::Result<()> {
            self.check()?;
            self.dismiss(requester, target);
            Ok(())
        }
    }
}
