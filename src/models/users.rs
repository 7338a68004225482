use tracing::warn;

#[derive(Debug, Clone, sqlx::FromRow)]
pub struct UsersRow {
    pub user_id: String,
    pub name: String,
    pub email: String,
    pub tags: Option<String>,
}

impl UsersRow {
    /// Tags as stored. A missing or unreadable column is an empty list.
    pub fn tag_list(&self) -> Vec<String> {
        parse_tags(self.tags.as_deref().unwrap_or("[]"))
    }
}

pub fn parse_tags(raw: &str) -> Vec<String> {
    let raw = raw.trim();
    if raw.is_empty() {
        return vec![];
    }
    let value = match serde_json::from_str::<serde_json::Value>(raw) {
        Ok(v) => v,
        Err(e) => {
            warn!(error = %e, "unreadable tags column, treating as empty");
            return vec![];
        }
    };
    let Some(array) = value.as_array() else {
        return vec![];
    };

    array
        .iter()
        .filter_map(|v| v.as_str())
        .map(|s| s.to_string())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_json_array_of_strings() {
        assert_eq!(parse_tags(r#"["rust", "hiking", "rust"]"#), vec!["rust", "hiking", "rust"]);
    }

    #[test]
    fn empty_and_malformed_values_are_empty_lists() {
        assert!(parse_tags("").is_empty());
        assert!(parse_tags("   ").is_empty());
        assert!(parse_tags("not json").is_empty());
        assert!(parse_tags(r#"{"name":"rust"}"#).is_empty());
    }

    #[test]
    fn skips_non_string_elements() {
        assert_eq!(parse_tags(r#"["rust", 3, null, "go"]"#), vec!["rust", "go"]);
    }

    #[test]
    fn missing_column_is_empty() {
        let row = UsersRow {
            user_id: "u1".into(),
            name: "Ada".into(),
            email: "ada@example.com".into(),
            tags: None,
        };
        assert!(row.tag_list().is_empty());
    }
}
