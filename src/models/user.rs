use serde::{Deserialize, Serialize};

/// A user as listed by the upstream users endpoint
///
/// Upstream records may carry more fields; only `id` and `name` are read.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    /// User ID, also the render key of the list row
    pub id: i64,
    /// Display label
    pub name: String,
}

impl User {
    pub fn new(id: i64, name: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_user_ignores_extra_fields() {
        let json = r#"{"id":7,"name":"Ada","email":"ada@example.com","coins":10}"#;
        let user: User = serde_json::from_str(json).unwrap();

        assert_eq!(user, User::new(7, "Ada"));
    }

    #[test]
    fn test_user_missing_name_is_rejected() {
        let result: Result<User, _> = serde_json::from_str(r#"{"id":7}"#);
        assert!(result.is_err());
    }
}
