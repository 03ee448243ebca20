use serde::{Deserialize, Serialize};

/// Logged-in user as stored by the login flow.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct UserInfo {
    #[serde(rename = "_id", alias = "id", default)]
    pub id: String,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub role: Option<String>,
}

/// Session resolved once at start-up and shared through context.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Session {
    pub token: Option<String>,
    pub user: Option<UserInfo>,
}

impl Session {
    /// Builds a session from raw storage values; malformed user JSON is ignored.
    pub fn from_storage(token: Option<String>, user_json: Option<&str>) -> Self {
        let token = token.filter(|t| !t.trim().is_empty());
        let user = user_json.and_then(|raw| serde_json::from_str::<UserInfo>(raw).ok());
        Self { token, user }
    }

    pub fn is_authenticated(&self) -> bool {
        self.token.is_some()
    }

    /// Name for headers and "requested by" fields.
    pub fn display_name(&self) -> String {
        self.user
            .as_ref()
            .map(|u| u.name.trim())
            .filter(|n| !n.is_empty())
            .unwrap_or("User")
            .to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_storage() {
        let session = Session::from_storage(
            Some("abc".into()),
            Some(r#"{"_id":"u1","name":"Ravi","role":"site"}"#),
        );
        assert!(session.is_authenticated());
        assert_eq!(session.display_name(), "Ravi");
        assert_eq!(session.user.unwrap().id, "u1");
    }

    #[test]
    fn test_malformed_user_falls_back() {
        let session = Session::from_storage(Some("  ".into()), Some("{not json"));
        assert!(!session.is_authenticated());
        assert_eq!(session.display_name(), "User");
    }
}
