/// User document models
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum UserRole {
    #[default]
    User,
    Admin,
}

/// User record as stored in the `users` collection
///
/// `password` always holds a bcrypt hash, never the plain credential.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    pub name: String,
    pub email: String,
    pub password: String,
    #[serde(default)]
    pub role: UserRole,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_user_serialization() {
        let user = User {
            name: "Admin".to_string(),
            email: "admin@buildestate.com".to_string(),
            password: "$2b$10$hash".to_string(),
            role: UserRole::Admin,
        };

        let json = serde_json::to_value(&user).unwrap();
        assert_eq!(json["role"], "admin");
        assert_eq!(json["email"], "admin@buildestate.com");
    }

    #[test]
    fn test_role_defaults_to_user() {
        let json = r#"{"name":"Jo","email":"jo@example.com","password":"x"}"#;
        let user: User = serde_json::from_str(json).unwrap();
        assert_eq!(user.role, UserRole::User);
    }
}
