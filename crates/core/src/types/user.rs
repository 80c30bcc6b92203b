//! Dashboard user records.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::entity::Entity;

use super::id::UserId;
use super::status::UserRole;

/// A dashboard user mirrored from the backend.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    pub id: UserId,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub phone: Option<String>,
    #[serde(default)]
    pub role: UserRole,
    #[serde(default = "default_active")]
    pub active: bool,
    pub last_login_at: Option<DateTime<Utc>>,
}

const fn default_active() -> bool {
    true
}

impl User {
    /// Full display name.
    #[must_use]
    pub fn display_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }
}

/// Partial update for a [`User`]. Only provided fields are changed.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct UserPatch {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub first_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub last_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub role: Option<UserRole>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub active: Option<bool>,
}

impl Entity for User {
    type Id = UserId;
    type Patch = UserPatch;

    fn id(&self) -> &UserId {
        &self.id
    }

    fn apply_patch(&mut self, patch: UserPatch) {
        if let Some(first_name) = patch.first_name {
            self.first_name = first_name;
        }
        if let Some(last_name) = patch.last_name {
            self.last_name = last_name;
        }
        if let Some(email) = patch.email {
            self.email = email;
        }
        if let Some(phone) = patch.phone {
            self.phone = Some(phone);
        }
        if let Some(role) = patch.role {
            self.role = role;
        }
        if let Some(active) = patch.active {
            self.active = active;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_user() -> User {
        User {
            id: UserId::new("u-1"),
            first_name: "Ana".to_string(),
            last_name: "Petit".to_string(),
            email: "ana@example.com".to_string(),
            phone: None,
            role: UserRole::Manager,
            active: true,
            last_login_at: None,
        }
    }

    #[test]
    fn test_apply_patch_changes_only_provided_fields() {
        let mut user = sample_user();
        user.apply_patch(UserPatch {
            email: Some("ana.petit@example.com".to_string()),
            active: Some(false),
            ..UserPatch::default()
        });

        assert_eq!(user.email, "ana.petit@example.com");
        assert!(!user.active);
        assert_eq!(user.first_name, "Ana");
        assert_eq!(user.role, UserRole::Manager);
    }

    #[test]
    fn test_deserialize_fills_defaults() {
        let json = r#"{"id":"u-2","first_name":"Leo","last_name":"Marchand","email":"leo@example.com"}"#;
        let user: User = serde_json::from_str(json).expect("valid user json");
        assert_eq!(user.role, UserRole::Default);
        assert!(user.active);
        assert_eq!(user.last_login_at, None);
    }

    #[test]
    fn test_display_name() {
        assert_eq!(sample_user().display_name(), "Ana Petit");
    }
}
