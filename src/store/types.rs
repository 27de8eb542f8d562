//! Record types stored in the document store
//!
//! Wire names use camelCase to match the existing API consumers.

use serde::{Deserialize, Serialize};

/// Payload for creating a new user
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct UserCreate {
    pub user_name: String,
    pub user_email: String,
}

/// Complete user record as returned by the API
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct UserRecord {
    pub user_id: String,
    pub user_name: String,
    pub user_email: String,
}

impl UserRecord {
    /// Assemble a full record from a stored document and its id
    pub fn from_parts(user_id: String, data: UserCreate) -> Self {
        Self {
            user_id,
            user_name: data.user_name,
            user_email: data.user_email,
        }
    }
}

/// Partial update payload; unset fields are left unchanged
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserUpdate {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub user_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub user_email: Option<String>,
}

impl UserUpdate {
    /// True when no field is set; callers return the record unchanged
    pub fn is_empty(&self) -> bool {
        self.user_name.is_none() && self.user_email.is_none()
    }

    /// Apply the set fields onto a stored document
    pub fn apply(self, data: &mut UserCreate) {
        if let Some(name) = self.user_name {
            data.user_name = name;
        }
        if let Some(email) = self.user_email {
            data.user_email = email;
        }
    }
}

/// One FAQ entry; content only, identity is not used by the RAG core
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct FaqRecord {
    pub question: String,
    pub answer: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_user_wire_names_are_camel_case() {
        let user = UserRecord {
            user_id: "u1".to_string(),
            user_name: "Ada".to_string(),
            user_email: "ada@example.com".to_string(),
        };
        let json = serde_json::to_value(&user).unwrap();
        assert!(json.get("userId").is_some());
        assert!(json.get("userName").is_some());
        assert!(json.get("userEmail").is_some());
    }

    #[test]
    fn test_update_apply_partial() {
        let mut data = UserCreate {
            user_name: "Ada".to_string(),
            user_email: "ada@example.com".to_string(),
        };
        let update = UserUpdate {
            user_name: Some("Grace".to_string()),
            user_email: None,
        };
        update.apply(&mut data);
        assert_eq!(data.user_name, "Grace");
        assert_eq!(data.user_email, "ada@example.com");
    }

    #[test]
    fn test_update_is_empty() {
        assert!(UserUpdate::default().is_empty());
        let update = UserUpdate {
            user_email: Some("new@example.com".to_string()),
            ..Default::default()
        };
        assert!(!update.is_empty());
    }
}
