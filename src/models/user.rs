use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::{Record, RecordId, Reference, Role};

/// A dashboard account. The password is write-only and never part of a read.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    #[serde(rename = "_id")]
    pub id: RecordId,
    #[serde(default)]
    pub username: String,
    #[serde(default)]
    pub email: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub role: Option<Reference<Role>>,
    #[serde(default)]
    pub created_at: DateTime<Utc>,
    #[serde(default)]
    pub updated_at: DateTime<Utc>,
}

impl Record for User {
    fn id(&self) -> RecordId {
        self.id
    }

    fn label(&self) -> &str {
        &self.username
    }

    fn search_fields(&self) -> Vec<&str> {
        vec![self.username.as_str(), self.email.as_str()]
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct NewUser {
    pub username: String,
    pub email: String,
    pub password: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub role: Option<RecordId>,
}

/// Partial user update. `password` stays `None` unless a new one was typed.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct UserChanges {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub username: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub password: Option<String>,
    /// `Some(None)` clears the role.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub role: Option<Option<RecordId>>,
}
