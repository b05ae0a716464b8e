//! Member model.
//!
//! Members are the authors that boards and comments belong to.

use serde::Serialize;

/// Member entity.
#[derive(Debug, Clone, PartialEq, sqlx::FromRow, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Member {
    /// Unique member ID.
    pub id: i64,
    /// Login email (unique).
    pub email: String,
    /// Display name shown next to boards and comments.
    pub nickname: String,
    /// Registration timestamp.
    pub created_at: String,
}

/// Data for creating a new member.
#[derive(Debug, Clone)]
pub struct NewMember {
    pub email: String,
    pub nickname: String,
}

impl NewMember {
    pub fn new(email: impl Into<String>, nickname: impl Into<String>) -> Self {
        Self {
            email: email.into(),
            nickname: nickname.into(),
        }
    }
}
