//! Comment model.

use serde::Serialize;

/// Comment entity: a reply on a board, optionally to another comment.
#[derive(Debug, Clone, PartialEq, sqlx::FromRow, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Comment {
    /// Unique comment ID.
    pub id: i64,
    /// ID of the board this comment belongs to.
    pub board_id: i64,
    /// ID of the member who wrote the comment.
    pub member_id: i64,
    /// Author's nickname, joined from members.
    pub nickname: String,
    /// ID of the comment this one replies to (None for top-level comments).
    pub parent_id: Option<i64>,
    pub content: String,
    pub created_at: String,
    pub updated_at: Option<String>,
}

impl Comment {
    pub fn is_reply(&self) -> bool {
        self.parent_id.is_some()
    }
}

/// Data for creating a new comment.
#[derive(Debug, Clone)]
pub struct NewComment {
    pub board_id: i64,
    pub member_id: i64,
    pub parent_id: Option<i64>,
    pub content: String,
}

impl NewComment {
    /// Create a top-level comment.
    pub fn new(board_id: i64, member_id: i64, content: impl Into<String>) -> Self {
        Self {
            board_id,
            member_id,
            parent_id: None,
            content: content.into(),
        }
    }

    /// Create a reply to an existing comment on the same board.
    pub fn reply(
        board_id: i64,
        member_id: i64,
        parent_id: i64,
        content: impl Into<String>,
    ) -> Self {
        Self {
            parent_id: Some(parent_id),
            ..Self::new(board_id, member_id, content)
        }
    }
}
