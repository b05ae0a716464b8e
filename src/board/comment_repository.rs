//! Comment repository.
//!
//! This module provides create/read/update/delete operations for comments.

use tracing::debug;

use super::comment::{Comment, NewComment};
use crate::db::DbPool;
use crate::{HunminError, Result};

const COMMENT_SELECT: &str =
    "SELECT c.id AS id, c.board_id AS board_id, c.member_id AS member_id,
            m.nickname AS nickname, c.parent_id AS parent_id, c.content AS content,
            c.created_at AS created_at, c.updated_at AS updated_at
     FROM comments c
     JOIN members m ON m.id = c.member_id";

/// Repository for comment operations.
pub struct CommentRepository<'a> {
    pool: &'a DbPool,
}

impl<'a> CommentRepository<'a> {
    /// Create a new CommentRepository with the given database pool reference.
    pub fn new(pool: &'a DbPool) -> Self {
        Self { pool }
    }

    /// Create a new comment.
    ///
    /// A reply's parent must be a comment on the same board.
    pub async fn create(&self, new_comment: &NewComment) -> Result<Comment> {
        if new_comment.content.trim().is_empty() {
            return Err(HunminError::Validation(
                "comment content must not be empty".to_string(),
            ));
        }

        if let Some(parent_id) = new_comment.parent_id {
            let parent_board: Option<i64> =
                sqlx::query_scalar("SELECT board_id FROM comments WHERE id = ?")
                    .bind(parent_id)
                    .fetch_optional(self.pool)
                    .await?;

            if parent_board != Some(new_comment.board_id) {
                return Err(HunminError::Validation(format!(
                    "parent comment {parent_id} does not belong to board {}",
                    new_comment.board_id
                )));
            }
        }

        let id: i64 = sqlx::query_scalar(
            "INSERT INTO comments (board_id, member_id, parent_id, content)
             VALUES (?, ?, ?, ?) RETURNING id",
        )
        .bind(new_comment.board_id)
        .bind(new_comment.member_id)
        .bind(new_comment.parent_id)
        .bind(&new_comment.content)
        .fetch_one(self.pool)
        .await?;

        debug!(
            comment_id = id,
            board_id = new_comment.board_id,
            parent_id = ?new_comment.parent_id,
            "comment created"
        );

        self.get_by_id(id)
            .await?
            .ok_or_else(|| HunminError::NotFound("comment".to_string()))
    }

    /// Get a comment by ID.
    pub async fn get_by_id(&self, id: i64) -> Result<Option<Comment>> {
        let sql = format!("{COMMENT_SELECT} WHERE c.id = ?");
        let comment = sqlx::query_as::<_, Comment>(&sql)
            .bind(id)
            .fetch_optional(self.pool)
            .await?;

        Ok(comment)
    }

    /// Replace the content of a comment and stamp `updated_at`.
    ///
    /// Returns the updated comment, or None if not found.
    pub async fn update_content(&self, id: i64, content: &str) -> Result<Option<Comment>> {
        if content.trim().is_empty() {
            return Err(HunminError::Validation(
                "comment content must not be empty".to_string(),
            ));
        }

        let result = sqlx::query(
            "UPDATE comments SET content = ?, updated_at = datetime('now') WHERE id = ?",
        )
        .bind(content)
        .bind(id)
        .execute(self.pool)
        .await?;

        if result.rows_affected() == 0 {
            return Ok(None);
        }
        debug!(comment_id = id, "comment updated");

        self.get_by_id(id).await
    }

    /// Delete a comment and its replies.
    ///
    /// Returns true if a comment was deleted, false if not found.
    pub async fn delete(&self, id: i64) -> Result<bool> {
        let result = sqlx::query("DELETE FROM comments WHERE id = ?")
            .bind(id)
            .execute(self.pool)
            .await?;

        let deleted = result.rows_affected() > 0;
        if deleted {
            debug!(comment_id = id, "comment deleted");
        }
        Ok(deleted)
    }

    /// List the comments of a board in insertion order.
    pub async fn list_by_board(&self, board_id: i64) -> Result<Vec<Comment>> {
        let sql = format!("{COMMENT_SELECT} WHERE c.board_id = ? ORDER BY c.id ASC");
        let comments = sqlx::query_as::<_, Comment>(&sql)
            .bind(board_id)
            .fetch_all(self.pool)
            .await?;

        Ok(comments)
    }

    /// Count the comments of a board.
    pub async fn count_by_board(&self, board_id: i64) -> Result<i64> {
        let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM comments WHERE board_id = ?")
            .bind(board_id)
            .fetch_one(self.pool)
            .await?;
        Ok(count)
    }
}
