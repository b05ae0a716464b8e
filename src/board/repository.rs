//! Board repository.
//!
//! Generic CRUD for boards plus the three author-centric queries: paged
//! listing by member, eager fetch with comments and count by member.

use sqlx::QueryBuilder;
use tracing::debug;

use super::comment::Comment;
use super::types::{Board, BoardUpdate, BoardWithComments, NewBoard};
use crate::db::DbPool;
use crate::page::{Page, PageRequest, Sort};
use crate::{HunminError, Result};

/// Column list and joins shared by every board read.
pub(super) const BOARD_SELECT: &str =
    "SELECT b.id AS id, b.member_id AS member_id, m.nickname AS nickname,
            b.title AS title, b.content AS content, b.location AS location,
            b.latitude AS latitude, b.longitude AS longitude,
            b.created_at AS created_at, b.updated_at AS updated_at
     FROM boards b
     JOIN members m ON m.id = b.member_id";

/// Repository for board operations.
pub struct BoardRepository<'a> {
    pool: &'a DbPool,
}

impl<'a> BoardRepository<'a> {
    /// Create a new BoardRepository with the given database pool reference.
    pub fn new(pool: &'a DbPool) -> Self {
        Self { pool }
    }

    pub(super) fn pool(&self) -> &'a DbPool {
        self.pool
    }

    /// Create a new board.
    ///
    /// Returns the created board with the assigned ID.
    pub async fn create(&self, new_board: &NewBoard) -> Result<Board> {
        if new_board.title.trim().is_empty() {
            return Err(HunminError::Validation("title must not be empty".to_string()));
        }

        let id: i64 = sqlx::query_scalar(
            "INSERT INTO boards (member_id, title, content, location, latitude, longitude)
             VALUES (?, ?, ?, ?, ?, ?) RETURNING id",
        )
        .bind(new_board.member_id)
        .bind(&new_board.title)
        .bind(&new_board.content)
        .bind(&new_board.location)
        .bind(new_board.latitude)
        .bind(new_board.longitude)
        .fetch_one(self.pool)
        .await?;

        debug!(board_id = id, member_id = new_board.member_id, "board created");

        self.get_by_id(id)
            .await?
            .ok_or_else(|| HunminError::NotFound("board".to_string()))
    }

    /// Get a board by ID.
    pub async fn get_by_id(&self, id: i64) -> Result<Option<Board>> {
        let sql = format!("{BOARD_SELECT} WHERE b.id = ?");
        let board = sqlx::query_as::<_, Board>(&sql)
            .bind(id)
            .fetch_optional(self.pool)
            .await?;

        Ok(board)
    }

    /// Update a board by ID.
    ///
    /// Only fields that are set in the update will be modified, and
    /// `updated_at` is stamped. Returns the updated board, or None if not found.
    pub async fn update(&self, id: i64, update: &BoardUpdate) -> Result<Option<Board>> {
        if update.is_empty() {
            return self.get_by_id(id).await;
        }
        if let Some(ref title) = update.title {
            if title.trim().is_empty() {
                return Err(HunminError::Validation("title must not be empty".to_string()));
            }
        }

        let mut query: QueryBuilder<sqlx::Sqlite> = QueryBuilder::new("UPDATE boards SET ");
        let mut separated = query.separated(", ");

        if let Some(ref title) = update.title {
            separated.push("title = ");
            separated.push_bind_unseparated(title.clone());
        }
        if let Some(ref content) = update.content {
            separated.push("content = ");
            separated.push_bind_unseparated(content.clone());
        }
        if let Some(ref location) = update.location {
            separated.push("location = ");
            separated.push_bind_unseparated(location.clone());
        }
        if let Some(coordinates) = update.coordinates {
            separated.push("latitude = ");
            separated.push_bind_unseparated(coordinates.map(|(lat, _)| lat));
            separated.push("longitude = ");
            separated.push_bind_unseparated(coordinates.map(|(_, lng)| lng));
        }
        separated.push("updated_at = datetime('now')");

        query.push(" WHERE id = ");
        query.push_bind(id);

        let result = query.build().execute(self.pool).await?;

        if result.rows_affected() == 0 {
            return Ok(None);
        }

        self.get_by_id(id).await
    }

    /// Delete a board by ID, together with its comments.
    ///
    /// Returns true if a board was deleted, false if not found.
    pub async fn delete(&self, id: i64) -> Result<bool> {
        let result = sqlx::query("DELETE FROM boards WHERE id = ?")
            .bind(id)
            .execute(self.pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }

    /// Check whether a board exists.
    pub async fn exists(&self, id: i64) -> Result<bool> {
        let exists: bool = sqlx::query_scalar("SELECT EXISTS(SELECT 1 FROM boards WHERE id = ?)")
            .bind(id)
            .fetch_one(self.pool)
            .await?;
        Ok(exists)
    }

    /// Count all boards.
    pub async fn count(&self) -> Result<i64> {
        let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM boards")
            .fetch_one(self.pool)
            .await?;
        Ok(count)
    }

    /// List one page of all boards.
    pub async fn find_all(&self, request: &PageRequest) -> Result<Page<Board>> {
        let total = self.count().await?;
        if total == 0 {
            return Ok(Page::empty(request));
        }

        let sql = format!(
            "{BOARD_SELECT} {} LIMIT ? OFFSET ?",
            Sort::order_by_clause(request.sort())
        );
        let boards = sqlx::query_as::<_, Board>(&sql)
            .bind(request.limit())
            .bind(request.offset())
            .fetch_all(self.pool)
            .await?;

        Ok(Page::new(boards, request, total as u64))
    }

    /// List one page of the boards written by a member.
    ///
    /// Unknown members and members without boards yield an empty page.
    pub async fn find_by_member_id(
        &self,
        member_id: i64,
        request: &PageRequest,
    ) -> Result<Page<Board>> {
        let total = self.count_by_member_id(member_id).await?;
        if total == 0 {
            return Ok(Page::empty(request));
        }

        let sql = format!(
            "{BOARD_SELECT} WHERE b.member_id = ? {} LIMIT ? OFFSET ?",
            Sort::order_by_clause(request.sort())
        );
        let boards = sqlx::query_as::<_, Board>(&sql)
            .bind(member_id)
            .bind(request.limit())
            .bind(request.offset())
            .fetch_all(self.pool)
            .await?;

        debug!(member_id, %request, returned = boards.len(), total, "boards by member");
        Ok(Page::new(boards, request, total as u64))
    }

    /// Fetch a board together with all of its comments in one query.
    ///
    /// Returns None if the board does not exist. Comments are in insertion
    /// order.
    pub async fn find_with_comments(&self, board_id: i64) -> Result<Option<BoardWithComments>> {
        let rows: Vec<BoardCommentRow> = sqlx::query_as(
            "SELECT b.id AS id, b.member_id AS member_id, bm.nickname AS nickname,
                    b.title AS title, b.content AS content, b.location AS location,
                    b.latitude AS latitude, b.longitude AS longitude,
                    b.created_at AS created_at, b.updated_at AS updated_at,
                    c.id AS comment_id, c.member_id AS comment_member_id,
                    cm.nickname AS comment_nickname, c.parent_id AS comment_parent_id,
                    c.content AS comment_content, c.created_at AS comment_created_at,
                    c.updated_at AS comment_updated_at
             FROM boards b
             JOIN members bm ON bm.id = b.member_id
             LEFT JOIN comments c ON c.board_id = b.id
             LEFT JOIN members cm ON cm.id = c.member_id
             WHERE b.id = ?
             ORDER BY c.id ASC",
        )
        .bind(board_id)
        .fetch_all(self.pool)
        .await?;

        Ok(BoardCommentRow::fold(rows))
    }

    /// Count the boards written by a member.
    pub async fn count_by_member_id(&self, member_id: i64) -> Result<i64> {
        let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM boards WHERE member_id = ?")
            .bind(member_id)
            .fetch_one(self.pool)
            .await?;
        Ok(count)
    }
}

/// One row of the board/comment join: board columns repeat, comment columns
/// are NULL when the board has no comments.
#[derive(sqlx::FromRow)]
struct BoardCommentRow {
    id: i64,
    member_id: i64,
    nickname: String,
    title: String,
    content: String,
    location: Option<String>,
    latitude: Option<f64>,
    longitude: Option<f64>,
    created_at: String,
    updated_at: Option<String>,
    comment_id: Option<i64>,
    comment_member_id: Option<i64>,
    comment_nickname: Option<String>,
    comment_parent_id: Option<i64>,
    comment_content: Option<String>,
    comment_created_at: Option<String>,
    comment_updated_at: Option<String>,
}

impl BoardCommentRow {
    fn fold(rows: Vec<BoardCommentRow>) -> Option<BoardWithComments> {
        let mut rows = rows.into_iter();
        let first = rows.next()?;

        let mut comments = Vec::new();
        let board = first.board();
        comments.extend(first.into_comment());
        comments.extend(rows.filter_map(BoardCommentRow::into_comment));

        Some(BoardWithComments { board, comments })
    }

    fn board(&self) -> Board {
        Board {
            id: self.id,
            member_id: self.member_id,
            nickname: self.nickname.clone(),
            title: self.title.clone(),
            content: self.content.clone(),
            location: self.location.clone(),
            latitude: self.latitude,
            longitude: self.longitude,
            created_at: self.created_at.clone(),
            updated_at: self.updated_at.clone(),
        }
    }

    fn into_comment(self) -> Option<Comment> {
        let id = self.comment_id?;
        Some(Comment {
            id,
            board_id: self.id,
            member_id: self.comment_member_id.unwrap_or_default(),
            nickname: self.comment_nickname.unwrap_or_default(),
            parent_id: self.comment_parent_id,
            content: self.comment_content.unwrap_or_default(),
            created_at: self.comment_created_at.unwrap_or_default(),
            updated_at: self.comment_updated_at,
        })
    }
}
