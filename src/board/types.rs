//! Board model.
//!
//! This module defines the Board entity and the value types used to create,
//! edit and eagerly load it.

use serde::Serialize;

use super::comment::Comment;

/// Board entity: a single authored post.
#[derive(Debug, Clone, PartialEq, sqlx::FromRow, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Board {
    /// Unique board ID.
    pub id: i64,
    /// ID of the owning member.
    pub member_id: i64,
    /// Owner's nickname, joined from members.
    pub nickname: String,
    /// Board title.
    pub title: String,
    /// Board body.
    pub content: String,
    /// Free-form place name.
    pub location: Option<String>,
    pub latitude: Option<f64>,
    pub longitude: Option<f64>,
    /// Creation timestamp.
    pub created_at: String,
    /// Last edit timestamp (None until the board is edited).
    pub updated_at: Option<String>,
}

impl Board {
    /// Check whether the board has been edited since creation.
    pub fn is_edited(&self) -> bool {
        self.updated_at.is_some()
    }

    /// Timestamp to display: last edit if any, otherwise creation.
    pub fn display_date(&self) -> &str {
        self.updated_at.as_deref().unwrap_or(&self.created_at)
    }

    /// Latitude/longitude pair when both are present.
    pub fn coordinates(&self) -> Option<(f64, f64)> {
        self.latitude.zip(self.longitude)
    }

    /// Check whether the given member owns this board.
    pub fn is_owned_by(&self, member_id: i64) -> bool {
        self.member_id == member_id
    }
}

/// A board with its complete comment collection.
///
/// Produced by a single query; the comments are owned values, so reading
/// them never goes back to the database.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BoardWithComments {
    #[serde(flatten)]
    pub board: Board,
    /// Comments in insertion order.
    pub comments: Vec<Comment>,
}

impl BoardWithComments {
    pub fn comment_count(&self) -> usize {
        self.comments.len()
    }

    /// Comments that reply directly to the board rather than another comment.
    pub fn top_level_comments(&self) -> impl Iterator<Item = &Comment> {
        self.comments.iter().filter(|c| c.parent_id.is_none())
    }

    /// Direct replies to the given comment, in insertion order.
    pub fn replies_to(&self, comment_id: i64) -> impl Iterator<Item = &Comment> {
        self.comments
            .iter()
            .filter(move |c| c.parent_id == Some(comment_id))
    }
}

/// Data for creating a new board.
#[derive(Debug, Clone)]
pub struct NewBoard {
    pub member_id: i64,
    pub title: String,
    pub content: String,
    pub location: Option<String>,
    pub latitude: Option<f64>,
    pub longitude: Option<f64>,
}

impl NewBoard {
    /// Create a new board with the required fields.
    pub fn new(member_id: i64, title: impl Into<String>, content: impl Into<String>) -> Self {
        Self {
            member_id,
            title: title.into(),
            content: content.into(),
            location: None,
            latitude: None,
            longitude: None,
        }
    }

    /// Set the place name.
    pub fn with_location(mut self, location: impl Into<String>) -> Self {
        self.location = Some(location.into());
        self
    }

    /// Set the map coordinates.
    pub fn with_coordinates(mut self, latitude: f64, longitude: f64) -> Self {
        self.latitude = Some(latitude);
        self.longitude = Some(longitude);
        self
    }
}

/// Data for updating an existing board.
#[derive(Debug, Clone, Default)]
pub struct BoardUpdate {
    /// New title.
    pub title: Option<String>,
    /// New content.
    pub content: Option<String>,
    /// New location (Some(None) clears it).
    pub location: Option<Option<String>>,
    /// New coordinates (Some(None) clears both).
    pub coordinates: Option<Option<(f64, f64)>>,
}

impl BoardUpdate {
    /// Create an empty update.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    pub fn content(mut self, content: impl Into<String>) -> Self {
        self.content = Some(content.into());
        self
    }

    pub fn location(mut self, location: Option<String>) -> Self {
        self.location = Some(location);
        self
    }

    pub fn coordinates(mut self, coordinates: Option<(f64, f64)>) -> Self {
        self.coordinates = Some(coordinates);
        self
    }

    /// Check if any fields are set.
    pub fn is_empty(&self) -> bool {
        self.title.is_none()
            && self.content.is_none()
            && self.location.is_none()
            && self.coordinates.is_none()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_board() -> Board {
        Board {
            id: 1,
            member_id: 7,
            nickname: "kim".to_string(),
            title: "Study group".to_string(),
            content: "Hangul every Tuesday".to_string(),
            location: Some("Seoul".to_string()),
            latitude: Some(37.5665),
            longitude: Some(126.978),
            created_at: "2024-01-01 10:00:00".to_string(),
            updated_at: None,
        }
    }

    fn sample_comment(id: i64, parent_id: Option<i64>) -> Comment {
        Comment {
            id,
            board_id: 1,
            member_id: 7,
            nickname: "kim".to_string(),
            parent_id,
            content: format!("comment {id}"),
            created_at: "2024-01-01 11:00:00".to_string(),
            updated_at: None,
        }
    }

    #[test]
    fn test_display_date() {
        let mut board = sample_board();
        assert!(!board.is_edited());
        assert_eq!(board.display_date(), "2024-01-01 10:00:00");

        board.updated_at = Some("2024-01-02 09:00:00".to_string());
        assert!(board.is_edited());
        assert_eq!(board.display_date(), "2024-01-02 09:00:00");
    }

    #[test]
    fn test_coordinates() {
        let mut board = sample_board();
        assert_eq!(board.coordinates(), Some((37.5665, 126.978)));

        board.longitude = None;
        assert_eq!(board.coordinates(), None);
    }

    #[test]
    fn test_is_owned_by() {
        let board = sample_board();
        assert!(board.is_owned_by(7));
        assert!(!board.is_owned_by(8));
    }

    #[test]
    fn test_comment_tree_helpers() {
        let loaded = BoardWithComments {
            board: sample_board(),
            comments: vec![
                sample_comment(1, None),
                sample_comment(2, Some(1)),
                sample_comment(3, None),
                sample_comment(4, Some(1)),
            ],
        };

        assert_eq!(loaded.comment_count(), 4);
        let top: Vec<i64> = loaded.top_level_comments().map(|c| c.id).collect();
        assert_eq!(top, vec![1, 3]);
        let replies: Vec<i64> = loaded.replies_to(1).map(|c| c.id).collect();
        assert_eq!(replies, vec![2, 4]);
        assert_eq!(loaded.replies_to(3).count(), 0);
    }

    #[test]
    fn test_board_with_comments_serializes_flat() {
        let loaded = BoardWithComments {
            board: sample_board(),
            comments: vec![sample_comment(1, None)],
        };
        let json = serde_json::to_value(&loaded).unwrap();

        assert_eq!(json["id"], 1);
        assert_eq!(json["memberId"], 7);
        assert_eq!(json["title"], "Study group");
        assert_eq!(json["comments"][0]["content"], "comment 1");
    }

    #[test]
    fn test_new_board_builder() {
        let board = NewBoard::new(3, "Title", "Body")
            .with_location("Busan")
            .with_coordinates(35.1, 129.0);

        assert_eq!(board.member_id, 3);
        assert_eq!(board.location, Some("Busan".to_string()));
        assert_eq!(board.latitude, Some(35.1));
        assert_eq!(board.longitude, Some(129.0));
    }

    #[test]
    fn test_board_update_is_empty() {
        assert!(BoardUpdate::new().is_empty());
        assert!(!BoardUpdate::new().title("t").is_empty());
        assert!(!BoardUpdate::new().location(None).is_empty());
        assert!(!BoardUpdate::new().coordinates(None).is_empty());
    }
}
