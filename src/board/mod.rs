//! Board module for hunmin-board.
//!
//! This module provides the board data-access layer:
//! - Board CRUD and the author-centric queries (boards by member, board with
//!   comments, board count by member)
//! - Keyword/location search through the `BoardSearch` extension
//! - Comment storage, including replies to other comments

mod comment;
mod comment_repository;
mod repository;
mod search;
mod types;

pub use comment::{Comment, NewComment};
pub use comment_repository::CommentRepository;
pub use repository::BoardRepository;
pub use search::{BoardSearch, BoardSearchCondition};
pub use types::{Board, BoardUpdate, BoardWithComments, NewBoard};
