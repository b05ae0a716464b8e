//! hunmin-board - board data access for the Hunmin community
//!
//! Boards, their comments and authors stored in SQLite through sqlx, with
//! paginated listings by author, eager loading of a board's comments and
//! per-author counts.

pub mod board;
pub mod config;
pub mod db;
pub mod error;
pub mod logging;
pub mod page;

pub use board::{
    Board, BoardRepository, BoardSearch, BoardSearchCondition, BoardUpdate, BoardWithComments,
    Comment, CommentRepository, NewBoard, NewComment,
};
pub use config::Config;
pub use db::{Database, DbPool, Member, MemberRepository, NewMember};
pub use error::{HunminError, Result};
pub use page::{BoardSortField, Page, PageRequest, Sort, SortDirection};
