//! Shared helpers for integration tests.

#![allow(dead_code)]

use hunmin_board::{
    BoardRepository, CommentRepository, Database, MemberRepository, NewBoard, NewComment,
    NewMember,
};

/// Open a fresh in-memory database.
pub async fn setup_db() -> Database {
    Database::open_in_memory().await.unwrap()
}

/// Create a member and return its ID.
pub async fn create_member(db: &Database, nickname: &str) -> i64 {
    MemberRepository::new(db.pool())
        .create(&NewMember::new(format!("{nickname}@example.com"), nickname))
        .await
        .unwrap()
        .id
}

/// Create `count` boards for a member titled "{prefix} 0", "{prefix} 1", ...
/// and return their IDs in creation order.
pub async fn create_boards(db: &Database, member_id: i64, prefix: &str, count: usize) -> Vec<i64> {
    let repo = BoardRepository::new(db.pool());
    let mut ids = Vec::with_capacity(count);
    for i in 0..count {
        let board = repo
            .create(&NewBoard::new(member_id, format!("{prefix} {i}"), "body"))
            .await
            .unwrap();
        ids.push(board.id);
    }
    ids
}

/// Add `count` top-level comments to a board and return their IDs.
pub async fn create_comments(
    db: &Database,
    board_id: i64,
    member_id: i64,
    count: usize,
) -> Vec<i64> {
    let repo = CommentRepository::new(db.pool());
    let mut ids = Vec::with_capacity(count);
    for i in 0..count {
        let comment = repo
            .create(&NewComment::new(board_id, member_id, format!("comment {i}")))
            .await
            .unwrap();
        ids.push(comment.id);
    }
    ids
}
