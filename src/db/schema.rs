//! Database schema and migrations for hunmin-board.
//!
//! Migrations are applied in order when the database is opened; the
//! `schema_version` table records which ones have run.

/// Database migrations.
pub const MIGRATIONS: &[&str] = &[
    // v1: Members table
    r#"
-- Members own boards and comments
CREATE TABLE members (
    id          INTEGER PRIMARY KEY AUTOINCREMENT,
    email       TEXT NOT NULL UNIQUE COLLATE NOCASE,
    nickname    TEXT NOT NULL,
    created_at  TEXT NOT NULL DEFAULT (datetime('now'))
);
"#,
    // v2: Boards table
    r#"
-- Boards are authored posts; every board has exactly one owning member
CREATE TABLE boards (
    id          INTEGER PRIMARY KEY AUTOINCREMENT,
    member_id   INTEGER NOT NULL REFERENCES members(id),
    title       TEXT NOT NULL,
    content     TEXT NOT NULL,
    location    TEXT,
    latitude    REAL,
    longitude   REAL,
    created_at  TEXT NOT NULL DEFAULT (datetime('now')),
    updated_at  TEXT                                     -- NULL until first edit
);

CREATE INDEX idx_boards_member_id ON boards(member_id);
CREATE INDEX idx_boards_created_at ON boards(created_at);
"#,
    // v3: Comments table
    r#"
-- Comments on boards, optionally replying to another comment
CREATE TABLE comments (
    id          INTEGER PRIMARY KEY AUTOINCREMENT,
    board_id    INTEGER NOT NULL REFERENCES boards(id) ON DELETE CASCADE,
    member_id   INTEGER NOT NULL REFERENCES members(id),
    parent_id   INTEGER REFERENCES comments(id) ON DELETE CASCADE,
    content     TEXT NOT NULL,
    created_at  TEXT NOT NULL DEFAULT (datetime('now')),
    updated_at  TEXT
);

CREATE INDEX idx_comments_board_id ON comments(board_id);
CREATE INDEX idx_comments_parent_id ON comments(parent_id);
"#,
];
