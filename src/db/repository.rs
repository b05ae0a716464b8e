//! Member repository.
//!
//! This module provides create/read/delete operations for members.

use super::member::{Member, NewMember};
use super::DbPool;
use crate::{HunminError, Result};

/// Repository for member operations.
pub struct MemberRepository<'a> {
    pool: &'a DbPool,
}

impl<'a> MemberRepository<'a> {
    /// Create a new MemberRepository with the given database pool reference.
    pub fn new(pool: &'a DbPool) -> Self {
        Self { pool }
    }

    /// Create a new member.
    ///
    /// Returns the created member with the assigned ID.
    pub async fn create(&self, new_member: &NewMember) -> Result<Member> {
        if new_member.email.trim().is_empty() {
            return Err(HunminError::Validation("email must not be empty".to_string()));
        }

        let id: i64 = sqlx::query_scalar(
            "INSERT INTO members (email, nickname) VALUES (?, ?) RETURNING id",
        )
        .bind(&new_member.email)
        .bind(&new_member.nickname)
        .fetch_one(self.pool)
        .await?;

        self.get_by_id(id)
            .await?
            .ok_or_else(|| HunminError::NotFound("member".to_string()))
    }

    /// Get a member by ID.
    pub async fn get_by_id(&self, id: i64) -> Result<Option<Member>> {
        let member = sqlx::query_as::<_, Member>(
            "SELECT id, email, nickname, created_at FROM members WHERE id = ?",
        )
        .bind(id)
        .fetch_optional(self.pool)
        .await?;

        Ok(member)
    }

    /// Get a member by email.
    ///
    /// The email column is declared `COLLATE NOCASE`, so the lookup and the
    /// uniqueness constraint both ignore ASCII case.
    pub async fn get_by_email(&self, email: &str) -> Result<Option<Member>> {
        let member = sqlx::query_as::<_, Member>(
            "SELECT id, email, nickname, created_at FROM members WHERE email = ?",
        )
        .bind(email)
        .fetch_optional(self.pool)
        .await?;

        Ok(member)
    }

    /// Delete a member by ID.
    ///
    /// Fails with a database error while the member still owns boards.
    pub async fn delete(&self, id: i64) -> Result<bool> {
        let result = sqlx::query("DELETE FROM members WHERE id = ?")
            .bind(id)
            .execute(self.pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
