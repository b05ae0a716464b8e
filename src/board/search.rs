//! Board search.
//!
//! Keyword and location search over boards, exposed as an extension trait so
//! that other board stores can provide their own implementation.

use std::future::Future;

use sqlx::{QueryBuilder, Sqlite};

use super::repository::{BoardRepository, BOARD_SELECT};
use super::types::Board;
use crate::page::{Page, PageRequest, Sort};
use crate::Result;

/// Filters for a board search. Unset filters match everything.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct BoardSearchCondition {
    keyword: Option<String>,
    location: Option<String>,
    member_id: Option<i64>,
}

impl BoardSearchCondition {
    pub fn new() -> Self {
        Self::default()
    }

    /// Match boards whose title or content contains the keyword
    /// (case-insensitive). Blank keywords are ignored.
    pub fn keyword(mut self, keyword: impl Into<String>) -> Self {
        self.keyword = non_blank(keyword.into());
        self
    }

    /// Match boards whose location contains the text. Blank text is ignored.
    pub fn location(mut self, location: impl Into<String>) -> Self {
        self.location = non_blank(location.into());
        self
    }

    /// Restrict to boards written by one member.
    pub fn member_id(mut self, member_id: i64) -> Self {
        self.member_id = Some(member_id);
        self
    }

    pub fn is_empty(&self) -> bool {
        self.keyword.is_none() && self.location.is_none() && self.member_id.is_none()
    }

    fn push_where(&self, query: &mut QueryBuilder<'_, Sqlite>) {
        query.push(" WHERE 1 = 1");

        if let Some(ref keyword) = self.keyword {
            let pattern = like_pattern(keyword);
            query.push(" AND (b.title LIKE ");
            query.push_bind(pattern.clone());
            query.push(" ESCAPE '\\' OR b.content LIKE ");
            query.push_bind(pattern);
            query.push(" ESCAPE '\\')");
        }
        if let Some(ref location) = self.location {
            query.push(" AND b.location LIKE ");
            query.push_bind(like_pattern(location));
            query.push(" ESCAPE '\\'");
        }
        if let Some(member_id) = self.member_id {
            query.push(" AND b.member_id = ");
            query.push_bind(member_id);
        }
    }
}

fn non_blank(value: String) -> Option<String> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.to_string())
    }
}

/// Wrap text in `%` for a substring LIKE, escaping LIKE metacharacters.
fn like_pattern(text: &str) -> String {
    let mut pattern = String::with_capacity(text.len() + 2);
    pattern.push('%');
    for ch in text.chars() {
        if matches!(ch, '\\' | '%' | '_') {
            pattern.push('\\');
        }
        pattern.push(ch);
    }
    pattern.push('%');
    pattern
}

/// Custom search over boards.
pub trait BoardSearch {
    /// Find one page of boards matching the condition.
    fn search(
        &self,
        condition: &BoardSearchCondition,
        request: &PageRequest,
    ) -> impl Future<Output = Result<Page<Board>>> + Send;
}

impl BoardSearch for BoardRepository<'_> {
    async fn search(
        &self,
        condition: &BoardSearchCondition,
        request: &PageRequest,
    ) -> Result<Page<Board>> {
        let mut count_query: QueryBuilder<Sqlite> =
            QueryBuilder::new("SELECT COUNT(*) FROM boards b");
        condition.push_where(&mut count_query);
        let total: i64 = count_query
            .build_query_scalar()
            .fetch_one(self.pool())
            .await?;

        if total == 0 {
            return Ok(Page::empty(request));
        }

        let mut query: QueryBuilder<Sqlite> = QueryBuilder::new(BOARD_SELECT);
        condition.push_where(&mut query);
        query.push(" ");
        query.push(Sort::order_by_clause(request.sort()));
        query.push(" LIMIT ");
        query.push_bind(request.limit());
        query.push(" OFFSET ");
        query.push_bind(request.offset());

        let boards: Vec<Board> = query.build_query_as().fetch_all(self.pool()).await?;

        Ok(Page::new(boards, request, total as u64))
    }
}
