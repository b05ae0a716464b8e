//! Page descriptors and page results.
//!
//! `PageRequest` is what callers hand to the listing queries; `Page<T>` is
//! the bounded result with the metadata needed to render pagination.

use std::fmt;

use serde::Serialize;

use crate::{HunminError, Result};

/// Sort direction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortDirection {
    #[default]
    Asc,
    Desc,
}

impl SortDirection {
    /// SQL keyword for this direction.
    pub fn as_sql(&self) -> &'static str {
        match self {
            SortDirection::Asc => "ASC",
            SortDirection::Desc => "DESC",
        }
    }
}

/// Board columns a listing may be sorted by.
///
/// This is a closed set so that `ORDER BY` clauses are never assembled from
/// caller text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum BoardSortField {
    #[default]
    Id,
    CreatedAt,
    UpdatedAt,
    Title,
}

impl BoardSortField {
    /// Qualified column name in the board listing queries.
    pub fn column(&self) -> &'static str {
        match self {
            BoardSortField::Id => "b.id",
            BoardSortField::CreatedAt => "b.created_at",
            BoardSortField::UpdatedAt => "b.updated_at",
            BoardSortField::Title => "b.title",
        }
    }
}

/// Sort specification for board listings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Sort {
    pub field: BoardSortField,
    pub direction: SortDirection,
}

impl Sort {
    pub fn asc(field: BoardSortField) -> Self {
        Self {
            field,
            direction: SortDirection::Asc,
        }
    }

    pub fn desc(field: BoardSortField) -> Self {
        Self {
            field,
            direction: SortDirection::Desc,
        }
    }

    /// Render the `ORDER BY` clause for an optional sort.
    ///
    /// Unsorted listings order by id ascending; sorted listings get id
    /// ascending appended as tie-breaker so pages never overlap.
    pub fn order_by_clause(sort: Option<&Sort>) -> String {
        match sort {
            None => "ORDER BY b.id ASC".to_string(),
            Some(sort) if sort.field == BoardSortField::Id => {
                format!("ORDER BY b.id {}", sort.direction.as_sql())
            }
            Some(sort) => format!(
                "ORDER BY {} {}, b.id ASC",
                sort.field.column(),
                sort.direction.as_sql()
            ),
        }
    }
}

/// Pagination request: zero-based page index, page size and optional sort.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageRequest {
    page: u32,
    size: u32,
    sort: Option<Sort>,
}

impl PageRequest {
    /// Create a page request. The size must be positive.
    pub fn new(page: u32, size: u32) -> Result<Self> {
        if size == 0 {
            return Err(HunminError::Validation(
                "page size must be greater than zero".to_string(),
            ));
        }
        Ok(Self {
            page,
            size,
            sort: None,
        })
    }

    /// Create a page request from known-good values; a zero size becomes 1.
    pub fn of(page: u32, size: u32) -> Self {
        Self {
            page,
            size: size.max(1),
            sort: None,
        }
    }

    /// Set the sort specification.
    pub fn with_sort(mut self, sort: Sort) -> Self {
        self.sort = Some(sort);
        self
    }

    pub fn page(&self) -> u32 {
        self.page
    }

    pub fn size(&self) -> u32 {
        self.size
    }

    pub fn sort(&self) -> Option<&Sort> {
        self.sort.as_ref()
    }

    /// Row offset for SQL `OFFSET`.
    pub fn offset(&self) -> i64 {
        i64::from(self.page).saturating_mul(i64::from(self.size))
    }

    /// Row count for SQL `LIMIT`.
    pub fn limit(&self) -> i64 {
        i64::from(self.size)
    }

    /// The request for the following page.
    pub fn next(&self) -> Self {
        Self {
            page: self.page.saturating_add(1),
            ..self.clone()
        }
    }
}

impl fmt::Display for PageRequest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "page={} size={}", self.page, self.size)
    }
}

/// A page of results plus totals.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Page<T> {
    /// Items on this page.
    pub content: Vec<T>,
    /// Zero-based page index.
    pub page: u32,
    /// Requested page size.
    pub size: u32,
    /// Number of matching items across all pages.
    pub total_elements: u64,
    /// Number of pages needed for `total_elements`.
    pub total_pages: u64,
}

impl<T> Page<T> {
    pub fn new(content: Vec<T>, request: &PageRequest, total_elements: u64) -> Self {
        let size = u64::from(request.size());
        Self {
            content,
            page: request.page(),
            size: request.size(),
            total_elements,
            total_pages: total_elements.div_ceil(size),
        }
    }

    pub fn empty(request: &PageRequest) -> Self {
        Self::new(Vec::new(), request, 0)
    }

    pub fn number_of_elements(&self) -> usize {
        self.content.len()
    }

    pub fn is_empty(&self) -> bool {
        self.content.is_empty()
    }

    pub fn is_first(&self) -> bool {
        self.page == 0
    }

    pub fn is_last(&self) -> bool {
        !self.has_next()
    }

    pub fn has_next(&self) -> bool {
        u64::from(self.page) + 1 < self.total_pages
    }

    pub fn has_previous(&self) -> bool {
        self.page > 0
    }

    /// Transform the content while keeping the page metadata.
    pub fn map<U, F>(self, f: F) -> Page<U>
    where
        F: FnMut(T) -> U,
    {
        Page {
            content: self.content.into_iter().map(f).collect(),
            page: self.page,
            size: self.size,
            total_elements: self.total_elements,
            total_pages: self.total_pages,
        }
    }
}
