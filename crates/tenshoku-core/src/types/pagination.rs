//! Pagination types for list endpoints.

use serde::{Deserialize, Serialize};

/// Request parameters for paginated queries, already clamped.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PageRequest {
    /// Page number (1-based).
    pub page: u64,
    /// Number of items per page.
    pub limit: u64,
}

impl PageRequest {
    /// Create a page request, clamping `page` to at least 1 and `limit`
    /// to `1..=max_limit`.
    pub fn new(page: u64, limit: u64, max_limit: u64) -> Self {
        Self {
            page: page.max(1),
            limit: limit.clamp(1, max_limit.max(1)),
        }
    }

    /// Index of the first item on this page.
    pub fn offset(&self) -> u64 {
        self.page.saturating_sub(1).saturating_mul(self.limit)
    }
}

/// Pagination metadata returned next to a page of items.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Pagination {
    /// Current page number (1-based).
    pub page: u64,
    /// Number of items per page.
    pub limit: u64,
    /// Total number of matching items.
    pub total: u64,
    /// Total number of pages; `0` when nothing matched.
    pub total_pages: u64,
    /// Whether a later page exists.
    pub has_more: bool,
}

impl Pagination {
    /// Compute pagination metadata for a page over `total` items.
    pub fn new(request: &PageRequest, total: u64) -> Self {
        let total_pages = total.div_ceil(request.limit);
        Self {
            page: request.page,
            limit: request.limit,
            total,
            total_pages,
            has_more: request.page < total_pages,
        }
    }
}

/// A page of items with its pagination metadata.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PageResponse<T> {
    /// The items on this page.
    pub items: Vec<T>,
    /// Pagination metadata.
    pub pagination: Pagination,
}

impl<T> PageResponse<T> {
    /// Slice `all` according to `request`.
    pub fn paginate(all: Vec<T>, request: &PageRequest) -> Self {
        let total = all.len() as u64;
        let pagination = Pagination::new(request, total);
        let items = all
            .into_iter()
            .skip(usize::try_from(request.offset()).unwrap_or(usize::MAX))
            .take(usize::try_from(request.limit).unwrap_or(usize::MAX))
            .collect();
        Self { items, pagination }
    }
}
