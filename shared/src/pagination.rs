//! Paginated list responses

use serde::{Deserialize, Serialize};

/// Page query parameter (`?page=N`, 1-based)
#[derive(Debug, Clone, Copy, Deserialize)]
pub struct PageQuery {
    #[serde(default = "default_page")]
    pub page: u32,
}

fn default_page() -> u32 {
    1
}

impl Default for PageQuery {
    fn default() -> Self {
        Self { page: 1 }
    }
}

impl PageQuery {
    /// Row offset of this page for the given page size
    pub fn offset(&self, limit: u32) -> u32 {
        self.page.saturating_sub(1).saturating_mul(limit)
    }
}

/// One page of a list
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PaginatedResponse<T> {
    pub data: Vec<T>,
    /// Total number of rows across all pages
    pub total: u64,
    pub page: u32,
    pub limit: u32,
    pub total_pages: u32,
}

impl<T> PaginatedResponse<T> {
    pub fn new(data: Vec<T>, total: u64, page: u32, limit: u32) -> Self {
        let total_pages = if limit > 0 {
            total.div_ceil(limit as u64) as u32
        } else {
            1
        };

        Self {
            data,
            total,
            page,
            limit,
            total_pages,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_paginated_response() {
        let resp = PaginatedResponse::new(vec![1, 2, 3, 4], 9, 1, 4);
        assert_eq!(resp.total, 9);
        assert_eq!(resp.total_pages, 3);

        let empty: PaginatedResponse<i32> = PaginatedResponse::new(vec![], 0, 1, 4);
        assert_eq!(empty.total_pages, 0);
    }

    #[test]
    fn test_page_query_offset() {
        assert_eq!(PageQuery { page: 1 }.offset(4), 0);
        assert_eq!(PageQuery { page: 3 }.offset(4), 8);
        assert_eq!(PageQuery { page: 0 }.offset(4), 0);
    }

    #[test]
    fn test_page_query_default() {
        let q: PageQuery = serde_json::from_str("{}").unwrap();
        assert_eq!(q.page, 1);
    }
}
