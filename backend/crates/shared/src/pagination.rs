//! Pagination
//!
//! [`PageRequest`] is validated input; [`Paginated<T>`] is a list payload with
//! its page metadata. The metadata only ever exists inside the success branch
//! of a `Result<Paginated<T>, E>`.

use serde::Serialize;

use crate::error::domain_error::DomainError;
use crate::error::field_errors::FieldErrors;

/// `ceil(total / limit)`; zero when there is nothing to page
#[inline]
pub const fn total_pages(total: u64, limit: u32) -> u64 {
    if limit == 0 {
        return 0;
    }
    total.div_ceil(limit as u64)
}

/// Validated page coordinates (1-based page)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageRequest {
    page: u32,
    limit: u32,
}

impl PageRequest {
    /// Validate `page >= 1` and `1 <= limit <= max_limit`
    pub fn new(page: u32, limit: u32, max_limit: u32) -> Result<Self, DomainError> {
        let mut errors = FieldErrors::new();
        if page == 0 {
            errors.add("page", "Page must be at least 1");
        }
        if limit == 0 {
            errors.add("limit", "Limit must be at least 1");
        } else if limit > max_limit {
            errors.add("limit", format!("Limit must be at most {}", max_limit));
        }
        errors.into_result()?;
        Ok(Self { page, limit })
    }

    #[inline]
    pub const fn page(&self) -> u32 {
        self.page
    }

    #[inline]
    pub const fn limit(&self) -> u32 {
        self.limit
    }

    /// Number of items to skip
    #[inline]
    pub const fn offset(&self) -> u64 {
        (self.page as u64 - 1) * self.limit as u64
    }
}

/// Page metadata
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PageMeta {
    pub page: u32,
    pub limit: u32,
    pub total: u64,
    pub total_pages: u64,
}

impl PageMeta {
    pub const fn new(request: &PageRequest, total: u64) -> Self {
        Self {
            page: request.page,
            limit: request.limit,
            total,
            total_pages: total_pages(total, request.limit),
        }
    }

    pub const fn has_next(&self) -> bool {
        (self.page as u64) < self.total_pages
    }
}

/// Successful list payload with page metadata
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Paginated<T> {
    items: Vec<T>,
    #[serde(flatten)]
    meta: PageMeta,
}

impl<T> Paginated<T> {
    pub fn new(items: Vec<T>, request: &PageRequest, total: u64) -> Self {
        Self {
            items,
            meta: PageMeta::new(request, total),
        }
    }

    pub fn items(&self) -> &[T] {
        &self.items
    }

    pub const fn meta(&self) -> &PageMeta {
        &self.meta
    }

    /// Convert items, keeping metadata
    pub fn map<U>(self, f: impl FnMut(T) -> U) -> Paginated<U> {
        Paginated {
            items: self.items.into_iter().map(f).collect(),
            meta: self.meta,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_total_pages_boundaries() {
        assert_eq!(total_pages(0, 10), 0);
        assert_eq!(total_pages(1, 10), 1);
        assert_eq!(total_pages(10, 10), 1);
        assert_eq!(total_pages(11, 10), 2);
        assert_eq!(total_pages(100, 20), 5);
        assert_eq!(total_pages(101, 20), 6);
    }

    #[test]
    fn test_total_pages_matches_ceil() {
        for total in 0..200u64 {
            for limit in 1..25u32 {
                let expected = (total + limit as u64 - 1) / limit as u64;
                assert_eq!(total_pages(total, limit), expected);
            }
        }
    }

    #[test]
    fn test_page_request_validation() {
        assert!(PageRequest::new(1, 20, 100).is_ok());
        assert!(PageRequest::new(3, 100, 100).is_ok());

        let err = PageRequest::new(0, 0, 100).unwrap_err();
        let fields = err.field_errors().unwrap();
        assert!(fields.contains("page"));
        assert!(fields.contains("limit"));

        let err = PageRequest::new(1, 101, 100).unwrap_err();
        assert!(err.field_errors().unwrap().contains("limit"));
    }

    #[test]
    fn test_offset() {
        assert_eq!(PageRequest::new(1, 20, 100).unwrap().offset(), 0);
        assert_eq!(PageRequest::new(3, 20, 100).unwrap().offset(), 40);
    }

    #[test]
    fn test_paginated_meta_and_map() {
        let request = PageRequest::new(2, 2, 10).unwrap();
        let page = Paginated::new(vec![3, 4], &request, 5);
        assert_eq!(page.meta().total_pages, 3);
        assert!(page.meta().has_next());

        let mapped = page.map(|n| n.to_string());
        assert_eq!(mapped.items(), ["3".to_string(), "4".to_string()]);
        assert_eq!(mapped.meta().total, 5);
    }

    #[test]
    fn test_serialize_flattens_meta() {
        let request = PageRequest::new(1, 10, 10).unwrap();
        let page = Paginated::new(vec!["a"], &request, 1);
        let json = serde_json::to_value(&page).unwrap();
        assert_eq!(
            json,
            serde_json::json!({
                "items": ["a"],
                "page": 1,
                "limit": 10,
                "total": 1,
                "totalPages": 1
            })
        );
    }
}
