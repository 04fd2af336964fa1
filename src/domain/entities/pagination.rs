//! Page requests and paginated results.

/// Largest page size a caller may request.
pub const MAX_PAGE_LIMIT: u32 = 100;

/// Reasons a page request is rejected.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum PageRequestError {
    #[error("Page must be at least 1, got {0}")]
    PageOutOfRange(u32),
    #[error("Limit must be between 1 and {max}, got {0}", max = MAX_PAGE_LIMIT)]
    LimitOutOfRange(u32),
}

/// A validated page request: `page >= 1`, `1 <= limit <= 100`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageRequest {
    page: u32,
    limit: u32,
}

impl PageRequest {
    pub fn new(page: u32, limit: u32) -> Result<Self, PageRequestError> {
        if page == 0 {
            return Err(PageRequestError::PageOutOfRange(page));
        }
        if limit == 0 || limit > MAX_PAGE_LIMIT {
            return Err(PageRequestError::LimitOutOfRange(limit));
        }
        Ok(Self { page, limit })
    }

    pub fn page(&self) -> u32 {
        self.page
    }

    pub fn limit(&self) -> u32 {
        self.limit
    }

    /// Number of items to skip: `(page - 1) * limit`.
    pub fn skip(&self) -> u64 {
        u64::from(self.page - 1) * u64::from(self.limit)
    }

    /// `ceil(total / limit)`
    pub fn total_pages(&self, total: u64) -> u64 {
        total.div_ceil(u64::from(self.limit))
    }
}

/// Metadata accompanying a page of results.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageMetadata {
    pub page: u32,
    pub limit: u32,
    pub total: u64,
    pub total_pages: u64,
}

/// One page of items plus its metadata.
#[derive(Debug, Clone, PartialEq)]
pub struct Paginated<T> {
    pub data: Vec<T>,
    pub metadata: PageMetadata,
}

impl<T> Paginated<T> {
    pub fn new(data: Vec<T>, request: PageRequest, total: u64) -> Self {
        Self {
            data,
            metadata: PageMetadata {
                page: request.page(),
                limit: request.limit(),
                total,
                total_pages: request.total_pages(total),
            },
        }
    }

    pub fn map<U>(self, f: impl FnMut(T) -> U) -> Paginated<U> {
        Paginated {
            data: self.data.into_iter().map(f).collect(),
            metadata: self.metadata,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_skip() {
        assert_eq!(PageRequest::new(1, 10).unwrap().skip(), 0);
        assert_eq!(PageRequest::new(3, 10).unwrap().skip(), 20);
        assert_eq!(PageRequest::new(2, 100).unwrap().skip(), 100);
    }

    #[test]
    fn test_total_pages() {
        let req = PageRequest::new(1, 10).unwrap();
        assert_eq!(req.total_pages(0), 0);
        assert_eq!(req.total_pages(10), 1);
        assert_eq!(req.total_pages(25), 3);
    }

    #[test]
    fn test_bounds() {
        assert_eq!(
            PageRequest::new(0, 10),
            Err(PageRequestError::PageOutOfRange(0))
        );
        assert_eq!(
            PageRequest::new(1, 0),
            Err(PageRequestError::LimitOutOfRange(0))
        );
        assert_eq!(
            PageRequest::new(1, 101),
            Err(PageRequestError::LimitOutOfRange(101))
        );
        assert!(PageRequest::new(1, 100).is_ok());
    }

    #[test]
    fn test_page_request_error_messages() {
        assert_eq!(
            PageRequestError::PageOutOfRange(0).to_string(),
            "Page must be at least 1, got 0"
        );
        assert_eq!(
            PageRequestError::LimitOutOfRange(101).to_string(),
            "Limit must be between 1 and 100, got 101"
        );
    }

    #[test]
    fn test_paginated_metadata() {
        let req = PageRequest::new(3, 10).unwrap();
        let page = Paginated::new(vec![1, 2, 3, 4, 5], req, 25);

        assert_eq!(page.metadata.page, 3);
        assert_eq!(page.metadata.limit, 10);
        assert_eq!(page.metadata.total, 25);
        assert_eq!(page.metadata.total_pages, 3);

        let mapped = page.map(|n| n * 2);
        assert_eq!(mapped.data, vec![2, 4, 6, 8, 10]);
    }
}
