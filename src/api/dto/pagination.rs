//! Pagination query parameters and paginated response envelope.

use serde::{Deserialize, Serialize};
use serde_with::{DisplayFromStr, serde_as};

use crate::domain::entities::{PageRequest, PageRequestError, Paginated};

/// Pagination query parameters.
///
/// Uses `serde_with` to parse numbers from query strings; non-numeric values
/// are rejected before reaching the handler.
#[serde_as]
#[derive(Debug, Default, Deserialize)]
pub struct PaginationParams {
    #[serde_as(as = "Option<DisplayFromStr>")]
    #[serde(default)]
    pub page: Option<u32>,

    #[serde_as(as = "Option<DisplayFromStr>")]
    #[serde(default)]
    pub limit: Option<u32>,
}

impl PaginationParams {
    /// Builds a [`PageRequest`], defaulting `page` to 1 and `limit` to `default_limit`.
    pub fn to_page_request(&self, default_limit: u32) -> Result<PageRequest, PageRequestError> {
        PageRequest::new(self.page.unwrap_or(1), self.limit.unwrap_or(default_limit))
    }
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PageMetadataResponse {
    pub page: u32,
    pub limit: u32,
    pub total: u64,
    pub total_pages: u64,
}

#[derive(Debug, Serialize)]
pub struct PaginatedResponse<T> {
    pub data: Vec<T>,
    pub metadata: PageMetadataResponse,
}

impl<T> From<Paginated<T>> for PaginatedResponse<T> {
    fn from(page: Paginated<T>) -> Self {
        PaginatedResponse {
            data: page.data,
            metadata: PageMetadataResponse {
                page: page.metadata.page,
                limit: page.metadata.limit,
                total: page.metadata.total,
                total_pages: page.metadata.total_pages,
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn params(page: Option<u32>, limit: Option<u32>) -> PaginationParams {
        PaginationParams { page, limit }
    }

    #[test]
    fn test_defaults() {
        let request = params(None, None).to_page_request(10).unwrap();
        assert_eq!(request.page(), 1);
        assert_eq!(request.limit(), 10);
    }

    #[test]
    fn test_custom_page_and_limit() {
        let request = params(Some(3), Some(50)).to_page_request(10).unwrap();
        assert_eq!(request.skip(), 100);
    }

    #[test]
    fn test_page_zero_is_error() {
        assert!(params(Some(0), None).to_page_request(10).is_err());
    }

    #[test]
    fn test_limit_bounds() {
        assert!(params(None, Some(0)).to_page_request(10).is_err());
        assert!(params(None, Some(100)).to_page_request(10).is_ok());
        assert!(params(None, Some(101)).to_page_request(10).is_err());
    }

    #[test]
    fn test_query_string_parsing() {
        let p: PaginationParams = serde_json::from_str(r#"{"page":"2","limit":"5"}"#).unwrap();
        assert_eq!(p.page, Some(2));
        assert_eq!(p.limit, Some(5));

        assert!(serde_json::from_str::<PaginationParams>(r#"{"page":"abc"}"#).is_err());
    }

    #[test]
    fn test_metadata_is_camel_case() {
        let request = PageRequest::new(1, 10).unwrap();
        let page = Paginated::new(vec![1, 2, 3], request, 25);

        let json = serde_json::to_value(PaginatedResponse::from(page)).unwrap();

        assert_eq!(json["metadata"]["totalPages"], 3);
        assert_eq!(json["data"].as_array().unwrap().len(), 3);
    }
}
