use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct ApiResponse<T> {
    pub success: bool,
    pub data: Option<T>,
    pub message: Option<String>,
    pub meta: Option<Meta>,
    pub errors: Option<Vec<String>>,
}

/// Paging metadata for offset-based listings
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct Meta {
    /// Offset the page was taken from
    pub offset: i64,
    /// Fixed page size of the listing
    pub page_size: i64,
    /// Offset to request for the following page, absent on the last page
    pub next_offset: Option<i64>,
}

impl Meta {
    /// A page shorter than `page_size` is the last one
    pub fn for_page(offset: i64, page_size: i64, returned: usize) -> Self {
        let next_offset = if returned as i64 >= page_size {
            Some(offset + page_size)
        } else {
            None
        };

        Self {
            offset,
            page_size,
            next_offset,
        }
    }
}

impl<T> ApiResponse<T> {
    pub fn success(data: Option<T>, message: Option<String>, meta: Option<Meta>) -> Self {
        Self {
            success: true,
            data,
            message,
            meta,
            errors: None,
        }
    }

    pub fn error(message: Option<String>, errors: Option<Vec<String>>) -> ApiResponse<()> {
        ApiResponse {
            success: false,
            data: None,
            message,
            meta: None,
            errors,
        }
    }
}
