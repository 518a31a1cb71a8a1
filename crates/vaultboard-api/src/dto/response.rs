#![allow(clippy::option_if_let_else)]

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum ResponseStatus {
    Ok,
    Error,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct ApiResponse<T> {
    pub status: ResponseStatus,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<T>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub msg: Option<String>,
}

impl<T> ApiResponse<T> {
    pub const fn ok(data: T) -> Self {
        Self {
            status: ResponseStatus::Ok,
            data: Some(data),
            msg: None,
        }
    }

    pub const fn error(msg: String) -> Self {
        Self {
            status: ResponseStatus::Error,
            data: None,
            msg: Some(msg),
        }
    }
}

/// Pagination block on every list response.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema, Eq, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct PageMeta {
    pub page: usize,
    pub per_page: usize,
    pub total_pages: usize,
    pub total_items: usize,
}

/// A page slice plus its pagination metadata.
///
/// Built from the full derived set on every request, so a stale page index
/// from before a filter change clamps back to page 1 instead of pointing
/// past the end.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Paginated<T> {
    pub items: Vec<T>,
    pub pagination: PageMeta,
}

impl<T: Clone> Paginated<T> {
    pub fn slice(all: &[T], requested_page: usize, per_page: usize) -> Self {
        let page = vaultboard_core::clamp_page(requested_page, all.len(), per_page);
        Self {
            items: vaultboard_core::paginate(all, per_page, page),
            pagination: PageMeta {
                page,
                per_page,
                total_pages: vaultboard_core::total_pages(all.len(), per_page),
                total_items: all.len(),
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn stale_page_clamps_to_first() {
        let items: Vec<u32> = (0..12).collect();
        let page = Paginated::slice(&items, 3, 10);
        assert_eq!(page.pagination.page, 1);
        assert_eq!(page.items.len(), 10);
        assert_eq!(page.pagination.total_pages, 2);
    }

    #[test]
    fn valid_page_is_honored() {
        let items: Vec<u32> = (0..25).collect();
        let page = Paginated::slice(&items, 3, 10);
        assert_eq!(page.pagination.page, 3);
        assert_eq!(page.items, vec![20, 21, 22, 23, 24]);
    }
}
