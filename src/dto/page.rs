//! Query parameters shared by the paginated listing endpoints.

use serde::Deserialize;
use validator::Validate;

use crate::pagination::{DEFAULT_PAGE_SIZE, PageRequest, SortDirection};

/// `?page=0&limit=10&direction=asc`
#[derive(Debug, Default, Deserialize, Validate)]
pub struct PageParams {
    /// Bounded by [`crate::pagination::MAX_PAGE_INDEX`].
    #[validate(range(max = 2147483647))]
    pub page: Option<usize>,
    pub limit: Option<usize>,
    pub direction: Option<String>,
}

impl PageParams {
    pub fn into_request(self) -> PageRequest {
        let direction = self
            .direction
            .as_deref()
            .map(SortDirection::from_param)
            .unwrap_or_default();

        PageRequest::new(
            self.page.unwrap_or(0),
            self.limit.unwrap_or(DEFAULT_PAGE_SIZE),
            direction,
        )
    }
}
