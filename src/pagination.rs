//! Zero-based page requests and the page wrapper returned by listing endpoints.

use serde::Serialize;

pub const DEFAULT_PAGE_SIZE: usize = 10;
pub const MAX_PAGE_SIZE: usize = 100;
/// Highest page index accepted from a query string.
pub const MAX_PAGE_INDEX: usize = i32::MAX as usize;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum SortDirection {
    #[default]
    Asc,
    Desc,
}

impl SortDirection {
    /// Only a case-insensitive `desc` sorts descending; anything else is ascending.
    pub fn from_param(value: &str) -> Self {
        if value.trim().eq_ignore_ascii_case("desc") {
            SortDirection::Desc
        } else {
            SortDirection::Asc
        }
    }
}

/// A zero-based page index plus page size and sort direction.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct PageRequest {
    pub page: usize,
    pub size: usize,
    pub direction: SortDirection,
}

impl PageRequest {
    /// Builds a request, clamping the size to `1..=MAX_PAGE_SIZE`.
    pub fn new(page: usize, size: usize, direction: SortDirection) -> Self {
        Self {
            page,
            size: size.clamp(1, MAX_PAGE_SIZE),
            direction,
        }
    }

    pub fn offset(&self) -> usize {
        self.page.saturating_mul(self.size)
    }

    /// `LIMIT` value for SQL queries.
    pub fn sql_limit(&self) -> i64 {
        i64::try_from(self.size).unwrap_or(i64::MAX)
    }

    /// `OFFSET` value for SQL queries, saturating instead of wrapping negative.
    pub fn sql_offset(&self) -> i64 {
        i64::try_from(self.offset()).unwrap_or(i64::MAX)
    }
}

impl Default for PageRequest {
    fn default() -> Self {
        Self::new(0, DEFAULT_PAGE_SIZE, SortDirection::Asc)
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct SortInfo {
    pub property: &'static str,
    pub direction: SortDirection,
}

/// Slice of a result set together with total-count metadata.
#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Page<T> {
    pub content: Vec<T>,
    pub total_elements: usize,
    pub total_pages: usize,
    pub number: usize,
    pub size: usize,
    pub number_of_elements: usize,
    pub first: bool,
    pub last: bool,
    pub empty: bool,
    pub sort: SortInfo,
}

impl<T> Page<T> {
    pub fn new(
        content: Vec<T>,
        request: PageRequest,
        total_elements: usize,
        sort_property: &'static str,
    ) -> Self {
        let total_pages = total_elements.div_ceil(request.size);
        let number_of_elements = content.len();

        Self {
            empty: content.is_empty(),
            content,
            total_elements,
            total_pages,
            number: request.page,
            size: request.size,
            number_of_elements,
            first: request.page == 0,
            last: request.page.saturating_add(1) >= total_pages,
            sort: SortInfo {
                property: sort_property,
                direction: request.direction,
            },
        }
    }

    /// Converts every element, keeping the page metadata.
    pub fn map<U, F>(mut self, f: F) -> Page<U>
    where
        F: FnMut(T) -> U,
    {
        let content = std::mem::take(&mut self.content)
            .into_iter()
            .map(f)
            .collect();
        self.with_content(content)
    }

    /// Fallible variant of [`Page::map`]; stops at the first error.
    pub fn try_map<U, E, F>(mut self, f: F) -> Result<Page<U>, E>
    where
        F: FnMut(T) -> Result<U, E>,
    {
        let content = std::mem::take(&mut self.content)
            .into_iter()
            .map(f)
            .collect::<Result<Vec<_>, E>>()?;
        Ok(self.with_content(content))
    }

    // `self.content` has already been taken by the caller.
    fn with_content<U>(self, content: Vec<U>) -> Page<U> {
        Page {
            content,
            total_elements: self.total_elements,
            total_pages: self.total_pages,
            number: self.number,
            size: self.size,
            number_of_elements: self.number_of_elements,
            first: self.first,
            last: self.last,
            empty: self.empty,
            sort: self.sort,
        }
    }
}
