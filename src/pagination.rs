//! This modules defines the common functionality for paging data.

/// The number of questions shown on a single page.
pub const QUESTIONS_PER_PAGE: u64 = 10;

/// The config for pagination
#[derive(Debug, Clone)]
pub struct PaginationConfig {
    /// The page number to default to when not specified in a request.
    pub default_page: u64,
    /// The maximum number of items on a page.
    pub page_size: u64,
}

impl Default for PaginationConfig {
    fn default() -> Self {
        Self {
            default_page: 1,
            page_size: QUESTIONS_PER_PAGE,
        }
    }
}

impl PaginationConfig {
    /// Resolve the raw `page` query value into a page number.
    ///
    /// A missing value or one that is not an integer falls back to
    /// [PaginationConfig::default_page]. Zero and negative pages are kept
    /// as-is so that they select an empty page.
    pub fn resolve_page(&self, raw_page: Option<&str>) -> i64 {
        raw_page
            .and_then(|page| page.trim().parse::<i64>().ok())
            .unwrap_or(self.default_page as i64)
    }

    /// Take the items on the 1-indexed `page` out of `items`.
    ///
    /// Page `n` covers the window `[(n - 1) * page_size, n * page_size)`.
    /// Pages below 1 and pages past the end are empty.
    pub fn paginate<T>(&self, items: Vec<T>, page: i64) -> Vec<T> {
        if page < 1 {
            return Vec::new();
        }

        let page_size = self.page_size as usize;
        let start = usize::try_from(page - 1)
            .unwrap_or(usize::MAX)
            .saturating_mul(page_size);

        items.into_iter().skip(start).take(page_size).collect()
    }
}

/// The query parameters accepted by paginated endpoints.
///
/// The page is kept as a string so that non-numeric values can fall back to
/// the default page instead of rejecting the request.
#[derive(Debug, Default, serde::Deserialize)]
pub struct PageQuery {
    pub page: Option<String>,
}
