use crate::Error;
use serde::{Deserialize, Serialize};
use std::future::Future;

pub const DEFAULT_PER_PAGE: u32 = 10;
pub const MAX_PER_PAGE: u32 = 100;
/// Upper bound on pages walked by [`collect_all`].
const MAX_PAGES: u32 = 1_000;

/// 1-based page query sent as `?page=&per_page=&search=`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct PageRequest {
    pub page: u32,
    pub per_page: u32,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub search: Option<String>,
}

impl PageRequest {
    #[must_use]
    pub fn new(page: u32, per_page: u32) -> Self {
        Self {
            page: page.max(1),
            per_page: per_page.clamp(1, MAX_PER_PAGE),
            search: None,
        }
    }

    #[must_use]
    pub fn with_search(mut self, search: &str) -> Self {
        let trimmed = search.trim();
        self.search = (!trimmed.is_empty()).then(|| trimmed.to_string());
        self
    }

    #[must_use]
    pub fn next(&self) -> Self {
        Self {
            page: self.page.saturating_add(1),
            ..self.clone()
        }
    }

    #[must_use]
    pub fn previous(&self) -> Self {
        Self {
            page: self.page.saturating_sub(1).max(1),
            ..self.clone()
        }
    }

    /// Query pairs for the request URL.
    #[must_use]
    pub fn to_query(&self) -> Vec<(String, String)> {
        let mut query = vec![
            ("page".to_string(), self.page.to_string()),
            ("per_page".to_string(), self.per_page.to_string()),
        ];
        if let Some(search) = &self.search {
            query.push(("search".to_string(), search.clone()));
        }
        query
    }
}

impl Default for PageRequest {
    fn default() -> Self {
        Self::new(1, DEFAULT_PER_PAGE)
    }
}

/// Pagination envelope returned by list endpoints.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Paginated<T> {
    pub items: Vec<T>,
    #[serde(default)]
    pub total: u64,
    #[serde(default = "first_page")]
    pub page: u32,
    #[serde(default = "default_per_page")]
    pub per_page: u32,
}

fn first_page() -> u32 {
    1
}

fn default_per_page() -> u32 {
    DEFAULT_PER_PAGE
}

impl<T> Paginated<T> {
    #[must_use]
    pub fn total_pages(&self) -> u32 {
        if self.per_page == 0 || self.total == 0 {
            return 1;
        }
        let pages = self.total.div_ceil(u64::from(self.per_page));
        u32::try_from(pages).unwrap_or(u32::MAX)
    }

    #[must_use]
    pub fn has_next(&self) -> bool {
        self.page < self.total_pages()
    }

    #[must_use]
    pub fn has_previous(&self) -> bool {
        self.page > 1
    }

    /// Position label such as `11-20 of 42`.
    #[must_use]
    pub fn range_label(&self) -> String {
        if self.items.is_empty() {
            return format!("0 of {}", self.total);
        }
        let start = u64::from(self.page.saturating_sub(1)) * u64::from(self.per_page) + 1;
        let end = start + self.items.len() as u64 - 1;
        format!("{start}-{end} of {}", self.total)
    }
}

/// Walks every page of a listing, stopping at an empty page or the last page.
///
/// # Errors
/// Returns the first error reported by `fetch`.
pub async fn collect_all<T, F, Fut>(per_page: u32, mut fetch: F) -> Result<Vec<T>, Error>
where
    F: FnMut(PageRequest) -> Fut,
    Fut: Future<Output = Result<Paginated<T>, Error>>,
{
    let mut request = PageRequest::new(1, per_page);
    let mut items = Vec::new();

    for _ in 0..MAX_PAGES {
        let page = fetch(request.clone()).await?;
        let done = page.items.is_empty() || !page.has_next();
        items.extend(page.items);
        if done {
            break;
        }
        request = request.next();
    }

    Ok(items)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn page(items: Vec<u32>, total: u64, page: u32, per_page: u32) -> Paginated<u32> {
        Paginated {
            items,
            total,
            page,
            per_page,
        }
    }

    #[test]
    fn page_request_clamps_bounds() {
        assert_eq!(PageRequest::new(0, 0), PageRequest::new(1, 1));
        assert_eq!(PageRequest::new(3, 500).per_page, MAX_PER_PAGE);
    }

    #[test]
    fn next_advances_page_number() {
        let request = PageRequest::default().with_search("seo");
        let next = request.next();
        assert_eq!(next.page, 2);
        assert_eq!(next.per_page, DEFAULT_PER_PAGE);
        assert_eq!(next.search.as_deref(), Some("seo"));
        assert_eq!(next.next().page, 3);
    }

    #[test]
    fn previous_never_goes_below_one() {
        let request = PageRequest::new(2, 10);
        assert_eq!(request.previous().page, 1);
        assert_eq!(request.previous().previous().page, 1);
    }

    #[test]
    fn blank_search_is_dropped() {
        let request = PageRequest::default().with_search("   ");
        assert_eq!(request.search, None);
        assert_eq!(request.to_query().len(), 2);
    }

    #[test]
    fn total_pages_and_navigation() {
        let first = page(vec![1, 2, 3], 7, 1, 3);
        assert_eq!(first.total_pages(), 3);
        assert!(first.has_next());
        assert!(!first.has_previous());
        assert_eq!(first.range_label(), "1-3 of 7");

        let last = page(vec![7], 7, 3, 3);
        assert!(!last.has_next());
        assert!(last.has_previous());
        assert_eq!(last.range_label(), "7-7 of 7");

        let empty = page(vec![], 0, 1, 10);
        assert_eq!(empty.total_pages(), 1);
        assert_eq!(empty.range_label(), "0 of 0");
    }

    #[test]
    fn envelope_defaults_missing_fields() -> Result<(), serde_json::Error> {
        let parsed: Paginated<u32> = serde_json::from_str(r#"{"items":[1,2]}"#)?;
        assert_eq!(parsed.page, 1);
        assert_eq!(parsed.per_page, DEFAULT_PER_PAGE);
        assert_eq!(parsed.total, 0);
        Ok(())
    }

    #[tokio::test]
    async fn collect_all_walks_every_page() -> Result<(), Error> {
        let mut requested = Vec::new();
        let items = collect_all(2, |request| {
            requested.push(request.page);
            let result = match request.page {
                1 => page(vec![1, 2], 5, 1, 2),
                2 => page(vec![3, 4], 5, 2, 2),
                _ => page(vec![5], 5, 3, 2),
            };
            async move { Ok(result) }
        })
        .await?;

        assert_eq!(items, vec![1, 2, 3, 4, 5]);
        assert_eq!(requested, vec![1, 2, 3]);
        Ok(())
    }

    #[tokio::test]
    async fn collect_all_stops_on_error() {
        let result: Result<Vec<u32>, Error> = collect_all(10, |_| async {
            Err(Error::Network("down".to_string()))
        })
        .await;
        assert!(matches!(result, Err(Error::Network(_))));
    }
}
