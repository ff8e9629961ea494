//! Query-string builders for the list and cell feed URLs.
//!
//! Parameters are appended only when supplied, joined with `&` behind a
//! single `?`, and in a fixed order. Values are appended as given; callers
//! pass API-sanctioned values such as `column:timestamp`.

/// Query parameters for a list (row-oriented) feed.
#[derive(Debug, Clone)]
pub struct ListQuery {
    /// Return rows in reverse order.
    pub reverse: bool,
    /// Sort key; `None` or empty means no `sort` parameter.
    pub sort: Option<String>,
    /// Cap on the number of returned rows.
    pub max_results: Option<u32>,
}

impl Default for ListQuery {
    /// Service defaults: unreversed, sorted by `column:timestamp`, uncapped.
    fn default() -> Self {
        Self {
            reverse: false,
            sort: Some("column:timestamp".to_string()),
            max_results: None,
        }
    }
}

impl ListQuery {
    /// Request reverse row order.
    #[must_use]
    pub fn reverse(mut self) -> Self {
        self.reverse = true;
        self
    }

    /// Sort by the given key.
    #[must_use]
    pub fn sort(mut self, sort: impl Into<String>) -> Self {
        self.sort = Some(sort.into());
        self
    }

    /// Drop the sort parameter entirely.
    #[must_use]
    pub fn unsorted(mut self) -> Self {
        self.sort = None;
        self
    }

    /// Cap the number of returned rows.
    #[must_use]
    pub fn max_results(mut self, max: u32) -> Self {
        self.max_results = Some(max);
        self
    }

    /// Append this query to a feed URL.
    pub(crate) fn append_to(&self, url: &str) -> String {
        let mut parts = Vec::new();

        if self.reverse {
            parts.push("reverse=true".to_string());
        }
        if let Some(sort) = self.sort.as_deref().filter(|s| !s.is_empty()) {
            parts.push(format!("sort={sort}"));
        }
        if let Some(max) = self.max_results {
            parts.push(format!("max-results={max}"));
        }

        join_query(url, &parts)
    }
}

/// Query parameters for a cell (cell-oriented) feed: an optional
/// row/column range.
#[derive(Debug, Clone, Default)]
pub struct CellQuery {
    pub min_row: Option<u32>,
    pub max_row: Option<u32>,
    pub min_col: Option<u32>,
    pub max_col: Option<u32>,
}

impl CellQuery {
    /// Restrict to rows at or below `row`.
    #[must_use]
    pub fn min_row(mut self, row: u32) -> Self {
        self.min_row = Some(row);
        self
    }

    /// Restrict to rows at or above `row`.
    #[must_use]
    pub fn max_row(mut self, row: u32) -> Self {
        self.max_row = Some(row);
        self
    }

    /// Restrict to columns at or right of `col`.
    #[must_use]
    pub fn min_col(mut self, col: u32) -> Self {
        self.min_col = Some(col);
        self
    }

    /// Restrict to columns at or left of `col`.
    #[must_use]
    pub fn max_col(mut self, col: u32) -> Self {
        self.max_col = Some(col);
        self
    }

    /// Append this query to a feed URL.
    pub(crate) fn append_to(&self, url: &str) -> String {
        let bounds = [
            ("min-row", self.min_row),
            ("max-row", self.max_row),
            ("min-col", self.min_col),
            ("max-col", self.max_col),
        ];

        let parts: Vec<String> = bounds
            .iter()
            .filter_map(|(name, value)| value.map(|v| format!("{name}={v}")))
            .collect();

        join_query(url, &parts)
    }
}

fn join_query(url: &str, parts: &[String]) -> String {
    if parts.is_empty() {
        url.to_string()
    } else {
        format!("{url}?{}", parts.join("&"))
    }
}
