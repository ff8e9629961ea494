//! Row-oriented view of worksheet data.

use gridfeed_atom::{ListFeedDoc, ListRow};

use crate::error::ClientResult;

/// A fetched list feed: one [`ListRow`] per worksheet row.
#[derive(Debug, Clone)]
pub struct ListFeed {
    doc: ListFeedDoc,
}

impl ListFeed {
    /// Wrap a raw feed response body.
    pub fn from_response(body: &str) -> ClientResult<Self> {
        Ok(Self {
            doc: ListFeedDoc::parse(body)?,
        })
    }

    /// Rows in feed order.
    pub fn rows(&self) -> &[ListRow] {
        &self.doc.rows
    }

    /// URL new rows are posted to, when the feed carries a post link.
    pub fn post_url(&self) -> Option<&str> {
        self.doc.post_url()
    }

    /// Number of rows.
    pub fn len(&self) -> usize {
        self.doc.rows.len()
    }

    /// Whether the feed holds no rows.
    pub fn is_empty(&self) -> bool {
        self.doc.rows.is_empty()
    }
}
