//! The worksheet feed: the document that owns the worksheet entries.

use std::sync::Arc;

use gridfeed_atom::WorksheetEntry;

use crate::error::{ClientError, ClientResult};
use crate::service::ServiceRequest;
use crate::worksheet::Worksheet;

/// A fetched worksheet feed: one [`Worksheet`] per `<entry>`, all sharing
/// the service handle the feed was built with.
pub struct WorksheetFeed {
    worksheets: Vec<Worksheet>,
}

impl WorksheetFeed {
    /// Parse a worksheet feed document.
    pub fn parse(xml: &str, service: &Arc<dyn ServiceRequest>) -> ClientResult<Self> {
        let worksheets = WorksheetEntry::parse_feed(xml)?
            .into_iter()
            .map(|entry| Worksheet::new(entry, Arc::clone(service)))
            .collect();

        Ok(Self { worksheets })
    }

    /// GET a worksheet feed URL and parse the response.
    pub async fn fetch(url: &str, service: &Arc<dyn ServiceRequest>) -> ClientResult<Self> {
        let body = service.get(url).await?;
        Self::parse(&body, service)
    }

    /// Worksheets in feed order.
    pub fn worksheets(&self) -> &[Worksheet] {
        &self.worksheets
    }

    /// The worksheet with the given title.
    pub fn find_by_title(&self, title: &str) -> ClientResult<&Worksheet> {
        self.worksheets
            .iter()
            .find(|ws| ws.title() == title)
            .ok_or_else(|| ClientError::WorksheetNotFound(title.to_string()))
    }
}
