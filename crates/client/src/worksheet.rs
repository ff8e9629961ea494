//! A single worksheet and its sub-resource operations.

use std::sync::Arc;

use chrono::{DateTime, FixedOffset};
use gridfeed_atom::{WorksheetEntry, REL_CELLS_FEED, REL_EDIT, REL_LIST_FEED};

use crate::cell_feed::CellFeed;
use crate::error::{ClientError, ClientResult};
use crate::list_feed::ListFeed;
use crate::query::{CellQuery, ListQuery};
use crate::service::ServiceRequest;

/// A worksheet: typed entry metadata plus the injected HTTP collaborator.
///
/// Metadata accessors are direct projections of the parsed entry. The feed
/// operations build the sub-resource URL from the entry's links and go
/// through the [`ServiceRequest`] handle; transport failures propagate
/// unchanged.
pub struct Worksheet {
    entry: WorksheetEntry,
    service: Arc<dyn ServiceRequest>,
    post_url: Option<String>,
    edit_cell_post_url: Option<String>,
}

impl Worksheet {
    /// Wrap a parsed entry.
    pub fn new(entry: WorksheetEntry, service: Arc<dyn ServiceRequest>) -> Self {
        Self {
            entry,
            service,
            post_url: None,
            edit_cell_post_url: None,
        }
    }

    /// Parse an `<entry>` fragment and wrap it.
    pub fn from_xml(xml: &str, service: Arc<dyn ServiceRequest>) -> ClientResult<Self> {
        Ok(Self::new(WorksheetEntry::parse(xml)?, service))
    }

    /// Full URL identifying the worksheet.
    pub fn id(&self) -> &str {
        &self.entry.id
    }

    /// Worksheet title.
    pub fn title(&self) -> &str {
        &self.entry.title
    }

    /// Last-updated timestamp.
    pub fn updated(&self) -> DateTime<FixedOffset> {
        self.entry.updated
    }

    /// Number of rows.
    pub fn row_count(&self) -> u32 {
        self.entry.row_count
    }

    /// Number of columns.
    pub fn col_count(&self) -> u32 {
        self.entry.col_count
    }

    /// The underlying typed entry.
    pub fn entry(&self) -> &WorksheetEntry {
        &self.entry
    }

    /// Href of the edit link, used for edit and delete operations.
    pub fn edit_url(&self) -> ClientResult<&str> {
        self.link_href(REL_EDIT)
    }

    /// URL of the row-oriented list feed with the given query appended.
    pub fn list_feed_url(&self, query: &ListQuery) -> ClientResult<String> {
        Ok(query.append_to(self.link_href(REL_LIST_FEED)?))
    }

    /// URL of the cell-oriented cell feed with the given range appended.
    pub fn cell_feed_url(&self, query: &CellQuery) -> ClientResult<String> {
        Ok(query.append_to(self.link_href(REL_CELLS_FEED)?))
    }

    /// Fetch the list feed.
    pub async fn list_feed(&self, query: &ListQuery) -> ClientResult<ListFeed> {
        let url = self.list_feed_url(query)?;
        let body = self.service.get(&url).await?;
        ListFeed::from_response(&body)
    }

    /// Fetch the cell feed.
    pub async fn cell_feed(&self, query: &CellQuery) -> ClientResult<CellFeed> {
        let url = self.cell_feed_url(query)?;
        let body = self.service.get(&url).await?;
        CellFeed::from_response(&body)
    }

    /// Delete this worksheet.
    pub async fn delete(&self) -> ClientResult<()> {
        let url = self.edit_url()?.to_string();
        self.service.delete(&url).await
    }

    /// Store the URL new rows are posted to. Not read by the worksheet
    /// itself; kept for external collaborators.
    pub fn set_post_url(&mut self, url: impl Into<String>) {
        self.post_url = Some(url.into());
    }

    /// The stored post URL, if any.
    pub fn post_url(&self) -> Option<&str> {
        self.post_url.as_deref()
    }

    /// Store the URL cell edits are posted to. Not read by the worksheet
    /// itself; kept for external collaborators.
    pub fn set_edit_cell_post_url(&mut self, url: impl Into<String>) {
        self.edit_cell_post_url = Some(url.into());
    }

    /// The stored edit-cell post URL, if any.
    pub fn edit_cell_post_url(&self) -> Option<&str> {
        self.edit_cell_post_url.as_deref()
    }

    fn link_href(&self, rel: &str) -> ClientResult<&str> {
        self.entry
            .link_href(rel)
            .ok_or_else(|| ClientError::LinkNotFound(rel.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use std::sync::Mutex;

    const ENTRY: &str = r#"<entry xmlns="http://www.w3.org/2005/Atom"
            xmlns:gs="http://schemas.google.com/spreadsheets/2006">
        <id>https://sheets.example.com/feeds/worksheets/key/private/full/od6</id>
        <updated>2014-02-15T19:20:33Z</updated>
        <title>Sheet1</title>
        <link rel="edit" href="https://sheets.example.com/feeds/worksheets/key/private/full/od6/v3"/>
        <link rel="http://schemas.google.com/spreadsheets/2006#listfeed"
              href="https://sheets.example.com/feeds/list/key/od6/private/full"/>
        <link rel="http://schemas.google.com/spreadsheets/2006#cellsfeed"
              href="https://sheets.example.com/feeds/cells/key/od6/private/full"/>
        <gs:rowCount>10</gs:rowCount>
        <gs:colCount>5</gs:colCount>
    </entry>"#;

    /// Records every request and answers with a canned body.
    struct RecordingService {
        calls: Mutex<Vec<String>>,
        response: String,
    }

    impl RecordingService {
        fn new(response: &str) -> Arc<Self> {
            Arc::new(Self {
                calls: Mutex::new(Vec::new()),
                response: response.to_string(),
            })
        }

        fn calls(&self) -> Vec<String> {
            self.calls.lock().unwrap().clone()
        }
    }

    #[async_trait]
    impl ServiceRequest for RecordingService {
        async fn get(&self, url: &str) -> ClientResult<String> {
            self.calls.lock().unwrap().push(format!("GET {url}"));
            Ok(self.response.clone())
        }

        async fn delete(&self, url: &str) -> ClientResult<()> {
            self.calls.lock().unwrap().push(format!("DELETE {url}"));
            Ok(())
        }
    }

    fn worksheet(service: Arc<RecordingService>) -> Worksheet {
        Worksheet::from_xml(ENTRY, service).unwrap()
    }

    #[test]
    fn test_metadata_accessors() {
        let ws = worksheet(RecordingService::new(""));

        assert_eq!(
            ws.id(),
            "https://sheets.example.com/feeds/worksheets/key/private/full/od6"
        );
        assert_eq!(ws.title(), "Sheet1");
        assert_eq!(ws.row_count(), 10);
        assert_eq!(ws.col_count(), 5);
        assert_eq!(ws.updated().to_rfc3339(), "2014-02-15T19:20:33+00:00");
    }

    #[test]
    fn test_edit_url() {
        let ws = worksheet(RecordingService::new(""));

        assert_eq!(
            ws.edit_url().unwrap(),
            "https://sheets.example.com/feeds/worksheets/key/private/full/od6/v3"
        );
    }

    #[test]
    fn test_list_feed_url_with_query() {
        let ws = worksheet(RecordingService::new(""));
        let query = ListQuery::default().reverse().max_results(50);

        assert_eq!(
            ws.list_feed_url(&query).unwrap(),
            "https://sheets.example.com/feeds/list/key/od6/private/full\
             ?reverse=true&sort=column:timestamp&max-results=50"
        );
    }

    #[test]
    fn test_cell_feed_url_with_range() {
        let ws = worksheet(RecordingService::new(""));
        let query = CellQuery::default().min_row(1).max_row(10);

        assert_eq!(
            ws.cell_feed_url(&query).unwrap(),
            "https://sheets.example.com/feeds/cells/key/od6/private/full?min-row=1&max-row=10"
        );
    }

    #[test]
    fn test_missing_link() {
        let service = RecordingService::new("");
        let xml = r#"<entry xmlns:gs="http://schemas.google.com/spreadsheets/2006">
            <id>x</id>
            <updated>2014-02-15T19:20:33Z</updated>
            <title>Sheet1</title>
            <gs:rowCount>10</gs:rowCount>
            <gs:colCount>5</gs:colCount>
        </entry>"#;
        let ws = Worksheet::from_xml(xml, service).unwrap();

        assert!(matches!(ws.edit_url(), Err(ClientError::LinkNotFound(rel)) if rel == "edit"));
        assert!(matches!(
            ws.list_feed_url(&ListQuery::default()),
            Err(ClientError::LinkNotFound(_))
        ));
    }

    #[tokio::test]
    async fn test_list_feed_goes_through_service() {
        let service = RecordingService::new(
            r#"<feed xmlns:gsx="http://schemas.google.com/spreadsheets/2006/extended">
                <entry><gsx:name>Alice</gsx:name></entry>
            </feed>"#,
        );
        let ws = worksheet(Arc::clone(&service));

        let feed = ws.list_feed(&ListQuery::default().unsorted()).await.unwrap();

        assert_eq!(feed.rows().len(), 1);
        assert_eq!(
            service.calls(),
            vec!["GET https://sheets.example.com/feeds/list/key/od6/private/full"]
        );
    }

    #[tokio::test]
    async fn test_delete_hits_edit_url() {
        let service = RecordingService::new("");
        let ws = worksheet(Arc::clone(&service));

        ws.delete().await.unwrap();

        assert_eq!(
            service.calls(),
            vec!["DELETE https://sheets.example.com/feeds/worksheets/key/private/full/od6/v3"]
        );
    }

    #[test]
    fn test_auxiliary_url_slots() {
        let mut ws = worksheet(RecordingService::new(""));
        assert_eq!(ws.post_url(), None);

        ws.set_post_url("https://sheets.example.com/feeds/list/key/od6/private/full");
        ws.set_edit_cell_post_url("https://sheets.example.com/feeds/cells/key/od6/private/full");

        assert_eq!(
            ws.post_url(),
            Some("https://sheets.example.com/feeds/list/key/od6/private/full")
        );
        assert_eq!(
            ws.edit_cell_post_url(),
            Some("https://sheets.example.com/feeds/cells/key/od6/private/full")
        );
    }
}
