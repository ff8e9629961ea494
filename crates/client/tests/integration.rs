//! End-to-end tests against a mock HTTP server.

use std::sync::Arc;

use gridfeed_client::{
    CellQuery, ClientError, HttpService, ListQuery, ServiceRequest, Worksheet, WorksheetFeed,
};
use wiremock::matchers::{header, method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn worksheet_entry(base: &str) -> String {
    format!(
        r#"<entry xmlns="http://www.w3.org/2005/Atom"
                xmlns:gs="http://schemas.google.com/spreadsheets/2006">
            <id>{base}/feeds/worksheets/key/private/full/od6</id>
            <updated>2014-02-15T19:20:33Z</updated>
            <title>Sheet1</title>
            <link rel="edit" href="{base}/feeds/worksheets/key/private/full/od6/v3"/>
            <link rel="http://schemas.google.com/spreadsheets/2006#listfeed"
                  href="{base}/feeds/list/key/od6/private/full"/>
            <link rel="http://schemas.google.com/spreadsheets/2006#cellsfeed"
                  href="{base}/feeds/cells/key/od6/private/full"/>
            <gs:rowCount>10</gs:rowCount>
            <gs:colCount>5</gs:colCount>
        </entry>"#
    )
}

fn service() -> Arc<dyn ServiceRequest> {
    Arc::new(HttpService::new().unwrap())
}

#[tokio::test]
async fn list_feed_round_trip_sends_query_parameters() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/feeds/list/key/od6/private/full"))
        .and(query_param("reverse", "true"))
        .and(query_param("sort", "column:timestamp"))
        .and(query_param("max-results", "50"))
        .respond_with(ResponseTemplate::new(200).set_body_string(
            r#"<feed xmlns:gsx="http://schemas.google.com/spreadsheets/2006/extended">
                <entry><gsx:name>Alice</gsx:name><gsx:age>30</gsx:age></entry>
            </feed>"#,
        ))
        .expect(1)
        .mount(&server)
        .await;

    let ws = Worksheet::from_xml(&worksheet_entry(&server.uri()), service()).unwrap();
    let feed = ws
        .list_feed(&ListQuery::default().reverse().max_results(50))
        .await
        .unwrap();

    assert_eq!(feed.len(), 1);
    assert_eq!(feed.rows()[0].get("name"), Some("Alice"));
}

#[tokio::test]
async fn cell_feed_round_trip_with_range() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/feeds/cells/key/od6/private/full"))
        .and(query_param("min-row", "1"))
        .and(query_param("max-row", "2"))
        .respond_with(ResponseTemplate::new(200).set_body_string(
            r#"<feed xmlns:gs="http://schemas.google.com/spreadsheets/2006">
                <entry><gs:cell row="1" col="1" inputValue="Name">Name</gs:cell></entry>
                <entry><gs:cell row="2" col="1" inputValue="Alice">Alice</gs:cell></entry>
            </feed>"#,
        ))
        .expect(1)
        .mount(&server)
        .await;

    let ws = Worksheet::from_xml(&worksheet_entry(&server.uri()), service()).unwrap();
    let feed = ws
        .cell_feed(&CellQuery::default().min_row(1).max_row(2))
        .await
        .unwrap();

    assert_eq!(feed.len(), 2);
    assert_eq!(feed.cell(2, 1).unwrap().value, "Alice");
}

#[tokio::test]
async fn delete_issues_delete_on_edit_url() {
    let server = MockServer::start().await;

    Mock::given(method("DELETE"))
        .and(path("/feeds/worksheets/key/private/full/od6/v3"))
        .respond_with(ResponseTemplate::new(200))
        .expect(1)
        .mount(&server)
        .await;

    let ws = Worksheet::from_xml(&worksheet_entry(&server.uri()), service()).unwrap();
    ws.delete().await.unwrap();
}

#[tokio::test]
async fn non_success_status_propagates() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(403))
        .mount(&server)
        .await;

    let ws = Worksheet::from_xml(&worksheet_entry(&server.uri()), service()).unwrap();
    let err = ws.list_feed(&ListQuery::default()).await.unwrap_err();

    assert!(matches!(err, ClientError::Status { status: 403, .. }));
}

#[tokio::test]
async fn access_token_is_sent_as_bearer_header() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(header("authorization", "Bearer ya29.token"))
        .respond_with(ResponseTemplate::new(200).set_body_string("<feed></feed>"))
        .expect(1)
        .mount(&server)
        .await;

    let service: Arc<dyn ServiceRequest> =
        Arc::new(HttpService::new().unwrap().access_token("ya29.token"));
    let ws = Worksheet::from_xml(&worksheet_entry(&server.uri()), service).unwrap();

    ws.list_feed(&ListQuery::default().unsorted()).await.unwrap();
}

#[tokio::test]
async fn worksheet_feed_fetch_and_lookup() {
    let server = MockServer::start().await;
    let base = server.uri();

    Mock::given(method("GET"))
        .and(path("/feeds/worksheets/key/private/full"))
        .respond_with(ResponseTemplate::new(200).set_body_string(format!(
            r#"<feed xmlns="http://www.w3.org/2005/Atom"
                    xmlns:gs="http://schemas.google.com/spreadsheets/2006">
                <title>My Spreadsheet</title>
                {}
            </feed>"#,
            worksheet_entry(&base)
        )))
        .mount(&server)
        .await;

    let service = service();
    let feed = WorksheetFeed::fetch(&format!("{base}/feeds/worksheets/key/private/full"), &service)
        .await
        .unwrap();

    let ws = feed.find_by_title("Sheet1").unwrap();
    assert_eq!(ws.col_count(), 5);
}
