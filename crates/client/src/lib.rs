//! # gridfeed-client
//!
//! Client for the Atom/GData-style worksheet API: worksheet metadata,
//! query-URL construction for the list and cell sub-resources, and the
//! fetch/delete operations behind an injected HTTP collaborator.
//!
//! The HTTP seam is the [`ServiceRequest`] trait; [`HttpService`] is the
//! reqwest-backed implementation. Every worksheet holds its own handle, so
//! there is no ambient singleton to configure.
//!
//! # Examples
//!
//! ```no_run
//! use std::sync::Arc;
//! use gridfeed_client::{HttpService, ListQuery, ServiceRequest, WorksheetFeed};
//!
//! # async fn example() -> gridfeed_client::ClientResult<()> {
//! let service: Arc<dyn ServiceRequest> =
//!     Arc::new(HttpService::new()?.access_token("ya29.token"));
//!
//! let feed = WorksheetFeed::fetch(
//!     "https://sheets.example.com/feeds/worksheets/key/private/full",
//!     &service,
//! )
//! .await?;
//!
//! let worksheet = feed.find_by_title("Sheet1")?;
//! let rows = worksheet
//!     .list_feed(&ListQuery::default().max_results(50))
//!     .await?;
//! for row in rows.rows() {
//!     println!("{:?}", row.fields);
//! }
//! # Ok(())
//! # }
//! ```

pub mod cell_feed;
pub mod error;
pub mod list_feed;
pub mod query;
pub mod service;
pub mod worksheet;
pub mod worksheet_feed;

pub use gridfeed_atom::{CellData, Link, ListRow, WorksheetEntry};

pub use cell_feed::CellFeed;
pub use error::{ClientError, ClientResult};
pub use list_feed::ListFeed;
pub use query::{CellQuery, ListQuery};
pub use service::{HttpService, ServiceRequest};
pub use worksheet::Worksheet;
pub use worksheet_feed::WorksheetFeed;
