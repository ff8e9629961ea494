//! # gridfeed-atom
//!
//! Typed document models for the Atom/GData spreadsheet feeds.
//!
//! Each feed kind parses once into a plain struct: worksheet entries
//! ([`WorksheetEntry`]), row-oriented list feeds ([`ListFeedDoc`]), and
//! cell-oriented cell feeds ([`CellFeedDoc`]). Malformed required data
//! (counts, timestamps, cell coordinates) is rejected at parse time, so the
//! accessors on the parsed types are infallible projections.
//!
//! # Examples
//!
//! ```
//! use gridfeed_atom::{WorksheetEntry, REL_EDIT};
//!
//! let xml = r#"<entry xmlns:gs="http://schemas.google.com/spreadsheets/2006">
//!     <id>https://example.com/worksheets/od6</id>
//!     <updated>2014-02-15T19:20:33Z</updated>
//!     <title>Sheet1</title>
//!     <link rel="edit" href="https://example.com/worksheets/od6/v1"/>
//!     <gs:rowCount>100</gs:rowCount>
//!     <gs:colCount>20</gs:colCount>
//! </entry>"#;
//!
//! let entry = WorksheetEntry::parse(xml).unwrap();
//! assert_eq!(entry.title, "Sheet1");
//! assert_eq!(entry.row_count, 100);
//! assert_eq!(entry.link_href(REL_EDIT), Some("https://example.com/worksheets/od6/v1"));
//! ```

pub mod cell;
pub mod error;
pub mod link;
pub mod list;
pub mod worksheet;

pub use cell::{CellData, CellFeedDoc};
pub use error::{AtomError, AtomResult};
pub use link::{find_href, Link, GS_NS, REL_CELLS_FEED, REL_EDIT, REL_LIST_FEED, REL_POST};
pub use list::{ListFeedDoc, ListRow};
pub use worksheet::WorksheetEntry;
