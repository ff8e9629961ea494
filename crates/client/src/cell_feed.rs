//! Cell-oriented view of worksheet data.

use gridfeed_atom::{CellData, CellFeedDoc};

use crate::error::ClientResult;

/// A fetched cell feed: one [`CellData`] per populated cell.
#[derive(Debug, Clone)]
pub struct CellFeed {
    doc: CellFeedDoc,
}

impl CellFeed {
    /// Wrap a raw feed response body.
    pub fn from_response(body: &str) -> ClientResult<Self> {
        Ok(Self {
            doc: CellFeedDoc::parse(body)?,
        })
    }

    /// Cells in feed order.
    pub fn cells(&self) -> &[CellData] {
        &self.doc.cells
    }

    /// Cell at the given 1-based coordinates, if populated.
    pub fn cell(&self, row: u32, col: u32) -> Option<&CellData> {
        self.doc.get(row, col)
    }

    /// Number of populated cells.
    pub fn len(&self) -> usize {
        self.doc.cells.len()
    }

    /// Whether the feed holds no cells.
    pub fn is_empty(&self) -> bool {
        self.doc.cells.is_empty()
    }
}
