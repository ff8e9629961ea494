//! Cell feed documents: one entry per populated cell.

use quick_xml::events::{BytesStart, Event};
use quick_xml::Reader;
use serde::Serialize;

use crate::error::{AtomError, AtomResult};
use crate::link::Link;

/// A single `gs:cell` element.
#[derive(Debug, Clone, Serialize)]
pub struct CellData {
    /// 1-based row index.
    pub row: u32,
    /// 1-based column index.
    pub col: u32,
    /// What was typed into the cell (formula or literal).
    pub input_value: String,
    /// Numeric interpretation of the value, when the service provides one.
    pub numeric_value: Option<f64>,
    /// Displayed value.
    pub value: String,
}

/// A parsed cell feed document.
#[derive(Debug, Clone, Serialize)]
pub struct CellFeedDoc {
    /// Feed-level `<link>` elements.
    pub links: Vec<Link>,
    /// Cells, in feed order (row-major as emitted by the service).
    pub cells: Vec<CellData>,
}

impl CellFeedDoc {
    /// Parse a cell feed document.
    pub fn parse(xml: &str) -> AtomResult<Self> {
        let mut reader = Reader::from_reader(xml.as_bytes());
        reader.config_mut().trim_text(true);

        let mut links = Vec::new();
        let mut cells = Vec::new();
        let mut in_entry = false;
        let mut pending: Option<PendingCell> = None;
        let mut buf = Vec::new();

        loop {
            match reader.read_event_into(&mut buf)? {
                Event::Start(ref e) => match e.local_name().as_ref() {
                    b"entry" => in_entry = true,
                    b"cell" if in_entry => pending = Some(PendingCell::from_tag(e)?),
                    b"link" if !in_entry => links.extend(Link::from_tag(e)),
                    _ => {}
                },
                Event::Empty(ref e) => match e.local_name().as_ref() {
                    b"cell" if in_entry => cells.push(PendingCell::from_tag(e)?.build()),
                    b"link" if !in_entry => links.extend(Link::from_tag(e)),
                    _ => {}
                },
                Event::Text(ref e) => {
                    if let Some(cell) = pending.as_mut() {
                        if let Ok(t) = e.unescape() {
                            cell.value.push_str(&t);
                        }
                    }
                }
                Event::End(ref e) => match e.local_name().as_ref() {
                    b"entry" => in_entry = false,
                    b"cell" => cells.extend(pending.take().map(PendingCell::build)),
                    _ => {}
                },
                Event::Eof => break,
                _ => {}
            }
            buf.clear();
        }

        Ok(Self { links, cells })
    }

    /// Cell at the given 1-based coordinates, if populated.
    pub fn get(&self, row: u32, col: u32) -> Option<&CellData> {
        self.cells
            .iter()
            .find(|cell| cell.row == row && cell.col == col)
    }
}

struct PendingCell {
    row: u32,
    col: u32,
    input_value: String,
    numeric_value: Option<f64>,
    value: String,
}

impl PendingCell {
    fn from_tag(tag: &BytesStart<'_>) -> AtomResult<Self> {
        let mut row = None;
        let mut col = None;
        let mut input_value = String::new();
        let mut numeric_value = None;

        for attr in tag.attributes().filter_map(|a| a.ok()) {
            let Ok(value) = attr.unescape_value() else {
                continue;
            };
            match attr.key.as_ref() {
                b"row" => row = Some(parse_index(&value, "row")?),
                b"col" => col = Some(parse_index(&value, "col")?),
                b"inputValue" => input_value = value.to_string(),
                b"numericValue" => numeric_value = value.trim().parse().ok(),
                _ => {}
            }
        }

        Ok(Self {
            row: row.ok_or(AtomError::MissingAttribute {
                element: "gs:cell",
                attr: "row",
            })?,
            col: col.ok_or(AtomError::MissingAttribute {
                element: "gs:cell",
                attr: "col",
            })?,
            input_value,
            numeric_value,
            value: String::new(),
        })
    }

    fn build(self) -> CellData {
        CellData {
            row: self.row,
            col: self.col,
            input_value: self.input_value,
            numeric_value: self.numeric_value,
            value: self.value,
        }
    }
}

fn parse_index(raw: &str, element: &'static str) -> AtomResult<u32> {
    raw.trim().parse().map_err(|_| AtomError::InvalidInt {
        element,
        value: raw.to_string(),
    })
}
