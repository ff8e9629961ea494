//! Worksheet `<entry>` documents.
//!
//! A worksheet entry carries the sheet's metadata (`<id>`, `<title>`,
//! `<updated>`, the `gs:rowCount`/`gs:colCount` pair) and the links to its
//! sub-resources. The whole entry is parsed once into a typed struct, so a
//! malformed timestamp or count is rejected up front instead of on every
//! accessor call.

use chrono::{DateTime, FixedOffset};
use quick_xml::events::Event;
use quick_xml::Reader;
use serde::Serialize;

use crate::error::{AtomError, AtomResult};
use crate::link::{find_href, Link};

/// Typed worksheet entry.
#[derive(Debug, Clone, Serialize)]
pub struct WorksheetEntry {
    /// Full URL identifying the worksheet.
    pub id: String,
    /// Worksheet title.
    pub title: String,
    /// Last-updated timestamp.
    pub updated: DateTime<FixedOffset>,
    /// Number of rows (`gs:rowCount`).
    pub row_count: u32,
    /// Number of columns (`gs:colCount`).
    pub col_count: u32,
    /// All `<link>` elements, in document order.
    pub links: Vec<Link>,
}

impl WorksheetEntry {
    /// Parse a standalone `<entry>` fragment.
    pub fn parse(xml: &str) -> AtomResult<Self> {
        let mut entries = parse_entries(xml)?;
        if entries.is_empty() {
            return Err(AtomError::MissingElement("entry"));
        }
        Ok(entries.swap_remove(0))
    }

    /// Parse every `<entry>` of a worksheet `<feed>` document.
    pub fn parse_feed(xml: &str) -> AtomResult<Vec<Self>> {
        parse_entries(xml)
    }

    /// Href of the first link with the given relation.
    pub fn link_href(&self, rel: &str) -> Option<&str> {
        find_href(&self.links, rel)
    }
}

/// Metadata element currently being read inside an entry.
enum Field {
    Id,
    Title,
    Updated,
    RowCount,
    ColCount,
}

impl Field {
    fn for_tag(local_name: &[u8]) -> Option<Self> {
        match local_name {
            b"id" => Some(Self::Id),
            b"title" => Some(Self::Title),
            b"updated" => Some(Self::Updated),
            b"rowCount" => Some(Self::RowCount),
            b"colCount" => Some(Self::ColCount),
            _ => None,
        }
    }
}

#[derive(Default)]
struct PendingEntry {
    id: Option<String>,
    title: Option<String>,
    updated: Option<String>,
    row_count: Option<String>,
    col_count: Option<String>,
    links: Vec<Link>,
}

impl PendingEntry {
    fn set(&mut self, field: &Field, text: String) {
        match field {
            Field::Id => self.id = Some(text),
            Field::Title => self.title = Some(text),
            Field::Updated => self.updated = Some(text),
            Field::RowCount => self.row_count = Some(text),
            Field::ColCount => self.col_count = Some(text),
        }
    }

    fn build(self) -> AtomResult<WorksheetEntry> {
        let id = self.id.ok_or(AtomError::MissingElement("id"))?;
        let title = self.title.ok_or(AtomError::MissingElement("title"))?;
        let updated_raw = self.updated.ok_or(AtomError::MissingElement("updated"))?;
        let updated = DateTime::parse_from_rfc3339(&updated_raw)
            .map_err(|_| AtomError::InvalidTimestamp(updated_raw))?;
        let row_count = parse_count(self.row_count, "gs:rowCount")?;
        let col_count = parse_count(self.col_count, "gs:colCount")?;

        Ok(WorksheetEntry {
            id,
            title,
            updated,
            row_count,
            col_count,
            links: self.links,
        })
    }
}

fn parse_count(raw: Option<String>, element: &'static str) -> AtomResult<u32> {
    let raw = raw.ok_or(AtomError::MissingElement(element))?;
    raw.trim()
        .parse()
        .map_err(|_| AtomError::InvalidInt {
            element,
            value: raw,
        })
}

/// Scan a document for `<entry>` elements; also accepts a bare `<entry>`
/// root. Feed-level `<id>`/`<title>`/`<updated>` are ignored.
fn parse_entries(xml: &str) -> AtomResult<Vec<WorksheetEntry>> {
    let mut reader = Reader::from_reader(xml.as_bytes());
    reader.config_mut().trim_text(true);

    let mut entries = Vec::new();
    let mut pending: Option<PendingEntry> = None;
    let mut field: Option<Field> = None;
    let mut text = String::new();
    let mut buf = Vec::new();

    loop {
        match reader.read_event_into(&mut buf)? {
            Event::Start(ref e) => {
                let name = e.local_name();
                if name.as_ref() == b"entry" {
                    pending = Some(PendingEntry::default());
                } else if let Some(entry) = pending.as_mut() {
                    if name.as_ref() == b"link" {
                        entry.links.extend(Link::from_tag(e));
                    } else if let Some(f) = Field::for_tag(name.as_ref()) {
                        field = Some(f);
                        text.clear();
                    }
                }
            }
            Event::Empty(ref e) => {
                if let Some(entry) = pending.as_mut() {
                    if e.local_name().as_ref() == b"link" {
                        entry.links.extend(Link::from_tag(e));
                    }
                }
            }
            Event::Text(ref e) => {
                if field.is_some() {
                    if let Ok(t) = e.unescape() {
                        text.push_str(&t);
                    }
                }
            }
            Event::End(ref e) => {
                let name = e.local_name();
                if name.as_ref() == b"entry" {
                    if let Some(entry) = pending.take() {
                        entries.push(entry.build()?);
                    }
                } else if let Some(f) = field.take() {
                    if Field::for_tag(name.as_ref()).is_some() {
                        if let Some(entry) = pending.as_mut() {
                            entry.set(&f, std::mem::take(&mut text));
                        }
                    }
                }
            }
            Event::Eof => break,
            _ => {}
        }
        buf.clear();
    }

    Ok(entries)
}
