//! List feed documents: one entry per worksheet row.
//!
//! Row data lives in `gsx:`-prefixed elements whose local names are the
//! (normalized) column headers. Field order within a row follows document
//! order, which the service emits in column order.

use indexmap::IndexMap;
use quick_xml::events::Event;
use quick_xml::Reader;
use serde::Serialize;

use crate::error::AtomResult;
use crate::link::{find_href, Link, REL_POST};

/// A single row of a list feed.
#[derive(Debug, Clone, Default, Serialize)]
pub struct ListRow {
    /// Entry URL, when present.
    pub id: Option<String>,
    /// Entry title (the value of the first column), when present.
    pub title: Option<String>,
    /// Column header → cell value, in document order.
    pub fields: IndexMap<String, String>,
}

impl ListRow {
    /// Value of the column with the given (normalized) header.
    pub fn get(&self, column: &str) -> Option<&str> {
        self.fields.get(column).map(String::as_str)
    }
}

/// A parsed list feed document.
#[derive(Debug, Clone, Serialize)]
pub struct ListFeedDoc {
    /// Feed-level `<link>` elements.
    pub links: Vec<Link>,
    /// Rows, in feed order.
    pub rows: Vec<ListRow>,
}

/// Element of a row entry currently being read.
enum RowField {
    Id,
    Title,
    Gsx(String),
}

impl ListFeedDoc {
    /// Parse a list feed document.
    pub fn parse(xml: &str) -> AtomResult<Self> {
        let mut reader = Reader::from_reader(xml.as_bytes());
        reader.config_mut().trim_text(true);

        let mut links = Vec::new();
        let mut rows = Vec::new();
        let mut pending: Option<ListRow> = None;
        let mut field: Option<RowField> = None;
        let mut text = String::new();
        let mut buf = Vec::new();

        loop {
            match reader.read_event_into(&mut buf)? {
                Event::Start(ref e) => {
                    if e.local_name().as_ref() == b"entry" {
                        pending = Some(ListRow::default());
                    } else if pending.is_some() {
                        // gsx takes priority: a column headed "id" or
                        // "title" must not shadow the Atom elements.
                        field = if is_gsx(e.name()) {
                            Some(RowField::Gsx(
                                String::from_utf8_lossy(e.local_name().as_ref()).into_owned(),
                            ))
                        } else {
                            match e.local_name().as_ref() {
                                b"id" => Some(RowField::Id),
                                b"title" => Some(RowField::Title),
                                _ => None,
                            }
                        };
                        text.clear();
                    } else if e.local_name().as_ref() == b"link" {
                        links.extend(Link::from_tag(e));
                    }
                }
                Event::Empty(ref e) => {
                    if let Some(row) = pending.as_mut() {
                        // An empty gsx element is an empty cell, not an
                        // absent column.
                        if is_gsx(e.name()) {
                            let column =
                                String::from_utf8_lossy(e.local_name().as_ref()).into_owned();
                            row.fields.insert(column, String::new());
                        }
                    } else if e.local_name().as_ref() == b"link" {
                        links.extend(Link::from_tag(e));
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
                    if e.local_name().as_ref() == b"entry" {
                        rows.extend(pending.take());
                    } else if let (Some(f), Some(row)) = (field.take(), pending.as_mut()) {
                        let value = std::mem::take(&mut text);
                        match f {
                            RowField::Id => row.id = Some(value),
                            RowField::Title => row.title = Some(value),
                            RowField::Gsx(column) => {
                                row.fields.insert(column, value);
                            }
                        }
                    }
                }
                Event::Eof => break,
                _ => {}
            }
            buf.clear();
        }

        Ok(Self { links, rows })
    }

    /// URL new rows are posted to, when the feed carries a post link.
    pub fn post_url(&self) -> Option<&str> {
        find_href(&self.links, REL_POST)
    }
}

fn is_gsx(name: quick_xml::name::QName<'_>) -> bool {
    name.as_ref().starts_with(b"gsx:")
}
