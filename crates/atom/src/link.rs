//! Atom `<link>` elements and relation constants.
//!
//! GData feeds address their sub-resources through links carrying a `rel`
//! attribute: a plain Atom relation like `edit`, or a namespace URI naming
//! the sub-resource kind.

use quick_xml::events::BytesStart;
use serde::Serialize;

/// Spreadsheet extension namespace (`gs:` elements).
pub const GS_NS: &str = "http://schemas.google.com/spreadsheets/2006";

/// Relation of the link pointing at the row-oriented list feed.
pub const REL_LIST_FEED: &str = "http://schemas.google.com/spreadsheets/2006#listfeed";

/// Relation of the link pointing at the cell-oriented cells feed.
pub const REL_CELLS_FEED: &str = "http://schemas.google.com/spreadsheets/2006#cellsfeed";

/// Relation of the link used for edit and delete operations.
pub const REL_EDIT: &str = "edit";

/// Relation of the link new entries are posted to.
pub const REL_POST: &str = "http://schemas.google.com/g/2005#post";

/// A parsed Atom `<link>` element.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Link {
    /// Link relation (`rel` attribute).
    pub rel: String,
    /// Target URL (`href` attribute).
    pub href: String,
    /// Media type (`type` attribute), when present.
    pub link_type: Option<String>,
}

impl Link {
    /// Build a link from the attributes of a `<link>` start tag.
    /// Returns `None` when `rel` or `href` is absent.
    pub(crate) fn from_tag(tag: &BytesStart<'_>) -> Option<Self> {
        let mut rel = None;
        let mut href = None;
        let mut link_type = None;

        for attr in tag.attributes().filter_map(|a| a.ok()) {
            match attr.key.as_ref() {
                b"rel" => rel = attr.unescape_value().ok().map(|s| s.to_string()),
                b"href" => href = attr.unescape_value().ok().map(|s| s.to_string()),
                b"type" => link_type = attr.unescape_value().ok().map(|s| s.to_string()),
                _ => {}
            }
        }

        Some(Self {
            rel: rel?,
            href: href?,
            link_type,
        })
    }
}

/// Find the href of the first link whose relation matches `rel` exactly.
pub fn find_href<'a>(links: &'a [Link], rel: &str) -> Option<&'a str> {
    links
        .iter()
        .find(|link| link.rel == rel)
        .map(|link| link.href.as_str())
}
