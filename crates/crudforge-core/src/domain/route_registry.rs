//! Text-level editing of the generated project's route list.
//!
//! The route list is a TSX source file holding one array literal:
//!
//! ```text
//! export const routes = [
//!   { icon: ..., label: "CRUD Order", url: "/v1/order" },
//! ];
//! ```
//!
//! New entries go immediately before the **last** `];` in the file. Nothing
//! else in the text is touched.

use crate::domain::{entities::route::RouteEntry, error::DomainError};

/// Closing sequence that terminates the routes array literal.
pub const LIST_END_ANCHOR: &str = "];";

/// A borrowed view over route-list source text.
#[derive(Debug, Clone, Copy)]
pub struct RouteList<'a> {
    source: &'a str,
}

impl<'a> RouteList<'a> {
    pub fn new(source: &'a str) -> Self {
        Self { source }
    }

    /// Byte offset of the last closing anchor.
    pub fn anchor_offset(&self) -> Option<usize> {
        self.source.rfind(LIST_END_ANCHOR)
    }

    /// True if an entry with exactly this `url` is already listed.
    pub fn contains_url(&self, url: &str) -> bool {
        self.source.contains(&format!("url: \"{url}\""))
    }

    /// Return the source with `entry` spliced in before the anchor.
    ///
    /// Not idempotent: inserting the same entry twice lists it twice.
    pub fn insert(&self, entry: &RouteEntry) -> Result<String, DomainError> {
        let at = self.anchor_offset().ok_or(DomainError::AnchorMissing {
            anchor: LIST_END_ANCHOR,
        })?;

        let block = entry.render();
        let mut out = String::with_capacity(self.source.len() + block.len());
        out.push_str(&self.source[..at]);
        out.push_str(&block);
        out.push_str(&self.source[at..]);
        Ok(out)
    }
}
