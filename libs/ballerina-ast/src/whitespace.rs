//! # Whitespace Descriptor
//!
//! Captured formatting for a single AST node: literal whitespace strings
//! (spaces, newlines, comments) keyed by the structural position they occupy
//! around the node's own tokens.
//!
//! Region indices are stable contract points consulted by the
//! formatting-preserving renderer. Adding a new structural token to a node
//! kind means reserving a new index; an existing index is never reused with
//! different semantics. A region that was never captured reads as the empty
//! string, which degrades rendering gracefully instead of failing.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Map from region index to the literal formatting string captured there.
pub type RegionMap = BTreeMap<u8, String>;

/// Per-node formatting capture.
///
/// # Fields
///
/// * `regions` - Formatting around this node's own tokens, by region index
/// * `children` - Region maps for named child slots (for example the
///   name-reference slot of a function invocation)
///
/// # Example
///
/// ```rust
/// use ballerina_ast::WhitespaceDescriptor;
///
/// let mut ws = WhitespaceDescriptor::default();
/// ws.set_region(3, "\n");
/// assert_eq!(ws.region(3), "\n");
/// assert_eq!(ws.region(1), ""); // uncaptured regions read as empty
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct WhitespaceDescriptor {
    /// Formatting around this node's own tokens.
    #[serde(default)]
    pub regions: RegionMap,

    /// Region maps for named child slots.
    #[serde(default)]
    pub children: BTreeMap<String, RegionMap>,
}

impl WhitespaceDescriptor {
    /// Returns the captured formatting at `index`, or `""` when none was
    /// captured.
    pub fn region(&self, index: u8) -> &str {
        self.regions.get(&index).map(String::as_str).unwrap_or("")
    }

    /// Stores the formatting string for `index`, replacing any previous
    /// capture.
    pub fn set_region(&mut self, index: u8, text: impl Into<String>) {
        self.regions.insert(index, text.into());
    }

    /// Returns the captured formatting at `index` of the named child slot,
    /// or `""` when none was captured.
    pub fn child_region(&self, slot: &str, index: u8) -> &str {
        self.children
            .get(slot)
            .and_then(|regions| regions.get(&index))
            .map(String::as_str)
            .unwrap_or("")
    }

    /// Stores the formatting string for `index` of the named child slot.
    pub fn set_child_region(&mut self, slot: &str, index: u8, text: impl Into<String>) {
        self.children
            .entry(slot.to_string())
            .or_default()
            .insert(index, text.into());
    }

    /// True when nothing was captured at all.
    pub fn is_empty(&self) -> bool {
        self.regions.is_empty() && self.children.is_empty()
    }
}
