//! # Fragment Parser Contract
//!
//! The fragment parser is an external collaborator: the composer hands it a
//! piece of source text smaller than a compilation unit together with a
//! classification hint, and receives parse-tree JSON back. This module
//! defines the contract the core invokes, plus the text→AST re-entry that
//! replaces a live node's state from freshly parsed source.
//!
//! The parser is treated as synchronous and total: it always returns a tree
//! or reports failure, never hangs. It must be idempotent and
//! side-effect-free.

use crate::ast::Expression;
use crate::builder::{build_expression, ParseTreeError};
use crate::event::TreeEvent;
use crate::parse_tree::ParseTreeNode;
use thiserror::Error;
use tracing::{debug, warn};

/// Classification hint passed to the fragment parser.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FragmentKind {
    /// The text is a single expression.
    Expression,
}

impl FragmentKind {
    /// Wire name of the hint.
    pub fn as_str(&self) -> &'static str {
        match self {
            FragmentKind::Expression => "expression",
        }
    }
}

/// Errors surfaced by fragment parsing and re-entry.
#[derive(Debug, Error)]
pub enum FragmentError {
    /// The parser rejected the text as ungrammatical.
    #[error("fragment rejected by parser: {message}")]
    Rejected { message: String },

    /// The parser's output was not valid parse-tree JSON.
    #[error("fragment parse tree is not valid JSON: {0}")]
    InvalidJson(#[from] serde_json::Error),

    /// The parser's output violated the parse-tree schema.
    #[error(transparent)]
    Tree(#[from] ParseTreeError),
}

/// The external fragment parser.
///
/// Implementations wrap whatever actually parses the text (in the composer,
/// a parser service); this core only ever calls [`parse`](Self::parse).
pub trait FragmentParser {
    /// Parses `source` as a fragment of the given kind.
    fn parse(&self, source: &str, kind: FragmentKind) -> Result<ParseTreeNode, FragmentError>;
}

/// Deserializes a parser's raw JSON output into a parse-tree node.
///
/// Convenience for [`FragmentParser`] implementations that receive the tree
/// as text.
pub fn parse_tree_from_json(json: &str) -> Result<ParseTreeNode, FragmentError> {
    Ok(serde_json::from_str(json)?)
}

impl Expression {
    /// Reparses `source` as an expression and replaces this node's state in
    /// place.
    ///
    /// The replacement subtree is fully materialized before the node is
    /// overwritten, so a parser rejection or malformed parse tree leaves the
    /// prior state untouched. Because the bulk re-initialization is silent,
    /// the returned event is the single coarse-grained notification the
    /// embedder forwards to its observers.
    pub fn set_expression_from_string(
        &mut self,
        source: &str,
        parser: &dyn FragmentParser,
    ) -> Result<TreeEvent, FragmentError> {
        debug!(kind = FragmentKind::Expression.as_str(), "reparsing fragment");
        let parsed = parser.parse(source, FragmentKind::Expression)?;
        let replacement = build_expression(&parsed).map_err(|error| {
            warn!(%error, "fragment parse tree rejected");
            error
        })?;
        *self = replacement;
        Ok(TreeEvent::custom(
            self.kind(),
            "expression replaced from source text",
        ))
    }
}
