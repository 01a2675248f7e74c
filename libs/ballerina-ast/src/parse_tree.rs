//! # Parse-Tree JSON Types
//!
//! Defines types for receiving a parse tree from the external fragment
//! parser. The parser runs outside this crate (the composer invokes it as a
//! service); what arrives here is its JSON description of a fragment's
//! grammar-level decomposition, prior to becoming a live AST node.
//!
//! ## Architecture
//!
//! ```text
//! Editor: fragment text → fragment parser → parse-tree JSON
//! Core: parse-tree JSON → ballerina-ast → typed expression tree
//! ```
//!
//! ## Usage
//!
//! ```rust,ignore
//! use ballerina_ast::{build_expression, ParseTreeNode};
//!
//! let node: ParseTreeNode = serde_json::from_str(json)?;
//! let expression = build_expression(&node)?;
//! ```

use crate::builder::ParseTreeError;
use crate::whitespace::WhitespaceDescriptor;
use serde::{Deserialize, Serialize};

/// `type` discriminators the node factory dispatches on. Every parse-tree
/// JSON node carries exactly one of these.
pub mod node_types {
    /// A function invocation such as `io:println(x)`.
    pub const FUNCTION_INVOCATION: &str = "function_invocation_expression";
    /// A literal argument such as `"hello"` or `42`.
    pub const BASIC_LITERAL: &str = "basic_literal_expression";
    /// A plain variable-name argument such as `x`.
    pub const SIMPLE_VARIABLE_REFERENCE: &str = "simple_variable_reference_expression";
}

/// A parse-tree node produced by the external fragment parser.
///
/// Fields beyond `type` and `children` are populated per node kind; the
/// schema for each kind is:
///
/// * `function_invocation_expression` - `package_name`, `package_path`
///   (the literal `.` means "current compilation unit"), `function_name`
/// * `basic_literal_expression` - `basic_literal_type`, `basic_literal_value`
/// * `simple_variable_reference_expression` - `variable_name`
///
/// `whitespace_descriptor` is attached by the parser when it captured the
/// original formatting around the node's tokens; it defaults to empty.
///
/// # Example
///
/// ```rust
/// use ballerina_ast::ParseTreeNode;
///
/// let node: ParseTreeNode = serde_json::from_str(
///     r#"{"type":"simple_variable_reference_expression","variable_name":"x"}"#,
/// ).expect("valid parse-tree JSON");
/// assert_eq!(node.require_variable_name().unwrap(), "x");
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ParseTreeNode {
    /// Node kind discriminator, one of [`node_types`].
    #[serde(rename = "type")]
    pub node_type: String,

    /// Short/display package qualifier of an invocation.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub package_name: Option<String>,

    /// Fully qualified package path of an invocation; `.` is the
    /// current-compilation-unit sentinel.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub package_path: Option<String>,

    /// Name of the invoked function.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub function_name: Option<String>,

    /// Referenced variable name of a simple variable reference.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub variable_name: Option<String>,

    /// Literal type tag of a basic literal (`string`, `int`, `float`,
    /// `boolean`).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub basic_literal_type: Option<String>,

    /// Source value of a basic literal, without string quotes.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub basic_literal_value: Option<String>,

    /// Child nodes in source order, one per argument expression.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub children: Vec<ParseTreeNode>,

    /// Formatting captured around this node's tokens, when available.
    #[serde(
        default,
        rename = "whitespace_descriptor",
        skip_serializing_if = "WhitespaceDescriptor::is_empty"
    )]
    pub whitespace: WhitespaceDescriptor,
}

impl ParseTreeNode {
    /// Builds a bare node of the given kind, for construction by hand.
    pub fn of_type(node_type: &str) -> Self {
        Self {
            node_type: node_type.to_string(),
            package_name: None,
            package_path: None,
            function_name: None,
            variable_name: None,
            basic_literal_type: None,
            basic_literal_value: None,
            children: Vec::new(),
            whitespace: WhitespaceDescriptor::default(),
        }
    }

    /// Checks whether this node describes a function invocation.
    pub fn is_function_invocation(&self) -> bool {
        self.node_type == node_types::FUNCTION_INVOCATION
    }

    /// Finds the first child of the given type.
    pub fn find_child(&self, node_type: &str) -> Option<&ParseTreeNode> {
        self.children.iter().find(|c| c.node_type == node_type)
    }

    /// All children of the given type, in source order.
    pub fn children_by_type(&self, node_type: &str) -> Vec<&ParseTreeNode> {
        self.children
            .iter()
            .filter(|c| c.node_type == node_type)
            .collect()
    }

    /// `package_name`, or a [`ParseTreeError::MissingField`] naming this node.
    pub fn require_package_name(&self) -> Result<&str, ParseTreeError> {
        self.require(&self.package_name, "package_name")
    }

    /// `package_path`, or a [`ParseTreeError::MissingField`] naming this node.
    pub fn require_package_path(&self) -> Result<&str, ParseTreeError> {
        self.require(&self.package_path, "package_path")
    }

    /// `function_name`, or a [`ParseTreeError::MissingField`] naming this node.
    pub fn require_function_name(&self) -> Result<&str, ParseTreeError> {
        self.require(&self.function_name, "function_name")
    }

    /// `variable_name`, or a [`ParseTreeError::MissingField`] naming this node.
    pub fn require_variable_name(&self) -> Result<&str, ParseTreeError> {
        self.require(&self.variable_name, "variable_name")
    }

    /// `basic_literal_type`, or a [`ParseTreeError::MissingField`] naming this
    /// node.
    pub fn require_literal_type(&self) -> Result<&str, ParseTreeError> {
        self.require(&self.basic_literal_type, "basic_literal_type")
    }

    /// `basic_literal_value`, or a [`ParseTreeError::MissingField`] naming
    /// this node.
    pub fn require_literal_value(&self) -> Result<&str, ParseTreeError> {
        self.require(&self.basic_literal_value, "basic_literal_value")
    }

    fn require<'a>(
        &self,
        value: &'a Option<String>,
        field: &'static str,
    ) -> Result<&'a str, ParseTreeError> {
        value.as_deref().ok_or_else(|| ParseTreeError::MissingField {
            node_type: self.node_type.clone(),
            field,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn invocation_node(function_name: &str) -> ParseTreeNode {
        let mut node = ParseTreeNode::of_type(node_types::FUNCTION_INVOCATION);
        node.package_name = Some(String::new());
        node.package_path = Some(".".to_string());
        node.function_name = Some(function_name.to_string());
        node
    }

    #[test]
    fn test_find_child() {
        let mut parent = invocation_node("println");
        let mut child = ParseTreeNode::of_type(node_types::SIMPLE_VARIABLE_REFERENCE);
        child.variable_name = Some("x".to_string());
        parent.children.push(child);

        let found = parent.find_child(node_types::SIMPLE_VARIABLE_REFERENCE);
        assert!(found.is_some());
        assert_eq!(found.unwrap().variable_name.as_deref(), Some("x"));
        assert_eq!(
            parent
                .children_by_type(node_types::SIMPLE_VARIABLE_REFERENCE)
                .len(),
            1
        );
    }

    #[test]
    fn test_missing_field_is_an_error() {
        let node = ParseTreeNode::of_type(node_types::FUNCTION_INVOCATION);
        let err = node.require_function_name().unwrap_err();
        assert_eq!(
            err.to_string(),
            "missing required field `function_name` on `function_invocation_expression` node"
        );
    }

    #[test]
    fn test_children_default_to_empty() {
        let node: ParseTreeNode = serde_json::from_str(
            r#"{"type":"function_invocation_expression","package_name":"",
                "package_path":".","function_name":"foo"}"#,
        )
        .expect("valid parse-tree JSON");
        assert!(node.children.is_empty());
        assert!(node.whitespace.is_empty());
    }

    #[test]
    fn test_whitespace_descriptor_rides_in_json() {
        let node: ParseTreeNode = serde_json::from_str(
            r#"{"type":"simple_variable_reference_expression","variable_name":"x",
                "whitespace_descriptor":{"regions":{"0":" "}}}"#,
        )
        .expect("valid parse-tree JSON");
        assert_eq!(node.whitespace.region(0), " ");
    }
}
