//! # Parse-Tree Materialization
//!
//! Converts parse-tree JSON from the external fragment parser into live,
//! typed expression nodes. This is the node-factory side of the contract:
//! [`create_from_kind`] dispatches on the `type` discriminator to an empty
//! node of the matching variant, and `init_from_json` populates it
//! recursively, depth first, in source order.
//!
//! ## Architecture
//!
//! ```text
//! fragment text → fragment parser → ParseTreeNode (JSON)
//! ParseTreeNode → create_from_kind + init_from_json → Expression
//! ```
//!
//! Materialization is atomic per node: required fields are validated and the
//! full replacement state is assembled before anything is committed, so a
//! malformed subtree never leaves a node half-updated.

use crate::ast::{
    BasicLiteralExpression, BasicLiteralKind, Expression, FunctionInvocationExpression,
    PackageRef, VariableReferenceExpression,
};
use crate::parse_tree::{node_types, ParseTreeNode};
use config::constants::{ARGS_TEXT_SEPARATOR, MAX_FRAGMENT_DEPTH, STACKER_STACK_SIZE_BYTES};
use stacker::maybe_grow;
use thiserror::Error;
use tracing::trace;

/// Errors raised while materializing parse-tree JSON.
///
/// These are caller contract violations: the parse tree is missing a field
/// its schema requires, or carries a discriminator this factory does not
/// know. They propagate to the embedding layer, which shows a diagnostic and
/// aborts the edit; nothing here is recovered from silently.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseTreeError {
    /// A field the node kind's schema requires is absent.
    #[error("missing required field `{field}` on `{node_type}` node")]
    MissingField {
        node_type: String,
        field: &'static str,
    },

    /// The `type` discriminator matches no known expression variant.
    #[error("unrecognized node type `{node_type}`")]
    UnknownNodeType { node_type: String },

    /// A basic literal carries a type tag outside the supported set.
    #[error("unsupported literal type `{literal_type}`")]
    UnsupportedLiteral { literal_type: String },

    /// The parse tree nests deeper than the configured limit.
    #[error("parse tree nested deeper than {limit} levels")]
    TooDeep { limit: usize },
}

/// Creates an empty node of the variant matching the parse-tree node's
/// `type` discriminator.
///
/// The returned node carries default attribute values only; populate it with
/// [`Expression::init_from_json`].
pub fn create_from_kind(node: &ParseTreeNode) -> Result<Expression, ParseTreeError> {
    match node.node_type.as_str() {
        node_types::FUNCTION_INVOCATION => {
            Ok(Expression::FunctionInvocation(FunctionInvocationExpression::new()))
        }
        node_types::BASIC_LITERAL => Ok(Expression::BasicLiteral(BasicLiteralExpression::new())),
        node_types::SIMPLE_VARIABLE_REFERENCE => {
            Ok(Expression::VariableReference(VariableReferenceExpression::new()))
        }
        other => Err(ParseTreeError::UnknownNodeType {
            node_type: other.to_string(),
        }),
    }
}

/// Builds a fully populated expression from a parse-tree node.
///
/// # Example
///
/// ```rust
/// use ballerina_ast::{build_expression, ParseTreeNode};
///
/// let node: ParseTreeNode = serde_json::from_str(
///     r#"{"type":"function_invocation_expression","package_name":"",
///         "package_path":".","function_name":"println",
///         "children":[{"type":"simple_variable_reference_expression",
///                      "variable_name":"x"}]}"#,
/// ).expect("valid parse-tree JSON");
/// let expression = build_expression(&node).expect("materializes");
/// assert_eq!(expression.generate_expression(), "println(x)");
/// ```
pub fn build_expression(node: &ParseTreeNode) -> Result<Expression, ParseTreeError> {
    let mut expression = create_from_kind(node)?;
    expression.init_from_json(node)?;
    Ok(expression)
}

impl Expression {
    /// Replaces this node's entire state from a parse-tree JSON node.
    ///
    /// Children are rebuilt from scratch in source order; the previous child
    /// list does not survive. All attribute writes are silent, so an embedder
    /// performing a bulk re-initialization emits one coarse-grained event
    /// itself instead of one per field. On error the node keeps its prior
    /// state.
    pub fn init_from_json(&mut self, node: &ParseTreeNode) -> Result<(), ParseTreeError> {
        init_node(self, node, 0)
    }
}

fn init_node(
    expression: &mut Expression,
    node: &ParseTreeNode,
    depth: usize,
) -> Result<(), ParseTreeError> {
    if depth > MAX_FRAGMENT_DEPTH {
        return Err(ParseTreeError::TooDeep {
            limit: MAX_FRAGMENT_DEPTH,
        });
    }
    maybe_grow(STACKER_STACK_SIZE_BYTES / 128, STACKER_STACK_SIZE_BYTES, || {
        trace!(node_type = %node.node_type, depth, "materializing parse-tree node");
        match expression {
            Expression::FunctionInvocation(invocation) => init_invocation(invocation, node, depth),
            Expression::BasicLiteral(literal) => init_literal(literal, node),
            Expression::VariableReference(reference) => init_reference(reference, node),
        }
    })
}

fn init_invocation(
    invocation: &mut FunctionInvocationExpression,
    node: &ParseTreeNode,
    depth: usize,
) -> Result<(), ParseTreeError> {
    let package_name = node.require_package_name()?.to_string();
    let full_package_name = PackageRef::from_package_path(node.require_package_path()?);
    let function_name = node.require_function_name()?.to_string();

    // Single pass: build each child and accumulate its preserving string
    // into the flattened argument text at the same time.
    let mut children = Vec::with_capacity(node.children.len());
    let mut args_text = Vec::with_capacity(node.children.len());
    for child_node in &node.children {
        let mut child = create_from_kind(child_node)?;
        init_node(&mut child, child_node, depth + 1)?;
        args_text.push(child.expression_string());
        children.push(child);
    }
    let params = if children.is_empty() {
        None
    } else {
        Some(args_text.join(ARGS_TEXT_SEPARATOR))
    };

    invocation.commit_init(
        package_name,
        full_package_name,
        function_name,
        children,
        params,
        node.whitespace.clone(),
    );
    Ok(())
}

fn init_literal(
    literal: &mut BasicLiteralExpression,
    node: &ParseTreeNode,
) -> Result<(), ParseTreeError> {
    let tag = node.require_literal_type()?;
    let kind = BasicLiteralKind::from_tag(tag).ok_or_else(|| ParseTreeError::UnsupportedLiteral {
        literal_type: tag.to_string(),
    })?;
    let value = node.require_literal_value()?.to_string();

    literal.commit_init(kind, value, node.whitespace.clone());
    Ok(())
}

fn init_reference(
    reference: &mut VariableReferenceExpression,
    node: &ParseTreeNode,
) -> Result<(), ParseTreeError> {
    let variable_name = node.require_variable_name()?.to_string();

    reference.commit_init(variable_name, node.whitespace.clone());
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn invocation_json(function_name: &str, children: Vec<ParseTreeNode>) -> ParseTreeNode {
        let mut node = ParseTreeNode::of_type(node_types::FUNCTION_INVOCATION);
        node.package_name = Some(String::new());
        node.package_path = Some(".".to_string());
        node.function_name = Some(function_name.to_string());
        node.children = children;
        node
    }

    fn variable_json(name: &str) -> ParseTreeNode {
        let mut node = ParseTreeNode::of_type(node_types::SIMPLE_VARIABLE_REFERENCE);
        node.variable_name = Some(name.to_string());
        node
    }

    #[test]
    fn test_factory_dispatches_on_type() {
        let expression = create_from_kind(&variable_json("x")).expect("known type");
        assert!(matches!(expression, Expression::VariableReference(_)));
    }

    #[test]
    fn test_factory_rejects_unknown_type() {
        let node = ParseTreeNode::of_type("record_literal_expression");
        let err = create_from_kind(&node).unwrap_err();
        assert_eq!(
            err,
            ParseTreeError::UnknownNodeType {
                node_type: "record_literal_expression".to_string()
            }
        );
    }

    #[test]
    fn test_child_order_is_preserved() {
        let node = invocation_json(
            "add",
            vec![variable_json("a"), variable_json("b"), variable_json("c")],
        );
        let expression = build_expression(&node).expect("materializes");
        let names: Vec<String> = expression
            .children()
            .iter()
            .map(Expression::generate_expression)
            .collect();
        assert_eq!(names, vec!["a", "b", "c"]);
        assert_eq!(expression.generate_expression(), "add(a,b,c)");
    }

    #[test]
    fn test_params_seeded_from_children() {
        let node = invocation_json("add", vec![variable_json("a"), variable_json("b")]);
        let expression = build_expression(&node).expect("materializes");
        if let Expression::FunctionInvocation(invocation) = &expression {
            assert_eq!(invocation.params_text(), Some("a, b"));
        } else {
            panic!("expected function invocation");
        }
    }

    #[test]
    fn test_missing_field_fails_before_mutation() {
        let mut target = build_expression(&invocation_json("println", vec![variable_json("x")]))
            .expect("materializes");
        let before = target.clone();

        let mut malformed = ParseTreeNode::of_type(node_types::FUNCTION_INVOCATION);
        malformed.package_name = Some(String::new());
        malformed.package_path = Some(".".to_string());
        // function_name intentionally absent

        let err = target.init_from_json(&malformed).unwrap_err();
        assert!(matches!(err, ParseTreeError::MissingField { field: "function_name", .. }));
        assert_eq!(target, before);
    }

    #[test]
    fn test_unsupported_literal_type() {
        let mut literal = ParseTreeNode::of_type(node_types::BASIC_LITERAL);
        literal.basic_literal_type = Some("blob".to_string());
        literal.basic_literal_value = Some("...".to_string());
        let err = build_expression(&literal).unwrap_err();
        assert_eq!(
            err,
            ParseTreeError::UnsupportedLiteral {
                literal_type: "blob".to_string()
            }
        );
    }

    #[test]
    fn test_depth_limit_is_enforced() {
        let mut node = invocation_json("leaf", vec![]);
        for _ in 0..(MAX_FRAGMENT_DEPTH + 1) {
            node = invocation_json("wrap", vec![node]);
        }
        let err = build_expression(&node).unwrap_err();
        assert_eq!(
            err,
            ParseTreeError::TooDeep {
                limit: MAX_FRAGMENT_DEPTH
            }
        );
    }
}
