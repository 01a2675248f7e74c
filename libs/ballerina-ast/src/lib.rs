//! # Ballerina AST Crate
//!
//! Keeps a textual Ballerina source fragment and its typed expression tree
//! in sync, both directions. The external fragment parser turns text into
//! parse-tree JSON; this crate materializes that JSON into live, mutable
//! expression nodes and regenerates source text from them at any time,
//! before or after programmatic mutation.
//!
//! ## Architecture
//!
//! ```text
//! Editor: fragment text → fragment parser → parse-tree JSON
//! Core: parse-tree JSON → ballerina-ast (typed expression tree)
//! Core: expression tree → source text (formatting-preserving or canonical)
//! ```
//!
//! ## Usage
//!
//! ```rust
//! use ballerina_ast::{build_expression, ParseTreeNode};
//!
//! let node: ParseTreeNode = serde_json::from_str(
//!     r#"{"type":"function_invocation_expression","package_name":"io",
//!         "package_path":"ballerina.io","function_name":"println",
//!         "children":[{"type":"simple_variable_reference_expression",
//!                      "variable_name":"x"}]}"#,
//! ).expect("valid parse-tree JSON");
//! let expression = build_expression(&node).expect("materializes");
//! assert_eq!(expression.generate_expression(), "io:println(x)");
//! ```
//!
//! ## Design Principles
//!
//! - **Typed AST**: Expression variants are a closed set of Rust enums/structs
//! - **Formatting Preservation**: Every node carries a whitespace descriptor
//!   consulted during rendering
//! - **Atomic Mutation**: No operation partially mutates a node and then fails
//! - **Explicit Events**: Mutations return typed change events; observers
//!   register on an explicit registry, not an ambient channel

pub mod ast;
pub mod builder;
pub mod event;
pub mod fragment;
pub mod parse_tree;
pub mod printer;
pub mod visitor;
pub mod whitespace;

// Re-exports for convenience
pub use ast::{
    regions, BasicLiteralExpression, BasicLiteralKind, Expression, ExpressionKind,
    FunctionInvocationExpression, PackageRef, VariableReferenceExpression, NAME_REF_SLOT,
};
pub use builder::{build_expression, create_from_kind, ParseTreeError};
pub use event::{Observers, SetOptions, TreeEvent, TreeEventKind};
pub use fragment::{parse_tree_from_json, FragmentError, FragmentKind, FragmentParser};
pub use parse_tree::{node_types, ParseTreeNode};
pub use printer::{print, print_canonical};
pub use visitor::Visitor;
pub use whitespace::{RegionMap, WhitespaceDescriptor};
