//! Source regeneration from expression nodes.
//!
//! Two renderings exist for every node. [`print`] preserves the original
//! formatting by interleaving the grammar's literal tokens with whitespace
//! regions captured at parse time: each token consults its region slot
//! immediately before or after emission, and uncaptured slots read as empty.
//! [`print_canonical`] regenerates source from scratch with fixed separators
//! and ignores captured regions entirely.

use crate::ast::{
    regions, BasicLiteralExpression, Expression, FunctionInvocationExpression,
    VariableReferenceExpression, NAME_REF_SLOT,
};

/// Formatting-preserving rendering.
pub fn print(expression: &Expression) -> String {
    match expression {
        Expression::FunctionInvocation(invocation) => print_invocation(invocation),
        Expression::BasicLiteral(literal) => print_literal(literal),
        Expression::VariableReference(reference) => print_reference(reference),
    }
}

fn print_invocation(invocation: &FunctionInvocationExpression) -> String {
    let ws = &invocation.whitespace;
    let mut text = String::new();
    if invocation.renders_qualifier() {
        text.push_str(invocation.package_name());
        text.push_str(ws.child_region(NAME_REF_SLOT, regions::AFTER_QUALIFIER));
        text.push(':');
    }
    text.push_str(ws.child_region(NAME_REF_SLOT, regions::BEFORE_NAME));
    text.push_str(invocation.function_name());
    text.push_str(ws.region(regions::AFTER_NAME));
    text.push('(');
    text.push_str(ws.region(regions::AFTER_OPEN_PAREN));
    if let Some(params) = invocation.params_text() {
        text.push_str(params);
    }
    text.push(')');
    text.push_str(ws.region(regions::AFTER_NODE));
    text
}

fn print_literal(literal: &BasicLiteralExpression) -> String {
    let ws = &literal.whitespace;
    format!(
        "{}{}{}",
        ws.region(regions::LEADING),
        literal.token_text(),
        ws.region(regions::TRAILING)
    )
}

fn print_reference(reference: &VariableReferenceExpression) -> String {
    let ws = &reference.whitespace;
    format!(
        "{}{}{}",
        ws.region(regions::LEADING),
        reference.variable_name(),
        ws.region(regions::TRAILING)
    )
}

/// Canonical rendering: children joined with a single comma, qualifier
/// rendered as `package:function`, captured whitespace ignored.
pub fn print_canonical(expression: &Expression) -> String {
    match expression {
        Expression::FunctionInvocation(invocation) => {
            let args = invocation.argument_strings().join(",");
            if invocation.renders_qualifier() {
                format!(
                    "{}:{}({})",
                    invocation.package_name(),
                    invocation.function_name(),
                    args
                )
            } else {
                format!("{}({})", invocation.function_name(), args)
            }
        }
        Expression::BasicLiteral(literal) => literal.token_text(),
        Expression::VariableReference(reference) => reference.variable_name().to_string(),
    }
}
