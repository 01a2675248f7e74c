//! Typed expression nodes.
//!
//! Expressions form a closed set of tagged variants behind one shared
//! surface: every variant can render itself preserving its captured
//! formatting, render itself canonically, and re-initialize itself from
//! parse-tree JSON. Children are owned exclusively by their parent and are
//! mutated only through the operations defined here, which keeps whitespace
//! regions and the flattened argument text aligned with the child list.

use crate::event::{SetOptions, TreeEvent};
use crate::printer;
use crate::whitespace::WhitespaceDescriptor;
use config::constants::{ARGS_TEXT_SEPARATOR, CURRENT_PACKAGE_PATH, DEFAULT_FUNCTION_NAME};
use serde::{Deserialize, Serialize};

/// Named child slot holding the formatting around an invocation's
/// package-qualified name reference.
pub const NAME_REF_SLOT: &str = "nameRef";

/// Stable whitespace-region indices per node kind.
///
/// Indices are contract points between capture and rendering: a new
/// structural token reserves a new index, an existing index is never reused
/// with different semantics. Leaf kinds and the invocation kind each have
/// their own index space, as does the invocation's name-reference child slot.
pub mod regions {
    /// Leaf kinds: formatting before the token.
    pub const LEADING: u8 = 0;
    /// Leaf kinds: formatting after the token.
    pub const TRAILING: u8 = 1;
    /// Invocation: between the function name and the opening parenthesis.
    pub const AFTER_NAME: u8 = 1;
    /// Invocation: immediately after the opening parenthesis.
    pub const AFTER_OPEN_PAREN: u8 = 2;
    /// Invocation: after the closing parenthesis.
    pub const AFTER_NODE: u8 = 3;
    /// Name-reference slot: between the package qualifier and the colon.
    pub const AFTER_QUALIFIER: u8 = 1;
    /// Name-reference slot: between the colon and the function name.
    pub const BEFORE_NAME: u8 = 2;
}

/// Tag identifying a concrete expression variant.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ExpressionKind {
    FunctionInvocation,
    BasicLiteral,
    VariableReference,
}

impl ExpressionKind {
    /// The variant's display tag.
    pub fn as_str(&self) -> &'static str {
        match self {
            ExpressionKind::FunctionInvocation => "FunctionInvocationExpression",
            ExpressionKind::BasicLiteral => "BasicLiteralExpression",
            ExpressionKind::VariableReference => "SimpleVariableReferenceExpression",
        }
    }
}

/// Fully qualified package reference of an invocation.
///
/// `CurrentPackage` is the sentinel for "this function lives in the same
/// compilation unit"; it is distinct both from `Unset` and from any literal
/// path, so a parse-tree `package_path` of `.` never leaks through as a
/// one-character path.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum PackageRef {
    /// No qualifier known yet (freshly constructed node).
    #[default]
    Unset,
    /// The current compilation unit.
    CurrentPackage,
    /// An explicit fully qualified path such as `ballerina.io`.
    Path(String),
}

impl PackageRef {
    /// Maps a parse-tree `package_path` value, substituting the sentinel for
    /// the literal `.`.
    pub fn from_package_path(path: &str) -> Self {
        if path == CURRENT_PACKAGE_PATH {
            PackageRef::CurrentPackage
        } else {
            PackageRef::Path(path.to_string())
        }
    }

    /// True for the current-compilation-unit sentinel.
    pub fn is_current(&self) -> bool {
        matches!(self, PackageRef::CurrentPackage)
    }

    /// The explicit path, when one is set.
    pub fn as_path(&self) -> Option<&str> {
        match self {
            PackageRef::Path(path) => Some(path),
            _ => None,
        }
    }
}

/// An expression node.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Expression {
    FunctionInvocation(FunctionInvocationExpression),
    BasicLiteral(BasicLiteralExpression),
    VariableReference(VariableReferenceExpression),
}

impl Expression {
    /// Tag of the concrete variant.
    pub fn kind(&self) -> ExpressionKind {
        match self {
            Expression::FunctionInvocation(_) => ExpressionKind::FunctionInvocation,
            Expression::BasicLiteral(_) => ExpressionKind::BasicLiteral,
            Expression::VariableReference(_) => ExpressionKind::VariableReference,
        }
    }

    /// Child expressions in source order; empty for leaf variants.
    pub fn children(&self) -> &[Expression] {
        match self {
            Expression::FunctionInvocation(invocation) => invocation.arguments(),
            Expression::BasicLiteral(_) | Expression::VariableReference(_) => &[],
        }
    }

    /// This node's captured formatting.
    pub fn whitespace(&self) -> &WhitespaceDescriptor {
        match self {
            Expression::FunctionInvocation(invocation) => &invocation.whitespace,
            Expression::BasicLiteral(literal) => &literal.whitespace,
            Expression::VariableReference(reference) => &reference.whitespace,
        }
    }

    /// Mutable access to this node's captured formatting.
    pub fn whitespace_mut(&mut self) -> &mut WhitespaceDescriptor {
        match self {
            Expression::FunctionInvocation(invocation) => &mut invocation.whitespace,
            Expression::BasicLiteral(literal) => &mut literal.whitespace,
            Expression::VariableReference(reference) => &mut reference.whitespace,
        }
    }

    /// Formatting-preserving rendering of this node and its subtree,
    /// reconstructing original whitespace from the captured regions. Pure
    /// function of current state.
    pub fn expression_string(&self) -> String {
        printer::print(self)
    }

    /// Canonical (whitespace-normalized) rendering, suitable for generating
    /// fresh source independent of original formatting. Pure function of
    /// current state.
    pub fn generate_expression(&self) -> String {
        printer::print_canonical(self)
    }
}

impl From<FunctionInvocationExpression> for Expression {
    fn from(invocation: FunctionInvocationExpression) -> Self {
        Expression::FunctionInvocation(invocation)
    }
}

impl From<BasicLiteralExpression> for Expression {
    fn from(literal: BasicLiteralExpression) -> Self {
        Expression::BasicLiteral(literal)
    }
}

impl From<VariableReferenceExpression> for Expression {
    fn from(reference: VariableReferenceExpression) -> Self {
        Expression::VariableReference(reference)
    }
}

/// A function invocation such as `io:println(x)`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FunctionInvocationExpression {
    package_name: String,
    full_package_name: PackageRef,
    function_name: String,
    params: Option<String>,
    children: Vec<Expression>,
    pub(crate) whitespace: WhitespaceDescriptor,
}

impl FunctionInvocationExpression {
    /// Creates an empty node with default attribute values: no qualifier,
    /// the placeholder function name, no arguments.
    pub fn new() -> Self {
        Self {
            package_name: String::new(),
            full_package_name: PackageRef::Unset,
            function_name: DEFAULT_FUNCTION_NAME.to_string(),
            params: None,
            children: Vec::new(),
            whitespace: WhitespaceDescriptor::default(),
        }
    }

    pub fn function_name(&self) -> &str {
        &self.function_name
    }

    pub fn set_function_name(
        &mut self,
        name: impl Into<String>,
        options: SetOptions,
    ) -> Option<TreeEvent> {
        self.function_name = name.into();
        attribute_event(options, "function_name")
    }

    pub fn package_name(&self) -> &str {
        &self.package_name
    }

    pub fn set_package_name(
        &mut self,
        name: impl Into<String>,
        options: SetOptions,
    ) -> Option<TreeEvent> {
        self.package_name = name.into();
        attribute_event(options, "package_name")
    }

    pub fn full_package_name(&self) -> &PackageRef {
        &self.full_package_name
    }

    pub fn set_full_package_name(
        &mut self,
        package: PackageRef,
        options: SetOptions,
    ) -> Option<TreeEvent> {
        self.full_package_name = package;
        attribute_event(options, "full_package_name")
    }

    /// The flattened, comma-joined argument text.
    ///
    /// This is a cached projection of `arguments()`, recomputed by every
    /// child-mutating operation; it only stands on its own for a node that
    /// has no structured children yet (programmatic construction).
    pub fn params_text(&self) -> Option<&str> {
        self.params.as_deref()
    }

    /// Stores the flattened argument text for a node without structured
    /// children. Overwritten as soon as a child-mutating operation runs.
    pub fn set_params(&mut self, text: impl Into<String>, options: SetOptions) -> Option<TreeEvent> {
        self.params = Some(text.into());
        attribute_event(options, "params")
    }

    /// Argument expressions in source order.
    pub fn arguments(&self) -> &[Expression] {
        &self.children
    }

    /// Canonical text of each argument, derived from the typed children.
    pub fn argument_strings(&self) -> Vec<String> {
        self.children
            .iter()
            .map(Expression::generate_expression)
            .collect()
    }

    /// Appends an argument expression and refreshes the flattened argument
    /// text.
    pub fn add_argument(&mut self, argument: Expression, options: SetOptions) -> Option<TreeEvent> {
        self.children.push(argument);
        self.refresh_params();
        structural_event(options, "argument added")
    }

    /// Removes and returns the argument at `index`, refreshing the flattened
    /// argument text. Returns `None` when `index` is out of range.
    pub fn remove_argument(
        &mut self,
        index: usize,
        options: SetOptions,
    ) -> Option<(Expression, Option<TreeEvent>)> {
        if index >= self.children.len() {
            return None;
        }
        let removed = self.children.remove(index);
        self.refresh_params();
        Some((removed, structural_event(options, "argument removed")))
    }

    /// Whether the package qualifier is rendered at all: suppressed when the
    /// display alias is empty or the full reference is the current-package
    /// sentinel.
    pub fn renders_qualifier(&self) -> bool {
        !self.package_name.is_empty() && !self.full_package_name.is_current()
    }

    /// Replaces the node's entire state in one committed step. The previous
    /// child list does not survive.
    pub(crate) fn commit_init(
        &mut self,
        package_name: String,
        full_package_name: PackageRef,
        function_name: String,
        children: Vec<Expression>,
        params: Option<String>,
        whitespace: WhitespaceDescriptor,
    ) {
        self.package_name = package_name;
        self.full_package_name = full_package_name;
        self.function_name = function_name;
        self.children = children;
        self.params = params;
        self.whitespace = whitespace;
    }

    fn refresh_params(&mut self) {
        if self.children.is_empty() {
            self.params = None;
        } else {
            let rendered: Vec<String> = self
                .children
                .iter()
                .map(Expression::expression_string)
                .collect();
            self.params = Some(rendered.join(ARGS_TEXT_SEPARATOR));
        }
    }
}

impl Default for FunctionInvocationExpression {
    fn default() -> Self {
        Self::new()
    }
}

/// Literal type tag of a basic literal argument.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum BasicLiteralKind {
    #[default]
    String,
    Int,
    Float,
    Boolean,
}

impl BasicLiteralKind {
    /// Maps the parse-tree `basic_literal_type` tag.
    pub fn from_tag(tag: &str) -> Option<Self> {
        match tag {
            "string" => Some(BasicLiteralKind::String),
            "int" => Some(BasicLiteralKind::Int),
            "float" => Some(BasicLiteralKind::Float),
            "boolean" => Some(BasicLiteralKind::Boolean),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            BasicLiteralKind::String => "string",
            BasicLiteralKind::Int => "int",
            BasicLiteralKind::Float => "float",
            BasicLiteralKind::Boolean => "boolean",
        }
    }
}

/// A literal argument such as `"hello"` or `42`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct BasicLiteralExpression {
    literal_kind: BasicLiteralKind,
    value: String,
    pub(crate) whitespace: WhitespaceDescriptor,
}

impl BasicLiteralExpression {
    /// Creates an empty string literal.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn literal_kind(&self) -> BasicLiteralKind {
        self.literal_kind
    }

    /// The source value, without string quotes.
    pub fn value(&self) -> &str {
        &self.value
    }

    pub fn set_value(
        &mut self,
        kind: BasicLiteralKind,
        value: impl Into<String>,
        options: SetOptions,
    ) -> Option<TreeEvent> {
        self.literal_kind = kind;
        self.value = value.into();
        (!options.silent)
            .then(|| TreeEvent::attribute(ExpressionKind::BasicLiteral, "basic_literal_value"))
    }

    /// The literal as it appears in source: string values quoted, everything
    /// else verbatim.
    pub fn token_text(&self) -> String {
        match self.literal_kind {
            BasicLiteralKind::String => format!("\"{}\"", self.value),
            _ => self.value.clone(),
        }
    }

    pub(crate) fn commit_init(
        &mut self,
        literal_kind: BasicLiteralKind,
        value: String,
        whitespace: WhitespaceDescriptor,
    ) {
        self.literal_kind = literal_kind;
        self.value = value;
        self.whitespace = whitespace;
    }
}

/// A plain variable-name argument such as `x`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct VariableReferenceExpression {
    variable_name: String,
    pub(crate) whitespace: WhitespaceDescriptor,
}

impl VariableReferenceExpression {
    /// Creates an empty reference.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn variable_name(&self) -> &str {
        &self.variable_name
    }

    pub fn set_variable_name(
        &mut self,
        name: impl Into<String>,
        options: SetOptions,
    ) -> Option<TreeEvent> {
        self.variable_name = name.into();
        (!options.silent)
            .then(|| TreeEvent::attribute(ExpressionKind::VariableReference, "variable_name"))
    }

    pub(crate) fn commit_init(&mut self, variable_name: String, whitespace: WhitespaceDescriptor) {
        self.variable_name = variable_name;
        self.whitespace = whitespace;
    }
}

fn attribute_event(options: SetOptions, attribute: &'static str) -> Option<TreeEvent> {
    (!options.silent).then(|| TreeEvent::attribute(ExpressionKind::FunctionInvocation, attribute))
}

fn structural_event(options: SetOptions, label: &'static str) -> Option<TreeEvent> {
    (!options.silent).then(|| TreeEvent::structural(ExpressionKind::FunctionInvocation, label))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_node_defaults() {
        let node = FunctionInvocationExpression::new();
        assert_eq!(node.function_name(), "callFunction");
        assert_eq!(node.package_name(), "");
        assert_eq!(node.full_package_name(), &PackageRef::Unset);
        assert!(node.arguments().is_empty());
        assert!(node.params_text().is_none());
    }

    #[test]
    fn test_setters_emit_attribute_events() {
        let mut node = FunctionInvocationExpression::new();
        let event = node
            .set_function_name("println", SetOptions::default())
            .expect("event emitted");
        assert_eq!(event.attribute, Some("function_name"));
        assert_eq!(node.function_name(), "println");
    }

    #[test]
    fn test_silent_setters_emit_nothing() {
        let mut node = FunctionInvocationExpression::new();
        assert!(node
            .set_package_name("io", SetOptions::silently())
            .is_none());
        assert_eq!(node.package_name(), "io");
    }

    #[test]
    fn test_add_remove_argument_refreshes_params() {
        let mut node = FunctionInvocationExpression::new();
        let mut x = VariableReferenceExpression::new();
        x.set_variable_name("x", SetOptions::silently());
        let mut y = VariableReferenceExpression::new();
        y.set_variable_name("y", SetOptions::silently());

        node.add_argument(x.into(), SetOptions::silently());
        node.add_argument(y.into(), SetOptions::silently());
        assert_eq!(node.params_text(), Some("x, y"));

        let (removed, _) = node
            .remove_argument(0, SetOptions::silently())
            .expect("index in range");
        assert_eq!(removed.generate_expression(), "x");
        assert_eq!(node.params_text(), Some("y"));

        node.remove_argument(0, SetOptions::silently());
        assert!(node.params_text().is_none());
    }

    #[test]
    fn test_remove_argument_out_of_range() {
        let mut node = FunctionInvocationExpression::new();
        assert!(node.remove_argument(0, SetOptions::default()).is_none());
    }

    #[test]
    fn test_qualifier_suppression_rule() {
        let mut node = FunctionInvocationExpression::new();
        assert!(!node.renders_qualifier());

        node.set_package_name("io", SetOptions::silently());
        node.set_full_package_name(
            PackageRef::Path("ballerina.io".to_string()),
            SetOptions::silently(),
        );
        assert!(node.renders_qualifier());

        node.set_full_package_name(PackageRef::CurrentPackage, SetOptions::silently());
        assert!(!node.renders_qualifier());
    }

    #[test]
    fn test_package_ref_sentinel_mapping() {
        assert_eq!(PackageRef::from_package_path("."), PackageRef::CurrentPackage);
        assert_eq!(
            PackageRef::from_package_path("ballerina.io"),
            PackageRef::Path("ballerina.io".to_string())
        );
        assert!(PackageRef::from_package_path(".").as_path().is_none());
    }

    #[test]
    fn test_literal_token_text() {
        let mut literal = BasicLiteralExpression::new();
        literal.set_value(BasicLiteralKind::String, "hello", SetOptions::silently());
        assert_eq!(literal.token_text(), "\"hello\"");

        literal.set_value(BasicLiteralKind::Int, "42", SetOptions::silently());
        assert_eq!(literal.token_text(), "42");
    }
}
