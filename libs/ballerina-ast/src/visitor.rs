use crate::ast::{
    BasicLiteralExpression, Expression, FunctionInvocationExpression, VariableReferenceExpression,
};

pub trait Visitor {
    fn visit_expression(&mut self, expression: &Expression) {
        match expression {
            Expression::FunctionInvocation(invocation) => self.visit_invocation(invocation),
            Expression::BasicLiteral(literal) => self.visit_literal(literal),
            Expression::VariableReference(reference) => self.visit_reference(reference),
        }
    }

    fn visit_invocation(&mut self, invocation: &FunctionInvocationExpression) {
        for argument in invocation.arguments() {
            self.visit_expression(argument);
        }
    }

    fn visit_literal(&mut self, _literal: &BasicLiteralExpression) {}

    fn visit_reference(&mut self, _reference: &VariableReferenceExpression) {}
}
