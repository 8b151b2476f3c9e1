use tracing::trace;

use crate::ast::*;

/// Builds empty-shelled nodes for the parser to fill in.
///
/// Variant selection goes through [`StatementKind`] and [`TermKind`], so a
/// request for a variant that doesn't exist can only arise from a textual tag
/// and is reported by `parse_tag`.
#[derive(Debug, Clone, Copy, Default)]
pub struct NodeFactory;

impl NodeFactory {
    pub fn new() -> Self {
        Self
    }

    pub fn create_tree(&self) -> SyntaxTree {
        trace!("create tree");
        SyntaxTree::default()
    }

    pub fn create_block(&self) -> Block {
        trace!("create block");
        Block::default()
    }

    /// No terms, operator [`BinaryOp::None`].
    pub fn create_expression(&self) -> Expression {
        trace!("create expression");
        Expression::default()
    }

    /// Unnamed, no attributes, no parameters, no body.
    pub fn create_function(&self) -> Function {
        trace!("create function");
        Function::default()
    }

    pub fn create_statement(&self, kind: StatementKind) -> Statement {
        trace!(%kind, "create statement");
        match kind {
            StatementKind::If => Statement::If(IfStatement::default()),
            StatementKind::Return => Statement::Return(ReturnStatement::default()),
        }
    }

    pub fn create_term(&self, kind: TermKind) -> Term {
        trace!(%kind, "create term");
        match kind {
            TermKind::Constant => Term::Constant(ConstantTerm::default()),
            TermKind::Variable => Term::Variable(VariableTerm::default()),
            TermKind::Call => Term::Call(CallTerm::default()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[test]
    fn block_starts_empty_and_keeps_append_order() {
        let factory = NodeFactory::new();
        let mut block = factory.create_block();
        assert_eq!(block.len(), 0);
        assert!(block.is_empty());

        let kinds = [
            StatementKind::If,
            StatementKind::Return,
            StatementKind::Return,
            StatementKind::If,
        ];
        for kind in kinds {
            block.push(factory.create_statement(kind));
        }
        assert_eq!(block.len(), kinds.len());
        let got: Vec<StatementKind> = block.iter().map(Statement::kind).collect();
        assert_eq!(got, kinds);
    }

    #[test]
    fn expression_starts_without_terms() {
        let expr = NodeFactory::new().create_expression();
        assert!(expr.term1.is_none());
        assert!(expr.term2.is_none());
        assert_eq!(expr.op, BinaryOp::None);
    }

    #[test]
    fn single_term_expression_without_term2() {
        let factory = NodeFactory::new();
        let mut expr = factory.create_expression();
        let mut term = factory.create_term(TermKind::Constant);
        if let Term::Constant(c) = &mut term {
            c.value = 42;
        }
        expr.term1 = Some(term);

        assert_eq!(expr.op, BinaryOp::None);
        assert!(matches!(
            expr.first_term(),
            Some(Term::Constant(ConstantTerm { value: 42 }))
        ));
        assert!(expr.second_term().is_none());
    }

    #[test]
    fn function_starts_blank() {
        let function = NodeFactory::new().create_function();
        assert!(function.name.is_empty());
        assert!(function.attributes.is_empty());
        assert!(function.parameters.is_empty());
        assert!(function.body.is_none());
    }

    #[test]
    fn if_statement_has_no_else_clause() {
        let statement = NodeFactory::new().create_statement(StatementKind::If);
        match statement {
            Statement::If(s) => {
                assert!(s.then_block.is_empty());
                assert!(s.else_block.is_none());
            }
            other => panic!("expected if statement, got {other:?}"),
        }
    }

    #[rstest]
    #[case(TermKind::Constant)]
    #[case(TermKind::Variable)]
    #[case(TermKind::Call)]
    fn term_matches_requested_kind(#[case] kind: TermKind) {
        assert_eq!(NodeFactory::new().create_term(kind).kind(), kind);
    }

    #[test]
    fn call_term_arguments_grow() {
        let factory = NodeFactory::new();
        let mut term = factory.create_term(TermKind::Call);
        let Term::Call(call) = &mut term else {
            panic!("expected call term");
        };
        assert!(call.arguments.is_empty());
        call.function = 3;
        call.arguments.push(factory.create_expression());
        call.arguments.push(factory.create_expression());
        assert_eq!(call.arguments.len(), 2);
        assert_eq!(call.function, 3);
    }

    #[test]
    fn statement_from_textual_tag() {
        let factory = NodeFactory::new();
        let kind = StatementKind::parse_tag("return").expect("known tag");
        assert_eq!(factory.create_statement(kind).kind(), StatementKind::Return);
        assert!(StatementKind::parse_tag("goto").is_err());
    }

    #[test]
    fn tree_starts_with_empty_table() {
        let tree = NodeFactory::new().create_tree();
        assert!(tree.functions.is_empty());
    }
}
