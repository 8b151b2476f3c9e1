pub mod factory;
pub mod printer;

use std::str::FromStr;

use serde::Serialize;

use crate::error::CompileError;

pub use factory::NodeFactory;

/// Root of a compilation unit.
#[derive(Debug, Clone, Default, Serialize)]
pub struct SyntaxTree {
    pub functions: FunctionTable,
}

impl SyntaxTree {
    pub fn new() -> Self {
        Self::default()
    }
}

/// Ordered, append-only list of functions. Names compare case-insensitively.
#[derive(Debug, Clone, Default, Serialize)]
#[serde(transparent)]
pub struct FunctionTable {
    functions: Vec<Function>,
}

impl FunctionTable {
    /// Append `function` and return its index.
    pub fn push(&mut self, function: Function) -> usize {
        let index = self.functions.len();
        tracing::debug!(name = %function.name, index, "function added");
        self.functions.push(function);
        index
    }

    /// Index of the first function named `name`, ignoring ASCII case.
    pub fn index_of(&self, name: &str) -> Option<usize> {
        self.functions
            .iter()
            .position(|f| f.name.eq_ignore_ascii_case(name))
    }

    pub fn lookup(&self, name: &str) -> Option<&Function> {
        self.index_of(name).map(|i| &self.functions[i])
    }

    pub fn get(&self, index: usize) -> Option<&Function> {
        self.functions.get(index)
    }

    pub fn get_mut(&mut self, index: usize) -> Option<&mut Function> {
        self.functions.get_mut(index)
    }

    pub fn len(&self) -> usize {
        self.functions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.functions.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Function> {
        self.functions.iter()
    }
}

impl<'a> IntoIterator for &'a FunctionTable {
    type Item = &'a Function;
    type IntoIter = std::slice::Iter<'a, Function>;

    fn into_iter(self) -> Self::IntoIter {
        self.functions.iter()
    }
}

#[derive(Debug, Clone, Default, Serialize)]
pub struct Function {
    pub name: String,
    /// Free-form tags in declaration order; duplicates are kept.
    pub attributes: Vec<String>,
    /// Parameter names; a variable term's index points into this list.
    pub parameters: Vec<String>,
    pub body: Option<Block>,
}

impl Function {
    pub fn arity(&self) -> usize {
        self.parameters.len()
    }

    pub fn parameter_index(&self, name: &str) -> Option<usize> {
        self.parameters
            .iter()
            .position(|p| p.eq_ignore_ascii_case(name))
    }

    pub fn has_attribute(&self, tag: &str) -> bool {
        self.attributes.iter().any(|a| a.eq_ignore_ascii_case(tag))
    }
}

#[derive(Debug, Clone, Default, Serialize)]
#[serde(transparent)]
pub struct Block {
    statements: Vec<Statement>,
}

impl Block {
    pub fn push(&mut self, statement: Statement) {
        self.statements.push(statement);
    }

    pub fn get(&self, index: usize) -> Option<&Statement> {
        self.statements.get(index)
    }

    pub fn get_mut(&mut self, index: usize) -> Option<&mut Statement> {
        self.statements.get_mut(index)
    }

    pub fn len(&self) -> usize {
        self.statements.len()
    }

    pub fn is_empty(&self) -> bool {
        self.statements.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Statement> {
        self.statements.iter()
    }
}

impl<'a> IntoIterator for &'a Block {
    type Item = &'a Statement;
    type IntoIter = std::slice::Iter<'a, Statement>;

    fn into_iter(self) -> Self::IntoIter {
        self.statements.iter()
    }
}

#[derive(Debug, Clone, Serialize)]
#[serde(tag = "type")]
pub enum Statement {
    If(IfStatement),
    Return(ReturnStatement),
}

impl Statement {
    pub fn kind(&self) -> StatementKind {
        match self {
            Self::If(_) => StatementKind::If,
            Self::Return(_) => StatementKind::Return,
        }
    }
}

#[derive(Debug, Clone, Default, Serialize)]
pub struct IfStatement {
    pub condition: Expression,
    pub then_block: Block,
    /// `None` means there is no else clause, which differs from an empty one.
    pub else_block: Option<Block>,
}

#[derive(Debug, Clone, Default, Serialize)]
pub struct ReturnStatement {
    pub value: Expression,
}

#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Serialize, strum::Display, strum::EnumString,
)]
#[strum(serialize_all = "lowercase")]
pub enum StatementKind {
    If,
    Return,
}

impl StatementKind {
    pub fn parse_tag(tag: &str) -> Result<Self, CompileError> {
        Self::from_str(tag).map_err(|_| CompileError::unknown_node_kind("statement", tag))
    }
}

/// One term, or two terms joined by a binary operator.
#[derive(Debug, Clone, Default, Serialize)]
pub struct Expression {
    pub term1: Option<Term>,
    /// Only meaningful when `op` is not [`BinaryOp::None`].
    pub term2: Option<Term>,
    pub op: BinaryOp,
}

impl Expression {
    pub fn first_term(&self) -> Option<&Term> {
        self.term1.as_ref()
    }

    /// The right operand, or `None` for a single-term expression whatever
    /// `term2` holds.
    pub fn second_term(&self) -> Option<&Term> {
        match self.op {
            BinaryOp::None => None,
            _ => self.term2.as_ref(),
        }
    }

    pub fn is_binary(&self) -> bool {
        self.op != BinaryOp::None
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, strum::Display)]
pub enum BinaryOp {
    #[default]
    #[strum(serialize = "none")]
    None,
    #[strum(serialize = "+")]
    Add,
    #[strum(serialize = "-")]
    Subtract,
    #[strum(serialize = "<")]
    Less,
}

#[derive(Debug, Clone, Serialize)]
#[serde(tag = "type")]
pub enum Term {
    Constant(ConstantTerm),
    Variable(VariableTerm),
    Call(CallTerm),
}

impl Term {
    pub fn kind(&self) -> TermKind {
        match self {
            Self::Constant(_) => TermKind::Constant,
            Self::Variable(_) => TermKind::Variable,
            Self::Call(_) => TermKind::Call,
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct ConstantTerm {
    pub value: i64,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct VariableTerm {
    /// Position in the enclosing function's parameter list.
    pub index: usize,
}

#[derive(Debug, Clone, Default, Serialize)]
pub struct CallTerm {
    /// Position in the function table.
    pub function: usize,
    pub arguments: Vec<Expression>,
}

#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Serialize, strum::Display, strum::EnumString,
)]
#[strum(serialize_all = "lowercase")]
pub enum TermKind {
    Constant,
    Variable,
    #[strum(to_string = "call", serialize = "function-call")]
    Call,
}

impl TermKind {
    pub fn parse_tag(tag: &str) -> Result<Self, CompileError> {
        Self::from_str(tag).map_err(|_| CompileError::unknown_node_kind("term", tag))
    }
}
