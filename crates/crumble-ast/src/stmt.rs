//! Statement AST nodes for Crumble.
//!
//! Provides nodes for all statement types a front-end may produce:
//! - Assignments (plain, chained and augmented)
//! - Control flow (if/else, while, for)
//! - Jump statements (break, continue, return)
//! - Expression statements, `pass`, and function definitions

use crate::expr::Expr;
use crate::ops::BinaryOp;
use crumble_core::Span;

/// A whole program.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Module<'ast> {
    /// Top-level statements, in source order
    pub body: &'ast [Stmt<'ast>],
    /// Source location
    pub span: Span,
}

/// A statement.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Stmt<'ast> {
    /// Expression statement
    Expr(ExprStmt<'ast>),
    /// Assignment (`a = b = value`)
    Assign(&'ast AssignStmt<'ast>),
    /// Augmented assignment (`a += value`)
    AugAssign(&'ast AugAssignStmt<'ast>),
    /// If statement
    If(&'ast IfStmt<'ast>),
    /// While loop
    While(&'ast WhileStmt<'ast>),
    /// For loop
    For(&'ast ForStmt<'ast>),
    /// Return statement
    Return(ReturnStmt<'ast>),
    /// Function definition
    FunctionDef(&'ast FunctionDefStmt<'ast>),
    /// Break statement
    Break(BreakStmt),
    /// Continue statement
    Continue(ContinueStmt),
    /// Pass statement
    Pass(PassStmt),
}

impl<'ast> Stmt<'ast> {
    /// Get the span of this statement.
    pub fn span(&self) -> Span {
        match self {
            Self::Expr(s) => s.span,
            Self::Assign(s) => s.span,
            Self::AugAssign(s) => s.span,
            Self::If(s) => s.span,
            Self::While(s) => s.span,
            Self::For(s) => s.span,
            Self::Return(s) => s.span,
            Self::FunctionDef(s) => s.span,
            Self::Break(s) => s.span,
            Self::Continue(s) => s.span,
            Self::Pass(s) => s.span,
        }
    }

    /// Human-readable name of the node kind, for diagnostics.
    pub fn kind_name(&self) -> &'static str {
        match self {
            Self::Expr(_) => "expression",
            Self::Assign(_) => "assignment",
            Self::AugAssign(_) => "augmented assignment",
            Self::If(_) => "if",
            Self::While(_) => "while",
            Self::For(_) => "for",
            Self::Return(_) => "return",
            Self::FunctionDef(_) => "function definition",
            Self::Break(_) => "break",
            Self::Continue(_) => "continue",
            Self::Pass(_) => "pass",
        }
    }
}

/// An expression evaluated as a statement.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ExprStmt<'ast> {
    /// The expression
    pub expr: &'ast Expr<'ast>,
    /// Source location
    pub span: Span,
}

/// An assignment statement.
///
/// Examples:
/// - `x = 5`
/// - `a = b = 1` (two targets, one value)
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AssignStmt<'ast> {
    /// Assignment targets, left to right
    pub targets: &'ast [Expr<'ast>],
    /// The assigned value
    pub value: &'ast Expr<'ast>,
    /// Source location
    pub span: Span,
}

/// An augmented assignment (`x += 1`).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AugAssignStmt<'ast> {
    /// Target
    pub target: &'ast Expr<'ast>,
    /// Operator applied before the store
    pub op: BinaryOp,
    /// Right-hand side
    pub value: &'ast Expr<'ast>,
    /// Source location
    pub span: Span,
}

/// An if statement.
///
/// `elif` chains are represented as an `orelse` holding a single nested `If`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct IfStmt<'ast> {
    /// Condition
    pub test: &'ast Expr<'ast>,
    /// Then branch
    pub body: &'ast [Stmt<'ast>],
    /// Else branch (empty when absent)
    pub orelse: &'ast [Stmt<'ast>],
    /// Source location
    pub span: Span,
}

/// A while loop.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct WhileStmt<'ast> {
    /// Condition
    pub test: &'ast Expr<'ast>,
    /// Body
    pub body: &'ast [Stmt<'ast>],
    /// Source location
    pub span: Span,
}

/// A for loop (`for target in iter:`).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ForStmt<'ast> {
    /// Loop variable
    pub target: &'ast Expr<'ast>,
    /// Iterated expression
    pub iter: &'ast Expr<'ast>,
    /// Body
    pub body: &'ast [Stmt<'ast>],
    /// Source location
    pub span: Span,
}

/// A return statement.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ReturnStmt<'ast> {
    /// Optional return value
    pub value: Option<&'ast Expr<'ast>>,
    /// Source location
    pub span: Span,
}

/// A function definition.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FunctionDefStmt<'ast> {
    /// Function name
    pub name: &'ast str,
    /// Parameter names
    pub params: &'ast [&'ast str],
    /// Body
    pub body: &'ast [Stmt<'ast>],
    /// Source location
    pub span: Span,
}

/// A break statement.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BreakStmt {
    /// Source location
    pub span: Span,
}

/// A continue statement.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ContinueStmt {
    /// Source location
    pub span: Span,
}

/// A pass statement.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PassStmt {
    /// Source location
    pub span: Span,
}
