//! Expression AST nodes for Crumble.
//!
//! Provides nodes for all expression types a front-end may produce:
//! - Literals (integers, booleans, and the unsupported float/string/none)
//! - Names (variables and the reserved registers)
//! - Binary, unary, boolean and comparison operations
//! - Calls, attribute access and subscripts

use crate::ops::{BinaryOp, BoolOp, CompareOp, UnaryOp};
use crumble_core::Span;

/// An expression.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Expr<'ast> {
    /// Literal value
    Literal(LiteralExpr<'ast>),
    /// Name reference
    Name(NameExpr<'ast>),
    /// Binary operation
    Binary(&'ast BinaryExpr<'ast>),
    /// Unary prefix operation
    Unary(&'ast UnaryExpr<'ast>),
    /// `and` / `or` over two or more operands
    BoolOp(&'ast BoolOpExpr<'ast>),
    /// Comparison, possibly chained
    Compare(&'ast CompareExpr<'ast>),
    /// Function call
    Call(&'ast CallExpr<'ast>),
    /// Attribute access (`value.attr`)
    Attribute(&'ast AttributeExpr<'ast>),
    /// Subscript (`value[index]`)
    Subscript(&'ast SubscriptExpr<'ast>),
}

impl<'ast> Expr<'ast> {
    /// Get the span of this expression.
    pub fn span(&self) -> Span {
        match self {
            Self::Literal(e) => e.span,
            Self::Name(e) => e.span,
            Self::Binary(e) => e.span,
            Self::Unary(e) => e.span,
            Self::BoolOp(e) => e.span,
            Self::Compare(e) => e.span,
            Self::Call(e) => e.span,
            Self::Attribute(e) => e.span,
            Self::Subscript(e) => e.span,
        }
    }

    /// Human-readable name of the node kind, for diagnostics.
    pub fn kind_name(&self) -> &'static str {
        match self {
            Self::Literal(_) => "literal",
            Self::Name(_) => "name",
            Self::Binary(_) => "binary operation",
            Self::Unary(_) => "unary operation",
            Self::BoolOp(_) => "boolean operation",
            Self::Compare(_) => "comparison",
            Self::Call(_) => "call",
            Self::Attribute(_) => "attribute",
            Self::Subscript(_) => "subscript",
        }
    }

    /// The name if this is a plain name reference.
    pub fn as_name(&self) -> Option<&NameExpr<'ast>> {
        match self {
            Self::Name(name) => Some(name),
            _ => None,
        }
    }
}

/// A literal value.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LiteralExpr<'ast> {
    /// The literal kind
    pub kind: LiteralKind<'ast>,
    /// Source location
    pub span: Span,
}

/// The kind of literal.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum LiteralKind<'ast> {
    /// Integer literal
    Int(i64),
    /// Boolean literal (`True` / `False`)
    Bool(bool),
    /// Float literal
    Float(f64),
    /// String literal
    Str(&'ast str),
    /// `None`
    None,
}

impl LiteralKind<'_> {
    /// Human-readable name of the literal type, for diagnostics.
    pub fn type_name(&self) -> &'static str {
        match self {
            LiteralKind::Int(_) => "int",
            LiteralKind::Bool(_) => "bool",
            LiteralKind::Float(_) => "float",
            LiteralKind::Str(_) => "str",
            LiteralKind::None => "NoneType",
        }
    }
}

/// A name reference.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NameExpr<'ast> {
    /// The identifier
    pub id: &'ast str,
    /// Source location
    pub span: Span,
}

/// A binary operation.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BinaryExpr<'ast> {
    /// Left operand
    pub left: &'ast Expr<'ast>,
    /// Operator
    pub op: BinaryOp,
    /// Right operand
    pub right: &'ast Expr<'ast>,
    /// Source location
    pub span: Span,
}

/// A unary prefix operation.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct UnaryExpr<'ast> {
    /// Operator
    pub op: UnaryOp,
    /// Operand
    pub operand: &'ast Expr<'ast>,
    /// Source location
    pub span: Span,
}

/// A boolean operation over two or more operands.
///
/// `a and b and c` is one node with three values.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BoolOpExpr<'ast> {
    /// Operator
    pub op: BoolOp,
    /// Operands, in source order
    pub values: &'ast [Expr<'ast>],
    /// Source location
    pub span: Span,
}

/// A comparison.
///
/// `a < b <= c` is one node with `ops = [<, <=]` and `comparators = [b, c]`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CompareExpr<'ast> {
    /// Leftmost operand
    pub left: &'ast Expr<'ast>,
    /// Operators, one per comparator
    pub ops: &'ast [CompareOp],
    /// Right-hand operands
    pub comparators: &'ast [Expr<'ast>],
    /// Source location
    pub span: Span,
}

/// A function call.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CallExpr<'ast> {
    /// The function being called (can be any expression)
    pub func: &'ast Expr<'ast>,
    /// Positional arguments
    pub args: &'ast [Expr<'ast>],
    /// Source location
    pub span: Span,
}

/// Attribute access.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AttributeExpr<'ast> {
    /// The object
    pub value: &'ast Expr<'ast>,
    /// The attribute name
    pub attr: &'ast str,
    /// Source location
    pub span: Span,
}

/// Subscript.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SubscriptExpr<'ast> {
    /// The container
    pub value: &'ast Expr<'ast>,
    /// The index
    pub index: &'ast Expr<'ast>,
    /// Source location
    pub span: Span,
}
