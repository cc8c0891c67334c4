//! Arena-backed AST construction.
//!
//! Front-ends and tests build trees through [`AstBuilder`], which allocates
//! every node in a caller-owned [`Bump`] arena. Nodes are stamped with the
//! builder's current position, set with [`AstBuilder::at`].
//!
//! # Example
//!
//! ```
//! use bumpalo::Bump;
//! use crumble_ast::{AstBuilder, CompareOp};
//!
//! let arena = Bump::new();
//! let b = AstBuilder::new(&arena);
//!
//! // while a > 0: a = a - 1
//! let body = [b.assign(&[b.name("a")], b.sub(b.name("a"), b.int(1)))];
//! let test = b.compare(b.name("a"), &[CompareOp::Gt], &[b.int(0)]);
//! let module = b.module(&[b.assign(&[b.name("a")], b.int(3)), b.while_stmt(test, &body)]);
//! assert_eq!(module.body.len(), 2);
//! ```

use std::cell::Cell;

use bumpalo::Bump;
use crumble_core::Span;

use crate::expr::*;
use crate::ops::{BinaryOp, BoolOp, CompareOp, UnaryOp};
use crate::stmt::*;

/// Builds AST nodes inside an arena.
///
/// Positions are sticky: [`at`](Self::at) moves the position for every node
/// built afterwards, including a parent built around an argument that
/// called `at`. Use [`with_pos`](Self::with_pos) to position a single
/// subtree and restore the previous position.
pub struct AstBuilder<'ast> {
    arena: &'ast Bump,
    position: Cell<Span>,
}

impl<'ast> AstBuilder<'ast> {
    /// Create a builder allocating into `arena`, positioned at 1:0.
    pub fn new(arena: &'ast Bump) -> Self {
        Self {
            arena,
            position: Cell::new(Span::point(1, 0)),
        }
    }

    /// Move the position stamped onto subsequently built nodes.
    pub fn at(&self, line: u32, col: u32) -> &Self {
        self.position.set(Span::point(line, col));
        self
    }

    /// Build `f`'s nodes at `line:col`, then restore the previous position.
    pub fn with_pos<T>(&self, line: u32, col: u32, f: impl FnOnce(&Self) -> T) -> T {
        let saved = self.position.replace(Span::point(line, col));
        let node = f(self);
        self.position.set(saved);
        node
    }

    /// The position stamped onto the next node.
    pub fn span(&self) -> Span {
        self.position.get()
    }

    fn alloc<T>(&self, value: T) -> &'ast T {
        self.arena.alloc(value)
    }

    fn slice<T: Copy>(&self, items: &[T]) -> &'ast [T] {
        self.arena.alloc_slice_copy(items)
    }

    // =========================================================================
    // Expressions
    // =========================================================================

    /// Integer literal.
    pub fn int(&self, value: i64) -> Expr<'ast> {
        self.literal(LiteralKind::Int(value))
    }

    /// Boolean literal.
    pub fn boolean(&self, value: bool) -> Expr<'ast> {
        self.literal(LiteralKind::Bool(value))
    }

    /// Float literal.
    pub fn float(&self, value: f64) -> Expr<'ast> {
        self.literal(LiteralKind::Float(value))
    }

    /// String literal.
    pub fn string(&self, value: &str) -> Expr<'ast> {
        let value = self.arena.alloc_str(value);
        self.literal(LiteralKind::Str(value))
    }

    /// `None` literal.
    pub fn none(&self) -> Expr<'ast> {
        self.literal(LiteralKind::None)
    }

    fn literal(&self, kind: LiteralKind<'ast>) -> Expr<'ast> {
        Expr::Literal(LiteralExpr {
            kind,
            span: self.span(),
        })
    }

    /// Name reference.
    pub fn name(&self, id: &str) -> Expr<'ast> {
        Expr::Name(NameExpr {
            id: self.arena.alloc_str(id),
            span: self.span(),
        })
    }

    /// Binary operation.
    pub fn binary(&self, left: Expr<'ast>, op: BinaryOp, right: Expr<'ast>) -> Expr<'ast> {
        Expr::Binary(self.alloc(BinaryExpr {
            left: self.alloc(left),
            op,
            right: self.alloc(right),
            span: self.span(),
        }))
    }

    /// `left + right`
    pub fn add(&self, left: Expr<'ast>, right: Expr<'ast>) -> Expr<'ast> {
        self.binary(left, BinaryOp::Add, right)
    }

    /// `left - right`
    pub fn sub(&self, left: Expr<'ast>, right: Expr<'ast>) -> Expr<'ast> {
        self.binary(left, BinaryOp::Sub, right)
    }

    /// Unary prefix operation.
    pub fn unary(&self, op: UnaryOp, operand: Expr<'ast>) -> Expr<'ast> {
        Expr::Unary(self.alloc(UnaryExpr {
            op,
            operand: self.alloc(operand),
            span: self.span(),
        }))
    }

    /// Boolean operation over `values`.
    pub fn bool_op(&self, op: BoolOp, values: &[Expr<'ast>]) -> Expr<'ast> {
        Expr::BoolOp(self.alloc(BoolOpExpr {
            op,
            values: self.slice(values),
            span: self.span(),
        }))
    }

    /// Comparison, chained when `ops` has more than one entry.
    pub fn compare(
        &self,
        left: Expr<'ast>,
        ops: &[CompareOp],
        comparators: &[Expr<'ast>],
    ) -> Expr<'ast> {
        Expr::Compare(self.alloc(CompareExpr {
            left: self.alloc(left),
            ops: self.slice(ops),
            comparators: self.slice(comparators),
            span: self.span(),
        }))
    }

    /// Call of a plain name.
    pub fn call(&self, func: &str, args: &[Expr<'ast>]) -> Expr<'ast> {
        let func = self.name(func);
        self.call_expr(func, args)
    }

    /// Call of an arbitrary callee expression.
    pub fn call_expr(&self, func: Expr<'ast>, args: &[Expr<'ast>]) -> Expr<'ast> {
        Expr::Call(self.alloc(CallExpr {
            func: self.alloc(func),
            args: self.slice(args),
            span: self.span(),
        }))
    }

    /// Attribute access.
    pub fn attribute(&self, value: Expr<'ast>, attr: &str) -> Expr<'ast> {
        Expr::Attribute(self.alloc(AttributeExpr {
            value: self.alloc(value),
            attr: self.arena.alloc_str(attr),
            span: self.span(),
        }))
    }

    /// Subscript.
    pub fn subscript(&self, value: Expr<'ast>, index: Expr<'ast>) -> Expr<'ast> {
        Expr::Subscript(self.alloc(SubscriptExpr {
            value: self.alloc(value),
            index: self.alloc(index),
            span: self.span(),
        }))
    }

    // =========================================================================
    // Statements
    // =========================================================================

    /// Expression statement.
    pub fn expr_stmt(&self, expr: Expr<'ast>) -> Stmt<'ast> {
        Stmt::Expr(ExprStmt {
            expr: self.alloc(expr),
            span: self.span(),
        })
    }

    /// Assignment to one or more targets.
    pub fn assign(&self, targets: &[Expr<'ast>], value: Expr<'ast>) -> Stmt<'ast> {
        Stmt::Assign(self.alloc(AssignStmt {
            targets: self.slice(targets),
            value: self.alloc(value),
            span: self.span(),
        }))
    }

    /// Augmented assignment.
    pub fn aug_assign(&self, target: Expr<'ast>, op: BinaryOp, value: Expr<'ast>) -> Stmt<'ast> {
        Stmt::AugAssign(self.alloc(AugAssignStmt {
            target: self.alloc(target),
            op,
            value: self.alloc(value),
            span: self.span(),
        }))
    }

    /// If statement; pass an empty `orelse` for no else branch.
    pub fn if_stmt(
        &self,
        test: Expr<'ast>,
        body: &[Stmt<'ast>],
        orelse: &[Stmt<'ast>],
    ) -> Stmt<'ast> {
        Stmt::If(self.alloc(IfStmt {
            test: self.alloc(test),
            body: self.slice(body),
            orelse: self.slice(orelse),
            span: self.span(),
        }))
    }

    /// While loop.
    pub fn while_stmt(&self, test: Expr<'ast>, body: &[Stmt<'ast>]) -> Stmt<'ast> {
        Stmt::While(self.alloc(WhileStmt {
            test: self.alloc(test),
            body: self.slice(body),
            span: self.span(),
        }))
    }

    /// For loop.
    pub fn for_stmt(&self, target: Expr<'ast>, iter: Expr<'ast>, body: &[Stmt<'ast>]) -> Stmt<'ast> {
        Stmt::For(self.alloc(ForStmt {
            target: self.alloc(target),
            iter: self.alloc(iter),
            body: self.slice(body),
            span: self.span(),
        }))
    }

    /// Return statement.
    pub fn return_stmt(&self, value: Option<Expr<'ast>>) -> Stmt<'ast> {
        Stmt::Return(ReturnStmt {
            value: value.map(|v| self.alloc(v)),
            span: self.span(),
        })
    }

    /// Function definition.
    pub fn function_def(&self, name: &str, params: &[&str], body: &[Stmt<'ast>]) -> Stmt<'ast> {
        let params: Vec<&'ast str> = params
            .iter()
            .map(|p| -> &'ast str { self.arena.alloc_str(p) })
            .collect();
        Stmt::FunctionDef(self.alloc(FunctionDefStmt {
            name: self.arena.alloc_str(name),
            params: self.slice(&params),
            body: self.slice(body),
            span: self.span(),
        }))
    }

    /// `break`
    pub fn break_stmt(&self) -> Stmt<'ast> {
        Stmt::Break(BreakStmt { span: self.span() })
    }

    /// `continue`
    pub fn continue_stmt(&self) -> Stmt<'ast> {
        Stmt::Continue(ContinueStmt { span: self.span() })
    }

    /// `pass`
    pub fn pass(&self) -> Stmt<'ast> {
        Stmt::Pass(PassStmt { span: self.span() })
    }

    /// A module holding `body`.
    pub fn module(&self, body: &[Stmt<'ast>]) -> Module<'ast> {
        Module {
            body: self.slice(body),
            span: Span::point(1, 0),
        }
    }
}
