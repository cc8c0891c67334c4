//! Statement compiler for Crumble.
//!
//! The [`StmtCompiler`] lowers statements to stack code, handling:
//! - Assignments, declaring variables on first use
//! - If/else and while control flow with forward labels
//! - Break/continue against the innermost loop
//! - Expression statements and `pass`
//!
//! Augmented assignment, `for`, `return` and function definitions have no
//! lowering and are rejected with their position.
//!
//! # Example
//!
//! ```ignore
//! let mut compiler = StmtCompiler::new(&mut vars, &mut emitter);
//! compiler.compile_block(module.body)?;
//! ```

mod assign;
mod if_stmt;
mod while_stmt;

use crumble_ast::Stmt;
use crumble_core::CompilationError;

use crate::emit::{Emitter, LoopError};
use crate::expr::ExprCompiler;
use crate::scope::VariableTable;

type Result<T> = std::result::Result<T, CompilationError>;

/// Compiles statements to stack code.
pub struct StmtCompiler<'a, 'ast> {
    /// Variable slots, grown by assignments
    vars: &'a mut VariableTable<'ast>,
    /// Instruction emitter
    emitter: &'a mut Emitter,
}

impl<'a, 'ast> StmtCompiler<'a, 'ast> {
    pub fn new(vars: &'a mut VariableTable<'ast>, emitter: &'a mut Emitter) -> Self {
        Self { vars, emitter }
    }

    /// Compile a statement.
    #[cfg_attr(feature = "profiling", profiling::function)]
    pub fn compile(&mut self, stmt: &Stmt<'ast>) -> Result<()> {
        let span = stmt.span();
        self.emitter.set_line(span.line);

        match stmt {
            Stmt::Expr(expr_stmt) => self.expr_compiler().compile(expr_stmt.expr),
            Stmt::Assign(assign) => self.compile_assign(assign),
            Stmt::If(if_stmt) => self.compile_if(if_stmt),
            Stmt::While(while_stmt) => self.compile_while(while_stmt),
            Stmt::Break(_) => self
                .emitter
                .emit_break()
                .map_err(|e| loop_error(e, span)),
            Stmt::Continue(_) => self
                .emitter
                .emit_continue()
                .map_err(|e| loop_error(e, span)),
            Stmt::Pass(_) => Ok(()),
            Stmt::AugAssign(_) | Stmt::For(_) | Stmt::Return(_) | Stmt::FunctionDef(_) => {
                Err(CompilationError::UnsupportedStatement {
                    kind: stmt.kind_name(),
                    span,
                })
            }
        }
    }

    /// Compile statements in order.
    pub fn compile_block(&mut self, stmts: &[Stmt<'ast>]) -> Result<()> {
        for stmt in stmts {
            self.compile(stmt)?;
        }
        Ok(())
    }

    fn expr_compiler(&mut self) -> ExprCompiler<'_, 'ast> {
        ExprCompiler::new(&*self.vars, &mut *self.emitter)
    }
}

fn loop_error(err: LoopError, span: crumble_core::Span) -> CompilationError {
    match err {
        LoopError::BreakOutsideLoop => CompilationError::BreakOutsideLoop { span },
        LoopError::ContinueOutsideLoop => CompilationError::ContinueOutsideLoop { span },
    }
}


#[cfg(test)]
mod tests {
    use bumpalo::Bump;
    use crumble_ast::{AstBuilder, BinaryOp};
    use crumble_core::Span;

    use super::test_support::compile_stmts;
    use super::*;

    #[test]
    fn expression_statement_leaves_value() {
        let arena = Bump::new();
        let b = AstBuilder::new(&arena);

        let (_, listing) =
            compile_stmts(&[b.expr_stmt(b.call("set_output", &[b.name("A"), b.int(1)]))]).unwrap();
        assert_eq!(listing, ["PUSHL 0", "PUSHL 1", "DWR"]);
    }

    #[test]
    fn pass_emits_nothing() {
        let arena = Bump::new();
        let b = AstBuilder::new(&arena);

        let (program, listing) = compile_stmts(&[b.pass()]).unwrap();
        assert!(program.is_empty());
        assert!(listing.is_empty());
    }

    #[test]
    fn unsupported_statements_report_kind() {
        let arena = Bump::new();
        let b = AstBuilder::new(&arena);

        let cases = [
            (b.at(2, 0).aug_assign(b.name("x"), BinaryOp::Add, b.int(1)), "augmented assignment"),
            (b.at(2, 0).for_stmt(b.name("i"), b.name("A"), &[b.pass()]), "for"),
            (b.at(2, 0).return_stmt(None), "return"),
            (b.at(2, 0).function_def("blink", &[], &[b.pass()]), "function definition"),
        ];
        for (stmt, kind) in cases {
            assert_eq!(
                compile_stmts(&[stmt]).unwrap_err(),
                CompilationError::UnsupportedStatement {
                    kind,
                    span: Span::point(2, 0),
                }
            );
        }
    }

    #[test]
    fn break_and_continue_outside_loop() {
        let arena = Bump::new();
        let b = AstBuilder::new(&arena);

        let err = compile_stmts(&[b.at(4, 2).break_stmt()]).unwrap_err();
        assert_eq!(err, CompilationError::BreakOutsideLoop { span: Span::point(4, 2) });
        assert_eq!(err.to_string(), "at 4:2: no loop to break");

        let err = compile_stmts(&[b.at(5, 2).continue_stmt()]).unwrap_err();
        assert_eq!(err, CompilationError::ContinueOutsideLoop { span: Span::point(5, 2) });
    }

    #[test]
    fn statements_record_source_lines() {
        let arena = Bump::new();
        let b = AstBuilder::new(&arena);

        let stmts = [
            b.at(1, 0).expr_stmt(b.int(1)),
            b.at(3, 0).expr_stmt(b.name("A")),
        ];
        let (program, _) = compile_stmts(&stmts).unwrap();
        assert_eq!(program.lines(), &[1, 1, 3, 3]);
    }
}
