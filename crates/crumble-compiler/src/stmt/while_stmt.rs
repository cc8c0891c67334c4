//! While loop compilation.
//!
//! Handles while loops with a loop context for break/continue statements.

use crumble_ast::WhileStmt;

use super::{Result, StmtCompiler};

impl<'a, 'ast> StmtCompiler<'a, 'ast> {
    /// Compile a while loop.
    ///
    /// Bytecode layout:
    /// ```text
    /// start:
    /// [test]
    /// BEZ end
    /// [body]
    /// BRA start
    /// end:
    /// ```
    pub fn compile_while(&mut self, while_stmt: &WhileStmt<'ast>) -> Result<()> {
        let start = self.emitter.new_label();
        let end = self.emitter.new_label();

        self.emitter.define_label(start);
        self.expr_compiler().compile(while_stmt.test)?;
        self.emitter.branch_if_zero(end);

        self.emitter.enter_loop(start, end);
        let body = self.compile_block(while_stmt.body);
        self.emitter.exit_loop();
        body?;

        self.emitter.branch_always(start);
        self.emitter.define_label(end);
        Ok(())
    }
}
