//! If/else compilation.

use crumble_ast::IfStmt;

use super::{Result, StmtCompiler};

impl<'a, 'ast> StmtCompiler<'a, 'ast> {
    /// Compile an if statement.
    ///
    /// Bytecode layout:
    /// ```text
    /// [test]
    /// BEZ else
    /// [body]
    /// BRA end        (only with an else branch)
    /// else:
    /// [orelse]
    /// end:
    /// ```
    pub fn compile_if(&mut self, if_stmt: &IfStmt<'ast>) -> Result<()> {
        self.expr_compiler().compile(if_stmt.test)?;

        let else_label = self.emitter.new_label();
        self.emitter.branch_if_zero(else_label);
        self.compile_block(if_stmt.body)?;

        if if_stmt.orelse.is_empty() {
            self.emitter.define_label(else_label);
            return Ok(());
        }

        let end_label = self.emitter.new_label();
        self.emitter.branch_always(end_label);
        self.emitter.define_label(else_label);
        self.compile_block(if_stmt.orelse)?;
        self.emitter.define_label(end_label);
        Ok(())
    }
}
