//! Assignment compilation.
//!
//! Every target is declared before the value is compiled, so a variable
//! first assigned here gets a zero-initialised slot (`PUSHL 0`) ahead of
//! the value. The value is computed once; each target but the last takes
//! a `DUP`ed copy.

use crumble_ast::{AssignStmt, Expr};
use crumble_core::CompilationError;

use super::{Result, StmtCompiler};
use crate::scope::Register;

impl<'a, 'ast> StmtCompiler<'a, 'ast> {
    /// Compile `t1 = t2 = ... = value`.
    pub fn compile_assign(&mut self, assign: &AssignStmt<'ast>) -> Result<()> {
        let mut slots = Vec::with_capacity(assign.targets.len());
        for target in assign.targets {
            slots.push(self.declare_target(target)?);
        }

        let Some((&last, rest)) = slots.split_last() else {
            return Err(CompilationError::internal(format!(
                "assignment at {} has no targets",
                assign.span
            )));
        };

        self.expr_compiler().compile(assign.value)?;
        for &slot in rest {
            self.emitter.dup();
            self.emitter.pop(slot as i64);
        }
        self.emitter.pop(last as i64);
        Ok(())
    }

    fn declare_target(&mut self, target: &Expr<'ast>) -> Result<usize> {
        let Expr::Name(name) = target else {
            return Err(CompilationError::InvalidAssignmentTarget {
                span: target.span(),
            });
        };
        if Register::from_name(name.id).is_some() {
            return Err(CompilationError::ReservedRegisterAssignment {
                name: name.id.to_string(),
                span: name.span,
            });
        }

        let declared = self.vars.declare(name.id);
        if declared.is_new {
            self.emitter.push_long(0);
        }
        Ok(declared.slot)
    }
}
