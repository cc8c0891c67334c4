//! Name reads.

use crumble_ast::NameExpr;
use crumble_core::CompilationError;

use super::{ExprCompiler, Result};
use crate::scope::NameLookup;

/// Push the value a name refers to.
///
/// Registers push their channel index as a literal; variables push their slot.
pub fn compile_name<'ast>(
    compiler: &mut ExprCompiler<'_, 'ast>,
    name: &NameExpr<'ast>,
) -> Result<()> {
    match compiler.vars.lookup(name.id) {
        Some(NameLookup::Register(register)) => compiler.emitter.push_long(register.index()),
        Some(NameLookup::Variable(slot)) => compiler.emitter.push(slot as i64),
        None => {
            return Err(CompilationError::UndefinedVariable {
                name: name.id.to_string(),
                span: name.span,
            });
        }
    }
    Ok(())
}
