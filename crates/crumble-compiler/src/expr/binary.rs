//! Binary, boolean and comparison operators.

use crumble_ast::{BinaryExpr, BinaryOp, BoolOp, BoolOpExpr, CompareExpr, CompareOp};
use crumble_core::CompilationError;

use super::{ExprCompiler, Result};
use crate::emit::Emitter;

/// Compile `left op right`. Only the four arithmetic operators exist on
/// the controller.
pub fn compile_binary<'ast>(
    compiler: &mut ExprCompiler<'_, 'ast>,
    bin: &BinaryExpr<'ast>,
) -> Result<()> {
    compiler.compile(bin.left)?;
    compiler.compile(bin.right)?;

    let emitter = &mut *compiler.emitter;
    match bin.op {
        BinaryOp::Add => emitter.add(),
        BinaryOp::Sub => emitter.sub(),
        BinaryOp::Mul => emitter.mul(),
        BinaryOp::Div => emitter.div(),
        op => {
            return Err(CompilationError::UnsupportedOperator {
                op: op.as_str(),
                span: bin.span,
            });
        }
    }
    Ok(())
}

/// Compile `and`/`or` over all operands.
///
/// Both connectives are bitwise and eager: every operand is evaluated.
pub fn compile_bool_op<'ast>(
    compiler: &mut ExprCompiler<'_, 'ast>,
    bool_op: &BoolOpExpr<'ast>,
) -> Result<()> {
    let Some((first, rest)) = bool_op.values.split_first() else {
        return Err(CompilationError::internal(format!(
            "'{}' at {} has no operands",
            bool_op.op, bool_op.span
        )));
    };

    compiler.compile(first)?;
    for value in rest {
        compiler.compile(value)?;
        match bool_op.op {
            BoolOp::And => compiler.emitter.and(),
            BoolOp::Or => compiler.emitter.or(),
        }
    }
    Ok(())
}

/// Compile a single comparison. `!=` is `EQ` followed by `NOT`.
pub fn compile_compare<'ast>(
    compiler: &mut ExprCompiler<'_, 'ast>,
    cmp: &CompareExpr<'ast>,
) -> Result<()> {
    let (op, right) = match (cmp.ops, cmp.comparators) {
        ([op], [right]) => (*op, right),
        (ops, comparators) if ops.len() > 1 => {
            let span = comparators.get(1).map_or(cmp.span, |c| c.span());
            return Err(CompilationError::ChainedComparison { span });
        }
        _ => {
            return Err(CompilationError::internal(format!(
                "malformed comparison at {}",
                cmp.span
            )));
        }
    };

    let apply: fn(&mut Emitter) = match op {
        CompareOp::GtE => Emitter::gte,
        CompareOp::Gt => Emitter::gt,
        CompareOp::LtE => Emitter::lte,
        CompareOp::Lt => Emitter::lt,
        CompareOp::Eq => Emitter::eq,
        CompareOp::NotEq => |emitter: &mut Emitter| {
            emitter.eq();
            emitter.not();
        },
        CompareOp::Is | CompareOp::IsNot | CompareOp::In | CompareOp::NotIn => {
            return Err(CompilationError::UnsupportedOperator {
                op: op.as_str(),
                span: cmp.span,
            });
        }
    };

    compiler.compile(cmp.left)?;
    compiler.compile(right)?;
    apply(compiler.emitter);
    Ok(())
}
