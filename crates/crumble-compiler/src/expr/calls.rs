//! Built-in call lowering.
//!
//! Crumble has no user-defined functions. A call must name one of the
//! [`Builtin`]s, with exactly its arity; arguments are compiled left to
//! right and then the device instructions follow.

use crumble_ast::{CallExpr, Expr, LiteralKind};
use crumble_core::CompilationError;

use super::{ExprCompiler, Result};
use crate::builtins::Builtin;

/// Motor percent to PWM duty: `percent * 187 / 100`.
const MOTOR_MUL: i64 = 187;
const MOTOR_DIV: i64 = 100;
/// Servo pulse: `4545 + degrees * 34`.
const SERVO_BASE: i64 = 4545;
const SERVO_STEP: i64 = 34;

pub fn compile_call<'ast>(
    compiler: &mut ExprCompiler<'_, 'ast>,
    call: &CallExpr<'ast>,
) -> Result<()> {
    let Some(name) = call.func.as_name() else {
        return Err(CompilationError::UnsupportedCallTarget {
            span: call.func.span(),
        });
    };
    let builtin = Builtin::from_name(name.id).ok_or_else(|| CompilationError::UnknownBuiltin {
        name: name.id.to_string(),
        span: call.span,
    })?;

    if call.args.len() != builtin.arity() {
        return Err(CompilationError::ArgumentCountMismatch {
            name: builtin.name(),
            expected: builtin.arity(),
            found: call.args.len(),
            span: call.span,
        });
    }

    let args = call.args;
    match builtin {
        Builtin::SetOutput => {
            compile_args(compiler, args)?;
            compiler.emitter.digital_write();
        }
        Builtin::GetDigital => {
            compile_args(compiler, args)?;
            compiler.emitter.digital_read();
        }
        Builtin::GetAnalog => {
            compile_args(compiler, args)?;
            compiler.emitter.analog_read();
        }
        Builtin::SetMotor1 | Builtin::SetMotor2 => {
            compile_args(compiler, args)?;
            let emitter = &mut *compiler.emitter;
            emitter.push_long(MOTOR_MUL);
            emitter.mul();
            emitter.push_long(MOTOR_DIV);
            emitter.div();
            if builtin == Builtin::SetMotor1 {
                emitter.motor1();
            } else {
                emitter.motor2();
            }
        }
        Builtin::SetServo => {
            compiler.compile(&args[0])?;
            compiler.emitter.push_long(SERVO_BASE);
            compiler.compile(&args[1])?;
            let emitter = &mut *compiler.emitter;
            emitter.push_long(SERVO_STEP);
            emitter.mul();
            emitter.add();
            emitter.servo();
        }
        Builtin::SetSparkle => {
            compile_args(compiler, args)?;
            compiler.emitter.sparkle_stage();
            compiler.emitter.sparkle_output();
        }
        Builtin::GetDistance => {
            compile_args(compiler, args)?;
            compiler.emitter.ultrasonic_send();
            compiler.emitter.ultrasonic_listen();
        }
        Builtin::Random => {
            compile_args(compiler, args)?;
            compiler.emitter.random();
        }
        Builtin::Wait => compile_wait(compiler, &args[0])?,
    }
    Ok(())
}

fn compile_args<'ast>(compiler: &mut ExprCompiler<'_, 'ast>, args: &[Expr<'ast>]) -> Result<()> {
    for arg in args {
        compiler.compile(arg)?;
    }
    Ok(())
}

/// Count down from a literal number of milliseconds, one `WAIT` per tick.
///
/// ```text
/// PUSHL ms
/// start:
/// DUP
/// BEZ end
/// WAIT
/// PUSHL 1
/// SUB
/// BRA start
/// end:
/// POPRM
/// ```
fn compile_wait(compiler: &mut ExprCompiler<'_, '_>, duration: &Expr<'_>) -> Result<()> {
    let ms = match duration {
        Expr::Literal(lit) => match lit.kind {
            LiteralKind::Int(ms) if ms >= 1 => Some(ms),
            _ => None,
        },
        _ => None,
    }
    .ok_or(CompilationError::InvalidWaitDuration {
        span: duration.span(),
    })?;

    let emitter = &mut *compiler.emitter;
    emitter.push_long(ms);
    let start = emitter.new_label();
    let end = emitter.new_label();
    emitter.define_label(start);
    emitter.dup();
    emitter.branch_if_zero(end);
    emitter.wait_tick();
    emitter.push_long(1);
    emitter.sub();
    emitter.branch_always(start);
    emitter.define_label(end);
    emitter.pop_discard();
    Ok(())
}

#[cfg(test)]
mod tests {
    use bumpalo::Bump;
    use crumble_ast::AstBuilder;
    use crumble_core::Span;
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::expr::test_support::compile_expr;
    use crate::scope::VariableTable;

    #[test]
    fn set_output() {
        let arena = Bump::new();
        let b = AstBuilder::new(&arena);
        let expr = b.call("set_output", &[b.name("A"), b.int(1)]);
        let (_, listing) = compile_expr(&VariableTable::new(), &expr).unwrap();
        assert_eq!(listing, ["PUSHL 0", "PUSHL 1", "DWR"]);
    }

    #[test]
    fn digital_and_analog_reads() {
        let arena = Bump::new();
        let b = AstBuilder::new(&arena);
        let vars = VariableTable::new();

        let (_, listing) = compile_expr(&vars, &b.call("get_digital", &[b.name("B")])).unwrap();
        assert_eq!(listing, ["PUSHL 1", "DRD"]);
        let (_, listing) = compile_expr(&vars, &b.call("get_analog", &[b.name("C")])).unwrap();
        assert_eq!(listing, ["PUSHL 3", "ARD"]);
    }

    #[test]
    fn motors_scale_percent() {
        let arena = Bump::new();
        let b = AstBuilder::new(&arena);
        let vars = VariableTable::new();

        let (_, listing) = compile_expr(&vars, &b.call("set_motor_1", &[b.int(50)])).unwrap();
        assert_eq!(
            listing,
            ["PUSHL 50", "PUSHL 187", "MUL", "PUSHL 100", "DIV", "MOT1"]
        );
        let (_, listing) = compile_expr(&vars, &b.call("set_motor_2", &[b.int(-50)])).unwrap();
        assert_eq!(listing.last().map(String::as_str), Some("MOT2"));
    }

    #[test]
    fn servo_interleaves_constants() {
        let arena = Bump::new();
        let b = AstBuilder::new(&arena);
        let expr = b.call("set_servo", &[b.name("A"), b.int(90)]);
        let (_, listing) = compile_expr(&VariableTable::new(), &expr).unwrap();
        assert_eq!(
            listing,
            ["PUSHL 0", "PUSHL 4545", "PUSHL 90", "PUSHL 34", "MUL", "ADD", "SRV"]
        );
    }

    #[test]
    fn sparkle_distance_random() {
        let arena = Bump::new();
        let b = AstBuilder::new(&arena);
        let vars = VariableTable::new();

        let sparkle = b.call("set_sparkle", &[b.int(0), b.int(255), b.int(0), b.int(64)]);
        let (_, listing) = compile_expr(&vars, &sparkle).unwrap();
        assert_eq!(
            listing,
            ["PUSHL 0", "PUSHL 255", "PUSHL 0", "PUSHL 64", "SSPRK", "OSPRK"]
        );

        let distance = b.call("get_distance", &[b.name("A"), b.name("B")]);
        let (_, listing) = compile_expr(&vars, &distance).unwrap();
        assert_eq!(listing, ["PUSHL 0", "PUSHL 1", "USONS", "USONL"]);

        let random = b.call("random", &[b.int(1), b.int(6)]);
        let (_, listing) = compile_expr(&vars, &random).unwrap();
        assert_eq!(listing, ["PUSHL 1", "PUSHL 6", "RND"]);
    }

    #[test]
    fn wait_counts_down() {
        let arena = Bump::new();
        let b = AstBuilder::new(&arena);
        let (program, listing) =
            compile_expr(&VariableTable::new(), &b.call("wait", &[b.int(3)])).unwrap();

        assert_eq!(
            listing,
            [
                "PUSHL 3",
                "DUP",
                "BEZ label_1",
                "WAIT",
                "PUSHL 1",
                "SUB",
                "BRA label_0",
                "POPRM",
            ]
        );
        // start is after PUSHL (offset 2); end is after BRA (offset 11)
        assert_eq!(program.read_wide_operand(3), Some(11));
        assert_eq!(program.read_wide_operand(9), Some(2));
    }

    #[test]
    fn wait_rejects_non_positive_and_non_literal() {
        let arena = Bump::new();
        let b = AstBuilder::new(&arena);
        let mut vars = VariableTable::new();
        vars.declare("x");

        for arg in [
            b.at(1, 5).int(0),
            b.at(1, 5).int(-10),
            b.at(1, 5).name("x"),
            b.at(1, 5).boolean(true),
        ] {
            let expr = b.call("wait", &[arg]);
            assert_eq!(
                compile_expr(&vars, &expr).unwrap_err(),
                CompilationError::InvalidWaitDuration {
                    span: Span::point(1, 5)
                }
            );
        }
    }

    #[test]
    fn unknown_builtin() {
        let arena = Bump::new();
        let b = AstBuilder::new(&arena);
        let expr = b.at(6, 0).call("print", &[b.int(1)]);
        let err = compile_expr(&VariableTable::new(), &expr).unwrap_err();
        assert_eq!(err.to_string(), "at 6:0: unknown function call 'print'");
    }

    #[test]
    fn argument_count_checked() {
        let arena = Bump::new();
        let b = AstBuilder::new(&arena);
        let expr = b.at(2, 0).call("set_output", &[b.int(1)]);
        assert_eq!(
            compile_expr(&VariableTable::new(), &expr).unwrap_err(),
            CompilationError::ArgumentCountMismatch {
                name: "set_output",
                expected: 2,
                found: 1,
                span: Span::point(2, 0),
            }
        );
    }

    #[test]
    fn callee_must_be_a_name() {
        let arena = Bump::new();
        let b = AstBuilder::new(&arena);
        let callee = b.at(1, 0).attribute(b.name("motor"), "run");
        let expr = b.call_expr(callee, &[]);
        assert_eq!(
            compile_expr(&VariableTable::new(), &expr).unwrap_err(),
            CompilationError::UnsupportedCallTarget {
                span: Span::point(1, 0)
            }
        );
    }
}
