//! End-to-end compilation of whole modules.

mod common;

use bumpalo::Bump;
use crumble::ast::{AstBuilder, CompareOp};
use crumble::compiler::bytecode::disassemble_to_lines;
use crumble::compiler::{Emitter, OpCode};
use crumble::{CompilationError, OutputFormat, Span, compile, get_bytecode};
use pretty_assertions::assert_eq;

use common::{init_test_logging, listing_of};

#[test]
fn empty_module_is_just_stop() {
    init_test_logging();
    let arena = Bump::new();
    let b = AstBuilder::new(&arena);

    let program = get_bytecode(&b.module(&[])).unwrap();
    assert_eq!(program.words(), &[0x3FFF]);
    assert_eq!(listing_of(&b.module(&[])), ["STOP"]);
}

#[test]
fn simple_assignment() {
    init_test_logging();
    let arena = Bump::new();
    let b = AstBuilder::new(&arena);
    let module = b.module(&[b.assign(&[b.name("x")], b.int(5))]);

    assert_eq!(listing_of(&module), ["PUSHL 0", "PUSHL 5", "POP 0", "STOP"]);
    assert_eq!(
        get_bytecode(&module).unwrap().words(),
        &[0x0200, 0x0000, 0x0205, 0x0000, 0x0300, 0x3FFF]
    );
}

#[test]
fn registers_are_pushed_as_indices() {
    init_test_logging();
    let arena = Bump::new();
    let b = AstBuilder::new(&arena);
    let module = b.module(&[b.expr_stmt(b.call("set_output", &[b.name("A"), b.name("B")]))]);

    assert_eq!(listing_of(&module), ["PUSHL 0", "PUSHL 1", "DWR", "STOP"]);
    assert_eq!(
        get_bytecode(&module).unwrap().words(),
        &[0x0200, 0x0000, 0x0201, 0x0000, 0x2900, 0x3FFF]
    );
}

#[test]
fn chained_assignment_shares_one_value() {
    init_test_logging();
    let arena = Bump::new();
    let b = AstBuilder::new(&arena);
    let module = b.module(&[b.assign(&[b.name("a"), b.name("b")], b.int(1))]);

    assert_eq!(
        listing_of(&module),
        ["PUSHL 0", "PUSHL 0", "PUSHL 1", "DUP", "POP 0", "POP 1", "STOP"]
    );
}

#[test]
fn wait_expands_to_countdown() {
    init_test_logging();
    let arena = Bump::new();
    let b = AstBuilder::new(&arena);
    let module = b.module(&[b.expr_stmt(b.call("wait", &[b.int(10)]))]);

    assert_eq!(
        listing_of(&module),
        [
            "PUSHL 10",
            "DUP",
            "BEZ label_1",
            "WAIT",
            "PUSHL 1",
            "SUB",
            "BRA label_0",
            "POPRM",
            "STOP",
        ]
    );
    assert_eq!(
        get_bytecode(&module).unwrap().words(),
        &[
            0x020A, 0x0000, // PUSHL 10
            0x0600, // DUP
            0x190B, 0x0000, // BEZ 11
            0x3400, // WAIT
            0x0201, 0x0000, // PUSHL 1
            0x0900, // SUB
            0x1802, 0x0000, // BRA 2
            0x0500, // POPRM
            0x3FFF, // STOP
        ]
    );
}

#[test]
fn if_else_branch_targets() {
    init_test_logging();
    let arena = Bump::new();
    let b = AstBuilder::new(&arena);
    let module = b.module(&[
        b.assign(&[b.name("x")], b.call("get_digital", &[b.name("A")])),
        b.if_stmt(
            b.compare(b.name("x"), &[CompareOp::Eq], &[b.int(1)]),
            &[b.expr_stmt(b.call("set_output", &[b.name("B"), b.int(1)]))],
            &[b.expr_stmt(b.call("set_output", &[b.name("B"), b.int(0)]))],
        ),
    ]);

    assert_eq!(
        listing_of(&module),
        [
            "PUSHL 0",
            "PUSHL 0",
            "DRD",
            "POP 0",
            "PUSH 0",
            "PUSHL 1",
            "EQ",
            "BEZ label_0",
            "PUSHL 1",
            "PUSHL 1",
            "DWR",
            "BRA label_1",
            "PUSHL 1",
            "PUSHL 0",
            "DWR",
            "STOP",
        ]
    );

    let program = get_bytecode(&module).unwrap();
    assert_eq!(program.len(), 25);
    assert_eq!(program.read_wide_operand(10), Some(19));
    assert_eq!(program.read_wide_operand(17), Some(24));
}

#[test]
fn nested_loops_disassemble_to_offsets() {
    init_test_logging();
    let arena = Bump::new();
    let b = AstBuilder::new(&arena);
    let inner = b.while_stmt(b.name("B"), &[b.break_stmt()]);
    let module = b.module(&[b.while_stmt(b.name("A"), &[inner, b.break_stmt()])]);

    let program = get_bytecode(&module).unwrap();
    assert_eq!(
        disassemble_to_lines(program.words()).unwrap(),
        [
            "PUSHL 0", "BEZ 16", "PUSHL 1", "BEZ 12", "BRA 12", "BRA 4", "BRA 16", "BRA 0",
            "STOP",
        ]
    );
}

#[test]
fn compilation_is_deterministic() {
    init_test_logging();
    let arena = Bump::new();
    let b = AstBuilder::new(&arena);
    let module = b.module(&[
        b.assign(&[b.name("speed")], b.int(40)),
        b.while_stmt(
            b.boolean(true),
            &[
                b.expr_stmt(b.call("set_motor_1", &[b.name("speed")])),
                b.expr_stmt(b.call("wait", &[b.int(250)])),
                b.if_stmt(
                    b.compare(
                        b.call("get_distance", &[b.name("A"), b.name("B")]),
                        &[CompareOp::Lt],
                        &[b.int(10)],
                    ),
                    &[b.break_stmt()],
                    &[],
                ),
            ],
        ),
        b.expr_stmt(b.call("set_motor_1", &[b.int(0)])),
    ]);

    for format in [OutputFormat::Bytecode, OutputFormat::Assembly, OutputFormat::Device] {
        let first = compile(&module, format).unwrap();
        let second = compile(&module, format).unwrap();
        assert_eq!(first, second);
    }
}

#[test]
fn listing_matches_disassembly_for_straight_line_code() {
    init_test_logging();
    let arena = Bump::new();
    let b = AstBuilder::new(&arena);
    let module = b.module(&[
        b.assign(&[b.name("x")], b.add(b.int(2), b.int(3))),
        b.expr_stmt(b.call("set_sparkle", &[b.int(0), b.name("x"), b.int(0), b.int(255)])),
    ]);

    let program = get_bytecode(&module).unwrap();
    assert_eq!(disassemble_to_lines(program.words()).unwrap(), listing_of(&module));
    assert!(!program.opcodes().iter().any(|op| matches!(
        op,
        OpCode::Branch | OpCode::BranchIfZero | OpCode::BranchIfNonZero
    )));
}

#[test]
fn straight_line_code_records_no_fixups() {
    let mut emitter = Emitter::new(false);
    emitter.push_long(5);
    emitter.pop(0);
    emitter.push(0);
    emitter.motor1();
    emitter.stop();

    assert!(emitter.labels().pending().is_empty());
    let (program, listing) = emitter.finish().unwrap();
    assert!(listing.is_none());
    assert_eq!(program.len(), 6);
}

#[test]
fn forward_branch_is_backfilled_on_finish() {
    let mut emitter = Emitter::new(true);
    let skip = emitter.new_label();
    emitter.branch_if_zero(skip);
    emitter.push_long(7);

    assert_eq!(emitter.program().read_wide_operand(0), Some(0));
    assert_eq!(emitter.labels().pending().len(), 1);

    emitter.define_label(skip);
    emitter.stop();
    let (program, _) = emitter.finish().unwrap();
    assert_eq!(program.read_wide_operand(0), Some(4));
}

#[test]
fn backward_branch_is_encoded_immediately() {
    let mut emitter = Emitter::new(true);
    let top = emitter.new_label();
    emitter.define_label(top);
    emitter.push_long(1);
    emitter.branch_always(top);

    assert!(emitter.labels().pending().is_empty());
    assert_eq!(emitter.program().read_wide_operand(2), Some(0));
}

#[test]
fn first_error_is_reported_with_position() {
    init_test_logging();
    let arena = Bump::new();
    let b = AstBuilder::new(&arena);
    let module = b.module(&[
        b.at(1, 0).assign(&[b.name("x")], b.int(1)),
        b.at(2, 0).assign(&[b.at(2, 0).name("A")], b.int(2)),
        b.at(3, 0).expr_stmt(b.name("undefined")),
    ]);

    let err = get_bytecode(&module).unwrap_err();
    assert_eq!(
        err,
        CompilationError::ReservedRegisterAssignment {
            name: "A".to_string(),
            span: Span::point(2, 0),
        }
    );
    assert_eq!((err.line(), err.column()), (2, 0));
}

#[test]
fn unsupported_constructs_are_rejected() {
    init_test_logging();
    let arena = Bump::new();
    let b = AstBuilder::new(&arena);

    let for_loop = b.module(&[b.at(4, 0).for_stmt(b.name("i"), b.name("A"), &[b.pass()])]);
    assert_eq!(
        get_bytecode(&for_loop).unwrap_err().to_string(),
        "at 4:0: unsupported statement 'for'"
    );

    let float = b.module(&[b.at(5, 4).expr_stmt(b.float(1.5))]);
    assert_eq!(
        get_bytecode(&float).unwrap_err().to_string(),
        "at 5:4: unsupported constant type 'float'"
    );

    let chained = b.module(&[b.expr_stmt(b.at(6, 0).compare(
        b.int(1),
        &[CompareOp::Lt, CompareOp::Lt],
        &[b.int(2), b.at(6, 8).int(3)],
    ))]);
    assert_eq!(
        get_bytecode(&chained).unwrap_err(),
        CompilationError::ChainedComparison {
            span: Span::point(6, 8)
        }
    );

    let stray_continue = b.module(&[b.at(7, 0).continue_stmt()]);
    assert_eq!(
        get_bytecode(&stray_continue).unwrap_err().to_string(),
        "at 7:0: no loop to continue"
    );
}
