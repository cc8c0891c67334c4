//! Compilation errors for Crumble programs.
//!
//! Every failure the compiler can report is a [`CompilationError`] variant.
//! The first error aborts the compile; there is no partial output.
//!
//! ## Taxonomy
//!
//! ```text
//! CompilationError
//! ├── shape     - UnsupportedStatement, UnsupportedExpression, UnsupportedConstant,
//! │               InvalidAssignmentTarget, UnsupportedCallTarget, ArgumentCountMismatch
//! ├── semantic  - UndefinedVariable, ReservedRegisterAssignment, UnknownBuiltin,
//! │               BreakOutsideLoop, ContinueOutsideLoop
//! ├── value     - InvalidWaitDuration, UnsupportedOperator, ChainedComparison
//! └── Internal  - compiler bugs (e.g. a branch to a label that was never placed)
//! ```

use thiserror::Error;

use crate::Span;

/// Errors that occur while lowering an AST to bytecode.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CompilationError {
    /// A statement kind the controller has no lowering for.
    #[error("at {span}: unsupported statement '{kind}'")]
    UnsupportedStatement {
        /// Name of the statement kind (e.g. "for").
        kind: &'static str,
        /// Where the statement starts.
        span: Span,
    },

    /// An expression kind the controller has no lowering for.
    #[error("at {span}: unsupported expression '{kind}'")]
    UnsupportedExpression {
        /// Name of the expression kind (e.g. "subscript").
        kind: &'static str,
        /// Where the expression starts.
        span: Span,
    },

    /// A literal of a type the controller cannot represent.
    #[error("at {span}: unsupported constant type '{kind}'")]
    UnsupportedConstant {
        /// Name of the literal type (e.g. "float").
        kind: &'static str,
        /// Where the literal appears.
        span: Span,
    },

    /// An operator outside the supported set.
    #[error("at {span}: unsupported operator '{op}'")]
    UnsupportedOperator {
        /// The operator as written in source.
        op: &'static str,
        /// Where the operation appears.
        span: Span,
    },

    /// A comparison with more than one operator (`a < b < c`).
    #[error("at {span}: unsupported multiple comparisons")]
    ChainedComparison {
        /// Where the second operand of the chain appears.
        span: Span,
    },

    /// Assignment to something other than a plain name.
    #[error("at {span}: values can only be assigned to variables")]
    InvalidAssignmentTarget {
        /// Where the target appears.
        span: Span,
    },

    /// Assignment to one of the reserved registers.
    #[error("at {span}: '{name}' is a reserved register and cannot be reassigned (A, B, C and D are read-only)")]
    ReservedRegisterAssignment {
        /// The register name.
        name: String,
        /// Where the assignment target appears.
        span: Span,
    },

    /// A name that was read before any assignment declared it.
    #[error("at {span}: undefined variable '{name}'")]
    UndefinedVariable {
        /// The variable name.
        name: String,
        /// Where the variable was referenced.
        span: Span,
    },

    /// A call to a name outside the built-in catalogue.
    #[error("at {span}: unknown function call '{name}'")]
    UnknownBuiltin {
        /// The called name.
        name: String,
        /// Where the call appears.
        span: Span,
    },

    /// A call whose callee is not a plain name (`a.b()`, `f()()`).
    #[error("at {span}: only built-in functions can be called")]
    UnsupportedCallTarget {
        /// Where the callee appears.
        span: Span,
    },

    /// A built-in called with the wrong number of arguments.
    #[error("at {span}: '{name}' expects {expected} argument(s), got {found}")]
    ArgumentCountMismatch {
        /// The built-in name.
        name: &'static str,
        /// Number of parameters the built-in takes.
        expected: usize,
        /// Number of arguments supplied.
        found: usize,
        /// Where the call appears.
        span: Span,
    },

    /// `wait` with a duration that is not a positive integer literal.
    #[error("at {span}: wait time must be a positive integer of milliseconds")]
    InvalidWaitDuration {
        /// Where the duration argument appears.
        span: Span,
    },

    /// `break` with no enclosing loop.
    #[error("at {span}: no loop to break")]
    BreakOutsideLoop {
        /// Where the statement appears.
        span: Span,
    },

    /// `continue` with no enclosing loop.
    #[error("at {span}: no loop to continue")]
    ContinueOutsideLoop {
        /// Where the statement appears.
        span: Span,
    },

    /// Internal compiler error (shouldn't happen in normal use).
    #[error("internal compiler error: {message}")]
    Internal {
        /// Description of the broken invariant.
        message: String,
    },
}

impl CompilationError {
    /// Get the span where this error occurred.
    pub fn span(&self) -> Span {
        match self {
            CompilationError::UnsupportedStatement { span, .. } => *span,
            CompilationError::UnsupportedExpression { span, .. } => *span,
            CompilationError::UnsupportedConstant { span, .. } => *span,
            CompilationError::UnsupportedOperator { span, .. } => *span,
            CompilationError::ChainedComparison { span } => *span,
            CompilationError::InvalidAssignmentTarget { span } => *span,
            CompilationError::ReservedRegisterAssignment { span, .. } => *span,
            CompilationError::UndefinedVariable { span, .. } => *span,
            CompilationError::UnknownBuiltin { span, .. } => *span,
            CompilationError::UnsupportedCallTarget { span } => *span,
            CompilationError::ArgumentCountMismatch { span, .. } => *span,
            CompilationError::InvalidWaitDuration { span } => *span,
            CompilationError::BreakOutsideLoop { span } => *span,
            CompilationError::ContinueOutsideLoop { span } => *span,
            CompilationError::Internal { .. } => Span::default(),
        }
    }

    /// Source line of the offending node.
    pub fn line(&self) -> u32 {
        self.span().line
    }

    /// Source column of the offending node.
    pub fn column(&self) -> u32 {
        self.span().col
    }

    /// Create an internal compiler error.
    pub fn internal(message: impl Into<String>) -> Self {
        CompilationError::Internal {
            message: message.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_includes_position() {
        let err = CompilationError::UndefinedVariable {
            name: "speed".to_string(),
            span: Span::point(4, 8),
        };
        assert_eq!(err.to_string(), "at 4:8: undefined variable 'speed'");
        assert_eq!(err.line(), 4);
        assert_eq!(err.column(), 8);
    }

    #[test]
    fn argument_count_message() {
        let err = CompilationError::ArgumentCountMismatch {
            name: "set_servo",
            expected: 2,
            found: 1,
            span: Span::point(2, 0),
        };
        assert_eq!(
            err.to_string(),
            "at 2:0: 'set_servo' expects 2 argument(s), got 1"
        );
    }

    #[test]
    fn internal_has_no_position() {
        let err = CompilationError::internal("label_3 never defined");
        assert_eq!(err.span(), Span::default());
        assert_eq!(
            err.to_string(),
            "internal compiler error: label_3 never defined"
        );
    }
}
