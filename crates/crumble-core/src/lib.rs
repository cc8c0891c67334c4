//! Shared types for the Crumble toolchain.
//!
//! - [`Span`] - source positions attached to every AST node
//! - [`CompilationError`] - every way a compile can fail

mod error;
mod span;

pub use error::CompilationError;
pub use span::Span;
