//! Crumble AST crate.
//!
//! This crate provides the syntax tree the compiler consumes:
//! - Module, statement and expression nodes
//! - Operator enums
//! - [`AstBuilder`] for constructing trees in a [`bumpalo::Bump`] arena
//!
//! Turning source text into a tree is the job of an external front-end.
//! All nodes borrow from an arena and remain valid for the arena's lifetime.

mod builder;
pub mod expr;
pub mod ops;
pub mod stmt;

pub use builder::AstBuilder;
pub use crumble_core::Span;
pub use expr::*;
pub use ops::*;
pub use stmt::*;
