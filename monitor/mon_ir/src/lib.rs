//! Mon IR - shared types for monitor expressions.
//!
//! This crate holds the vocabulary that the lexer, the evaluator and the
//! diagnostics layer agree on:
//! - Spans for byte offsets into the expression text
//! - Tokens and `TokenList` for lexer output
//! - `BinaryOp` with its precedence table
//! - `Register`, the x86 register names an expression may reference
//!
//! Nothing here depends on another `mon_*` crate.

/// Compile-time assertion that a type has a specific size.
///
/// Used to prevent accidental size regressions in frequently-copied types.
#[macro_export]
macro_rules! static_assert_size {
    ($ty:ty, $size:expr) => {
        const _: [(); $size] = [(); ::std::mem::size_of::<$ty>()];
    };
}

mod operators;
mod register;
mod span;
mod token;

pub use operators::BinaryOp;
pub use register::{Register, REGISTER_SIGIL};
pub use span::Span;
pub use token::{Token, TokenKind, TokenList};
