//! Evaluator for monitor expressions.
//!
//! Evaluates a [`TokenList`] directly, without building a tree. A range of
//! tokens is either a single operand, a parenthesized range, or two ranges
//! joined by their dominant operator:
//!
//! - [`parens`] checks balance and whether a range is wrapped in one pair.
//! - [`dominant`] finds the operator that splits a range.
//! - [`operators`] combines two 32-bit operands.
//! - [`Evaluator`] drives the recursion and resolves registers through a
//!   [`RegisterSnapshot`].
//!
//! All arithmetic is on `u32`. Failures are reported as [`EvalError`] with
//! the span of the tokens at fault.

pub mod dominant;
pub mod errors;
mod evaluator;
pub mod operators;
pub mod parens;
mod registers;
mod stack;

pub use dominant::{dominant_operator, Dominant};
pub use errors::{
    division_by_zero, literal_out_of_range, malformed, unbalanced_parens, unknown_register,
    EvalError, EvalErrorKind, EvalResult, MalformedReason,
};
pub use evaluator::{parse_decimal, parse_hex, Evaluator};
pub use operators::evaluate_binary;
pub use parens::{encloses, first_unbalanced, is_balanced, matching_close};
pub use registers::{CpuState, RegisterMap, RegisterSnapshot};

use mon_ir::TokenList;

/// Evaluate a whole token sequence against `registers`.
pub fn evaluate_tokens<R: RegisterSnapshot + ?Sized>(tokens: &TokenList, registers: &R) -> EvalResult {
    Evaluator::new(tokens, registers).eval_tokens()
}
