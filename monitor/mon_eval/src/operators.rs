//! Binary operator semantics on 32-bit words.
//!
//! `+`, `-` and `*` wrap like the machine word they model. `/` is unsigned
//! truncating division and fails on a zero divisor instead of trapping.
//! Comparison and logical operators yield 0 or 1.

use mon_ir::BinaryOp;

use crate::errors::{division_by_zero, EvalResult};

/// Combine two evaluated operands.
pub fn evaluate_binary(op: BinaryOp, left: u32, right: u32) -> EvalResult {
    Ok(match op {
        BinaryOp::Add => left.wrapping_add(right),
        BinaryOp::Sub => left.wrapping_sub(right),
        BinaryOp::Mul => left.wrapping_mul(right),
        BinaryOp::Div => left.checked_div(right).ok_or_else(division_by_zero)?,
        BinaryOp::Eq => u32::from(left == right),
        BinaryOp::NotEq => u32::from(left != right),
        BinaryOp::And => u32::from(left != 0 && right != 0),
        BinaryOp::Or => u32::from(left != 0 || right != 0),
    })
}
