//! Recursive evaluation by range splitting.
//!
//! No parse tree is built. `eval_range(p, q)` looks at the closed token range
//! `[p, q]` and either resolves a single operand, strips one enclosing pair
//! of parentheses, or splits at the dominant operator and recurses on both
//! sides.

use mon_ir::{Token, TokenKind, TokenList, REGISTER_SIGIL};
use tracing::trace;

use crate::dominant::{dominant_operator, range_span};
use crate::errors::{
    literal_out_of_range, malformed, unbalanced_parens, unknown_register, EvalResult,
    MalformedReason,
};
use crate::operators::evaluate_binary;
use crate::parens::{encloses, first_unbalanced};
use crate::registers::RegisterSnapshot;
use crate::stack::ensure_sufficient_stack;

/// Evaluates one token sequence against one register snapshot.
///
/// Both are borrowed for the duration of the evaluation and never mutated.
pub struct Evaluator<'a, R: RegisterSnapshot + ?Sized> {
    tokens: &'a [Token],
    registers: &'a R,
}

impl<'a, R: RegisterSnapshot + ?Sized> Evaluator<'a, R> {
    pub fn new(tokens: &'a TokenList, registers: &'a R) -> Self {
        Evaluator {
            tokens: tokens.as_slice(),
            registers,
        }
    }

    /// Evaluate the whole sequence.
    ///
    /// Checks parenthesis balance once, up front, then evaluates `[0, len-1]`.
    pub fn eval_tokens(&self) -> EvalResult {
        if self.tokens.is_empty() {
            return Err(malformed(MalformedReason::EmptyExpression));
        }
        if let Some(culprit) = first_unbalanced(self.tokens) {
            return Err(unbalanced_parens().with_span(self.tokens[culprit].span));
        }
        self.eval_range(0, self.tokens.len() - 1)
    }

    /// Evaluate the closed range `[p, q]`.
    ///
    /// `p <= q < len` is the caller's obligation; an empty or out-of-bounds
    /// range is reported as an empty expression rather than indexed.
    ///
    /// Depth grows with nesting and with chain length, so every level runs
    /// under [`ensure_sufficient_stack`].
    #[tracing::instrument(level = "trace", skip(self))]
    pub fn eval_range(&self, p: usize, q: usize) -> EvalResult {
        ensure_sufficient_stack(|| self.eval_range_inner(p, q))
    }

    fn eval_range_inner(&self, p: usize, q: usize) -> EvalResult {
        if p > q || q >= self.tokens.len() {
            return Err(malformed(MalformedReason::EmptyExpression));
        }

        if p == q {
            return self.eval_operand(&self.tokens[p]);
        }

        if encloses(self.tokens, p, q) {
            if q - p == 1 {
                return Err(malformed(MalformedReason::EmptyParens)
                    .with_span(range_span(self.tokens, p, q)));
            }
            return self.eval_range(p + 1, q - 1);
        }

        let dominant = dominant_operator(self.tokens, p, q)?;
        let op_span = self.tokens[dominant.index].span;
        trace!(index = dominant.index, op = dominant.op.as_symbol(), "dominant operator");

        if dominant.index == p {
            return Err(malformed(MalformedReason::MissingLeftOperand).with_span(op_span));
        }
        if dominant.index == q {
            return Err(malformed(MalformedReason::MissingRightOperand).with_span(op_span));
        }

        let left = self.eval_range(p, dominant.index - 1)?;
        let right = self.eval_range(dominant.index + 1, q)?;
        evaluate_binary(dominant.op, left, right).map_err(|e| e.with_span(op_span))
    }

    /// Resolve a single-token range.
    fn eval_operand(&self, token: &Token) -> EvalResult {
        let result = match &token.kind {
            TokenKind::Int(text) => parse_decimal(text),
            TokenKind::Hex(text) => parse_hex(text),
            TokenKind::Register(text) => {
                let name = text.strip_prefix(REGISTER_SIGIL).unwrap_or(text);
                self.registers
                    .get(name)
                    .ok_or_else(|| unknown_register(name))
            }
            _ => Err(malformed(MalformedReason::UnexpectedToken)),
        };
        result.map_err(|e| e.with_span(token.span))
    }
}

/// Parse a decimal literal as an unsigned 32-bit value.
pub fn parse_decimal(text: &str) -> EvalResult {
    text.parse::<u32>().map_err(|_| literal_out_of_range(text))
}

/// Parse a hexadecimal literal, with or without its `0x`/`0X` prefix.
///
/// Digits are accumulated one at a time as `value * 16 + digit`.
pub fn parse_hex(text: &str) -> EvalResult {
    let digits = text
        .strip_prefix("0x")
        .or_else(|| text.strip_prefix("0X"))
        .unwrap_or(text);
    if digits.is_empty() {
        return Err(literal_out_of_range(text));
    }
    digits.chars().try_fold(0u32, |value, c| {
        c.to_digit(16)
            .and_then(|digit| value.checked_mul(16)?.checked_add(digit))
            .ok_or_else(|| literal_out_of_range(text))
    })
}
