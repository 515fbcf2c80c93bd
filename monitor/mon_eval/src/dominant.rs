//! Dominant operator search.
//!
//! The dominant operator of a range is the one evaluated last: the
//! loosest-binding operator at parenthesis depth zero. Ties go to the
//! rightmost candidate, which makes operators of equal precedence group to
//! the left (`10-3-2` splits at the second `-`).

use mon_ir::{BinaryOp, Span, Token, TokenKind};

use crate::errors::{malformed, unbalanced_parens, EvalError, MalformedReason};
use crate::parens::matching_close;

/// The operator chosen to split a range.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct Dominant {
    /// Token index of the operator.
    pub index: usize,
    pub op: BinaryOp,
}

/// Find the dominant operator of `[p, q]`.
///
/// Parenthesized sub-ranges are skipped whole: the scan jumps from each `(`
/// to its matching `)` without looking inside. Operands are ignored.
pub fn dominant_operator(tokens: &[Token], p: usize, q: usize) -> Result<Dominant, EvalError> {
    let mut best: Option<Dominant> = None;
    let mut i = p;

    while i <= q {
        let Some(token) = tokens.get(i) else {
            break;
        };
        match &token.kind {
            TokenKind::LParen => {
                i = matching_close(tokens, i, q)
                    .ok_or_else(|| malformed(MalformedReason::UnclosedParen).with_span(token.span))?;
            }
            TokenKind::RParen => return Err(unbalanced_parens().with_span(token.span)),
            kind => {
                if let Some(op) = kind.binary_op() {
                    let replace = best.map_or(true, |b| op.precedence() >= b.op.precedence());
                    if replace {
                        best = Some(Dominant { index: i, op });
                    }
                }
            }
        }
        i += 1;
    }

    best.ok_or_else(|| malformed(MalformedReason::MissingOperator).with_span(range_span(tokens, p, q)))
}

/// Span covering tokens `[p, q]`, clamped to the sequence.
pub(crate) fn range_span(tokens: &[Token], p: usize, q: usize) -> Span {
    match (tokens.get(p), tokens.get(q.min(tokens.len().saturating_sub(1)))) {
        (Some(first), Some(last)) => first.span.merge(last.span),
        _ => Span::default(),
    }
}

#[cfg(test)]
mod tests;
