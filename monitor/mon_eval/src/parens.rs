//! Parenthesis structure checks over token ranges.
//!
//! All ranges here are closed: `[p, q]` includes both ends.

use mon_ir::{Token, TokenKind};

/// Whether the whole token sequence has balanced parentheses.
///
/// Depth may never go negative and must end at exactly zero, so both `)(`
/// and a trailing unmatched `(` are rejected.
pub fn is_balanced(tokens: &[Token]) -> bool {
    first_unbalanced(tokens).is_none()
}

/// Index of the token that breaks the balance, if any.
///
/// A `)` with no open partner is reported as soon as it is seen. Otherwise
/// the outermost `(` left open at the end is reported.
pub fn first_unbalanced(tokens: &[Token]) -> Option<usize> {
    let mut open = Vec::new();
    for (i, token) in tokens.iter().enumerate() {
        match token.kind {
            TokenKind::LParen => open.push(i),
            TokenKind::RParen => {
                if open.pop().is_none() {
                    return Some(i);
                }
            }
            _ => {}
        }
    }
    open.first().copied()
}

/// Whether `[p, q]` is wrapped in one matched pair of parentheses.
///
/// True for `(1+2)` and `((1))`, false for `(1)+(2)`: there the depth
/// returns to zero before `q`, so the outer tokens belong to different pairs.
pub fn encloses(tokens: &[Token], p: usize, q: usize) -> bool {
    if p >= q || q >= tokens.len() {
        return false;
    }
    if tokens[p].kind != TokenKind::LParen || tokens[q].kind != TokenKind::RParen {
        return false;
    }
    let mut depth: usize = 0;
    for (i, token) in tokens.iter().enumerate().take(q + 1).skip(p) {
        match token.kind {
            TokenKind::LParen => depth += 1,
            TokenKind::RParen => {
                depth = depth.saturating_sub(1);
                if depth == 0 {
                    return i == q;
                }
            }
            _ => {}
        }
    }
    false
}

/// Index of the `)` matching the `(` at `open`, searching no further than `q`.
///
/// Returns `None` if `tokens[open]` is not `(` or its partner lies beyond `q`.
pub fn matching_close(tokens: &[Token], open: usize, q: usize) -> Option<usize> {
    if tokens.get(open)?.kind != TokenKind::LParen {
        return None;
    }
    let last = q.min(tokens.len().checked_sub(1)?);
    let mut depth: usize = 0;
    for (i, token) in tokens.iter().enumerate().take(last + 1).skip(open) {
        match token.kind {
            TokenKind::LParen => depth += 1,
            TokenKind::RParen => {
                depth -= 1;
                if depth == 0 {
                    return Some(i);
                }
            }
            _ => {}
        }
    }
    None
}
