use super::*;
use crate::errors::EvalErrorKind;
use mon_lexer::tokenize;
use pretty_assertions::assert_eq;

fn lex(source: &str) -> Vec<Token> {
    match tokenize(source) {
        Ok(tokens) => tokens.as_slice().to_vec(),
        Err(err) => panic!("failed to tokenize {source:?}: {err}"),
    }
}

fn dominant(source: &str) -> Result<(usize, BinaryOp), EvalErrorKind> {
    let tokens = lex(source);
    dominant_operator(&tokens, 0, tokens.len() - 1)
        .map(|d| (d.index, d.op))
        .map_err(|e| e.kind)
}

#[test]
fn loosest_operator_dominates() {
    // 2 + 3 * 4 -> split at `+`
    assert_eq!(dominant("2+3*4"), Ok((1, BinaryOp::Add)));
    // 2 * 3 + 4 -> split at `+`
    assert_eq!(dominant("2*3+4"), Ok((3, BinaryOp::Add)));
}

#[test]
fn rightmost_wins_ties() {
    assert_eq!(dominant("10-3-2"), Ok((3, BinaryOp::Sub)));
    assert_eq!(dominant("8/4*2"), Ok((3, BinaryOp::Mul)));
    assert_eq!(dominant("1-2+3"), Ok((3, BinaryOp::Add)));
}

#[test]
fn logical_or_is_loosest() {
    // 1 == 1 && 0 || 1
    // 0 1  2 3  4 5  6
    assert_eq!(dominant("1==1&&0||1"), Ok((5, BinaryOp::Or)));
    assert_eq!(dominant("1||0&&1"), Ok((1, BinaryOp::Or)));
}

#[test]
fn equality_is_looser_than_arithmetic() {
    assert_eq!(dominant("1+1==2"), Ok((3, BinaryOp::Eq)));
    assert_eq!(dominant("3!=1*3"), Ok((1, BinaryOp::NotEq)));
}

#[test]
fn parenthesized_operators_are_skipped() {
    // (2 + 3) * 4 -> the `+` is inside parens, so `*` dominates.
    assert_eq!(dominant("(2+3)*4"), Ok((5, BinaryOp::Mul)));
    assert_eq!(dominant("4*(2+3)"), Ok((1, BinaryOp::Mul)));
}

#[test]
fn nested_groups_are_skipped_whole() {
    // ( ( 1 || 2 ) && 3 ) * 4
    // 0 1 2 3  4 5 6  7 8 9 10
    assert_eq!(dominant("((1||2)&&3)*4"), Ok((9, BinaryOp::Mul)));
    // Sibling groups separated by a looser operator.
    // ( 1 * 2 ) + ( 3 ) * ( 4 )
    // 0 1 2 3 4 5 6 7 8 9 10 11 12
    assert_eq!(dominant("(1*2)+(3)*(4)"), Ok((5, BinaryOp::Add)));
}

#[test]
fn group_at_both_ends() {
    // ( 1 ) - ( 2 )
    // 0 1 2 3 4 5 6
    assert_eq!(dominant("(1)-(2)"), Ok((3, BinaryOp::Sub)));
}

#[test]
fn sub_range_search() {
    let tokens = lex("9*(1+2*3)");
    // Search inside the parens only: [3, 7] = 1 + 2 * 3
    let d = dominant_operator(&tokens, 3, 7).map(|d| d.index);
    assert_eq!(d, Ok(4));
}

#[test]
fn no_operator_is_malformed() {
    assert_eq!(
        dominant("1 2"),
        Err(EvalErrorKind::Malformed {
            reason: MalformedReason::MissingOperator
        })
    );
    assert_eq!(
        dominant("(1)(2)"),
        Err(EvalErrorKind::Malformed {
            reason: MalformedReason::MissingOperator
        })
    );
}

#[test]
fn stray_close_paren_is_unbalanced() {
    let tokens = lex("1)+2");
    let err = dominant_operator(&tokens, 0, tokens.len() - 1).map_err(|e| (e.kind, e.span));
    assert_eq!(
        err,
        Err((EvalErrorKind::UnbalancedParens, Some(Span::new(1, 2))))
    );
}

#[test]
fn open_paren_closing_past_range_is_malformed() {
    let tokens = lex("(1+2)");
    let err = dominant_operator(&tokens, 0, 3).map_err(|e| e.kind);
    assert_eq!(
        err,
        Err(EvalErrorKind::Malformed {
            reason: MalformedReason::UnclosedParen
        })
    );
}

#[test]
fn range_span_covers_first_to_last() {
    let tokens = lex("12 + 345");
    assert_eq!(range_span(&tokens, 0, 2), Span::new(0, 8));
    assert_eq!(range_span(&tokens, 1, 99), Span::new(3, 8));
    assert_eq!(range_span(&[], 0, 0), Span::default());
}
