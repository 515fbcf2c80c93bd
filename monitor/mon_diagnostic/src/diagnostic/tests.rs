use super::*;
use pretty_assertions::assert_eq;

#[test]
fn test_builder_collects_parts() {
    let diag = Diagnostic::error(ErrorCode::E2002)
        .with_message("division by zero")
        .with_label(Span::new(1, 2), "divisor is zero")
        .with_label(Span::new(2, 7), "evaluated here")
        .with_note("both operands are evaluated")
        .with_suggestion("guard the divisor");

    assert_eq!(diag.code, ErrorCode::E2002);
    assert_eq!(diag.message, "division by zero");
    assert_eq!(
        diag.labels,
        vec![
            Label::new(Span::new(1, 2), "divisor is zero"),
            Label::new(Span::new(2, 7), "evaluated here"),
        ]
    );
    assert_eq!(diag.notes, vec!["both operands are evaluated".to_owned()]);
    assert_eq!(diag.suggestions, vec!["guard the divisor".to_owned()]);
}

#[test]
fn test_display_is_header_line() {
    let diag = Diagnostic::error(ErrorCode::E2001).with_message("unknown register $ebx");
    assert_eq!(diag.to_string(), "error[E2001]: unknown register $ebx");
}
