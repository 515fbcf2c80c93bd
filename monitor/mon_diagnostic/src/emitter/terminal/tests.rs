use super::*;
use crate::ErrorCode;
use pretty_assertions::assert_eq;

fn utf8(buf: Vec<u8>) -> String {
    match String::from_utf8(buf) {
        Ok(text) => text,
        Err(err) => panic!("emitter wrote invalid UTF-8: {err}"),
    }
}

fn render_with(mode: ColorMode, source: Option<&str>, diagnostic: &Diagnostic) -> String {
    let mut buf = Vec::new();
    let mut emitter = TerminalEmitter::with_color_mode(&mut buf, mode, false);
    if let Some(source) = source {
        emitter = emitter.with_source(source);
    }
    emitter.emit(diagnostic);
    emitter.flush();
    drop(emitter);
    utf8(buf)
}

fn render(source: Option<&str>, diagnostic: &Diagnostic) -> String {
    render_with(ColorMode::Never, source, diagnostic)
}

fn lex_failure() -> Diagnostic {
    Diagnostic::error(ErrorCode::E0001)
        .with_message("no token rule matches '#'")
        .with_label(Span::new(4, 5), "unexpected character")
}

#[test]
fn test_header_only() {
    let diag = Diagnostic::error(ErrorCode::E1001).with_message("unbalanced parentheses");
    assert_eq!(
        render(None, &diag),
        "error[E1001]: unbalanced parentheses\n"
    );
}

#[test]
fn test_caret_under_offending_character() {
    let text = render(Some("1 + #2"), &lex_failure());
    assert_eq!(
        text,
        "error[E0001]: no token rule matches '#'\n\
         \x20 |\n\
         \x20 | 1 + #2\n\
         \x20 |     ^ unexpected character\n"
    );
}

#[test]
fn test_marker_spans_whole_token() {
    let diag = Diagnostic::error(ErrorCode::E2001)
        .with_message("unknown register $ebx")
        .with_label(Span::new(5, 9), "");
    let text = render(Some("$eax+$ebx"), &diag);
    assert!(text.ends_with("  |      ^^^^\n"), "{text}");
}

#[test]
fn test_end_of_input_marker() {
    let diag = Diagnostic::error(ErrorCode::E1002)
        .with_message("malformed expression")
        .with_label(Span::new(2, 2), "expected operand");
    let text = render(Some("2+"), &diag);
    assert!(text.contains("  |   ^ expected operand\n"), "{text}");
}

#[test]
fn test_marker_counts_characters_not_bytes() {
    assert_eq!(marker_position("é+#", Span::new(3, 4)), (2, 1));
    assert_eq!(marker_position("abc", Span::new(10, 12)), (3, 1));
    assert_eq!(marker_position("abc", Span::new(1, 3)), (1, 2));
}

#[test]
fn test_every_label_gets_carets() {
    let diag = Diagnostic::error(ErrorCode::E2002)
        .with_message("division by zero")
        .with_label(Span::new(1, 2), "divisor is zero")
        .with_label(Span::new(2, 7), "this side");
    let text = render(Some("8/(1-1)"), &diag);
    assert!(text.contains("  |  ^ divisor is zero\n"), "{text}");
    assert!(text.contains("  |   ^^^^^ this side\n"), "{text}");
}

#[test]
fn test_labels_without_source_print_ranges() {
    let text = render(None, &lex_failure());
    assert!(text.contains("  --> 4..5: unexpected character\n"), "{text}");
}

#[test]
fn test_notes_and_suggestions() {
    let diag = lex_failure()
        .with_note("registers need the '$' sigil")
        .with_suggestion("write $eax");
    let text = render(None, &diag);
    assert!(text.contains("  = note: registers need the '$' sigil\n"));
    assert!(text.contains("  = help: write $eax\n"));
}

#[test]
fn test_color_output() {
    let text = render_with(ColorMode::Always, Some("1 + #2"), &lex_failure());
    assert!(text.contains("\x1b["));
    assert!(text.contains("E0001"));
}

#[test]
fn test_source_survives_emission() {
    let mut buf = Vec::new();
    let mut emitter =
        TerminalEmitter::with_color_mode(&mut buf, ColorMode::Never, false).with_source("1 + #2");
    emitter.emit(&lex_failure());
    emitter.emit(&lex_failure());
    drop(emitter);
    let text = utf8(buf);
    assert_eq!(text.matches("  | 1 + #2\n").count(), 2);
}

#[test]
fn test_color_mode_resolution() {
    assert!(ColorMode::Auto.should_use_colors(true));
    assert!(!ColorMode::Auto.should_use_colors(false));
    assert!(ColorMode::Always.should_use_colors(false));
    assert!(!ColorMode::Never.should_use_colors(true));
}

#[test]
fn test_color_mode_parse() {
    assert_eq!("auto".parse::<ColorMode>(), Ok(ColorMode::Auto));
    assert_eq!("always".parse::<ColorMode>(), Ok(ColorMode::Always));
    assert_eq!("never".parse::<ColorMode>(), Ok(ColorMode::Never));
    assert!("sometimes".parse::<ColorMode>().is_err());
}
