use super::*;
use crate::{evaluate, CpuState, MonitorConfig, RegisterMap};
use pretty_assertions::assert_eq;

fn failure(expression: &str) -> ExprError {
    failure_with(expression, &MonitorConfig::default())
}

fn failure_with(expression: &str, config: &MonitorConfig) -> ExprError {
    match evaluate(expression, &CpuState::new(), config) {
        Ok(value) => panic!("{expression:?} unexpectedly evaluated to {value}"),
        Err(err) => err,
    }
}

#[test]
fn every_failure_has_its_code() {
    let tight = MonitorConfig {
        max_tokens: 2,
        ..MonitorConfig::default()
    };
    assert_eq!(failure("1 # 2").code(), ErrorCode::E0001);
    assert_eq!(failure_with("1+2", &tight).code(), ErrorCode::E0002);
    assert_eq!(failure(")(").code(), ErrorCode::E1001);
    assert_eq!(failure("2+").code(), ErrorCode::E1002);
    assert_eq!(failure("2/0").code(), ErrorCode::E2002);
    assert_eq!(failure("0x100000000").code(), ErrorCode::E2003);

    let sparse = RegisterMap::default();
    let unknown = evaluate("$eax", &sparse, &MonitorConfig::default());
    assert_eq!(unknown.map_err(|e| e.code()), Err(ErrorCode::E2001));
}

#[test]
fn lexical_diagnostic_points_at_character() {
    let diag = failure("1 + #2").to_diagnostic();
    assert_eq!(diag.code, ErrorCode::E0001);
    assert_eq!(diag.message, "no token rule matches '#'");
    assert_eq!(diag.labels.first().map(|l| l.span), Some(Span::new(4, 5)));
}

#[test]
fn bare_register_name_gets_a_note() {
    let diag = failure("eax+1").to_diagnostic();
    assert_eq!(diag.labels.first().map(|l| l.span), Some(Span::new(0, 1)));
    assert_eq!(diag.notes.len(), 1);
}

#[test]
fn token_limit_suggests_flag() {
    let tight = MonitorConfig {
        max_tokens: 2,
        ..MonitorConfig::default()
    };
    let diag = failure_with("1+2", &tight).to_diagnostic();
    assert_eq!(diag.labels.first().map(|l| l.span), Some(Span::new(2, 3)));
    assert_eq!(
        diag.suggestions,
        vec!["raise the limit with --max-tokens=<N>".to_owned()]
    );
}

#[test]
fn eval_diagnostic_labels_operator() {
    let diag = failure("8/(1-1)").to_diagnostic();
    assert_eq!(diag.message, "division by zero");
    assert_eq!(diag.labels.first().map(|l| l.span), Some(Span::new(1, 2)));
}

#[test]
fn division_by_zero_carries_no_notes() {
    for expression in ["2/0", "$eax == 0 || 1/$eax"] {
        let diag = failure(expression).to_diagnostic();
        assert_eq!(diag.code, ErrorCode::E2002, "{expression}");
        assert_eq!(diag.notes, Vec::<String>::new(), "{expression}");
    }
}

#[test]
fn unknown_register_suggests_reg_flag() {
    let err = evaluate("$ebx", &RegisterMap::default(), &MonitorConfig::default());
    let Err(err) = err else {
        panic!("expected an unknown register");
    };
    let diag = err.to_diagnostic();
    assert_eq!(diag.message, "unknown register $ebx");
    assert_eq!(
        diag.suggestions,
        vec!["provide a value with --reg ebx=<value>".to_owned()]
    );
}

#[test]
fn span_follows_source() {
    assert_eq!(failure(")(").span(), Some(Span::new(0, 1)));
    assert_eq!(failure("(1+2").span(), Some(Span::new(0, 1)));
    assert_eq!(failure("").span(), None);
}

#[test]
fn display_is_transparent() {
    assert_eq!(failure("2/0").to_string(), "division by zero");
    assert_eq!(
        failure("1 # 2").to_string(),
        "no token rule matches '#' at offset 2"
    );
}
