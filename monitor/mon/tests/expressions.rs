// Test code uses unwrap/expect for clarity - panics provide good test failure messages
#![allow(clippy::unwrap_used, clippy::expect_used)]

//! End-to-end expression tests through the public `mon` API.
//!
//! Each test goes from expression text to value or error code, so lexing,
//! the balance check and dominant-operator evaluation all take part.

use mon::{evaluate, lex, CpuState, ExprError, MonitorConfig, Register, RegisterMap};
use mon_diagnostic::ErrorCode;
use pretty_assertions::assert_eq;

fn eval(expression: &str) -> Result<u32, ErrorCode> {
    evaluate(expression, &CpuState::new(), &MonitorConfig::default()).map_err(|e| e.code())
}

#[test]
fn arithmetic_follows_conventional_precedence() {
    assert_eq!(eval("2+3*4"), Ok(14));
    assert_eq!(eval("(2+3)*4"), Ok(20));
    assert_eq!(eval("10-3-2"), Ok(5));
    assert_eq!(eval("2 * (3 + 4) - 6 / 2"), Ok(11));
}

#[test]
fn hex_literals() {
    assert_eq!(eval("0x1F"), Ok(31));
    assert_eq!(eval("0xFF+1"), Ok(256));
}

#[test]
fn registers_resolve() {
    let cpu = CpuState::new().with(Register::Eax, 7);
    let value = evaluate("$eax+1", &cpu, &MonitorConfig::default());
    assert_eq!(value, Ok(8));

    let mut regs = RegisterMap::default();
    regs.insert("eax".to_owned(), 7);
    assert_eq!(evaluate("$eax+1", &regs, &MonitorConfig::default()), Ok(8));
}

#[test]
fn std_hashmap_is_a_snapshot() {
    let mut regs = std::collections::HashMap::new();
    regs.insert("esp".to_owned(), 0x7c00_u32);
    assert_eq!(
        evaluate("$esp-4", &regs, &MonitorConfig::default()),
        Ok(0x7bfc)
    );
}

#[test]
fn comparison_and_logic() {
    assert_eq!(eval("1==1"), Ok(1));
    assert_eq!(eval("3!=3"), Ok(0));
    assert_eq!(eval("1&&0"), Ok(0));
    assert_eq!(eval("0||1"), Ok(1));
    assert_eq!(eval("1==1&&0||1"), Ok(1));
}

#[test]
fn malformed_input_is_rejected() {
    assert_eq!(eval(")("), Err(ErrorCode::E1001));
    assert_eq!(eval("(1"), Err(ErrorCode::E1001));
    assert_eq!(eval("2+"), Err(ErrorCode::E1002));
    assert_eq!(eval("2/0"), Err(ErrorCode::E2002));
    assert_eq!(eval(""), Err(ErrorCode::E1002));
    assert_eq!(eval("-1"), Err(ErrorCode::E1002));
}

#[test]
fn lexical_failure_carries_offset() {
    let err = evaluate("12 + @", &CpuState::new(), &MonitorConfig::default()).unwrap_err();
    let ExprError::Lex(lex_err) = err else {
        panic!("expected a lexical failure, got {err:?}");
    };
    assert_eq!(lex_err.offset(), 5);
}

#[test]
fn unknown_register_in_sparse_snapshot() {
    let regs = RegisterMap::default();
    let err = evaluate("$edx", &regs, &MonitorConfig::default()).unwrap_err();
    assert_eq!(err.code(), ErrorCode::E2001);
    assert_eq!(err.to_string(), "unknown register $edx");
}

#[test]
fn evaluation_is_idempotent() {
    let cpu = CpuState::new()
        .with(Register::Eip, 0x0010_0026)
        .with(Register::Ecx, 3);
    let config = MonitorConfig::default();
    let expression = "$eip == 0x100026 && $ecx != 0";
    let first = evaluate(expression, &cpu, &config);
    let second = evaluate(expression, &cpu, &config);
    assert_eq!(first, Ok(1));
    assert_eq!(first, second);
}

#[test]
fn token_limit_is_configurable() {
    // 100 literals and 99 operators.
    let long = vec!["1"; 100].join("+");
    assert_eq!(eval(&long), Ok(100));

    let tight = MonitorConfig {
        max_tokens: 16,
        ..MonitorConfig::default()
    };
    let err = evaluate(&long, &CpuState::new(), &tight).unwrap_err();
    assert_eq!(err.code(), ErrorCode::E0002);

    // 257 tokens against the default limit of 256.
    let too_long = vec!["1"; 129].join("+");
    assert_eq!(eval(&too_long), Err(ErrorCode::E0002));
}

#[test]
fn raised_token_limit_admits_deep_expressions() {
    let roomy = MonitorConfig {
        max_tokens: 20_000,
        ..MonitorConfig::default()
    };
    let cpu = CpuState::new().with(Register::Ebx, 2);

    let nested = format!("{}$ebx{}", "(".repeat(4000), ")".repeat(4000));
    assert_eq!(evaluate(&nested, &cpu, &roomy), Ok(2));

    let chain = vec!["1"; 8000].join(" + ");
    assert_eq!(evaluate(&chain, &cpu, &roomy), Ok(8000));

    let over = vec!["1"; 10_001].join("+");
    let err = evaluate(&over, &cpu, &roomy).unwrap_err();
    assert_eq!(err.code(), ErrorCode::E0002);
}

#[test]
fn lex_keeps_lexemes() {
    let tokens = lex("$eip != 0X10", &MonitorConfig::default()).unwrap();
    let lexemes: Vec<_> = tokens.iter().map(|t| t.kind.lexeme().to_owned()).collect();
    assert_eq!(lexemes, vec!["$eip", "!=", "0X10"]);
}
