//! Expression evaluation for a debugger console.
//!
//! [`evaluate`] turns an expression such as `$eip == 0x100026 && $ecx != 0`
//! into a 32-bit value against a register snapshot. Each call tokenizes,
//! checks parentheses, and evaluates by dominant-operator splitting; nothing
//! is cached between calls.
//!
//! Failures come back as [`ExprError`], which converts to a
//! [`Diagnostic`](mon_diagnostic::Diagnostic) for terminal rendering.

pub mod config;
pub mod console;
mod error;

use std::sync::Once;

pub use config::{parse_args, parse_register_assignment, CliArgs, ConfigError, MonitorConfig};
pub use console::{Command, CommandError, Console, Outcome};
pub use error::ExprError;

pub use mon_diagnostic::emitter::ColorMode;
pub use mon_eval::{CpuState, RegisterMap, RegisterSnapshot};
pub use mon_ir::{Register, TokenList};
pub use mon_lexer::LexError;

/// Evaluate `expression` against `registers`.
#[tracing::instrument(level = "debug", skip(registers, config))]
pub fn evaluate<R: RegisterSnapshot + ?Sized>(
    expression: &str,
    registers: &R,
    config: &MonitorConfig,
) -> Result<u32, ExprError> {
    let tokens = lex(expression, config)?;
    let value = mon_eval::evaluate_tokens(&tokens, registers)?;
    tracing::debug!(value, "evaluated");
    Ok(value)
}

/// Tokenize `expression` with the configured token limit.
pub fn lex(expression: &str, config: &MonitorConfig) -> Result<TokenList, LexError> {
    mon_lexer::tokenize_with_limit(expression, config.max_tokens)
}

static TRACING_INIT: Once = Once::new();

/// Install a tracing subscriber on stderr.
///
/// Does nothing unless `MON_LOG` holds an `EnvFilter` directive such as
/// `debug` or `mon_eval=trace`. With `MON_LOG_TREE=1` spans are rendered as
/// an indented tree, which shows the evaluator's recursion. Safe to call more
/// than once.
pub fn init_tracing() {
    TRACING_INIT.call_once(|| {
        use tracing_subscriber::{fmt, prelude::*, EnvFilter};

        let Ok(directives) = std::env::var("MON_LOG") else {
            return;
        };
        let filter = EnvFilter::new(directives);

        if std::env::var("MON_LOG_TREE").is_ok_and(|v| v == "1") {
            tracing_subscriber::registry()
                .with(
                    tracing_tree::HierarchicalLayer::new(2)
                        .with_targets(true)
                        .with_bracketed_fields(true),
                )
                .with(filter)
                .init();
        } else {
            tracing_subscriber::registry()
                .with(
                    fmt::layer()
                        .with_writer(std::io::stderr)
                        .with_target(true)
                        .with_level(true),
                )
                .with(filter)
                .init();
        }
    });
}
