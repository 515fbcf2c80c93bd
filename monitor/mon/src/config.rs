//! Console configuration and command-line flags.
//!
//! Flags are parsed by hand: `--max-tokens=<N>`, `--color=<mode>` and
//! repeated `--reg <name>=<value>` (also `--reg=<name>=<value>`). Anything
//! not starting with `--` is positional; `--` ends flag parsing.

use mon_diagnostic::emitter::ColorMode;
use mon_eval::{parse_decimal, parse_hex, RegisterMap};
use mon_ir::Register;
use mon_lexer::DEFAULT_MAX_TOKENS;

/// Settings shared by every evaluation in one console session.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct MonitorConfig {
    /// Tokens accepted per expression before lexing fails.
    pub max_tokens: usize,
    /// Colors for diagnostics on stderr.
    pub color: ColorMode,
}

impl Default for MonitorConfig {
    fn default() -> Self {
        MonitorConfig {
            max_tokens: DEFAULT_MAX_TOKENS,
            color: ColorMode::Auto,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum ConfigError {
    #[error("invalid token limit '{0}' (expected a positive integer)")]
    InvalidMaxTokens(String),
    #[error("{0}")]
    InvalidColor(String),
    #[error("invalid register assignment '{0}' (expected <name>=<value>)")]
    InvalidAssignment(String),
    #[error("unknown register '{0}'")]
    UnknownRegister(String),
    #[error("invalid register value '{0}' (expected a decimal or 0x hex literal)")]
    InvalidValue(String),
    #[error("missing value for {0}")]
    MissingValue(&'static str),
    #[error("unknown option '{0}'")]
    UnknownOption(String),
}

/// Parsed command-line arguments following the subcommand.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct CliArgs {
    pub config: MonitorConfig,
    /// Registers seeded with `--reg`; only these resolve in one-shot mode.
    pub registers: RegisterMap,
    pub positional: Vec<String>,
}

impl CliArgs {
    /// Positional arguments joined by spaces, so `mon eval 1 + 2` works
    /// without quoting.
    pub fn expression(&self) -> Option<String> {
        if self.positional.is_empty() {
            None
        } else {
            Some(self.positional.join(" "))
        }
    }
}

/// Parse the arguments after the subcommand name.
pub fn parse_args(args: &[String]) -> Result<CliArgs, ConfigError> {
    let mut parsed = CliArgs::default();
    let mut iter = args.iter();

    while let Some(arg) = iter.next() {
        if arg == "--" {
            parsed.positional.extend(iter.by_ref().cloned());
            break;
        } else if let Some(limit) = arg.strip_prefix("--max-tokens=") {
            parsed.config.max_tokens = match limit.parse::<usize>() {
                Ok(n) if n > 0 => n,
                _ => return Err(ConfigError::InvalidMaxTokens(limit.to_owned())),
            };
        } else if let Some(mode) = arg.strip_prefix("--color=") {
            parsed.config.color = mode.parse().map_err(ConfigError::InvalidColor)?;
        } else if let Some(assignment) = arg.strip_prefix("--reg=") {
            let (reg, value) = parse_register_assignment(assignment)?;
            parsed.registers.insert(reg.name().to_owned(), value);
        } else if arg == "--reg" {
            let assignment = iter.next().ok_or(ConfigError::MissingValue("--reg"))?;
            let (reg, value) = parse_register_assignment(assignment)?;
            parsed.registers.insert(reg.name().to_owned(), value);
        } else if arg.starts_with("--") {
            return Err(ConfigError::UnknownOption(arg.clone()));
        } else {
            parsed.positional.push(arg.clone());
        }
    }

    Ok(parsed)
}

/// Parse `name=value`, where `name` may carry the `$` sigil and `value` is a
/// decimal or `0x` hex literal.
pub fn parse_register_assignment(text: &str) -> Result<(Register, u32), ConfigError> {
    let (name, value) = text
        .split_once('=')
        .ok_or_else(|| ConfigError::InvalidAssignment(text.to_owned()))?;
    let name = name.trim();
    let reg =
        Register::from_name(name).ok_or_else(|| ConfigError::UnknownRegister(name.to_owned()))?;
    let value = parse_value(value.trim())?;
    Ok((reg, value))
}

/// Parse a decimal or `0x`/`0X` hex literal.
pub(crate) fn parse_value(text: &str) -> Result<u32, ConfigError> {
    let parsed = if text.starts_with("0x") || text.starts_with("0X") {
        parse_hex(text)
    } else {
        parse_decimal(text)
    };
    parsed.map_err(|_| ConfigError::InvalidValue(text.to_owned()))
}
