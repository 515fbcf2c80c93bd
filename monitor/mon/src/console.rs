//! Interactive console.
//!
//! Reads one command per line, evaluates expressions against the console's
//! own [`CpuState`], and writes results to `out` and diagnostics to `err`.
//! A line that is not a command is evaluated as if prefixed with `p`.

use std::io::{self, BufRead, Write};

use mon_diagnostic::emitter::{ColorMode, DiagnosticEmitter, TerminalEmitter};
use mon_eval::CpuState;
use mon_ir::{Register, TokenList};
use tracing::debug;

use crate::{evaluate, lex, ExprError, MonitorConfig};

pub const PROMPT: &str = "(mon) ";

/// One parsed console line. Expressions borrow from the line.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Command<'a> {
    /// `p <expr>` or a bare expression.
    Print(&'a str),
    /// `lex <expr>`
    Lex(&'a str),
    /// `info r`
    InfoRegisters,
    /// `set <reg> <expr>`
    Set { reg: Register, expression: &'a str },
    Help,
    Quit,
    /// Blank line.
    Empty,
}

#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum CommandError {
    #[error("usage: {0}")]
    Usage(&'static str),
    #[error("unknown info subcommand '{0}' (try 'info r')")]
    UnknownInfo(String),
    #[error("unknown register '{0}'")]
    UnknownRegister(String),
}

impl<'a> Command<'a> {
    pub fn parse(line: &'a str) -> Result<Self, CommandError> {
        let line = line.trim();
        if line.is_empty() {
            return Ok(Command::Empty);
        }
        let (word, rest) = match line.split_once(char::is_whitespace) {
            Some((word, rest)) => (word, rest.trim()),
            None => (line, ""),
        };

        match word {
            "p" | "print" => non_empty(rest, "p <expr>").map(Command::Print),
            "lex" => non_empty(rest, "lex <expr>").map(Command::Lex),
            "info" => match rest {
                "r" | "registers" => Ok(Command::InfoRegisters),
                "" => Err(CommandError::Usage("info r")),
                other => Err(CommandError::UnknownInfo(other.to_owned())),
            },
            "set" => {
                let (name, expression) = rest
                    .split_once(char::is_whitespace)
                    .ok_or(CommandError::Usage("set <reg> <expr>"))?;
                let reg = Register::from_name(name)
                    .ok_or_else(|| CommandError::UnknownRegister(name.to_owned()))?;
                let expression = non_empty(expression.trim(), "set <reg> <expr>")?;
                Ok(Command::Set { reg, expression })
            }
            "help" | "h" | "?" => Ok(Command::Help),
            "q" | "quit" | "exit" => Ok(Command::Quit),
            _ => Ok(Command::Print(line)),
        }
    }
}

fn non_empty<'a>(text: &'a str, usage: &'static str) -> Result<&'a str, CommandError> {
    if text.is_empty() {
        Err(CommandError::Usage(usage))
    } else {
        Ok(text)
    }
}

/// Whether the console keeps reading after a command.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Outcome {
    Continue,
    Quit,
}

#[derive(Debug, thiserror::Error)]
pub enum ConsoleError {
    #[error(transparent)]
    Command(#[from] CommandError),
    /// The expression text is kept so the diagnostic can point into it.
    #[error("{error}")]
    Expr { expression: String, error: ExprError },
    #[error(transparent)]
    Io(#[from] io::Error),
}

impl ConsoleError {
    fn expr(expression: &str, error: impl Into<ExprError>) -> Self {
        ConsoleError::Expr {
            expression: expression.to_owned(),
            error: error.into(),
        }
    }
}

/// Console session state.
#[derive(Clone, Debug, Default)]
pub struct Console {
    cpu: CpuState,
    config: MonitorConfig,
}

impl Console {
    pub fn new(config: MonitorConfig) -> Self {
        Console {
            cpu: CpuState::new(),
            config,
        }
    }

    #[must_use]
    pub fn with_cpu(mut self, cpu: CpuState) -> Self {
        self.cpu = cpu;
        self
    }

    pub fn cpu(&self) -> &CpuState {
        &self.cpu
    }

    /// Run one line.
    pub fn execute<W: Write>(&mut self, line: &str, out: &mut W) -> Result<Outcome, ConsoleError> {
        let command = Command::parse(line)?;
        debug!(?command, "console command");

        match command {
            Command::Empty => {}
            Command::Print(expression) => {
                let value = evaluate(expression, &self.cpu, &self.config)
                    .map_err(|e| ConsoleError::expr(expression, e))?;
                writeln!(out, "{}", format_value(value))?;
            }
            Command::Lex(expression) => {
                let tokens =
                    lex(expression, &self.config).map_err(|e| ConsoleError::expr(expression, e))?;
                write_tokens(out, &tokens)?;
            }
            Command::InfoRegisters => {
                for (reg, value) in self.cpu.iter() {
                    writeln!(out, "{:<4} {value:#010x}  {value}", reg.name())?;
                }
            }
            Command::Set { reg, expression } => {
                let value = evaluate(expression, &self.cpu, &self.config)
                    .map_err(|e| ConsoleError::expr(expression, e))?;
                self.cpu.write(reg, value);
                writeln!(out, "{reg} = {}", format_value(value))?;
            }
            Command::Help => write_help(out)?,
            Command::Quit => return Ok(Outcome::Quit),
        }
        Ok(Outcome::Continue)
    }

    /// Read-eval-print until `quit` or end of input.
    ///
    /// Command and expression failures are reported on `err` and the loop
    /// goes on; only I/O errors end it early.
    pub fn run<R: BufRead, W: Write, E: Write>(
        &mut self,
        mut input: R,
        mut out: W,
        mut err: E,
        err_is_tty: bool,
    ) -> io::Result<()> {
        let mut line = String::new();
        loop {
            write!(out, "{PROMPT}")?;
            out.flush()?;

            line.clear();
            if input.read_line(&mut line)? == 0 {
                writeln!(out)?;
                break;
            }

            match self.execute(&line, &mut out) {
                Ok(Outcome::Continue) => {}
                Ok(Outcome::Quit) => break,
                Err(ConsoleError::Io(e)) => return Err(e),
                Err(ConsoleError::Command(e)) => writeln!(err, "error: {e}")?,
                Err(ConsoleError::Expr { expression, error }) => {
                    report_error(&mut err, self.config.color, err_is_tty, &expression, &error);
                }
            }
        }
        out.flush()
    }
}

/// `<decimal> (0x<hex>)`
pub fn format_value(value: u32) -> String {
    format!("{value} ({value:#x})")
}

/// One token per line: index, category, text, byte range.
pub fn write_tokens<W: Write>(out: &mut W, tokens: &TokenList) -> io::Result<()> {
    for (i, token) in tokens.iter().enumerate() {
        writeln!(
            out,
            "{i:>3}  {:<9} {:<12} {:?}",
            token.kind.display_name(),
            token.kind.lexeme(),
            token.span
        )?;
    }
    Ok(())
}

/// Render `error` as a diagnostic pointing into `expression`.
pub fn report_error<E: Write>(
    writer: E,
    color: ColorMode,
    is_tty: bool,
    expression: &str,
    error: &ExprError,
) {
    let mut emitter =
        TerminalEmitter::with_color_mode(writer, color, is_tty).with_source(expression);
    emitter.emit(&error.to_diagnostic());
    emitter.flush();
}

fn write_help<W: Write>(out: &mut W) -> io::Result<()> {
    writeln!(out, "Commands:")?;
    writeln!(out, "  p <expr>          Evaluate an expression")?;
    writeln!(out, "  lex <expr>        Show the tokens of an expression")?;
    writeln!(out, "  info r            Show register values")?;
    writeln!(out, "  set <reg> <expr>  Assign a register")?;
    writeln!(out, "  help              Show this help")?;
    writeln!(out, "  q                 Quit")?;
    writeln!(out)?;
    writeln!(out, "Expressions: decimal and 0x hex literals, $eax..$edi and $eip,")?;
    writeln!(out, "  + - * /  == !=  &&  ||  and parentheses.")
}
