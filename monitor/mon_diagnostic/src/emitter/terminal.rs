//! Terminal Emitter
//!
//! Human-readable diagnostic output with optional ANSI color support.
//! When the expression text is attached with [`TerminalEmitter::with_source`],
//! labels are drawn as markers under the expression.

use std::io::Write;

use mon_ir::Span;

use crate::{Diagnostic, Label};

use super::DiagnosticEmitter;

/// ANSI color codes for terminal output.
mod colors {
    pub const ERROR: &str = "\x1b[1;31m"; // Bold red
    pub const HELP: &str = "\x1b[1;32m"; // Bold green
    pub const BOLD: &str = "\x1b[1m";
    pub const GUTTER: &str = "\x1b[1;34m"; // Bold blue
    pub const RESET: &str = "\x1b[0m";
}

/// Color output mode for terminal emitter.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ColorMode {
    /// Automatically detect based on terminal capabilities.
    #[default]
    Auto,
    /// Always use colors.
    Always,
    /// Never use colors.
    Never,
}

impl ColorMode {
    /// Resolve to a boolean. `is_tty` only matters for `Auto`.
    pub fn should_use_colors(self, is_tty: bool) -> bool {
        match self {
            ColorMode::Auto => is_tty,
            ColorMode::Always => true,
            ColorMode::Never => false,
        }
    }
}

impl std::str::FromStr for ColorMode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "auto" => Ok(ColorMode::Auto),
            "always" => Ok(ColorMode::Always),
            "never" => Ok(ColorMode::Never),
            other => Err(format!(
                "invalid color mode '{other}' (expected auto, always or never)"
            )),
        }
    }
}

/// Terminal emitter with optional color support.
pub struct TerminalEmitter<W: Write> {
    writer: W,
    colors: bool,
    source: Option<String>,
}

impl<W: Write> TerminalEmitter<W> {
    /// Create a new terminal emitter with explicit color mode.
    ///
    /// `is_tty` is only consulted for [`ColorMode::Auto`].
    pub fn with_color_mode(writer: W, mode: ColorMode, is_tty: bool) -> Self {
        TerminalEmitter {
            writer,
            colors: mode.should_use_colors(is_tty),
            source: None,
        }
    }

    /// Attach the expression text that diagnostic spans point into.
    #[must_use]
    pub fn with_source(mut self, source: impl Into<String>) -> Self {
        self.source = Some(source.into());
        self
    }

    /// Write text with optional ANSI color codes.
    fn write_colored(&mut self, text: &str, color: &str) {
        if self.colors {
            let _ = write!(self.writer, "{color}{text}{}", colors::RESET);
        } else {
            let _ = write!(self.writer, "{text}");
        }
    }

    fn write_code(&mut self, code: &str) {
        if self.colors {
            let _ = write!(self.writer, "{}[{code}]{}", colors::BOLD, colors::RESET);
        } else {
            let _ = write!(self.writer, "[{code}]");
        }
    }

    fn write_gutter(&mut self) {
        self.write_colored("  |", colors::GUTTER);
    }

    /// Expression line followed by one marker line per label.
    fn write_snippet(&mut self, source: &str, labels: &[Label]) {
        self.write_gutter();
        let _ = writeln!(self.writer);
        self.write_gutter();
        let _ = writeln!(self.writer, " {source}");

        for label in labels {
            let (column, width) = marker_position(source, label.span);
            self.write_gutter();
            let _ = write!(self.writer, " {:column$}", "");
            let carets = "^".repeat(width);
            let line = if label.message.is_empty() {
                carets
            } else {
                format!("{carets} {}", label.message)
            };
            self.write_colored(&line, colors::ERROR);
            let _ = writeln!(self.writer);
        }
    }

    /// Labels without source text: print the byte range instead.
    fn write_span_labels(&mut self, labels: &[Label]) {
        for label in labels {
            let _ = write!(self.writer, "  --> {:?}: ", label.span);
            self.write_colored(&label.message, colors::ERROR);
            let _ = writeln!(self.writer);
        }
    }
}

/// Column and width, in characters, of the marker for `span` under `source`.
///
/// Spans past the end of `source` point just after its last character so an
/// end-of-input marker still has somewhere to go.
fn marker_position(source: &str, span: Span) -> (usize, usize) {
    let start = (span.start as usize).min(source.len());
    let end = (span.end as usize).clamp(start, source.len());
    let column = source
        .get(..start)
        .map_or(start, |prefix| prefix.chars().count());
    let width = source
        .get(start..end)
        .map_or(end - start, |text| text.chars().count());
    (column, width.max(1))
}

impl<W: Write> DiagnosticEmitter for TerminalEmitter<W> {
    fn emit(&mut self, diagnostic: &Diagnostic) {
        // Header: error[CODE]: message
        self.write_colored("error", colors::ERROR);
        self.write_code(diagnostic.code.as_str());
        let _ = writeln!(self.writer, ": {}", diagnostic.message);

        match self.source.take() {
            Some(source) if !diagnostic.labels.is_empty() => {
                self.write_snippet(&source, &diagnostic.labels);
                self.source = Some(source);
            }
            source => {
                self.source = source;
                self.write_span_labels(&diagnostic.labels);
            }
        }

        for note in &diagnostic.notes {
            let _ = write!(self.writer, "  = ");
            self.write_colored("note", colors::BOLD);
            let _ = writeln!(self.writer, ": {note}");
        }

        for suggestion in &diagnostic.suggestions {
            let _ = write!(self.writer, "  = ");
            self.write_colored("help", colors::HELP);
            let _ = writeln!(self.writer, ": {suggestion}");
        }
    }

    fn flush(&mut self) {
        let _ = self.writer.flush();
    }
}

#[cfg(test)]
mod tests;
