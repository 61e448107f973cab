//! Terminal output with colored status prefixes.
//!
//! Lines look like `[*] message`, `[W] message` and `[E] message`. Colors
//! are only emitted when the stream is a terminal.

use termcolor::{Color, ColorChoice, ColorSpec, StandardStream, WriteColor};
use std::io::{self, IsTerminal, Write};

/// Writes user-facing status lines to stdout and stderr.
#[derive(Debug, Clone, Default)]
pub struct OutputManager {
    quiet: bool,
}

impl OutputManager {
    /// Creates an output manager. `quiet` suppresses everything but
    /// warnings and errors.
    pub fn new(quiet: bool) -> Self {
        Self { quiet }
    }

    /// Progress or informational line.
    pub fn info(&self, message: &str) -> io::Result<()> {
        if self.quiet {
            return Ok(());
        }
        write_line(stdout(), "[*]", Color::Cyan, message)
    }

    /// Final success line.
    pub fn success(&self, message: &str) -> io::Result<()> {
        if self.quiet {
            return Ok(());
        }
        write_line(stdout(), "[*]", Color::Green, message)
    }

    /// Indented detail line below a previous message.
    pub fn indent(&self, message: &str) -> io::Result<()> {
        if self.quiet {
            return Ok(());
        }
        let mut out = io::stdout().lock();
        writeln!(out, "    {}", message)
    }

    /// Warning line on stderr.
    pub fn warn(&self, message: &str) -> io::Result<()> {
        write_line(stderr(), "[W]", Color::Yellow, message)
    }

    /// Error line on stderr. Never fails; there is nowhere left to report to.
    pub fn error(&self, message: &str) {
        let _ = write_line(stderr(), "[E]", Color::Red, message);
    }
}

fn stdout() -> StandardStream {
    StandardStream::stdout(choice(io::stdout().is_terminal()))
}

fn stderr() -> StandardStream {
    StandardStream::stderr(choice(io::stderr().is_terminal()))
}

fn choice(is_terminal: bool) -> ColorChoice {
    if is_terminal {
        ColorChoice::Auto
    } else {
        ColorChoice::Never
    }
}

fn write_line(mut stream: StandardStream, prefix: &str, color: Color, message: &str) -> io::Result<()> {
    let mut spec = ColorSpec::new();
    spec.set_fg(Some(color)).set_bold(true);

    stream.set_color(&spec)?;
    write!(stream, "{}", prefix)?;
    stream.reset()?;
    writeln!(stream, " {}", message)?;
    stream.flush()
}
