//! Colored terminal output.

use std::io::{IsTerminal, Write};
use termcolor::{BufferWriter, Color, ColorChoice, ColorSpec, WriteColor};

/// Writes status lines to the terminal, honoring verbose and quiet modes.
///
/// Status goes to stdout, warnings and errors to stderr. Color is only used
/// when the stream is a terminal.
#[derive(Debug, Clone)]
pub struct OutputManager {
    verbose: bool,
    quiet: bool,
}

impl OutputManager {
    pub fn new(verbose: bool, quiet: bool) -> Self {
        Self { verbose, quiet }
    }

    /// Print only in verbose mode
    pub fn verbose(&self, message: &str) -> std::io::Result<()> {
        if !self.verbose || self.quiet {
            return Ok(());
        }
        self.stdout_line(None, "", message)
    }

    pub fn success(&self, message: &str) -> std::io::Result<()> {
        if self.quiet {
            return Ok(());
        }
        self.stdout_line(Some(Color::Green), "✓ ", message)
    }

    pub fn warn(&self, message: &str) -> std::io::Result<()> {
        if self.quiet {
            return Ok(());
        }
        Self::stderr_line(Color::Yellow, "⚠️  Warning: ", message)
    }

    pub fn section(&self, title: &str) -> std::io::Result<()> {
        if self.quiet {
            return Ok(());
        }
        let bufwtr = BufferWriter::stdout(Self::choice(std::io::stdout().is_terminal()));
        let mut buffer = bufwtr.buffer();
        buffer.set_color(ColorSpec::new().set_bold(true))?;
        writeln!(&mut buffer, "{title}")?;
        buffer.reset()?;
        bufwtr.print(&buffer)
    }

    pub fn indent(&self, message: &str) -> std::io::Result<()> {
        if self.quiet {
            return Ok(());
        }
        let mut stdout = std::io::stdout().lock();
        writeln!(stdout, "   {message}")
    }

    /// Uncolored output that is never suppressed (reports, JSON)
    pub fn plain(&self, text: &str) -> std::io::Result<()> {
        let mut stdout = std::io::stdout().lock();
        writeln!(stdout, "{text}")
    }

    fn choice(is_terminal: bool) -> ColorChoice {
        if is_terminal {
            ColorChoice::Auto
        } else {
            ColorChoice::Never
        }
    }

    fn stdout_line(&self, color: Option<Color>, marker: &str, message: &str) -> std::io::Result<()> {
        let bufwtr = BufferWriter::stdout(Self::choice(std::io::stdout().is_terminal()));
        let mut buffer = bufwtr.buffer();
        buffer.set_color(ColorSpec::new().set_fg(color))?;
        write!(&mut buffer, "{marker}")?;
        buffer.reset()?;
        writeln!(&mut buffer, "{message}")?;
        bufwtr.print(&buffer)
    }

    fn stderr_line(color: Color, marker: &str, message: &str) -> std::io::Result<()> {
        let bufwtr = BufferWriter::stderr(Self::choice(std::io::stderr().is_terminal()));
        let mut buffer = bufwtr.buffer();
        buffer.set_color(ColorSpec::new().set_fg(Some(color)))?;
        write!(&mut buffer, "{marker}")?;
        buffer.reset()?;
        writeln!(&mut buffer, "{message}")?;
        bufwtr.print(&buffer)
    }
}
