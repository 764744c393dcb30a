//! Colored, verbosity-aware terminal output.

use std::io::{IsTerminal, Write};
use termcolor::{Color, ColorChoice, ColorSpec, StandardStream, WriteColor};

/// Output manager for user-facing progress messages.
///
/// Status lines go to stderr so stdout carries only payload such as the
/// printed build command. Colors are disabled when `NO_COLOR` is set or
/// stderr is not a terminal.
#[derive(Debug, Clone)]
pub struct OutputManager {
    verbose: bool,
    quiet: bool,
    color_choice: ColorChoice,
}

impl OutputManager {
    pub fn new(verbose: bool, quiet: bool) -> Self {
        Self {
            verbose,
            quiet,
            color_choice: color_choice(
                std::env::var_os("NO_COLOR").is_some(),
                std::io::stderr().is_terminal(),
            ),
        }
    }

    fn write_line(&self, color: Option<Color>, bold: bool, prefix: &str, message: &str) -> std::io::Result<()> {
        let mut stream = StandardStream::stderr(self.color_choice);
        if color.is_some() || bold {
            stream.set_color(ColorSpec::new().set_fg(color).set_bold(bold))?;
        }
        write!(stream, "{prefix}")?;
        stream.reset()?;
        writeln!(stream, "{message}")
    }

    /// Progress message, suppressed by `--quiet`.
    pub fn progress(&self, message: &str) -> std::io::Result<()> {
        if self.quiet {
            return Ok(());
        }
        self.write_line(Some(Color::Cyan), true, "==> ", message)
    }

    /// Success message, suppressed by `--quiet`.
    pub fn success(&self, message: &str) -> std::io::Result<()> {
        if self.quiet {
            return Ok(());
        }
        self.write_line(Some(Color::Green), true, "✓ ", message)
    }

    /// Warning, suppressed by `--quiet`.
    pub fn warn(&self, message: &str) -> std::io::Result<()> {
        if self.quiet {
            return Ok(());
        }
        self.write_line(Some(Color::Yellow), true, "warning: ", message)
    }

    /// Error message, always shown.
    pub fn error(&self, message: &str) -> std::io::Result<()> {
        self.write_line(Some(Color::Red), true, "Error: ", message)
    }

    /// Only shown with `--verbose`.
    pub fn verbose(&self, message: &str) -> std::io::Result<()> {
        if !self.verbose || self.quiet {
            return Ok(());
        }
        self.write_line(None, false, "  ", message)
    }

    pub fn section(&self, title: &str) -> std::io::Result<()> {
        if self.quiet {
            return Ok(());
        }
        self.write_line(None, true, "", title)
    }

    pub fn indent(&self, message: &str) -> std::io::Result<()> {
        if self.quiet {
            return Ok(());
        }
        self.write_line(None, false, "    ", message)
    }

    /// Writes `message` to stdout regardless of verbosity.
    pub fn payload(&self, message: &str) -> std::io::Result<()> {
        let mut stdout = std::io::stdout().lock();
        writeln!(stdout, "{message}")?;
        stdout.flush()
    }
}

/// termcolor's `Auto` only consults `TERM`, so a pipe has to be ruled out here.
fn color_choice(no_color: bool, stderr_is_terminal: bool) -> ColorChoice {
    if no_color || !stderr_is_terminal {
        ColorChoice::Never
    } else {
        ColorChoice::Auto
    }
}
