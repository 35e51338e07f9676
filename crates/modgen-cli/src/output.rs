//! Operator-facing messages on stdout.

use std::io::{self, IsTerminal};

use console::Term;
use owo_colors::{AnsiColors, OwoColorize};

use crate::cli::global::{GlobalArgs, OutputFormat};
use crate::config::AppConfig;

/// Writes status lines, honouring `--quiet` and the colour settings.
pub struct OutputManager {
    quiet: bool,
    no_color: bool,
    term: Term,
}

impl OutputManager {
    pub fn new(args: &GlobalArgs, config: &AppConfig) -> Self {
        let plain = match args.output_format {
            OutputFormat::Auto => !io::stdout().is_terminal(),
            OutputFormat::Human => false,
            OutputFormat::Plain => true,
        };

        Self {
            quiet: args.quiet,
            no_color: plain || args.no_color || config.output.no_color,
            term: Term::stdout(),
        }
    }

    /// Unadorned line.
    pub fn print(&self, msg: &str) -> io::Result<()> {
        self.write(msg)
    }

    /// `✓ msg`
    pub fn success(&self, msg: &str) -> io::Result<()> {
        self.marked('\u{2713}', AnsiColors::Green, msg)
    }

    /// `⚠ msg`
    pub fn warning(&self, msg: &str) -> io::Result<()> {
        self.marked('\u{26a0}', AnsiColors::Yellow, msg)
    }

    /// `ℹ msg`
    pub fn info(&self, msg: &str) -> io::Result<()> {
        self.marked('\u{2139}', AnsiColors::Blue, msg)
    }

    pub fn header(&self, text: &str) -> io::Result<()> {
        if self.no_color {
            self.write(text)
        } else {
            self.write(&text.cyan().bold().to_string())
        }
    }

    /// `  • text`, for plan previews and listings.
    pub fn bullet(&self, text: &str) -> io::Result<()> {
        if self.no_color {
            self.write(&format!("  \u{2022} {text}"))
        } else {
            self.write(&format!("  {} {text}", "\u{2022}".dimmed()))
        }
    }

    fn marked(&self, symbol: char, color: AnsiColors, msg: &str) -> io::Result<()> {
        if self.no_color {
            self.write(&format!("{symbol} {msg}"))
        } else {
            self.write(&format!(
                "{} {}",
                symbol.color(color).bold(),
                msg.color(color)
            ))
        }
    }

    fn write(&self, line: &str) -> io::Result<()> {
        if self.quiet {
            return Ok(());
        }
        self.term.write_line(line)
    }
}
