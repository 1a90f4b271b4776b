//! Output management and formatting.
//!
//! [`OutputManager`] owns the *decorated* command output: the channel
//! listing header, init/config status lines. The notification lines
//! themselves ("Sending Email: …", "Logging: …") never pass through here —
//! they are written by the adapters as plain stdout and must stay
//! byte-exact regardless of flags.
//!
//! Rendering and writing are split the same way the delivery adapters
//! split them: `render` builds the line, `write` puts it on the terminal.
//! Tests assert on `render`.

use std::io;

use console::Term;
use owo_colors::OwoColorize;

use crate::cli::global::GlobalArgs;
use crate::config::AppConfig;

/// Decoration applied to one output line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Tone {
    Plain,
    Header,
    Success,
    Warning,
    Info,
}

/// Manages decorated CLI output.
pub struct OutputManager {
    quiet: bool,
    no_color: bool,
    term: Term,
}

impl OutputManager {
    /// Build an `OutputManager` from parsed CLI flags and loaded config.
    ///
    /// Colour is off when either the `--no-color` flag (or `NO_COLOR` env,
    /// via clap) or the config file says so.
    pub fn new(args: &GlobalArgs, config: &AppConfig) -> Self {
        Self {
            quiet: args.quiet,
            no_color: args.no_color || config.output.no_color,
            term: Term::stdout(),
        }
    }

    // ── Public write methods ───────────────────────────────────────────────

    /// Generic message, undecorated.
    pub fn print(&self, msg: &str) -> io::Result<()> {
        self.write(Tone::Plain, msg)
    }

    /// Bold cyan header line.
    pub fn header(&self, msg: &str) -> io::Result<()> {
        self.write(Tone::Header, msg)
    }

    /// Success indicator: `✓ <msg>`.
    pub fn success(&self, msg: &str) -> io::Result<()> {
        self.write(Tone::Success, msg)
    }

    /// Warning indicator: `⚠ <msg>`.
    pub fn warning(&self, msg: &str) -> io::Result<()> {
        self.write(Tone::Warning, msg)
    }

    /// Informational indicator: `ℹ <msg>`.
    pub fn info(&self, msg: &str) -> io::Result<()> {
        self.write(Tone::Info, msg)
    }

    // ── Rendering ─────────────────────────────────────────────────────────

    /// Decorated output is suppressed wholesale in quiet mode; errors
    /// bypass this type entirely (see `error::CliError`).
    fn write(&self, tone: Tone, msg: &str) -> io::Result<()> {
        if self.quiet {
            return Ok(());
        }
        self.term.write_line(&self.render(tone, msg))
    }

    /// The exact line `write` emits for `msg` under `tone`.
    fn render(&self, tone: Tone, msg: &str) -> String {
        if self.no_color {
            return match tone {
                Tone::Plain | Tone::Header => msg.to_owned(),
                Tone::Success => format!("\u{2713} {msg}"), // ✓
                Tone::Warning => format!("\u{26a0} {msg}"), // ⚠
                Tone::Info => format!("\u{2139} {msg}"),    // ℹ
            };
        }
        match tone {
            Tone::Plain => msg.to_owned(),
            Tone::Header => msg.cyan().bold().to_string(),
            Tone::Success => format!("{} {}", "\u{2713}".green().bold(), msg.green()),
            Tone::Warning => format!("{} {}", "\u{26a0}".yellow().bold(), msg.yellow()),
            Tone::Info => format!("{} {}", "\u{2139}".blue().bold(), msg.blue()),
        }
    }
}

// ── tests ─────────────────────────────────────────────────────────────────────
