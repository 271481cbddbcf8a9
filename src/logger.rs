//! Console output shared by the pre and post generation hooks.
//!
//! Everything a hook says to the user goes through [`Logger`], which writes
//! leveled, optionally colorized lines to stderr so stdout stays free for
//! anything baker may read from a hook. Diagnostic tracing is separate and
//! goes through the `log` facade, see [`init_logger`].

use console::Style;
use log::trace;
use std::io::{self, Write};
use std::ops::{Deref, DerefMut};

/// Initializes diagnostic tracing. Silent unless `verbose` is set.
pub fn init_logger(verbose: bool) {
    env_logger::Builder::new()
        .filter_level(if verbose {
            log::LevelFilter::Trace
        } else {
            log::LevelFilter::Off
        })
        .init();
}

fn red() -> Style {
    Style::new().red()
}

fn green() -> Style {
    Style::new().green()
}

fn yellow() -> Style {
    Style::new().yellow()
}

fn blue() -> Style {
    Style::new().blue()
}

fn cyan() -> Style {
    Style::new().cyan()
}

fn purple() -> Style {
    Style::new().magenta()
}

/// Builds the `=` rule framing phase and bold messages.
fn separator(message: &str) -> String {
    "=".repeat(message.chars().count() + 10)
}

/// Errors a workflow can end with.
///
/// An error that stops the process on purpose, like a rejected template
/// variable, leaves the workflow without a failure announcement.
pub trait WorkflowError {
    fn is_exit(&self) -> bool {
        false
    }
}

impl WorkflowError for io::Error {}

/// Leveled console logger.
///
/// Every method is a single write to the underlying stream. Write failures
/// are returned to the caller rather than swallowed.
pub struct Logger<W: Write = io::Stderr> {
    out: W,
    colors: bool,
    current_workflow: Option<String>,
}

impl Logger<io::Stderr> {
    /// Creates a logger writing to stderr, colored when the terminal supports it.
    pub fn stderr() -> Self {
        Self::new(io::stderr(), console::colors_enabled_stderr())
    }
}

impl Default for Logger<io::Stderr> {
    fn default() -> Self {
        Logger::stderr()
    }
}

impl<W: Write> Logger<W> {
    pub fn new(out: W, colors: bool) -> Self {
        Self { out, colors, current_workflow: None }
    }

    /// Turns ANSI styling on or off.
    pub fn with_colors(mut self, colors: bool) -> Self {
        self.colors = colors;
        self
    }

    pub fn colors(&self) -> bool {
        self.colors
    }

    /// Name of the most recently started workflow, if any.
    pub fn current_workflow(&self) -> Option<&str> {
        self.current_workflow.as_deref()
    }

    /// Consumes the logger and returns the underlying writer.
    pub fn into_inner(self) -> W {
        self.out
    }

    /// Writes one message, styled when a style is given and colors are on.
    pub fn print(&mut self, message: &str, style: Option<&Style>) -> io::Result<()> {
        match style {
            Some(style) => {
                let styled = style.clone().force_styling(self.colors).apply_to(message);
                writeln!(self.out, "{styled}")
            }
            None => writeln!(self.out, "{message}"),
        }
    }

    pub fn log_info(&mut self, message: &str) -> io::Result<()> {
        self.print(&format!("💡 {message}"), Some(&cyan()))
    }

    pub fn log_success(&mut self, message: &str) -> io::Result<()> {
        self.print(&format!("🎉 {message}"), Some(&green()))
    }

    pub fn log_error(&mut self, message: &str) -> io::Result<()> {
        self.print(&format!("💥 {message}"), Some(&red()))
    }

    pub fn log_warning(&mut self, message: &str) -> io::Result<()> {
        self.print(&format!("🚨 {message}"), Some(&yellow()))
    }

    pub fn log_notice(&mut self, message: &str) -> io::Result<()> {
        self.print(&format!("ℹ️  NOTICE: {message}"), Some(&blue()))
    }

    pub fn log_header(&mut self, header: &str) -> io::Result<()> {
        self.print(&format!("\n🎯 {header}"), Some(&blue().bold()))
    }

    pub fn log_section(&mut self, section: &str) -> io::Result<()> {
        self.print(section, Some(&cyan()))
    }

    pub fn log_subsection(&mut self, subsection: &str) -> io::Result<()> {
        self.print(&format!("\n  {subsection}"), Some(&cyan().bold()))
    }

    /// Writes an indented, unstyled line under the current subsection.
    pub fn log_section_info(&mut self, info: &str) -> io::Result<()> {
        self.print(&format!("    {info}"), None)
    }

    /// Writes a `[step/total]` progress line.
    ///
    /// The counters are printed as given; `step > total` is not rejected.
    pub fn log_step(&mut self, step: usize, total: usize, message: &str) -> io::Result<()> {
        self.print(&format!("  [{step}/{total}] {message}"), Some(&blue()))
    }

    pub fn log_phase(&mut self, message: &str) -> io::Result<()> {
        let style = purple().bold();
        let rule = separator(message);
        self.print(&format!("\n{rule}"), Some(&style))?;
        self.print(&format!("     {message}"), Some(&style))?;
        self.print(&rule, Some(&style))
    }

    pub fn display_bold_message(&mut self, message: &str) -> io::Result<()> {
        let rule = separator(message);
        self.print(&rule, Some(&green()))?;
        self.print(&format!("     {message}"), Some(&green().bold()))?;
        self.print(&rule, Some(&green()))
    }

    /// Opens a group. The returned guard prints the end marker when dropped,
    /// whether the group is left normally or through an early return.
    pub fn group(&mut self, title: &str) -> io::Result<LogGroup<'_, W>> {
        self.print(&format!("▶ {title}"), Some(&cyan()))?;
        Ok(LogGroup { logger: self, title: title.to_string() })
    }

    /// Runs `work` as a named workflow, announcing its start and its outcome.
    ///
    /// An error from `work` is returned unchanged, after the failure line
    /// unless it is an exit.
    pub fn workflow<T, E, F>(&mut self, name: &str, work: F) -> Result<T, E>
    where
        E: From<io::Error> + WorkflowError,
        F: FnOnce(&mut Self) -> Result<T, E>,
    {
        self.current_workflow = Some(name.to_string());
        trace!("Entering workflow '{name}'");
        self.print(&format!("\n🚀 Starting workflow: {name}"), Some(&purple().bold()))?;

        match work(self) {
            Ok(value) => {
                self.print(&format!("✅ Workflow completed: {name}"), Some(&green().bold()))?;
                Ok(value)
            }
            Err(err) if err.is_exit() => {
                trace!("Leaving workflow '{name}' on exit");
                Err(err)
            }
            Err(err) => {
                // The work's error takes precedence over a failed write here.
                let _ = self.print(&format!("❌ Workflow failed: {name}"), Some(&red().bold()));
                Err(err)
            }
        }
    }
}

/// Guard returned by [`Logger::group`].
///
/// Dereferences to the logger, so output inside the group is written
/// through the guard itself.
pub struct LogGroup<'a, W: Write> {
    logger: &'a mut Logger<W>,
    title: String,
}

impl<W: Write> Deref for LogGroup<'_, W> {
    type Target = Logger<W>;

    fn deref(&self) -> &Self::Target {
        &*self.logger
    }
}

impl<W: Write> DerefMut for LogGroup<'_, W> {
    fn deref_mut(&mut self) -> &mut Self::Target {
        &mut *self.logger
    }
}

impl<W: Write> Drop for LogGroup<'_, W> {
    fn drop(&mut self) {
        let end = format!("◀ End: {}", self.title);
        // Drop cannot report a failed write.
        let _ = self.logger.print(&end, Some(&cyan()));
    }
}
