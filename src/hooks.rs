//! Entry points for the pre and post generation hooks.

use crate::cli::{get_args, Args};
use crate::context::{read_payload, HookPayload};
use crate::error::{default_error_handler, Error, Result};
use crate::logger::{init_logger, Logger};
use crate::{report, validate};
use log::debug;
use std::io::Write;

/// The two points in baker's generation lifecycle a hook can run at.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Hook {
    /// Runs before any file is generated; a failure aborts generation.
    PreGenProject,
    /// Runs after generation completes.
    PostGenProject,
}

impl Hook {
    /// File name baker looks for under the template's `hooks` directory.
    pub fn file_name(&self) -> &'static str {
        match self {
            Hook::PreGenProject => "pre_gen_project",
            Hook::PostGenProject => "post_gen_project",
        }
    }

    /// Runs the hook against an already-read payload.
    ///
    /// # Errors
    /// * `Error::ContextError` if the pre-generation hook receives no context
    /// * `Error::ValidationError` for the first rejected template variable
    /// * `Error::IoError` if writing to the console fails
    pub fn execute<W: Write>(&self, logger: &mut Logger<W>, payload: &HookPayload) -> Result<()> {
        let vars = payload.template_vars()?;
        debug!("Running {} with {:?}", self.file_name(), vars);

        match self {
            Hook::PreGenProject => {
                let vars = vars.ok_or_else(|| {
                    Error::ContextError("No template variables supplied".to_string())
                })?;
                validate::validate(logger, &vars)
            }
            Hook::PostGenProject => report::report(logger, &vars.unwrap_or_default()),
        }
    }
}

/// Reads the payload named by `args` and runs `hook` with console output on stderr.
pub fn run(hook: Hook, args: &Args) -> Result<()> {
    let payload = read_payload(args.context.as_deref())?;
    let mut logger = Logger::stderr();
    hook.execute(&mut logger, &payload)
}

/// Binary entry point: parses arguments, runs the hook and exits non-zero on failure.
pub fn main(hook: Hook) {
    let args = get_args();
    init_logger(args.verbose);
    if args.no_color {
        // Also covers the logger `default_error_handler` opens.
        console::set_colors_enabled_stderr(false);
    }

    if let Err(err) = run(hook, &args) {
        default_error_handler(err);
    }
}
