//! Baker hooks validate template variables before a project is generated
//! and summarize the result afterwards.

/// Command-line interface shared by the hook binaries
pub mod cli;

/// Reading the payload baker passes to a hook
pub mod context;

/// Error types and handling for the hooks
pub mod error;

/// Pre and post generation hook entry points
pub mod hooks;

/// Leveled console output and diagnostic logging setup
pub mod logger;

/// Post-generation project summary
pub mod report;

/// Pre-generation checks on template variables
pub mod validate;
