//! Pre-generation validation of template variables.
//!
//! Checks run in a fixed order (project slug, app slug, author name) and
//! stop at the first violation, before baker writes any file.

use crate::context::TemplateVars;
use crate::error::{Result, SlugViolation, ValidationError};
use crate::logger::Logger;
use log::debug;
use regex::Regex;
use std::io::Write;
use std::sync::LazyLock;

pub const WORKFLOW_NAME: &str = "Pre-Generation Validation";
pub const GROUP_TITLE: &str = "Validating Input Parameters";

static IDENTIFIER: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[_\p{XID_Start}]\p{XID_Continue}*$").unwrap());

fn is_lowercase(value: &str) -> bool {
    value == value.to_lowercase()
}

/// Returns true if `value` can be used as a bare identifier.
pub fn is_identifier(value: &str) -> bool {
    IDENTIFIER.is_match(value)
}

/// The project slug must equal its own lower-cased form.
pub fn check_project_slug(slug: &str) -> std::result::Result<(), ValidationError> {
    if !is_lowercase(slug) {
        return Err(ValidationError::ProjectSlug { slug: slug.to_string() });
    }
    Ok(())
}

/// The app slug must be an identifier and all lower-case, checked in that order.
pub fn check_app_slug(slug: &str) -> std::result::Result<(), ValidationError> {
    let violation = if !is_identifier(slug) {
        Some(SlugViolation::NotIdentifier)
    } else if !is_lowercase(slug) {
        Some(SlugViolation::NotLowercase)
    } else {
        None
    };

    match violation {
        Some(violation) => Err(ValidationError::AppSlug { slug: slug.to_string(), violation }),
        None => Ok(()),
    }
}

/// The author name must not contain a backslash.
pub fn check_author_name(name: &str) -> std::result::Result<(), ValidationError> {
    if name.contains('\\') {
        return Err(ValidationError::AuthorName { name: name.to_string() });
    }
    Ok(())
}

/// Runs one check between its info and success lines.
/// A violation is logged as an error and returned.
fn run_check<W: Write>(
    logger: &mut Logger<W>,
    field: &str,
    value: &str,
    check: fn(&str) -> std::result::Result<(), ValidationError>,
) -> Result<()> {
    logger.log_info(&format!("Validating {}: {value}", field.to_lowercase()))?;

    if let Err(err) = check(value) {
        debug!("{field} check rejected {value:?}");
        logger.log_error(&err.to_string())?;
        return Err(err.into());
    }

    logger.log_success(&format!("{field} validation passed"))?;
    Ok(())
}

pub fn validate_project_slug<W: Write>(logger: &mut Logger<W>, slug: &str) -> Result<()> {
    run_check(logger, "Project slug", slug, check_project_slug)
}

pub fn validate_app_slug<W: Write>(logger: &mut Logger<W>, slug: &str) -> Result<()> {
    run_check(logger, "App slug", slug, check_app_slug)
}

pub fn validate_author_name<W: Write>(logger: &mut Logger<W>, name: &str) -> Result<()> {
    run_check(logger, "Author name", name, check_author_name)
}

/// Validates all template variables inside the validation workflow.
///
/// # Errors
/// * `Error::ValidationError` for the first rule broken; later checks do not run
pub fn validate<W: Write>(logger: &mut Logger<W>, vars: &TemplateVars) -> Result<()> {
    logger.workflow(WORKFLOW_NAME, |logger| {
        let mut group = logger.group(GROUP_TITLE)?;
        validate_project_slug(&mut *group, &vars.project_slug)?;
        validate_app_slug(&mut *group, &vars.app_slug)?;
        validate_author_name(&mut *group, &vars.author_name)?;
        Ok(())
    })
}
