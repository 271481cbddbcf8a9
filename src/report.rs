//! Post-generation summary of the values a project was generated with.

use crate::context::TemplateVars;
use crate::error::Result;
use crate::logger::Logger;
use std::io::Write;

pub const WORKFLOW_NAME: &str = "Post-Generation Setup";

pub fn display_project_info<W: Write>(logger: &mut Logger<W>, vars: &TemplateVars) -> Result<()> {
    logger.log_section("\n📦 Project Information")?;

    logger.log_subsection("Package Details")?;
    logger.log_section_info(&format!("Project Name: {}", vars.project_name))?;
    logger.log_section_info(&format!("Project Slug: {}", vars.project_slug))?;
    logger.log_section_info(&format!("App Slug: {}", vars.app_slug))?;

    logger.log_subsection("Author Details")?;
    logger.log_section_info(&format!("Author: {}", vars.author_name))?;
    logger.log_section_info(&format!("Email: {}", vars.author_email))?;

    logger.log_subsection("Description")?;
    logger.log_section_info(&vars.description)?;
    Ok(())
}

pub fn display_next_steps<W: Write>(logger: &mut Logger<W>) -> Result<()> {
    logger.log_notice("Remember to initialize a git repository if you haven't already!")?;
    Ok(())
}

/// Prints the project summary inside the post-generation workflow.
///
/// Field contents are never inspected, so only a failed console write can
/// make this return an error.
pub fn report<W: Write>(logger: &mut Logger<W>, vars: &TemplateVars) -> Result<()> {
    logger.workflow(WORKFLOW_NAME, |logger| {
        display_project_info(logger, vars)?;
        display_next_steps(logger)?;
        logger.log_success("Happy coding! 🚀")?;
        Ok(())
    })
}
