//! Hook input handling.
//! Baker writes a JSON document to a hook's stdin before running it. This
//! module turns that document into the template variables the hooks read.

use crate::error::{Error, Result};
use indexmap::IndexMap;
use log::debug;
use serde::{Deserialize, Serialize};
use std::io::{IsTerminal, Read};
use std::path::Path;

/// The payload baker passes to a hook.
#[derive(Debug, Default, Serialize, Deserialize)]
pub struct HookPayload {
    #[serde(default)]
    pub template_dir: Option<String>,
    #[serde(default)]
    pub output_dir: Option<String>,
    #[serde(default)]
    pub context: Option<serde_json::Value>,
}

/// Template variables read by the hooks.
///
/// Missing variables are empty strings. Any other answers in the context are
/// kept, in order, under `extra`.
#[derive(Debug, Default, Clone, PartialEq, Serialize, Deserialize)]
pub struct TemplateVars {
    #[serde(default, deserialize_with = "as_text")]
    pub project_name: String,
    #[serde(default, deserialize_with = "as_text")]
    pub project_slug: String,
    #[serde(default, deserialize_with = "as_text")]
    pub app_slug: String,
    #[serde(default, deserialize_with = "as_text")]
    pub author_name: String,
    #[serde(default, deserialize_with = "as_text")]
    pub author_email: String,
    #[serde(default, deserialize_with = "as_text")]
    pub description: String,
    #[serde(flatten)]
    pub extra: IndexMap<String, serde_json::Value>,
}

/// Reads a JSON value as text: strings as-is, null as empty, anything else
/// as its JSON representation.
fn as_text<'de, D>(deserializer: D) -> std::result::Result<String, D::Error>
where
    D: serde::Deserializer<'de>,
{
    let value = serde_json::Value::deserialize(deserializer)?;
    Ok(match value {
        serde_json::Value::String(s) => s,
        serde_json::Value::Null => String::new(),
        other => other.to_string(),
    })
}

const PAYLOAD_KEYS: [&str; 3] = ["template_dir", "output_dir", "context"];

fn is_payload(map: &serde_json::Map<String, serde_json::Value>) -> bool {
    let context_shaped = matches!(
        map.get("context"),
        Some(serde_json::Value::Object(_) | serde_json::Value::Null)
    );
    context_shaped && map.keys().all(|key| PAYLOAD_KEYS.contains(&key.as_str()))
}

/// Parses raw hook input.
///
/// JSON is tried first, then YAML. Blank input yields an empty payload. An
/// object is a full payload only if its keys are payload keys and its
/// `context` is an object or null; any other object is taken as the context
/// itself, so a template variable named `context` stays a variable.
///
/// # Errors
/// * `Error::ContextError` if the input is neither JSON nor YAML, or is not
///   an object
pub fn parse_payload(content: &str) -> Result<HookPayload> {
    if content.trim().is_empty() {
        debug!("Hook input is empty");
        return Ok(HookPayload::default());
    }

    let value: serde_json::Value = match serde_json::from_str(content) {
        Ok(v) => v,
        Err(_) => serde_yaml::from_str(content)
            .map_err(|e| Error::ContextError(format!("Invalid hook input format: {e}")))?,
    };

    let payload_shaped = value.as_object().is_some_and(is_payload);
    match value {
        serde_json::Value::Object(_) if payload_shaped => {
            serde_json::from_value(value)
                .map_err(|e| Error::ContextError(format!("Invalid hook payload: {e}")))
        }
        serde_json::Value::Object(_) => {
            Ok(HookPayload { context: Some(value), ..HookPayload::default() })
        }
        serde_json::Value::Null => Ok(HookPayload::default()),
        other => Err(Error::ContextError(format!(
            "Expected an object, found: {other}"
        ))),
    }
}

impl HookPayload {
    /// Extracts the template variables. `None` when no context was supplied.
    ///
    /// # Errors
    /// * `Error::ContextError` if the context is not an object
    pub fn template_vars(&self) -> Result<Option<TemplateVars>> {
        match &self.context {
            None | Some(serde_json::Value::Null) => Ok(None),
            Some(context) => {
                let vars: TemplateVars = serde_json::from_value(context.clone())
                    .map_err(|e| Error::ContextError(format!("Invalid template context: {e}")))?;
                for key in vars.extra.keys() {
                    debug!("Ignoring template variable '{key}'");
                }
                Ok(Some(vars))
            }
        }
    }
}

/// Reads the hook payload from `path`, or from stdin when no path is given.
///
/// An interactive stdin is treated as empty input instead of blocking.
pub fn read_payload(path: Option<&Path>) -> Result<HookPayload> {
    let content = match path {
        Some(path) => {
            debug!("Reading hook input from {}", path.display());
            std::fs::read_to_string(path)?
        }
        None => {
            let mut stdin = std::io::stdin();
            if stdin.is_terminal() {
                debug!("Stdin is a terminal, no hook input");
                String::new()
            } else {
                debug!("Reading hook input from stdin");
                let mut buf = String::new();
                stdin.read_to_string(&mut buf)?;
                buf
            }
        }
    };

    let payload = parse_payload(&content)?;
    if let Some(dir) = &payload.template_dir {
        debug!("Template directory: {dir}");
    }
    if let Some(dir) = &payload.output_dir {
        debug!("Output directory: {dir}");
    }
    Ok(payload)
}
