use std::sync::OnceLock;

use regex::{Captures, Regex};
use thiserror::Error;

/// Failure while expanding `{{ env.VAR }}` placeholders
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ExpandError {
    /// Variable is unset and no default was given
    #[error("environment variable not found: `{0}`")]
    MissingVar(String),

    /// Placeholder is not scoped with `env.`
    #[error("only variables scoped with 'env.' are supported: `{0}`")]
    UnsupportedScope(String),
}

fn placeholder() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    // Group 1: scoped key, group 2: optional default("...") value
    RE.get_or_init(|| {
        Regex::new(r#"\{\{\s*([a-zA-Z0-9_.]+)\s*(?:\|\s*default\("([^"]*)"\))?\s*\}\}"#)
            .expect("placeholder pattern is valid")
    })
}

/// Expand `{{ env.VAR }}` and `{{ env.VAR | default("x") }}` in raw TOML
///
/// Comment lines are copied through untouched so commented-out settings
/// never require their variables to be set.
pub fn expand_env(input: &str) -> Result<String, ExpandError> {
    let lines = input
        .split('\n')
        .map(|line| {
            if line.trim_start().starts_with('#') {
                Ok(line.to_owned())
            } else {
                expand_line(line)
            }
        })
        .collect::<Result<Vec<_>, _>>()?;

    Ok(lines.join("\n"))
}

fn expand_line(line: &str) -> Result<String, ExpandError> {
    let mut output = String::with_capacity(line.len());
    let mut last_end = 0;

    for captures in placeholder().captures_iter(line) {
        let Some(whole) = captures.get(0) else { continue };
        output.push_str(&line[last_end..whole.start()]);
        output.push_str(&resolve(&captures)?);
        last_end = whole.end();
    }

    output.push_str(&line[last_end..]);
    Ok(output)
}

fn resolve(captures: &Captures<'_>) -> Result<String, ExpandError> {
    let key = captures.get(1).map_or("", |m| m.as_str());
    let default = captures.get(2).map(|m| m.as_str());

    let var_name = match key.split_once('.') {
        Some(("env", name)) if !name.is_empty() && !name.contains('.') => name,
        _ => return Err(ExpandError::UnsupportedScope(key.to_owned())),
    };

    match (std::env::var(var_name), default) {
        (Ok(value), _) => Ok(value),
        (Err(_), Some(fallback)) => Ok(fallback.to_owned()),
        (Err(_), None) => Err(ExpandError::MissingVar(var_name.to_owned())),
    }
}
