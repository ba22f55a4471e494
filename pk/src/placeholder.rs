//! Placeholder extraction and substitution
//!
//! Placeholders are written `{name}`. Filling is all-or-nothing: every name
//! found in the template must have a value, otherwise nothing is substituted
//! and the missing names are returned in order of first appearance.

use std::collections::{HashMap, HashSet};
use std::sync::LazyLock;

use regex::{Captures, Regex};
use tracing::debug;

use crate::error::PromptError;

/// Mapping from placeholder name to the literal text substituted for it
pub type Values = HashMap<String, String>;

static PLACEHOLDER_PATTERN: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\{([^}]+)\}").unwrap());

/// Every placeholder name in `template`, in order, repeats included
pub fn placeholders(template: &str) -> Vec<String> {
    PLACEHOLDER_PATTERN
        .captures_iter(template)
        .map(|caps| caps[1].to_string())
        .collect()
}

/// Placeholder names without a value, deduplicated by first occurrence
pub fn missing(template: &str, values: &Values) -> Vec<String> {
    let mut seen = HashSet::new();
    placeholders(template)
        .into_iter()
        .filter(|name| !values.contains_key(name))
        .filter(|name| seen.insert(name.clone()))
        .collect()
}

/// Substitute every placeholder in `template` with its value
///
/// Substitution is a single pass over the template, so a value containing
/// `{...}` is copied through untouched. Keys in `values` that the template
/// never mentions are ignored.
pub fn fill(template: &str, values: &Values) -> Result<String, PromptError> {
    debug!(template_len = template.len(), value_count = values.len(), "fill: called");
    let fields = missing(template, values);
    if !fields.is_empty() {
        debug!(?fields, "fill: missing values");
        return Err(PromptError::MissingFields { fields });
    }

    let filled = PLACEHOLDER_PATTERN.replace_all(template, |caps: &Captures| {
        // presence checked above
        values.get(&caps[1]).cloned().unwrap_or_default()
    });
    Ok(filled.into_owned())
}

/// Build a [`Values`] map from borrowed pairs
pub fn values<'a, I>(pairs: I) -> Values
where
    I: IntoIterator<Item = (&'a str, &'a str)>,
{
    pairs
        .into_iter()
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .collect()
}
