//! Template catalog
//!
//! A catalog is a JSON document holding named templates and a flat list of
//! optimization tips:
//!
//! ```text
//! {
//!   "templates": [
//!     { "nome": "...", "categoria": "...", "template": "...", "exemplo_preenchido": { ... } }
//!   ],
//!   "dicas_otimização": [ "..." ]
//! }
//! ```
//!
//! The catalog is read once and never mutated afterwards.

use std::fmt;
use std::fs;
use std::path::Path;

use rand::seq::IndexedRandom;
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;
use tracing::{debug, info, warn};

use crate::error::{CatalogError, PromptError};
use crate::placeholder::{self, Values};

/// Returned by [`Catalog::random_tip`] when the catalog has no tips
pub const NO_TIPS: &str = "Não há dicas disponíveis.";

/// A named prompt template
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Template {
    /// Display name, matched case-insensitively on lookup
    #[serde(rename = "nome")]
    pub name: String,
    /// Category tag
    #[serde(rename = "categoria")]
    pub category: String,
    /// Format string with `{placeholder}` tokens
    pub template: String,
    /// Sample values covering the template's placeholders
    #[serde(rename = "exemplo_preenchido", default, deserialize_with = "lenient_values")]
    pub example: Values,
}

/// Read `exemplo_preenchido` without rejecting the whole catalog
///
/// Strings are kept as-is, `null` entries are dropped and other values are
/// rendered as JSON text. Anything but an object yields no example values.
fn lenient_values<'de, D>(deserializer: D) -> Result<Values, D::Error>
where
    D: Deserializer<'de>,
{
    let map = match Value::deserialize(deserializer)? {
        Value::Object(map) => map,
        Value::Null => return Ok(Values::new()),
        other => {
            debug!(%other, "lenient_values: example is not an object, ignoring");
            return Ok(Values::new());
        }
    };
    Ok(map
        .into_iter()
        .filter_map(|(name, value)| match value {
            Value::Null => None,
            Value::String(text) => Some((name, text)),
            other => Some((name, other.to_string())),
        })
        .collect())
}

impl Template {
    pub fn new(name: impl Into<String>, category: impl Into<String>, template: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            category: category.into(),
            template: template.into(),
            example: Values::new(),
        }
    }

    pub fn with_example(mut self, example: Values) -> Self {
        self.example = example;
        self
    }

    /// Placeholder names in order of appearance
    pub fn placeholders(&self) -> Vec<String> {
        placeholder::placeholders(&self.template)
    }

    /// Fill this template, failing with the missing names if any value is absent
    pub fn fill(&self, values: &Values) -> Result<String, PromptError> {
        debug!(name = %self.name, "Template::fill: called");
        placeholder::fill(&self.template, values)
    }

    /// Fill this template with its own example values
    pub fn fill_example(&self) -> Result<String, PromptError> {
        self.fill(&self.example)
    }
}

/// Lookup key for [`Catalog::get_template`]
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TemplateKey {
    /// Zero-based position in the catalog
    Index(usize),
    /// Case-insensitive template name
    Name(String),
}

impl From<usize> for TemplateKey {
    fn from(index: usize) -> Self {
        Self::Index(index)
    }
}

impl From<&str> for TemplateKey {
    fn from(name: &str) -> Self {
        Self::Name(name.to_string())
    }
}

impl From<String> for TemplateKey {
    fn from(name: String) -> Self {
        Self::Name(name)
    }
}

impl fmt::Display for TemplateKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Index(i) => write!(f, "#{}", i),
            Self::Name(name) => write!(f, "{}", name),
        }
    }
}

/// Templates and optimization tips loaded from a catalog file
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Catalog {
    #[serde(default)]
    templates: Vec<Template>,
    #[serde(rename = "dicas_otimização", default)]
    tips: Vec<String>,
}

impl Catalog {
    pub fn new(templates: Vec<Template>, tips: Vec<String>) -> Self {
        Self { templates, tips }
    }

    /// Read and parse a catalog file
    pub fn try_load(path: impl AsRef<Path>) -> Result<Self, CatalogError> {
        let path = path.as_ref();
        debug!(?path, "Catalog::try_load: called");
        let content = fs::read_to_string(path).map_err(|source| CatalogError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let catalog = Self::parse(&content).map_err(|source| CatalogError::Parse {
            path: path.to_path_buf(),
            source,
        })?;
        info!(
            templates = catalog.templates.len(),
            tips = catalog.tips.len(),
            "Loaded catalog from: {}",
            path.display()
        );
        Ok(catalog)
    }

    /// Read a catalog file, falling back to an empty catalog on any failure
    pub fn load(path: impl AsRef<Path>) -> Self {
        match Self::try_load(path) {
            Ok(catalog) => catalog,
            Err(e) => {
                warn!("{}", e);
                Self::default()
            }
        }
    }

    /// Parse catalog JSON
    pub fn parse(content: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(content)
    }

    pub fn templates(&self) -> &[Template] {
        &self.templates
    }

    pub fn tips(&self) -> &[String] {
        &self.tips
    }

    pub fn is_empty(&self) -> bool {
        self.templates.is_empty() && self.tips.is_empty()
    }

    /// `(name, category)` for every template, in stored order
    pub fn list_templates(&self) -> Vec<(&str, &str)> {
        self.templates
            .iter()
            .map(|t| (t.name.as_str(), t.category.as_str()))
            .collect()
    }

    /// Look a template up by position or by case-insensitive name
    pub fn get_template(&self, key: impl Into<TemplateKey>) -> Option<&Template> {
        let key = key.into();
        debug!(%key, "Catalog::get_template: called");
        match key {
            TemplateKey::Index(i) => self.templates.get(i),
            TemplateKey::Name(name) => {
                let wanted = name.to_lowercase();
                self.templates.iter().find(|t| t.name.to_lowercase() == wanted)
            }
        }
    }

    /// All templates whose category matches, ignoring case
    pub fn get_by_category(&self, category: &str) -> Vec<&Template> {
        let wanted = category.to_lowercase();
        self.templates
            .iter()
            .filter(|t| t.category.to_lowercase() == wanted)
            .collect()
    }

    /// A uniformly chosen tip, or [`NO_TIPS`] when there are none
    pub fn random_tip(&self) -> String {
        let mut rng = rand::rng();
        self.tips
            .choose(&mut rng)
            .cloned()
            .unwrap_or_else(|| NO_TIPS.to_string())
    }

    /// Look a template up and fill it
    pub fn fill_template(&self, key: impl Into<TemplateKey>, values: &Values) -> Result<String, PromptError> {
        let key = key.into();
        let template = self
            .get_template(key.clone())
            .ok_or_else(|| PromptError::TemplateNotFound { key: key.to_string() })?;
        template.fill(values)
    }
}
