//! Error types

use std::path::PathBuf;
use thiserror::Error;

/// Errors produced while generating prompts
///
/// The `Display` text is the message handed back to the caller, so the
/// variants listing valid options spell them out in stored order.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PromptError {
    #[error("Valores faltantes: {}", .fields.join(", "))]
    MissingFields { fields: Vec<String> },

    #[error("Tipo inválido. Tipos disponíveis: {}", .available.join(", "))]
    UnknownType { requested: String, available: Vec<String> },

    #[error("Nível inválido. Níveis disponíveis: {}", .available.join(", "))]
    InvalidLevel { requested: String, available: Vec<String> },

    #[error("Template não encontrado: {key}")]
    TemplateNotFound { key: String },
}

impl PromptError {
    /// Names of the placeholders that had no value, if this is a missing-fields error
    pub fn missing_fields(&self) -> Option<&[String]> {
        match self {
            PromptError::MissingFields { fields } => Some(fields),
            _ => None,
        }
    }
}

/// Errors that can occur while reading a template catalog
#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("Erro ao ler o arquivo {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Erro ao decodificar o arquivo {}: {source}", .path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}
