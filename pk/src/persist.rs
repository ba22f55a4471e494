//! Saving generated prompts

use std::fs;
use std::path::Path;

use eyre::{Context, Result};
use serde::{Deserialize, Serialize};
use tracing::{debug, info};

/// Metadata written alongside every saved prompt
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PromptMetadata {
    #[serde(rename = "versão")]
    pub version: String,
    pub timestamp: String,
    #[serde(rename = "tipo")]
    pub kind: String,
}

impl Default for PromptMetadata {
    fn default() -> Self {
        Self {
            version: "1.0".to_string(),
            timestamp: "gerado automaticamente".to_string(),
            kind: "prompt otimizado".to_string(),
        }
    }
}

/// On-disk form of a saved prompt
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SavedPrompt {
    pub prompt: String,
    pub metadata: PromptMetadata,
}

impl SavedPrompt {
    pub fn new(prompt: impl Into<String>) -> Self {
        Self {
            prompt: prompt.into(),
            metadata: PromptMetadata::default(),
        }
    }
}

/// Write `prompt` to `path` as pretty JSON, replacing any existing file
pub fn save_prompt(prompt: &str, path: impl AsRef<Path>) -> Result<()> {
    let path = path.as_ref();
    debug!(?path, prompt_len = prompt.len(), "save_prompt: called");
    let content = serde_json::to_string_pretty(&SavedPrompt::new(prompt))?;
    fs::write(path, content).context(format!("Failed to write prompt to {}", path.display()))?;
    info!("Prompt salvo com sucesso em {}", path.display());
    Ok(())
}

/// Read a prompt previously written by [`save_prompt`]
pub fn load_prompt(path: impl AsRef<Path>) -> Result<SavedPrompt> {
    let path = path.as_ref();
    let content = fs::read_to_string(path).context(format!("Failed to read prompt from {}", path.display()))?;
    serde_json::from_str(&content).context(format!("Failed to parse prompt file {}", path.display()))
}
