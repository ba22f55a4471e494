//! promptkit - prompt templating and heuristic restructuring
//!
//! Fills `{placeholder}` templates from explicit value maps and rewrites
//! free-form prompts into fixed layouts chosen by word count.
//!
//! # Modules
//!
//! - [`placeholder`] - Placeholder extraction and all-or-nothing filling
//! - [`catalog`] - JSON template catalog with tips
//! - [`restructure`] - Word-count heuristic (short/medium/long)
//! - [`structure`] - Structured prompts at three levels of detail
//! - [`optimizer`] - Built-in prompt types and persona suggestions
//! - [`persist`] - Saving generated prompts as JSON
//! - [`config`] - Configuration types and loading
//!
//! # Example
//!
//! ```
//! use promptkit::{Catalog, Template, placeholder};
//!
//! # fn main() -> Result<(), promptkit::PromptError> {
//! let catalog = Catalog::new(
//!     vec![Template::new("Explicação", "Técnico", "Explique {conceito} com {nível}")],
//!     vec!["Seja específico.".to_string()],
//! );
//! let values = placeholder::values([("conceito", "recursão"), ("nível", "exemplos simples")]);
//! let prompt = catalog.fill_template(0usize, &values)?;
//! assert_eq!(prompt, "Explique recursão com exemplos simples");
//!
//! let optimized = promptkit::restructure::optimize(&prompt);
//! assert!(optimized.starts_with("Explique recursão com exemplos simples\n\n"));
//! # Ok(())
//! # }
//! ```

pub mod catalog;
pub mod config;
pub mod error;
pub mod optimizer;
pub mod persist;
pub mod placeholder;
pub mod restructure;
pub mod structure;

pub use catalog::{Catalog, NO_TIPS, Template, TemplateKey};
pub use config::Config;
pub use error::{CatalogError, PromptError};
pub use optimizer::PromptOptimizer;
pub use persist::{PromptMetadata, SavedPrompt, save_prompt};
pub use placeholder::{Values, fill};
pub use restructure::Length;
pub use structure::{Fields, Level};

/// Default catalog file name
pub const DEFAULT_CATALOG_FILE: &str = "prompt_templates.json";

/// Default file name for saved prompts
pub const DEFAULT_OUTPUT_FILE: &str = "prompt_otimizado.json";
