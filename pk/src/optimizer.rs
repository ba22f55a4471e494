//! Prompt optimizer
//!
//! Bundles the built-in prompt types, persona suggestions, the length
//! heuristic and structured assembly behind one handle.

use rand::seq::IndexedRandom;
use tracing::debug;

use crate::error::PromptError;
use crate::placeholder::{self, Values};
use crate::restructure;
use crate::structure::{self, Fields, Level};

/// Built-in prompt types, in presentation order
pub const PROMPT_TYPES: [(&str, &str); 5] = [
    (
        "criativo",
        "Atue como {persona}. {contexto} Crie {output_type} sobre {tema} com {estilo}.",
    ),
    (
        "técnico",
        "Você é um especialista em {área}. {contexto} Explique {conceito} com {nível_detalhe}.",
    ),
    (
        "análise",
        "Como {persona}, analise {objeto_análise}. {contexto} Forneça {tipo_análise} considerando {aspectos}.",
    ),
    (
        "instrução",
        "Atue como {persona}. {contexto} Forneça instruções detalhadas sobre como {tarefa}, considerando {considerações}.",
    ),
    (
        "pesquisa",
        "Como pesquisador em {área}, {contexto} Investigue {tópico} e forneça {tipo_resultado} focando em {aspectos}.",
    ),
];

pub const PERSONAS: [&str; 9] = [
    "um professor universitário",
    "um especialista renomado",
    "um consultor experiente",
    "um pesquisador premiado",
    "um mentor dedicado",
    "um analista crítico",
    "um criativo inspirado",
    "um estrategista inovador",
    "um comunicador habilidoso",
];

#[derive(Debug, Clone, Default)]
pub struct PromptOptimizer;

impl PromptOptimizer {
    pub fn new() -> Self {
        Self
    }

    /// Names of the built-in prompt types
    pub fn types(&self) -> Vec<&'static str> {
        PROMPT_TYPES.iter().map(|(name, _)| *name).collect()
    }

    /// Template for a built-in prompt type
    pub fn template(&self, kind: &str) -> Option<&'static str> {
        PROMPT_TYPES
            .iter()
            .find(|(name, _)| *name == kind)
            .map(|(_, template)| *template)
    }

    /// Fill the template for `kind`
    pub fn generate(&self, kind: &str, values: &Values) -> Result<String, PromptError> {
        debug!(%kind, "PromptOptimizer::generate: called");
        let template = self.template(kind).ok_or_else(|| PromptError::UnknownType {
            requested: kind.to_string(),
            available: self.types().into_iter().map(String::from).collect(),
        })?;
        placeholder::fill(template, values)
    }

    /// A randomly chosen persona
    pub fn suggest_persona(&self) -> &'static str {
        let mut rng = rand::rng();
        PERSONAS.choose(&mut rng).copied().unwrap_or(PERSONAS[0])
    }

    /// Restructure a free-form prompt by length
    pub fn optimize(&self, prompt: &str) -> String {
        restructure::optimize(prompt)
    }

    /// Build a structured prompt for the named level
    pub fn structured(&self, level: &str, fields: Fields) -> Result<String, PromptError> {
        structure::assemble_named(level, fields)
    }

    /// Build a structured prompt for an already-parsed level
    pub fn structured_at(&self, level: Level, fields: Fields) -> String {
        structure::assemble(level, fields)
    }
}
