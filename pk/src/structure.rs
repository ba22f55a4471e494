//! Structured prompt assembly
//!
//! Three fixed layouts of increasing detail. Sections left empty by the
//! caller are filled with canned text, except at the basic level where only
//! the instruction is emitted.

use std::fmt;
use std::str::FromStr;

use tracing::{debug, error};

use crate::error::PromptError;
use crate::placeholder::{self, Values};

const BASIC_LAYOUT: &str = "{instrução}";

const DETAILED_LAYOUT: &str = "{instrução}\n\nContexto: {contexto}\nObjetivo: {objetivo}\nFormato desejado: {formato}";

const ADVANCED_LAYOUT: &str = "# TAREFA\n{instrução}\n\n# CONTEXTO\n{contexto}\n\n# OBJETIVO\n{objetivo}\n\n\
    # FORMATO\n{formato}\n\n# RESTRIÇÕES\n{restrições}\n\n# EXEMPLOS\n{exemplos}";

pub const DEFAULT_CONTEXT: &str = "Considere o contexto atual e as melhores práticas.";
pub const DEFAULT_OBJECTIVE: &str = "Fornecer informação clara, precisa e útil.";
pub const DEFAULT_FORMAT: &str = "Texto estruturado com parágrafos lógicos e pontos principais destacados.";
pub const DEFAULT_CONSTRAINTS: &str = "Mantenha a resposta concisa e focada no objetivo.";
pub const DEFAULT_EXAMPLES: &str = "Exemplo 1: [Breve exemplo relacionado]";

/// How many sections a structured prompt carries
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Level {
    /// Instruction only
    #[default]
    Basic,
    /// Instruction plus context, objective and format lines
    Detailed,
    /// Every section under its own heading
    Advanced,
}

impl Level {
    pub const ALL: [Level; 3] = [Level::Basic, Level::Detailed, Level::Advanced];

    pub fn name(&self) -> &'static str {
        match self {
            Self::Basic => "básico",
            Self::Detailed => "detalhado",
            Self::Advanced => "avançado",
        }
    }

    fn layout(&self) -> &'static str {
        match self {
            Self::Basic => BASIC_LAYOUT,
            Self::Detailed => DETAILED_LAYOUT,
            Self::Advanced => ADVANCED_LAYOUT,
        }
    }
}

impl fmt::Display for Level {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

impl FromStr for Level {
    type Err = PromptError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim().to_lowercase();
        Self::ALL
            .into_iter()
            .find(|level| level.name() == wanted)
            .ok_or_else(|| PromptError::InvalidLevel {
                requested: s.to_string(),
                available: Self::ALL.iter().map(|l| l.name().to_string()).collect(),
            })
    }
}

/// Section contents for a structured prompt; empty strings count as absent
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Fields {
    pub instruction: String,
    pub context: String,
    pub objective: String,
    pub format: String,
    pub constraints: String,
    pub examples: String,
}

impl Fields {
    pub fn new(instruction: impl Into<String>) -> Self {
        Self {
            instruction: instruction.into(),
            ..Default::default()
        }
    }

    /// Replace empty sections with canned text appropriate for `level`
    fn with_defaults(mut self, level: Level) -> Self {
        fn default_if_empty(field: &mut String, text: &str) {
            if field.is_empty() {
                *field = text.to_string();
            }
        }

        if level != Level::Basic {
            default_if_empty(&mut self.context, DEFAULT_CONTEXT);
            default_if_empty(&mut self.objective, DEFAULT_OBJECTIVE);
            default_if_empty(&mut self.format, DEFAULT_FORMAT);
        }
        if level == Level::Advanced {
            default_if_empty(&mut self.constraints, DEFAULT_CONSTRAINTS);
            default_if_empty(&mut self.examples, DEFAULT_EXAMPLES);
        }
        self
    }

    fn into_values(self) -> Values {
        Values::from([
            ("instrução".to_string(), self.instruction),
            ("contexto".to_string(), self.context),
            ("objetivo".to_string(), self.objective),
            ("formato".to_string(), self.format),
            ("restrições".to_string(), self.constraints),
            ("exemplos".to_string(), self.examples),
        ])
    }
}

/// Assemble a prompt with the layout for `level`
pub fn assemble(level: Level, fields: Fields) -> String {
    debug!(%level, "assemble: called");
    let values = fields.with_defaults(level).into_values();
    // every layout placeholder is a `Fields` key; see test_every_layout_fills
    placeholder::fill(level.layout(), &values).unwrap_or_else(|e| {
        error!(%level, "assemble: layout has unmapped placeholders: {}", e);
        String::new()
    })
}

/// Parse `level` by name, then [`assemble`]
pub fn assemble_named(level: &str, fields: Fields) -> Result<String, PromptError> {
    let level: Level = level.parse()?;
    Ok(assemble(level, fields))
}
