//! Word-count heuristic for restructuring free-form prompts
//!
//! Short prompts get an explanatory suffix, medium prompts get a format
//! checklist, long prompts get a quality checklist wrapped around the
//! original text.

use tracing::debug;

/// Prompts with fewer words than this are [`Length::Short`]
pub const SHORT_LIMIT: usize = 10;

/// Prompts with fewer words than this (and at least [`SHORT_LIMIT`]) are [`Length::Medium`]
pub const MEDIUM_LIMIT: usize = 30;

const EXPANSION_SUFFIX: &str = "Por favor, forneça uma resposta detalhada e estruturada. \
    Inclua exemplos relevantes e passos concretos quando aplicável. \
    Considere diferentes perspectivas e contextos.";

const DESIRED_FORMAT: &str = "# FORMATO DESEJADO\n\
    - Comece com uma introdução concisa\n\
    - Organize a informação em seções claras\n\
    - Utilize bullets para pontos importantes\n\
    - Conclua com um resumo aplicável\n\
    - Use linguagem precisa e exemplos quando necessário";

const FULL_CONTEXT: &str = "Entendendo o contexto completo fornecido";

const QUALITY_PARAMETERS: &str = "# PARÂMETROS DE QUALIDADE\n\
    1. Precisão: Forneça informações corretas e verificáveis\n\
    2. Relevância: Mantenha o foco no objetivo principal\n\
    3. Estrutura: Organize a resposta de forma lógica\n\
    4. Profundidade: Equilibre detalhes suficientes sem prolixidade\n\
    5. Clareza: Use linguagem simples e direta";

/// Length bucket a prompt falls into
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Length {
    /// Under 10 words
    Short,
    /// 10 to 29 words
    Medium,
    /// 30 words or more
    Long,
}

impl Length {
    pub fn classify(text: &str) -> Self {
        let words = word_count(text);
        let length = if words < SHORT_LIMIT {
            Self::Short
        } else if words < MEDIUM_LIMIT {
            Self::Medium
        } else {
            Self::Long
        };
        debug!(words, ?length, "Length::classify");
        length
    }
}

pub fn word_count(text: &str) -> usize {
    text.split_whitespace().count()
}

/// Restructure a prompt according to its length bucket
pub fn optimize(prompt: &str) -> String {
    match Length::classify(prompt) {
        Length::Short => expand(prompt),
        Length::Medium => structure(prompt),
        Length::Long => refine(prompt),
    }
}

fn expand(prompt: &str) -> String {
    format!("{}\n\n{}", prompt, EXPANSION_SUFFIX)
}

fn structure(prompt: &str) -> String {
    format!("# INSTRUÇÃO\n{}\n\n{}", prompt, DESIRED_FORMAT)
}

fn refine(prompt: &str) -> String {
    let objective = prompt.split('\n').next().unwrap_or(prompt);
    format!(
        "# OBJETIVO PRINCIPAL\n{}\n\n# CONTEXTO\n{}\n\n{}\n\n# PROMPT ORIGINAL\n{}",
        objective, FULL_CONTEXT, QUALITY_PARAMETERS, prompt
    )
}
