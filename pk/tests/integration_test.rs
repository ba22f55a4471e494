//! Integration tests for promptkit
//!
//! These tests exercise the public API end to end: catalog file on disk,
//! filling, restructuring, structured prompts and saving.

use std::fs;

use promptkit::placeholder::values;
use promptkit::{Catalog, Config, Fields, Length, PromptError, PromptOptimizer, Values, save_prompt};
use tempfile::TempDir;

const CATALOG: &str = r#"{
  "templates": [
    {
      "nome": "Explicação",
      "categoria": "Técnico",
      "template": "Explique {conceito} com {nível}",
      "exemplo_preenchido": { "conceito": "recursão", "nível": "exemplos simples" }
    },
    {
      "nome": "Brainstorm",
      "categoria": "Criativo",
      "template": "Liste {quantidade} ideias sobre {tema}. Para cada ideia sobre {tema}, dê um título."
    }
  ],
  "dicas_otimização": [
    "Defina o público-alvo.",
    "Peça um formato de saída explícito.",
    "Divida tarefas complexas em etapas."
  ]
}"#;

fn write_catalog(temp: &TempDir) -> std::path::PathBuf {
    let path = temp.path().join("prompt_templates.json");
    fs::write(&path, CATALOG).expect("Failed to write catalog");
    path
}

// =============================================================================
// Catalog + filling
// =============================================================================

#[test]
fn test_catalog_fill_from_disk() {
    let temp = TempDir::new().expect("Failed to create temp dir");
    let catalog = Catalog::load(write_catalog(&temp));

    let template = catalog.get_template(0usize).expect("first template");
    assert_eq!(template.fill_example().unwrap(), "Explique recursão com exemplos simples");

    let brainstorm = catalog.get_template("BRAINSTORM").expect("by name");
    assert_eq!(brainstorm.placeholders(), vec!["quantidade", "tema", "tema"]);

    let out = catalog
        .fill_template("brainstorm", &values([("quantidade", "5"), ("tema", "apps")]))
        .unwrap();
    assert_eq!(out, "Liste 5 ideias sobre apps. Para cada ideia sobre apps, dê um título.");
}

#[test]
fn test_catalog_missing_values_reported_once() {
    let temp = TempDir::new().expect("Failed to create temp dir");
    let catalog = Catalog::load(write_catalog(&temp));

    let err = catalog.fill_template(1usize, &Values::new()).unwrap_err();
    assert_eq!(
        err,
        PromptError::MissingFields {
            fields: vec!["quantidade".to_string(), "tema".to_string()]
        }
    );
}

#[test]
fn test_catalog_lookups() {
    let temp = TempDir::new().expect("Failed to create temp dir");
    let catalog = Catalog::load(write_catalog(&temp));

    assert_eq!(
        catalog.list_templates(),
        vec![("Explicação", "Técnico"), ("Brainstorm", "Criativo")]
    );
    assert_eq!(catalog.get_by_category("Técnico"), catalog.get_by_category("técnico"));
    assert!(catalog.get_template(2usize).is_none());
    assert!(catalog.tips().contains(&catalog.random_tip()));
}

#[test]
fn test_config_points_at_catalog() {
    let temp = TempDir::new().expect("Failed to create temp dir");
    let catalog_path = write_catalog(&temp);
    let config_path = temp.path().join("promptkit.yml");
    fs::write(
        &config_path,
        format!(
            "catalog-path: {}\noutput-path: {}\n",
            catalog_path.display(),
            temp.path().join("saida.json").display()
        ),
    )
    .unwrap();

    let config = Config::load(Some(&config_path)).unwrap();
    assert_eq!(config.catalog().templates().len(), 2);
}

#[test]
fn test_unreadable_catalog_is_empty() {
    let temp = TempDir::new().expect("Failed to create temp dir");
    let path = temp.path().join("prompt_templates.json");
    fs::write(&path, r#"{"templates": 5}"#).unwrap();

    let catalog = Catalog::load(&path);
    assert!(catalog.list_templates().is_empty());
    assert_eq!(catalog.random_tip(), promptkit::NO_TIPS);
}

// =============================================================================
// Optimizer
// =============================================================================

#[test]
fn test_optimize_short_example() {
    let optimizer = PromptOptimizer::new();
    let out = optimizer.optimize("Me dê ideias.");
    assert_eq!(Length::classify("Me dê ideias."), Length::Short);
    assert_eq!(
        out,
        "Me dê ideias.\n\nPor favor, forneça uma resposta detalhada e estruturada. \
         Inclua exemplos relevantes e passos concretos quando aplicável. \
         Considere diferentes perspectivas e contextos."
    );
}

#[test]
fn test_optimize_then_save() {
    let temp = TempDir::new().expect("Failed to create temp dir");
    let path = temp.path().join("prompt_otimizado.json");
    let optimizer = PromptOptimizer::new();

    let prompt = optimizer.optimize("Crie um roteiro de estudos de Rust para iniciantes com foco em projetos práticos");
    assert!(prompt.starts_with("# INSTRUÇÃO\n"));

    save_prompt(&prompt, &path).unwrap();
    let saved = promptkit::persist::load_prompt(&path).unwrap();
    assert_eq!(saved.prompt, prompt);
    assert_eq!(saved.metadata, promptkit::PromptMetadata::default());
}

#[test]
fn test_structured_advanced_with_all_fields() {
    let optimizer = PromptOptimizer::new();
    let fields = Fields {
        instruction: "Crie um plano".to_string(),
        context: "Profissional de TI".to_string(),
        objective: "Emprego júnior".to_string(),
        format: "Plano semanal".to_string(),
        constraints: "Recursos gratuitos".to_string(),
        examples: "Semana 1: Python".to_string(),
    };

    let out = optimizer.structured("avançado", fields).unwrap();
    assert_eq!(
        out,
        "# TAREFA\nCrie um plano\n\n# CONTEXTO\nProfissional de TI\n\n# OBJETIVO\nEmprego júnior\n\n\
         # FORMATO\nPlano semanal\n\n# RESTRIÇÕES\nRecursos gratuitos\n\n# EXEMPLOS\nSemana 1: Python"
    );
}

#[test]
fn test_structured_unknown_level() {
    let optimizer = PromptOptimizer::new();
    let err = optimizer.structured("extremo", Fields::new("x")).unwrap_err();
    assert_eq!(err.to_string(), "Nível inválido. Níveis disponíveis: básico, detalhado, avançado");
}
