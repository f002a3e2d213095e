use cotacao_core::rules::builtin;
use std::path::Path;

pub fn list() -> Result<(), cotacao_core::error::CotacaoError> {
    println!("Available predefined vocabularies:\n");
    for name in builtin::PRESETS {
        let vocab = builtin::load_preset(name)?;
        println!(
            "  {:<14} {} (v{}) [{}]",
            name, vocab.name, vocab.version, vocab.kind
        );
        if let Some(ref desc) = vocab.description {
            println!("                 {}", desc);
        }
        println!();
    }
    Ok(())
}

pub fn show(preset: &str) -> Result<(), cotacao_core::error::CotacaoError> {
    let vocab = builtin::load_preset(preset)?;

    println!("{} (version {})\n", vocab.name, vocab.version);

    if let Some(ref desc) = vocab.description {
        println!("{}\n", desc);
    }

    println!(
        "Classifies text into {} categories. The first one is the default\n\
         when no pattern matches, and wins ties:\n",
        vocab.categories.len()
    );
    for cat in &vocab.categories {
        println!("  {}", cat);
    }
    println!();

    if !vocab.shortcuts.is_empty() {
        println!("Shortcuts (checked in order, first match decides):");
        for s in &vocab.shortcuts {
            println!("  {:<30} -> {}", s.pattern, s.category);
        }
        println!();
    }

    println!("Patterns (match counts are summed per category):");
    for cat in &vocab.categories {
        let key = cat.to_lowercase();
        match vocab.patterns.get(&key) {
            Some(patterns) => println!("  {:<12} {}", cat, patterns.join("  ")),
            None => println!("  {:<12} {} (category name)", cat, key),
        }
    }
    println!();

    Ok(())
}

pub fn schema() -> Result<(), cotacao_core::error::CotacaoError> {
    print!(
        r#"JSON Vocabulary Schema
======================

A vocabulary file maps free text onto one plan attribute. Passing it with
`cotacao parse --vocab FILE` replaces the built-in vocabulary of the same
kind.

Top-level fields:
  name          (string, required)  Human-readable name
  description   (string, optional)  What this vocabulary is for
  version       (string, required)  Version identifier (e.g., "1.0")
  kind          (string, required)  "plan_type", "coverage_type" or
                                    "accommodation"
  categories    (array, required)   Ordered category names. Each must belong
                                    to the kind:
                                      plan_type:     EMPRESARIAL ADESAO INDIVIDUAL
                                      coverage_type: AMBULATORIAL OBSTETRICA HOSPITALAR
                                      accommodation: ENFERMARIA APARTAMENTO NENHUMA
                                    The first category is returned when no
                                    pattern matches, and wins ties.
  patterns      (object, optional)  Map of lower-case category name -> list of
                                    regular expressions (case-insensitive).
                                    The category with the most matches wins.
                                    A category without patterns is matched by
                                    its own name.
  shortcuts     (array, optional)   Patterns checked in order before scoring;
                                    the first one found decides the category.
                                    Each entry: {{ "pattern": ..., "category": ... }}

Example:
{{
  "name": "Acomodação (hospital X)",
  "version": "1.0",
  "kind": "accommodation",
  "categories": ["ENFERMARIA", "APARTAMENTO", "NENHUMA"],
  "patterns": {{
    "enfermaria": ["enfermaria", "quarto\\s*coletivo"],
    "apartamento": ["apartamento", "su[ií]te"]
  }},
  "shortcuts": [
    {{ "pattern": "sem\\s*interna[cç][ãa]o", "category": "NENHUMA" }}
  ]
}}

Backslashes in patterns must be doubled inside JSON strings.
The combined segmentation codes (A+H, A+H+OB) are always checked before the
coverage_type vocabulary.
"#
    );
    Ok(())
}

pub fn validate(file: &Path) -> Result<(), cotacao_core::error::CotacaoError> {
    let vocab = cotacao_core::rules::load_vocabulary(file)?;

    println!(
        "Vocabulary '{}' (v{}) is valid.",
        vocab.name, vocab.version
    );
    println!("  Kind: {}", vocab.kind);
    println!("  Categories: {}", vocab.categories.join(", "));
    println!("  Shortcuts: {}", vocab.shortcuts.len());

    // Check for potential issues (warnings, not errors)
    let warnings: Vec<String> = vocab
        .categories
        .iter()
        .filter(|cat| !vocab.patterns.contains_key(&cat.to_lowercase()))
        .map(|cat| {
            format!(
                "category '{}' has no patterns and is matched by its name only",
                cat
            )
        })
        .collect();

    if !warnings.is_empty() {
        println!("\nWarnings:");
        for w in &warnings {
            println!("  - {}", w);
        }
    }

    Ok(())
}
