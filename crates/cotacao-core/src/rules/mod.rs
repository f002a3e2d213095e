pub mod builtin;
pub mod schema;

use crate::classify::engine;
use crate::error::CotacaoError;
use crate::model::Category;
use regex::{Regex, RegexBuilder};
use schema::{VocabularyDef, VocabularyKind};
use std::collections::HashMap;
use std::path::Path;

/// Load a vocabulary from a JSON file.
pub fn load_vocabulary(path: &Path) -> Result<VocabularyDef, CotacaoError> {
    let content = std::fs::read_to_string(path).map_err(|e| CotacaoError::VocabularyLoad {
        path: path.to_path_buf(),
        reason: e.to_string(),
    })?;
    parse_vocabulary(&content, path)
}

/// Parse a vocabulary from a JSON string.
pub fn parse_vocabulary(json: &str, source: &Path) -> Result<VocabularyDef, CotacaoError> {
    let vocabulary: VocabularyDef =
        serde_json::from_str(json).map_err(|e| CotacaoError::VocabularyLoad {
            path: source.to_path_buf(),
            reason: e.to_string(),
        })?;
    validate_vocabulary(&vocabulary)?;
    Ok(vocabulary)
}

/// Parse a vocabulary from a JSON string (no file path context).
pub fn parse_vocabulary_str(json: &str) -> Result<VocabularyDef, CotacaoError> {
    let vocabulary: VocabularyDef = serde_json::from_str(json).map_err(CotacaoError::Json)?;
    validate_vocabulary(&vocabulary)?;
    Ok(vocabulary)
}

/// Validate that a vocabulary is well-formed.
pub fn validate_vocabulary(vocabulary: &VocabularyDef) -> Result<(), CotacaoError> {
    if vocabulary.categories.is_empty() {
        return Err(CotacaoError::VocabularyInvalid(
            "categories must not be empty".into(),
        ));
    }

    for category in &vocabulary.categories {
        if !vocabulary.kind.accepts(category) {
            return Err(CotacaoError::VocabularyInvalid(format!(
                "category '{}' is not a {} (expected one of {})",
                category,
                vocabulary.kind,
                vocabulary.kind.category_names().join(", ")
            )));
        }
    }

    for (key, patterns) in &vocabulary.patterns {
        if *key != key.to_lowercase() {
            return Err(CotacaoError::VocabularyInvalid(format!(
                "pattern key '{}' must be lower-case",
                key
            )));
        }
        if !declares(vocabulary, key) {
            return Err(CotacaoError::VocabularyInvalid(format!(
                "patterns reference unknown category '{}'",
                key
            )));
        }
        if patterns.is_empty() {
            return Err(CotacaoError::VocabularyInvalid(format!(
                "category '{}' has an empty pattern list",
                key
            )));
        }
        for pattern in patterns {
            compile_pattern(pattern)?;
        }
    }

    for shortcut in &vocabulary.shortcuts {
        if !declares(vocabulary, &shortcut.category) {
            return Err(CotacaoError::VocabularyInvalid(format!(
                "shortcut '{}' references unknown category '{}'",
                shortcut.pattern, shortcut.category
            )));
        }
        compile_pattern(&shortcut.pattern)?;
    }

    Ok(())
}

fn declares(vocabulary: &VocabularyDef, category: &str) -> bool {
    vocabulary
        .categories
        .iter()
        .any(|c| c.eq_ignore_ascii_case(category))
}

fn compile_pattern(pattern: &str) -> Result<Regex, CotacaoError> {
    RegexBuilder::new(pattern)
        .case_insensitive(true)
        .build()
        .map_err(|e| CotacaoError::VocabularyInvalid(format!("pattern '{}': {}", pattern, e)))
}

/// A validated vocabulary with its patterns compiled.
#[derive(Debug, Clone)]
pub struct CompiledVocabulary {
    def: VocabularyDef,
    patterns: HashMap<String, Vec<Regex>>,
    shortcuts: Vec<(Regex, String)>,
}

impl CompiledVocabulary {
    pub fn compile(def: VocabularyDef) -> Result<Self, CotacaoError> {
        validate_vocabulary(&def)?;

        let patterns = def
            .patterns
            .iter()
            .map(|(key, pats)| {
                let compiled = pats
                    .iter()
                    .map(|p| compile_pattern(p))
                    .collect::<Result<Vec<_>, _>>()?;
                Ok((key.clone(), compiled))
            })
            .collect::<Result<HashMap<_, _>, CotacaoError>>()?;

        let shortcuts = def
            .shortcuts
            .iter()
            .map(|s| Ok((compile_pattern(&s.pattern)?, s.category.clone())))
            .collect::<Result<Vec<_>, CotacaoError>>()?;

        Ok(CompiledVocabulary {
            def,
            patterns,
            shortcuts,
        })
    }

    pub fn def(&self) -> &VocabularyDef {
        &self.def
    }

    pub fn kind(&self) -> VocabularyKind {
        self.def.kind
    }

    /// Category name for `text`: first matching shortcut, else the scored
    /// classifier.
    pub fn classify(&self, text: &str) -> &str {
        if let Some((_, category)) = self.shortcuts.iter().find(|(re, _)| re.is_match(text)) {
            return category;
        }
        // validation guarantees at least one category
        engine::classify(text, &self.def.categories, &self.patterns).unwrap_or_default()
    }

    /// Classify into the typed enumeration, defaulting to its first member.
    pub fn resolve<C: Category>(&self, text: &str) -> C {
        C::from_category(self.classify(text)).unwrap_or(C::ALL[0])
    }
}

/// The vocabularies the plan assembler classifies with, one per kind.
#[derive(Debug, Clone)]
pub struct VocabularySet {
    pub plan_type: CompiledVocabulary,
    pub coverage_type: CompiledVocabulary,
    pub accommodation: CompiledVocabulary,
}

impl VocabularySet {
    /// The built-in Portuguese vocabularies.
    pub fn builtin() -> Self {
        builtin::builtin_set().clone()
    }

    /// Replace the vocabulary of the same kind as `def`.
    pub fn with_override(mut self, def: VocabularyDef) -> Result<Self, CotacaoError> {
        let compiled = CompiledVocabulary::compile(def)?;
        tracing::debug!(kind = %compiled.kind(), name = %compiled.def().name, "vocabulary override");
        match compiled.kind() {
            VocabularyKind::PlanType => self.plan_type = compiled,
            VocabularyKind::CoverageType => self.coverage_type = compiled,
            VocabularyKind::Accommodation => self.accommodation = compiled,
        }
        Ok(self)
    }
}

impl Default for VocabularySet {
    fn default() -> Self {
        Self::builtin()
    }
}
