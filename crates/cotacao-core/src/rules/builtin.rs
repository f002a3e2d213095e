use crate::error::CotacaoError;
use crate::rules::schema::VocabularyDef;
use crate::rules::{parse_vocabulary_str, CompiledVocabulary, VocabularySet};
use std::sync::LazyLock;

const PLAN_TYPE_JSON: &str = include_str!("../../../../rules/plan-type.json");
const COVERAGE_TYPE_JSON: &str = include_str!("../../../../rules/coverage-type.json");
const ACCOMMODATION_JSON: &str = include_str!("../../../../rules/accommodation.json");

/// Available predefined vocabularies.
pub const PRESETS: &[&str] = &["plan-type", "coverage-type", "accommodation"];

static BUILTIN_SET: LazyLock<VocabularySet> = LazyLock::new(|| {
    let compile = |name: &str| {
        load_preset(name)
            .and_then(CompiledVocabulary::compile)
            .expect("embedded vocabularies are valid")
    };
    VocabularySet {
        plan_type: compile("plan-type"),
        coverage_type: compile("coverage-type"),
        accommodation: compile("accommodation"),
    }
});

/// The compiled built-in vocabulary set.
pub fn builtin_set() -> &'static VocabularySet {
    &BUILTIN_SET
}

/// Load a predefined vocabulary by name.
pub fn load_preset(name: &str) -> Result<VocabularyDef, CotacaoError> {
    let json = match name {
        "plan-type" => PLAN_TYPE_JSON,
        "coverage-type" => COVERAGE_TYPE_JSON,
        "accommodation" => ACCOMMODATION_JSON,
        _ => {
            return Err(CotacaoError::VocabularyInvalid(format!(
                "unknown preset '{}'. Available: {}",
                name,
                PRESETS.join(", ")
            )))
        }
    };
    parse_vocabulary_str(json)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rules::schema::VocabularyKind;

    #[test]
    fn test_all_presets_load() {
        for name in PRESETS {
            let vocab = load_preset(name).unwrap();
            assert_eq!(vocab.categories.len(), 3, "{name}");
        }
    }

    #[test]
    fn test_preset_kinds() {
        assert_eq!(load_preset("plan-type").unwrap().kind, VocabularyKind::PlanType);
        assert_eq!(
            load_preset("coverage-type").unwrap().kind,
            VocabularyKind::CoverageType
        );
        assert_eq!(
            load_preset("accommodation").unwrap().kind,
            VocabularyKind::Accommodation
        );
    }

    #[test]
    fn test_accommodation_shortcut_order() {
        let vocab = load_preset("accommodation").unwrap();
        let order: Vec<&str> = vocab.shortcuts.iter().map(|s| s.category.as_str()).collect();
        assert_eq!(order, vec!["NENHUMA", "ENFERMARIA", "APARTAMENTO"]);
    }

    #[test]
    fn test_unknown_preset() {
        assert!(load_preset("dental").is_err());
    }

    #[test]
    fn test_builtin_set_compiles() {
        let set = builtin_set();
        assert_eq!(set.plan_type.kind(), VocabularyKind::PlanType);
        assert_eq!(set.accommodation.kind(), VocabularyKind::Accommodation);
    }
}
