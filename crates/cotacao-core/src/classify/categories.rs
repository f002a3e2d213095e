use crate::model::{AccommodationType, CoverageType, PlanType};
use crate::rules::VocabularySet;
use regex::Regex;
use std::sync::LazyLock;

/// Segmentation codes printed in quote tables (A+H, A+H+OB, H+A+OB) or the
/// bare word AMBULATORIAL.
static COVERAGE_CODE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)[AH]\s*\+\s*[AH]\s*\+?\s*OB|AMBULATORIAL")
        .expect("coverage code pattern is valid")
});

pub fn determine_plan_type(text: &str, vocabularies: &VocabularySet) -> PlanType {
    vocabularies.plan_type.resolve(text)
}

/// Coverage segmentation. A printed segmentation code decides directly;
/// otherwise the coverage vocabulary is scored.
pub fn determine_coverage_type(text: &str, vocabularies: &VocabularySet) -> CoverageType {
    if let Some(m) = COVERAGE_CODE.find(text) {
        let code = m.as_str().to_uppercase();
        return if code.contains("OB") {
            CoverageType::Obstetrica
        } else if code.contains('H') {
            CoverageType::Hospitalar
        } else {
            CoverageType::Ambulatorial
        };
    }
    vocabularies.coverage_type.resolve(text)
}

pub fn determine_accommodation(text: &str, vocabularies: &VocabularySet) -> AccommodationType {
    vocabularies.accommodation.resolve(text)
}
