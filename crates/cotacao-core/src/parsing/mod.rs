pub mod ages;
pub mod fields;
pub mod segment;
pub mod values;

use crate::classify::{determine_accommodation, determine_coverage_type, determine_plan_type};
use crate::model::InsurancePlan;
use crate::rules::VocabularySet;
use ages::extract_age_ranges;
use fields::{extract_co_payments, extract_coverage_area, extract_network, extract_plan_name};
use segment::split_into_sections;

/// Length of the section excerpt kept as `additional_info`, in characters.
const EXCERPT_CHARS: usize = 150;

/// Build one InsurancePlan per plan section found in `text`.
///
/// When no section survives segmentation, the whole document is treated as a
/// single plan, provided it contains at least one age-priced band.
pub fn extract_plans(text: &str, vocabularies: &VocabularySet) -> Vec<InsurancePlan> {
    let sections = split_into_sections(text);
    tracing::debug!(sections = sections.len(), "candidate plan sections");

    let plans: Vec<InsurancePlan> = sections
        .iter()
        .enumerate()
        .map(|(i, section)| build_plan(section, i + 1, vocabularies))
        .collect();

    if !plans.is_empty() {
        return plans;
    }

    // Fall back to the whole document
    if extract_age_ranges(text).is_empty() {
        tracing::debug!("no plan sections and no age bands in document");
        return Vec::new();
    }
    tracing::debug!("no plan sections, extracting whole document as one plan");
    vec![build_plan(text, 1, vocabularies)]
}

/// Run every field extractor and classifier over one section.
fn build_plan(section: &str, index: usize, vocabularies: &VocabularySet) -> InsurancePlan {
    InsurancePlan {
        plan_name: extract_plan_name(section, index),
        plan_type: determine_plan_type(section, vocabularies),
        coverage_type: determine_coverage_type(section, vocabularies),
        accommodation: determine_accommodation(section, vocabularies),
        age_ranges: extract_age_ranges(section),
        network: extract_network(section),
        co_payments: extract_co_payments(section),
        coverage_area: extract_coverage_area(section),
        additional_info: Some(excerpt(section)),
    }
}

/// First 150 characters, trimmed, always followed by "...".
fn excerpt(section: &str) -> String {
    let head: String = section.chars().take(EXCERPT_CHARS).collect();
    format!("{}...", head.trim())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{AccommodationType, CoverageType, MaxAge, PlanType};
    use fields::NETWORK_FALLBACK;

    fn vocab() -> VocabularySet {
        VocabularySet::builtin()
    }

    #[test]
    fn test_excerpt_short_text_still_gets_ellipsis() {
        assert_eq!(excerpt("  Plano Ouro  "), "Plano Ouro...");
    }

    #[test]
    fn test_excerpt_truncates_on_chars() {
        let text = "ç".repeat(200);
        let out = excerpt(&text);
        assert_eq!(out.chars().count(), 153);
        assert!(out.ends_with("..."));
    }

    #[test]
    fn test_two_sections_two_plans() {
        let text = "Cotação empresarial. \
            Plano: Bronze Enfermaria. 0 a 18 anos R$ 100,00 19 a 23 anos R$ 120,00 \
            Plano: Prata Apartamento. 0 a 18 anos R$ 200,00 59 anos+ R$ 800,00";
        let plans = extract_plans(text, &vocab());
        assert_eq!(plans.len(), 2);
        assert_eq!(plans[0].plan_name, "Bronze Enfermaria");
        assert_eq!(plans[0].accommodation, AccommodationType::Enfermaria);
        assert_eq!(plans[0].age_ranges.len(), 2);
        assert_eq!(plans[1].plan_name, "Prata Apartamento");
        assert_eq!(plans[1].accommodation, AccommodationType::Apartamento);
        assert_eq!(plans[1].age_ranges[1].max_age, MaxAge::Unbounded);
    }

    #[test]
    fn test_index_names_follow_section_order() {
        let text = "Registro 1 tabela geral R$ 100,00 Registro 2 tabela geral R$ 200,00";
        let plans = extract_plans(text, &vocab());
        assert_eq!(plans.len(), 2);
        assert_eq!(plans[0].plan_name, "Plano 1");
        assert_eq!(plans[1].plan_name, "Plano 2");
    }

    #[test]
    fn test_whole_document_fallback() {
        // Bare "$" prices satisfy the age patterns but not the section filter
        let text = "Tabela de preços: 0 a 18 anos $ 150,00 59 anos+ $ 450,00";
        assert!(split_into_sections(text).is_empty());

        let plans = extract_plans(text, &vocab());
        assert_eq!(plans.len(), 1);
        assert_eq!(plans[0].plan_name, "Plano 1");
        assert_eq!(plans[0].age_ranges.len(), 2);
        assert_eq!(plans[0].age_ranges[1].max_age, MaxAge::Unbounded);
        assert_eq!(plans[0].network, NETWORK_FALLBACK);
    }

    #[test]
    fn test_garbage_yields_no_plans() {
        assert!(extract_plans("Lorem ipsum dolor sit amet", &vocab()).is_empty());
        assert!(extract_plans("", &vocab()).is_empty());
    }

    #[test]
    fn test_section_without_age_bands_still_a_plan() {
        let text = "Produto: Odonto Hospitalar. Mensalidade R$ 45,90";
        let plans = extract_plans(text, &vocab());
        assert_eq!(plans.len(), 1);
        assert!(plans[0].age_ranges.is_empty());
        assert_eq!(plans[0].coverage_type, CoverageType::Hospitalar);
        assert_eq!(plans[0].plan_type, PlanType::Empresarial);
    }
}
