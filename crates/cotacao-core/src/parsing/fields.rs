use regex::Regex;
use std::sync::LazyLock;

pub const NETWORK_FALLBACK: &str = "Rede não identificada";
pub const CO_PAYMENTS_FALLBACK: &str = "Coparticipações não identificadas";
pub const COVERAGE_AREA_FALLBACK: &str = "Área não identificada";

/// A labelled-field pattern and the capture group holding the value.
struct FieldPattern {
    regex: Regex,
    group: usize,
}

/// Compile a table of `(pattern, group)` entries, case-insensitively.
fn compile(table: &[(&str, usize)]) -> Vec<FieldPattern> {
    table
        .iter()
        .map(|&(pattern, group)| FieldPattern {
            regex: Regex::new(&format!("(?i){pattern}")).expect("field pattern is valid"),
            group,
        })
        .collect()
}

static PLAN_CODE: LazyLock<Vec<FieldPattern>> = LazyLock::new(|| {
    compile(&[
        // ANS registry format, e.g. 123456/78-9
        (r"(\d{6}/\d{2}-\d)", 1),
        (r"código:?\s*(\d+(?:[-/]\d+)*)", 1),
        (r"registro\s*ans:?\s*(\d+(?:[-/]\d+)*)", 1),
    ])
});

static PLAN_NAME: LazyLock<Vec<FieldPattern>> = LazyLock::new(|| {
    compile(&[
        (r"plano:?\s*([^.]+)", 1),
        (r"produto:?\s*([^.]+)", 1),
        (r"nome\s*do\s*plano:?\s*([^.]+)", 1),
    ])
});

static NETWORK: LazyLock<Vec<FieldPattern>> = LazyLock::new(|| {
    compile(&[
        (r"rede(?:\s*credenciada)?:?\s*([^.]+)", 1),
        (r"hospitais?(?:\s*credenciados?)?:?\s*([^.]+)", 1),
        (r"cl[ií]nicas?(?:\s*credenciadas?)?:?\s*([^.]+)", 1),
    ])
});

static CO_PAYMENTS: LazyLock<Vec<FieldPattern>> = LazyLock::new(|| {
    compile(&[
        (r"coparticipa[çc][ãa]o:?\s*([^.]+)", 1),
        (r"percentual\s*de\s*pagamento:?\s*([^.]+)", 1),
        (r"valor\s*de\s*participa[çc][ãa]o:?\s*([^.]+)", 1),
    ])
});

static COVERAGE_AREA: LazyLock<Vec<FieldPattern>> = LazyLock::new(|| {
    compile(&[
        // group 1 is the "área"/"area" label
        (r"(área|area)\s*de\s*atua[çc][ãa]o:?\s*([^.]+)", 2),
        (r"abrang[êe]ncia:?\s*([^.]+)", 1),
        (r"cobertura\s*territorial:?\s*([^.]+)", 1),
    ])
});

/// First non-empty trimmed capture across the patterns, in order.
fn first_match<'t>(patterns: &[FieldPattern], text: &'t str) -> Option<&'t str> {
    patterns.iter().find_map(|p| {
        let caps = p.regex.captures(text)?;
        let value = caps.get(p.group)?.as_str().trim();
        (!value.is_empty()).then_some(value)
    })
}

/// ANS registry number or labelled plan code; empty when absent.
pub fn extract_plan_code(text: &str) -> String {
    first_match(&PLAN_CODE, text).unwrap_or_default().to_string()
}

/// Descriptive plan name, qualified with the plan code when one exists.
///
/// Without a descriptive label the name is built from the code, or from
/// `index` (the 1-based position of the section) when there is no code either.
pub fn extract_plan_name(section: &str, index: usize) -> String {
    let code = extract_plan_code(section);

    match (first_match(&PLAN_NAME, section), code.is_empty()) {
        (Some(name), false) => format!("{name} ({code})"),
        (Some(name), true) => name.to_string(),
        (None, false) => format!("Plano {code}"),
        (None, true) => format!("Plano {index}"),
    }
}

pub fn extract_network(text: &str) -> String {
    first_match(&NETWORK, text)
        .unwrap_or(NETWORK_FALLBACK)
        .to_string()
}

pub fn extract_co_payments(text: &str) -> String {
    first_match(&CO_PAYMENTS, text)
        .unwrap_or(CO_PAYMENTS_FALLBACK)
        .to_string()
}

pub fn extract_coverage_area(text: &str) -> String {
    first_match(&COVERAGE_AREA, text)
        .unwrap_or(COVERAGE_AREA_FALLBACK)
        .to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_plan_code_registry_format() {
        assert_eq!(extract_plan_code("Saúde Total (123456/78-9)"), "123456/78-9");
    }

    #[test]
    fn test_plan_code_labels() {
        assert_eq!(extract_plan_code("Código: 4471-2"), "4471-2");
        assert_eq!(extract_plan_code("Registro ANS 998877"), "998877");
        assert_eq!(extract_plan_code("sem identificação"), "");
    }

    #[test]
    fn test_plan_name_with_code() {
        assert_eq!(
            extract_plan_name("Plano: Saúde Total (123456/78-9). Valores", 1),
            "Saúde Total (123456/78-9) (123456/78-9)"
        );
    }

    #[test]
    fn test_plan_name_without_code() {
        assert_eq!(extract_plan_name("Produto: Essencial Plus. R$ 10,00", 3), "Essencial Plus");
    }

    #[test]
    fn test_plan_name_from_code_only() {
        assert_eq!(extract_plan_name("Código 4471 tabela R$ 10,00", 2), "Plano 4471");
    }

    #[test]
    fn test_plan_name_from_index() {
        assert_eq!(extract_plan_name("tabela R$ 10,00", 4), "Plano 4");
    }

    #[test]
    fn test_network() {
        assert_eq!(
            extract_network("Rede credenciada: Hospital A, Hospital B. Outro"),
            "Hospital A, Hospital B"
        );
        assert_eq!(extract_network("Clínicas: Centro Médico. x"), "Centro Médico");
        assert_eq!(extract_network("nada aqui"), NETWORK_FALLBACK);
    }

    #[test]
    fn test_co_payments() {
        assert_eq!(
            extract_co_payments("Coparticipação: 30% em exames. Fim"),
            "30% em exames"
        );
        assert_eq!(
            extract_co_payments("Valor de participação: R$ 25 por consulta"),
            "R$ 25 por consulta"
        );
        assert_eq!(extract_co_payments(""), CO_PAYMENTS_FALLBACK);
    }

    #[test]
    fn test_coverage_area_uses_value_group() {
        assert_eq!(extract_coverage_area("Área de atuação: Nacional."), "Nacional");
        assert_eq!(extract_coverage_area("area de atuacao Grupo de municípios"), "Grupo de municípios");
    }

    #[test]
    fn test_coverage_area_single_group_patterns() {
        assert_eq!(extract_coverage_area("Abrangência: Estadual."), "Estadual");
        assert_eq!(
            extract_coverage_area("Cobertura territorial: São Paulo e Grande SP."),
            "São Paulo e Grande SP"
        );
        assert_eq!(extract_coverage_area("nada"), COVERAGE_AREA_FALLBACK);
    }

    #[test]
    fn test_blank_capture_falls_through() {
        // "Rede:" followed directly by a period captures nothing usable
        assert_eq!(
            extract_network("Rede: . Hospitais credenciados: Santa Casa."),
            "Santa Casa"
        );
    }
}
