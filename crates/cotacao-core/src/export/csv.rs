use crate::error::CotacaoError;
use crate::model::{ExtractedData, InsurancePlan};
use std::path::{Path, PathBuf};

pub const HEADERS: [&str; 9] = [
    "Plano",
    "Tipo do Plano",
    "Tipo de Cobertura",
    "Acomodação",
    "Faixas Etárias e Valores",
    "Rede Credenciada",
    "Coparticipações",
    "Área de Atuação",
    "Informações Adicionais",
];

/// Render the plans as CSV: one header row, one row per plan.
///
/// Every data field is quoted with embedded quotes doubled. Rows are
/// separated by `\n` with no trailing newline.
pub fn to_csv(data: &ExtractedData) -> String {
    let mut lines = Vec::with_capacity(data.plans.len() + 1);
    lines.push(HEADERS.join(","));
    lines.extend(data.plans.iter().map(plan_row));
    lines.join("\n")
}

/// `planos-saude-<timestamp>.csv`
pub fn csv_file_name(data: &ExtractedData) -> String {
    format!("planos-saude-{}.csv", data.timestamp)
}

/// Write the CSV into `dir` under its conventional name, returning the path.
pub fn write_csv(data: &ExtractedData, dir: &Path) -> Result<PathBuf, CotacaoError> {
    let path = dir.join(csv_file_name(data));
    std::fs::write(&path, to_csv(data))?;
    tracing::info!(path = %path.display(), plans = data.plans.len(), "CSV written");
    Ok(path)
}

/// Age bands as `0-18: R$ 150.00 | 59-59+: R$ 450.00`.
pub fn format_age_ranges(plan: &InsurancePlan) -> String {
    plan.age_ranges
        .iter()
        .map(|r| r.to_string())
        .collect::<Vec<_>>()
        .join(" | ")
}

fn plan_row(plan: &InsurancePlan) -> String {
    [
        quote(&plan.plan_name),
        quote(plan.plan_type.to_string().as_str()),
        quote(plan.coverage_type.to_string().as_str()),
        quote(plan.accommodation.to_string().as_str()),
        quote(&format_age_ranges(plan)),
        quote(&plan.network),
        quote(&plan.co_payments),
        quote(&plan.coverage_area),
        quote(plan.additional_info.as_deref().unwrap_or_default()),
    ]
    .join(",")
}

fn quote(field: &str) -> String {
    format!("\"{}\"", field.replace('"', "\"\""))
}
