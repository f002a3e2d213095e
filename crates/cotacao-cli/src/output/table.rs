use cotacao_core::model::ExtractedData;

pub fn print(data: &ExtractedData) {
    print!("{}", format_plans(data));
}

fn format_plans(data: &ExtractedData) -> String {
    let mut out = format!("Arquivo: {} ({})\n\n", data.file_name, data.timestamp);

    if data.plans.is_empty() {
        out.push_str("Nenhum plano encontrado\n");
        return out;
    }

    for (i, plan) in data.plans.iter().enumerate() {
        out.push_str(&format!("=== {}. {} ===\n\n", i + 1, plan.plan_name));
        out.push_str(&format!(
            "  {} / {} / {}\n\n",
            plan.plan_type, plan.coverage_type, plan.accommodation
        ));

        let width = plan
            .age_ranges
            .iter()
            .map(|r| format!("{}-{}", r.min_age, r.max_age).len())
            .max()
            .unwrap_or(5);
        for r in &plan.age_ranges {
            let band = format!("{}-{}", r.min_age, r.max_age);
            let price = format!("{:.2}", r.price);
            out.push_str(&format!(
                "  {:<width$}  R$ {:>10}\n",
                band,
                price,
                width = width
            ));
        }
        out.push('\n');

        out.push_str(&format!("  Rede:             {}\n", plan.network));
        out.push_str(&format!("  Coparticipação:   {}\n", plan.co_payments));
        out.push_str(&format!("  Área de atuação:  {}\n", plan.coverage_area));
        out.push('\n');
    }

    out
}
