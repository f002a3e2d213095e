use std::path::PathBuf;

use crate::output;

pub fn run(
    pdf_file: PathBuf,
    output_format: &str,
    output_file: Option<PathBuf>,
    vocab_files: Vec<PathBuf>,
    no_raw: bool,
) -> Result<(), cotacao_core::error::CotacaoError> {
    let options = super::parse_options(&vocab_files, !no_raw)?;
    let parsed = super::parse_file(&pdf_file, &options)?;

    match output_file {
        Some(path) => {
            // Always write JSON when saving to file
            let json = serde_json::to_string_pretty(&parsed)?;
            std::fs::write(&path, json)?;
            eprintln!(
                "Parsed {} plan(s), written to {}",
                parsed.plans.len(),
                path.display()
            );
        }
        None => match output_format {
            "json" => output::json::print(&parsed)?,
            _ => output::table::print(&parsed),
        },
    }

    Ok(())
}
