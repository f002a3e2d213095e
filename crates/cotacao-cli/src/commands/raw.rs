use std::path::PathBuf;

pub fn run(pdf_file: PathBuf, limit: usize) -> Result<(), cotacao_core::error::CotacaoError> {
    let pdf_bytes = std::fs::read(&pdf_file)?;
    let file_name = super::file_name(&pdf_file);
    cotacao_core::validate_input(&pdf_bytes, &file_name)?;

    let extractor = super::pdftotext()?;
    let text = cotacao_core::extract_text(&pdf_bytes, &extractor)?;

    println!("Arquivo: {file_name}\n");
    if text.trim().is_empty() {
        println!("Nenhum texto extraído");
        return Ok(());
    }

    let shown: String = text.chars().take(limit).collect();
    println!("{shown}");
    let total = text.chars().count();
    if total > limit {
        eprintln!("(showing {limit} of {total} characters)");
    }
    Ok(())
}
