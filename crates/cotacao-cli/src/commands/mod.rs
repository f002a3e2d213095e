pub mod export;
pub mod parse;
pub mod raw;
pub mod vocab;

use cotacao_core::error::CotacaoError;
use cotacao_core::extraction::pdftotext::PdftotextExtractor;
use cotacao_core::model::ExtractedData;
use cotacao_core::rules::VocabularySet;
use cotacao_core::ParseOptions;
use std::path::{Path, PathBuf};

/// Built-in vocabularies with each custom file replacing the one of its kind.
fn parse_options(vocab_files: &[PathBuf], keep_raw_text: bool) -> Result<ParseOptions, CotacaoError> {
    let mut vocabularies = VocabularySet::builtin();
    for path in vocab_files {
        let def = cotacao_core::rules::load_vocabulary(path)?;
        vocabularies = vocabularies.with_override(def)?;
    }
    Ok(ParseOptions {
        vocabularies,
        keep_raw_text,
    })
}

/// Read and parse a quote PDF with the pdftotext backend.
fn parse_file(path: &Path, options: &ParseOptions) -> Result<ExtractedData, CotacaoError> {
    let pdf_bytes = std::fs::read(path)?;
    let extractor = pdftotext()?;
    cotacao_core::parse_pdf(&pdf_bytes, &file_name(path), &extractor, options)
}

/// parse_pdf reports a missing binary as a generic failure, so check first.
fn pdftotext() -> Result<PdftotextExtractor, CotacaoError> {
    if !PdftotextExtractor::is_available() {
        return Err(CotacaoError::PdftotextNotFound);
    }
    Ok(PdftotextExtractor::new())
}

fn file_name(path: &Path) -> String {
    path.file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.display().to_string())
}
