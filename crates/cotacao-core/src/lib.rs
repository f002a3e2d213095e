pub mod classify;
pub mod error;
pub mod export;
pub mod extraction;
pub mod model;
pub mod parsing;
pub mod rules;

use chrono::{SecondsFormat, Utc};
use error::CotacaoError;
use extraction::PdfExtractor;
use model::ExtractedData;
use rules::VocabularySet;

pub use parsing::extract_plans;

/// Options for parsing a quote PDF.
#[derive(Debug, Clone)]
pub struct ParseOptions {
    /// Vocabularies used to classify plan type, coverage and accommodation.
    pub vocabularies: VocabularySet,
    /// Keep the concatenated page text in `ExtractedData::raw_text`.
    pub keep_raw_text: bool,
}

impl Default for ParseOptions {
    fn default() -> Self {
        ParseOptions {
            vocabularies: VocabularySet::builtin(),
            keep_raw_text: true,
        }
    }
}

/// Main API entry point: extract insurance plans from a quote PDF.
///
/// Input that is not a PDF is rejected with `InvalidInput`. Any failure after
/// that (missing pdftotext, unreadable PDF, no text at all) is logged and
/// reported as `ProcessingFailed`; no partial result is returned.
pub fn parse_pdf(
    pdf_bytes: &[u8],
    file_name: &str,
    extractor: &dyn PdfExtractor,
    options: &ParseOptions,
) -> Result<ExtractedData, CotacaoError> {
    validate_input(pdf_bytes, file_name)?;

    extract_document(pdf_bytes, file_name, extractor, options).map_err(|e| {
        tracing::error!(
            file_name,
            backend = extractor.backend_name(),
            error = %e,
            "PDF processing failed"
        );
        CotacaoError::ProcessingFailed
    })
}

/// Extract and concatenate the page text of a PDF, in page order.
///
/// Errors are returned as-is (not rewrapped), for callers that only want the
/// text.
pub fn extract_text(
    pdf_bytes: &[u8],
    extractor: &dyn PdfExtractor,
) -> Result<String, CotacaoError> {
    let pages = extractor.extract_pages(pdf_bytes)?;
    if pages.is_empty() {
        return Err(CotacaoError::Extraction("document has no pages".into()));
    }
    Ok(extraction::join_pages(&pages))
}

/// PDF readers accept the `%PDF` header anywhere in the first 1024 bytes.
const HEADER_SEARCH_BYTES: usize = 1024;

/// Reject files that are not PDFs before any parsing begins.
pub fn validate_input(pdf_bytes: &[u8], file_name: &str) -> Result<(), CotacaoError> {
    let has_pdf_extension = std::path::Path::new(file_name)
        .extension()
        .map(|ext| ext.eq_ignore_ascii_case("pdf"))
        .unwrap_or(false);

    let head = &pdf_bytes[..pdf_bytes.len().min(HEADER_SEARCH_BYTES)];
    let has_pdf_header = head.windows(4).any(|w| w == b"%PDF");

    if !has_pdf_extension || !has_pdf_header {
        return Err(CotacaoError::InvalidInput(format!(
            "'{}' is not a PDF file. Please select a valid PDF",
            file_name
        )));
    }
    Ok(())
}

fn extract_document(
    pdf_bytes: &[u8],
    file_name: &str,
    extractor: &dyn PdfExtractor,
    options: &ParseOptions,
) -> Result<ExtractedData, CotacaoError> {
    let text = extract_text(pdf_bytes, extractor)?;
    if text.trim().is_empty() {
        return Err(CotacaoError::NoText);
    }

    let plans = extract_plans(&text, &options.vocabularies);
    tracing::info!(file_name, plans = plans.len(), "quote parsed");

    Ok(ExtractedData {
        plans,
        timestamp: Utc::now().to_rfc3339_opts(SecondsFormat::Millis, true),
        file_name: file_name.to_string(),
        raw_text: options.keep_raw_text.then_some(text),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_input_accepts_header_at_start() {
        assert!(validate_input(b"%PDF-1.7\n", "cotacao.pdf").is_ok());
        assert!(validate_input(b"%PDF-1.7\n", "COTACAO.PDF").is_ok());
    }

    #[test]
    fn test_validate_input_accepts_preamble_before_header() {
        assert!(validate_input(b"\n%PDF-1.4\n", "a.pdf").is_ok());
        assert!(validate_input(b"\xEF\xBB\xBF%PDF-1.4\n", "a.pdf").is_ok());

        let mut junk = vec![b' '; 1000];
        junk.extend_from_slice(b"%PDF-1.4\n");
        assert!(validate_input(&junk, "a.pdf").is_ok());
    }

    #[test]
    fn test_validate_input_header_beyond_search_window() {
        let mut junk = vec![b' '; HEADER_SEARCH_BYTES];
        junk.extend_from_slice(b"%PDF-1.4\n");
        assert!(matches!(
            validate_input(&junk, "a.pdf"),
            Err(CotacaoError::InvalidInput(_))
        ));
    }

    #[test]
    fn test_validate_input_rejects_non_pdf() {
        assert!(validate_input(b"PK\x03\x04", "a.pdf").is_err());
        assert!(validate_input(b"%PDF-1.4\n", "a.docx").is_err());
        assert!(validate_input(b"", "a.pdf").is_err());
    }
}
