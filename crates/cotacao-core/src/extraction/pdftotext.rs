use crate::error::CotacaoError;
use crate::extraction::{PageContent, PdfExtractor};
use std::io::Write;
use std::process::Command;

/// PDF extraction backend using pdftotext (from poppler-utils).
///
/// Uses `pdftotext -layout` so price tables keep their row structure.
pub struct PdftotextExtractor;

impl PdftotextExtractor {
    pub fn new() -> Self {
        PdftotextExtractor
    }

    /// Check if pdftotext is available on the system.
    pub fn is_available() -> bool {
        Command::new("pdftotext")
            .arg("-v")
            .output()
            .map(|o| o.status.success() || !o.stderr.is_empty())
            .unwrap_or(false)
    }
}

impl Default for PdftotextExtractor {
    fn default() -> Self {
        Self::new()
    }
}

impl PdfExtractor for PdftotextExtractor {
    fn extract_pages(&self, pdf_bytes: &[u8]) -> Result<Vec<PageContent>, CotacaoError> {
        // Write PDF bytes to a temp file
        let mut tmpfile =
            tempfile::NamedTempFile::new().map_err(|e| CotacaoError::Extraction(e.to_string()))?;
        tmpfile
            .write_all(pdf_bytes)
            .map_err(|e| CotacaoError::Extraction(e.to_string()))?;

        let output = Command::new("pdftotext")
            .arg("-layout")
            .arg(tmpfile.path())
            .arg("-") // output to stdout
            .output()
            .map_err(|e| {
                if e.kind() == std::io::ErrorKind::NotFound {
                    CotacaoError::PdftotextNotFound
                } else {
                    CotacaoError::Extraction(format!("pdftotext failed: {}", e))
                }
            })?;

        if !output.status.success() {
            let code = output.status.code().unwrap_or(-1);
            let stderr = String::from_utf8_lossy(&output.stderr).to_string();
            return Err(CotacaoError::PdftotextFailed { code, stderr });
        }

        let text = String::from_utf8_lossy(&output.stdout);
        let pages = split_pages(&text);
        tracing::debug!(pages = pages.len(), "pdftotext extracted pages");
        Ok(pages)
    }

    fn backend_name(&self) -> &str {
        "pdftotext"
    }
}

/// Split pdftotext output into pages (form feed `\x0c` separates pages).
///
/// Layout padding inside a line is collapsed to single spaces and blank lines
/// are dropped. The trailing empty chunk after the last form feed is skipped.
fn split_pages(text: &str) -> Vec<PageContent> {
    text.split('\x0c')
        .enumerate()
        .map(|(i, page_text)| PageContent {
            page_number: i + 1,
            lines: page_text
                .lines()
                .map(normalize_ws)
                .filter(|l| !l.is_empty())
                .collect(),
        })
        .filter(|p| !p.lines.is_empty() || p.page_number == 1)
        .collect()
}

fn normalize_ws(s: &str) -> String {
    s.split_whitespace().collect::<Vec<_>>().join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_split_pages_on_form_feed() {
        let text = "Plano: Saude Total\n  0 a 18 anos     R$ 150,00\n\x0cRede credenciada: Hospital A\n\x0c";
        let pages = split_pages(text);
        assert_eq!(pages.len(), 2);
        assert_eq!(pages[0].page_number, 1);
        assert_eq!(pages[0].lines[1], "0 a 18 anos R$ 150,00");
        assert_eq!(pages[1].page_number, 2);
        assert_eq!(pages[1].lines, vec!["Rede credenciada: Hospital A"]);
    }

    #[test]
    fn test_split_pages_keeps_empty_first_page() {
        let pages = split_pages("");
        assert_eq!(pages.len(), 1);
        assert!(pages[0].lines.is_empty());
    }
}
