pub mod pdftotext;

use crate::error::CotacaoError;

/// Content extracted from a single page of a PDF.
#[derive(Debug, Clone)]
pub struct PageContent {
    /// 1-based position of the page in the document.
    pub page_number: usize,
    pub lines: Vec<String>,
}

impl PageContent {
    /// The page's text with its lines joined by single spaces.
    pub fn text(&self) -> String {
        self.lines.join(" ")
    }
}

/// Trait for PDF text extraction backends (the page-text provider).
pub trait PdfExtractor: Send + Sync {
    /// Extract text content from PDF bytes, returning one PageContent per page
    /// in document order.
    fn extract_pages(&self, pdf_bytes: &[u8]) -> Result<Vec<PageContent>, CotacaoError>;

    /// Name of this extraction backend (for diagnostics).
    fn backend_name(&self) -> &str;
}

/// Concatenate page texts in page order, separated by single spaces.
pub fn join_pages(pages: &[PageContent]) -> String {
    let mut ordered: Vec<&PageContent> = pages.iter().collect();
    ordered.sort_by_key(|p| p.page_number);
    ordered
        .iter()
        .map(|p| p.text())
        .collect::<Vec<_>>()
        .join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn page(number: usize, lines: &[&str]) -> PageContent {
        PageContent {
            page_number: number,
            lines: lines.iter().map(|s| s.to_string()).collect(),
        }
    }

    #[test]
    fn test_page_text_joins_lines() {
        assert_eq!(page(1, &["Plano: A", "0 a 18 anos"]).text(), "Plano: A 0 a 18 anos");
    }

    #[test]
    fn test_join_pages_keeps_document_order() {
        let pages = vec![page(2, &["segunda"]), page(1, &["primeira"])];
        assert_eq!(join_pages(&pages), "primeira segunda");
    }
}
