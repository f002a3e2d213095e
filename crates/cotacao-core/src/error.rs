use std::path::PathBuf;

#[derive(Debug, thiserror::Error)]
pub enum CotacaoError {
    #[error("invalid input: {0}")]
    InvalidInput(String),

    #[error("PDF processing failed. Check that the file is a valid quote PDF")]
    ProcessingFailed,

    #[error("PDF extraction failed: {0}")]
    Extraction(String),

    #[error("pdftotext not found. Install poppler: brew install poppler (macOS) or apt install poppler-utils (Linux)")]
    PdftotextNotFound,

    #[error("pdftotext failed with exit code {code}: {stderr}")]
    PdftotextFailed { code: i32, stderr: String },

    #[error("no text content found in PDF")]
    NoText,

    #[error("failed to load vocabulary from {path}: {reason}")]
    VocabularyLoad { path: PathBuf, reason: String },

    #[error("invalid vocabulary: {0}")]
    VocabularyInvalid(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}
