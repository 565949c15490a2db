//! Export functionality
//!
//! Renders data contract documents into output formats. Currently provides:
//! - Markdown

pub mod markdown;

/// Result of an export operation
#[derive(Debug)]
pub struct ExportResult {
    /// Exported content
    pub content: String,
    /// Format identifier
    pub format: String,
}

/// Error during export
#[derive(Debug, thiserror::Error)]
pub enum ExportError {
    #[error("Export error: {0}")]
    ExportError(String),
}

// Re-export for convenience
pub use markdown::{MarkdownExporter, to_markdown};
