//! Low-level PDF plumbing on top of `lopdf`.
//!
//! - `canvas` - drawing primitives recorded as content-stream operations
//! - `builder` - scratch documents assembled from canvases
//! - `template` - loading, form filling, flattening and overlaying existing PDFs
//! - `encoding` - WinAnsi text encoding for the base-14 fonts

pub mod builder;
pub mod canvas;
pub mod encoding;
pub mod template;

pub use builder::PdfBuilder;
pub use canvas::{Color, FontFace, PageCanvas, PageSize, RectStyle};
pub use template::TemplatePdf;

use thiserror::Error;

/// Errors raised while building, parsing or writing PDF documents.
#[derive(Debug, Error)]
pub enum PdfError {
    #[error("failed to parse PDF: {0}")]
    Parse(#[source] lopdf::Error),
    #[error("malformed PDF structure: {0}")]
    Structure(#[from] lopdf::Error),
    #[error("failed to encode content stream: {0}")]
    Encode(String),
    #[error("failed to serialize PDF: {0}")]
    Serialize(String),
    #[error("form field '{0}' not found")]
    FieldNotFound(String),
    #[error("form field '{0}' is not a text field")]
    FieldTypeMismatch(String),
    #[error("page {page} out of range (document has {count} pages)")]
    PageOutOfRange { page: usize, count: usize },
    #[error("document has no form")]
    NoForm,
}
