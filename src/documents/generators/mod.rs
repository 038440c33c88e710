//! Generators module - one generator per document kind.
//!
//! Fixed-layout kinds render straight from the registry; the power-of-attorney
//! variants go through [`PoaRenderEngine`], which prefers a fillable template;
//! the family tree, applicant details and checklist flow extra content below
//! their registry frame.

pub mod applicant_details;
pub mod checklist;
pub mod citizenship;
pub mod common;
pub mod engine;
pub mod family_tree;
pub mod power_of_attorney;
pub mod traits;
pub mod validation;

pub use applicant_details::ApplicantDetailsGenerator;
pub use checklist::DocumentChecklistGenerator;
pub use citizenship::CitizenshipApplicationGenerator;
pub use engine::{DiskTemplateSource, PoaRender, PoaRenderEngine, RenderPath, TemplateSource};
pub use family_tree::FamilyTreeGenerator;
pub use power_of_attorney::PowerOfAttorneyGenerator;
pub use traits::{DocumentGenerator, Validator};

use thiserror::Error;

use crate::documents::kind::DocumentKind;
use crate::documents::pdf::PdfError;

/// Errors that can occur during document generation.
#[derive(Debug, Error)]
pub enum GeneratorError {
    #[error("failed to render PDF: {0}")]
    Pdf(#[from] PdfError),
}

/// Result of a successful document generation.
#[derive(Debug, Clone)]
pub struct GeneratedDocument {
    pub filename: String,
    pub bytes: Vec<u8>,
    pub kind: DocumentKind,
}

impl GeneratedDocument {
    /// Document named by its kind's filename convention.
    pub fn new(kind: DocumentKind, bytes: Vec<u8>) -> Self {
        Self {
            filename: kind.filename().to_string(),
            bytes,
            kind,
        }
    }
}
