//! Generator for the citizenship confirmation application (wniosek).

use async_trait::async_trait;

use super::traits::DocumentGenerator;
use super::{GeneratedDocument, GeneratorError};
use crate::documents::bundle::FieldBundle;
use crate::documents::kind::DocumentKind;
use crate::documents::registry::{get_spec, render_layout};

/// Draws the four-page application form from its registry layout.
#[derive(Debug, Default, Clone, Copy)]
pub struct CitizenshipApplicationGenerator;

#[async_trait]
impl DocumentGenerator for CitizenshipApplicationGenerator {
    fn kind(&self) -> DocumentKind {
        DocumentKind::CitizenshipApplication
    }

    async fn generate(&self, bundle: &FieldBundle) -> Result<GeneratedDocument, GeneratorError> {
        let bytes = render_layout(get_spec(self.kind()), bundle)?;
        Ok(GeneratedDocument::new(self.kind(), bytes))
    }
}
