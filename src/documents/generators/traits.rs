//! Traits for generator system standardization.

use async_trait::async_trait;

use super::{GeneratedDocument, GeneratorError};
use crate::documents::bundle::FieldBundle;
use crate::documents::kind::DocumentKind;

/// Trait for validating request objects.
pub trait Validator {
    /// Validate the state of the object.
    fn validate(&self) -> Result<(), String>;
}

/// Trait for document generators.
///
/// Generators must succeed for any bundle, including an empty one; absent
/// fields render blank.
#[async_trait]
pub trait DocumentGenerator: Send + Sync {
    fn kind(&self) -> DocumentKind;

    /// Generate a document from the bundle.
    async fn generate(&self, bundle: &FieldBundle) -> Result<GeneratedDocument, GeneratorError>;
}
