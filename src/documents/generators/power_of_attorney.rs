//! Generator for the power-of-attorney variants.

use async_trait::async_trait;
use log::info;

use super::engine::{PoaRenderEngine, RenderPath};
use super::traits::DocumentGenerator;
use super::{GeneratedDocument, GeneratorError};
use crate::documents::bundle::FieldBundle;
use crate::documents::kind::{DocumentKind, PoaVariant};

/// One power-of-attorney variant, rendered through the shared engine.
#[derive(Clone)]
pub struct PowerOfAttorneyGenerator {
    variant: PoaVariant,
    engine: PoaRenderEngine,
}

impl PowerOfAttorneyGenerator {
    pub fn new(variant: PoaVariant, engine: PoaRenderEngine) -> Self {
        Self { variant, engine }
    }

    pub fn variant(&self) -> PoaVariant {
        self.variant
    }
}

#[async_trait]
impl DocumentGenerator for PowerOfAttorneyGenerator {
    fn kind(&self) -> DocumentKind {
        self.variant.kind()
    }

    async fn generate(&self, bundle: &FieldBundle) -> Result<GeneratedDocument, GeneratorError> {
        let render = self.engine.render(self.variant, bundle).await?;
        if render.path == RenderPath::FormFill {
            info!("{}: filled from template", self.kind());
        }
        Ok(GeneratedDocument::new(self.kind(), render.bytes))
    }
}
