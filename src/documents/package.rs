//! Package orchestrator: generates a batch of documents for one bundle.
//!
//! Kinds run one after another. A generator that errors or panics is
//! recorded as a failure and the batch moves on; only an unknown kind in the
//! request aborts before anything is generated.

use std::collections::BTreeMap;
use std::panic::AssertUnwindSafe;
use std::sync::Arc;

use futures::FutureExt;
use log::{error, info};
use serde::{Deserialize, Serialize};
use thiserror::Error;
use utoipa::ToSchema;
use uuid::Uuid;

use crate::documents::bundle::FieldBundle;
use crate::documents::generators::{
    ApplicantDetailsGenerator, CitizenshipApplicationGenerator, DocumentChecklistGenerator, DocumentGenerator,
    FamilyTreeGenerator, GeneratedDocument, PoaRenderEngine, PowerOfAttorneyGenerator, TemplateSource,
};
use crate::documents::kind::{DocumentKind, PoaVariant};

#[derive(Debug, Error, PartialEq, Eq)]
pub enum PackageError {
    #[error("unsupported document kind '{0}'")]
    UnsupportedKind(String),
}

/// A document that could not be generated.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct PackageFailure {
    pub kind: DocumentKind,
    pub reason: String,
}

/// Outcome of one package request: every document that succeeded plus a
/// failure entry for every one that did not.
#[derive(Debug, Clone)]
pub struct PackageManifest {
    pub id: String,
    pub documents: Vec<GeneratedDocument>,
    pub failures: Vec<PackageFailure>,
}

impl PackageManifest {
    pub fn is_complete(&self) -> bool {
        self.failures.is_empty()
    }
}

/// Registry of generators by kind.
#[derive(Clone, Default)]
pub struct PackageOrchestrator {
    generators: BTreeMap<DocumentKind, Arc<dyn DocumentGenerator>>,
}

impl PackageOrchestrator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Orchestrator with a generator for every document kind.
    pub fn with_defaults(templates: Arc<dyn TemplateSource>) -> Self {
        let engine = PoaRenderEngine::new(templates);
        let mut orchestrator = Self::new();
        orchestrator.register(Arc::new(CitizenshipApplicationGenerator));
        for variant in PoaVariant::ALL {
            orchestrator.register(Arc::new(PowerOfAttorneyGenerator::new(variant, engine.clone())));
        }
        orchestrator.register(Arc::new(FamilyTreeGenerator));
        orchestrator.register(Arc::new(ApplicantDetailsGenerator));
        orchestrator.register(Arc::new(DocumentChecklistGenerator));
        orchestrator
    }

    /// Register a generator, replacing any previous one for the same kind.
    pub fn register(&mut self, generator: Arc<dyn DocumentGenerator>) {
        self.generators.insert(generator.kind(), generator);
    }

    pub fn generator(&self, kind: DocumentKind) -> Option<&Arc<dyn DocumentGenerator>> {
        self.generators.get(&kind)
    }

    pub fn kinds(&self) -> impl Iterator<Item = DocumentKind> + '_ {
        self.generators.keys().copied()
    }

    /// Parse selectors into kinds this orchestrator can generate, in request
    /// order with duplicates dropped. `None` selects the canonical package.
    pub fn resolve_kinds(&self, requested: Option<&[String]>) -> Result<Vec<DocumentKind>, PackageError> {
        let kinds = match requested {
            None => DocumentKind::CANONICAL_PACKAGE.to_vec(),
            Some(selectors) => selectors
                .iter()
                .map(|selector| {
                    selector
                        .parse::<DocumentKind>()
                        .map_err(|_| PackageError::UnsupportedKind(selector.clone()))
                })
                .collect::<Result<Vec<_>, _>>()?,
        };

        let mut unique = Vec::with_capacity(kinds.len());
        for kind in kinds {
            if !self.generators.contains_key(&kind) {
                return Err(PackageError::UnsupportedKind(kind.to_string()));
            }
            if !unique.contains(&kind) {
                unique.push(kind);
            }
        }
        Ok(unique)
    }

    /// Generate the requested kinds (or the canonical package) for `bundle`.
    pub async fn generate_package(
        &self,
        bundle: &FieldBundle,
        requested: Option<&[String]>,
    ) -> Result<PackageManifest, PackageError> {
        self.generate_package_with(bundle, requested, |_, _| {}).await
    }

    /// Like [`Self::generate_package`], letting `prepare` adjust a copy of the
    /// bundle for each kind before it is generated.
    pub async fn generate_package_with<F>(
        &self,
        bundle: &FieldBundle,
        requested: Option<&[String]>,
        prepare: F,
    ) -> Result<PackageManifest, PackageError>
    where
        F: Fn(DocumentKind, &mut FieldBundle),
    {
        let kinds = self.resolve_kinds(requested)?;
        let id = format!("package-{}", Uuid::new_v4().simple());
        info!("{id}: generating {} document(s)", kinds.len());

        let mut documents = Vec::with_capacity(kinds.len());
        let mut failures = Vec::new();

        for kind in kinds {
            let Some(generator) = self.generators.get(&kind) else {
                continue;
            };
            let mut prepared = bundle.clone();
            prepare(kind, &mut prepared);

            match run_generator(generator.as_ref(), &prepared).await {
                Ok(document) => documents.push(document),
                Err(reason) => {
                    error!("{id}: {kind} failed: {reason}");
                    failures.push(PackageFailure { kind, reason });
                }
            }
        }

        info!(
            "{id}: finished with {} document(s), {} failure(s)",
            documents.len(),
            failures.len()
        );
        Ok(PackageManifest {
            id,
            documents,
            failures,
        })
    }
}

/// Run one generator, turning errors and panics into a failure reason.
async fn run_generator(
    generator: &dyn DocumentGenerator,
    bundle: &FieldBundle,
) -> Result<GeneratedDocument, String> {
    match AssertUnwindSafe(generator.generate(bundle)).catch_unwind().await {
        Ok(Ok(document)) => Ok(document),
        Ok(Err(err)) => Err(err.to_string()),
        Err(panic) => Err(panic_message(panic.as_ref())),
    }
}

fn panic_message(panic: &(dyn std::any::Any + Send)) -> String {
    let detail = panic
        .downcast_ref::<&str>()
        .map(|message| message.to_string())
        .or_else(|| panic.downcast_ref::<String>().cloned())
        .unwrap_or_else(|| "unknown cause".to_string());
    format!("generator panicked: {detail}")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::documents::generators::GeneratorError;
    use crate::documents::pdf::PdfError;
    use async_trait::async_trait;

    struct Failing(DocumentKind);

    #[async_trait]
    impl DocumentGenerator for Failing {
        fn kind(&self) -> DocumentKind {
            self.0
        }

        async fn generate(&self, _bundle: &FieldBundle) -> Result<GeneratedDocument, GeneratorError> {
            Err(GeneratorError::Pdf(PdfError::NoForm))
        }
    }

    struct Panicking(DocumentKind);

    #[async_trait]
    impl DocumentGenerator for Panicking {
        fn kind(&self) -> DocumentKind {
            self.0
        }

        async fn generate(&self, _bundle: &FieldBundle) -> Result<GeneratedDocument, GeneratorError> {
            panic!("layout table corrupted")
        }
    }

    struct Fixed(DocumentKind);

    #[async_trait]
    impl DocumentGenerator for Fixed {
        fn kind(&self) -> DocumentKind {
            self.0
        }

        async fn generate(&self, _bundle: &FieldBundle) -> Result<GeneratedDocument, GeneratorError> {
            Ok(GeneratedDocument::new(self.0, b"%PDF-1.5".to_vec()))
        }
    }

    fn orchestrator(kinds: &[DocumentKind]) -> PackageOrchestrator {
        let mut orchestrator = PackageOrchestrator::new();
        for kind in kinds {
            orchestrator.register(Arc::new(Fixed(*kind)));
        }
        orchestrator
    }

    fn selectors(values: &[&str]) -> Vec<String> {
        values.iter().map(|value| value.to_string()).collect()
    }

    #[test]
    fn test_resolve_defaults_to_canonical_package() {
        let orchestrator = orchestrator(&DocumentKind::ALL);
        assert_eq!(
            orchestrator.resolve_kinds(None).unwrap(),
            DocumentKind::CANONICAL_PACKAGE.to_vec()
        );
    }

    #[test]
    fn test_resolve_drops_duplicates_and_keeps_order() {
        let orchestrator = orchestrator(&DocumentKind::ALL);
        let requested = selectors(&["family-tree", "poa_single", "FAMILY-TREE"]);
        assert_eq!(
            orchestrator.resolve_kinds(Some(&requested)).unwrap(),
            vec![DocumentKind::FamilyTree, DocumentKind::PoaSingle]
        );
    }

    #[test]
    fn test_resolve_rejects_unknown_and_unregistered_kinds() {
        let orchestrator = orchestrator(&[DocumentKind::FamilyTree]);
        let unknown = selectors(&["family-tree", "birth-certificate"]);
        assert_eq!(
            orchestrator.resolve_kinds(Some(&unknown)),
            Err(PackageError::UnsupportedKind("birth-certificate".to_string()))
        );
        let unregistered = selectors(&["poa-minor"]);
        assert_eq!(
            orchestrator.resolve_kinds(Some(&unregistered)),
            Err(PackageError::UnsupportedKind("poa-minor".to_string()))
        );
    }

    #[tokio::test]
    async fn test_failures_do_not_abort_the_batch() {
        // Arrange
        let mut orchestrator = orchestrator(&[DocumentKind::FamilyTree, DocumentKind::ApplicantDetails]);
        orchestrator.register(Arc::new(Failing(DocumentKind::PoaSingle)));
        orchestrator.register(Arc::new(Panicking(DocumentKind::DocumentChecklist)));
        let requested = selectors(&["poa-single", "family-tree", "document-checklist", "applicant-details"]);

        // Act
        let manifest = orchestrator
            .generate_package(&FieldBundle::new(), Some(&requested))
            .await
            .unwrap();

        // Assert
        let generated: Vec<DocumentKind> = manifest.documents.iter().map(|doc| doc.kind).collect();
        assert_eq!(generated, vec![DocumentKind::FamilyTree, DocumentKind::ApplicantDetails]);
        assert_eq!(manifest.failures.len(), 2);
        assert_eq!(manifest.failures[0].kind, DocumentKind::PoaSingle);
        assert_eq!(manifest.failures[1].kind, DocumentKind::DocumentChecklist);
        assert!(manifest.failures[1].reason.contains("layout table corrupted"));
        assert!(!manifest.is_complete());
    }

    #[tokio::test]
    async fn test_prepare_sees_each_kind() {
        let orchestrator = orchestrator(&DocumentKind::ALL);
        let seen = parking_lot::Mutex::new(Vec::new());
        let manifest = orchestrator
            .generate_package_with(&FieldBundle::new(), None, |kind, _| seen.lock().push(kind))
            .await
            .unwrap();
        assert!(manifest.id.starts_with("package-"));
        assert_eq!(seen.into_inner(), DocumentKind::CANONICAL_PACKAGE.to_vec());
    }
}
