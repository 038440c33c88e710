mod common;

use std::sync::Arc;

use async_trait::async_trait;
use citizenship_docs_server::documents::generators::{
    DiskTemplateSource, DocumentGenerator, GeneratedDocument, GeneratorError,
};
use citizenship_docs_server::documents::pdf::PdfError;
use citizenship_docs_server::documents::{DocumentKind, FieldBundle, PackageError, PackageOrchestrator};
use common::{page_count, sample_bundle};
use tempfile::TempDir;

/// Generator that always fails, standing in for a broken document kind.
struct BrokenGenerator(DocumentKind);

#[async_trait]
impl DocumentGenerator for BrokenGenerator {
    fn kind(&self) -> DocumentKind {
        self.0
    }

    async fn generate(&self, _bundle: &FieldBundle) -> Result<GeneratedDocument, GeneratorError> {
        Err(GeneratorError::Pdf(PdfError::Encode("content stream rejected".to_string())))
    }
}

fn orchestrator(dir: &TempDir) -> PackageOrchestrator {
    PackageOrchestrator::with_defaults(Arc::new(DiskTemplateSource::new(dir.path())))
}

#[tokio::test]
async fn test_default_package_generates_canonical_kinds() {
    // Arrange
    let dir = TempDir::new().unwrap();

    // Act
    let manifest = orchestrator(&dir)
        .generate_package(&sample_bundle(), None)
        .await
        .unwrap();

    // Assert
    let kinds: Vec<DocumentKind> = manifest.documents.iter().map(|doc| doc.kind).collect();
    assert_eq!(kinds, DocumentKind::CANONICAL_PACKAGE.to_vec());
    assert!(manifest.is_complete());
    assert!(manifest.id.starts_with("package-"));
    for document in &manifest.documents {
        assert!(page_count(&document.bytes) >= 1);
    }
}

#[tokio::test]
async fn test_one_failing_generator_leaves_the_rest() {
    // Arrange
    let dir = TempDir::new().unwrap();
    let mut orchestrator = orchestrator(&dir);
    orchestrator.register(Arc::new(BrokenGenerator(DocumentKind::FamilyTree)));

    // Act
    let manifest = orchestrator
        .generate_package(&sample_bundle(), None)
        .await
        .unwrap();

    // Assert
    let total = DocumentKind::CANONICAL_PACKAGE.len();
    assert_eq!(manifest.documents.len(), total - 1);
    assert_eq!(manifest.failures.len(), 1);
    assert_eq!(manifest.failures[0].kind, DocumentKind::FamilyTree);
    assert!(manifest.failures[0].reason.contains("content stream rejected"));
    assert!(manifest
        .documents
        .iter()
        .all(|document| document.kind != DocumentKind::FamilyTree));
}

#[tokio::test]
async fn test_unknown_selector_rejects_the_whole_request() {
    let dir = TempDir::new().unwrap();
    let requested = vec!["poa-single".to_string(), "poa-divorced".to_string()];

    let result = orchestrator(&dir)
        .generate_package(&FieldBundle::new(), Some(&requested))
        .await;

    assert_eq!(
        result.err(),
        Some(PackageError::UnsupportedKind("poa-divorced".to_string()))
    );
}

#[tokio::test]
async fn test_selected_kinds_keep_request_order() {
    let dir = TempDir::new().unwrap();
    let requested = vec![
        "document-checklist".to_string(),
        "poa-married".to_string(),
        "document-checklist".to_string(),
    ];

    let manifest = orchestrator(&dir)
        .generate_package(&FieldBundle::new(), Some(&requested))
        .await
        .unwrap();

    let filenames: Vec<&str> = manifest.documents.iter().map(|doc| doc.filename.as_str()).collect();
    assert_eq!(filenames, vec!["Document_Checklist.pdf", "Power_of_Attorney_Married.pdf"]);
}
