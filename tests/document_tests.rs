mod common;

use std::sync::Arc;

use citizenship_docs_server::documents::generators::checklist::render_checklist;
use citizenship_docs_server::documents::generators::family_tree::render_family_tree;
use citizenship_docs_server::documents::generators::{DiskTemplateSource, DocumentGenerator};
use citizenship_docs_server::documents::{DocumentKind, FieldBundle, PackageOrchestrator};
use common::{page_contains, page_count, page_texts, sample_bundle};
use tempfile::TempDir;

fn orchestrator(dir: &TempDir) -> PackageOrchestrator {
    PackageOrchestrator::with_defaults(Arc::new(DiskTemplateSource::new(dir.path())))
}

#[tokio::test]
async fn test_every_kind_renders_an_empty_bundle() {
    // Arrange
    let dir = TempDir::new().unwrap();
    let orchestrator = orchestrator(&dir);

    for kind in DocumentKind::ALL {
        // Act
        let generator = orchestrator.generator(kind).unwrap();
        let document = generator.generate(&FieldBundle::new()).await.unwrap();

        // Assert
        assert_eq!(document.kind, kind);
        assert_eq!(document.filename, kind.filename());
        assert!(document.bytes.starts_with(b"%PDF"), "{kind} is not a PDF");
        assert!(page_count(&document.bytes) >= 1, "{kind} has no pages");
    }
}

#[tokio::test]
async fn test_output_is_byte_identical_for_identical_input() {
    let dir = TempDir::new().unwrap();
    let orchestrator = orchestrator(&dir);
    let bundle = sample_bundle();

    for kind in DocumentKind::ALL {
        let generator = orchestrator.generator(kind).unwrap();
        let first = generator.generate(&bundle).await.unwrap();
        let second = generator.generate(&bundle).await.unwrap();
        assert_eq!(first.bytes, second.bytes, "{kind} output differs between runs");
    }
}

#[tokio::test]
async fn test_fixed_layouts_have_their_page_counts() {
    let dir = TempDir::new().unwrap();
    let orchestrator = orchestrator(&dir);
    let expected = [
        (DocumentKind::CitizenshipApplication, 4),
        (DocumentKind::PoaSingle, 3),
        (DocumentKind::PoaMarried, 4),
        (DocumentKind::PoaMinor, 3),
        (DocumentKind::PoaArchives, 1),
    ];

    for (kind, pages) in expected {
        let document = orchestrator
            .generator(kind)
            .unwrap()
            .generate(&sample_bundle())
            .await
            .unwrap();
        assert_eq!(page_count(&document.bytes), pages, "{kind}");
    }
}

#[test]
fn test_family_tree_with_seven_members() {
    // Arrange
    let mut bundle = FieldBundle::new();
    let roles = [
        ("applicant", "Jan"),
        ("father", "Stanisław"),
        ("mother", "Anna"),
        ("fatherGrandpa", "Józef"),
        ("fatherGrandma", "Helena"),
        ("motherGrandpa", "Władysław"),
        ("motherGrandma", "Zofia"),
    ];
    for (role, first_name) in roles {
        bundle.insert(format!("{role}.firstName"), first_name);
        bundle.insert(format!("{role}.lastName"), "Kowalski");
        bundle.insert(format!("{role}.birthPlace"), "Kraków");
    }

    // Act
    let bytes = render_family_tree(&bundle).unwrap();

    // Assert
    assert_eq!(page_count(&bytes), 2);
    let tree = &page_texts(&bytes)[0];
    for first_name in ["Jan Kowalski", "Stanislaw Kowalski", "Wladyslaw Kowalski", "Zofia Kowalski"] {
        assert!(tree.iter().any(|text| text == first_name), "{first_name} has no card");
    }
    assert!(page_contains(&bytes, 1, "Jozef Kowalski (Paternal grandfather)"));
    assert!(page_contains(&bytes, 1, "Birth: in Krakow"));
}

#[test]
fn test_family_tree_lists_overflow_members_on_the_inventory() {
    let mut bundle = FieldBundle::new();
    for role in [
        "applicant",
        "father",
        "mother",
        "fatherGrandpa",
        "fatherGrandma",
        "motherGrandpa",
        "motherGrandma",
        "fatherGreatGrandpa",
        "fatherGreatGrandma",
        "motherGreatGrandpa",
        "motherGreatGrandma",
    ] {
        bundle.insert(format!("{role}.firstName"), role);
    }

    let bytes = render_family_tree(&bundle).unwrap();
    let texts = page_texts(&bytes);

    assert!(!texts[0].iter().any(|text| text == "motherGreatGrandma"));
    assert!(texts[1..]
        .iter()
        .flatten()
        .any(|text| text.starts_with("motherGreatGrandma (")));
}

#[test]
fn test_checklist_reports_statuses_and_progress() {
    let bundle = FieldBundle::new()
        .with("applicant.firstName", "Jan")
        .with("documents.applicantBirthCertificate.status", "verified")
        .with("documents.applicantBirthCertificate.uploadDate", "02.02.2024")
        .with("case.progress", "40%");

    let bytes = render_checklist(&bundle).unwrap();

    assert!(page_contains(&bytes, 0, "Overall progress: 40%"));
    assert!(page_contains(&bytes, 0, "Uploaded: 02.02.2024"));
    assert!(page_contains(&bytes, 0, "[HIGH]"));
}
